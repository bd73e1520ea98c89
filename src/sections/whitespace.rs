//! Whitespace section - flags literal spaces.

use super::SectionResult;
use crate::entropy::CharacterClasses;

/// Fires on a literal space anywhere in the password. Tabs and other
/// whitespace only count as symbols.
pub fn whitespace_section(classes: &CharacterClasses) -> SectionResult {
    if classes.space {
        return Some("Avoid spaces in passwords (or use predictable separators carefully)");
    }
    None
}
