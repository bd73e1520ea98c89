//! Length section - checks the recommended password length.

use super::SectionResult;
use crate::entropy::CharacterClasses;

/// Length at which no length suggestion is emitted.
pub const RECOMMENDED_LENGTH: usize = 12;

/// Checks if the password reaches the recommended length.
///
/// # Returns
/// - `Some(suggestion)` if password is shorter than 12 characters
/// - `None` if password is long enough
pub fn length_section(classes: &CharacterClasses) -> SectionResult {
    if classes.length < RECOMMENDED_LENGTH {
        return Some("Increase length to 12+ characters");
    }
    None
}
