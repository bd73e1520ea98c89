//! Password suggestion sections
//!
//! Each section checks one unmet strength criterion and, when it fires,
//! returns the suggestion to show for it.

mod length;
mod variety;
mod whitespace;

pub use length::length_section;
pub use variety::{digit_section, lowercase_section, symbol_section, uppercase_section};
pub use whitespace::whitespace_section;

use crate::entropy::CharacterClasses;

/// Result type for section functions.
/// - `Some(suggestion)` - Criterion unmet
/// - `None` - Criterion met
pub type SectionResult = Option<&'static str>;

/// Signature shared by all sections.
pub type Section = fn(&CharacterClasses) -> SectionResult;
