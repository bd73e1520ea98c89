//! Character variety sections - uppercase, lowercase, digits, symbols.

use super::SectionResult;
use crate::entropy::CharacterClasses;

/// Checks for at least one uppercase letter.
///
/// # Returns
/// - `Some(suggestion)` if no uppercase letter is present
/// - `None` if an uppercase letter is present
pub fn uppercase_section(classes: &CharacterClasses) -> SectionResult {
    (!classes.uppercase).then_some("Add uppercase letters (A-Z)")
}

/// Checks for at least one lowercase letter.
///
/// # Returns
/// - `Some(suggestion)` if no lowercase letter is present
/// - `None` if a lowercase letter is present
pub fn lowercase_section(classes: &CharacterClasses) -> SectionResult {
    (!classes.lowercase).then_some("Add lowercase letters (a-z)")
}

/// Checks for at least one digit.
///
/// # Returns
/// - `Some(suggestion)` if no numeric character is present
/// - `None` if a numeric character is present
pub fn digit_section(classes: &CharacterClasses) -> SectionResult {
    (!classes.digit).then_some("Add digits (0-9)")
}

/// Checks for at least one symbol.
///
/// # Returns
/// - `Some(suggestion)` if every character is alphanumeric
/// - `None` if any non-alphanumeric character (space included) is present
pub fn symbol_section(classes: &CharacterClasses) -> SectionResult {
    (!classes.symbol).then_some("Include symbols (e.g. ! @ # $ %)")
}
