//! Password strength evaluator - main analysis logic.

use secrecy::{ExposeSecret, SecretString};

use crate::blacklist::is_blacklisted;
use crate::entropy::CharacterClasses;
use crate::sections::{
    Section, digit_section, length_section, lowercase_section, symbol_section,
    uppercase_section, whitespace_section,
};
use crate::types::{PasswordAnalysis, PasswordRating};

/// Entropy above which a password earns the entropy point.
const ENTROPY_THRESHOLD_BITS: f64 = 60.0;

const EMPTY_HINT: &str = "Type a password";

const COMMON_SUGGESTIONS: [&str; 3] = [
    "Use a unique password not in common lists",
    "Increase length",
    "Add symbols and mixed case",
];

const PASSPHRASE_SUGGESTION: &str = "Looks good, consider using a passphrase for extra entropy";

/// Suggestion sections, in display order.
const SECTIONS: [(&str, Section); 6] = [
    ("length", length_section),
    ("uppercase", uppercase_section),
    ("lowercase", lowercase_section),
    ("digit", digit_section),
    ("symbol", symbol_section),
    ("whitespace", whitespace_section),
];

/// Evaluates a secret-wrapped password.
///
/// See [`analyze_password`].
pub fn evaluate_password_strength(password: &SecretString) -> PasswordAnalysis {
    analyze_password(password.expose_secret())
}

/// Analyzes a candidate password.
///
/// Total over all inputs: empty strings, common passwords and arbitrary
/// Unicode all produce a well-formed [`PasswordAnalysis`] whose
/// suggestion list is never empty.
pub fn analyze_password(password: &str) -> PasswordAnalysis {
    if password.is_empty() {
        return PasswordAnalysis {
            score: 0,
            entropy_bits: 0.0,
            rating: PasswordRating::Empty,
            suggestions: vec![EMPTY_HINT.to_string()],
        };
    }

    let classes = CharacterClasses::from_password(password);
    let entropy_bits = classes.entropy_bits();

    // Takes priority over every scoring rule
    if is_blacklisted(password) {
        return PasswordAnalysis {
            score: 0,
            entropy_bits,
            rating: PasswordRating::VeryWeakCommon,
            suggestions: COMMON_SUGGESTIONS.iter().map(|s| s.to_string()).collect(),
        };
    }

    let score = accumulate_score(&classes, entropy_bits);

    let mut suggestions: Vec<String> = Vec::new();
    for (_section_name, section_fn) in SECTIONS {
        if let Some(suggestion) = section_fn(&classes) {
            #[cfg(feature = "tracing")]
            tracing::trace!("section {} fired", _section_name);
            suggestions.push(suggestion.to_string());
        }
    }
    if suggestions.is_empty() {
        suggestions.push(PASSPHRASE_SUGGESTION.to_string());
    }

    PasswordAnalysis {
        score,
        entropy_bits,
        rating: PasswordRating::from_score(score),
        suggestions,
    }
}

/// One point per satisfied criterion; the two length checks stack.
fn accumulate_score(classes: &CharacterClasses, entropy_bits: f64) -> u8 {
    [
        classes.length >= 8,
        classes.length >= 12,
        classes.lowercase,
        classes.uppercase,
        classes.digit,
        classes.symbol,
        entropy_bits > ENTROPY_THRESHOLD_BITS,
    ]
    .iter()
    .filter(|&&met| met)
    .count() as u8
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::MAX_SCORE;
    use proptest::prelude::*;
    use serial_test::serial;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_evaluate_empty_password() {
        let analysis = analyze_password("");

        assert_eq!(analysis.score, 0);
        assert_eq!(analysis.entropy_bits, 0.0);
        assert_eq!(analysis.rating, PasswordRating::Empty);
        assert_eq!(analysis.suggestions, vec!["Type a password".to_string()]);
    }

    #[test]
    fn test_evaluate_common_password() {
        let analysis = analyze_password("password");

        assert_eq!(analysis.score, 0);
        assert_eq!(analysis.rating, PasswordRating::VeryWeakCommon);
        assert_eq!(analysis.entropy_bits, 37.6);
        assert_eq!(analysis.suggestions.len(), 3);
        assert!(analysis.suggestions[0].contains("common"));
    }

    #[test]
    fn test_evaluate_common_password_any_case() {
        let analysis = analyze_password("PassWord1");
        assert_eq!(analysis.rating, PasswordRating::VeryWeakCommon);
        assert_eq!(analysis.score, 0);
    }

    #[test]
    fn test_evaluate_troubador() {
        // length>=8, lower, upper, digit, symbol, entropy 72.1 > 60
        let analysis = analyze_password("Tr0ub4dor&3");

        assert_eq!(analysis.entropy_bits, 72.1);
        assert_eq!(analysis.score, 6);
        assert_eq!(analysis.rating, PasswordRating::Strong);
        assert_eq!(
            analysis.suggestions,
            vec!["Increase length to 12+ characters".to_string()]
        );
    }

    #[test]
    fn test_evaluate_very_strong_password() {
        let analysis = analyze_password("Tr0ub4dor&3xyz");

        assert_eq!(analysis.score, MAX_SCORE);
        assert_eq!(analysis.rating, PasswordRating::VeryStrong);
        assert_eq!(
            analysis.suggestions,
            vec!["Looks good, consider using a passphrase for extra entropy".to_string()]
        );
    }

    #[test]
    fn test_evaluate_weak_short_password() {
        // lower only: 1 point
        let analysis = analyze_password("abc");

        assert_eq!(analysis.score, 1);
        assert_eq!(analysis.rating, PasswordRating::Weak);
        assert_eq!(
            analysis.suggestions,
            vec![
                "Increase length to 12+ characters".to_string(),
                "Add uppercase letters (A-Z)".to_string(),
                "Add digits (0-9)".to_string(),
                "Include symbols (e.g. ! @ # $ %)".to_string(),
            ]
        );
    }

    #[test]
    fn test_evaluate_medium_password() {
        // length>=8, lower, upper, digit: 4 points, 10 * log2(62) = 59.54
        let analysis = analyze_password("MyPass1234");

        assert_eq!(analysis.entropy_bits, 59.54);
        assert_eq!(analysis.score, 4);
        assert_eq!(analysis.rating, PasswordRating::Medium);
    }

    #[test]
    fn test_entropy_threshold_is_strict() {
        // 10 digits + 2 lowercase: 12 * log2(36) = 62.04 > 60
        let above = analyze_password("1234567890ab");
        assert_eq!(above.score, 5);

        // 18 digits: 18 * log2(10) = 59.79
        let below = analyze_password("123456789012345678");
        assert_eq!(below.entropy_bits, 59.79);
        assert_eq!(below.score, 3);
    }

    #[test]
    fn test_space_suggestion_order() {
        let analysis = analyze_password("Correct Horse 9");

        assert_eq!(
            analysis.suggestions,
            vec!["Avoid spaces in passwords (or use predictable separators carefully)".to_string()]
        );
        assert_eq!(analysis.score, MAX_SCORE);
    }

    #[test]
    fn test_space_only_password() {
        let analysis = analyze_password(" ");

        assert_eq!(analysis.score, 1);
        assert_eq!(analysis.rating, PasswordRating::Weak);
        assert_eq!(analysis.entropy_bits, 5.0);
        assert_eq!(
            analysis.suggestions.last().map(String::as_str),
            Some("Avoid spaces in passwords (or use predictable separators carefully)")
        );
        assert_eq!(analysis.suggestions.len(), 5);
    }

    #[test]
    fn test_uncased_unicode_password() {
        let analysis = analyze_password("密码密码密码密码");

        assert_eq!(analysis.entropy_bits, 0.0);
        assert_eq!(analysis.score, 1);
        assert!(!analysis.suggestions.is_empty());
    }

    #[test]
    fn test_evaluate_secret_string() {
        let pwd = SecretString::new("Tr0ub4dor&3".to_string().into());
        assert_eq!(
            evaluate_password_strength(&pwd),
            analyze_password("Tr0ub4dor&3")
        );
    }

    #[test]
    #[serial]
    fn test_evaluate_loaded_common_password() {
        crate::blacklist::reset_blacklist_for_testing();
        let mut temp_file = NamedTempFile::new().expect("Failed to create temp file");
        writeln!(temp_file, "Summer2024!Summer").expect("Failed to write");
        crate::blacklist::init_blacklist_from_path(temp_file.path()).expect("should load");

        let analysis = analyze_password("SUMMER2024!summer");
        assert_eq!(analysis.rating, PasswordRating::VeryWeakCommon);
        assert_eq!(analysis.score, 0);
        assert!(analysis.entropy_bits > 60.0);

        crate::blacklist::reset_blacklist_for_testing();
    }

    proptest! {
        #[test]
        fn score_is_bounded(password in "\\PC{1,40}") {
            let analysis = analyze_password(&password);
            prop_assert!(analysis.score <= MAX_SCORE);
        }

        #[test]
        fn suggestions_never_empty(password in "\\PC{0,40}") {
            prop_assert!(!analyze_password(&password).suggestions.is_empty());
        }

        #[test]
        fn rating_follows_score(password in "[a-zA-Z0-9 !@#]{1,30}") {
            let analysis = analyze_password(&password);
            if analysis.rating != PasswordRating::VeryWeakCommon {
                prop_assert_eq!(analysis.rating, PasswordRating::from_score(analysis.score));
            }
        }
    }
}
