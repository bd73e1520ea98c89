//! Entropy estimator - class-presence based approximation.
//!
//! The pool size is the sum of the sizes of the character classes that
//! appear at least once; entropy is `length * log2(pool)`. This is not a
//! Shannon estimate and must not be made "more accurate".

const LOWERCASE_POOL: u32 = 26;
const UPPERCASE_POOL: u32 = 26;
const DIGIT_POOL: u32 = 10;
/// Approximation of the printable symbol space.
const SYMBOL_POOL: u32 = 32;

/// Character classes present in a password.
///
/// Computed once per analysis and shared by the scorer and the
/// suggestion sections.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CharacterClasses {
    /// Number of Unicode scalar values.
    pub length: usize,
    pub lowercase: bool,
    pub uppercase: bool,
    pub digit: bool,
    /// Any non-alphanumeric character, whitespace included.
    pub symbol: bool,
    /// A literal `' '`.
    pub space: bool,
}

impl CharacterClasses {
    /// Scans the password once.
    pub fn from_password(password: &str) -> Self {
        password.chars().fold(Self::default(), |mut classes, c| {
            classes.length += 1;
            classes.lowercase |= c.is_lowercase();
            classes.uppercase |= c.is_uppercase();
            // Any Unicode numeric counts, so '½' and 'Ⅻ' are digits here even
            // though a strict decimal-digit test would reject them.
            classes.digit |= c.is_numeric();
            classes.symbol |= !c.is_alphanumeric();
            classes.space |= c == ' ';
            classes
        })
    }

    /// Sum of the pool contributions of the classes present.
    pub fn pool_size(&self) -> u32 {
        [
            (self.lowercase, LOWERCASE_POOL),
            (self.uppercase, UPPERCASE_POOL),
            (self.digit, DIGIT_POOL),
            (self.symbol, SYMBOL_POOL),
        ]
        .iter()
        .filter(|(present, _)| *present)
        .map(|(_, pool)| pool)
        .sum()
    }

    /// Entropy in bits, rounded to 2 decimal places.
    pub fn entropy_bits(&self) -> f64 {
        let pool = self.pool_size();
        if pool == 0 || self.length == 0 {
            return 0.0;
        }
        round_to_hundredths(self.length as f64 * f64::from(pool).log2())
    }
}

/// Estimates the entropy of `password` in bits.
///
/// Returns `0.0` for the empty string and for strings whose characters
/// fall in no class (e.g. only non-cased letters such as CJK).
pub fn estimate_entropy(password: &str) -> f64 {
    CharacterClasses::from_password(password).entropy_bits()
}

/// Rounds half away from zero.
fn round_to_hundredths(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
