//! Analysis result types.

use std::fmt;

/// Highest score a password can accumulate.
pub const MAX_SCORE: u8 = 7;

/// Strength label shown to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PasswordRating {
    Empty,
    /// Member of the common password set, whatever its composition.
    VeryWeakCommon,
    Weak,
    Medium,
    Strong,
    VeryStrong,
}

impl PasswordRating {
    /// Maps an accumulated score to its rating.
    ///
    /// `Empty` and `VeryWeakCommon` are never produced here; they come
    /// from the analyzer's early returns.
    pub fn from_score(score: u8) -> Self {
        match score {
            0..=2 => Self::Weak,
            3..=4 => Self::Medium,
            5..=6 => Self::Strong,
            _ => Self::VeryStrong,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Empty => "Empty",
            Self::VeryWeakCommon => "Very Weak (common)",
            Self::Weak => "Weak",
            Self::Medium => "Medium",
            Self::Strong => "Strong",
            Self::VeryStrong => "Very Strong",
        }
    }
}

impl fmt::Display for PasswordRating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Result of analyzing one candidate password.
///
/// A pure function of the candidate and the common password set.
#[derive(Debug, Clone, PartialEq)]
pub struct PasswordAnalysis {
    /// Satisfied criteria, `0..=MAX_SCORE`.
    pub score: u8,
    /// Rounded to 2 decimal places.
    pub entropy_bits: f64,
    pub rating: PasswordRating,
    /// Display order; never empty.
    pub suggestions: Vec<String>,
}

impl PasswordAnalysis {
    /// Score as a fraction of [`MAX_SCORE`].
    pub fn ratio(&self) -> f64 {
        f64::from(self.score.min(MAX_SCORE)) / f64::from(MAX_SCORE)
    }
}
