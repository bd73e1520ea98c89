//! Password strength meter library
//!
//! Live password analysis for an interactive terminal meter: a
//! class-presence entropy estimate, a 0-7 score with its rating and
//! ordered improvement suggestions, plus a generator for strong
//! suggested passwords.
//!
//! # Features
//!
//! - `tui` (default): Enables the interactive terminal session
//! - `tracing`: Enables logging via tracing crate
//!
//! # Example
//!
//! ```rust
//! use pwd_dragon::{analyze_password, generate_password, PasswordRating};
//! use secrecy::ExposeSecret;
//!
//! let analysis = analyze_password("Tr0ub4dor&3");
//! assert_eq!(analysis.entropy_bits, 72.1);
//! assert_eq!(analysis.rating, PasswordRating::Strong);
//!
//! let suggestion = generate_password(16).expect("16 is long enough");
//! assert_eq!(suggestion.expose_secret().len(), 16);
//! ```

// Internal modules
mod blacklist;
mod entropy;
mod evaluator;
mod generator;
mod sections;
mod types;

pub mod config;

#[cfg(feature = "tui")]
pub mod session;

// Public API
pub use blacklist::{BlacklistError, get_blacklist, init_blacklist_from_path, is_blacklisted};
pub use config::{Config, ConfigError};
pub use entropy::{CharacterClasses, estimate_entropy};
pub use evaluator::{analyze_password, evaluate_password_strength};
pub use generator::{
    DEFAULT_LENGTH, GeneratorError, MIN_LENGTH, SYMBOLS, generate_password, generate_password_with,
};
pub use types::{MAX_SCORE, PasswordAnalysis, PasswordRating};
