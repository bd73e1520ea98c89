//! Password generator - random strong password suggestions.

use rand::rngs::OsRng;
use rand::seq::SliceRandom;
use rand::{CryptoRng, Rng};
use secrecy::SecretString;
use thiserror::Error;

pub const LOWERCASE: &[u8] = b"abcdefghijklmnopqrstuvwxyz";
pub const UPPERCASE: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";
pub const DIGITS: &[u8] = b"0123456789";
pub const SYMBOLS: &[u8] = b"!@#$%^&*()-_=+[]{};:,.<>/?";

/// Length used by the interactive suggest command.
pub const DEFAULT_LENGTH: usize = 16;

/// One character per required class.
pub const MIN_LENGTH: usize = 4;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GeneratorError {
    #[error("Requested password length {requested} is below the minimum of {minimum}")]
    TooShort { requested: usize, minimum: usize },
}

/// Generates a password of exactly `length` characters using the OS RNG.
///
/// The result always holds at least one lowercase letter, one uppercase
/// letter, one digit and one symbol from [`SYMBOLS`].
///
/// # Errors
///
/// Returns [`GeneratorError::TooShort`] if `length < MIN_LENGTH`.
pub fn generate_password(length: usize) -> Result<SecretString, GeneratorError> {
    generate_password_with(&mut OsRng, length)
}

/// Same as [`generate_password`] with a caller supplied generator.
pub fn generate_password_with<R>(rng: &mut R, length: usize) -> Result<SecretString, GeneratorError>
where
    R: Rng + CryptoRng + ?Sized,
{
    if length < MIN_LENGTH {
        #[cfg(feature = "tracing")]
        tracing::warn!("Rejected password generation of length {}", length);
        return Err(GeneratorError::TooShort {
            requested: length,
            minimum: MIN_LENGTH,
        });
    }

    let all: Vec<u8> = [LOWERCASE, UPPERCASE, DIGITS, SYMBOLS].concat();

    let mut chars: Vec<u8> = Vec::with_capacity(length);
    for class in [LOWERCASE, UPPERCASE, DIGITS, SYMBOLS] {
        chars.push(pick(rng, class));
    }
    while chars.len() < length {
        chars.push(pick(rng, &all));
    }
    chars.shuffle(rng);

    #[cfg(feature = "tracing")]
    tracing::debug!("Generated password of length {}", length);

    let password: String = chars.into_iter().map(char::from).collect();
    Ok(SecretString::new(password.into()))
}

fn pick<R: Rng + ?Sized>(rng: &mut R, set: &[u8]) -> u8 {
    set[rng.gen_range(0..set.len())]
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use secrecy::ExposeSecret;
    use std::collections::HashSet;

    fn assert_has_every_class(pwd: &str) {
        assert!(pwd.bytes().any(|b| LOWERCASE.contains(&b)), "no lowercase in {pwd}");
        assert!(pwd.bytes().any(|b| UPPERCASE.contains(&b)), "no uppercase in {pwd}");
        assert!(pwd.bytes().any(|b| DIGITS.contains(&b)), "no digit in {pwd}");
        assert!(pwd.bytes().any(|b| SYMBOLS.contains(&b)), "no symbol in {pwd}");
    }

    #[test]
    fn test_generate_default_length() {
        let pwd = generate_password(DEFAULT_LENGTH).expect("length 16 is valid");
        assert_eq!(pwd.expose_secret().chars().count(), DEFAULT_LENGTH);
        assert_has_every_class(pwd.expose_secret());
    }

    #[test]
    fn test_generate_minimum_length() {
        let pwd = generate_password(MIN_LENGTH).expect("length 4 is valid");
        assert_eq!(pwd.expose_secret().len(), 4);
        assert_has_every_class(pwd.expose_secret());
    }

    #[test]
    fn test_generate_too_short() {
        for length in 0..MIN_LENGTH {
            assert_eq!(
                generate_password(length).err(),
                Some(GeneratorError::TooShort {
                    requested: length,
                    minimum: MIN_LENGTH
                })
            );
        }
    }

    #[test]
    fn test_generate_only_known_characters() {
        let pwd = generate_password(64).expect("valid length");
        let all: HashSet<u8> = [LOWERCASE, UPPERCASE, DIGITS, SYMBOLS].concat().into_iter().collect();
        assert!(pwd.expose_secret().bytes().all(|b| all.contains(&b)));
    }

    #[test]
    fn test_generate_repeatedly_distinct() {
        let mut seen = HashSet::new();
        for _ in 0..1000 {
            let pwd = generate_password(DEFAULT_LENGTH).expect("valid length");
            assert_eq!(pwd.expose_secret().len(), DEFAULT_LENGTH);
            assert_has_every_class(pwd.expose_secret());
            seen.insert(pwd.expose_secret().to_string());
        }
        assert_eq!(seen.len(), 1000);
    }

    #[test]
    fn test_generate_seeded_is_deterministic() {
        let first = generate_password_with(&mut StdRng::seed_from_u64(7), 20).expect("valid");
        let second = generate_password_with(&mut StdRng::seed_from_u64(7), 20).expect("valid");
        assert_eq!(first.expose_secret(), second.expose_secret());
    }

    #[test]
    fn test_required_characters_are_not_pinned_to_the_front() {
        // With a fixed prefix the first char would always be lowercase
        let mut rng = StdRng::seed_from_u64(42);
        let leading_lowercase = (0..200)
            .filter_map(|_| generate_password_with(&mut rng, DEFAULT_LENGTH).ok())
            .filter(|pwd| pwd.expose_secret().bytes().next().is_some_and(|b| LOWERCASE.contains(&b)))
            .count();
        assert!(leading_lowercase < 200);
    }
}
