//! Blacklist management module
//!
//! Handles the common password set: a built-in denylist, optionally
//! extended once at startup from an external file.

use std::collections::HashSet;
use std::path::{Path, PathBuf};
use std::sync::{PoisonError, RwLock};
use thiserror::Error;

/// Known-weak passwords, always part of the set.
const BUILTIN_COMMON_PASSWORDS: &[&str] = &[
    "123456",
    "password",
    "123456789",
    "qwerty",
    "abc123",
    "111111",
    "123123",
    "iloveyou",
    "password1",
    "admin",
    "letmein",
];

static EXTRA_COMMON_PASSWORDS: RwLock<Option<HashSet<String>>> = RwLock::new(None);

#[derive(Error, Debug)]
pub enum BlacklistError {
    #[error("Blacklist file not found: {0}")]
    FileNotFound(PathBuf),
    #[error("Failed to read blacklist file: {0}")]
    ReadError(#[from] std::io::Error),
    #[error("Blacklist file is empty")]
    EmptyFile,
}

/// Extends the common password set from a newline separated file.
///
/// Entries are trimmed and lowercased, blank lines are skipped. Only the
/// first successful call loads anything; later calls return the size of
/// the already loaded extension.
///
/// # Errors
///
/// Returns error if:
/// - File does not exist
/// - File cannot be read
/// - File is empty
pub fn init_blacklist_from_path<P: AsRef<Path>>(path: P) -> Result<usize, BlacklistError> {
    {
        let guard = EXTRA_COMMON_PASSWORDS
            .read()
            .unwrap_or_else(PoisonError::into_inner);
        if let Some(set) = guard.as_ref() {
            return Ok(set.len());
        }
    }

    let path = path.as_ref();

    if !path.exists() {
        #[cfg(feature = "tracing")]
        tracing::error!("Blacklist initialization FAILED: FileNotFound {:?}", path);
        return Err(BlacklistError::FileNotFound(path.to_path_buf()));
    }

    let content = std::fs::read_to_string(path)?;

    if content.trim().is_empty() {
        #[cfg(feature = "tracing")]
        tracing::error!("Blacklist initialization FAILED: Empty file {:?}", path);
        return Err(BlacklistError::EmptyFile);
    }

    let set: HashSet<String> = content
        .lines()
        .map(|l| l.trim().to_lowercase())
        .filter(|l| !l.is_empty())
        .collect();

    let count = set.len();
    {
        let mut guard = EXTRA_COMMON_PASSWORDS
            .write()
            .unwrap_or_else(PoisonError::into_inner);
        *guard = Some(set);
    }

    #[cfg(feature = "tracing")]
    tracing::info!("Blacklist extended: {} passwords from {:?}", count, path);

    Ok(count)
}

/// Returns a snapshot of the effective common password set.
pub fn get_blacklist() -> HashSet<String> {
    let mut set: HashSet<String> = BUILTIN_COMMON_PASSWORDS
        .iter()
        .map(|s| (*s).to_string())
        .collect();
    let guard = EXTRA_COMMON_PASSWORDS
        .read()
        .unwrap_or_else(PoisonError::into_inner);
    if let Some(extra) = guard.as_ref() {
        set.extend(extra.iter().cloned());
    }
    set
}

/// Checks if a password is a common password (case-insensitive).
pub fn is_blacklisted(password: &str) -> bool {
    let lowered = password.to_lowercase();
    if BUILTIN_COMMON_PASSWORDS.contains(&lowered.as_str()) {
        return true;
    }
    let guard = EXTRA_COMMON_PASSWORDS
        .read()
        .unwrap_or_else(PoisonError::into_inner);
    guard
        .as_ref()
        .is_some_and(|extra| extra.contains(&lowered))
}

/// Resets the loaded extension for testing purposes.
#[cfg(test)]
pub fn reset_blacklist_for_testing() {
    let mut guard = EXTRA_COMMON_PASSWORDS
        .write()
        .unwrap_or_else(PoisonError::into_inner);
    *guard = None;
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn setup_with_tempfile(passwords: &[&str]) -> NamedTempFile {
        let mut temp_file = NamedTempFile::new().expect("Failed to create temp file");
        for pwd in passwords {
            writeln!(temp_file, "{}", pwd).expect("Failed to write");
        }
        temp_file
    }

    #[test]
    fn test_builtin_entries_are_blacklisted() {
        for pwd in BUILTIN_COMMON_PASSWORDS {
            assert!(is_blacklisted(pwd), "{pwd} should be common");
        }
    }

    #[test]
    fn test_builtin_match_is_case_insensitive() {
        assert!(is_blacklisted("PASSWORD"));
        assert!(is_blacklisted("LetMeIn"));
        assert!(is_blacklisted("AbC123"));
    }

    #[test]
    fn test_near_miss_is_not_blacklisted() {
        assert!(!is_blacklisted("password2"));
        assert!(!is_blacklisted(" password"));
        assert!(!is_blacklisted(""));
    }

    #[test]
    #[serial]
    fn test_init_blacklist_file_not_found() {
        reset_blacklist_for_testing();

        let result = init_blacklist_from_path("/nonexistent/path/blacklist.txt");

        match result {
            Err(BlacklistError::FileNotFound(path)) => {
                assert_eq!(path, PathBuf::from("/nonexistent/path/blacklist.txt"));
            }
            _ => panic!("Expected FileNotFound error"),
        }
    }

    #[test]
    #[serial]
    fn test_init_blacklist_empty_file() {
        reset_blacklist_for_testing();
        let temp_file = setup_with_tempfile(&["", "   "]);

        let result = init_blacklist_from_path(temp_file.path());
        assert!(matches!(result, Err(BlacklistError::EmptyFile)));
    }

    #[test]
    #[serial]
    fn test_init_blacklist_success() {
        reset_blacklist_for_testing();
        let temp_file = setup_with_tempfile(&["Dragon2024", "", "  hunter2  "]);

        let count = init_blacklist_from_path(temp_file.path()).expect("should load");
        assert_eq!(count, 2);

        assert!(is_blacklisted("dragon2024"));
        assert!(is_blacklisted("HUNTER2"));
        assert!(is_blacklisted("password"));

        let set = get_blacklist();
        assert!(set.contains("hunter2"));
        assert!(set.contains("letmein"));
        assert_eq!(set.len(), BUILTIN_COMMON_PASSWORDS.len() + 2);

        reset_blacklist_for_testing();
    }

    #[test]
    #[serial]
    fn test_init_blacklist_is_idempotent() {
        reset_blacklist_for_testing();
        let first = setup_with_tempfile(&["alpha", "beta"]);
        let second = setup_with_tempfile(&["gamma"]);

        assert_eq!(init_blacklist_from_path(first.path()).expect("first load"), 2);
        assert_eq!(init_blacklist_from_path(second.path()).expect("second load"), 2);
        assert!(!is_blacklisted("gamma"));

        reset_blacklist_for_testing();
    }

    #[test]
    #[serial]
    fn test_get_blacklist_without_extension() {
        reset_blacklist_for_testing();
        assert_eq!(get_blacklist().len(), BUILTIN_COMMON_PASSWORDS.len());
    }
}
