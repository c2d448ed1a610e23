//! Username Value Object
//!
//! Usernames are unique per user. Uniqueness is checked against the
//! canonical form (NFKC-normalized, lowercased) so visually identical
//! names cannot coexist; the original spelling is kept for display.

use std::fmt;
use thiserror::Error;
use unicode_normalization::UnicodeNormalization;

/// Minimum username length in characters.
pub const USERNAME_MIN_LENGTH: usize = 6;

/// Maximum username length in characters.
pub const USERNAME_MAX_LENGTH: usize = 10;

/// Username validation errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UsernameError {
    #[error("Username must not be blank")]
    Blank,

    #[error("Username must be at least {min} characters (got {actual})")]
    TooShort { min: usize, actual: usize },

    #[error("Username must be at most {max} characters (got {actual})")]
    TooLong { max: usize, actual: usize },

    #[error("Username contains invalid whitespace or control characters")]
    InvalidCharacter,
}

/// A validated username with its canonical form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Username {
    original: String,
    canonical: String,
}

impl Username {
    /// Validate and canonicalize a raw username.
    pub fn new(raw: impl AsRef<str>) -> Result<Self, UsernameError> {
        let original = raw.as_ref().trim().to_string();

        if original.is_empty() {
            return Err(UsernameError::Blank);
        }

        if original
            .chars()
            .any(|ch| ch.is_whitespace() || ch.is_control())
        {
            return Err(UsernameError::InvalidCharacter);
        }

        let len = original.chars().count();
        if len < USERNAME_MIN_LENGTH {
            return Err(UsernameError::TooShort {
                min: USERNAME_MIN_LENGTH,
                actual: len,
            });
        }
        if len > USERNAME_MAX_LENGTH {
            return Err(UsernameError::TooLong {
                max: USERNAME_MAX_LENGTH,
                actual: len,
            });
        }

        let canonical: String = original.nfkc().collect::<String>().to_lowercase();

        Ok(Self {
            original,
            canonical,
        })
    }

    /// Rehydrate from database columns without re-validating.
    ///
    /// Stored values were validated on the way in.
    pub fn from_db(original: impl Into<String>, canonical: impl Into<String>) -> Self {
        Self {
            original: original.into(),
            canonical: canonical.into(),
        }
    }

    /// The spelling the user chose.
    pub fn original(&self) -> &str {
        &self.original
    }

    /// NFKC-lowercased form used for uniqueness checks.
    pub fn canonical(&self) -> &str {
        &self.canonical
    }
}

impl fmt::Display for Username {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.original)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_username() {
        let name = Username::new("Alice_01").unwrap();
        assert_eq!(name.original(), "Alice_01");
        assert_eq!(name.canonical(), "alice_01");
    }

    #[test]
    fn test_length_bounds() {
        assert!(matches!(
            Username::new("abc").unwrap_err(),
            UsernameError::TooShort { actual: 3, .. }
        ));
        assert!(matches!(
            Username::new("abcdefghijk").unwrap_err(),
            UsernameError::TooLong { actual: 11, .. }
        ));
        assert!(Username::new("abcdef").is_ok());
        assert!(Username::new("abcdefghij").is_ok());
    }

    #[test]
    fn test_blank_and_whitespace() {
        assert_eq!(Username::new("   ").unwrap_err(), UsernameError::Blank);
        assert_eq!(
            Username::new("ali ce1").unwrap_err(),
            UsernameError::InvalidCharacter
        );
    }

    #[test]
    fn test_canonical_collapses_case_and_width() {
        // Full-width letters NFKC-fold to their ASCII forms
        let wide = Username::new("ＡＢＣＤＥＦ").unwrap();
        let ascii = Username::new("abcdef").unwrap();
        assert_eq!(wide.canonical(), ascii.canonical());
        assert_ne!(wide.original(), ascii.original());
    }

    #[test]
    fn test_display_uses_original() {
        let name = Username::new("MixedCase1").unwrap();
        assert_eq!(name.to_string(), "MixedCase1");
    }
}
