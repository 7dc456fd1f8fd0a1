//! Person name field.

use crate::error::{Error, Result};

/// A person's name in the address book.
///
/// Names must be non-empty after trimming and may contain only alphabetic
/// characters and spaces.
///
/// # Examples
///
/// ```
/// use rolodex_core::Name;
///
/// let name = Name::new("John Doe").unwrap();
/// assert_eq!(name.as_str(), "John Doe");
/// assert!(Name::new("[]\\[;]").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Name {
    full_name: String,
}

impl Name {
    /// A valid example name, used in usage text.
    pub const EXAMPLE: &'static str = "John Doe";

    /// Constraint message shown when validation fails.
    pub const MESSAGE_CONSTRAINTS: &'static str =
        "person names should be spaces or alphabetic characters";

    /// Validate and wrap a raw name. Leading and trailing whitespace is
    /// dropped.
    pub fn new(raw: &str) -> Result<Self> {
        let trimmed = raw.trim();
        if !Self::is_valid(trimmed) {
            return Err(Error::InvalidFormat {
                field: "name",
                constraint: Self::MESSAGE_CONSTRAINTS,
            });
        }
        Ok(Name {
            full_name: trimmed.to_string(),
        })
    }

    /// Check a trimmed candidate against the format rule.
    fn is_valid(candidate: &str) -> bool {
        !candidate.is_empty()
            && candidate.chars().all(|c| c.is_alphabetic() || c == ' ')
    }

    /// The full name as entered (trimmed).
    pub fn as_str(&self) -> &str {
        &self.full_name
    }

    /// The words of the name, in order.
    pub fn words(&self) -> impl Iterator<Item = &str> {
        self.full_name.split_whitespace()
    }
}

impl std::fmt::Display for Name {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.full_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_alphabetic_names_with_spaces() {
        for valid in ["John Doe", "bob", "A Very Long Name Indeed"] {
            assert!(Name::new(valid).is_ok(), "{:?} should be valid", valid);
        }
    }

    #[test]
    fn rejects_empty_and_blank_names() {
        for invalid in ["", " ", "   "] {
            assert!(Name::new(invalid).is_err(), "{:?} should be invalid", invalid);
        }
    }

    #[test]
    fn rejects_disallowed_characters() {
        for invalid in ["[]\\[;]", "john*doe", "j0hn", "a_b"] {
            assert!(Name::new(invalid).is_err(), "{:?} should be invalid", invalid);
        }
    }

    #[test]
    fn trims_surrounding_whitespace() {
        let name = Name::new("  John Doe  ").unwrap();
        assert_eq!(name.as_str(), "John Doe");
    }

    #[test]
    fn failure_names_the_field() {
        let err = Name::new("").unwrap_err();
        assert_eq!(
            err,
            Error::InvalidFormat {
                field: "name",
                constraint: Name::MESSAGE_CONSTRAINTS,
            }
        );
    }
}
