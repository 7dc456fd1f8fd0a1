//! Person phone field.

use crate::error::{Error, Result};

/// A person's phone number.
///
/// Phone numbers must be non-empty and consist of ASCII digits only: no
/// separators, no spaces, no leading `+`.
///
/// The `private` flag controls display visibility only. Two phones with the
/// same digits compare equal regardless of their flags.
#[derive(Debug, Clone, Eq)]
pub struct Phone {
    value: String,
    private: bool,
}

impl Phone {
    /// A valid example phone number, used in usage text.
    pub const EXAMPLE: &'static str = "123456789";

    /// Constraint message shown when validation fails.
    pub const MESSAGE_CONSTRAINTS: &'static str =
        "person phone numbers should only contain digits";

    /// Validate and wrap a raw phone number.
    pub fn new(raw: &str, private: bool) -> Result<Self> {
        let trimmed = raw.trim();
        if !Self::is_valid(trimmed) {
            return Err(Error::InvalidFormat {
                field: "phone",
                constraint: Self::MESSAGE_CONSTRAINTS,
            });
        }
        Ok(Phone {
            value: trimmed.to_string(),
            private,
        })
    }

    fn is_valid(candidate: &str) -> bool {
        !candidate.is_empty() && candidate.bytes().all(|b| b.is_ascii_digit())
    }

    /// The digit string.
    pub fn as_str(&self) -> &str {
        &self.value
    }

    /// Whether this field is hidden from ordinary listings.
    pub fn is_private(&self) -> bool {
        self.private
    }
}

// Equality is over the value only; privacy is presentation state.
impl PartialEq for Phone {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl std::fmt::Display for Phone {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn accepts_digit_strings() {
        for valid in ["61234567", "0", "911", Phone::EXAMPLE] {
            assert!(Phone::new(valid, false).is_ok(), "{:?} should be valid", valid);
        }
    }

    #[test]
    fn rejects_listed_invalid_samples() {
        for invalid in ["", " ", "1234-5678", "[]\\[;]", "abc", "a123", "+651234"] {
            assert!(
                Phone::new(invalid, false).is_err(),
                "{:?} should be invalid",
                invalid
            );
        }
    }

    #[test]
    fn equality_ignores_privacy_flag() {
        let public = Phone::new("61234567", false).unwrap();
        let private = Phone::new("61234567", true).unwrap();
        assert_eq!(public, private);
        assert!(!public.is_private());
        assert!(private.is_private());
    }

    proptest! {
        #[test]
        fn digit_strings_are_always_valid(value in "[0-9]{1,12}") {
            prop_assert!(Phone::new(&value, false).is_ok());
        }

        #[test]
        fn strings_containing_a_non_digit_are_invalid(
            prefix in "[0-9]{0,4}",
            bad in "[a-zA-Z+-]",
            suffix in "[0-9a-zA-Z+-]{0,4}",
        ) {
            let value = format!("{prefix}{bad}{suffix}");
            prop_assert!(Phone::new(&value, false).is_err());
        }
    }
}
