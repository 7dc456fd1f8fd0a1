//! Person address field.

use crate::error::{Error, Result};

/// A person's address.
///
/// Addresses can be in any format, but must not be blank.
///
/// The `private` flag controls display visibility only and never
/// participates in equality.
#[derive(Debug, Clone, Eq)]
pub struct Address {
    value: String,
    private: bool,
}

impl Address {
    /// A valid example address, used in usage text.
    pub const EXAMPLE: &'static str = "123, some street";

    /// Constraint message shown when validation fails.
    pub const MESSAGE_CONSTRAINTS: &'static str = "person addresses must not be blank";

    /// Validate and wrap a raw address.
    pub fn new(raw: &str, private: bool) -> Result<Self> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(Error::InvalidFormat {
                field: "address",
                constraint: Self::MESSAGE_CONSTRAINTS,
            });
        }
        Ok(Address {
            value: trimmed.to_string(),
            private,
        })
    }

    /// The address text.
    pub fn as_str(&self) -> &str {
        &self.value
    }

    /// Whether this field is hidden from ordinary listings.
    pub fn is_private(&self) -> bool {
        self.private
    }
}

// Equality is over the value only; privacy is presentation state.
impl PartialEq for Address {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl std::fmt::Display for Address {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_any_non_blank_text() {
        for valid in ["395C Ben Road", Address::EXAMPLE, "-", "拉致 1-2-3"] {
            assert!(Address::new(valid, false).is_ok(), "{:?} should be valid", valid);
        }
    }

    #[test]
    fn rejects_blank_addresses() {
        for invalid in ["", " ", "\t "] {
            assert!(
                Address::new(invalid, false).is_err(),
                "{:?} should be invalid",
                invalid
            );
        }
    }

    #[test]
    fn equality_ignores_privacy_flag() {
        let public = Address::new("395C Ben Road", false).unwrap();
        let private = Address::new("395C Ben Road", true).unwrap();
        assert_eq!(public, private);
    }
}
