//! Person email field.

use crate::error::{Error, Result};

/// A person's email address.
///
/// An email must be `local@domain` with exactly one `@`. The local part is
/// non-empty and made of word characters and interior dots; the domain is
/// non-empty, made of word characters, dots and hyphens, and contains at
/// least one dot. Neither part may start or end with punctuation.
///
/// The `private` flag controls display visibility only and never
/// participates in equality.
#[derive(Debug, Clone, Eq)]
pub struct Email {
    value: String,
    private: bool,
}

impl Email {
    /// A valid example email, used in usage text.
    pub const EXAMPLE: &'static str = "valid@e.mail";

    /// Constraint message shown when validation fails.
    pub const MESSAGE_CONSTRAINTS: &'static str =
        "person emails should be two parts separated by '@', with a dotted domain";

    /// Validate and wrap a raw email address.
    pub fn new(raw: &str, private: bool) -> Result<Self> {
        let trimmed = raw.trim();
        if !Self::is_valid(trimmed) {
            return Err(Error::InvalidFormat {
                field: "email",
                constraint: Self::MESSAGE_CONSTRAINTS,
            });
        }
        Ok(Email {
            value: trimmed.to_string(),
            private,
        })
    }

    fn is_valid(candidate: &str) -> bool {
        if candidate.chars().filter(|&c| c == '@').count() != 1 {
            return false;
        }
        // Split is total: exactly one '@' was verified above.
        let (local, domain) = match candidate.split_once('@') {
            Some(parts) => parts,
            None => return false,
        };
        Self::is_valid_local(local) && Self::is_valid_domain(domain)
    }

    fn is_word_char(c: char) -> bool {
        c.is_ascii_alphanumeric() || c == '_'
    }

    fn is_valid_local(local: &str) -> bool {
        !local.is_empty()
            && local.chars().all(|c| Self::is_word_char(c) || c == '.')
            && !local.starts_with('.')
            && !local.ends_with('.')
    }

    fn is_valid_domain(domain: &str) -> bool {
        !domain.is_empty()
            && domain.contains('.')
            && domain
                .chars()
                .all(|c| Self::is_word_char(c) || c == '.' || c == '-')
            && !domain.starts_with(&['.', '-'][..])
            && !domain.ends_with(&['.', '-'][..])
    }

    /// The full address.
    pub fn as_str(&self) -> &str {
        &self.value
    }

    /// Whether this field is hidden from ordinary listings.
    pub fn is_private(&self) -> bool {
        self.private
    }
}

// Equality is over the value only; privacy is presentation state.
impl PartialEq for Email {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl std::fmt::Display for Email {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.value)
    }
}
