//! Contact tag field.

use crate::error::{Error, Result};

/// A tag attached to a contact record.
///
/// Tag names must be non-empty and alphanumeric. Tags are kept in an
/// ordered set on the record; insertion order is irrelevant.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct Tag {
    name: String,
}

impl Tag {
    /// A valid example tag, used in usage text.
    pub const EXAMPLE: &'static str = "friend";

    /// Constraint message shown when validation fails.
    pub const MESSAGE_CONSTRAINTS: &'static str = "tag names should be alphanumeric";

    /// Validate and wrap a raw tag name.
    pub fn new(raw: &str) -> Result<Self> {
        let trimmed = raw.trim();
        if !Self::is_valid(trimmed) {
            return Err(Error::InvalidFormat {
                field: "tag",
                constraint: Self::MESSAGE_CONSTRAINTS,
            });
        }
        Ok(Tag {
            name: trimmed.to_string(),
        })
    }

    fn is_valid(candidate: &str) -> bool {
        !candidate.is_empty() && candidate.chars().all(char::is_alphanumeric)
    }

    /// The tag name.
    pub fn as_str(&self) -> &str {
        &self.name
    }
}

impl std::fmt::Display for Tag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}]", self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_alphanumeric_tags() {
        for valid in ["friend", "owesMoney", "tag1", Tag::EXAMPLE] {
            assert!(Tag::new(valid).is_ok(), "{:?} should be valid", valid);
        }
    }

    #[test]
    fn rejects_listed_invalid_samples() {
        for invalid in ["", " ", "'", "[]\\[;]", "two words"] {
            assert!(Tag::new(invalid).is_err(), "{:?} should be invalid", invalid);
        }
    }

    #[test]
    fn renders_in_brackets() {
        let tag = Tag::new("friend").unwrap();
        assert_eq!(tag.to_string(), "[friend]");
    }
}
