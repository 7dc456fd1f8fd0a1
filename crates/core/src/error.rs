//! Error types for the core data model.
//!
//! These are the canonical failures of the address-book domain. Validation
//! failures ([`Error::InvalidFormat`]) occur only while constructing field
//! values; [`Error::DuplicatePerson`] and [`Error::PersonNotFound`] occur
//! only while mutating a collection. Every collection operation that fails
//! leaves the collection unchanged.

use thiserror::Error;

/// All core address-book errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// A raw field value failed its format validator.
    ///
    /// Raised at construction time only; a record that exists has already
    /// passed every validator.
    #[error("{field}: {constraint}")]
    InvalidFormat {
        /// Name of the offending field ("name", "phone", ...).
        field: &'static str,
        /// The constraint the value failed, in user-facing words.
        constraint: &'static str,
    },

    /// The record is equal to an entry already in the collection.
    #[error("person already exists in the collection")]
    DuplicatePerson,

    /// The record is not present in the collection.
    #[error("person not found in the collection")]
    PersonNotFound,
}

/// Result type for core operations.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Check if this is a validation failure.
    pub fn is_invalid_format(&self) -> bool {
        matches!(self, Error::InvalidFormat { .. })
    }
}
