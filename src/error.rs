//! Unified error types for Rolodex.
//!
//! This module wraps the member-crate errors and presents one public error
//! type. Display strings double as user-facing feedback, so the execution
//! variants carry the same fixed messages as [`crate::messages`].

use thiserror::Error;

/// All Rolodex errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// A raw field value failed validation at command construction.
    #[error("{field}: {constraint}")]
    InvalidFormat {
        /// Name of the offending field.
        field: &'static str,
        /// The constraint the value failed.
        constraint: &'static str,
    },

    /// Command text did not match the command's expected format.
    #[error("Invalid command format! \n{usage}")]
    InvalidCommand {
        /// Usage text of the command the input resembled.
        usage: String,
    },

    /// The record collides with an existing entry.
    #[error("This person already exists in the address book")]
    DuplicatePerson,

    /// The addressed record is not in the collection.
    #[error("Person could not be found in address book")]
    PersonNotFound,

    /// Snapshot persistence failure.
    #[error("storage error: {0}")]
    Storage(String),
}

/// Result type for Rolodex operations.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Check if this is a validation failure.
    pub fn is_invalid_format(&self) -> bool {
        matches!(self, Error::InvalidFormat { .. })
    }
}

// Convert from core data-model errors
impl From<rolodex_core::Error> for Error {
    fn from(e: rolodex_core::Error) -> Self {
        use rolodex_core::Error as CoreError;
        match e {
            CoreError::InvalidFormat { field, constraint } => {
                Error::InvalidFormat { field, constraint }
            }
            CoreError::DuplicatePerson => Error::DuplicatePerson,
            CoreError::PersonNotFound => Error::PersonNotFound,
        }
    }
}

// Convert from storage errors
impl From<rolodex_storage::Error> for Error {
    fn from(e: rolodex_storage::Error) -> Self {
        Error::Storage(e.to_string())
    }
}
