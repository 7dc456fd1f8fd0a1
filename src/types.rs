//! Public types for the Rolodex unified API.
//!
//! This module re-exports types from member crates with a clean public
//! interface.

// Core data model
pub use rolodex_core::{Address, AddressBook, Email, Name, Person, Phone, Tag, UniquePersonList};

// Snapshot persistence
pub use rolodex_storage::StorageFile;

/// Offset between user-facing 1-based displayed indices and 0-based
/// sequence positions.
pub const DISPLAYED_INDEX_OFFSET: usize = 1;
