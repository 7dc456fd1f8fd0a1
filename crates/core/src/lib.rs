//! Core data model for the Rolodex address book.
//!
//! This crate defines the fundamental types used throughout the system:
//! - [`fields`]: validated field newtypes ([`Name`], [`Phone`], [`Email`],
//!   [`Address`], [`Tag`])
//! - [`Person`]: an immutable, fully-validated contact record
//! - [`UniquePersonList`]: an ordered, duplicate-rejecting sequence of records
//! - [`AddressBook`]: the authoritative store of all records
//!
//! Every record that exists has passed validation at construction; there is
//! no way to build a `Person` from unchecked strings. Updates produce a new
//! record, never in-place field mutation.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod address_book;
pub mod error;
pub mod fields;
pub mod person;
pub mod person_list;

pub use address_book::AddressBook;
pub use error::{Error, Result};
pub use fields::{Address, Email, Name, Phone, Tag};
pub use person::Person;
pub use person_list::UniquePersonList;
