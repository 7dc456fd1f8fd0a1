//! Convenient imports for Rolodex.
//!
//! This module re-exports the most commonly used types so you can get
//! started with a single import:
//!
//! ```
//! use rolodex::prelude::*;
//!
//! let mut session = Session::new();
//! let command = parse_command("list")?;
//! session.execute(&command);
//! # Ok::<(), rolodex::Error>(())
//! ```

// Session and command layer
pub use crate::commands::{
    AddCommand, ClearCommand, Command, CommandResult, DeleteCommand, ExitCommand, FindCommand,
    HelpCommand, ListCommand, UpdateCommand, ViewCommand,
};
pub use crate::parse::parse_command;
pub use crate::session::Session;

// Error handling
pub use crate::error::{Error, Result};

// Feedback strings
pub use crate::messages;

// Core types
pub use crate::types::{
    Address, AddressBook, Email, Name, Person, Phone, StorageFile, Tag, UniquePersonList,
    DISPLAYED_INDEX_OFFSET,
};
