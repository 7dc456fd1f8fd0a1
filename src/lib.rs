//! # Rolodex
//!
//! Embedded address-book engine with a command front end.
//!
//! Rolodex keeps validated contact records in an in-memory, duplicate-free
//! collection and manipulates it through discrete commands: add, update,
//! delete, find, list, view, clear. Execution is single-threaded and
//! synchronous; each command runs to completion against an explicitly owned
//! [`Session`] before the next is accepted.
//!
//! ## Quick Start
//!
//! ```
//! use rolodex::prelude::*;
//!
//! let mut session = Session::new();
//!
//! // Parse and execute command text
//! let add = parse_command("add John Doe p/61234567 e/john@doe.com a/395C Ben Road")?;
//! let result = session.execute(&add);
//! assert_eq!(result.feedback, format!("New person added: {}", session.address_book().all_persons()[0]));
//!
//! // List produces the displayed list that index-addressed commands use
//! let list = parse_command("list")?;
//! session.execute(&list);
//!
//! let delete = parse_command("delete 1")?;
//! let result = session.execute(&delete);
//! assert!(result.feedback.starts_with("Deleted person: "));
//! # Ok::<(), rolodex::Error>(())
//! ```
//!
//! ## Addressing
//!
//! The collection has no positional index. Listing and searching commands
//! produce a *displayed list*, and index-addressed commands (update, delete,
//! view) resolve a 1-based displayed index to a record, then look that
//! record up in the collection by equality. The two views can go stale
//! relative to each other; execution reports that instead of guessing.
//!
//! ## Failure model
//!
//! Building a command from raw text validates every field up front; a
//! command that exists is fully validated. Execution-time failures
//! (invalid index, stale target, duplicate replacement) surface as feedback
//! strings and always leave the collection unchanged.

#![warn(missing_docs)]

pub mod commands;
pub mod error;
pub mod messages;
pub mod parse;
pub mod session;
pub mod types;

pub mod prelude;

// Re-export main entry points
pub use commands::{Command, CommandResult};
pub use error::{Error, Result};
pub use parse::parse_command;
pub use session::Session;

// Re-export types
pub use types::*;
