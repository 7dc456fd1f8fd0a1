//! The command layer.
//!
//! One struct per command. Commands that take contact data are constructed
//! either from raw strings (validating every field immediately, so an
//! invalid command is never built) or from an already-validated [`Person`]
//! (infallible). Execution runs a single transition against a
//! [`Session`](crate::Session) and reports the outcome as a
//! [`CommandResult`]; execution never panics and never leaves the
//! collection partially mutated.

pub mod add;
pub mod clear;
pub mod delete;
pub mod exit;
pub mod find;
pub mod help;
pub mod list;
pub mod update;
pub mod view;

pub use add::AddCommand;
pub use clear::ClearCommand;
pub use delete::DeleteCommand;
pub use exit::ExitCommand;
pub use find::FindCommand;
pub use help::HelpCommand;
pub use list::ListCommand;
pub use update::UpdateCommand;
pub use view::ViewCommand;

use std::collections::BTreeSet;

use crate::error::Result;
use crate::session::Session;
use crate::types::{Address, Email, Name, Person, Phone, Tag};

/// Outcome of executing one command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandResult {
    /// Feedback shown to the user.
    pub feedback: String,
    /// Records produced for display. When present, the session records this
    /// as the new displayed list.
    pub displayed: Option<Vec<Person>>,
}

impl CommandResult {
    /// A result carrying feedback only.
    pub fn feedback(feedback: impl Into<String>) -> Self {
        CommandResult {
            feedback: feedback.into(),
            displayed: None,
        }
    }

    /// A result carrying feedback plus a new displayed list.
    pub fn with_displayed(feedback: impl Into<String>, displayed: Vec<Person>) -> Self {
        CommandResult {
            feedback: feedback.into(),
            displayed: Some(displayed),
        }
    }
}

/// A parsed, fully-validated command ready for execution.
#[derive(Debug, Clone)]
pub enum Command {
    /// Add a record to the collection.
    Add(AddCommand),
    /// Replace the record at a displayed index.
    Update(UpdateCommand),
    /// Remove the record at a displayed index.
    Delete(DeleteCommand),
    /// Empty the collection.
    Clear(ClearCommand),
    /// Search names by keyword.
    Find(FindCommand),
    /// Display every record.
    List(ListCommand),
    /// Display one record's details.
    View(ViewCommand),
    /// Show usage for every command.
    Help(HelpCommand),
    /// Stop the command loop.
    Exit(ExitCommand),
}

impl Command {
    /// Execute against the given session.
    pub fn execute(&self, session: &mut Session) -> CommandResult {
        match self {
            Command::Add(cmd) => cmd.execute(session),
            Command::Update(cmd) => cmd.execute(session),
            Command::Delete(cmd) => cmd.execute(session),
            Command::Clear(cmd) => cmd.execute(session),
            Command::Find(cmd) => cmd.execute(session),
            Command::List(cmd) => cmd.execute(session),
            Command::View(cmd) => cmd.execute(session),
            Command::Help(cmd) => cmd.execute(session),
            Command::Exit(cmd) => cmd.execute(session),
        }
    }

    /// Whether this command asks the front end to stop.
    pub fn is_exit(&self) -> bool {
        matches!(self, Command::Exit(_))
    }
}

/// Validate raw field strings into a record, failing fast at the first
/// offending field.
#[allow(clippy::too_many_arguments)]
pub(crate) fn build_person(
    name: &str,
    phone: &str,
    phone_private: bool,
    email: &str,
    email_private: bool,
    address: &str,
    address_private: bool,
    tags: &[String],
) -> Result<Person> {
    let name = Name::new(name)?;
    let phone = Phone::new(phone, phone_private)?;
    let email = Email::new(email, email_private)?;
    let address = Address::new(address, address_private)?;
    let mut tag_set = BTreeSet::new();
    for raw in tags {
        tag_set.insert(Tag::new(raw)?);
    }
    Ok(Person::new(name, phone, email, address, tag_set))
}
