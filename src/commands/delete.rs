//! Delete a contact addressed by displayed index.

use super::CommandResult;
use crate::messages;
use crate::session::Session;
use rolodex_core::Error as CoreError;

/// Remove the record at a 1-based displayed index from the collection.
#[derive(Debug, Clone)]
pub struct DeleteCommand {
    target_index: i64,
}

impl DeleteCommand {
    /// The command word.
    pub const COMMAND_WORD: &'static str = "delete";

    /// Usage text.
    pub fn usage() -> String {
        format!(
            "{}: Deletes the person identified by the index number used in the last shown listing.\n\
             \tParameters: INDEX\n\
             \tExample: {} 1",
            Self::COMMAND_WORD,
            Self::COMMAND_WORD,
        )
    }

    /// Build a delete for the given displayed index.
    pub fn new(target_index: i64) -> Self {
        DeleteCommand { target_index }
    }

    /// Run the delete against the session.
    pub fn execute(&self, session: &mut Session) -> CommandResult {
        let Some(target) = session.displayed_person(self.target_index).cloned() else {
            return CommandResult::feedback(messages::MESSAGE_INVALID_PERSON_DISPLAYED_INDEX);
        };
        match session.address_book_mut().remove_person(&target) {
            Ok(()) => {
                tracing::debug!(name = %target.name(), "deleted person");
                CommandResult::feedback(format!("Deleted person: {target}"))
            }
            Err(CoreError::PersonNotFound) => {
                CommandResult::feedback(messages::MESSAGE_PERSON_NOT_IN_ADDRESSBOOK)
            }
            Err(other) => CommandResult::feedback(other.to_string()),
        }
    }
}
