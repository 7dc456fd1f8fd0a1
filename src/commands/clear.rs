//! Clear the address book.

use super::CommandResult;
use crate::messages;
use crate::session::Session;

/// Remove every record from the collection.
#[derive(Debug, Clone)]
pub struct ClearCommand;

impl ClearCommand {
    /// The command word.
    pub const COMMAND_WORD: &'static str = "clear";

    /// Usage text.
    pub fn usage() -> String {
        format!(
            "{}: Clears address book permanently.\n\tExample: {}",
            Self::COMMAND_WORD,
            Self::COMMAND_WORD,
        )
    }

    /// Run the clear against the session.
    pub fn execute(&self, session: &mut Session) -> CommandResult {
        session.address_book_mut().clear();
        tracing::debug!("cleared address book");
        CommandResult::feedback(messages::MESSAGE_ADDRESSBOOK_CLEARED)
    }
}
