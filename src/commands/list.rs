//! List every contact.

use super::CommandResult;
use crate::messages;
use crate::session::Session;

/// Display all records as an indexed list.
///
/// The listing becomes the new displayed list.
#[derive(Debug, Clone)]
pub struct ListCommand;

impl ListCommand {
    /// The command word.
    pub const COMMAND_WORD: &'static str = "list";

    /// Usage text.
    pub fn usage() -> String {
        format!(
            "{}: Displays all persons in the address book as a list with index numbers.\n\
             \tExample: {}",
            Self::COMMAND_WORD,
            Self::COMMAND_WORD,
        )
    }

    /// Run the listing against the session.
    pub fn execute(&self, session: &mut Session) -> CommandResult {
        let all = session.address_book().all_persons().to_vec();
        CommandResult::with_displayed(messages::persons_listed_overview(all.len()), all)
    }
}
