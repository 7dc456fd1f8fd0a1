//! Stop the command loop.

use super::CommandResult;
use crate::messages;
use crate::session::Session;

/// Signal the front end to stop accepting commands.
///
/// Execution only produces the farewell feedback; the front end watches for
/// this command and ends its loop.
#[derive(Debug, Clone)]
pub struct ExitCommand;

impl ExitCommand {
    /// The command word.
    pub const COMMAND_WORD: &'static str = "exit";

    /// Usage text.
    pub fn usage() -> String {
        format!(
            "{}: Exits the program.\n\tExample: {}",
            Self::COMMAND_WORD,
            Self::COMMAND_WORD,
        )
    }

    /// Produce the farewell feedback.
    pub fn execute(&self, _session: &mut Session) -> CommandResult {
        CommandResult::feedback(messages::MESSAGE_EXITING)
    }
}
