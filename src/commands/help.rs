//! Show usage for every command.

use super::{
    AddCommand, ClearCommand, CommandResult, DeleteCommand, ExitCommand, FindCommand, ListCommand,
    UpdateCommand, ViewCommand,
};
use crate::session::Session;

/// Display usage text for the whole command set.
///
/// Also produced for any unrecognized command word.
#[derive(Debug, Clone)]
pub struct HelpCommand;

impl HelpCommand {
    /// The command word.
    pub const COMMAND_WORD: &'static str = "help";

    /// Usage text.
    pub fn usage() -> String {
        format!(
            "{}: Shows program usage instructions.\n\tExample: {}",
            Self::COMMAND_WORD,
            Self::COMMAND_WORD,
        )
    }

    /// Produce the combined usage text.
    pub fn execute(&self, _session: &mut Session) -> CommandResult {
        CommandResult::feedback(
            [
                AddCommand::usage(),
                UpdateCommand::usage(),
                DeleteCommand::usage(),
                ClearCommand::usage(),
                FindCommand::usage(),
                ListCommand::usage(),
                ViewCommand::usage(),
                HelpCommand::usage(),
                ExitCommand::usage(),
            ]
            .join("\n"),
        )
    }
}
