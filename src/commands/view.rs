//! View one contact's details.

use super::CommandResult;
use crate::messages;
use crate::session::Session;

/// Display the details of the record at a 1-based displayed index.
///
/// `view` hides private fields; `viewall` shows everything. Both verify the
/// displayed entry still exists in the collection before rendering it.
#[derive(Debug, Clone)]
pub struct ViewCommand {
    target_index: i64,
    show_private: bool,
}

impl ViewCommand {
    /// The command word for the non-private view.
    pub const COMMAND_WORD: &'static str = "view";

    /// The command word for the all-fields view.
    pub const COMMAND_WORD_ALL: &'static str = "viewall";

    /// Usage text for both forms.
    pub fn usage() -> String {
        format!(
            "{view}: Views the non-private details of the person identified by the index number \
             used in the last shown listing.\n\
             \tParameters: INDEX\n\
             \tExample: {view} 1\n\
             {viewall}: Views all details of the person identified by the index number used in \
             the last shown listing.\n\
             \tParameters: INDEX\n\
             \tExample: {viewall} 1",
            view = Self::COMMAND_WORD,
            viewall = Self::COMMAND_WORD_ALL,
        )
    }

    /// Build a view for the given displayed index.
    pub fn new(target_index: i64, show_private: bool) -> Self {
        ViewCommand {
            target_index,
            show_private,
        }
    }

    /// Run the view against the session.
    pub fn execute(&self, session: &mut Session) -> CommandResult {
        let Some(target) = session.displayed_person(self.target_index) else {
            return CommandResult::feedback(messages::MESSAGE_INVALID_PERSON_DISPLAYED_INDEX);
        };
        if !session.address_book().contains_person(target) {
            return CommandResult::feedback(messages::MESSAGE_PERSON_NOT_IN_ADDRESSBOOK);
        }
        let details = if self.show_private {
            target.as_text_show_all()
        } else {
            target.as_text_hide_private()
        };
        CommandResult::feedback(format!("Viewing person: {details}"))
    }
}
