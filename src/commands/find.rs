//! Find contacts by name keyword.

use super::CommandResult;
use crate::messages;
use crate::session::Session;
use crate::types::Person;

/// List every record whose name contains any of the given keywords as a
/// whole word. Matching is case-sensitive.
///
/// The matches become the new displayed list, so index-addressed commands
/// can target them.
#[derive(Debug, Clone)]
pub struct FindCommand {
    keywords: Vec<String>,
}

impl FindCommand {
    /// The command word.
    pub const COMMAND_WORD: &'static str = "find";

    /// Usage text.
    pub fn usage() -> String {
        format!(
            "{}: Finds all persons whose names contain any of the specified keywords \
             (case-sensitive) and displays them as a list with index numbers.\n\
             \tParameters: KEYWORD [MORE_KEYWORDS]...\n\
             \tExample: {} alice bob charlie",
            Self::COMMAND_WORD,
            Self::COMMAND_WORD,
        )
    }

    /// Build a find over the given keywords.
    pub fn new(keywords: Vec<String>) -> Self {
        FindCommand { keywords }
    }

    /// The search keywords.
    pub fn keywords(&self) -> &[String] {
        &self.keywords
    }

    /// Run the search against the session.
    pub fn execute(&self, session: &mut Session) -> CommandResult {
        let matches: Vec<Person> = session
            .address_book()
            .all_persons()
            .iter()
            .filter(|person| {
                person
                    .name()
                    .words()
                    .any(|word| self.keywords.iter().any(|keyword| keyword == word))
            })
            .cloned()
            .collect();
        CommandResult::with_displayed(messages::persons_listed_overview(matches.len()), matches)
    }
}
