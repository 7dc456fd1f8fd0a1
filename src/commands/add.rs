//! Add a contact to the address book.

use super::{build_person, CommandResult};
use crate::error::Result;
use crate::messages;
use crate::session::Session;
use crate::types::{Address, Email, Name, Person, Phone, Tag};
use rolodex_core::Error as CoreError;

/// Add a new record to the collection.
///
/// Construction from raw strings validates every field immediately.
#[derive(Debug, Clone)]
pub struct AddCommand {
    person: Person,
}

impl AddCommand {
    /// The command word.
    pub const COMMAND_WORD: &'static str = "add";

    /// Usage text.
    pub fn usage() -> String {
        format!(
            "{}: Adds a person to the address book. \
             Contact details can be marked private by prepending 'p' to the prefix.\n\
             \tParameters: NAME [p]p/PHONE [p]e/EMAIL [p]a/ADDRESS [t/TAG]...\n\
             \tExample: {} {} p/{} e/{} a/{} t/{}",
            Self::COMMAND_WORD,
            Self::COMMAND_WORD,
            Name::EXAMPLE,
            Phone::EXAMPLE,
            Email::EXAMPLE,
            Address::EXAMPLE,
            Tag::EXAMPLE,
        )
    }

    /// Build from raw field strings, validating every field and tag.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        name: &str,
        phone: &str,
        phone_private: bool,
        email: &str,
        email_private: bool,
        address: &str,
        address_private: bool,
        tags: &[String],
    ) -> Result<Self> {
        let person = build_person(
            name,
            phone,
            phone_private,
            email,
            email_private,
            address,
            address_private,
            tags,
        )?;
        Ok(AddCommand { person })
    }

    /// Build from an already-validated record. Cannot fail.
    pub fn with_person(person: Person) -> Self {
        AddCommand { person }
    }

    /// The validated record to add.
    pub fn person(&self) -> &Person {
        &self.person
    }

    /// Run the add against the session.
    pub fn execute(&self, session: &mut Session) -> CommandResult {
        match session.address_book_mut().add_person(self.person.clone()) {
            Ok(()) => {
                tracing::debug!(name = %self.person.name(), "added person");
                CommandResult::feedback(format!("New person added: {}", self.person))
            }
            Err(CoreError::DuplicatePerson) => {
                CommandResult::feedback(messages::MESSAGE_DUPLICATE_PERSON)
            }
            Err(other) => CommandResult::feedback(other.to_string()),
        }
    }
}
