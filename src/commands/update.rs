//! Update a contact addressed by displayed index.

use super::{build_person, CommandResult};
use crate::error::Result;
use crate::messages;
use crate::session::Session;
use crate::types::{Address, Email, Name, Person, Phone, Tag};
use rolodex_core::Error as CoreError;

/// Replace the record at a 1-based displayed index with new field values.
///
/// Construction from raw strings validates every field immediately; an
/// `UpdateCommand` that exists carries a fully-validated replacement record.
///
/// Execution is all-or-nothing. The displayed index is bounds-checked, the
/// addressed record is looked up in the collection by equality, and the
/// replacement is swapped in atomically. On any failure (index out of
/// bounds, stale displayed entry, replacement colliding with a different
/// entry) the collection is left field-for-field unchanged.
#[derive(Debug, Clone)]
pub struct UpdateCommand {
    target_index: i64,
    person: Person,
}

impl UpdateCommand {
    /// The command word.
    pub const COMMAND_WORD: &'static str = "update";

    /// Usage text.
    pub fn usage() -> String {
        format!(
            "{}: Updates the person identified by the index number used in the last shown listing. \
             Contact details can be marked private by prepending 'p' to the prefix.\n\
             \tParameters: INDEX NAME [p]p/PHONE [p]e/EMAIL [p]a/ADDRESS [t/TAG]...\n\
             \tExample: {} 1 {} p/{} e/{} a/{} t/{}",
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
    ///
    /// Fails with [`Error::InvalidFormat`](crate::Error::InvalidFormat) at
    /// the first offending field; no partially-constructed command exists.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        target_index: i64,
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
        Ok(UpdateCommand {
            target_index,
            person,
        })
    }

    /// Build from an already-validated replacement record. Cannot fail.
    pub fn with_person(target_index: i64, person: Person) -> Self {
        UpdateCommand {
            target_index,
            person,
        }
    }

    /// The validated replacement record.
    pub fn person(&self) -> &Person {
        &self.person
    }

    /// Run the update against the session.
    pub fn execute(&self, session: &mut Session) -> CommandResult {
        let Some(target) = session.displayed_person(self.target_index).cloned() else {
            return CommandResult::feedback(messages::MESSAGE_INVALID_PERSON_DISPLAYED_INDEX);
        };
        match session
            .address_book_mut()
            .replace_person(&target, self.person.clone())
        {
            Ok(()) => {
                tracing::debug!(target = %target.name(), "updated person");
                CommandResult::feedback(format!("Updated person: {target}"))
            }
            Err(CoreError::PersonNotFound) => {
                CommandResult::feedback(messages::MESSAGE_PERSON_NOT_IN_ADDRESSBOOK)
            }
            Err(CoreError::DuplicatePerson) => {
                CommandResult::feedback(messages::MESSAGE_DUPLICATE_PERSON)
            }
            Err(other) => CommandResult::feedback(other.to_string()),
        }
    }
}
