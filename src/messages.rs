//! Fixed user-facing feedback strings.
//!
//! Failure messages are constants per failure kind; success messages are
//! templates over the affected record. These strings are part of the
//! command contract and are asserted verbatim by the integration tests.

/// Feedback when a displayed index is outside `[1, len]`.
pub const MESSAGE_INVALID_PERSON_DISPLAYED_INDEX: &str = "The person index provided is invalid";

/// Feedback when a displayed entry is stale relative to the collection.
pub const MESSAGE_PERSON_NOT_IN_ADDRESSBOOK: &str = "Person could not be found in address book";

/// Feedback when an added or replacement record collides with an entry.
pub const MESSAGE_DUPLICATE_PERSON: &str = "This person already exists in the address book";

/// Feedback when the address book is emptied.
pub const MESSAGE_ADDRESSBOOK_CLEARED: &str = "Address book has been cleared!";

/// Feedback when the front end is asked to stop.
pub const MESSAGE_EXITING: &str = "Exiting address book... Good bye!";

/// Feedback for command text that does not match the expected format.
pub fn invalid_command_format(usage: &str) -> String {
    format!("Invalid command format! \n{usage}")
}

/// Overview line for list/find results.
pub fn persons_listed_overview(count: usize) -> String {
    format!("{count} persons listed!")
}
