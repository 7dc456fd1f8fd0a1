//! Command execution context.

use crate::commands::{Command, CommandResult};
use crate::types::{AddressBook, Person, DISPLAYED_INDEX_OFFSET};

/// The mutable state a command executes against.
///
/// A session owns the authoritative [`AddressBook`] plus the last displayed
/// list: the transient, ordered snapshot produced by the most recent
/// list/find command, which index-addressed commands resolve against. The
/// session is an explicitly owned value, so tests construct isolated
/// instances instead of sharing ambient state.
///
/// # Examples
///
/// ```
/// use rolodex::prelude::*;
///
/// let mut session = Session::new();
/// let command = parse_command("list")?;
/// let result = session.execute(&command);
/// assert_eq!(result.feedback, "0 persons listed!");
/// # Ok::<(), rolodex::Error>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct Session {
    address_book: AddressBook,
    last_shown: Vec<Person>,
}

impl Session {
    /// Create a session over an empty address book.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a session over an existing address book (e.g. one loaded from
    /// a snapshot).
    pub fn with_address_book(address_book: AddressBook) -> Self {
        Session {
            address_book,
            last_shown: Vec::new(),
        }
    }

    /// The authoritative collection.
    pub fn address_book(&self) -> &AddressBook {
        &self.address_book
    }

    /// Mutable access to the authoritative collection.
    pub fn address_book_mut(&mut self) -> &mut AddressBook {
        &mut self.address_book
    }

    /// The last displayed list, in display order.
    pub fn displayed(&self) -> &[Person] {
        &self.last_shown
    }

    /// Replace the displayed list.
    ///
    /// Ordinarily this happens as a side effect of [`Session::execute`];
    /// it is public so a displayed-list provider (or a test) can stage a
    /// view directly, including one that is stale relative to the book.
    pub fn set_displayed(&mut self, list: Vec<Person>) {
        self.last_shown = list;
    }

    /// Resolve a 1-based displayed index to a record.
    ///
    /// Returns `None` for any index outside `[1, len]`.
    pub fn displayed_person(&self, index: i64) -> Option<&Person> {
        if index < DISPLAYED_INDEX_OFFSET as i64 {
            return None;
        }
        self.last_shown.get(index as usize - DISPLAYED_INDEX_OFFSET)
    }

    /// Execute a command and record its displayed output, if any, as the
    /// new displayed list.
    pub fn execute(&mut self, command: &Command) -> CommandResult {
        tracing::debug!(?command, "executing command");
        let result = command.execute(self);
        if let Some(displayed) = &result.displayed {
            self.last_shown = displayed.clone();
        }
        result
    }
}
