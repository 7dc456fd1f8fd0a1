//! Snapshot persistence for the Rolodex address book.
//!
//! The storage layer saves and loads the whole collection as a JSON
//! snapshot. There is no incremental write path and no durability guarantee
//! beyond write-then-flush: the address book is small and rewritten in full
//! after every mutating command.
//!
//! Loading goes back through the core field constructors, so a snapshot
//! edited by hand (or corrupted) cannot smuggle an invalid record past
//! validation: it surfaces [`Error::Format`] instead.

#![warn(missing_docs)]
#![warn(clippy::all)]

use std::collections::BTreeSet;
use std::fs;
use std::io::Write as _;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use rolodex_core::{Address, AddressBook, Email, Name, Person, Phone, Tag};

/// Storage layer errors.
#[derive(Debug, Error)]
pub enum Error {
    /// The storage path does not end in `.json`.
    #[error("storage file should end with '.json': {0}")]
    InvalidPath(String),

    /// The snapshot could not be decoded or failed re-validation.
    #[error("malformed address book snapshot: {0}")]
    Format(String),

    /// Underlying filesystem failure.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for storage operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Serialized form of one contact record.
///
/// Field values are stored raw; validation happens on the way back in.
#[derive(Debug, Serialize, Deserialize)]
struct PersonData {
    name: String,
    phone: String,
    #[serde(default)]
    phone_private: bool,
    email: String,
    #[serde(default)]
    email_private: bool,
    address: String,
    #[serde(default)]
    address_private: bool,
    #[serde(default)]
    tags: Vec<String>,
}

/// Serialized form of the whole address book.
#[derive(Debug, Default, Serialize, Deserialize)]
struct Snapshot {
    persons: Vec<PersonData>,
}

impl PersonData {
    fn from_person(person: &Person) -> Self {
        PersonData {
            name: person.name().as_str().to_string(),
            phone: person.phone().as_str().to_string(),
            phone_private: person.phone().is_private(),
            email: person.email().as_str().to_string(),
            email_private: person.email().is_private(),
            address: person.address().as_str().to_string(),
            address_private: person.address().is_private(),
            tags: person.tags().iter().map(|t| t.as_str().to_string()).collect(),
        }
    }

    fn into_person(self) -> Result<Person> {
        let name = Name::new(&self.name).map_err(format_error)?;
        let phone = Phone::new(&self.phone, self.phone_private).map_err(format_error)?;
        let email = Email::new(&self.email, self.email_private).map_err(format_error)?;
        let address = Address::new(&self.address, self.address_private).map_err(format_error)?;
        let tags = self
            .tags
            .iter()
            .map(|raw| Tag::new(raw).map_err(format_error))
            .collect::<Result<BTreeSet<Tag>>>()?;
        Ok(Person::new(name, phone, email, address, tags))
    }
}

fn format_error(e: rolodex_core::Error) -> Error {
    Error::Format(e.to_string())
}

/// Handle to the address-book snapshot file.
///
/// # Examples
///
/// ```no_run
/// use rolodex_storage::StorageFile;
///
/// let storage = StorageFile::new("addressbook.json")?;
/// let book = storage.load()?;
/// storage.save(&book)?;
/// # Ok::<(), rolodex_storage::Error>(())
/// ```
#[derive(Debug, Clone)]
pub struct StorageFile {
    path: PathBuf,
}

impl StorageFile {
    /// Default snapshot location used by the CLI.
    pub const DEFAULT_STORAGE_PATH: &'static str = "addressbook.json";

    /// Create a handle for the given path.
    ///
    /// Fails with [`Error::InvalidPath`] unless the path ends in `.json`.
    pub fn new(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        if path.extension().and_then(|e| e.to_str()) != Some("json") {
            return Err(Error::InvalidPath(path.display().to_string()));
        }
        Ok(StorageFile { path })
    }

    /// The snapshot path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Serialize the whole address book to the snapshot file.
    pub fn save(&self, book: &AddressBook) -> Result<()> {
        let snapshot = Snapshot {
            persons: book.all_persons().iter().map(PersonData::from_person).collect(),
        };
        let encoded = serde_json::to_string_pretty(&snapshot)
            .map_err(|e| Error::Format(e.to_string()))?;
        let mut file = fs::File::create(&self.path)?;
        file.write_all(encoded.as_bytes())?;
        file.flush()?;
        tracing::debug!(path = %self.path.display(), persons = book.len(), "saved snapshot");
        Ok(())
    }

    /// Load the address book from the snapshot file.
    ///
    /// A missing file yields an empty book; that is the first-run case, not
    /// an error. Every record is re-validated through the core constructors.
    pub fn load(&self) -> Result<AddressBook> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::info!(path = %self.path.display(), "no snapshot found, starting empty");
                return Ok(AddressBook::new());
            }
            Err(e) => return Err(e.into()),
        };
        let snapshot: Snapshot =
            serde_json::from_str(&raw).map_err(|e| Error::Format(e.to_string()))?;
        let persons = snapshot
            .persons
            .into_iter()
            .map(PersonData::into_person)
            .collect::<Result<Vec<Person>>>()?;
        let book = AddressBook::from_persons(persons)
            .map_err(|e| Error::Format(e.to_string()))?;
        tracing::debug!(path = %self.path.display(), persons = book.len(), "loaded snapshot");
        Ok(book)
    }
}
