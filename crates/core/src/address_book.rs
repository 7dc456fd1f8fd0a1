//! The authoritative contact store.

use crate::error::Result;
use crate::person::Person;
use crate::person_list::UniquePersonList;

/// The authoritative, duplicate-free store of all contact records.
///
/// An address book is created empty or rebuilt wholesale from a persisted
/// snapshot, and mutated only through the explicit operations below. It has
/// no positional addressing of its own; commands address entries through a
/// displayed list and resolve them here by equality.
///
/// # Examples
///
/// ```
/// use rolodex_core::AddressBook;
///
/// let book = AddressBook::new();
/// assert!(book.is_empty());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AddressBook {
    persons: UniquePersonList,
}

impl AddressBook {
    /// Create an empty address book.
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild an address book from a snapshot of records.
    ///
    /// Fails with [`Error::DuplicatePerson`](crate::Error::DuplicatePerson)
    /// if the snapshot contains two equal records.
    pub fn from_persons(persons: Vec<Person>) -> Result<Self> {
        Ok(AddressBook {
            persons: UniquePersonList::from_persons(persons)?,
        })
    }

    /// Add a record.
    pub fn add_person(&mut self, person: Person) -> Result<()> {
        self.persons.add(person)
    }

    /// Remove the record equal to `target`.
    pub fn remove_person(&mut self, target: &Person) -> Result<()> {
        self.persons.remove(target)
    }

    /// Atomically replace the record equal to `target` with `replacement`.
    ///
    /// See [`UniquePersonList::replace`] for the all-or-nothing contract.
    pub fn replace_person(&mut self, target: &Person, replacement: Person) -> Result<()> {
        self.persons.replace(target, replacement)
    }

    /// Check whether an equal record is present.
    pub fn contains_person(&self, person: &Person) -> bool {
        self.persons.contains(person)
    }

    /// Read-only snapshot of all records, in insertion order.
    pub fn all_persons(&self) -> &[Person] {
        self.persons.as_slice()
    }

    /// Remove every record.
    pub fn clear(&mut self) {
        self.persons.clear();
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.persons.len()
    }

    /// Whether the book holds no records.
    pub fn is_empty(&self) -> bool {
        self.persons.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fields::{Address, Email, Name, Phone};
    use std::collections::BTreeSet;

    fn person(name: &str) -> Person {
        Person::new(
            Name::new(name).unwrap(),
            Phone::new("61234567", false).unwrap(),
            Email::new("john@doe.com", false).unwrap(),
            Address::new("395C Ben Road", false).unwrap(),
            BTreeSet::new(),
        )
    }

    #[test]
    fn lifecycle_empty_then_filled_then_cleared() {
        let mut book = AddressBook::new();
        assert!(book.is_empty());

        book.add_person(person("John Doe")).unwrap();
        book.add_person(person("Jane Doe")).unwrap();
        assert_eq!(book.len(), 2);
        assert!(book.contains_person(&person("John Doe")));

        book.clear();
        assert!(book.is_empty());
    }

    #[test]
    fn from_persons_restores_a_snapshot() {
        let book =
            AddressBook::from_persons(vec![person("John Doe"), person("Jane Doe")]).unwrap();
        assert_eq!(book.len(), 2);
        assert_eq!(book.all_persons()[0], person("John Doe"));
    }
}
