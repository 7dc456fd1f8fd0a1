//! Ordered, duplicate-rejecting sequence of contact records.

use crate::error::{Error, Result};
use crate::person::Person;

/// A list of persons that rejects duplicates.
///
/// The list preserves insertion order but has no intrinsic position
/// addressing: lookup, removal and replacement are by record equality.
/// Positional addressing is always mediated by a displayed list held
/// elsewhere.
///
/// Invariant: no two elements are equal under [`Person`] equality. Every
/// operation that fails leaves the list unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UniquePersonList {
    inner: Vec<Person>,
}

impl UniquePersonList {
    /// Create an empty list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a list from records, rejecting the first duplicate found.
    pub fn from_persons(persons: Vec<Person>) -> Result<Self> {
        let mut list = Self::new();
        for person in persons {
            list.add(person)?;
        }
        Ok(list)
    }

    /// Append a record.
    ///
    /// Fails with [`Error::DuplicatePerson`] if an equal record is already
    /// present.
    pub fn add(&mut self, person: Person) -> Result<()> {
        if self.contains(&person) {
            return Err(Error::DuplicatePerson);
        }
        self.inner.push(person);
        Ok(())
    }

    /// Remove the record equal to `target`.
    ///
    /// Fails with [`Error::PersonNotFound`] if no equal record is present.
    pub fn remove(&mut self, target: &Person) -> Result<()> {
        let index = self.position_of(target).ok_or(Error::PersonNotFound)?;
        self.inner.remove(index);
        Ok(())
    }

    /// Atomically replace the record equal to `target` with `replacement`.
    ///
    /// The duplicate check runs before any mutation, so there is no window
    /// where the list is missing the target: either the swap happens in
    /// place or the list is untouched.
    ///
    /// Fails with [`Error::PersonNotFound`] if `target` is absent, or
    /// [`Error::DuplicatePerson`] if `replacement` equals a different
    /// existing entry. Replacing an entry with an equal-valued record is
    /// allowed; it refreshes tags and privacy flags.
    pub fn replace(&mut self, target: &Person, replacement: Person) -> Result<()> {
        let index = self.position_of(target).ok_or(Error::PersonNotFound)?;
        let collides = self
            .inner
            .iter()
            .enumerate()
            .any(|(i, existing)| i != index && *existing == replacement);
        if collides {
            return Err(Error::DuplicatePerson);
        }
        self.inner[index] = replacement;
        Ok(())
    }

    /// Check whether an equal record is present.
    pub fn contains(&self, person: &Person) -> bool {
        self.position_of(person).is_some()
    }

    /// Read-only view of the ordered contents.
    pub fn as_slice(&self) -> &[Person] {
        &self.inner
    }

    /// Iterate over the records in order.
    pub fn iter(&self) -> std::slice::Iter<'_, Person> {
        self.inner.iter()
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    /// Whether the list is empty.
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Remove all records.
    pub fn clear(&mut self) {
        self.inner.clear();
    }

    fn position_of(&self, target: &Person) -> Option<usize> {
        self.inner.iter().position(|p| p == target)
    }
}

impl<'a> IntoIterator for &'a UniquePersonList {
    type Item = &'a Person;
    type IntoIter = std::slice::Iter<'a, Person>;

    fn into_iter(self) -> Self::IntoIter {
        self.inner.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fields::{Address, Email, Name, Phone};
    use std::collections::BTreeSet;

    fn person(name: &str, phone: &str) -> Person {
        Person::new(
            Name::new(name).unwrap(),
            Phone::new(phone, false).unwrap(),
            Email::new("john@doe.com", false).unwrap(),
            Address::new("395C Ben Road", false).unwrap(),
            BTreeSet::new(),
        )
    }

    #[test]
    fn add_rejects_duplicates() {
        let mut list = UniquePersonList::new();
        list.add(person("John Doe", "61234567")).unwrap();
        let err = list.add(person("John Doe", "61234567")).unwrap_err();
        assert_eq!(err, Error::DuplicatePerson);
        assert_eq!(list.len(), 1, "failed add must not grow the list");
    }

    #[test]
    fn remove_is_by_equality() {
        let mut list = UniquePersonList::new();
        list.add(person("John Doe", "61234567")).unwrap();
        list.add(person("Jane Doe", "91234567")).unwrap();

        // A freshly built equal record removes the stored one.
        list.remove(&person("John Doe", "61234567")).unwrap();
        assert_eq!(list.len(), 1);
        assert!(!list.contains(&person("John Doe", "61234567")));
    }

    #[test]
    fn remove_missing_fails_without_mutation() {
        let mut list = UniquePersonList::new();
        list.add(person("John Doe", "61234567")).unwrap();
        let before = list.clone();

        let err = list.remove(&person("Sam Doe", "63345566")).unwrap_err();
        assert_eq!(err, Error::PersonNotFound);
        assert_eq!(list, before);
    }

    #[test]
    fn replace_swaps_in_place() {
        let mut list = UniquePersonList::new();
        list.add(person("John Doe", "61234567")).unwrap();
        list.add(person("Jane Doe", "91234567")).unwrap();

        let target = person("John Doe", "61234567");
        let replacement = person("Johnny Doe", "81234567");
        list.replace(&target, replacement.clone()).unwrap();

        assert_eq!(list.as_slice()[0], replacement, "replacement keeps the slot");
        assert_eq!(list.len(), 2);
        assert!(!list.contains(&target));
    }

    #[test]
    fn replace_missing_target_fails_without_mutation() {
        let mut list = UniquePersonList::new();
        list.add(person("Jane Doe", "91234567")).unwrap();
        let before = list.clone();

        let err = list
            .replace(&person("John Doe", "61234567"), person("Sam Doe", "63345566"))
            .unwrap_err();
        assert_eq!(err, Error::PersonNotFound);
        assert_eq!(list, before);
    }

    #[test]
    fn replace_colliding_with_other_entry_fails_without_mutation() {
        let mut list = UniquePersonList::new();
        list.add(person("John Doe", "61234567")).unwrap();
        list.add(person("Jane Doe", "91234567")).unwrap();
        let before = list.clone();

        // Replacement equals the other entry, not the target.
        let err = list
            .replace(&person("John Doe", "61234567"), person("Jane Doe", "91234567"))
            .unwrap_err();
        assert_eq!(err, Error::DuplicatePerson);
        assert_eq!(list, before, "all-or-nothing: no partial mutation");
    }

    #[test]
    fn replace_with_equal_record_refreshes_the_entry() {
        let mut list = UniquePersonList::new();
        list.add(person("John Doe", "61234567")).unwrap();

        // Same identity fields, now private.
        let refreshed = Person::new(
            Name::new("John Doe").unwrap(),
            Phone::new("61234567", true).unwrap(),
            Email::new("john@doe.com", false).unwrap(),
            Address::new("395C Ben Road", false).unwrap(),
            BTreeSet::new(),
        );
        list.replace(&person("John Doe", "61234567"), refreshed)
            .unwrap();
        assert!(list.as_slice()[0].phone().is_private());
    }

    #[test]
    fn from_persons_rejects_duplicates() {
        let result = UniquePersonList::from_persons(vec![
            person("John Doe", "61234567"),
            person("John Doe", "61234567"),
        ]);
        assert_eq!(result.unwrap_err(), Error::DuplicatePerson);
    }
}
