//! The contact record.

use std::collections::BTreeSet;
use std::fmt::Write as _;

use crate::fields::{Address, Email, Name, Phone, Tag};

/// One validated contact record.
///
/// A `Person` aggregates validated fields plus a set of tags. It is
/// immutable once constructed: an update builds a new record from new field
/// values and swaps it into the collection.
///
/// Two records are equal when their name, phone, email and address values
/// are equal. Privacy flags and tags are presentation state and are
/// excluded, so a record can be "replaced" by one that differs only in tags
/// or visibility.
///
/// # Examples
///
/// ```
/// use rolodex_core::{Address, Email, Name, Person, Phone};
/// use std::collections::BTreeSet;
///
/// let person = Person::new(
///     Name::new("John Doe")?,
///     Phone::new("61234567", false)?,
///     Email::new("john@doe.com", false)?,
///     Address::new("395C Ben Road", false)?,
///     BTreeSet::new(),
/// );
/// assert_eq!(person.name().as_str(), "John Doe");
/// # Ok::<(), rolodex_core::Error>(())
/// ```
#[derive(Debug, Clone)]
pub struct Person {
    name: Name,
    phone: Phone,
    email: Email,
    address: Address,
    tags: BTreeSet<Tag>,
}

impl Person {
    /// Build a record from already-validated fields. Cannot fail.
    pub fn new(
        name: Name,
        phone: Phone,
        email: Email,
        address: Address,
        tags: BTreeSet<Tag>,
    ) -> Self {
        Person {
            name,
            phone,
            email,
            address,
            tags,
        }
    }

    /// The person's name.
    pub fn name(&self) -> &Name {
        &self.name
    }

    /// The person's phone number.
    pub fn phone(&self) -> &Phone {
        &self.phone
    }

    /// The person's email address.
    pub fn email(&self) -> &Email {
        &self.email
    }

    /// The person's address.
    pub fn address(&self) -> &Address {
        &self.address
    }

    /// The person's tags, ordered by name.
    pub fn tags(&self) -> &BTreeSet<Tag> {
        &self.tags
    }

    /// Render every field, marking private ones.
    ///
    /// This is the canonical string representation used in command feedback.
    pub fn as_text_show_all(&self) -> String {
        let mut out = self.name.as_str().to_string();
        let _ = write!(out, " Phone: {}{}", privacy_marker(self.phone.is_private()), self.phone);
        let _ = write!(out, " Email: {}{}", privacy_marker(self.email.is_private()), self.email);
        let _ = write!(
            out,
            " Address: {}{}",
            privacy_marker(self.address.is_private()),
            self.address
        );
        out.push_str(&self.rendered_tags());
        out
    }

    /// Render the record with private fields omitted entirely.
    pub fn as_text_hide_private(&self) -> String {
        let mut out = self.name.as_str().to_string();
        if !self.phone.is_private() {
            let _ = write!(out, " Phone: {}", self.phone);
        }
        if !self.email.is_private() {
            let _ = write!(out, " Email: {}", self.email);
        }
        if !self.address.is_private() {
            let _ = write!(out, " Address: {}", self.address);
        }
        out.push_str(&self.rendered_tags());
        out
    }

    fn rendered_tags(&self) -> String {
        if self.tags.is_empty() {
            return String::new();
        }
        let mut out = String::from(" Tags: ");
        for tag in &self.tags {
            let _ = write!(out, "{}", tag);
        }
        out
    }
}

fn privacy_marker(private: bool) -> &'static str {
    if private {
        "(private) "
    } else {
        ""
    }
}

// Uniqueness in the collection is full-field value equality: name, phone,
// email and address. Tags and privacy flags are excluded.
impl PartialEq for Person {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
            && self.phone == other.phone
            && self.email == other.email
            && self.address == other.address
    }
}

impl Eq for Person {}

impl std::fmt::Display for Person {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_text_show_all())
    }
}
