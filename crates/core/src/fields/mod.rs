//! Validated field newtypes for contact records.
//!
//! Each field type wraps a raw string behind a fallible constructor. The
//! constructors are pure and side-effect free: input is trimmed, checked
//! against the field's format rule, and either wrapped or rejected with
//! [`Error::InvalidFormat`](crate::Error::InvalidFormat) naming the field.
//!
//! [`Phone`], [`Email`] and [`Address`] additionally carry a `private`
//! display flag. The flag controls presentation only; it never participates
//! in equality.

pub mod address;
pub mod email;
pub mod name;
pub mod phone;
pub mod tag;

pub use address::Address;
pub use email::Email;
pub use name::Name;
pub use phone::Phone;
pub use tag::Tag;
