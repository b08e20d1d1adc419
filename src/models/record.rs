//! Record model: one contact and its phone numbers.

use crate::domain::{ContactName, PhoneNumber};

/// A single contact: a name plus an ordered list of phone numbers.
///
/// Phones keep insertion order and duplicates are permitted; there is
/// no upper bound. The list is the single source of truth for a
/// contact's numbers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    name: ContactName,
    phones: Vec<PhoneNumber>,
}

impl Record {
    /// Create a record with no phone numbers yet.
    pub fn new(name: ContactName) -> Self {
        Self {
            name,
            phones: Vec::new(),
        }
    }

    /// Create a record seeded with one phone number.
    pub fn with_phone(name: ContactName, phone: PhoneNumber) -> Self {
        Self {
            name,
            phones: vec![phone],
        }
    }

    pub fn name(&self) -> &ContactName {
        &self.name
    }

    pub fn phones(&self) -> &[PhoneNumber] {
        &self.phones
    }

    /// Append a phone number. No duplicate check.
    pub fn add_phone(&mut self, phone: PhoneNumber) {
        self.phones.push(phone);
    }

    /// Replace the first phone whose stored (sanitized) value equals
    /// `old` exactly with a freshly sanitized `new`.
    ///
    /// The replacement is appended rather than written in place, so a
    /// changed number moves to the end of the list. Returns whether a
    /// match was found; callers passing formatted input for `old` will
    /// not match, since stored values are already sanitized.
    pub fn change_phone(&mut self, old: &str, new: &str) -> bool {
        match self.phones.iter().position(|p| p.as_str() == old) {
            Some(idx) => {
                self.phones.remove(idx);
                self.phones.push(PhoneNumber::new(new));
                true
            }
            None => false,
        }
    }

    /// Render as `"name : phone,phone,…"`.
    pub fn render(&self) -> String {
        let phones = self
            .phones
            .iter()
            .map(PhoneNumber::as_str)
            .collect::<Vec<_>>()
            .join(",");
        format!("{} : {}", self.name, phones)
    }
}
