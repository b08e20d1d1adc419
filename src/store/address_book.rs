//! In-memory address book store.

use std::collections::BTreeMap;

use crate::models::Record;

/// Message returned when the book has no records to show.
pub const EMPTY_BOOK_MESSAGE: &str = "Your address book is empty";

/// The in-memory store: a mapping from contact name to [`Record`].
///
/// One record per name; inserting under an existing key replaces the
/// whole record. Merge-versus-overwrite decisions belong to the
/// command layer, not here. The book lives for the process lifetime
/// and is owned by whoever drives the commands, so handlers can be
/// tested against a fresh instance.
#[derive(Debug, Default, Clone)]
pub struct AddressBook {
    records: BTreeMap<String, Record>,
}

impl AddressBook {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Insert a record keyed by its name value, replacing any existing
    /// record under that key.
    pub fn add_record(&mut self, record: Record) {
        self.records
            .insert(record.name().as_str().to_string(), record);
    }

    /// Remove the record under `name` if present. Returns whether a
    /// record was actually removed.
    pub fn remove(&mut self, name: &str) -> bool {
        self.records.remove(name).is_some()
    }

    pub fn get(&self, name: &str) -> Option<&Record> {
        self.records.get(name)
    }

    pub fn get_mut(&mut self, name: &str) -> Option<&mut Record> {
        self.records.get_mut(name)
    }

    /// Render every record, one line each, in key order. An empty book
    /// renders as [`EMPTY_BOOK_MESSAGE`].
    pub fn render_all(&self) -> String {
        if self.records.is_empty() {
            return EMPTY_BOOK_MESSAGE.to_string();
        }
        self.records
            .values()
            .map(Record::render)
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Replace `old` with `new` in the record under `name`.
    ///
    /// A missing record, or an `old` value that matches no stored
    /// phone, is silently ignored; callers report success either way.
    pub fn change_record(&mut self, name: &str, old: &str, new: &str) {
        if let Some(record) = self.records.get_mut(name) {
            let _ = record.change_phone(old, new);
        }
    }
}
