//! In-memory storage for contact records.

pub mod address_book;

pub use address_book::{AddressBook, EMPTY_BOOK_MESSAGE};
