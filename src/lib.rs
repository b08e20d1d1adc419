//! Contact Book - an interactive command-line address book.
//!
//! Contacts (a name plus any number of phone numbers) live in memory
//! for the duration of one console session. Free-text input is parsed
//! against an ordered keyword table and dispatched to a handler that
//! mutates or reads the shared address book and returns a display
//! string.
//!
//! # Architecture
//!
//! - **domain**: value objects for contact names and phone numbers
//! - **models**: the contact `Record`
//! - **store**: the in-memory `AddressBook`
//! - **commands**: input parsing and command handlers
//! - **repl**: the interactive read-parse-dispatch-print loop
//! - **config**: environment-driven settings
//! - **error**: the closed set of command errors

pub mod commands;
pub mod config;
pub mod domain;
pub mod error;
pub mod models;
pub mod repl;
pub mod store;

pub use commands::{
    dispatch, parse_line, resolve_add, AddChoice, CommandKind, CommandReply, ParsedLine,
};
pub use config::Config;
pub use domain::{ContactName, PhoneNumber};
pub use error::{CommandError, CommandResult};
pub use models::Record;
pub use repl::Repl;
pub use store::AddressBook;
