//! Error types for the contact book.
//!
//! Command failures are plain values from a closed set; the REPL
//! prints their `Display` form and keeps running. Nothing here is ever
//! allowed to escape a command invocation as a panic.

use thiserror::Error;

/// Errors a command handler can report to the user.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    /// Too few tokens were supplied for the command.
    #[error("You didn't provide contact name or phone number")]
    MissingArgument,

    /// The phone argument is not all-digit after sanitization.
    #[error("Phone number must include digits only")]
    InvalidPhone,

    /// Lookup by a name that is not present in the store.
    #[error("Username is not in contact list")]
    UnknownContact,
}

/// Convenience type alias for Results with CommandError.
pub type CommandResult<T> = Result<T, CommandError>;
