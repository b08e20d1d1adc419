//! Command handlers.
//!
//! Each handler borrows the address book and the whitespace-split
//! arguments, and returns a [`CommandReply`] or a [`CommandError`].
//! Handlers never talk to the console; the one interactive situation
//! (adding a name that already appears in the book) is surfaced as
//! [`CommandReply::AmbiguousName`] so the caller can ask the user and
//! come back through [`resolve_add`].

use tracing::debug;

use crate::domain::{ContactName, PhoneNumber};
use crate::error::{CommandError, CommandResult};
use crate::models::Record;
use crate::store::AddressBook;

use super::parser::CommandKind;

/// Reply to the `hello` command.
pub const GREETING: &str = "How can I help you?";

/// Reply to the `help` command.
pub const HELP_TEXT: &str = "This contact bot saves your contacts
    Global commands:
      'add' - add new contact. Input username and phone
    Example: add User_name 095-xxx-xx-xx
      'change' - change users old phone to new phone. Input username, old phone and new phone
    Example: change User_name 095-xxx-xx-xx 050-xxx-xx-xx
      'phone' - show contacts of input user. Input username
    Example: phone User_name
      'delete' - removes contact from your address book
    Example: delete User_name
      'show all' - show all contacts
    Example: show all
      'exit'/'.'/'bye'/'close' - exit bot
    Example: exit";

/// What a handler hands back for the caller to act on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandReply {
    /// Text to print.
    Message(String),
    /// The add command found the name already present in the book; the
    /// caller must ask the user how to proceed and then call
    /// [`resolve_add`] with an [`AddChoice`].
    AmbiguousName { name: String, phone: String },
}

/// The user's answer to an add-collision prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddChoice {
    /// Drop the existing record and store the new one under the same
    /// name.
    Overwrite,
    /// Keep the existing record; store the new phone under the
    /// disambiguated name (`<name>(1)`).
    KeepBoth,
}

/// Route a parsed command to its handler.
pub fn dispatch(
    book: &mut AddressBook,
    kind: CommandKind,
    args: &[String],
) -> CommandResult<CommandReply> {
    debug!(?kind, args = args.len(), "dispatching command");
    match kind {
        CommandKind::Add => add(book, args),
        CommandKind::Hello => hello(),
        CommandKind::ShowAll => show_all(book),
        CommandKind::Change => change(book, args),
        CommandKind::Phone => phone(book, args),
        CommandKind::Help => help(),
        CommandKind::Delete => delete(book, args),
    }
}

/// Add a contact, or append a phone to an existing one.
///
/// Duplicate detection is substring containment of the raw name in the
/// whole rendered book text. That matches more than exact keys: a name
/// contained in another contact's name, in a stored phone number, or
/// in the empty-book banner also triggers the collision path.
pub fn add(book: &mut AddressBook, args: &[String]) -> CommandResult<CommandReply> {
    let name = args.first().ok_or(CommandError::MissingArgument)?;
    let raw_phone = args.get(1).ok_or(CommandError::MissingArgument)?;

    let phone = PhoneNumber::new(raw_phone.as_str());
    if !phone.is_digits_only() {
        return Err(CommandError::InvalidPhone);
    }

    if book.render_all().contains(name.as_str()) {
        return Ok(CommandReply::AmbiguousName {
            name: name.clone(),
            phone: phone.into_inner(),
        });
    }

    Ok(CommandReply::Message(insert_phone(
        book,
        ContactName::new(name.as_str()),
        phone,
    )))
}

/// Finish an add after the user resolved a name collision.
///
/// `phone` is the already-sanitized value carried in
/// [`CommandReply::AmbiguousName`].
pub fn resolve_add(book: &mut AddressBook, name: &str, phone: &str, choice: AddChoice) -> String {
    let name = ContactName::new(name);
    let target = match choice {
        AddChoice::Overwrite => {
            book.remove(name.as_str());
            name
        }
        AddChoice::KeepBoth => name.disambiguated(),
    };
    insert_phone(book, target, PhoneNumber::new(phone))
}

/// Replace a contact's old phone value with a new one.
///
/// The old value must be passed in already-sanitized form to match a
/// stored phone. A miss (unknown contact or unmatched old value) is
/// swallowed by the store and the confirmation is returned anyway.
pub fn change(book: &mut AddressBook, args: &[String]) -> CommandResult<CommandReply> {
    let name = args.first().ok_or(CommandError::MissingArgument)?;
    let old = args.get(1).ok_or(CommandError::MissingArgument)?;
    let new = args.get(2).ok_or(CommandError::MissingArgument)?;

    let new_phone = PhoneNumber::new(new.as_str());
    if !new_phone.is_digits_only() {
        return Err(CommandError::InvalidPhone);
    }

    book.change_record(name, old, new_phone.as_str());
    Ok(CommandReply::Message(format!(
        "You just changed number for contact '{}'. New number is '{}'",
        name, new_phone
    )))
}

/// Show one contact's record.
pub fn phone(book: &mut AddressBook, args: &[String]) -> CommandResult<CommandReply> {
    let name = args.first().ok_or(CommandError::MissingArgument)?;
    let record = book.get(name).ok_or(CommandError::UnknownContact)?;
    Ok(CommandReply::Message(record.render()))
}

/// Show every contact in the book.
pub fn show_all(book: &mut AddressBook) -> CommandResult<CommandReply> {
    Ok(CommandReply::Message(book.render_all()))
}

/// Remove a contact. Removing a name that is not stored still
/// confirms.
pub fn delete(book: &mut AddressBook, args: &[String]) -> CommandResult<CommandReply> {
    let name = args.first().ok_or(CommandError::MissingArgument)?;
    if name.is_empty() {
        return Err(CommandError::MissingArgument);
    }
    book.remove(name);
    Ok(CommandReply::Message(format!(
        "{} was deleted from your contact list",
        name
    )))
}

pub fn hello() -> CommandResult<CommandReply> {
    Ok(CommandReply::Message(GREETING.to_string()))
}

pub fn help() -> CommandResult<CommandReply> {
    Ok(CommandReply::Message(HELP_TEXT.to_string()))
}

fn insert_phone(book: &mut AddressBook, name: ContactName, phone: PhoneNumber) -> String {
    let confirmation = format!(
        "You just added contact \"{}\" with phone \"{}\" to your list of contacts",
        name, phone
    );
    debug!(name = %name, phone = %phone, "storing phone");
    if let Some(record) = book.get_mut(name.as_str()) {
        record.add_phone(phone);
        return confirmation;
    }
    book.add_record(Record::with_phone(name, phone));
    confirmation
}
