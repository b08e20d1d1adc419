//! The read-parse-dispatch-print loop.
//!
//! The loop is generic over its reader and writer so tests can drive a
//! whole session through in-memory buffers. All interactive I/O lives
//! here; handlers only ever see parsed arguments and return values.

use std::io::{self, BufRead, Write};

use tracing::info;

use crate::commands::{dispatch, parse_line, resolve_add, AddChoice, CommandReply, ParsedLine};
use crate::store::AddressBook;

/// Printed once before the first prompt.
pub const BANNER: &str = "Here's a list of available commands: 'Hello', 'Add', 'Change', 'Phone', 'Show all', 'Delete', 'Help', 'Exit'";

/// Input prompt. No trailing space.
pub const PROMPT: &str = ">>>";

/// Printed when an exit token ends the session.
pub const FAREWELL: &str = "Goodbye and good luck";

/// Printed when no command keyword matches the input line.
pub const UNKNOWN_COMMAND: &str = "Sorry, unknown command";

/// Asked when an add collides with a name already in the book.
pub const COLLISION_PROMPT: &str =
    "Contact with this name already exist, do you want to rewrite it or create new record? '1'/'2'";

/// Asked again when the collision answer is neither '1' nor '2'.
pub const COLLISION_RETRY: &str = "Please type '1' or '2' to continue";

/// An interactive session over one address book.
pub struct Repl<R, W> {
    book: AddressBook,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Repl<R, W> {
    pub fn new(book: AddressBook, input: R, output: W) -> Self {
        Self {
            book,
            input,
            output,
        }
    }

    pub fn book(&self) -> &AddressBook {
        &self.book
    }

    /// Recover the book (and the writer, for buffer-backed tests)
    /// after the session ends.
    pub fn into_parts(self) -> (AddressBook, W) {
        (self.book, self.output)
    }

    /// Run until an exit token or end of input.
    pub fn run(&mut self) -> io::Result<()> {
        writeln!(self.output, "{}", BANNER)?;

        loop {
            write!(self.output, "{}", PROMPT)?;
            self.output.flush()?;

            let Some(line) = self.read_line()? else {
                writeln!(self.output)?;
                break;
            };

            match parse_line(&line) {
                ParsedLine::Exit => {
                    writeln!(self.output, "{}", FAREWELL)?;
                    break;
                }
                ParsedLine::Empty => continue,
                ParsedLine::Unknown => writeln!(self.output, "{}", UNKNOWN_COMMAND)?,
                ParsedLine::Command { kind, args } => {
                    match dispatch(&mut self.book, kind, &args) {
                        Ok(CommandReply::Message(message)) => {
                            writeln!(self.output, "{}", message)?
                        }
                        Ok(CommandReply::AmbiguousName { name, phone }) => {
                            if !self.resolve_collision(&name, &phone)? {
                                break;
                            }
                        }
                        Err(err) => writeln!(self.output, "{}", err)?,
                    }
                }
            }
        }

        info!(contacts = self.book.len(), "session ended");
        Ok(())
    }

    /// Ask the user how to resolve an add collision, then finish the
    /// add. Returns false when input ends mid-prompt.
    fn resolve_collision(&mut self, name: &str, phone: &str) -> io::Result<bool> {
        loop {
            writeln!(self.output, "{}", COLLISION_PROMPT)?;
            let Some(answer) = self.read_line()? else {
                return Ok(false);
            };
            let choice = match answer.trim() {
                "1" => AddChoice::Overwrite,
                "2" => AddChoice::KeepBoth,
                _ => {
                    writeln!(self.output, "{}", COLLISION_RETRY)?;
                    continue;
                }
            };
            let message = resolve_add(&mut self.book, name, phone, choice);
            writeln!(self.output, "{}", message)?;
            return Ok(true);
        }
    }

    fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line))
    }
}
