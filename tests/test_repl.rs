//! Scripted end-to-end REPL sessions over in-memory buffers.

use std::io::Cursor;

use contact_book::commands::handlers::GREETING;
use contact_book::repl::{
    Repl, BANNER, COLLISION_PROMPT, COLLISION_RETRY, FAREWELL, PROMPT, UNKNOWN_COMMAND,
};
use contact_book::store::AddressBook;

/// Run a whole session fed from `script` and return the final book
/// plus everything written to the output.
fn run_session(script: &str) -> (AddressBook, String) {
    let mut repl = Repl::new(
        AddressBook::new(),
        Cursor::new(script.to_string()),
        Vec::new(),
    );
    repl.run().expect("in-memory session cannot fail I/O");
    let (book, output) = repl.into_parts();
    (book, String::from_utf8(output).expect("output is UTF-8"))
}

#[test]
fn test_hello_session_byte_for_byte() {
    let (_, output) = run_session("hello\nbye\n");
    let expected = format!("{BANNER}\n{PROMPT}{GREETING}\n{PROMPT}{FAREWELL}\n");
    assert_eq!(output, expected);
}

#[test]
fn test_exit_tokens_are_case_insensitive_whole_lines() {
    let (_, output) = run_session("Bye\n");
    assert!(output.ends_with(&format!("{FAREWELL}\n")));

    // "bye now" is not an exit token and matches no keyword either.
    let (_, output) = run_session("bye now\nexit\n");
    assert!(output.contains(UNKNOWN_COMMAND));
    assert!(output.ends_with(&format!("{FAREWELL}\n")));
}

#[test]
fn test_eof_ends_session_without_farewell() {
    let (_, output) = run_session("hello\n");
    assert!(output.contains(GREETING));
    assert!(!output.contains(FAREWELL));
}

#[test]
fn test_empty_lines_just_reprompt() {
    let (_, output) = run_session("\n\nbye\n");
    assert_eq!(output.matches(PROMPT).count(), 3);
    assert!(!output.contains(UNKNOWN_COMMAND));
}

#[test]
fn test_full_contact_lifecycle() {
    let script = "add Alice 123-456-7890\n\
                  phone Alice\n\
                  change Alice 1234567890 9998887776\n\
                  show all contacts please\n\
                  delete Alice\n\
                  show all\n\
                  exit\n";
    let (book, output) = run_session(script);

    assert!(output.contains(
        "You just added contact \"Alice\" with phone \"1234567890\" to your list of contacts"
    ));
    assert!(output.contains("Alice : 1234567890"));
    assert!(output.contains("You just changed number for contact 'Alice'. New number is '9998887776'"));
    assert!(output.contains("Alice : 9998887776"));
    assert!(output.contains("Alice was deleted from your contact list"));
    assert!(output.contains("Your address book is empty"));
    assert!(book.is_empty());
}

#[test]
fn test_command_keywords_are_case_insensitive() {
    let (book, output) = run_session("ADD Bill 123\nPHONE Bill\nShow All\nbye\n");
    assert!(output.contains("Bill : 123"));
    assert_eq!(book.get("Bill").unwrap().phones()[0].as_str(), "123");
}

#[test]
fn test_handler_errors_are_printed_and_loop_continues() {
    let script = "add\n\
                  add Alice letters\n\
                  phone Ghost\n\
                  hello\n\
                  bye\n";
    let (_, output) = run_session(script);

    assert!(output.contains("You didn't provide contact name or phone number"));
    assert!(output.contains("Phone number must include digits only"));
    assert!(output.contains("Username is not in contact list"));
    // The loop survived all three failures.
    assert!(output.contains(GREETING));
    assert!(output.ends_with(&format!("{FAREWELL}\n")));
}

#[test]
fn test_collision_prompt_keep_both() {
    let script = "add Bill 111\n\
                  add Bill 222\n\
                  x\n\
                  2\n\
                  show all\n\
                  bye\n";
    let (book, output) = run_session(script);

    assert!(output.contains(COLLISION_PROMPT));
    assert!(output.contains(COLLISION_RETRY));
    assert!(output.contains("Bill(1)"));

    assert_eq!(book.get("Bill").unwrap().phones()[0].as_str(), "111");
    assert_eq!(book.get("Bill(1)").unwrap().phones()[0].as_str(), "222");
}

#[test]
fn test_collision_prompt_overwrite() {
    let script = "add Bill 111\n\
                  add Bill 222\n\
                  1\n\
                  phone Bill\n\
                  bye\n";
    let (book, output) = run_session(script);

    assert!(output.contains(COLLISION_PROMPT));
    assert!(output.contains("Bill : 222"));
    assert_eq!(book.len(), 1);
    assert_eq!(book.get("Bill").unwrap().phones().len(), 1);
}

#[test]
fn test_eof_during_collision_prompt_ends_session() {
    let (book, output) = run_session("add Bill 111\nadd Bill 222\n");
    assert!(output.contains(COLLISION_PROMPT));
    // The unresolved add changed nothing.
    assert_eq!(book.get("Bill").unwrap().phones().len(), 1);
}

#[test]
fn test_banner_is_first_line() {
    let (_, output) = run_session("bye\n");
    assert!(output.starts_with(BANNER));
}
