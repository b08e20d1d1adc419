//! Free-text command parsing.
//!
//! An explicit ordered table maps keyword prefixes to commands.
//! Matching policy: ASCII-case-insensitive, the keyword must sit at
//! the start of the line and end at a word boundary, and the longest
//! matching keyword wins. The remainder of the original line (case
//! preserved) becomes the argument list.

/// Tokens that end the session when they make up the whole trimmed
/// line, compared case-insensitively.
pub const EXIT_TOKENS: [&str; 4] = [".", "close", "bye", "exit"];

/// One user-facing command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandKind {
    Add,
    Hello,
    ShowAll,
    Change,
    Phone,
    Help,
    Delete,
}

/// Keyword table, in priority order. Keywords may contain spaces.
pub const COMMAND_TABLE: [(&str, CommandKind); 7] = [
    ("add", CommandKind::Add),
    ("hello", CommandKind::Hello),
    ("show all", CommandKind::ShowAll),
    ("change", CommandKind::Change),
    ("phone", CommandKind::Phone),
    ("help", CommandKind::Help),
    ("delete", CommandKind::Delete),
];

/// Outcome of parsing one input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParsedLine {
    /// The line was an exit token; the session should end.
    Exit,
    /// Nothing but whitespace.
    Empty,
    /// A recognized command with its positional arguments.
    Command {
        kind: CommandKind,
        args: Vec<String>,
    },
    /// No keyword matched.
    Unknown,
}

/// Parse one raw input line.
///
/// Exit tokens are whole-line matches only: `"bye"` exits, `"bye now"`
/// does not (and falls through to `Unknown`, since no command keyword
/// starts with it).
pub fn parse_line(input: &str) -> ParsedLine {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return ParsedLine::Empty;
    }

    if EXIT_TOKENS
        .iter()
        .any(|token| trimmed.eq_ignore_ascii_case(token))
    {
        return ParsedLine::Exit;
    }

    let matched = COMMAND_TABLE
        .iter()
        .filter(|(keyword, _)| keyword_matches(trimmed, keyword))
        .max_by_key(|(keyword, _)| keyword.len());

    match matched {
        Some((keyword, kind)) => {
            let args = trimmed[keyword.len()..]
                .split_whitespace()
                .map(str::to_string)
                .collect();
            ParsedLine::Command { kind: *kind, args }
        }
        None => ParsedLine::Unknown,
    }
}

/// A keyword matches when the line starts with it (ASCII case
/// ignored) and the keyword ends at a word boundary (end of line or
/// whitespace). Keywords are ASCII, so the matched prefix always has
/// the keyword's byte length.
fn keyword_matches(trimmed: &str, keyword: &str) -> bool {
    let Some(prefix) = trimmed.get(..keyword.len()) else {
        return false;
    };
    if !prefix.eq_ignore_ascii_case(keyword) {
        return false;
    }
    match trimmed[keyword.len()..].chars().next() {
        None => true,
        Some(c) => c.is_whitespace(),
    }
}
