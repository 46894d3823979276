//! Terminal command grammar.

use inkpad_core::{DocumentKey, Selection, ToolbarAction};

/// One parsed input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Login(String),
    Logout,
    New,
    Open(DocumentKey),
    Type(String),
    Toolbar(ToolbarAction, Selection),
    Title(String),
    Tick,
    View,
    Help,
    Quit,
}

pub const HELP: &str = "\
commands:
  login <email>            sign in
  logout                   sign out
  new                      create and open the next document
  open <name>              open a document by name
  type <text>              replace the open document's text
  bold|italic|underline <start> <end>
                           wrap a character range
  save | share             toolbar actions
  title <text>             set the window title
  tick                     run due autosave ticks
  view                     print the editor
  quit                     exit";

/// Parses one line; blank lines yield `Ok(None)`.
pub fn parse_line(line: &str) -> Result<Option<Command>, String> {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    let (verb, rest) = match trimmed.split_once(char::is_whitespace) {
        Some((verb, rest)) => (verb, rest.trim()),
        None => (trimmed, ""),
    };

    let command = match verb.to_ascii_lowercase().as_str() {
        "login" => Command::Login(require(rest, "login <email>")?.to_string()),
        "logout" => Command::Logout,
        "new" => Command::New,
        "open" => Command::Open(DocumentKey::new(require(rest, "open <name>")?)),
        "type" => Command::Type(rest.to_string()),
        "title" => Command::Title(rest.to_string()),
        "tick" => Command::Tick,
        "view" => Command::View,
        "help" => Command::Help,
        "quit" | "exit" => Command::Quit,
        other => match ToolbarAction::parse(other) {
            Some(action @ (ToolbarAction::Save | ToolbarAction::Share)) => {
                Command::Toolbar(action, Selection::default())
            }
            Some(action) => Command::Toolbar(action, parse_range(rest)?),
            None => return Err(format!("unknown command `{other}`; try `help`")),
        },
    };
    Ok(Some(command))
}

fn require<'a>(value: &'a str, usage: &str) -> Result<&'a str, String> {
    if value.is_empty() {
        Err(format!("usage: {usage}"))
    } else {
        Ok(value)
    }
}

fn parse_range(rest: &str) -> Result<Selection, String> {
    let mut parts = rest.split_whitespace().map(str::parse::<usize>);
    match (parts.next(), parts.next(), parts.next()) {
        (Some(Ok(start)), Some(Ok(end)), None) => Ok(Selection::new(start, end)),
        _ => Err("expected a character range: <start> <end>".to_string()),
    }
}
