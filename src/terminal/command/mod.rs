
use thiserror::Error;

/// A user intent typed at the browser prompt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Help,
    Quit,
    Collections,
    Use(String),
    Refresh,
    Next,
    Previous,
    Page(u32),
    PageSize(u32),
    Select(String),
    Unselect(String),
    SelectAll,
    SelectNone,
    Open(String),
    Close,
    Draft(String),
    Query(Option<String>),
    Clear,
    Delete,
    Drop,
    Confirm,
    Cancel,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CommandError {
    #[error("Empty command")]
    Empty,
    #[error("Unknown command: {0} (type 'help' for a list)")]
    Unknown(String),
    #[error("'{0}' needs an argument")]
    MissingArgument(&'static str),
    #[error("Not a number: {0}")]
    InvalidNumber(String),
}

pub const HELP: &str = "\
Commands:
  collections            list collections
  use <id>               switch to a collection
  refresh                reload the current page
  next | prev            move one page
  page <n>               jump to page n
  size <n>               records per page (10, 20, 50, 100, 200)
  select <id>            tick a record
  unselect <id>          untick a record
  all | none             tick the whole page / untick everything
  open <id>              show record details
  close                  hide record details
  draft <json>           edit the metadata query without running it
  query [json]           run the metadata query (the draft if omitted)
  clear                  empty the metadata query
  delete                 delete ticked records
  drop                   drop the current collection (asks first)
  confirm | cancel       answer the drop warning
  quit                   leave";

#[inline]
pub fn parse_command(line: &str) -> Result<Command, CommandError> {
    let line = line.trim();
    let (name, rest) = line
        .split_once(char::is_whitespace)
        .map_or((line, ""), |(name, rest)| (name, rest.trim()));

    let command = match name.to_lowercase().as_str() {
        "" => return Err(CommandError::Empty),
        "help" | "?" => Command::Help,
        "quit" | "exit" | "q" => Command::Quit,
        "collections" | "ls" => Command::Collections,
        "use" => Command::Use(required(rest, "use")?),
        "refresh" => Command::Refresh,
        "next" | "n" => Command::Next,
        "prev" | "previous" | "p" => Command::Previous,
        "page" => Command::Page(number(rest, "page")?),
        "size" => Command::PageSize(number(rest, "size")?),
        "select" => Command::Select(required(rest, "select")?),
        "unselect" => Command::Unselect(required(rest, "unselect")?),
        "all" => Command::SelectAll,
        "none" => Command::SelectNone,
        "open" => Command::Open(required(rest, "open")?),
        "close" => Command::Close,
        "draft" => Command::Draft(rest.to_string()),
        "query" => Command::Query((!rest.is_empty()).then(|| rest.to_string())),
        "clear" => Command::Clear,
        "delete" => Command::Delete,
        "drop" => Command::Drop,
        "confirm" | "yes" => Command::Confirm,
        "cancel" | "no" => Command::Cancel,
        other => return Err(CommandError::Unknown(other.to_string())),
    };

    Ok(command)
}

fn required(rest: &str, command: &'static str) -> Result<String, CommandError> {
    if rest.is_empty() {
        Err(CommandError::MissingArgument(command))
    } else {
        Ok(rest.to_string())
    }
}

fn number(rest: &str, command: &'static str) -> Result<u32, CommandError> {
    let value = required(rest, command)?;
    value
        .parse()
        .map_err(|_| CommandError::InvalidNumber(value))
}
