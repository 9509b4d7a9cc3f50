//! Parsing of interactive input lines.

use super::state::Event;

/// One line of user input.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// Feeds an event into the state machine.
    Ui(Event),
    List,
    History,
    Help,
    Quit,
}

pub const HELP: &str = "\
Commands:
  from <CODE>      select the currency to convert from
  to <CODE>        select the currency to convert to
  amount <N>       set the amount
  swap             exchange the two currencies
  convert          convert at the live rate (alias: c)
  list             show supported currencies
  history          show recent conversions
  help             show this help (alias: ?)
  quit             exit (alias: q)";

/// Parses a line. Blank lines yield `Ok(None)`.
pub fn parse(line: &str) -> Result<Option<Command>, String> {
    let line = line.trim();
    if line.is_empty() {
        return Ok(None);
    }

    let (word, rest) = match line.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim()),
        None => (line, ""),
    };

    let command = match word.to_ascii_lowercase().as_str() {
        "from" => Command::Ui(Event::FromSelected(argument(word, rest)?)),
        "to" => Command::Ui(Event::ToSelected(argument(word, rest)?)),
        "amount" => Command::Ui(Event::AmountChanged(rest.to_string())),
        "swap" => Command::Ui(Event::SwapPressed),
        "convert" | "c" => Command::Ui(Event::ConvertPressed),
        "list" => Command::List,
        "history" => Command::History,
        "help" | "?" => Command::Help,
        "quit" | "exit" | "q" => Command::Quit,
        other => return Err(format!("Unknown command: {other} (type `help`)")),
    };
    Ok(Some(command))
}

fn argument(word: &str, rest: &str) -> Result<String, String> {
    if rest.is_empty() {
        Err(format!("Usage: {word} <CODE>"))
    } else {
        Ok(rest.to_string())
    }
}
