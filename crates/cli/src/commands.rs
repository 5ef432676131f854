//! Interactive command parsing.
//!
//! Each input line maps to one [`Command`]. Commands that act on the page are
//! turned into clicks or keystrokes; hidden controls stay inert, exactly as
//! they would in a browser.

use shopfront_core::ProductId;
use thiserror::Error;

/// Help text printed by `help`.
pub const HELP: &str = "\
Commands:
  login <email> <password>   Fill the login form and submit it
  name <text>                Type into the product name field
  price <text>               Type into the product price field
  save                       Submit the product form
  edit <id>                  Click \"Editar\" on a product
  delete <id>                Click \"Eliminar\" on a product
  cancel                     Click the cancel-edit control
  refresh                    Reload the product list
  retry                      Click \"Reintentar\" after a failed load
  show                       Redraw the page
  help                       Show this help
  quit                       Exit";

/// Errors that can occur when parsing a command line.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CommandError {
    /// The first word is not a known command.
    #[error("Unknown command: {0}. Type 'help' for a list of commands")]
    Unknown(String),

    /// A required argument is missing.
    #[error("Usage: {0}")]
    Usage(&'static str),

    /// A product identifier is not an integer.
    #[error("Invalid product id: {0}")]
    InvalidId(String),
}

/// One line of user input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Login { email: String, password: String },
    Name(String),
    Price(String),
    Save,
    Edit(ProductId),
    Delete(ProductId),
    Cancel,
    Refresh,
    Retry,
    Show,
    Help,
    Quit,
}

/// Parse a command line.
///
/// `name` and `price` take the rest of the line verbatim, so names may contain
/// spaces. Blank lines parse as [`Command::Show`].
///
/// # Errors
///
/// Returns `CommandError` for unknown commands or missing/invalid arguments.
pub fn parse(line: &str) -> Result<Command, CommandError> {
    let line = line.trim_end_matches(['\r', '\n']);
    let trimmed = line.trim_start();
    let (word, rest) = trimmed.split_once(' ').unwrap_or((trimmed, ""));

    match word {
        "" | "show" => Ok(Command::Show),
        "login" => {
            let mut parts = rest.split_whitespace();
            match (parts.next(), parts.next()) {
                (Some(email), Some(password)) => Ok(Command::Login {
                    email: email.to_owned(),
                    password: password.to_owned(),
                }),
                _ => Err(CommandError::Usage("login <email> <password>")),
            }
        }
        "name" => Ok(Command::Name(rest.to_owned())),
        "price" => Ok(Command::Price(rest.to_owned())),
        "save" => Ok(Command::Save),
        "edit" => parse_id(rest, "edit <id>").map(Command::Edit),
        "delete" => parse_id(rest, "delete <id>").map(Command::Delete),
        "cancel" => Ok(Command::Cancel),
        "refresh" => Ok(Command::Refresh),
        "retry" => Ok(Command::Retry),
        "help" => Ok(Command::Help),
        "quit" | "exit" => Ok(Command::Quit),
        other => Err(CommandError::Unknown(other.to_owned())),
    }
}

fn parse_id(rest: &str, usage: &'static str) -> Result<ProductId, CommandError> {
    let rest = rest.trim();
    if rest.is_empty() {
        return Err(CommandError::Usage(usage));
    }
    rest.parse()
        .map_err(|_| CommandError::InvalidId(rest.to_owned()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_login() {
        assert_eq!(
            parse("login a@b.com wrong"),
            Ok(Command::Login {
                email: "a@b.com".to_owned(),
                password: "wrong".to_owned(),
            })
        );
        assert_eq!(
            parse("login a@b.com"),
            Err(CommandError::Usage("login <email> <password>"))
        );
    }

    #[test]
    fn test_parse_field_text_is_verbatim() {
        assert_eq!(
            parse("name Widget  Deluxe "),
            Ok(Command::Name("Widget  Deluxe ".to_owned()))
        );
        assert_eq!(parse("price 9.99\n"), Ok(Command::Price("9.99".to_owned())));
        assert_eq!(parse("price"), Ok(Command::Price(String::new())));
    }

    #[test]
    fn test_parse_ids() {
        assert_eq!(parse("edit 5"), Ok(Command::Edit(ProductId::new(5))));
        assert_eq!(parse("delete 7"), Ok(Command::Delete(ProductId::new(7))));
        assert_eq!(parse("delete"), Err(CommandError::Usage("delete <id>")));
        assert_eq!(
            parse("edit five"),
            Err(CommandError::InvalidId("five".to_owned()))
        );
    }

    #[test]
    fn test_parse_simple_commands() {
        assert_eq!(parse("save"), Ok(Command::Save));
        assert_eq!(parse("cancel"), Ok(Command::Cancel));
        assert_eq!(parse("refresh"), Ok(Command::Refresh));
        assert_eq!(parse("retry"), Ok(Command::Retry));
        assert_eq!(parse(""), Ok(Command::Show));
        assert_eq!(parse("exit"), Ok(Command::Quit));
    }

    #[test]
    fn test_parse_unknown() {
        assert_eq!(
            parse("buy 3"),
            Err(CommandError::Unknown("buy".to_owned()))
        );
    }
}
