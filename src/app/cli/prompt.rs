//! Reading the profile name from the operator.

use std::io::{self, BufRead, ErrorKind, IsTerminal};
use std::path::Path;

use dialoguer::{Error as DialoguerError, Input};

use crate::domain::AppError;

/// Read one line naming the profile. `None` when the operator cancels.
///
/// Interactive terminals get a `dialoguer` prompt; piped input is read as a
/// single raw line.
pub fn prompt_identifier(users_root: &Path) -> Result<Option<String>, AppError> {
    let prompt = format!("User name (a folder under {})", users_root.display());

    if io::stdin().is_terminal() {
        let input = Input::<String>::new().with_prompt(prompt).allow_empty(true).interact_text();
        return match input {
            Ok(value) => Ok(Some(value)),
            Err(DialoguerError::IO(err)) if err.kind() == ErrorKind::Interrupted => Ok(None),
            Err(err) => Err(AppError::Prompt(err.to_string())),
        };
    }

    eprint!("{}: ", prompt);
    let mut line = String::new();
    let read = io::stdin()
        .lock()
        .read_line(&mut line)
        .map_err(|err| AppError::Prompt(err.to_string()))?;
    if read == 0 {
        return Err(AppError::Prompt("no input on stdin".into()));
    }
    Ok(Some(strip_line_terminator(&line).to_string()))
}

/// Drop one trailing `\n` or `\r\n`. Any other whitespace is part of the name.
fn strip_line_terminator(line: &str) -> &str {
    let line = line.strip_suffix('\n').unwrap_or(line);
    line.strip_suffix('\r').unwrap_or(line)
}
