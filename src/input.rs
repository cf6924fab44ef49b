//! Parsing of player input lines. Parsing never drives control flow through
//! panics or sentinel strings: every prompt answer becomes either a tagged
//! value or an [`InputError`] for the caller's retry loop.

use thiserror::Error;

/// One answer to the target prompt: a cell, or one of the reserved words.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerInput {
    Coordinate(usize, usize),
    Retry,
    Exit,
}

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum InputError {
    #[error("expected two numbers like `1,2`, or `retry` / `exit`")]
    BadCoordinate,
    #[error("expected a whole number")]
    BadNumber,
    #[error("expected `yes` or `no`")]
    BadAnswer,
}

/// Parse a target-prompt answer: `row,col`, `row col`, `retry`, or `exit`.
/// Case-insensitive, whitespace-tolerant.
pub fn parse_target(line: &str) -> Result<PlayerInput, InputError> {
    let line = line.trim().to_ascii_lowercase();
    match line.as_str() {
        "retry" => Ok(PlayerInput::Retry),
        "exit" => Ok(PlayerInput::Exit),
        _ => {
            let mut parts = line
                .split(|ch: char| ch == ',' || ch.is_whitespace())
                .filter(|part| !part.is_empty());
            let row = parts
                .next()
                .and_then(|part| part.parse().ok())
                .ok_or(InputError::BadCoordinate)?;
            let col = parts
                .next()
                .and_then(|part| part.parse().ok())
                .ok_or(InputError::BadCoordinate)?;
            if parts.next().is_some() {
                return Err(InputError::BadCoordinate);
            }
            Ok(PlayerInput::Coordinate(row, col))
        }
    }
}

/// Parse a yes/no confirmation. Accepts `yes`/`y`/`no`/`n`, case-insensitive.
pub fn parse_yes_no(line: &str) -> Result<bool, InputError> {
    match line.trim().to_ascii_lowercase().as_str() {
        "yes" | "y" => Ok(true),
        "no" | "n" => Ok(false),
        _ => Err(InputError::BadAnswer),
    }
}

/// Parse a grid-size answer. Bounds checking is the caller's job; this only
/// rejects non-numeric text.
pub fn parse_size(line: &str) -> Result<usize, InputError> {
    line.trim().parse().map_err(|_| InputError::BadNumber)
}
