use std::{
    io::{BufRead, Write},
    str::FromStr,
};

use crate::{
    common::{command::Command, error::AppError, money::Money},
    io::console::Console,
};

/// Reads the next line and maps it to a [`Command`] for the current session
/// state.
pub fn read_command<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    logged_in: bool,
) -> Result<Command, AppError> {
    let line = console.read_line()?;
    Ok(Command::parse(&line, logged_in))
}

/// Parses user-entered amount text.
///
/// Only the syntax is checked here. Zero and negative amounts parse fine and
/// are rejected by the account itself.
///
/// # Examples
///
/// ```
/// use banking_ledger::io::reader::parse_amount;
///
/// assert_eq!(parse_amount("100.5").unwrap().as_i64(), 10050);
/// assert_eq!(parse_amount("-3").unwrap().as_i64(), -300);
/// assert!(parse_amount("ten").is_err());
/// ```
pub fn parse_amount(text: &str) -> Result<Money, AppError> {
    let cleaned = text.trim().trim_start_matches('$');
    Money::from_str(cleaned).map_err(|e| AppError::Parse(format!("invalid amount {text:?}: {e}")))
}
