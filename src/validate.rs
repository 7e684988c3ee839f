use std::io::{self, BufRead, Write};
use thiserror::Error;

/// Why a line of user input was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Please use numeric digits.")]
    ParseFailure,
    #[error("Please enter a positive number.")]
    NotPositive,
}

/// Parse a trimmed line as a positive integer. Syntactically non-numeric
/// input is `ParseFailure`; a number below 1 (including any negative, or a
/// value outside the `u32` range) is `NotPositive`.
pub fn parse_positive(line: &str) -> Result<u32, ValidationError> {
    let trimmed = line.trim();
    match trimmed.parse::<u32>() {
        Ok(0) => Err(ValidationError::NotPositive),
        Ok(n) => Ok(n),
        Err(_) => {
            if trimmed.parse::<i64>().is_ok() {
                Err(ValidationError::NotPositive)
            } else {
                Err(ValidationError::ParseFailure)
            }
        }
    }
}

/// Read lines from `reader` until one parses as a positive integer, writing
/// `prompt` before each attempt and the rejection message after each bad
/// line. There is no retry cap; only exhausted input ends the loop early,
/// surfaced as `UnexpectedEof`.
pub fn read_positive<R: BufRead, W: Write>(
    prompt: &str,
    mut reader: R,
    mut writer: W,
) -> io::Result<u32> {
    loop {
        writeln!(writer, "{}", prompt)?;
        let mut line = String::new();
        if reader.read_line(&mut line)? == 0 {
            return Err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "input closed before a valid number was entered",
            ));
        }
        match parse_positive(&line) {
            Ok(value) => return Ok(value),
            Err(err) => writeln!(writer, "{}", err)?,
        }
    }
}
