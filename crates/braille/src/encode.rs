//! Text to Braille.

use crate::constants::CELL_WIDTH;
use crate::error::{Error, Result};
use crate::table::{self, CAPITAL, NUMBER, SPACE};
use crate::Cell;

/// Returns `true` for the characters the encoder accepts.
#[inline]
#[must_use]
pub const fn is_text_symbol(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == ' '
}

/// Checks that `text` is non-empty and contains only encodable characters.
///
/// # Errors
///
/// [`Error::EmptyInput`] for an empty string, otherwise
/// [`Error::InvalidCharacter`] for the first character that is not a letter,
/// digit or space.
pub fn validate(text: &str) -> Result<()> {
    if text.is_empty() {
        return Err(Error::EmptyInput);
    }
    match text.chars().enumerate().find(|&(_, c)| !is_text_symbol(c)) {
        Some((position, character)) => Err(Error::InvalidCharacter {
            character,
            position,
        }),
        None => Ok(()),
    }
}

/// Encodes `text` into the sequence of cells it produces, markers included.
///
/// # Errors
///
/// Same as [`validate`].
pub fn encode_cells(text: &str) -> Result<Vec<Cell>> {
    validate(text)?;

    let mut cells = Vec::with_capacity(text.len() + text.len() / 2);
    let mut in_number_mode = false;
    for c in text.chars() {
        if c.is_ascii_digit() {
            if !in_number_mode {
                cells.push(NUMBER);
                in_number_mode = true;
            }
            cells.extend(table::digit_to_cell(c));
        } else if c == ' ' {
            cells.push(SPACE);
            in_number_mode = false;
        } else {
            if c.is_ascii_uppercase() {
                cells.push(CAPITAL);
            }
            cells.extend(table::letter_to_cell(c));
            in_number_mode = false;
        }
    }
    Ok(cells)
}

/// Encodes `text` into concatenated 6-character cell tokens.
///
/// Uppercase letters are preceded by the capital marker. A run of digits is
/// preceded by one number marker; any space or letter ends the run. Only the
/// space emits a cell, so a letter right after a digit decodes as a digit.
///
/// # Errors
///
/// [`Error::EmptyInput`] or [`Error::InvalidCharacter`], see [`validate`].
///
/// # Example
///
/// ```
/// use braille::encode;
///
/// assert_eq!(encode("Ab").unwrap(), ".....OO.....O.O...");
/// assert_eq!(encode("1").unwrap(), ".O.OOOO.....");
/// assert!(encode("a!").is_err());
/// ```
pub fn encode(text: &str) -> Result<String> {
    let cells = encode_cells(text)?;
    let mut out = String::with_capacity(cells.len() * CELL_WIDTH);
    for cell in &cells {
        out.push_str(&cell.to_token());
    }
    Ok(out)
}
