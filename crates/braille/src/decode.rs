//! Braille to text.

use crate::cell::Cell;
use crate::constants::CELL_WIDTH;
use crate::error::{Error, Result};
use crate::table::{self, CAPITAL, NUMBER, SPACE};
use tracing::warn;

/// What the decoder does with a cell that matches no marker and no table
/// entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum UnknownCellPolicy {
    /// Fail the whole call with [`Error::UnknownCell`].
    #[default]
    Reject,
    /// Emit nothing for the slot and keep going.
    Skip,
}

/// Mode flags carried across cells during one decode call.
#[derive(Debug, Default)]
struct Mode {
    capital: bool,
    number: bool,
}

/// Decodes concatenated cell tokens with [`UnknownCellPolicy::Reject`].
///
/// # Errors
///
/// See [`decode_with`].
///
/// # Example
///
/// ```
/// use braille::decode;
///
/// assert_eq!(decode(".....OO.....O.O...").unwrap(), "Ab");
/// assert_eq!(decode(".O.OOOO.....O.O...").unwrap(), "12");
/// assert!(decode("O....").is_err());
/// ```
pub fn decode(braille: &str) -> Result<String> {
    decode_with(braille, UnknownCellPolicy::Reject)
}

/// Decodes concatenated cell tokens.
///
/// The input is split into consecutive 6-character windows and read in one
/// pass. The capital marker applies to the next letter only. The number
/// marker switches letter slots to digits until the next space marker.
///
/// # Errors
///
/// - [`Error::EmptyInput`] for an empty string.
/// - [`Error::InvalidLength`] when the length in characters is not a
///   multiple of 6.
/// - [`Error::UnknownCell`] for an unmatched cell under
///   [`UnknownCellPolicy::Reject`].
pub fn decode_with(braille: &str, policy: UnknownCellPolicy) -> Result<String> {
    if braille.is_empty() {
        return Err(Error::EmptyInput);
    }
    let chars: Vec<char> = braille.chars().collect();
    if chars.len() % CELL_WIDTH != 0 {
        return Err(Error::InvalidLength {
            length: chars.len(),
        });
    }

    let mut out = String::with_capacity(chars.len() / CELL_WIDTH);
    let mut mode = Mode::default();
    for (position, segment) in chars.chunks(CELL_WIDTH).enumerate() {
        let cell = Cell::from_chars(segment);
        match cell {
            Some(SPACE) => {
                out.push(' ');
                mode.number = false;
            }
            Some(CAPITAL) => mode.capital = true,
            Some(NUMBER) => mode.number = true,
            _ if mode.number => match cell.and_then(table::cell_to_digit) {
                Some(digit) => out.push(digit),
                None => unknown(segment, position, policy)?,
            },
            _ => {
                match cell.and_then(table::cell_to_letter) {
                    Some(letter) if mode.capital => out.push(letter.to_ascii_uppercase()),
                    Some(letter) => out.push(letter),
                    None => unknown(segment, position, policy)?,
                }
                mode.capital = false;
            }
        }
    }
    Ok(out)
}

fn unknown(segment: &[char], position: usize, policy: UnknownCellPolicy) -> Result<()> {
    let cell: String = segment.iter().collect();
    match policy {
        UnknownCellPolicy::Reject => Err(Error::UnknownCell { cell, position }),
        UnknownCellPolicy::Skip => {
            warn!(%cell, position, "skipping unknown cell");
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_is_not_a_length_error() {
        assert_eq!(decode(""), Err(Error::EmptyInput));
    }

    #[test]
    fn test_invalid_length() {
        assert_eq!(decode("O...."), Err(Error::InvalidLength { length: 5 }));
        assert_eq!(decode("O......"), Err(Error::InvalidLength { length: 7 }));
    }

    #[test]
    fn test_length_counts_characters() {
        // Six characters, eight bytes.
        assert_eq!(
            decode("O...é."),
            Err(Error::UnknownCell {
                cell: "O...é.".into(),
                position: 0
            })
        );
    }

    #[test]
    fn test_capital_applies_once() {
        assert_eq!(decode(".....OO.....O.....").unwrap(), "Aa");
    }

    #[test]
    fn test_capital_waits_for_letter() {
        // capital, number, 1, space, a
        assert_eq!(decode(".....O.O.OOOO...........O.....").unwrap(), "1 A");
    }

    #[test]
    fn test_number_mode_survives_letters_until_space() {
        // number, a, b, space, a
        assert_eq!(decode(".O.OOOO.....O.O.........O.....").unwrap(), "12 a");
    }

    #[test]
    fn test_trailing_markers_emit_nothing() {
        assert_eq!(decode("O..........O.O.OOO").unwrap(), "a");
    }

    #[test]
    fn test_unknown_letter_rejected() {
        assert_eq!(
            decode("O.....OOOOOO"),
            Err(Error::UnknownCell {
                cell: "OOOOOO".into(),
                position: 1
            })
        );
    }

    #[test]
    fn test_unknown_digit_rejected() {
        // 'k' has no digit meaning.
        assert_eq!(
            decode(".O.OOOO...O."),
            Err(Error::UnknownCell {
                cell: "O...O.".into(),
                position: 1
            })
        );
    }

    #[test]
    fn test_unknown_skipped() {
        assert_eq!(
            decode_with("O.....OOOOOOO.O...", UnknownCellPolicy::Skip).unwrap(),
            "ab"
        );
        assert_eq!(
            decode_with(".O.OOOO...O.O.....", UnknownCellPolicy::Skip).unwrap(),
            "1"
        );
    }

    #[test]
    fn test_skipped_letter_consumes_capital() {
        assert_eq!(
            decode_with(".....OOOOOOOO.....", UnknownCellPolicy::Skip).unwrap(),
            "a"
        );
    }
}
