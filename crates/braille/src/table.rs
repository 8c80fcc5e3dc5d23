//! Constant symbol tables and marker cells.
//!
//! The forward tables are written as tokens and parsed at compile time.
//! The reverse tables are indexed by dot mask and are also built by `const`
//! evaluation, so every lookup is a single array index and nothing is
//! initialised at runtime.
//!
//! # Example
//!
//! ```
//! use braille::table::{cell_to_digit, cell_to_letter, digit_to_cell, letter_to_cell};
//!
//! let a = letter_to_cell('a').unwrap();
//! assert_eq!(a.to_string(), "O.....");
//! assert_eq!(cell_to_letter(a), Some('a'));
//!
//! // Digits share the cells of a..j.
//! assert_eq!(digit_to_cell('1'), Some(a));
//! assert_eq!(cell_to_digit(a), Some('1'));
//! ```

use crate::cell::Cell;
use crate::constants::CELL_CARDINALITY;

const fn cell(token: &str) -> Cell {
    match Cell::from_token(token) {
        Some(cell) => cell,
        None => panic!("malformed cell token"),
    }
}

/// Capital marker: the next letter is uppercase.
pub const CAPITAL: Cell = cell(".....O");

/// Number marker: letter slots read as digits until the next space.
pub const NUMBER: Cell = cell(".O.OOO");

/// Space marker: a literal space, also ends number mode.
pub const SPACE: Cell = cell("......");

/// Cells for `a` through `z`, in alphabetical order.
pub const LETTERS: [Cell; 26] = [
    cell("O....."), // a
    cell("O.O..."), // b
    cell("OO...."), // c
    cell("OO.O.."), // d
    cell("O..O.."), // e
    cell("OOO..."), // f
    cell("OOOO.."), // g
    cell("O.OO.."), // h
    cell(".OO..."), // i
    cell(".OOO.."), // j
    cell("O...O."), // k
    cell("O.O.O."), // l
    cell("OO..O."), // m
    cell("OO.OO."), // n
    cell("O..OO."), // o
    cell("OOO.O."), // p
    cell("OOOOO."), // q
    cell("O.OOO."), // r
    cell(".OO.O."), // s
    cell(".OOOO."), // t
    cell("O...OO"), // u
    cell("O.O.OO"), // v
    cell(".OOO.O"), // w
    cell("OO..OO"), // x
    cell("OO.OOO"), // y
    cell("O..OOO"), // z
];

/// Cells for `0` through `9`, indexed by digit value.
///
/// `1`..`9` reuse the cells of `a`..`i` and `0` reuses `j`.
pub const DIGITS: [Cell; 10] = [
    LETTERS[9],
    LETTERS[0],
    LETTERS[1],
    LETTERS[2],
    LETTERS[3],
    LETTERS[4],
    LETTERS[5],
    LETTERS[6],
    LETTERS[7],
    LETTERS[8],
];

static LETTER_BY_DOTS: [Option<char>; CELL_CARDINALITY] = {
    let mut table = [None; CELL_CARDINALITY];
    let mut i = 0;
    while i < LETTERS.len() {
        table[LETTERS[i].dots() as usize] = Some((b'a' + i as u8) as char);
        i += 1;
    }
    table
};

static DIGIT_BY_DOTS: [Option<char>; CELL_CARDINALITY] = {
    let mut table = [None; CELL_CARDINALITY];
    let mut i = 0;
    while i < DIGITS.len() {
        table[DIGITS[i].dots() as usize] = Some((b'0' + i as u8) as char);
        i += 1;
    }
    table
};

/// Returns the cell of a Latin letter, in either case.
#[inline]
#[must_use]
pub fn letter_to_cell(letter: char) -> Option<Cell> {
    let lower = letter.to_ascii_lowercase();
    lower
        .is_ascii_lowercase()
        .then(|| LETTERS[(lower as u8 - b'a') as usize])
}

/// Returns the lowercase letter carried by `cell`, if any.
#[inline]
#[must_use]
pub fn cell_to_letter(cell: Cell) -> Option<char> {
    LETTER_BY_DOTS[cell.dots() as usize]
}

/// Returns the cell of an ASCII digit.
#[inline]
#[must_use]
pub fn digit_to_cell(digit: char) -> Option<Cell> {
    digit.to_digit(10).map(|value| DIGITS[value as usize])
}

/// Returns the digit carried by `cell` in number mode, if any.
#[inline]
#[must_use]
pub fn cell_to_digit(cell: Cell) -> Option<char> {
    DIGIT_BY_DOTS[cell.dots() as usize]
}

/// Returns `true` if `cell` is one of the three markers.
#[inline]
#[must_use]
pub fn is_marker(cell: Cell) -> bool {
    cell == CAPITAL || cell == NUMBER || cell == SPACE
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_letter_roundtrip() {
        for letter in 'a'..='z' {
            let cell = letter_to_cell(letter).unwrap();
            assert_eq!(cell_to_letter(cell), Some(letter));
        }
    }

    #[test]
    fn test_letter_uppercase_lookup() {
        assert_eq!(letter_to_cell('Q'), letter_to_cell('q'));
    }

    #[test]
    fn test_digit_roundtrip() {
        for digit in '0'..='9' {
            let cell = digit_to_cell(digit).unwrap();
            assert_eq!(cell_to_digit(cell), Some(digit));
        }
    }

    #[test]
    fn test_letters_are_distinct() {
        for (i, a) in LETTERS.iter().enumerate() {
            for b in &LETTERS[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn test_markers_outside_tables() {
        for cell in LETTERS {
            assert!(!is_marker(cell), "{:?} collides with a marker", cell);
        }
        assert_ne!(CAPITAL, NUMBER);
        assert_ne!(NUMBER, SPACE);
        assert_ne!(CAPITAL, SPACE);
    }

    #[test]
    fn test_lookup_outside_domain() {
        assert_eq!(letter_to_cell('1'), None);
        assert_eq!(letter_to_cell(' '), None);
        assert_eq!(letter_to_cell('é'), None);
        assert_eq!(digit_to_cell('a'), None);
        assert_eq!(digit_to_cell('٣'), None);
        assert_eq!(cell_to_letter(Cell::FULL), None);
        assert_eq!(cell_to_digit(letter_to_cell('k').unwrap()), None);
    }

    #[test]
    fn test_marker_tokens() {
        assert_eq!(CAPITAL.to_string(), ".....O");
        assert_eq!(NUMBER.to_string(), ".O.OOO");
        assert_eq!(SPACE.to_string(), "......");
    }
}
