//! A single six-dot Braille cell.

use crate::constants::{BRAILLE_BASE, CELL_WIDTH, FLAT, RAISED, TOKEN_DOTS};
use core::fmt;

/// Returns `true` if `c` belongs to the cell alphabet (`O` or `.`).
#[inline]
#[must_use]
pub const fn is_cell_symbol(c: char) -> bool {
    c == RAISED || c == FLAT
}

/// One Braille character position, stored as a 6-bit dot mask.
///
/// Bit `n - 1` is set when dot `n` is raised. The textual form is a
/// 6-character token over `O` (raised) and `.` (flat), see
/// [`TOKEN_DOTS`](crate::constants::TOKEN_DOTS) for the position order.
///
/// # Example
///
/// ```
/// use braille::Cell;
///
/// let d = Cell::from_token("OO.O..").unwrap();
/// assert!(d.has_dot(1) && d.has_dot(4) && d.has_dot(5));
/// assert_eq!(d.dot_count(), 3);
/// assert_eq!(d.to_string(), "OO.O..");
/// assert_eq!(d.character(), '⠙');
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default, PartialOrd, Ord)]
#[repr(transparent)]
pub struct Cell(u8);

impl Cell {
    /// The blank cell (no dots raised).
    pub const BLANK: Self = Self(0);

    /// The full cell (all six dots raised).
    pub const FULL: Self = Self(0b11_1111);

    /// Creates a cell from a dot mask. Bits above bit 5 are dropped.
    #[inline]
    #[must_use]
    pub const fn from_dots(mask: u8) -> Self {
        Self(mask & 0b11_1111)
    }

    /// Parses a 6-character token.
    ///
    /// Returns `None` unless the token is exactly six cell-alphabet
    /// characters.
    ///
    /// ```
    /// use braille::Cell;
    ///
    /// assert_eq!(Cell::from_token(".....O").unwrap().dots(), 0b10_0000);
    /// assert!(Cell::from_token("O....").is_none());
    /// assert!(Cell::from_token("O....x").is_none());
    /// ```
    #[must_use]
    pub const fn from_token(token: &str) -> Option<Self> {
        let bytes = token.as_bytes();
        if bytes.len() != CELL_WIDTH {
            return None;
        }
        let mut mask = 0u8;
        let mut i = 0;
        while i < CELL_WIDTH {
            match bytes[i] {
                b'O' => mask |= 1 << (TOKEN_DOTS[i] - 1),
                b'.' => {}
                _ => return None,
            }
            i += 1;
        }
        Some(Self(mask))
    }

    /// Parses a cell from a slice of characters, as produced when a string
    /// is split into fixed-width windows.
    #[must_use]
    pub fn from_chars(chars: &[char]) -> Option<Self> {
        if chars.len() != CELL_WIDTH {
            return None;
        }
        chars
            .iter()
            .zip(TOKEN_DOTS)
            .try_fold(0u8, |mask, (&c, dot)| match c {
                RAISED => Some(mask | 1 << (dot - 1)),
                FLAT => Some(mask),
                _ => None,
            })
            .map(Self)
    }

    /// Returns the dot mask.
    #[inline]
    #[must_use]
    pub const fn dots(self) -> u8 {
        self.0
    }

    /// Returns `true` if dot `dot` (1-6) is raised.
    #[inline]
    #[must_use]
    pub const fn has_dot(self, dot: u8) -> bool {
        dot >= 1 && dot <= 6 && self.0 & (1 << (dot - 1)) != 0
    }

    /// Returns the number of raised dots.
    #[inline]
    #[must_use]
    pub const fn dot_count(self) -> u8 {
        self.0.count_ones() as u8
    }

    /// Returns the 6-character token.
    #[must_use]
    pub fn to_token(self) -> String {
        self.to_string()
    }

    /// Returns the matching character of the Unicode Braille Patterns block.
    #[inline]
    #[must_use]
    pub const fn character(self) -> char {
        // Six-dot masks stay inside U+2800..=U+283F.
        match char::from_u32(BRAILLE_BASE + self.0 as u32) {
            Some(c) => c,
            None => '\u{2800}',
        }
    }
}

impl fmt::Debug for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Cell({}, {})", self, self.character())
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for dot in TOKEN_DOTS {
            let symbol = if self.has_dot(dot) { RAISED } else { FLAT };
            fmt::Write::write_char(f, symbol)?;
        }
        Ok(())
    }
}

impl From<Cell> for u8 {
    #[inline]
    fn from(cell: Cell) -> Self {
        cell.dots()
    }
}

impl From<Cell> for char {
    #[inline]
    fn from(cell: Cell) -> Self {
        cell.character()
    }
}
