//! Direction detection and the translation entry points.

use crate::cell::is_cell_symbol;
use crate::decode::{decode_with, UnknownCellPolicy};
use crate::encode::encode;
use crate::error::Result;
use core::fmt;
use tracing::debug;

/// Which converter a translation runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Text to Braille.
    Encode,
    /// Braille to text.
    Decode,
}

impl Direction {
    /// Lowercase name of the direction.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Encode => "encode",
            Self::Decode => "decode",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Classifies `input`: Braille iff every character is `O` or `.`.
///
/// This is a closed-world guess: text made only of capital `O` letters is
/// read as Braille. Use [`Translator::translate_as`] to bypass it. The empty
/// string is vacuously all-Braille and is routed to the decoder, which
/// rejects it.
///
/// # Example
///
/// ```
/// use braille::{detect, Direction};
///
/// assert_eq!(detect("O....."), Direction::Decode);
/// assert_eq!(detect("hello"), Direction::Encode);
/// assert_eq!(detect(""), Direction::Decode);
/// ```
#[must_use]
pub fn detect(input: &str) -> Direction {
    if input.chars().all(is_cell_symbol) {
        Direction::Decode
    } else {
        Direction::Encode
    }
}

/// Settings for a [`Translator`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Options {
    /// Decoder handling of unmatched cells.
    pub unknown_cells: UnknownCellPolicy,
    /// Forced direction; `None` runs [`detect`].
    pub direction: Option<Direction>,
}

/// Runs the encoder or decoder according to its [`Options`].
///
/// # Example
///
/// ```
/// use braille::{Direction, Options, Translator, UnknownCellPolicy};
///
/// let lenient = Translator::new(Options {
///     unknown_cells: UnknownCellPolicy::Skip,
///     ..Options::default()
/// });
/// assert_eq!(lenient.translate("O.....OOOOOO").unwrap(), "a");
///
/// let t = Translator::default();
/// assert_eq!(t.translate_as(Direction::Encode, "a").unwrap(), "O.....");
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct Translator {
    options: Options,
}

impl Translator {
    /// Creates a translator with the given options.
    #[must_use]
    pub const fn new(options: Options) -> Self {
        Self { options }
    }

    /// Returns the options in effect.
    #[must_use]
    pub const fn options(&self) -> &Options {
        &self.options
    }

    /// Direction this translator picks for `input`.
    #[must_use]
    pub fn direction_for(&self, input: &str) -> Direction {
        self.options.direction.unwrap_or_else(|| detect(input))
    }

    /// Text to Braille.
    ///
    /// # Errors
    ///
    /// See [`encode`](crate::encode()).
    pub fn encode(&self, text: &str) -> Result<String> {
        encode(text)
    }

    /// Braille to text, under the configured unknown-cell policy.
    ///
    /// # Errors
    ///
    /// See [`decode_with`].
    pub fn decode(&self, braille: &str) -> Result<String> {
        decode_with(braille, self.options.unknown_cells)
    }

    /// Translates `input` in the forced direction, or the detected one.
    ///
    /// # Errors
    ///
    /// Any failure of the chosen converter.
    pub fn translate(&self, input: &str) -> Result<String> {
        self.translate_as(self.direction_for(input), input)
    }

    /// Translates `input` in `direction`, bypassing detection.
    ///
    /// # Errors
    ///
    /// Any failure of the chosen converter.
    pub fn translate_as(&self, direction: Direction, input: &str) -> Result<String> {
        debug!(%direction, len = input.len(), "translating");
        match direction {
            Direction::Encode => self.encode(input),
            Direction::Decode => self.decode(input),
        }
    }
}

/// Detects the direction of `input` and translates it with default options.
///
/// # Errors
///
/// Any failure of the chosen converter. An empty string fails with
/// [`Error::EmptyInput`](crate::Error::EmptyInput).
///
/// # Example
///
/// ```
/// use braille::translate;
///
/// assert_eq!(translate("Hi 5").unwrap(), ".....OO.OO...OO..........O.OOOO..O..");
/// assert_eq!(translate(".....OO.OO...OO..........O.OOOO..O..").unwrap(), "Hi 5");
/// ```
pub fn translate(input: &str) -> Result<String> {
    Translator::default().translate(input)
}
