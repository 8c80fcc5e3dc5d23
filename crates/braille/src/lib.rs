//! Braille - six-dot cell codec for English text
//!
//! Translates a line of text (Latin letters, digits, spaces) to six-dot
//! Braille cells and back, picking the direction from the input itself.
//!
//! # Cell Notation
//!
//! A cell is written as a 6-character token over `O` (raised dot) and `.`
//! (flat dot), read row by row:
//!
//! | Token | Dots | Meaning |
//! |-------|------|---------|
//! | `O.....` | 1 | `a` / `1` |
//! | `OO....` | 1 4 | `c` / `3` |
//! | `.....O` | 6 | capital marker |
//! | `.O.OOO` | 3 4 5 6 | number marker |
//! | `......` | - | space |
//!
//! # Example
//!
//! ```
//! use braille::{decode, encode, translate};
//!
//! let cells = encode("Abc 12").unwrap();
//! assert_eq!(cells.len() % 6, 0);
//! assert_eq!(decode(&cells).unwrap(), "Abc 12");
//!
//! // Direction is detected from the input.
//! assert_eq!(translate(&cells).unwrap(), "Abc 12");
//! assert_eq!(translate("Abc 12").unwrap(), cells);
//! ```
//!
//! # Design Principles
//!
//! - **Pure functions**: no I/O and no shared mutable state
//! - **Compile-time tables**: symbol and reverse tables are `const` data
//! - **Whole-call failures**: an error never comes with partial output

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    missing_docs,
    clippy::missing_errors_doc
)]
#![cfg_attr(test, allow(clippy::unwrap_used, clippy::expect_used))]

// Cell width, dot order, alphabet
pub mod constants;

// Six-dot cell type
mod cell;

// Letter/digit tables and markers
pub mod table;

// Text to Braille
mod encode;

// Braille to text
mod decode;

// Direction detection and options
mod detect;

mod error;

pub use cell::{is_cell_symbol, Cell};
pub use decode::{decode, decode_with, UnknownCellPolicy};
pub use detect::{detect, translate, Direction, Options, Translator};
pub use encode::{encode, encode_cells, is_text_symbol, validate};
pub use error::{Error, ErrorKind, Result};
