//! Constants of the six-dot cell notation.

/// Number of dots in a cell, and the width of a cell token in characters.
pub const CELL_WIDTH: usize = 6;

/// Token character for a raised dot.
pub const RAISED: char = 'O';

/// Token character for a flat dot.
pub const FLAT: char = '.';

/// Number of distinct cells (2^6 = 64).
pub const CELL_CARDINALITY: usize = 1 << CELL_WIDTH;

/// Unicode Braille base codepoint (U+2800, BRAILLE PATTERN BLANK).
///
/// Dot `n` of a pattern is bit `n - 1` of the offset from this base.
pub const BRAILLE_BASE: u32 = 0x2800;

/// Dot number carried by each token position.
///
/// Tokens are read row by row, left column first:
/// ```text
/// Dot Pattern:    Token positions:
/// ┌───┬───┐       ┌───┬───┐
/// │ 1 │ 4 │       │ 0 │ 1 │
/// │ 2 │ 5 │       │ 2 │ 3 │
/// │ 3 │ 6 │       │ 4 │ 5 │
/// └───┴───┘       └───┴───┘
/// ```
pub const TOKEN_DOTS: [u8; CELL_WIDTH] = [1, 4, 2, 5, 3, 6];
