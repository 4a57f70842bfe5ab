//! Board coordinates.
//!
//! Squares are addressed by file (0 = `a`) and rank (0 = `1`). Raw
//! coordinates are validated on construction so nothing downstream can index
//! outside the 8x8 grid.

use std::fmt;
use std::str::FromStr;

/// Number of files (and ranks) on the board.
pub const BOARD_SIZE: u8 = 8;

/// Number of squares on the board.
pub const SQUARE_COUNT: usize = 64;

/// Errors raised when building squares from untrusted input.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BoardError {
    #[error("coordinate out of range: file {file}, rank {rank} (expected 0-7)")]
    InvalidCoordinate { file: i64, rank: i64 },

    #[error("invalid square: '{0}'")]
    InvalidSquare(String),
}

/// A square on the 8x8 board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Square {
    file: u8,
    rank: u8,
}

impl Square {
    /// Creates a square from raw coordinates, rejecting anything outside 0-7.
    pub fn new(file: i64, rank: i64) -> Result<Square, BoardError> {
        if (0..BOARD_SIZE as i64).contains(&file) && (0..BOARD_SIZE as i64).contains(&rank) {
            Ok(Square {
                file: file as u8,
                rank: rank as u8,
            })
        } else {
            Err(BoardError::InvalidCoordinate { file, rank })
        }
    }

    /// Creates a square from a file-major index (0 = a1, 1 = a2, ..., 63 = h8).
    ///
    /// Panics if `index >= 64`; only used with indices derived from the board.
    pub const fn from_index(index: usize) -> Square {
        assert!(index < SQUARE_COUNT);
        Square {
            file: (index / 8) as u8,
            rank: (index % 8) as u8,
        }
    }

    /// File-major index, matching enumeration order.
    pub const fn index(self) -> usize {
        self.file as usize * 8 + self.rank as usize
    }

    pub const fn file(self) -> u8 {
        self.file
    }

    pub const fn rank(self) -> u8 {
        self.rank
    }

    /// Returns the square displaced by `(df, dr)`, or `None` off the board.
    pub fn offset(self, df: i8, dr: i8) -> Option<Square> {
        Square::new(self.file as i64 + df as i64, self.rank as i64 + dr as i64).ok()
    }

    /// Iterates over all 64 squares in file-major, then rank-major order.
    pub fn all() -> impl Iterator<Item = Square> + Clone {
        (0..SQUARE_COUNT).map(Square::from_index)
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", (b'a' + self.file) as char, (b'1' + self.rank) as char)
    }
}

impl FromStr for Square {
    type Err = BoardError;

    /// Parses algebraic notation such as `e2`.
    fn from_str(s: &str) -> Result<Square, BoardError> {
        let bytes = s.as_bytes();
        if bytes.len() != 2 {
            return Err(BoardError::InvalidSquare(s.to_string()));
        }
        let file = bytes[0].to_ascii_lowercase();
        let rank = bytes[1];
        if !(b'a'..=b'h').contains(&file) || !(b'1'..=b'8').contains(&rank) {
            return Err(BoardError::InvalidSquare(s.to_string()));
        }
        Ok(Square {
            file: file - b'a',
            rank: rank - b'1',
        })
    }
}
