//! Moves between squares.
//!
//! A move is just a source and a destination. Captures are implied by the
//! destination being occupied, and there is no promotion choice to carry.

use std::fmt;
use std::str::FromStr;

use super::square::{BoardError, Square};

/// Errors that can occur when parsing move text.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MoveParseError {
    #[error("expected a move like 'e2e4', got '{0}'")]
    WrongLength(String),

    #[error(transparent)]
    Square(#[from] BoardError),
}

/// A relocation of the piece on `from` to `to`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    pub from: Square,
    pub to: Square,
}

impl Move {
    pub const fn new(from: Square, to: Square) -> Self {
        Move { from, to }
    }

    /// True when the piece would stay where it is.
    pub fn is_stationary(self) -> bool {
        self.from == self.to
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.from, self.to)
    }
}

impl FromStr for Move {
    type Err = MoveParseError;

    /// Parses coordinate notation (`a1a2`). A space or dash between the two
    /// squares is also accepted, matching `e2 e4` style input.
    fn from_str(s: &str) -> Result<Move, MoveParseError> {
        let compact: String = s
            .trim()
            .chars()
            .filter(|c| !c.is_whitespace() && *c != '-')
            .collect();
        if compact.len() != 4 || !compact.is_ascii() {
            return Err(MoveParseError::WrongLength(s.to_string()));
        }
        let from: Square = compact[..2].parse()?;
        let to: Square = compact[2..].parse()?;
        Ok(Move::new(from, to))
    }
}
