//! Board representation.
//!
//! Contains the core data structures for sides, pieces, squares, moves,
//! and the 8x8 board snapshot.

pub mod moves;
pub mod piece;
pub mod square;
pub mod state;

pub use moves::{Move, MoveParseError};
pub use piece::{Piece, PieceKind, Side, ALL_KINDS, ALL_SIDES};
pub use square::{BoardError, Square, BOARD_SIZE, SQUARE_COUNT};
pub use state::Board;
