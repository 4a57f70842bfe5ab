//! Board snapshot.
//!
//! Holds the contents of all 64 squares. The search treats boards as values:
//! every hypothetical move is applied to a copy, never to the caller's board.

use std::fmt;

use super::moves::Move;
use super::piece::{Piece, PieceKind, Side};
use super::square::{Square, SQUARE_COUNT};

/// Back-rank layout from file `a` to file `h`.
const BACK_RANK: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

/// Contents of every square at a point in time.
///
/// Uses a fixed-size array indexed by `Square::index()` for O(1) lookup.
/// This avoids heap allocation and makes the board trivially copyable.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Board {
    squares: [Option<Piece>; SQUARE_COUNT],
}

impl Board {
    /// Creates a board with no pieces.
    pub const fn empty() -> Self {
        Board {
            squares: [None; SQUARE_COUNT],
        }
    }

    /// Creates the conventional starting position, light on ranks 1 and 2.
    pub fn standard() -> Self {
        let mut board = Board::empty();
        for (file, &kind) in BACK_RANK.iter().enumerate() {
            let f = file * 8;
            board.squares[f] = Some(Piece::light(kind));
            board.squares[f + 1] = Some(Piece::light(PieceKind::Pawn));
            board.squares[f + 6] = Some(Piece::dark(PieceKind::Pawn));
            board.squares[f + 7] = Some(Piece::dark(kind));
        }
        board
    }

    /// Returns the piece on `sq`, if any.
    pub fn get(&self, sq: Square) -> Option<Piece> {
        self.squares[sq.index()]
    }

    /// Puts `piece` on `sq`, returning whatever was there before.
    pub fn set(&mut self, sq: Square, piece: Option<Piece>) -> Option<Piece> {
        std::mem::replace(&mut self.squares[sq.index()], piece)
    }

    /// Places a piece, overwriting the square. Builder-style helper.
    pub fn with(mut self, sq: Square, piece: Piece) -> Self {
        self.set(sq, Some(piece));
        self
    }

    /// Relocates the piece on `mv.from` to `mv.to` in place.
    ///
    /// Whatever stood on the destination is overwritten and returned; the
    /// source is cleared. A stationary move leaves the board unchanged.
    pub fn apply_in_place(&mut self, mv: Move) -> Option<Piece> {
        if mv.is_stationary() {
            return None;
        }
        let moving = self.set(mv.from, None);
        self.set(mv.to, moving)
    }

    /// Returns a copy of the board with `mv` applied.
    pub fn apply(&self, mv: Move) -> Board {
        let mut next = *self;
        next.apply_in_place(mv);
        next
    }

    /// Iterates over occupied squares in file-major, then rank-major order.
    pub fn occupied(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        self.squares
            .iter()
            .enumerate()
            .filter_map(|(i, p)| p.map(|piece| (Square::from_index(i), piece)))
    }

    /// Number of pieces belonging to `side`.
    pub fn count(&self, side: Side) -> usize {
        self.occupied().filter(|(_, p)| p.side == side).count()
    }

    /// Returns a copy with every piece handed to the other side, squares unchanged.
    pub fn swap_sides(&self) -> Board {
        let mut swapped = *self;
        for slot in swapped.squares.iter_mut() {
            *slot = slot.map(Piece::swapped);
        }
        swapped
    }
}

impl Default for Board {
    fn default() -> Self {
        Board::empty()
    }
}

impl fmt::Display for Board {
    /// Draws the board with rank 8 at the top, as seen from the light side.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "  a b c d e f g h")?;
        for rank in (0..8).rev() {
            write!(f, "{} ", rank + 1)?;
            for file in 0..8 {
                let c = self.squares[file * 8 + rank].map_or('.', Piece::fen_char);
                write!(f, "{} ", c)?;
            }
            writeln!(f, "{}", rank + 1)?;
        }
        write!(f, "  a b c d e f g h")
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Board(\n{}\n)", self)
    }
}
