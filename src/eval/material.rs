//! Material evaluation.
//!
//! Scores are always expressed as light material minus dark material,
//! whichever side is being searched. Nothing else about the position is
//! considered: a missing king simply drops its term.

use crate::board::{Board, PieceKind, Side};

/// Signed material balance, light minus dark.
pub type Score = i32;

/// Fixed value of each piece kind.
pub const fn piece_value(kind: PieceKind) -> Score {
    match kind {
        PieceKind::Pawn => 1,
        PieceKind::Knight => 3,
        PieceKind::Bishop => 3,
        PieceKind::Rook => 5,
        PieceKind::Queen => 9,
        PieceKind::King => 100,
    }
}

/// Total value of `side`'s pieces.
pub fn material(board: &Board, side: Side) -> Score {
    board
        .occupied()
        .filter(|(_, p)| p.side == side)
        .map(|(_, p)| piece_value(p.kind))
        .sum()
}

/// Evaluates the board as light material minus dark material.
pub fn evaluate(board: &Board) -> Score {
    board
        .occupied()
        .map(|(_, p)| match p.side {
            Side::Light => piece_value(p.kind),
            Side::Dark => -piece_value(p.kind),
        })
        .sum()
}

/// Re-expresses a light-minus-dark score from `side`'s point of view.
pub const fn relative(score: Score, side: Side) -> Score {
    match side {
        Side::Light => score,
        Side::Dark => -score,
    }
}
