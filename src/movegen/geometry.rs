//! Per-kind movement geometry.
//!
//! An opt-in [`MoveFilter`] that restricts each piece to the squares it could
//! reach in ordinary chess: sliding pieces need a clear line, knights jump, kings
//! step once, pawns push forward and capture diagonally. No piece may land on a
//! friendly piece.
//!
//! Check, pins, castling, en passant and promotion are not modelled. A pawn's
//! double step is allowed from its home rank, since pieces carry no "has
//! moved" state.

use crate::board::{Board, Move, Piece, PieceKind, Side, Square};

use super::MoveFilter;

/// Movement geometry filter.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PieceGeometry;

impl MoveFilter for PieceGeometry {
    fn permits(&self, board: &Board, mv: Move) -> bool {
        let piece = match board.get(mv.from) {
            Some(p) => p,
            None => return false,
        };
        if mv.is_stationary() {
            return false;
        }
        let target = board.get(mv.to);
        if matches!(target, Some(t) if t.side == piece.side) {
            return false;
        }

        let df = mv.to.file() as i8 - mv.from.file() as i8;
        let dr = mv.to.rank() as i8 - mv.from.rank() as i8;

        match piece.kind {
            PieceKind::Pawn => pawn_reaches(board, piece, mv, df, dr, target),
            PieceKind::Knight => matches!((df.abs(), dr.abs()), (1, 2) | (2, 1)),
            PieceKind::Bishop => df.abs() == dr.abs() && line_clear(board, mv.from, mv.to),
            PieceKind::Rook => (df == 0 || dr == 0) && line_clear(board, mv.from, mv.to),
            PieceKind::Queen => {
                (df == 0 || dr == 0 || df.abs() == dr.abs()) && line_clear(board, mv.from, mv.to)
            }
            PieceKind::King => df.abs() <= 1 && dr.abs() <= 1,
        }
    }
}

/// Rank on which `side`'s pawns start.
const fn pawn_home_rank(side: Side) -> u8 {
    match side {
        Side::Light => 1,
        Side::Dark => 6,
    }
}

fn pawn_reaches(
    board: &Board,
    pawn: Piece,
    mv: Move,
    df: i8,
    dr: i8,
    target: Option<Piece>,
) -> bool {
    let dir = pawn.side.forward();

    if df == 0 {
        if target.is_some() {
            return false;
        }
        if dr == dir {
            return true;
        }
        if dr == 2 * dir && mv.from.rank() == pawn_home_rank(pawn.side) {
            return line_clear(board, mv.from, mv.to);
        }
        return false;
    }

    // Diagonal steps only capture; own pieces were rejected by the caller.
    df.abs() == 1 && dr == dir && target.is_some()
}

/// True if every square strictly between `from` and `to` is empty.
///
/// Only meaningful for squares sharing a file, rank, or diagonal.
fn line_clear(board: &Board, from: Square, to: Square) -> bool {
    let step_f = (to.file() as i8 - from.file() as i8).signum();
    let step_r = (to.rank() as i8 - from.rank() as i8).signum();

    let mut cur = from.offset(step_f, step_r);
    while let Some(sq) = cur {
        if sq == to {
            return true;
        }
        if board.get(sq).is_some() {
            return false;
        }
        cur = sq.offset(step_f, step_r);
    }
    false
}
