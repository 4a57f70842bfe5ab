//! Move enumeration.
//!
//! Produces every relocation available to one side. Each source square holding
//! a piece of that side is paired with all 64 destinations, and the candidates
//! pass through a [`MoveFilter`]: the injectable legality predicate. The
//! default filter only drops stationary moves, so any piece may go anywhere and
//! capture whatever stands on the destination.

pub mod geometry;

use crate::board::{Board, Move, Side, Square};

pub use geometry::PieceGeometry;

/// Decides whether a candidate relocation is allowed.
///
/// The search never inspects movement rules itself; filters are the only place
/// where legality lives.
pub trait MoveFilter: Sync {
    fn permits(&self, board: &Board, mv: Move) -> bool;
}

/// No movement restrictions beyond ownership.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FreeMovement {
    allow_stationary: bool,
}

impl FreeMovement {
    /// Free movement that also yields the degenerate `from == to` move for
    /// every piece, giving exactly 64 destinations per source.
    pub const fn with_stationary() -> Self {
        FreeMovement {
            allow_stationary: true,
        }
    }
}

impl MoveFilter for FreeMovement {
    fn permits(&self, _board: &Board, mv: Move) -> bool {
        self.allow_stationary || !mv.is_stationary()
    }
}

/// Named rule sets selectable through configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Rules {
    /// Any owned piece to any other square.
    #[default]
    Free,
    /// Per-kind movement geometry with path blocking.
    Geometric,
}

impl Rules {
    pub const fn name(self) -> &'static str {
        match self {
            Rules::Free => "free",
            Rules::Geometric => "geometric",
        }
    }

    pub fn from_name(s: &str) -> Option<Rules> {
        match s.to_ascii_lowercase().as_str() {
            "free" => Some(Rules::Free),
            "geometric" => Some(Rules::Geometric),
            _ => None,
        }
    }
}

impl MoveFilter for Rules {
    fn permits(&self, board: &Board, mv: Move) -> bool {
        match self {
            Rules::Free => FreeMovement::default().permits(board, mv),
            Rules::Geometric => PieceGeometry.permits(board, mv),
        }
    }
}

/// Enumerates `side`'s moves under the default free-movement rules.
pub fn pseudo_moves(board: &Board, side: Side) -> Vec<Move> {
    moves_with(board, side, &FreeMovement::default())
}

/// Enumerates `side`'s moves that `filter` permits.
///
/// Order is deterministic: sources in file-major, then rank-major order, and
/// for each source the destinations in the same order.
pub fn moves_with<F: MoveFilter + ?Sized>(board: &Board, side: Side, filter: &F) -> Vec<Move> {
    let mut moves = Vec::new();

    for (from, piece) in board.occupied() {
        if piece.side != side {
            continue;
        }
        for to in Square::all() {
            let mv = Move::new(from, to);
            if filter.permits(board, mv) {
                moves.push(mv);
            }
        }
    }

    moves
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{Piece, PieceKind};

    fn sq(s: &str) -> Square {
        s.parse().unwrap()
    }

    #[test]
    fn no_pieces_no_moves() {
        assert!(pseudo_moves(&Board::empty(), Side::Light).is_empty());
        let board = Board::empty().with(sq("d4"), Piece::dark(PieceKind::Queen));
        assert!(pseudo_moves(&board, Side::Light).is_empty());
    }

    #[test]
    fn default_excludes_stationary_moves() {
        let board = Board::empty().with(sq("d4"), Piece::light(PieceKind::Pawn));
        let moves = pseudo_moves(&board, Side::Light);
        assert_eq!(moves.len(), 63);
        assert!(moves.iter().all(|m| !m.is_stationary()));
    }

    #[test]
    fn with_stationary_yields_all_destinations() {
        let board = Board::standard();
        let moves = moves_with(&board, Side::Dark, &FreeMovement::with_stationary());
        assert_eq!(moves.len(), 16 * 64);
    }

    #[test]
    fn only_own_pieces_move() {
        let board = Board::standard();
        for mv in pseudo_moves(&board, Side::Light) {
            assert_eq!(board.get(mv.from).map(|p| p.side), Some(Side::Light));
        }
    }

    #[test]
    fn free_movement_may_land_on_anything() {
        let board = Board::empty()
            .with(sq("a1"), Piece::light(PieceKind::Rook))
            .with(sq("a2"), Piece::light(PieceKind::Pawn))
            .with(sq("h8"), Piece::dark(PieceKind::King));
        let moves = pseudo_moves(&board, Side::Light);
        assert!(moves.contains(&Move::new(sq("a1"), sq("a2"))));
        assert!(moves.contains(&Move::new(sq("a1"), sq("h8"))));
    }

    #[test]
    fn enumeration_order_is_file_then_rank() {
        let board = Board::empty()
            .with(sq("b1"), Piece::light(PieceKind::Knight))
            .with(sq("a3"), Piece::light(PieceKind::Knight));
        let moves = pseudo_moves(&board, Side::Light);
        assert_eq!(moves[0], Move::new(sq("a3"), sq("a1")));
        assert_eq!(moves[1], Move::new(sq("a3"), sq("a2")));
        assert_eq!(moves[2], Move::new(sq("a3"), sq("a4")));
        assert_eq!(moves[63], Move::new(sq("b1"), sq("a1")));
    }

    #[test]
    fn rules_names_roundtrip() {
        for rules in [Rules::Free, Rules::Geometric] {
            assert_eq!(Rules::from_name(rules.name()), Some(rules));
        }
        assert_eq!(Rules::from_name("chess960"), None);
    }

    #[test]
    fn geometric_rules_restrict_the_start_position() {
        let board = Board::standard();
        // 16 pawn pushes plus 4 knight jumps.
        assert_eq!(moves_with(&board, Side::Light, &Rules::Geometric).len(), 20);
        assert_eq!(moves_with(&board, Side::Dark, &Rules::Geometric).len(), 20);
    }
}
