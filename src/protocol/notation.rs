//! Board placement notation.
//!
//! Uses the piece-placement field of FEN: eight ranks from rank 8 down to
//! rank 1, separated by `/`. Uppercase letters are light pieces, lowercase
//! letters dark pieces, and digits count runs of empty squares.
//!
//! Example: `rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR`

use crate::board::{Board, Piece, Side, Square};

/// Placement string of the conventional starting position.
pub const STARTPOS: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR";

/// Errors that can occur during placement parsing.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NotationError {
    #[error("expected 8 ranks separated by '/', got {0}")]
    WrongRankCount(usize),

    #[error("invalid piece character: '{0}'")]
    InvalidPiece(char),

    #[error("rank {rank} describes {files} files, expected 8")]
    WrongRankLength { rank: u8, files: usize },

    #[error("invalid side: '{0}'")]
    InvalidSide(String),
}

/// Parses a placement string into a board.
pub fn parse_placement(s: &str) -> Result<Board, NotationError> {
    let ranks: Vec<&str> = s.trim().split('/').collect();
    if ranks.len() != 8 {
        return Err(NotationError::WrongRankCount(ranks.len()));
    }

    let mut board = Board::empty();
    for (row, text) in ranks.iter().enumerate() {
        let rank = 7 - row as u8;
        let mut file = 0usize;
        for c in text.chars() {
            if let Some(run) = c.to_digit(10) {
                if run == 0 || run > 8 {
                    return Err(NotationError::InvalidPiece(c));
                }
                file += run as usize;
                continue;
            }
            let piece = Piece::from_fen_char(c).ok_or(NotationError::InvalidPiece(c))?;
            if file >= 8 {
                return Err(NotationError::WrongRankLength {
                    rank: rank + 1,
                    files: file + 1,
                });
            }
            board.set(Square::from_index(file * 8 + rank as usize), Some(piece));
            file += 1;
        }
        if file != 8 {
            return Err(NotationError::WrongRankLength {
                rank: rank + 1,
                files: file,
            });
        }
    }

    Ok(board)
}

/// Encodes a board as a placement string.
pub fn encode_placement(board: &Board) -> String {
    let mut out = String::with_capacity(64 + 7);
    for rank in (0..8).rev() {
        let mut empty = 0;
        for file in 0..8 {
            match board.get(Square::from_index(file * 8 + rank)) {
                Some(piece) => {
                    if empty > 0 {
                        out.push_str(&empty.to_string());
                        empty = 0;
                    }
                    out.push(piece.fen_char());
                }
                None => empty += 1,
            }
        }
        if empty > 0 {
            out.push_str(&empty.to_string());
        }
        if rank > 0 {
            out.push('/');
        }
    }
    out
}

/// Parses a side token (`light`, `dark`, `w`, `b`).
pub fn parse_side(s: &str) -> Result<Side, NotationError> {
    Side::from_name(s).ok_or_else(|| NotationError::InvalidSide(s.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::PieceKind;

    fn sq(s: &str) -> Square {
        s.parse().unwrap()
    }

    #[test]
    fn startpos_parses_to_standard_board() {
        assert_eq!(parse_placement(STARTPOS).unwrap(), Board::standard());
    }

    #[test]
    fn encode_standard_board() {
        assert_eq!(encode_placement(&Board::standard()), STARTPOS);
        assert_eq!(encode_placement(&Board::empty()), "8/8/8/8/8/8/8/8");
    }

    #[test]
    fn sparse_board_roundtrip() {
        let board = Board::empty()
            .with(sq("a1"), Piece::light(PieceKind::King))
            .with(sq("a2"), Piece::dark(PieceKind::Pawn))
            .with(sq("h8"), Piece::dark(PieceKind::Queen));
        let text = encode_placement(&board);
        assert_eq!(text, "7q/8/8/8/8/8/p7/K7");
        assert_eq!(parse_placement(&text).unwrap(), board);
    }

    #[test]
    fn wrong_rank_count() {
        assert_eq!(
            parse_placement("8/8/8"),
            Err(NotationError::WrongRankCount(3))
        );
    }

    #[test]
    fn invalid_piece_character() {
        assert_eq!(
            parse_placement("8/8/8/8/8/8/8/7x"),
            Err(NotationError::InvalidPiece('x'))
        );
        assert_eq!(
            parse_placement("8/8/8/8/8/8/8/09"),
            Err(NotationError::InvalidPiece('0'))
        );
    }

    #[test]
    fn ranks_must_cover_eight_files() {
        assert_eq!(
            parse_placement("8/8/8/8/8/8/8/7"),
            Err(NotationError::WrongRankLength { rank: 1, files: 7 })
        );
        assert_eq!(
            parse_placement("8/8/8/8/8/8/8/8K"),
            Err(NotationError::WrongRankLength { rank: 1, files: 9 })
        );
        assert_eq!(
            parse_placement("9/8/8/8/8/8/8/8"),
            Err(NotationError::InvalidPiece('9'))
        );
    }

    #[test]
    fn side_tokens() {
        assert_eq!(parse_side("w"), Ok(Side::Light));
        assert_eq!(parse_side("dark"), Ok(Side::Dark));
        assert!(matches!(parse_side("x"), Err(NotationError::InvalidSide(_))));
    }
}
