//! Piece kinds, sides, and their text encodings.
//!
//! A piece carries only its kind and side: there is no "has moved" or
//! promotion state attached to it.

/// One of the two competing sides.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    Light,
    Dark,
}

/// Both sides in a fixed order.
pub const ALL_SIDES: [Side; 2] = [Side::Light, Side::Dark];

impl Side {
    /// Returns the other side.
    pub const fn opponent(self) -> Side {
        match self {
            Side::Light => Side::Dark,
            Side::Dark => Side::Light,
        }
    }

    /// Rank direction in which this side's pawns advance.
    pub const fn forward(self) -> i8 {
        match self {
            Side::Light => 1,
            Side::Dark => -1,
        }
    }

    /// Lowercase name used by the command protocol.
    pub const fn name(self) -> &'static str {
        match self {
            Side::Light => "light",
            Side::Dark => "dark",
        }
    }

    /// Parses a side from its protocol name or the FEN-style `w`/`b` letter.
    pub fn from_name(s: &str) -> Option<Side> {
        match s.to_ascii_lowercase().as_str() {
            "light" | "white" | "w" => Some(Side::Light),
            "dark" | "black" | "b" => Some(Side::Dark),
            _ => None,
        }
    }
}

/// The six kinds of piece.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

pub const ALL_KINDS: [PieceKind; 6] = [
    PieceKind::Pawn,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Rook,
    PieceKind::Queen,
    PieceKind::King,
];

impl PieceKind {
    /// Lowercase FEN letter for this kind.
    pub const fn fen_char(self) -> char {
        match self {
            PieceKind::Pawn => 'p',
            PieceKind::Knight => 'n',
            PieceKind::Bishop => 'b',
            PieceKind::Rook => 'r',
            PieceKind::Queen => 'q',
            PieceKind::King => 'k',
        }
    }

    /// Parses a kind from its FEN letter, ignoring case.
    pub fn from_fen_char(c: char) -> Option<PieceKind> {
        match c.to_ascii_lowercase() {
            'p' => Some(PieceKind::Pawn),
            'n' => Some(PieceKind::Knight),
            'b' => Some(PieceKind::Bishop),
            'r' => Some(PieceKind::Rook),
            'q' => Some(PieceKind::Queen),
            'k' => Some(PieceKind::King),
            _ => None,
        }
    }
}

/// A piece on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub kind: PieceKind,
    pub side: Side,
}

impl Piece {
    pub const fn new(kind: PieceKind, side: Side) -> Self {
        Piece { kind, side }
    }

    pub const fn light(kind: PieceKind) -> Self {
        Piece::new(kind, Side::Light)
    }

    pub const fn dark(kind: PieceKind) -> Self {
        Piece::new(kind, Side::Dark)
    }

    /// FEN letter: uppercase for light, lowercase for dark.
    pub fn fen_char(self) -> char {
        let c = self.kind.fen_char();
        match self.side {
            Side::Light => c.to_ascii_uppercase(),
            Side::Dark => c,
        }
    }

    /// Parses a piece from its FEN letter; case selects the side.
    pub fn from_fen_char(c: char) -> Option<Piece> {
        let kind = PieceKind::from_fen_char(c)?;
        let side = if c.is_ascii_uppercase() {
            Side::Light
        } else {
            Side::Dark
        };
        Some(Piece::new(kind, side))
    }

    /// The same kind on the other side.
    pub const fn swapped(self) -> Piece {
        Piece::new(self.kind, self.side.opponent())
    }
}
