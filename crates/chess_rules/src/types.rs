use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{ParseSquareError, PromotionError};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Color {
    White,
    Black,
}

impl Color {
    pub fn other(self) -> Color {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }

    /// Row delta of one pawn step. White starts on row 6 and walks toward row 0.
    pub fn forward(self) -> i8 {
        match self {
            Color::White => -1,
            Color::Black => 1,
        }
    }

    /// Row holding this side's king and rooks at the start of the game.
    pub fn back_row(self) -> i8 {
        match self {
            Color::White => 7,
            Color::Black => 0,
        }
    }

    pub fn pawn_row(self) -> i8 {
        match self {
            Color::White => 6,
            Color::Black => 1,
        }
    }

    /// Row on which this side's pawns promote (the opponent's back row).
    pub fn promotion_row(self) -> i8 {
        self.other().back_row()
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::White => write!(f, "white"),
            Color::Black => write!(f, "black"),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

impl PieceKind {
    /// English letter used in diagrams: upper case for white, lower case for black.
    pub fn letter(self, color: Color) -> char {
        let c = match self {
            PieceKind::Pawn => 'p',
            PieceKind::Knight => 'n',
            PieceKind::Bishop => 'b',
            PieceKind::Rook => 'r',
            PieceKind::Queen => 'q',
            PieceKind::King => 'k',
        };
        match color {
            Color::White => c.to_ascii_uppercase(),
            Color::Black => c,
        }
    }

    pub fn glyph(self, color: Color) -> char {
        match (color, self) {
            (Color::White, PieceKind::Pawn) => '♙',
            (Color::White, PieceKind::Knight) => '♘',
            (Color::White, PieceKind::Bishop) => '♗',
            (Color::White, PieceKind::Rook) => '♖',
            (Color::White, PieceKind::Queen) => '♕',
            (Color::White, PieceKind::King) => '♔',
            (Color::Black, PieceKind::Pawn) => '♟',
            (Color::Black, PieceKind::Knight) => '♞',
            (Color::Black, PieceKind::Bishop) => '♝',
            (Color::Black, PieceKind::Rook) => '♜',
            (Color::Black, PieceKind::Queen) => '♛',
            (Color::Black, PieceKind::King) => '♚',
        }
    }
}

/// The four kinds a pawn may become on the last rank.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PromotionKind {
    Queen,
    Rook,
    Bishop,
    Knight,
}

impl PromotionKind {
    pub const ALL: [PromotionKind; 4] = [
        PromotionKind::Queen,
        PromotionKind::Rook,
        PromotionKind::Bishop,
        PromotionKind::Knight,
    ];
}

impl From<PromotionKind> for PieceKind {
    fn from(kind: PromotionKind) -> Self {
        match kind {
            PromotionKind::Queen => PieceKind::Queen,
            PromotionKind::Rook => PieceKind::Rook,
            PromotionKind::Bishop => PieceKind::Bishop,
            PromotionKind::Knight => PieceKind::Knight,
        }
    }
}

impl TryFrom<PieceKind> for PromotionKind {
    type Error = PromotionError;

    fn try_from(kind: PieceKind) -> Result<Self, Self::Error> {
        match kind {
            PieceKind::Queen => Ok(PromotionKind::Queen),
            PieceKind::Rook => Ok(PromotionKind::Rook),
            PieceKind::Bishop => Ok(PromotionKind::Bishop),
            PieceKind::Knight => Ok(PromotionKind::Knight),
            PieceKind::Pawn | PieceKind::King => Err(PromotionError::InvalidKind(kind)),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Piece {
    pub color: Color,
    pub kind: PieceKind,
    /// Set once the piece has left its starting square. Drives castling
    /// eligibility and the pawn double step.
    pub has_moved: bool,
}

impl Piece {
    pub fn new(color: Color, kind: PieceKind) -> Self {
        Self {
            color,
            kind,
            has_moved: false,
        }
    }

    pub fn moved(color: Color, kind: PieceKind) -> Self {
        Self {
            color,
            kind,
            has_moved: true,
        }
    }
}

/// A (row, column) pair. Row 0 is black's back rank (rank 8), row 7 is
/// white's back rank (rank 1); column 0 is the a-file.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Square {
    pub row: i8,
    pub col: i8,
}

impl Square {
    pub const fn new(row: i8, col: i8) -> Self {
        Self { row, col }
    }

    pub fn is_in_bounds(self) -> bool {
        (0..8).contains(&self.row) && (0..8).contains(&self.col)
    }

    /// Square shifted by the given deltas, if it is still on the board.
    pub fn offset(self, d_row: i8, d_col: i8) -> Option<Square> {
        let to = Square::new(self.row + d_row, self.col + d_col);
        to.is_in_bounds().then_some(to)
    }

    /// Flat index into a 64-cell board, `None` when off the board.
    pub(crate) fn index(self) -> Option<usize> {
        self.is_in_bounds()
            .then(|| (self.row as usize) * 8 + self.col as usize)
    }

    pub(crate) fn from_index(idx: usize) -> Square {
        Square::new((idx / 8) as i8, (idx % 8) as i8)
    }

    /// All 64 squares, row 0 first.
    pub fn all() -> impl Iterator<Item = Square> {
        (0..64).map(Square::from_index)
    }

    pub fn notation(self) -> String {
        let f = (b'a' + self.col as u8) as char;
        let r = (b'8' - self.row as u8) as char;
        format!("{f}{r}")
    }

    pub fn from_notation(text: &str) -> Result<Square, ParseSquareError> {
        let mut chars = text.chars();
        let (Some(f), Some(r), None) = (chars.next(), chars.next(), chars.next()) else {
            return Err(ParseSquareError::WrongLength(text.to_string()));
        };
        if !('a'..='h').contains(&f) {
            return Err(ParseSquareError::BadFile(f));
        }
        if !('1'..='8').contains(&r) {
            return Err(ParseSquareError::BadRank(r));
        }
        let col = (f as u8 - b'a') as i8;
        let row = (b'8' - r as u8) as i8;
        Ok(Square::new(row, col))
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_in_bounds() {
            f.write_str(&self.notation())
        } else {
            write!(f, "({}, {})", self.row, self.col)
        }
    }
}

impl FromStr for Square {
    type Err = ParseSquareError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Square::from_notation(s)
    }
}

/// Coordinate text for a square, e.g. `(6, 4)` -> `"e2"`.
pub fn notation(sq: Square) -> String {
    sq.notation()
}

/// Square for coordinate text, e.g. `"e2"` -> `(6, 4)`.
pub fn position(text: &str) -> Result<Square, ParseSquareError> {
    Square::from_notation(text)
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    pub from: Square,
    pub to: Square,
}

impl Move {
    pub fn new(from: Square, to: Square) -> Self {
        Self { from, to }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.from, self.to)
    }
}

#[cfg(test)]
#[path = "types_tests.rs"]
mod types_tests;
