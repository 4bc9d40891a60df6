use tracing::trace;

use crate::types::*;

/// The 8x8 grid, the captured-piece log and the en-passant target.
///
/// A piece's square is never stored on the piece itself: it is the index of
/// the cell holding it, so it cannot drift out of sync.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    squares: [Option<Piece>; 64],
    captured: Vec<Piece>,
    en_passant: Option<Square>, // square behind a pawn that just advanced 2
}

impl Default for Board {
    fn default() -> Self {
        Self::empty()
    }
}

impl Board {
    pub fn empty() -> Self {
        Board {
            squares: [None; 64],
            captured: Vec::new(),
            en_passant: None,
        }
    }

    pub fn startpos() -> Self {
        let mut b = Board::empty();

        // Pawns
        for col in 0..8 {
            b.place(
                Piece::new(Color::White, PieceKind::Pawn),
                Square::new(Color::White.pawn_row(), col),
            );
            b.place(
                Piece::new(Color::Black, PieceKind::Pawn),
                Square::new(Color::Black.pawn_row(), col),
            );
        }
        // Back ranks
        let back = [
            PieceKind::Rook,
            PieceKind::Knight,
            PieceKind::Bishop,
            PieceKind::Queen,
            PieceKind::King,
            PieceKind::Bishop,
            PieceKind::Knight,
            PieceKind::Rook,
        ];
        for (col, &kind) in back.iter().enumerate() {
            let col = col as i8;
            b.place(
                Piece::new(Color::White, kind),
                Square::new(Color::White.back_row(), col),
            );
            b.place(
                Piece::new(Color::Black, kind),
                Square::new(Color::Black.back_row(), col),
            );
        }
        b
    }

    /// Piece on `sq`; `None` for empty or off-board squares.
    pub fn get(&self, sq: Square) -> Option<Piece> {
        sq.index().and_then(|i| self.squares[i])
    }

    /// Puts `piece` on `sq`, replacing whatever was there. Off-board squares are ignored.
    pub fn place(&mut self, piece: Piece, sq: Square) {
        if let Some(i) = sq.index() {
            self.squares[i] = Some(piece);
        }
    }

    pub fn remove(&mut self, sq: Square) -> Option<Piece> {
        sq.index().and_then(|i| self.squares[i].take())
    }

    /// Relocates the piece on `from` to `to` and marks it as moved.
    ///
    /// A piece already on `to` is appended to the captured log and returned.
    /// Nothing happens if `from` is empty.
    pub fn move_piece(&mut self, from: Square, to: Square) -> Option<Piece> {
        if !to.is_in_bounds() {
            return None;
        }
        let mut piece = self.remove(from)?;
        let captured = self.remove(to);
        if let Some(c) = captured {
            self.captured.push(c);
        }
        piece.has_moved = true;
        self.place(piece, to);
        captured
    }

    pub fn is_empty(&self, sq: Square) -> bool {
        self.get(sq).is_none()
    }

    pub fn is_in_bounds(&self, sq: Square) -> bool {
        sq.is_in_bounds()
    }

    pub fn find_king(&self, c: Color) -> Option<Square> {
        self.occupied()
            .find(|(_, pc)| pc.color == c && pc.kind == PieceKind::King)
            .map(|(sq, _)| sq)
    }

    /// Every piece of colour `c` together with its square.
    pub fn pieces_of(&self, c: Color) -> Vec<(Square, Piece)> {
        self.occupied().filter(|(_, pc)| pc.color == c).collect()
    }

    /// Occupied squares, row 0 first.
    pub fn occupied(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        self.squares
            .iter()
            .enumerate()
            .filter_map(|(i, cell)| cell.map(|pc| (Square::from_index(i), pc)))
    }

    /// Captured pieces in capture order.
    pub fn captured(&self) -> &[Piece] {
        &self.captured
    }

    pub fn record_capture(&mut self, piece: Piece) {
        self.captured.push(piece);
    }

    pub fn en_passant(&self) -> Option<Square> {
        self.en_passant
    }

    pub fn set_en_passant(&mut self, target: Option<Square>) {
        if self.en_passant != target {
            trace!(?target, "en-passant target changed");
        }
        self.en_passant = target;
    }

    /// Independent copy for speculative moves. The captured log is left
    /// behind since nothing simulated ever reads it.
    pub fn scratch_copy(&self) -> Board {
        Board {
            squares: self.squares,
            captured: Vec::new(),
            en_passant: self.en_passant,
        }
    }
}

#[cfg(test)]
#[path = "board_tests.rs"]
mod board_tests;
