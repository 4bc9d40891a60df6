//! Plain-text views of the board and move history.
//!
//! Pure string builders; printing them is left to the caller.

use std::fmt::Write;

use crate::{board::Board, game::MoveRecord, types::*};

/// How pieces are drawn.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Glyphs {
    #[default]
    Unicode,
    /// Letters, upper case for white.
    Ascii,
}

impl Glyphs {
    pub fn piece(self, pc: Piece) -> char {
        match self {
            Glyphs::Unicode => pc.kind.glyph(pc.color),
            Glyphs::Ascii => pc.kind.letter(pc.color),
        }
    }

    fn symbol(self, kind: PieceKind, color: Color) -> char {
        self.piece(Piece::new(color, kind))
    }
}

const FILES: &str = "   a b c d e f g h";

/// Board from white's side: rank 8 on top, file a on the left. Light empty
/// squares show a dot.
pub fn board_diagram(board: &Board, glyphs: Glyphs) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{FILES}");
    let _ = writeln!(out, "  +-----------------+");
    for row in 0..8i8 {
        let rank = 8 - row;
        let _ = write!(out, "{rank} |");
        for col in 0..8i8 {
            let cell = match board.get(Square::new(row, col)) {
                Some(pc) => glyphs.piece(pc),
                None if (row + col) % 2 == 0 => '.',
                None => ' ',
            };
            let _ = write!(out, " {cell}");
        }
        let _ = writeln!(out, " | {rank}");
    }
    let _ = writeln!(out, "  +-----------------+");
    let _ = writeln!(out, "{FILES}");
    out
}

/// Numbered history lines such as `1. ♙ e2 -> e4`.
pub fn history_listing(history: &[MoveRecord], glyphs: Glyphs) -> String {
    if history.is_empty() {
        return "No moves played yet.\n".to_string();
    }
    let mut out = String::new();
    for (i, rec) in history.iter().enumerate() {
        let _ = writeln!(
            out,
            "{}. {} {} -> {}",
            i + 1,
            glyphs.symbol(rec.piece, rec.color),
            rec.from,
            rec.to
        );
    }
    out
}

/// Captured pieces in capture order, e.g. `♟ ♞`.
pub fn captured_line(board: &Board, glyphs: Glyphs) -> String {
    board
        .captured()
        .iter()
        .map(|&pc| glyphs.piece(pc).to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
#[path = "render_tests.rs"]
mod render_tests;
