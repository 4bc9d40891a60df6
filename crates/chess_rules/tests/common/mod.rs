//! Test positions written as eight strings, rank 8 first.
//!
//! `KQRBNP` are white, `kqrbnp` black, `.` is empty. Pawns off their starting
//! rank and kings or rooks off their home squares are marked as moved, so
//! castling and double steps follow from the diagram alone.

#![allow(dead_code)]

use chess_rules::{Board, Color, GameState, Piece, PieceKind, Square};

pub fn board_from_rows(rows: [&str; 8]) -> Board {
    let mut board = Board::empty();
    for (row, line) in rows.iter().enumerate() {
        assert_eq!(line.chars().count(), 8, "row {row} must have 8 cells: {line:?}");
        for (col, ch) in line.chars().enumerate() {
            if ch == '.' {
                continue;
            }
            let color = if ch.is_ascii_uppercase() {
                Color::White
            } else {
                Color::Black
            };
            let kind = match ch.to_ascii_lowercase() {
                'p' => PieceKind::Pawn,
                'n' => PieceKind::Knight,
                'b' => PieceKind::Bishop,
                'r' => PieceKind::Rook,
                'q' => PieceKind::Queen,
                'k' => PieceKind::King,
                _ => panic!("unknown piece letter {ch:?}"),
            };
            let sq = Square::new(row as i8, col as i8);
            let at_home = match kind {
                PieceKind::Pawn => sq.row == color.pawn_row(),
                PieceKind::King => sq.row == color.back_row() && sq.col == 4,
                PieceKind::Rook => sq.row == color.back_row() && (sq.col == 0 || sq.col == 7),
                _ => true,
            };
            let piece = if at_home {
                Piece::new(color, kind)
            } else {
                Piece::moved(color, kind)
            };
            board.place(piece, sq);
        }
    }
    board
}

pub fn game_from_rows(rows: [&str; 8], active: Color) -> GameState {
    GameState::from_board(board_from_rows(rows), active)
}

pub fn sq(text: &str) -> Square {
    text.parse().unwrap()
}

pub const KIWIPETE: [&str; 8] = [
    "r...k..r",
    "p.ppqpb.",
    "bn..pnp.",
    "...PN...",
    ".p..P...",
    "..N..Q.p",
    "PPPBBPPP",
    "R...K..R",
];
