//! Pseudo-legal destination generators, one per piece kind.
//!
//! "Pseudo-legal" means consistent with the piece's movement shape and the
//! current occupancy; whether the move leaves the mover's own king attacked
//! is decided in [`crate::check`].

use crate::{board::Board, types::*};

const ORTHOGONAL: [(i8, i8); 4] = [(0, 1), (0, -1), (1, 0), (-1, 0)];
const DIAGONAL: [(i8, i8); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];
const KNIGHT_JUMPS: [(i8, i8); 8] = [
    (-2, -1),
    (-2, 1),
    (-1, -2),
    (-1, 2),
    (1, -2),
    (1, 2),
    (2, -1),
    (2, 1),
];
const KING_STEPS: [(i8, i8); 8] = [
    (1, 1),
    (1, 0),
    (1, -1),
    (0, 1),
    (0, -1),
    (-1, 1),
    (-1, 0),
    (-1, -1),
];

/// Destinations of the piece standing on `from`, without duplicates.
/// Empty when `from` holds no piece.
pub fn pseudo_moves(board: &Board, from: Square) -> Vec<Square> {
    let mut out = Vec::with_capacity(28);
    let Some(pc) = board.get(from) else {
        return out;
    };
    match pc.kind {
        PieceKind::Pawn => gen_pawn(board, from, pc, &mut out),
        PieceKind::Knight => gen_knight(board, from, pc.color, &mut out),
        PieceKind::Bishop => gen_slider(board, from, pc.color, &mut out, &DIAGONAL),
        PieceKind::Rook => gen_slider(board, from, pc.color, &mut out, &ORTHOGONAL),
        PieceKind::Queen => {
            gen_slider(board, from, pc.color, &mut out, &ORTHOGONAL);
            gen_slider(board, from, pc.color, &mut out, &DIAGONAL);
        }
        PieceKind::King => {
            gen_king(board, from, pc.color, &mut out);
            if !pc.has_moved {
                gen_castle(board, from, pc.color, &mut out);
            }
        }
    }
    out
}

fn gen_pawn(board: &Board, from: Square, pc: Piece, out: &mut Vec<Square>) {
    let dir = pc.color.forward();

    // forward 1, then forward 2 for a pawn that has never moved
    if let Some(to) = from.offset(dir, 0)
        && board.is_empty(to)
    {
        out.push(to);
        if !pc.has_moved
            && let Some(to2) = from.offset(2 * dir, 0)
            && board.is_empty(to2)
        {
            out.push(to2);
        }
    }

    // captures + en-passant
    for dc in [-1, 1] {
        if let Some(to) = from.offset(dir, dc) {
            match board.get(to) {
                Some(target) if target.color != pc.color => out.push(to),
                None if board.en_passant() == Some(to) => out.push(to),
                _ => {}
            }
        }
    }
}

fn gen_knight(board: &Board, from: Square, c: Color, out: &mut Vec<Square>) {
    gen_steps(board, from, c, out, &KNIGHT_JUMPS);
}

fn gen_king(board: &Board, from: Square, c: Color, out: &mut Vec<Square>) {
    gen_steps(board, from, c, out, &KING_STEPS);
}

fn gen_steps(board: &Board, from: Square, c: Color, out: &mut Vec<Square>, deltas: &[(i8, i8)]) {
    for &(dr, dc) in deltas {
        if let Some(to) = from.offset(dr, dc) {
            match board.get(to) {
                None => out.push(to),
                Some(pc) if pc.color != c => out.push(to),
                _ => {}
            }
        }
    }
}

fn gen_slider(board: &Board, from: Square, c: Color, out: &mut Vec<Square>, dirs: &[(i8, i8)]) {
    for &(dr, dc) in dirs {
        let mut cur = from;
        while let Some(to) = cur.offset(dr, dc) {
            match board.get(to) {
                None => out.push(to),
                Some(pc) if pc.color != c => {
                    out.push(to);
                    break;
                }
                _ => break,
            }
            cur = to;
        }
    }
}

/// Two-column king steps toward an unmoved friendly rook in the corner of
/// the king's row, with every square between them empty.
///
/// Whether the king crosses an attacked square is not looked at here; see
/// [`crate::check::castling_path_is_safe`].
fn gen_castle(board: &Board, from: Square, c: Color, out: &mut Vec<Square>) {
    for (rook_col, step) in [(7, 1), (0, -1)] {
        let rook_sq = Square::new(from.row, rook_col);
        let rook_ready = matches!(
            board.get(rook_sq),
            Some(pc) if pc.color == c && pc.kind == PieceKind::Rook && !pc.has_moved
        );
        if !rook_ready {
            continue;
        }
        let Some(to) = from.offset(0, 2 * step) else {
            continue;
        };
        // Destination must lie strictly between king and rook
        if (rook_col - to.col) * step <= 0 {
            continue;
        }
        let mut between =
            (1..(rook_col - from.col).abs()).map(|i| Square::new(from.row, from.col + i * step));
        if between.all(|sq| board.is_empty(sq)) {
            out.push(to);
        }
    }
}

/// `true` if `to` is a castling destination for the king on `from`.
pub fn is_castling_move(board: &Board, from: Square, to: Square) -> bool {
    matches!(board.get(from), Some(pc) if pc.kind == PieceKind::King)
        && from.row == to.row
        && (to.col - from.col).abs() == 2
}

#[cfg(test)]
#[path = "movegen_tests.rs"]
mod movegen_tests;
