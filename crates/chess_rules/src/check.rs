//! Check detection and the legal-move filter.
//!
//! Legality is decided by simulation: a candidate is played on a scratch copy
//! of the board and rejected if the mover's king is attacked afterwards. The
//! same acceptance test backs both [`legal_moves`] and move submission, so the
//! two can never disagree.

use crate::{
    board::Board,
    error::MoveError,
    movegen::{is_castling_move, pseudo_moves},
    types::*,
};

/// What kind of relocation an accepted move performs.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MoveKind {
    Normal,
    /// Pawn capture onto the en-passant target; the captured pawn stands on `victim`.
    EnPassant { victim: Square },
    /// King steps two columns; the rook travels along as a side effect.
    Castle { rook_from: Square, rook_to: Square },
}

/// A move that passed every legality test.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ValidatedMove {
    pub mv: Move,
    pub piece: Piece,
    pub kind: MoveKind,
}

pub fn is_in_check(board: &Board, c: Color) -> bool {
    match board.find_king(c) {
        Some(ksq) => is_square_attacked(board, ksq, c.other()),
        None => false,
    }
}

/// `true` if some piece of colour `by` has `target` among its pseudo-legal destinations.
pub fn is_square_attacked(board: &Board, target: Square, by: Color) -> bool {
    board
        .pieces_of(by)
        .into_iter()
        .any(|(from, _)| pseudo_moves(board, from).contains(&target))
}

pub fn classify(board: &Board, from: Square, to: Square, pc: Piece) -> MoveKind {
    match pc.kind {
        PieceKind::King if is_castling_move(board, from, to) => {
            let rook_col = if to.col > from.col { 7 } else { 0 };
            MoveKind::Castle {
                rook_from: Square::new(from.row, rook_col),
                // rook lands on the square the king passed over
                rook_to: Square::new(from.row, (from.col + to.col) / 2),
            }
        }
        PieceKind::Pawn
            if to.col != from.col
                && board.is_empty(to)
                && board.en_passant() == Some(to) =>
        {
            MoveKind::EnPassant {
                victim: Square::new(to.row - pc.color.forward(), to.col),
            }
        }
        _ => MoveKind::Normal,
    }
}

/// Board after playing the king or pawn part of a move on a scratch copy.
/// An en-passant victim is removed first; a castling rook stays put.
pub fn simulate(board: &Board, from: Square, to: Square, kind: MoveKind) -> Board {
    let mut scratch = board.scratch_copy();
    if let MoveKind::EnPassant { victim } = kind {
        scratch.remove(victim);
    }
    scratch.move_piece(from, to);
    scratch
}

/// Checks the king alone on every square from its start to its castling
/// destination, inclusive, with the rest of the board unchanged.
pub fn castling_path_is_safe(board: &Board, from: Square, to: Square) -> bool {
    let Some(king) = board.get(from) else {
        return false;
    };
    let (lo, hi) = (from.col.min(to.col), from.col.max(to.col));
    (lo..=hi).all(|col| {
        let mut probe = board.scratch_copy();
        probe.remove(from);
        probe.place(king, Square::new(from.row, col));
        !is_in_check(&probe, king.color)
    })
}

/// Full acceptance test for `side` moving `from` -> `to`.
pub fn validate_move(
    board: &Board,
    side: Color,
    from: Square,
    to: Square,
) -> Result<ValidatedMove, MoveError> {
    let pc = board.get(from).ok_or(MoveError::NoPiece(from))?;
    if pc.color != side {
        return Err(MoveError::NotYourPiece(from));
    }
    if !pseudo_moves(board, from).contains(&to) {
        return Err(MoveError::IllegalShape { from, to });
    }
    check_candidate(board, from, to, pc)
}

/// Legality of a destination already known to be pseudo-legal.
fn check_candidate(
    board: &Board,
    from: Square,
    to: Square,
    pc: Piece,
) -> Result<ValidatedMove, MoveError> {
    let kind = classify(board, from, to, pc);
    let after = simulate(board, from, to, kind);
    if is_in_check(&after, pc.color) {
        return Err(MoveError::ExposesKing { from, to });
    }
    if matches!(kind, MoveKind::Castle { .. }) && !castling_path_is_safe(board, from, to) {
        return Err(MoveError::ExposesKing { from, to });
    }
    Ok(ValidatedMove {
        mv: Move::new(from, to),
        piece: pc,
        kind,
    })
}

/// Every move `side` may legally play on `board`.
pub fn legal_moves(board: &Board, side: Color) -> Vec<Move> {
    let mut out = Vec::with_capacity(64);
    for (from, pc) in board.pieces_of(side) {
        for to in pseudo_moves(board, from) {
            if let Ok(v) = check_candidate(board, from, to, pc) {
                out.push(v.mv);
            }
        }
    }
    out
}

pub fn has_legal_move(board: &Board, side: Color) -> bool {
    board.pieces_of(side).into_iter().any(|(from, pc)| {
        pseudo_moves(board, from)
            .into_iter()
            .any(|to| check_candidate(board, from, to, pc).is_ok())
    })
}

pub fn is_checkmate(board: &Board, side: Color) -> bool {
    is_in_check(board, side) && !has_legal_move(board, side)
}

pub fn is_stalemate(board: &Board, side: Color) -> bool {
    !is_in_check(board, side) && !has_legal_move(board, side)
}

#[cfg(test)]
#[path = "check_tests.rs"]
mod check_tests;
