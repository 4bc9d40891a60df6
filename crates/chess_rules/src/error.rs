//! Error types for the rules engine.
//!
//! Every error here is recoverable: a rejected call leaves the game exactly
//! as it was before the call.

use thiserror::Error;

use crate::types::{PieceKind, Square};

/// Malformed coordinate text such as `"e9"` or `"k2"`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseSquareError {
    #[error("invalid notation '{0}': expected a file letter and a rank digit, e.g. e2")]
    WrongLength(String),

    #[error("invalid file '{0}': expected a letter from a to h")]
    BadFile(char),

    #[error("invalid rank '{0}': expected a digit from 1 to 8")]
    BadRank(char),
}

/// Reasons a submitted move is rejected.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveError {
    #[error("no piece there ({0})")]
    NoPiece(Square),

    #[error("not your piece ({0})")]
    NotYourPiece(Square),

    #[error("illegal shape/blocked ({from} -> {to})")]
    IllegalShape { from: Square, to: Square },

    /// The move would leave the mover's king attacked, including castling
    /// through an attacked square.
    #[error("exposes king ({from} -> {to})")]
    ExposesKing { from: Square, to: Square },

    #[error("the game is over")]
    GameOver,
}

/// A piece kind that a pawn cannot promote to.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromotionError {
    #[error("cannot promote to {0:?}: choose a queen, rook, bishop or knight")]
    InvalidKind(PieceKind),
}
