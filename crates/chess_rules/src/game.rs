//! Turn orchestration: validating, executing and recording moves.

use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::{
    board::Board,
    check::{self, MoveKind},
    error::MoveError,
    types::*,
};

/// Supplies the piece a pawn becomes when it reaches the last rank.
///
/// Only consulted when a submitted move actually promotes.
pub trait PromotionChooser {
    fn choose_promotion(&mut self, color: Color, at: Square) -> PromotionKind;
}

/// A fixed choice, e.g. `PromotionKind::Queen`.
impl PromotionChooser for PromotionKind {
    fn choose_promotion(&mut self, _color: Color, _at: Square) -> PromotionKind {
        *self
    }
}

impl<T: PromotionChooser + ?Sized> PromotionChooser for &mut T {
    fn choose_promotion(&mut self, color: Color, at: Square) -> PromotionKind {
        (**self).choose_promotion(color, at)
    }
}

/// How a finished game ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "result", rename_all = "lowercase")]
pub enum Outcome {
    Checkmate { winner: Color },
    Stalemate,
    Resignation { winner: Color },
}

impl Outcome {
    pub fn winner(self) -> Option<Color> {
        match self {
            Outcome::Checkmate { winner } | Outcome::Resignation { winner } => Some(winner),
            Outcome::Stalemate => None,
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Checkmate { winner } => write!(f, "checkmate, {winner} wins"),
            Outcome::Stalemate => write!(f, "stalemate, draw"),
            Outcome::Resignation { winner } => {
                write!(f, "{} resigns, {winner} wins", winner.other())
            }
        }
    }
}

/// Where the game stands for the side to move.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Status {
    InProgress { in_check: bool },
    Over(Outcome),
}

/// One entry of the move history.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveRecord {
    pub from: Square,
    pub to: Square,
    pub color: Color,
    /// Kind of the moving piece before the move (a promoting pawn stays a pawn here).
    pub piece: PieceKind,
}

/// What an accepted move did, for the caller to report.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MoveReport {
    pub mv: Move,
    pub piece: Piece,
    pub kind: MoveKind,
    pub captured: Option<Piece>,
    pub promoted_to: Option<PieceKind>,
    /// Whether the opponent is in check after the move.
    pub gives_check: bool,
    pub outcome: Option<Outcome>,
}

/// A single game: the board, the side to move, the history and the result.
#[derive(Clone, Debug)]
pub struct GameState {
    board: Board,
    active: Color,
    history: Vec<MoveRecord>,
    outcome: Option<Outcome>,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

impl GameState {
    /// New game from the standard initial position, white to move.
    pub fn new() -> Self {
        Self::from_board(Board::startpos(), Color::White)
    }

    /// Game continuing from an arbitrary position. If `active` has no legal
    /// move the game starts out finished.
    pub fn from_board(board: Board, active: Color) -> Self {
        let mut game = GameState {
            board,
            active,
            history: Vec::new(),
            outcome: None,
        };
        game.outcome = game.terminal_outcome();
        game
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn active_color(&self) -> Color {
        self.active
    }

    pub fn history(&self) -> &[MoveRecord] {
        &self.history
    }

    pub fn outcome(&self) -> Option<Outcome> {
        self.outcome
    }

    pub fn is_over(&self) -> bool {
        self.outcome.is_some()
    }

    pub fn status(&self) -> Status {
        match self.outcome {
            Some(outcome) => Status::Over(outcome),
            None => Status::InProgress {
                in_check: self.is_in_check(self.active),
            },
        }
    }

    pub fn is_in_check(&self, c: Color) -> bool {
        check::is_in_check(&self.board, c)
    }

    pub fn is_checkmate(&self, c: Color) -> bool {
        check::is_checkmate(&self.board, c)
    }

    pub fn is_stalemate(&self, c: Color) -> bool {
        check::is_stalemate(&self.board, c)
    }

    pub fn legal_moves(&self, c: Color) -> Vec<Move> {
        check::legal_moves(&self.board, c)
    }

    /// `true` if `mv` moves a pawn onto its last rank.
    pub fn is_promotion(&self, mv: Move) -> bool {
        matches!(
            self.board.get(mv.from),
            Some(pc) if pc.kind == PieceKind::Pawn && mv.to.row == pc.color.promotion_row()
        )
    }

    /// Plays `from` -> `to` for the side to move.
    ///
    /// On success the move has been executed with all of its side effects
    /// (capture, en passant, castling rook, promotion), recorded in the
    /// history, and the turn has passed to the opponent. On error nothing
    /// has changed.
    pub fn submit_move(
        &mut self,
        from: Square,
        to: Square,
        mut promotion: impl PromotionChooser,
    ) -> Result<MoveReport, MoveError> {
        if self.outcome.is_some() {
            return Err(MoveError::GameOver);
        }
        let v = check::validate_move(&self.board, self.active, from, to).inspect_err(|e| {
            debug!(side = %self.active, %from, %to, reason = %e, "move rejected");
        })?;
        let mover = v.piece;

        // Choice is collected before anything is touched
        let promoted_to = (mover.kind == PieceKind::Pawn && to.row == mover.color.promotion_row())
            .then(|| PieceKind::from(promotion.choose_promotion(mover.color, to)));

        let captured = match v.kind {
            MoveKind::Normal => self.board.move_piece(from, to),
            MoveKind::EnPassant { victim } => {
                let taken = self.board.remove(victim);
                if let Some(pawn) = taken {
                    self.board.record_capture(pawn);
                }
                self.board.move_piece(from, to);
                taken
            }
            MoveKind::Castle { rook_from, rook_to } => {
                self.board.move_piece(from, to);
                self.board.move_piece(rook_from, rook_to);
                None
            }
        };

        // En-passant target lives for exactly one reply
        let double_step = mover.kind == PieceKind::Pawn && (to.row - from.row).abs() == 2;
        self.board.set_en_passant(
            double_step.then(|| Square::new(from.row + mover.color.forward(), from.col)),
        );

        if let Some(kind) = promoted_to {
            self.board.place(Piece::moved(mover.color, kind), to);
        }

        self.history.push(MoveRecord {
            from,
            to,
            color: mover.color,
            piece: mover.kind,
        });
        self.active = self.active.other();
        self.outcome = self.terminal_outcome();

        debug!(
            side = %mover.color,
            piece = ?mover.kind,
            %from,
            %to,
            captured = ?captured.map(|p| p.kind),
            special = ?v.kind,
            "move played"
        );
        if let Some(outcome) = self.outcome {
            info!(%outcome, moves = self.history.len(), "game over");
        }

        Ok(MoveReport {
            mv: v.mv,
            piece: mover,
            kind: v.kind,
            captured,
            promoted_to,
            gives_check: self.is_in_check(self.active),
            outcome: self.outcome,
        })
    }

    /// The side to move gives up.
    pub fn resign(&mut self) -> Result<Outcome, MoveError> {
        if self.outcome.is_some() {
            return Err(MoveError::GameOver);
        }
        let outcome = Outcome::Resignation {
            winner: self.active.other(),
        };
        info!(%outcome, moves = self.history.len(), "game over");
        self.outcome = Some(outcome);
        Ok(outcome)
    }

    fn terminal_outcome(&self) -> Option<Outcome> {
        if check::has_legal_move(&self.board, self.active) {
            return None;
        }
        Some(if self.is_in_check(self.active) {
            Outcome::Checkmate {
                winner: self.active.other(),
            }
        } else {
            Outcome::Stalemate
        })
    }
}

#[cfg(test)]
#[path = "game_tests.rs"]
mod game_tests;
