//! The console turn loop: show the board, read a command, apply it.
//!
//! All rules decisions are delegated to [`GameState`]; this module only
//! talks to the players.

use std::io::{self, BufRead, Write};

use anyhow::Result;
use chess_rules::{
    Color, GameState, Glyphs, MoveKind, MoveRecord, MoveReport, Outcome, Piece, PromotionChooser,
    PromotionKind, Square, board_diagram, captured_line, history_listing,
};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::command::{Command, parse_command, parse_promotion};
use crate::config::Config;

/// What gets exported when a game finishes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRecord {
    pub white: String,
    pub black: String,
    pub moves: Vec<MoveRecord>,
    pub outcome: Option<Outcome>,
}

pub struct Session<R, W> {
    game: GameState,
    white: String,
    black: String,
    glyphs: Glyphs,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(config: &Config, input: R, output: W) -> Self {
        Self::with_game(GameState::new(), config, input, output)
    }

    pub fn with_game(game: GameState, config: &Config, input: R, output: W) -> Self {
        Self {
            game,
            white: config.white_name.clone(),
            black: config.black_name.clone(),
            glyphs: config.glyphs(),
            input,
            output,
        }
    }

    pub fn game(&self) -> &GameState {
        &self.game
    }

    pub fn record(&self) -> GameRecord {
        GameRecord {
            white: self.white.clone(),
            black: self.black.clone(),
            moves: self.game.history().to_vec(),
            outcome: self.game.outcome(),
        }
    }

    fn name(&self, color: Color) -> String {
        match color {
            Color::White => self.white.clone(),
            Color::Black => self.black.clone(),
        }
    }

    /// Plays until the game ends or the input runs out. Returns the outcome,
    /// or `None` if the players left an unfinished game.
    pub fn run(&mut self) -> Result<Option<Outcome>> {
        writeln!(self.output, "{} plays white, {} plays black.", self.white, self.black)?;
        writeln!(self.output, "Enter moves as 'e2 e4'. Type 'help' for commands.")?;

        loop {
            self.show_board()?;
            if let Some(outcome) = self.game.outcome() {
                self.announce(outcome)?;
                return Ok(Some(outcome));
            }
            let side = self.game.active_color();
            if self.game.is_in_check(side) {
                writeln!(self.output, "Check! {}'s king is under attack.", self.name(side))?;
            }
            if !self.play_turn()? {
                info!(moves = self.game.history().len(), "input closed, game abandoned");
                return Ok(None);
            }
        }
    }

    fn show_board(&mut self) -> io::Result<()> {
        writeln!(self.output)?;
        write!(self.output, "{}", board_diagram(self.game.board(), self.glyphs))?;
        let captured = captured_line(self.game.board(), self.glyphs);
        if !captured.is_empty() {
            writeln!(self.output, "Captured: {captured}")?;
        }
        Ok(())
    }

    /// Reads commands until one ends the turn. `false` on end of input.
    fn play_turn(&mut self) -> Result<bool> {
        let side = self.game.active_color();
        loop {
            write!(self.output, "{} ({side}), your move: ", self.name(side))?;
            self.output.flush()?;

            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                return Ok(false);
            }

            match parse_command(&line) {
                Err(e) => writeln!(self.output, "{e}")?,
                Ok(Command::Help) => self.show_help()?,
                Ok(Command::History) => {
                    write!(self.output, "{}", history_listing(self.game.history(), self.glyphs))?
                }
                Ok(Command::Resign) => {
                    self.game.resign()?;
                    return Ok(true);
                }
                Ok(Command::Move { from, to }) => {
                    let mut prompt = PromotionPrompt {
                        input: &mut self.input,
                        output: &mut self.output,
                        glyphs: self.glyphs,
                        failed: None,
                    };
                    let result = self.game.submit_move(from, to, &mut prompt);
                    if let Some(e) = prompt.failed {
                        return Err(e.into());
                    }
                    match result {
                        Ok(report) => {
                            self.report(&report)?;
                            return Ok(true);
                        }
                        Err(e) => writeln!(self.output, "Rejected: {e}")?,
                    }
                }
            }
        }
    }

    fn report(&mut self, report: &MoveReport) -> io::Result<()> {
        let color = report.piece.color;
        match report.kind {
            MoveKind::Castle { .. } => writeln!(self.output, "Castled.")?,
            MoveKind::EnPassant { .. } => writeln!(self.output, "En passant capture.")?,
            MoveKind::Normal => {}
        }
        if let Some(taken) = report.captured {
            writeln!(self.output, "Captured {}.", self.glyphs.piece(taken))?;
        }
        if let Some(kind) = report.promoted_to {
            writeln!(
                self.output,
                "Pawn promoted to {}.",
                self.glyphs.piece(Piece::new(color, kind))
            )?;
        }
        Ok(())
    }

    fn announce(&mut self, outcome: Outcome) -> io::Result<()> {
        match outcome {
            Outcome::Checkmate { winner } => {
                writeln!(self.output, "Checkmate! {} wins.", self.name(winner))
            }
            Outcome::Stalemate => writeln!(self.output, "Stalemate! The game is a draw."),
            Outcome::Resignation { winner } => writeln!(
                self.output,
                "{} resigns. {} wins.",
                self.name(winner.other()),
                self.name(winner)
            ),
        }
    }

    fn show_help(&mut self) -> io::Result<()> {
        writeln!(self.output, "  e2 e4    move the piece on e2 to e4 (e2e4 works too)")?;
        writeln!(self.output, "  history  list the moves played so far")?;
        writeln!(self.output, "  resign   give up the game (also: abandon)")?;
        writeln!(self.output, "  help     show this list")
    }
}

/// Asks the promoting player which piece they want, re-asking on bad input.
struct PromotionPrompt<'a, R, W> {
    input: &'a mut R,
    output: &'a mut W,
    glyphs: Glyphs,
    failed: Option<io::Error>,
}

impl<R: BufRead, W: Write> PromotionPrompt<'_, R, W> {
    fn ask(&mut self, color: Color, at: Square) -> io::Result<PromotionKind> {
        writeln!(self.output, "Pawn promotion on {at}! Choose a piece:")?;
        for (i, kind) in PromotionKind::ALL.into_iter().enumerate() {
            let piece = Piece::new(color, kind.into());
            writeln!(
                self.output,
                "  {}. {:?} ({})",
                i + 1,
                piece.kind,
                self.glyphs.piece(piece)
            )?;
        }
        loop {
            write!(self.output, "Your choice: ")?;
            self.output.flush()?;
            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                return Err(io::Error::new(
                    io::ErrorKind::UnexpectedEof,
                    "input closed during promotion",
                ));
            }
            match parse_promotion(&line) {
                Some(kind) => return Ok(kind),
                None => writeln!(self.output, "Invalid choice, enter 1-4 or q/r/b/n.")?,
            }
        }
    }
}

impl<R: BufRead, W: Write> PromotionChooser for PromotionPrompt<'_, R, W> {
    fn choose_promotion(&mut self, color: Color, at: Square) -> PromotionKind {
        match self.ask(color, at) {
            Ok(kind) => kind,
            Err(e) => {
                // The move still completes; the error surfaces right after
                warn!(error = %e, "promotion prompt failed, promoting to a queen");
                self.failed = Some(e);
                PromotionKind::Queen
            }
        }
    }
}

#[cfg(test)]
#[path = "session_tests.rs"]
mod session_tests;
