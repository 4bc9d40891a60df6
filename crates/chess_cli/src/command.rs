//! Turning a line of player input into a command.

use chess_rules::{ParseSquareError, PromotionKind, Square};
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Move { from: Square, to: Square },
    Resign,
    History,
    Help,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    #[error("nothing entered: type a move such as e2 e4")]
    Empty,

    #[error("unrecognised input '{0}': use the format e2 e4")]
    Unknown(String),

    #[error(transparent)]
    Square(#[from] ParseSquareError),
}

/// Accepts `e2 e4`, `e2e4`, `resign`/`abandon`, `history` and `help`,
/// in any letter case.
pub fn parse_command(line: &str) -> Result<Command, CommandError> {
    let text = line.trim().to_lowercase();
    match text.as_str() {
        "" => return Err(CommandError::Empty),
        "resign" | "abandon" => return Ok(Command::Resign),
        "history" => return Ok(Command::History),
        "help" | "?" => return Ok(Command::Help),
        _ => {}
    }

    let tokens: Vec<&str> = text.split_whitespace().collect();
    let (from, to) = match tokens.as_slice() {
        [from, to] => (*from, *to),
        [joined] if joined.len() == 4 && joined.is_ascii() => joined.split_at(2),
        _ => return Err(CommandError::Unknown(text)),
    };
    Ok(Command::Move {
        from: from.parse()?,
        to: to.parse()?,
    })
}

/// Promotion answer: a menu number, a letter or the piece name.
pub fn parse_promotion(line: &str) -> Option<PromotionKind> {
    match line.trim().to_lowercase().as_str() {
        "1" | "q" | "queen" => Some(PromotionKind::Queen),
        "2" | "r" | "rook" => Some(PromotionKind::Rook),
        "3" | "b" | "bishop" => Some(PromotionKind::Bishop),
        "4" | "n" | "knight" => Some(PromotionKind::Knight),
        _ => None,
    }
}

#[cfg(test)]
#[path = "command_tests.rs"]
mod command_tests;
