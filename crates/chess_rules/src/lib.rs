pub mod board;
pub mod check;
pub mod error;
pub mod game;
pub mod movegen;
pub mod perft;
pub mod render;
pub mod types;

// Re-export the rules engine surface
pub use board::*;
pub use check::{MoveKind, ValidatedMove};
pub use error::*;
pub use game::*;
pub use movegen::pseudo_moves;
pub use perft::perft;
pub use render::{Glyphs, board_diagram, captured_line, history_listing};
pub use types::*;
