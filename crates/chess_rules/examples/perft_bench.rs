//! Perft benchmark for profiling with cargo-flamegraph.
//!
//! Usage:
//!   cargo flamegraph --example perft_bench -p chess_rules -- [depth] [name]
//!
//! Examples:
//!   # Default: depth 4 over every position below
//!   cargo flamegraph --example perft_bench -p chess_rules
//!
//!   # One position only
//!   cargo flamegraph --example perft_bench -p chess_rules -- 3 kiwipete

use chess_rules::{Board, Color, GameState, Piece, PieceKind, Square, perft};
use std::env;
use std::time::{Duration, Instant};

/// Positions as diagrams, rank 8 first; white to move in all of them.
const TEST_POSITIONS: &[(&str, [&str; 8])] = &[
    (
        "startpos",
        [
            "rnbqkbnr", "pppppppp", "........", "........", "........", "........",
            "PPPPPPPP", "RNBQKBNR",
        ],
    ),
    (
        "kiwipete",
        [
            "r...k..r", "p.ppqpb.", "bn..pnp.", "...PN...", ".p..P...", "..N..Q.p",
            "PPPBBPPP", "R...K..R",
        ],
    ),
    (
        "endgame",
        [
            "........", "..p.....", "...p....", "KP.....r", ".R...p.k", "........",
            "....P.P.", "........",
        ],
    ),
    (
        "promotions",
        [
            "r...k..r", "Pppp.ppp", ".b...nbN", "nP......", "BBP.P...", "q....N..",
            "Pp.P..PP", "R..Q.RK.",
        ],
    ),
];

fn main() {
    let args: Vec<String> = env::args().collect();

    let depth: u8 = args.get(1).and_then(|s| s.parse().ok()).unwrap_or(4);

    match args.get(2) {
        Some(name) => match TEST_POSITIONS.iter().find(|(n, _)| n == name) {
            Some((name, rows)) => run_single_position(name, rows, depth),
            None => {
                let known: Vec<&str> = TEST_POSITIONS.iter().map(|(n, _)| *n).collect();
                eprintln!("unknown position {name:?}; known: {}", known.join(", "));
            }
        },
        None => run_all_positions(depth),
    }
}

/// Pieces off their home squares count as moved, so castling and double
/// steps follow from the diagram.
fn game_from_rows(rows: &[&str; 8]) -> GameState {
    let mut board = Board::empty();
    for (row, line) in rows.iter().enumerate() {
        for (col, ch) in line.chars().enumerate() {
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
                _ => continue,
            };
            let sq = Square::new(row as i8, col as i8);
            let home = match kind {
                PieceKind::Pawn => sq.row == color.pawn_row(),
                PieceKind::King => sq.row == color.back_row() && sq.col == 4,
                PieceKind::Rook => sq.row == color.back_row() && (sq.col == 0 || sq.col == 7),
                _ => true,
            };
            let piece = if home {
                Piece::new(color, kind)
            } else {
                Piece::moved(color, kind)
            };
            board.place(piece, sq);
        }
    }
    GameState::from_board(board, Color::White)
}

fn nps(nodes: u64, elapsed: Duration) -> f64 {
    if elapsed.as_secs_f64() > 0.0 {
        nodes as f64 / elapsed.as_secs_f64()
    } else {
        0.0
    }
}

fn run_single_position(name: &str, rows: &[&str; 8], depth: u8) {
    let game = game_from_rows(rows);

    println!("Position: {name}");
    println!("Depth: {depth}");
    println!();

    // Warm-up run at lower depth
    if depth > 2 {
        let _ = perft(&game, depth.saturating_sub(2));
    }

    let start = Instant::now();
    let nodes = perft(&game, depth);
    let elapsed = start.elapsed();

    println!("Nodes: {nodes}");
    println!("Time: {elapsed:.3?}");
    println!("NPS: {:.0}", nps(nodes, elapsed));
}

fn run_all_positions(depth: u8) {
    println!("=== Perft Benchmark Suite ===");
    println!("Depth: {depth}");
    println!();

    let mut total_nodes = 0u64;
    let mut total_time = Duration::ZERO;

    for (name, rows) in TEST_POSITIONS {
        let game = game_from_rows(rows);

        print!("{name:.<30}");

        let start = Instant::now();
        let nodes = perft(&game, depth);
        let elapsed = start.elapsed();

        total_nodes += nodes;
        total_time += elapsed;

        println!(
            " {nodes:>12} nodes in {elapsed:>8.3?} ({:>10.0} nps)",
            nps(nodes, elapsed)
        );
    }

    println!();
    println!("{:=<70}", "");
    println!(
        "TOTAL: {total_nodes} nodes in {total_time:.3?} ({:.0} nps)",
        nps(total_nodes, total_time)
    );
}
