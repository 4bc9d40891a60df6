//! Two-player chess in the terminal.
//!
//! Both players share one keyboard; moves are typed as `e2 e4`.

mod command;
mod config;
mod session;

use anyhow::{Context, Result};
use clap::Parser;
use std::io;
use std::path::{Path, PathBuf};
use tracing::info;
use tracing_subscriber::EnvFilter;

use config::{Config, DEFAULT_CONFIG};
use session::{GameRecord, Session};

/// Play a game of chess against a friend at the same terminal.
#[derive(Debug, Parser)]
#[command(name = "chess", version)]
struct Cli {
    /// Settings file (TOML). Defaults to ./chess.toml when present.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Name of the white player.
    #[arg(long)]
    white: Option<String>,

    /// Name of the black player.
    #[arg(long)]
    black: Option<String>,

    /// Draw pieces as letters instead of chess glyphs.
    #[arg(long)]
    ascii: bool,

    /// Write the finished game to this JSON file.
    #[arg(long)]
    record: Option<PathBuf>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => Config::load(path)?,
        None => Config::load_or_default(Path::new(DEFAULT_CONFIG))?,
    }
    .with_overrides(cli.white, cli.black, cli.ascii, cli.record);

    // Logs go to stderr so they never land inside the board
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    info!(white = %config.white_name, black = %config.black_name, "starting game");

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut session = Session::new(&config, stdin.lock(), stdout.lock());
    let outcome = session.run()?;
    info!(moves = session.game().history().len(), ?outcome, "session finished");

    if let Some(path) = &config.record_path {
        save_record(path, &session.record())?;
        info!(path = %path.display(), "game record written");
    }
    Ok(())
}

fn save_record(path: &Path, record: &GameRecord) -> Result<()> {
    let json = serde_json::to_string_pretty(record).context("failed to serialize game record")?;
    std::fs::write(path, json)
        .with_context(|| format!("failed to write game record {}", path.display()))
}
