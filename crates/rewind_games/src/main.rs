//! Rewind Games - Unified CLI
//!
//! Interactive terminal game and headless replay.

use anyhow::{Context, Result};
use clap::Parser;
use rewind_games::{AppConfig, Cli, Command, render_json, render_text, replay, run_tui};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = AppConfig::load(cli.config.as_deref()).context("Failed to load configuration")?;

    match cli.command_or_default() {
        Command::Play { descending } => {
            let config = if descending {
                config.with_ascending(false)
            } else {
                config
            };
            run_tui(&config)
        }
        Command::Replay {
            moves,
            jump,
            descending,
            json,
        } => {
            let config = if descending {
                config.with_ascending(false)
            } else {
                config
            };
            run_replay(&config, &moves, jump, json)
        }
    }
}

/// Run a headless replay, logging to stderr
fn run_replay(config: &AppConfig, moves: &[usize], jump: Option<usize>, json: bool) -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    info!(count = moves.len(), "Replaying moves");
    let game = replay(config, moves, jump)?;
    let output = if json {
        render_json(&game, *config.show_coordinates())?
    } else {
        render_text(&game, *config.show_coordinates())
    };
    println!("{}", output);
    Ok(())
}
