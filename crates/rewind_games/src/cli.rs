//! Command-line interface for rewind_games.

use clap::{Parser, Subcommand};

/// Rewind Games - tic-tac-toe with move history navigation
#[derive(Parser, Debug)]
#[command(name = "rewind_games")]
#[command(about = "Tic-tac-toe with time travel", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML config file
    #[arg(short, long, global = true)]
    pub config: Option<std::path::PathBuf>,

    /// Subcommand to run (defaults to `play`)
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Play interactively in the terminal
    Play {
        /// List moves newest first
        #[arg(long)]
        descending: bool,
    },

    /// Apply moves headlessly and print the resulting game
    Replay {
        /// Cell indices (0-8, row-major) in play order
        moves: Vec<usize>,

        /// Step to jump to after all moves are applied
        #[arg(long)]
        jump: Option<usize>,

        /// List moves newest first
        #[arg(long)]
        descending: bool,

        /// Print the game view as JSON
        #[arg(long)]
        json: bool,
    },
}

impl Cli {
    /// Returns the chosen command, falling back to an ascending `play`.
    pub fn command_or_default(&self) -> Command {
        self.command
            .clone()
            .unwrap_or(Command::Play { descending: false })
    }
}

