//! Rewind Games library - terminal front end for time-travel tic-tac-toe
//!
//! # Architecture
//!
//! - **Config**: TOML settings with defaults ([`AppConfig`])
//! - **CLI**: `play` and `replay` commands ([`Cli`])
//! - **TUI**: ratatui renderer that owns one [`GameState`] and forwards
//!   keys and clicks to it ([`run_tui`])
//! - **Replay**: headless driver that prints the same view as text or JSON
//!
//! # Example
//!
//! ```
//! use rewind_games::{AppConfig, render_text, replay};
//!
//! let config = AppConfig::default();
//! let game = replay(&config, &[0, 1, 4, 2, 8], None).unwrap();
//! assert!(render_text(&game, true).contains("Winner: X"));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod cli;
mod config;
mod replay;
mod tui;

// Crate-level exports - Command line
pub use cli::{Cli, Command};

// Crate-level exports - Configuration
pub use config::{AppConfig, ConfigError};

// Crate-level exports - Headless replay
pub use replay::{render_json, render_text, replay};

// Crate-level exports - Terminal UI
pub use tui::{App, AppAction, Focus, cell_at, digit_cell, draw, move_cursor, run_tui};

// Crate-level exports - Game types
pub use rewind_tictactoe::{GameState, MoveError, Player, Position, Status};
