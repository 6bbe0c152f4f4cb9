//! Headless replay: apply a move list and print the resulting game.

use anyhow::{Context, Result};
use rewind_tictactoe::GameState;
use tracing::{info, instrument, warn};

use crate::AppConfig;

/// Plays `moves` in order, then optionally jumps to `jump`.
///
/// Refused moves are skipped with a warning, the same way the interactive
/// game ignores them. An out-of-range jump is an error.
#[instrument(skip(config))]
pub fn replay(config: &AppConfig, moves: &[usize], jump: Option<usize>) -> Result<GameState> {
    let mut game = GameState::with_sort(*config.ascending());
    for (i, &cell) in moves.iter().enumerate() {
        if let Err(e) = game.try_play(cell) {
            warn!(move_number = i + 1, cell, error = %e, "Skipping refused move");
        }
    }
    if let Some(step) = jump {
        game.jump_to(step)
            .with_context(|| format!("Cannot jump to step {}", step))?;
    }
    info!(step = game.step_number(), status = %game.status(), "Replay finished");
    Ok(game)
}

/// Renders board, status and move list as plain text.
///
/// The current step is marked with `>` in the move list.
pub fn render_text(game: &GameState, show_coordinates: bool) -> String {
    let mut out = game.board().display();
    out.push_str("\n\n");
    out.push_str(&game.status().to_string());
    out.push_str("\n\n");
    for m in game.moves() {
        let marker = if m.is_current { ">" } else { " " };
        out.push_str(&format!("{} {}. {}\n", marker, m.step, m.label(show_coordinates)));
    }
    out
}

/// Renders the game view as pretty-printed JSON.
pub fn render_json(game: &GameState, show_coordinates: bool) -> Result<String> {
    serde_json::to_string_pretty(&game.view(show_coordinates))
        .context("Failed to serialize game view")
}
