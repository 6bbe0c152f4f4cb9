//! Terminal UI for Rewind Games.

mod app;
mod input;
mod ui;

pub use app::{App, AppAction, Focus};
pub use input::{digit_cell, move_cursor};
pub use ui::{cell_at, draw};

use anyhow::{Context, Result};
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind, MouseButton,
        MouseEventKind,
    },
    cursor::Show,
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend, layout::Rect};
use rewind_tictactoe::GameState;
use std::io::{self, Stdout};
use std::time::Duration;
use tracing::{debug, error, info, instrument, warn};

use crate::AppConfig;

/// Runs the interactive game until the player quits.
///
/// Logs go to the configured log file so they do not tear the screen.
pub fn run_tui(config: &AppConfig) -> Result<()> {
    let log_file = std::fs::File::create(config.log_file()).with_context(|| {
        format!("Failed to create log file {}", config.log_file().display())
    })?;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::sync::Arc::new(log_file))
        .with_ansi(false)
        .try_init(); // Don't panic if already initialized

    info!(?config, "Starting Rewind Games TUI");

    enable_raw_mode().context("Failed to enable raw mode")?;
    let app = App::new(
        GameState::with_sort(*config.ascending()),
        *config.show_coordinates(),
    );
    let tick = Duration::from_millis(*config.tick_rate_ms());
    let res = with_terminal(
        enter_terminal,
        |mut terminal| run_app(&mut terminal, app, tick),
        restore_terminal,
    );

    if let Err(err) = &res {
        error!(error = ?err, "Game loop error");
    }
    info!("Rewind Games TUI exited");
    res
}

/// Runs `setup`, then `body`, then always `restore`.
///
/// `restore` runs even when `setup` or `body` fails. The first error wins;
/// a restore failure after an earlier error is only logged.
fn with_terminal<T>(
    setup: impl FnOnce() -> Result<T>,
    body: impl FnOnce(T) -> Result<()>,
    restore: impl FnOnce() -> Result<()>,
) -> Result<()> {
    let res = setup().and_then(body);
    let restored = restore();
    match (res, restored) {
        (Err(err), Err(restore_err)) => {
            warn!(error = ?restore_err, "Terminal restore failed after error");
            Err(err)
        }
        (res, restored) => res.and(restored),
    }
}

fn enter_terminal() -> Result<Terminal<CrosstermBackend<Stdout>>> {
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)
        .context("Failed to enter alternate screen")?;
    Terminal::new(CrosstermBackend::new(stdout)).context("Failed to create terminal")
}

/// Undoes raw mode, the alternate screen, mouse capture and the hidden
/// cursor. Every step runs; the first failure is returned.
fn restore_terminal() -> Result<()> {
    let raw = disable_raw_mode().context("Failed to disable raw mode");
    let screen = execute!(io::stdout(), LeaveAlternateScreen, DisableMouseCapture, Show)
        .context("Failed to leave alternate screen");
    raw.and(screen)
}

/// Draws, then waits up to `tick` for one input event, forever.
#[instrument(skip_all, fields(tick_ms = tick.as_millis() as u64))]
fn run_app(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    mut app: App,
    tick: Duration,
) -> Result<()> {
    loop {
        terminal.draw(|f| ui::draw(f, &app))?;

        if !event::poll(tick)? {
            continue;
        }
        match event::read()? {
            // Skip key release events (crossterm fires both press and release on some platforms).
            Event::Key(key) if key.kind != KeyEventKind::Release => {
                if app.handle_key(key) == AppAction::Quit {
                    info!("Quit requested");
                    return Ok(());
                }
            }
            Event::Mouse(mouse) if mouse.kind == MouseEventKind::Down(MouseButton::Left) => {
                let size = terminal.size()?;
                let area = Rect::new(0, 0, size.width, size.height);
                match ui::cell_at(area, mouse.column, mouse.row) {
                    Some(pos) => app.click(pos),
                    None => debug!(column = mouse.column, row = mouse.row, "Click outside board"),
                }
            }
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::anyhow;
    use std::cell::Cell;

    #[test]
    fn test_restore_runs_when_setup_fails() {
        let restored = Cell::new(false);
        let res = with_terminal(
            || Err::<(), _>(anyhow!("setup")),
            |_| panic!("body must not run"),
            || {
                restored.set(true);
                Ok(())
            },
        );
        assert!(restored.get());
        assert_eq!(res.unwrap_err().to_string(), "setup");
    }

    #[test]
    fn test_restore_runs_when_body_fails() {
        let restored = Cell::new(false);
        let res = with_terminal(
            || Ok(()),
            |_| Err(anyhow!("body")),
            || {
                restored.set(true);
                Ok(())
            },
        );
        assert!(restored.get());
        assert_eq!(res.unwrap_err().to_string(), "body");
    }

    #[test]
    fn test_first_error_wins_over_restore_error() {
        let res = with_terminal(
            || Ok(()),
            |_| Err(anyhow!("body")),
            || Err(anyhow!("restore")),
        );
        assert_eq!(res.unwrap_err().to_string(), "body");
    }

    #[test]
    fn test_restore_error_reported_after_clean_run() {
        let res = with_terminal(|| Ok(()), |_| Ok(()), || Err(anyhow!("restore")));
        assert_eq!(res.unwrap_err().to_string(), "restore");
    }
}
