//! Application state and key handling.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use derive_getters::Getters;
use rewind_tictactoe::{GameState, Position};
use tracing::{debug, instrument, warn};

use super::input::{digit_cell, move_cursor};

/// Which pane receives arrow keys and Enter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    /// Arrows move the board cursor, Enter plays.
    #[default]
    Board,
    /// Arrows walk the move list, Enter jumps.
    Moves,
}

impl Focus {
    /// Switches to the other pane.
    pub fn toggle(self) -> Self {
        match self {
            Self::Board => Self::Moves,
            Self::Moves => Self::Board,
        }
    }
}

/// What the event loop should do after an input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppAction {
    /// Keep running.
    Continue,
    /// Leave the game.
    Quit,
}

/// Main application state: the game plus UI-only cursor and selection.
#[derive(Debug, Getters)]
pub struct App {
    game: GameState,
    cursor: Position,
    focus: Focus,
    /// Index into the move list as displayed.
    selected: usize,
    show_coordinates: bool,
}

impl App {
    /// Creates a new application around `game`.
    #[instrument(skip(game))]
    pub fn new(game: GameState, show_coordinates: bool) -> Self {
        let mut app = Self {
            game,
            cursor: Position::Center,
            focus: Focus::Board,
            selected: 0,
            show_coordinates,
        };
        app.sync_selection();
        app
    }

    /// Handles a key press.
    #[instrument(skip(self), fields(focus = ?self.focus))]
    pub fn handle_key(&mut self, key: KeyEvent) -> AppAction {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return AppAction::Quit;
        }

        match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => return AppAction::Quit,
            KeyCode::Char('s') | KeyCode::Char('S') => {
                self.game.toggle_sort();
                self.sync_selection();
            }
            KeyCode::Tab | KeyCode::BackTab => {
                self.focus = self.focus.toggle();
                self.sync_selection();
            }
            KeyCode::Home => self.jump(0),
            code => match (digit_cell(code), self.focus) {
                (Some(cell), _) => self.play(cell),
                (None, Focus::Board) => self.handle_board_key(code),
                (None, Focus::Moves) => self.handle_moves_key(code),
            },
        }
        AppAction::Continue
    }

    /// Handles a click on a board square.
    #[instrument(skip(self))]
    pub fn click(&mut self, pos: Position) {
        self.cursor = pos;
        self.play(pos.to_index());
    }

    fn handle_board_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Enter | KeyCode::Char(' ') => self.play(self.cursor.to_index()),
            code => self.cursor = move_cursor(self.cursor, code),
        }
    }

    fn handle_moves_key(&mut self, code: KeyCode) {
        let len = self.game.history().len();
        match code {
            KeyCode::Up => {
                self.selected = if self.selected > 0 {
                    self.selected - 1
                } else {
                    len - 1
                };
            }
            KeyCode::Down => self.selected = (self.selected + 1) % len,
            KeyCode::Enter | KeyCode::Char(' ') => {
                if let Some(step) = self.game.moves().get(self.selected).map(|m| m.step) {
                    self.jump(step);
                }
            }
            _ => {}
        }
    }

    fn play(&mut self, cell: usize) {
        self.game.play(cell);
        self.sync_selection();
    }

    fn jump(&mut self, step: usize) {
        if let Err(e) = self.game.jump_to(step) {
            warn!(error = %e, "Jump refused");
        }
        self.sync_selection();
    }

    /// Points the list selection at the step shown on the board.
    fn sync_selection(&mut self) {
        if let Some(i) = self.game.moves().iter().position(|m| m.is_current) {
            self.selected = i;
        }
        debug!(selected = self.selected, "Selection synced");
    }
}
