//! Pure tic-tac-toe logic with a navigable move history.
//!
//! # Architecture
//!
//! - **Types**: [`Player`], [`Square`], [`Board`] and named [`Position`]s
//! - **Rules**: [`calculate_winner`], [`is_full`], [`is_draw`]
//! - **Coordinates**: [`derive_coordinates`] maps history to `(col, row)` pairs
//! - **State**: [`GameState`] owns the history and the step pointer and
//!   exposes `play`, `jump_to` and `toggle_sort`
//!
//! Rendering is left to the caller, which reads the derived view
//! ([`GameState::status`], [`GameState::moves`], [`GameState::view`]) and
//! forwards user input to the mutators.
//!
//! # Example
//!
//! ```
//! use rewind_tictactoe::{GameState, Player, Status};
//!
//! let mut game = GameState::new();
//! for cell in [0, 1, 4, 2, 8] {
//!     game.play(cell);
//! }
//! assert_eq!(game.winner(), Some(Player::X));
//! assert_eq!(game.status().to_string(), "Winner: X");
//!
//! // Navigation still works after the game is won.
//! game.jump_to(2).unwrap();
//! assert_eq!(game.status(), Status::Next(Player::X));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod coordinates;
mod history;
mod position;
mod rules;
mod state;
mod types;
mod view;

pub use action::MoveError;
pub use coordinates::{BOARD_COLS, BOARD_ROWS, Coordinate, derive_coordinates};
pub use history::HistoryEntry;
pub use position::Position;
pub use rules::{LINES, calculate_winner, is_draw, is_full, winning_line};
pub use state::GameState;
pub use types::{Board, Player, Square};
pub use view::{GameView, MoveDescriptor, MoveView, Status};
