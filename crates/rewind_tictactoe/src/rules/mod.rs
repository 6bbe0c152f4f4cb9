//! Rules of tic-tac-toe as pure functions over a [`Board`](super::Board).

mod draw;
mod win;

pub use draw::{is_draw, is_full};
pub use win::{LINES, calculate_winner, winning_line};
