//! Read-only projections of a [`GameState`](super::GameState) for renderers.

use serde::Serialize;

use super::{Coordinate, Player, Square};

/// Derived game status, recomputed from the current board on every read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, derive_more::Display)]
pub enum Status {
    /// A line has been completed.
    #[display("Winner: {}", _0)]
    Won(Player),
    /// Every square is marked and nobody completed a line.
    #[display("Draw")]
    Draw,
    /// Play continues with this player.
    #[display("Next player: {}", _0)]
    Next(Player),
}

impl Status {
    /// True once the board accepts no further moves.
    pub fn is_over(self) -> bool {
        !matches!(self, Status::Next(_))
    }
}

/// One "go to move" control in the move list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MoveDescriptor {
    /// History index this control jumps to.
    pub step: usize,
    /// Where the move at this step was placed; `None` for game start.
    pub coordinate: Option<Coordinate>,
    /// True for the step currently shown on the board.
    pub is_current: bool,
}

impl MoveDescriptor {
    /// Button text, optionally with the placed coordinate.
    pub fn label(&self, show_coordinates: bool) -> String {
        if self.step == 0 {
            return "Go to game start".to_string();
        }
        match self.coordinate {
            Some(coord) if show_coordinates => {
                format!("Go to move #{} step coord: {}", self.step, coord)
            }
            _ => format!("Go to move #{}", self.step),
        }
    }
}

impl std::fmt::Display for MoveDescriptor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label(true))
    }
}

/// A labelled entry of the move list in [`GameView`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MoveView {
    /// History index.
    pub step: usize,
    /// Rendered button text.
    pub label: String,
    /// True for the step currently shown.
    pub is_current: bool,
}

/// Everything a renderer needs, flattened for serialization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GameView {
    /// Current board, row-major; `None` for empty squares.
    pub board: [Option<Player>; 9],
    /// Status line text.
    pub status: String,
    /// Winner of the current board, if any.
    pub winner: Option<Player>,
    /// Step shown on the board.
    pub step_number: usize,
    /// Move list order.
    pub ascending: bool,
    /// Move list in display order.
    pub moves: Vec<MoveView>,
}

impl GameView {
    pub(crate) fn board_marks(squares: [Square; 9]) -> [Option<Player>; 9] {
        squares.map(Square::player)
    }
}
