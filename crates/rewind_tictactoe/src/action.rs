//! Reasons a move or jump is refused.

use super::Position;

/// Error that can occur when validating or applying a move.
///
/// The interactive game ignores these; they exist so callers that care
/// (tests, the replay command) can see why nothing happened.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// The square at the position is already occupied.
    #[display("Square {} is already occupied", _0)]
    SquareOccupied(Position),

    /// The current board already has a winner.
    #[display("Game is already over")]
    GameOver,

    /// The cell index is not on the board.
    #[display("Cell {} is out of bounds (must be 0-8)", _0)]
    OutOfBounds(usize),

    /// The requested step is not in the history.
    #[display("Step {} is out of range (history has {} entries)", step, len)]
    StepOutOfRange {
        /// Requested step.
        step: usize,
        /// Current history length.
        len: usize,
    },
}

impl std::error::Error for MoveError {}
