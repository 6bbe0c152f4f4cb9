//! Board snapshots recorded after every move.

use serde::{Deserialize, Serialize};

use super::Board;

/// Immutable snapshot of the board after a move.
///
/// Entry 0 of a history is always the empty starting board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct HistoryEntry {
    board: Board,
}

impl HistoryEntry {
    /// Wraps a board as a history entry.
    pub fn new(board: Board) -> Self {
        Self { board }
    }

    /// The game-start entry with an empty board.
    pub fn initial() -> Self {
        Self::new(Board::new())
    }

    /// Returns the recorded board.
    pub fn board(&self) -> &Board {
        &self.board
    }
}
