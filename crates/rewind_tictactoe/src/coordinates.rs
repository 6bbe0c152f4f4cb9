//! Mapping history entries to display coordinates.

use serde::{Deserialize, Serialize};
use tracing::{instrument, trace};

use super::HistoryEntry;

/// Rows on the standard board.
pub const BOARD_ROWS: usize = 3;
/// Columns on the standard board.
pub const BOARD_COLS: usize = 3;

/// 1-indexed `(col, row)` pair, displayed as `col,row`.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display,
)]
#[display("{},{}", col, row)]
pub struct Coordinate {
    /// Column, starting at 1 on the left.
    pub col: usize,
    /// Row, starting at 1 at the top.
    pub row: usize,
}

impl Coordinate {
    /// Creates a coordinate.
    pub fn new(col: usize, row: usize) -> Self {
        Self { col, row }
    }

    /// Coordinate of cell `index` on a grid `cols` wide.
    pub fn of_index(index: usize, cols: usize) -> Self {
        Self::new(1 + index % cols, 1 + index / cols)
    }
}

/// Lists the coordinate of every marked cell, in order of first appearance.
///
/// Entries are scanned oldest first and each board in index order. A cell
/// contributes once, the first time it is seen marked; cells outside the
/// `rows` x `cols` grid are skipped. Since play only ever adds marks, item
/// `n` is the square placed by move `n + 1`.
#[instrument(skip(history), fields(entries = history.len()))]
pub fn derive_coordinates(
    history: &[HistoryEntry],
    rows: usize,
    cols: usize,
) -> Vec<Coordinate> {
    let limit = rows.saturating_mul(cols);
    let mut seen = [false; 9];
    let mut coords = Vec::new();

    for entry in history {
        for (index, square) in entry.board().squares().iter().enumerate() {
            if square.is_empty() || index >= limit || seen[index] {
                continue;
            }
            seen[index] = true;
            coords.push(Coordinate::of_index(index, cols));
        }
    }

    trace!(count = coords.len(), "Derived coordinates");
    coords
}
