//! Keyboard helpers for the board cursor.

use crossterm::event::KeyCode;
use rewind_tictactoe::Position;

/// Moves the cursor one square in the arrow's direction, stopping at edges.
pub fn move_cursor(cursor: Position, key: KeyCode) -> Position {
    let (col, row) = (cursor.col(), cursor.row());
    let (col, row) = match key {
        KeyCode::Left => (col.saturating_sub(1), row),
        KeyCode::Right => ((col + 1).min(2), row),
        KeyCode::Up => (col, row.saturating_sub(1)),
        KeyCode::Down => (col, (row + 1).min(2)),
        _ => (col, row),
    };
    Position::from_index(row * 3 + col).unwrap_or(cursor)
}

/// Maps the digit keys `1`-`9` to cell indices 0-8.
pub fn digit_cell(key: KeyCode) -> Option<usize> {
    match key {
        KeyCode::Char(c @ '1'..='9') => c.to_digit(10).map(|d| d as usize - 1),
        _ => None,
    }
}
