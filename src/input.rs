//! Cursor movement for keyboard navigation.

use crossterm::event::KeyCode;

/// Moves the (row, col) cursor with arrow keys, clamped to the grid.
pub fn move_cursor(cursor: (usize, usize), key: KeyCode) -> (usize, usize) {
    let (row, col) = cursor;
    match key {
        KeyCode::Up => (row.saturating_sub(1), col),
        KeyCode::Down => ((row + 1).min(2), col),
        KeyCode::Left => (row, col.saturating_sub(1)),
        KeyCode::Right => (row, (col + 1).min(2)),
        _ => cursor,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_arrows_move_within_grid() {
        assert_eq!(move_cursor((1, 1), KeyCode::Up), (0, 1));
        assert_eq!(move_cursor((1, 1), KeyCode::Down), (2, 1));
        assert_eq!(move_cursor((1, 1), KeyCode::Left), (1, 0));
        assert_eq!(move_cursor((1, 1), KeyCode::Right), (1, 2));
    }

    #[test]
    fn test_edges_clamp() {
        assert_eq!(move_cursor((0, 0), KeyCode::Up), (0, 0));
        assert_eq!(move_cursor((0, 0), KeyCode::Left), (0, 0));
        assert_eq!(move_cursor((2, 2), KeyCode::Down), (2, 2));
        assert_eq!(move_cursor((2, 2), KeyCode::Right), (2, 2));
    }

    #[test]
    fn test_other_keys_leave_cursor_alone() {
        assert_eq!(move_cursor((1, 2), KeyCode::Char('x')), (1, 2));
    }
}
