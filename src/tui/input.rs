//! Cursor movement for keyboard navigation.

use crossterm::event::KeyCode;
use tictactoe_history::Position;

/// Moves cursor based on arrow keys or `hjkl`. Stops at the board edge.
pub fn move_cursor(cursor: Position, key: KeyCode) -> Position {
    let (row, col) = (cursor.row(), cursor.col());

    let target = match key {
        KeyCode::Left | KeyCode::Char('h') => col.checked_sub(1).map(|c| (row, c)),
        KeyCode::Right | KeyCode::Char('l') => Some((row, col + 1)),
        KeyCode::Up | KeyCode::Char('k') => row.checked_sub(1).map(|r| (r, col)),
        KeyCode::Down | KeyCode::Char('j') => Some((row + 1, col)),
        _ => None,
    };

    target
        .and_then(|(r, c)| Position::from_coords(r, c))
        .unwrap_or(cursor)
}

/// Returns true for keys handled by [`move_cursor`].
pub fn is_cursor_key(key: KeyCode) -> bool {
    matches!(
        key,
        KeyCode::Left
            | KeyCode::Right
            | KeyCode::Up
            | KeyCode::Down
            | KeyCode::Char('h' | 'j' | 'k' | 'l')
    )
}
