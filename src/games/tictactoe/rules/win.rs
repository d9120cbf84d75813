//! Win detection logic for tic-tac-toe.

use super::super::{Board, Player, PlayerRegistry, Position};
use tracing::{debug, instrument};

/// Every line that wins the game, checked in this order.
///
/// When more than one line is complete the first one listed decides the
/// winner.
pub const WINNING_COMBINATIONS: [[Position; 3]; 8] = [
    // Rows
    [Position::TopLeft, Position::TopCenter, Position::TopRight],
    [
        Position::MiddleLeft,
        Position::Center,
        Position::MiddleRight,
    ],
    [
        Position::BottomLeft,
        Position::BottomCenter,
        Position::BottomRight,
    ],
    // Columns
    [
        Position::TopLeft,
        Position::MiddleLeft,
        Position::BottomLeft,
    ],
    [
        Position::TopCenter,
        Position::Center,
        Position::BottomCenter,
    ],
    [
        Position::TopRight,
        Position::MiddleRight,
        Position::BottomRight,
    ],
    // Diagonals
    [Position::TopLeft, Position::Center, Position::BottomRight],
    [Position::TopRight, Position::Center, Position::BottomLeft],
];

/// Returns the first complete line and the player holding it.
#[instrument(skip(board))]
pub fn winning_line(board: &Board) -> Option<([Position; 3], Player)> {
    WINNING_COMBINATIONS.into_iter().find_map(|[a, b, c]| {
        let first = board.get(a);
        let player = first.player()?;
        (board.get(b) == first && board.get(c) == first).then_some(([a, b, c], player))
    })
}

/// Checks if there is a winner on the board.
///
/// Returns `Some(player)` if the player has three in a row,
/// `None` otherwise.
pub fn check_winner(board: &Board) -> Option<Player> {
    winning_line(board).map(|(_, player)| player)
}

/// Returns the display name of the winner, if any.
#[instrument(skip(board, players))]
pub fn derive_winner(board: &Board, players: &PlayerRegistry) -> Option<String> {
    let winner = check_winner(board)?;
    let name = players.name(winner).to_string();
    debug!(%winner, %name, "Winner derived");
    Some(name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::Square;

    #[test]
    fn test_no_winner_empty_board() {
        let board = Board::new();
        assert_eq!(check_winner(&board), None);
    }

    #[test]
    fn test_winner_top_row() {
        let mut board = Board::new();
        board.set(Position::TopLeft, Square::Occupied(Player::X));
        board.set(Position::TopCenter, Square::Occupied(Player::X));
        board.set(Position::TopRight, Square::Occupied(Player::X));
        assert_eq!(check_winner(&board), Some(Player::X));
    }

    #[test]
    fn test_winner_diagonal() {
        let mut board = Board::new();
        board.set(Position::TopLeft, Square::Occupied(Player::O));
        board.set(Position::Center, Square::Occupied(Player::O));
        board.set(Position::BottomRight, Square::Occupied(Player::O));
        assert_eq!(check_winner(&board), Some(Player::O));
    }

    #[test]
    fn test_no_winner_incomplete() {
        let mut board = Board::new();
        board.set(Position::TopLeft, Square::Occupied(Player::X));
        board.set(Position::TopCenter, Square::Occupied(Player::X));
        assert_eq!(check_winner(&board), None);
    }

    #[test]
    fn test_mixed_line_is_not_a_win() {
        let mut board = Board::new();
        board.set(Position::TopLeft, Square::Occupied(Player::X));
        board.set(Position::TopCenter, Square::Occupied(Player::O));
        board.set(Position::TopRight, Square::Occupied(Player::X));
        assert_eq!(check_winner(&board), None);
    }

    #[test]
    fn test_first_listed_line_breaks_ties() {
        // Unreachable in alternating play, but the order still decides.
        let mut board = Board::new();
        for pos in [Position::BottomLeft, Position::BottomCenter, Position::BottomRight] {
            board.set(pos, Square::Occupied(Player::O));
        }
        for pos in [Position::TopLeft, Position::TopCenter, Position::TopRight] {
            board.set(pos, Square::Occupied(Player::X));
        }
        assert_eq!(check_winner(&board), Some(Player::X));
    }

    #[test]
    fn test_row_beats_column_when_both_complete() {
        let mut board = Board::new();
        for pos in [Position::TopLeft, Position::TopCenter, Position::TopRight] {
            board.set(pos, Square::Occupied(Player::O));
        }
        for pos in [Position::MiddleLeft, Position::BottomLeft] {
            board.set(pos, Square::Occupied(Player::O));
        }
        let (line, _) = winning_line(&board).expect("top row is complete");
        assert_eq!(line, WINNING_COMBINATIONS[0]);
    }

    #[test]
    fn test_derive_winner_uses_registry_name() {
        let mut board = Board::new();
        for pos in [Position::TopRight, Position::Center, Position::BottomLeft] {
            board.set(pos, Square::Occupied(Player::O));
        }
        let players = PlayerRegistry::new("Ana", "Bruno");
        assert_eq!(derive_winner(&board, &players), Some("Bruno".to_string()));
    }
}
