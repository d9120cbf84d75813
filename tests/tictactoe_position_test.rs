//! Tests for tic-tac-toe positions.

use tictactoe_history::{Board, Player, Position, Square};

#[test]
fn test_position_to_index() {
    assert_eq!(Position::TopLeft.to_index(), 0);
    assert_eq!(Position::Center.to_index(), 4);
    assert_eq!(Position::BottomRight.to_index(), 8);
}

#[test]
fn test_position_from_index() {
    assert_eq!(Position::from_index(0), Some(Position::TopLeft));
    assert_eq!(Position::from_index(4), Some(Position::Center));
    assert_eq!(Position::from_index(8), Some(Position::BottomRight));
    assert_eq!(Position::from_index(9), None);
}

#[test]
fn test_row_and_col() {
    assert_eq!((Position::MiddleRight.row(), Position::MiddleRight.col()), (1, 2));
    assert_eq!(Position::from_coords(2, 0), Some(Position::BottomLeft));
}

#[test]
fn test_parse_forms() {
    assert_eq!("1,1".parse::<Position>(), Ok(Position::TopLeft));
    assert_eq!(" 3, 2 ".parse::<Position>(), Ok(Position::BottomCenter));
    assert_eq!("5".parse::<Position>(), Ok(Position::Center));
    assert_eq!("bottom-right".parse::<Position>(), Ok(Position::BottomRight));
}

#[test]
fn test_parse_rejects_out_of_range() {
    for bad in ["0", "10", "0,1", "4,1", "1,4", "a,b", "", "middle"] {
        assert!(bad.parse::<Position>().is_err(), "{bad:?} should not parse");
    }
}

#[test]
fn test_valid_moves_filters_occupied() {
    let mut board = Board::new();
    board.set(Position::TopLeft, Square::Occupied(Player::X));
    board.set(Position::Center, Square::Occupied(Player::O));

    let valid = Position::valid_moves(&board);
    assert_eq!(valid.len(), 7);
    assert!(!valid.contains(&Position::TopLeft));
    assert!(!valid.contains(&Position::Center));
    assert!(valid.contains(&Position::BottomRight));
}
