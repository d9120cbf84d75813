//! Tests for the tic-tac-toe game state container.

use tictactoe_history::{
    Game, GameStatus, MoveError, Outcome, Player, PlayerRegistry, Position, Square,
};

fn play_all(game: &mut Game, moves: &[Position]) {
    for pos in moves {
        game.play(*pos).expect("legal move");
    }
}

#[test]
fn test_top_row_scenario_names_the_winner() {
    // (X:0,0), (O:1,1), (X:0,1), (O:2,2), (X:0,2)
    let mut game = Game::new();
    play_all(
        &mut game,
        &[
            Position::TopLeft,
            Position::Center,
            Position::TopCenter,
            Position::BottomRight,
            Position::TopRight,
        ],
    );

    let board = game.board();
    assert_eq!(board.rows()[0], [Square::Occupied(Player::X); 3]);
    assert_eq!(game.winner().as_deref(), Some("Player 1"));
    assert!(!game.has_draw());
    assert_eq!(game.status(), GameStatus::Won(Player::X));
    assert_eq!(game.outcome(), Outcome::Winner("Player 1".to_string()));
}

#[test]
fn test_full_board_without_line_is_a_draw() {
    // X O X / X O O / O X X
    let mut game = Game::new();
    play_all(
        &mut game,
        &[
            Position::TopLeft,
            Position::TopCenter,
            Position::TopRight,
            Position::Center,
            Position::MiddleLeft,
            Position::MiddleRight,
            Position::BottomCenter,
            Position::BottomLeft,
            Position::BottomRight,
        ],
    );

    assert_eq!(game.history().len(), 9);
    assert_eq!(game.winner(), None);
    assert!(game.has_draw());
    assert_eq!(game.status(), GameStatus::Drawn);
    assert_eq!(game.outcome(), Outcome::Draw);
    assert_eq!(game.outcome().to_string(), "It's a draw!");
}

#[test]
fn test_ninth_move_win_is_not_a_draw() {
    // X completes the left column on the last square.
    let mut game = Game::new();
    play_all(
        &mut game,
        &[
            Position::TopRight,
            Position::TopCenter,
            Position::TopLeft,
            Position::Center,
            Position::BottomCenter,
            Position::MiddleRight,
            Position::MiddleLeft,
            Position::BottomRight,
            Position::BottomLeft,
        ],
    );

    assert_eq!(game.history().len(), 9);
    assert_eq!(game.winner().as_deref(), Some("Player 1"));
    assert!(!game.has_draw());
}

#[test]
fn test_active_player_alternates() {
    let mut game = Game::new();
    assert_eq!(game.active_player(), Player::X);

    game.play(Position::Center).unwrap();
    assert_eq!(game.active_player(), Player::O);

    game.play(Position::TopLeft).unwrap();
    assert_eq!(game.active_player(), Player::X);
}

#[test]
fn test_move_after_game_over_is_rejected() {
    let mut game = Game::new();
    play_all(
        &mut game,
        &[
            Position::TopLeft,
            Position::Center,
            Position::TopCenter,
            Position::BottomRight,
            Position::TopRight,
        ],
    );

    let before = game.history().clone();
    assert_eq!(game.play(Position::BottomLeft), Err(MoveError::GameOver));
    assert_eq!(game.history(), &before);
}

#[test]
fn test_restart_keeps_names() {
    let mut game = Game::with_players(PlayerRegistry::new("Ana", "Bruno"));
    game.rename_player(Player::O, "Bia");
    play_all(
        &mut game,
        &[
            Position::TopLeft,
            Position::Center,
            Position::TopCenter,
            Position::BottomRight,
            Position::TopRight,
        ],
    );
    assert!(game.is_over());

    game.restart();

    assert!(game.history().is_empty());
    assert_eq!(game.status(), GameStatus::InProgress);
    assert_eq!(game.active_player(), Player::X);
    assert_eq!(game.players().name(Player::X), "Ana");
    assert_eq!(game.players().name(Player::O), "Bia");
}

#[test]
fn test_rename_changes_winner_name() {
    let mut game = Game::new();
    play_all(
        &mut game,
        &[
            Position::TopLeft,
            Position::Center,
            Position::TopCenter,
            Position::BottomRight,
            Position::TopRight,
        ],
    );
    game.rename_player(Player::X, "Ana");
    assert_eq!(game.winner().as_deref(), Some("Ana"));
}

#[test]
fn test_move_log_is_newest_first_and_one_based() {
    let mut game = Game::new();
    play_all(&mut game, &[Position::TopLeft, Position::BottomRight]);
    assert_eq!(game.move_log(), vec!["O selected 3,3", "X selected 1,1"]);
}

#[test]
fn test_snapshot_serializes() {
    let mut game = Game::new();
    game.play(Position::Center).unwrap();

    let json = serde_json::to_value(game.snapshot()).unwrap();
    assert_eq!(json["active_player"], "O");
    assert_eq!(json["status"], "InProgress");
    assert_eq!(json["outcome"], "Undecided");
    assert_eq!(json["history"][0]["position"], "Center");
    assert_eq!(json["history"][0]["player"], "X");
    assert_eq!(json["players"]["x"], "Player 1");
}
