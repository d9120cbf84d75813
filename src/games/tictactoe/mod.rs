//! Tic-tac-toe game state engine.
//!
//! The turn history is the single source of truth. The board, the active
//! player, the winner and draw status are derived from it by the pure
//! functions in [`rules`]; [`Game`] bundles the history with the player
//! names.

mod game;
mod history;
pub mod invariants;
mod outcome;
mod players;
mod position;
pub mod rules;
mod turn;
mod types;

pub use game::{Game, GameSnapshot};
pub use history::TurnHistory;
pub use outcome::Outcome;
pub use players::PlayerRegistry;
pub use position::{ParsePositionError, Position};
pub use rules::{
    WINNING_COMBINATIONS, apply_turn, check_winner, derive_active_player, derive_board,
    derive_winner, has_draw, winning_line,
};
pub use turn::{MoveError, Turn};
pub use types::{Board, GameStatus, Player, Square};
