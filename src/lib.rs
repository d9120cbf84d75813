//! Two-player tic-tac-toe driven entirely by its turn history.
//!
//! The history of turns is the only mutable game state. The board, the
//! player to move, the winner and draw status are recomputed from it on
//! every query, so there is nothing to keep in sync.
//!
//! # Architecture
//!
//! - **Rules**: pure derivations (`derive_active_player`, `derive_board`,
//!   `derive_winner`, `has_draw`) and the raw `apply_turn` transition
//! - **Game**: state container owning the player names and the history,
//!   with a checked `play`, `restart` and `rename_player`
//! - **Config**: optional TOML file for player names and logging
//!
//! # Example
//!
//! ```
//! use tictactoe_history::{Game, Outcome, Position};
//!
//! let mut game = Game::new();
//! for pos in [
//!     Position::TopLeft,
//!     Position::Center,
//!     Position::TopCenter,
//!     Position::BottomRight,
//!     Position::TopRight,
//! ] {
//!     game.play(pos)?;
//! }
//! assert_eq!(game.outcome(), Outcome::Winner("Player 1".to_string()));
//! # Ok::<(), tictactoe_history::MoveError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod config;
mod games;

// Crate-level exports - Configuration
pub use config::{AppConfig, ConfigError, LoggingConfig};

// Crate-level exports - Game types (tic-tac-toe)
pub use games::tictactoe::{
    Board, Game, GameSnapshot, GameStatus, MoveError, Outcome, ParsePositionError, Player,
    PlayerRegistry, Position, Square, Turn, TurnHistory, WINNING_COMBINATIONS, apply_turn,
    check_winner, derive_active_player, derive_board, derive_winner, has_draw, winning_line,
};

// Crate-level exports - Invariants
pub use games::tictactoe::invariants::{
    AlternatingTurnInvariant, HistoryInvariants, Invariant, InvariantSet, InvariantViolation,
    UniquePositionsInvariant,
};
