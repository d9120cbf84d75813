//! Turns: the recorded placements a game is built from.
//!
//! A turn is a domain event, not a side effect. The board, the active
//! player and the outcome are all derived from the list of turns.

use super::{Player, Position};
use serde::{Deserialize, Serialize};

/// One recorded placement of a symbol at a board position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Turn {
    position: Position,
    player: Player,
}

impl Turn {
    /// Creates a new turn.
    pub fn new(position: Position, player: Player) -> Self {
        Self { position, player }
    }

    /// Returns the position of this turn.
    pub fn position(&self) -> Position {
        self.position
    }

    /// Returns the player who placed the mark.
    pub fn player(&self) -> Player {
        self.player
    }
}

/// Move log entry, e.g. `X selected 1,3`.
impl std::fmt::Display for Turn {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} selected {},{}",
            self.player,
            self.position.row() + 1,
            self.position.col() + 1
        )
    }
}

/// Error that can occur when playing a move through [`Game::play`].
///
/// [`Game::play`]: super::Game::play
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// The square at the position is already occupied.
    #[display("Square {} is already occupied", _0)]
    SquareOccupied(Position),

    /// The game is already won or drawn.
    #[display("Game is already over")]
    GameOver,
}

impl std::error::Error for MoveError {}
