//! Name-level outcome of a game.

use serde::{Deserialize, Serialize};

/// Outcome shown to players: who won, by display name, or whether it drew.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// No winner yet and the board is not full.
    Undecided,
    /// A player won; holds their display name.
    Winner(String),
    /// Board full, no winning combination.
    Draw,
}

impl Outcome {
    /// Returns the winner's name if there is one.
    pub fn winner(&self) -> Option<&str> {
        match self {
            Outcome::Winner(name) => Some(name),
            Outcome::Undecided | Outcome::Draw => None,
        }
    }

    /// Returns true if the game was a draw.
    pub fn is_draw(&self) -> bool {
        matches!(self, Outcome::Draw)
    }

    /// Returns true once the game is won or drawn.
    pub fn is_decided(&self) -> bool {
        !matches!(self, Outcome::Undecided)
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::Undecided => write!(f, "Game in progress"),
            Outcome::Winner(name) => write!(f, "{} won!", name),
            Outcome::Draw => write!(f, "It's a draw!"),
        }
    }
}
