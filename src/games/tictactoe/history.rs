//! Ordered turn history, newest first.

use super::{Position, Turn};
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use tracing::{debug, instrument};

/// Ordered sequence of turns, newest first.
///
/// The history is the single source of truth for a game. It only grows at
/// the front and is only ever cleared as a whole.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TurnHistory {
    turns: VecDeque<Turn>,
}

impl TurnHistory {
    /// Creates an empty history.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of turns played.
    pub fn len(&self) -> usize {
        self.turns.len()
    }

    /// Returns true if no turn has been played.
    pub fn is_empty(&self) -> bool {
        self.turns.is_empty()
    }

    /// Most recent turn.
    pub fn newest(&self) -> Option<&Turn> {
        self.turns.front()
    }

    /// Iterates turns newest first (move log order).
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &Turn> + ExactSizeIterator {
        self.turns.iter()
    }

    /// Iterates turns in the order they were played.
    pub fn iter_oldest_first(&self) -> impl Iterator<Item = &Turn> {
        self.turns.iter().rev()
    }

    /// Returns true if some turn already occupies `position`.
    pub fn contains(&self, position: Position) -> bool {
        self.turns.iter().any(|turn| turn.position() == position)
    }

    /// Prepends a turn. Performs no validation.
    pub(crate) fn push(&mut self, turn: Turn) {
        self.turns.push_front(turn);
    }

    /// Drops every turn.
    #[instrument(skip(self), fields(len = self.turns.len()))]
    pub fn clear(&mut self) {
        debug!("Clearing turn history");
        self.turns.clear();
    }
}

/// Collects turns given newest first.
impl FromIterator<Turn> for TurnHistory {
    fn from_iter<I: IntoIterator<Item = Turn>>(iter: I) -> Self {
        Self {
            turns: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a TurnHistory {
    type Item = &'a Turn;
    type IntoIter = std::collections::vec_deque::Iter<'a, Turn>;

    fn into_iter(self) -> Self::IntoIter {
        self.turns.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::Player;

    #[test]
    fn test_push_prepends() {
        let mut history = TurnHistory::new();
        history.push(Turn::new(Position::TopLeft, Player::X));
        history.push(Turn::new(Position::Center, Player::O));

        assert_eq!(history.len(), 2);
        assert_eq!(history.newest().map(Turn::position), Some(Position::Center));

        let played: Vec<_> = history.iter_oldest_first().map(Turn::position).collect();
        assert_eq!(played, vec![Position::TopLeft, Position::Center]);
    }

    #[test]
    fn test_clear() {
        let mut history: TurnHistory = [Turn::new(Position::TopLeft, Player::X)]
            .into_iter()
            .collect();
        assert!(history.contains(Position::TopLeft));
        history.clear();
        assert!(history.is_empty());
        assert!(!history.contains(Position::TopLeft));
    }
}
