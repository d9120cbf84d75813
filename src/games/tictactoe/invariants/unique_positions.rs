//! Unique positions invariant: squares are never overwritten.

use super::super::{Position, TurnHistory};
use super::Invariant;

/// Invariant: No two turns share a position, so there are at most nine.
pub struct UniquePositionsInvariant;

impl Invariant<TurnHistory> for UniquePositionsInvariant {
    fn holds(history: &TurnHistory) -> bool {
        let mut seen = [false; Position::ALL.len()];
        for turn in history {
            let idx = turn.position().to_index();
            if seen[idx] {
                return false;
            }
            seen[idx] = true;
        }
        history.len() <= Position::ALL.len()
    }

    fn description() -> &'static str {
        "Each position is played at most once"
    }
}
