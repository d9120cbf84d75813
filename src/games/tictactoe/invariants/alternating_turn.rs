//! Alternating turn invariant: players alternate X, O, X, O, ...

use super::super::{Player, TurnHistory};
use super::Invariant;

/// Invariant: Players alternate turns.
///
/// Played in order, the history must read X, O, X, O, ...
pub struct AlternatingTurnInvariant;

impl Invariant<TurnHistory> for AlternatingTurnInvariant {
    fn holds(history: &TurnHistory) -> bool {
        history
            .iter_oldest_first()
            .enumerate()
            .all(|(i, turn)| {
                let expected = if i % 2 == 0 { Player::X } else { Player::O };
                turn.player() == expected
            })
    }

    fn description() -> &'static str {
        "Players alternate turns (X, O, X, O, ...)"
    }
}
