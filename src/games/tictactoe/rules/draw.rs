//! Draw detection logic for tic-tac-toe.

use super::super::TurnHistory;
use tracing::instrument;

/// A draw is nine turns with no winner.
///
/// Takes the already-derived winner so the win check always runs first.
#[instrument(skip(history), fields(len = history.len()))]
pub fn has_draw(history: &TurnHistory, winner: Option<&str>) -> bool {
    history.len() == 9 && winner.is_none()
}
