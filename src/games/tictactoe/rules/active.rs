//! Turn order: whose move it is, and recording a move.

use super::super::{Player, Position, Turn, TurnHistory};
use tracing::{debug, instrument};

/// Derives the player to move from the history.
///
/// X opens. After that the symbol simply alternates with the newest turn;
/// the registry is not consulted.
#[instrument(skip(history), fields(len = history.len()))]
pub fn derive_active_player(history: &TurnHistory) -> Player {
    match history.newest() {
        Some(turn) if turn.player() == Player::X => Player::O,
        _ => Player::X,
    }
}

/// Prepends a turn for the active player at `position`.
///
/// This is the raw transition: it does not check occupancy or whether the
/// game is already decided. Use [`Game::play`] for a checked move.
///
/// [`Game::play`]: super::super::Game::play
#[instrument(skip(history), fields(len = history.len()))]
pub fn apply_turn(history: &mut TurnHistory, position: Position) -> Turn {
    let turn = Turn::new(position, derive_active_player(history));
    debug!(%turn, "Applying turn");
    history.push(turn);
    turn
}
