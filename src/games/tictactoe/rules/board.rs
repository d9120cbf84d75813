//! Board derivation from the turn history.

use super::super::{Board, Square, TurnHistory};
use tracing::instrument;

/// Rebuilds the 3x3 board from the history.
///
/// Positions in a valid history are unique, so replay order does not
/// matter; turns are applied oldest first regardless.
#[instrument(skip(history), fields(len = history.len()))]
pub fn derive_board(history: &TurnHistory) -> Board {
    let mut board = Board::new();
    for turn in history.iter_oldest_first() {
        board.set(turn.position(), Square::Occupied(turn.player()));
    }
    board
}
