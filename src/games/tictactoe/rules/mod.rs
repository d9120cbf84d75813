//! Game rules for tic-tac-toe.
//!
//! Pure functions that derive every view of a game from its turn history.
//! Nothing here holds state; calling a rule twice with the same input
//! yields the same answer.

pub mod active;
pub mod board;
pub mod draw;
pub mod win;

pub use active::{apply_turn, derive_active_player};
pub use board::derive_board;
pub use draw::has_draw;
pub use win::{WINNING_COMBINATIONS, check_winner, derive_winner, winning_line};
