//! Game state container for tic-tac-toe.
//!
//! `Game` owns the two pieces of mutable state, the player names and the
//! turn history. Everything else (board, active player, winner, draw) is
//! derived from them on each query.

use super::invariants::{HistoryInvariants, InvariantSet};
use super::rules::{apply_turn, derive_active_player, derive_board, derive_winner, has_draw};
use super::{
    Board, GameStatus, MoveError, Outcome, Player, PlayerRegistry, Position, Turn, TurnHistory,
};
use serde::Serialize;
use tracing::{info, instrument, warn};

/// Tic-tac-toe game: player names plus turn history.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Game {
    players: PlayerRegistry,
    history: TurnHistory,
}

impl Game {
    /// Creates a new game with the default player names.
    #[instrument]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a new game with the given player names.
    #[instrument]
    pub fn with_players(players: PlayerRegistry) -> Self {
        Self {
            players,
            history: TurnHistory::new(),
        }
    }

    /// Returns the player names.
    pub fn players(&self) -> &PlayerRegistry {
        &self.players
    }

    /// Returns the turn history, newest first.
    pub fn history(&self) -> &TurnHistory {
        &self.history
    }

    /// Returns the player whose turn it is.
    pub fn active_player(&self) -> Player {
        derive_active_player(&self.history)
    }

    /// Returns the board derived from the history.
    pub fn board(&self) -> Board {
        derive_board(&self.history)
    }

    /// Returns the winner's display name, if any.
    pub fn winner(&self) -> Option<String> {
        derive_winner(&self.board(), &self.players)
    }

    /// Returns true if the board is full and nobody won.
    pub fn has_draw(&self) -> bool {
        has_draw(&self.history, self.winner().as_deref())
    }

    /// Returns the name-level outcome.
    pub fn outcome(&self) -> Outcome {
        match self.winner() {
            Some(name) => Outcome::Winner(name),
            None if self.has_draw() => Outcome::Draw,
            None => Outcome::Undecided,
        }
    }

    /// Returns the symbol-level status.
    pub fn status(&self) -> GameStatus {
        if let Some(player) = super::rules::check_winner(&self.board()) {
            GameStatus::Won(player)
        } else if self.has_draw() {
            GameStatus::Drawn
        } else {
            GameStatus::InProgress
        }
    }

    /// Returns true once the game is won or drawn.
    pub fn is_over(&self) -> bool {
        self.status().is_over()
    }

    /// Returns positions that can still be played.
    ///
    /// Empty once the game is over, even if squares remain.
    pub fn valid_moves(&self) -> Vec<Position> {
        if self.is_over() {
            Vec::new()
        } else {
            Position::valid_moves(&self.board())
        }
    }

    /// Returns the move log, newest first, e.g. `X selected 1,1`.
    pub fn move_log(&self) -> Vec<String> {
        self.history.iter().map(Turn::to_string).collect()
    }

    /// Plays the active player's mark at `position`.
    ///
    /// Unlike [`apply_turn`], this rejects moves after the game is decided
    /// and moves onto occupied squares. A rejected move leaves the history
    /// unchanged.
    ///
    /// # Errors
    ///
    /// - [`MoveError::GameOver`] if the game is won or drawn.
    /// - [`MoveError::SquareOccupied`] if a turn already holds `position`.
    #[instrument(skip(self), fields(turns = self.history.len(), player = %self.active_player()))]
    pub fn play(&mut self, position: Position) -> Result<Turn, MoveError> {
        if self.is_over() {
            warn!("Move rejected: game is over");
            return Err(MoveError::GameOver);
        }

        if self.history.contains(position) {
            warn!("Move rejected: square occupied");
            return Err(MoveError::SquareOccupied(position));
        }

        let turn = apply_turn(&mut self.history, position);

        debug_assert!(
            HistoryInvariants::check_all(&self.history).is_ok(),
            "turn history invariants violated after {turn}"
        );

        match self.status() {
            GameStatus::InProgress => {}
            status => info!(%status, "Game decided"),
        }

        Ok(turn)
    }

    /// Clears the history. Player names are kept.
    #[instrument(skip(self))]
    pub fn restart(&mut self) {
        info!("Restarting game");
        self.history.clear();
    }

    /// Replaces the display name for `player`.
    pub fn rename_player(&mut self, player: Player, name: impl Into<String>) {
        self.players.rename(player, name);
    }

    /// Captures every derived view of the game at this moment.
    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            players: self.players.clone(),
            history: self.history.clone(),
            board: self.board(),
            active_player: self.active_player(),
            status: self.status(),
            outcome: self.outcome(),
        }
    }
}

/// Serializable view of a game, used for `play --json`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GameSnapshot {
    /// Player names.
    pub players: PlayerRegistry,
    /// Turns, newest first.
    pub history: TurnHistory,
    /// Derived board.
    pub board: Board,
    /// Player to move next.
    pub active_player: Player,
    /// Symbol-level status.
    pub status: GameStatus,
    /// Name-level outcome.
    pub outcome: Outcome,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_game() {
        let game = Game::new();
        assert_eq!(game.active_player(), Player::X);
        assert_eq!(game.status(), GameStatus::InProgress);
        assert_eq!(game.outcome(), Outcome::Undecided);
        assert_eq!(game.valid_moves().len(), 9);
        assert!(game.move_log().is_empty());
    }

    #[test]
    fn test_rejected_move_leaves_history() {
        let mut game = Game::new();
        game.play(Position::Center).unwrap();
        let before = game.clone();

        assert_eq!(
            game.play(Position::Center),
            Err(MoveError::SquareOccupied(Position::Center))
        );
        assert_eq!(game, before);
    }

    #[test]
    fn test_valid_moves_empty_after_win() {
        let mut game = Game::new();
        for pos in [
            Position::TopLeft,
            Position::Center,
            Position::TopCenter,
            Position::BottomLeft,
            Position::TopRight,
        ] {
            game.play(pos).unwrap();
        }
        assert!(game.is_over());
        assert!(game.valid_moves().is_empty());
        assert_eq!(game.play(Position::BottomRight), Err(MoveError::GameOver));
    }
}
