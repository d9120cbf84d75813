//! Application state and key handling.

use crossterm::event::KeyCode;
use tictactoe_history::{Game, Player, PlayerRegistry, Position};
use tracing::{debug, info, instrument};

use super::input::{is_cursor_key, move_cursor};

/// What keystrokes currently mean.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputMode {
    /// Keys move the cursor and place marks.
    Playing,
    /// Keys edit a player's display name.
    EditingName {
        /// Player being renamed.
        player: Player,
        /// Name typed so far.
        buffer: String,
    },
}

/// Main application state.
pub struct App {
    game: Game,
    cursor: Position,
    mode: InputMode,
    status_message: String,
    should_quit: bool,
}

impl App {
    /// Creates a new application with the given player names.
    pub fn new(players: PlayerRegistry) -> Self {
        Self {
            game: Game::with_players(players),
            cursor: Position::Center,
            mode: InputMode::Playing,
            status_message: "X opens. Arrows move, Enter places.".to_string(),
            should_quit: false,
        }
    }

    /// Gets the current game.
    pub fn game(&self) -> &Game {
        &self.game
    }

    /// Gets the cursor position.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Gets the input mode.
    pub fn mode(&self) -> &InputMode {
        &self.mode
    }

    /// Gets the current status message.
    pub fn status_message(&self) -> &str {
        &self.status_message
    }

    /// Returns true once the user asked to quit.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Dispatches a key press according to the input mode.
    #[instrument(skip(self))]
    pub fn handle_key(&mut self, key: KeyCode) {
        match self.mode {
            InputMode::Playing => self.handle_play_key(key),
            InputMode::EditingName { .. } => self.handle_edit_key(key),
        }
    }

    fn handle_play_key(&mut self, key: KeyCode) {
        match key {
            KeyCode::Char('q') | KeyCode::Esc => {
                info!("User quit");
                self.should_quit = true;
            }
            KeyCode::Char('r') => self.restart(),
            KeyCode::Char('x') => self.start_editing(Player::X),
            KeyCode::Char('o') => self.start_editing(Player::O),
            KeyCode::Enter | KeyCode::Char(' ') => self.place_at_cursor(),
            KeyCode::Char(c @ '1'..='9') => {
                if let Some(pos) = c
                    .to_digit(10)
                    .and_then(|d| Position::from_index(d as usize - 1))
                {
                    self.cursor = pos;
                    self.place_at_cursor();
                }
            }
            key if is_cursor_key(key) => self.cursor = move_cursor(self.cursor, key),
            _ => {}
        }
    }

    fn handle_edit_key(&mut self, key: KeyCode) {
        let InputMode::EditingName { player, buffer } = &mut self.mode else {
            return;
        };
        let player = *player;

        match key {
            KeyCode::Char(c) => buffer.push(c),
            KeyCode::Backspace => {
                buffer.pop();
            }
            KeyCode::Enter => {
                let name = std::mem::take(buffer);
                self.game.rename_player(player, name);
                self.mode = InputMode::Playing;
                self.status_message =
                    format!("{} is now {}", player, self.game.players().name(player));
            }
            KeyCode::Esc => {
                debug!(%player, "Rename cancelled");
                self.mode = InputMode::Playing;
                self.status_message = "Rename cancelled".to_string();
            }
            _ => {}
        }
    }

    /// Starts editing `player`'s name, pre-filled with the current one.
    pub fn start_editing(&mut self, player: Player) {
        debug!(%player, "Editing player name");
        self.mode = InputMode::EditingName {
            player,
            buffer: self.game.players().name(player).to_string(),
        };
        self.status_message = format!("Editing {player}'s name: Enter to save, Esc to cancel");
    }

    /// Places the active player's mark under the cursor.
    ///
    /// Occupied squares and finished games leave the game untouched and
    /// only update the status line.
    pub fn place_at_cursor(&mut self) {
        match self.game.play(self.cursor) {
            Ok(turn) => {
                let outcome = self.game.outcome();
                self.status_message = if outcome.is_decided() {
                    format!("{outcome} Press 'r' for a rematch or 'q' to quit.")
                } else {
                    let next = self.game.active_player();
                    format!("{turn}. {}'s turn ({next}).", self.game.players().name(next))
                };
            }
            Err(e) => {
                debug!(error = %e, "Move rejected");
                self.status_message = e.to_string();
            }
        }
    }

    /// Restarts the game, keeping player names.
    pub fn restart(&mut self) {
        self.game.restart();
        self.cursor = Position::Center;
        self.status_message = "Game restarted. X opens.".to_string();
    }
}
