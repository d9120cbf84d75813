//! tictactoe_history - command-line entry point.

#![warn(missing_docs)]

mod cli;
mod tui;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Command};
use tictactoe_history::{AppConfig, Game, Player, Position};
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    // The logging filter lives in the config, so the subscriber comes after
    // loading it; log_config reports what was loaded once one is installed.
    let config = AppConfig::load_or_default(&cli.config)
        .with_context(|| format!("Failed to load {}", cli.config.display()))?;

    match cli.command {
        Command::Tui => tui::run_tui(&config),
        Command::Play {
            moves,
            x_name,
            o_name,
            json,
        } => {
            initialize_tracing(config.logging().filter());
            log_config(&config);
            let game = play_moves(&config, &moves, x_name, o_name)?;
            println!("{}", render_game(&game, json)?);
            Ok(())
        }
    }
}

/// Logs to stderr so stdout stays clean for the game output.
fn initialize_tracing(default_filter: &str) {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .with_writer(std::io::stderr)
        .init();
}

/// Reports the configuration in effect.
pub(crate) fn log_config(config: &AppConfig) {
    info!(
        x = %config.players().name(Player::X),
        o = %config.players().name(Player::O),
        filter = %config.logging().filter(),
        log_file = %config.logging().log_file().display(),
        "Configuration in effect"
    );
}

/// Applies scripted moves in order, stopping at the first bad one.
#[instrument(skip(config, moves), fields(moves = moves.len()))]
fn play_moves(
    config: &AppConfig,
    moves: &[String],
    x_name: Option<String>,
    o_name: Option<String>,
) -> Result<Game> {
    let mut game = Game::with_players(config.players().clone());
    if let Some(name) = x_name {
        game.rename_player(Player::X, name);
    }
    if let Some(name) = o_name {
        game.rename_player(Player::O, name);
    }

    for raw in moves {
        let position: Position = raw.parse()?;
        let turn = game
            .play(position)
            .with_context(|| format!("Move {raw:?} rejected"))?;
        info!(%turn, "Move played");
    }

    Ok(game)
}

/// Formats the game as board, log and outcome, or as JSON.
fn render_game(game: &Game, json: bool) -> Result<String> {
    if json {
        return Ok(serde_json::to_string_pretty(&game.snapshot())?);
    }

    let mut out = format!("{}\n\nLog:\n", game.board().display());
    for entry in game.move_log() {
        out.push_str(&format!("  {entry}\n"));
    }
    out.push('\n');

    let outcome = game.outcome();
    if outcome.is_decided() {
        out.push_str(&format!("Game over! {outcome}"));
    } else {
        let next = game.active_player();
        out.push_str(&format!("Next: {} ({next})", game.players().name(next)));
    }

    Ok(out)
}
