//! Runs a full computer-vs-computer match
//!
//! The driver is the "external collaborator" of the engine contracts: it
//! wires two players to one game, forwards each chosen action through
//! the mutation interface, and reports the outcome.

use anyhow::{Context, Result};
use hexversi_core::{AiStrategy, DiscColor, Game, Player, PlayerAction, TurnListener};
use serde::Serialize;
use tracing::{debug, info, trace};

/// Listener that mirrors engine notifications into the log.
struct TraceListener;

impl TurnListener for TraceListener {
    fn on_board_changed(&mut self) {
        trace!("board changed");
    }
    fn on_turn_advanced(&mut self) {
        trace!("turn advanced");
    }
    fn on_game_over(&mut self) {
        debug!("game over");
    }
}

/// Named filter stacks selectable from the command line.
pub fn strategy_preset(name: &str) -> Option<AiStrategy> {
    match name {
        "first" => Some(AiStrategy::first_available()),
        "greedy" => Some(AiStrategy::greedy()),
        "corners" => Some(AiStrategy::corner_seeking()),
        "cautious" => Some(AiStrategy::cautious()),
        _ => None,
    }
}

/// Final record of a played match.
#[derive(Clone, Debug, Serialize)]
pub struct MatchSummary {
    pub edge_length: usize,
    pub black_score: usize,
    pub white_score: usize,
    /// `DiscColor::None` means a tie.
    pub winner: DiscColor,
    pub placements: usize,
    pub passes: usize,
}

/// Play one game to completion between two pipelines.
pub fn run_match(edge_length: usize, black: AiStrategy, white: AiStrategy) -> Result<MatchSummary> {
    let mut game = Game::new(edge_length)?;
    let players = [
        Player::computer(DiscColor::Black, black)?,
        Player::computer(DiscColor::White, white)?,
    ];
    game.subscribe(Box::new(TraceListener));
    game.start()?;

    let mut placements = 0usize;
    let mut passes = 0usize;
    while !game.is_game_over() {
        let active = game.active_color()?;
        let player = players
            .iter()
            .find(|p| p.color() == active)
            .context("no player registered for the active color")?;
        match player.choose_action(&game)? {
            Some(PlayerAction::Place(cell)) => {
                debug!(?active, row = cell.row, col = cell.col, "placing disc");
                game.place_disc(cell)?;
                placements += 1;
            }
            Some(PlayerAction::Pass) => {
                debug!(?active, "passing");
                game.pass()?;
                passes += 1;
            }
            None => anyhow::bail!("human players are not supported by this driver"),
        }
    }

    let summary = MatchSummary {
        edge_length,
        black_score: game.score(DiscColor::Black)?,
        white_score: game.score(DiscColor::White)?,
        winner: game.winner()?,
        placements,
        passes,
    };
    info!(
        black = summary.black_score,
        white = summary.white_score,
        winner = ?summary.winner,
        placements = summary.placements,
        "match finished"
    );
    Ok(summary)
}
