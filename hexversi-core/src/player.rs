//! Human and computer player variants
//!
//! A player is a color plus a source of moves. Humans produce no moves
//! here (input collection lives outside the engine), while computer
//! players delegate to a filter pipeline and fall back to passing when
//! the pipeline has nothing to offer.

use crate::ai::AiStrategy;
use crate::board::{Coord, DiscColor};
use crate::error::{ReversiError, Result};
use crate::game::Game;

/// What a player wants to do with its turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PlayerAction {
    Place(Coord),
    Pass,
}

/// How a player's moves are produced.
pub enum PlayerKind {
    /// Moves arrive from an external input collaborator.
    Human,
    /// Moves come from a move-filter pipeline.
    Computer(AiStrategy),
}

pub struct Player {
    color: DiscColor,
    kind: PlayerKind,
}

impl Player {
    pub fn human(color: DiscColor) -> Result<Player> {
        Player::new(color, PlayerKind::Human)
    }

    pub fn computer(color: DiscColor, strategy: AiStrategy) -> Result<Player> {
        Player::new(color, PlayerKind::Computer(strategy))
    }

    fn new(color: DiscColor, kind: PlayerKind) -> Result<Player> {
        if !color.is_player() {
            return Err(ReversiError::InvalidColor(color));
        }
        Ok(Player { color, kind })
    }

    pub fn color(&self) -> DiscColor {
        self.color
    }

    pub fn is_human(&self) -> bool {
        matches!(self.kind, PlayerKind::Human)
    }

    /// This player's choice for the current turn, or `None` for a human.
    ///
    /// A pipeline with no legal move, or asked off-turn, resolves to a
    /// pass rather than an error; anything else propagates.
    pub fn choose_action(&self, game: &Game) -> Result<Option<PlayerAction>> {
        let strategy = match &self.kind {
            PlayerKind::Human => return Ok(None),
            PlayerKind::Computer(strategy) => strategy,
        };
        match strategy.choose_move(game, self.color) {
            Ok(cell) => Ok(Some(PlayerAction::Place(cell))),
            Err(ReversiError::NoLegalMoves) | Err(ReversiError::NotYourTurn) => {
                Ok(Some(PlayerAction::Pass))
            }
            Err(other) => Err(other),
        }
    }
}
