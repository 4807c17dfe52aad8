//! Error taxonomy for the engine
//!
//! Every public operation with a precondition reports a dedicated error
//! kind to its immediate caller; nothing is retried internally. The
//! `NoLegalMoves` / `NotYourTurn` kinds must stay distinguishable so a
//! player abstraction can convert them into a pass.

use thiserror::Error;

use crate::board::{Coord, DiscColor};

/// Errors produced by the board, the game state machine, and the
/// move-selection pipeline.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum ReversiError {
    /// The coordinate falls outside the jagged grid for its row.
    #[error("coordinate ({}, {}) is outside the grid", .0.row, .0.col)]
    OutOfBounds(Coord),

    /// Edge lengths below 2 do not form a playable hexagon.
    #[error("edge length must be at least 2, got {0}")]
    InvalidEdgeLength(usize),

    #[error("the game has not started yet")]
    GameNotStarted,

    #[error("the game has already started")]
    AlreadyStarted,

    #[error("the game is already over")]
    GameOver,

    /// A winner was requested before the game ended.
    #[error("the game is not over yet")]
    GameNotOver,

    /// The target cell is occupied or the placement captures nothing.
    #[error("illegal move at ({}, {})", .0.row, .0.col)]
    IllegalMove(Coord),

    #[error("it is not this player's turn")]
    NotYourTurn,

    /// The pipeline was asked to choose from an empty candidate set;
    /// the caller is expected to pass instead.
    #[error("no legal moves available")]
    NoLegalMoves,

    /// A flip was attempted on a cell with no disc. Unreachable through
    /// public API misuse; reaching it means an engine invariant broke.
    #[error("cannot flip the empty cell at ({}, {})", .0.row, .0.col)]
    EmptyCell(Coord),

    /// A player-only query was made with the neutral color.
    #[error("expected a player color, got {0:?}")]
    InvalidColor(DiscColor),
}

pub type Result<T> = std::result::Result<T, ReversiError>;
