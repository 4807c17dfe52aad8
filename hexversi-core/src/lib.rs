//! Hexversi Core - hexagonal Reversi engine
//!
//! This crate provides the core game logic for Hexversi:
//! - Board geometry (jagged hexagonal grid of variable edge length)
//! - Capture-line detection (the sandwich rule in six directions)
//! - Turn/pass/game-over state machine with observer notifications
//! - Composable move-filter pipeline for computer players

pub mod ai;
pub mod board;
pub mod capture;
pub mod error;
pub mod game;
pub mod player;

// Re-exports for convenient access
pub use ai::{all_legal_moves, AiStrategy, CandidateMoves, MoveFilter};
pub use board::{Board, Coord, Direction, DiscColor};
pub use capture::{capture_lines, evaluate_move, MoveEval};
pub use error::{ReversiError, Result};
pub use game::{Game, GameState, ListenerId, TurnListener};
pub use player::{Player, PlayerAction, PlayerKind};
