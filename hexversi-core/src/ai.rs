//! Composable move-filter pipeline for computer players
//!
//! A strategy computes the active player's full legal-move map, runs it
//! through an ordered chain of filters (each returning a possibly
//! smaller map), and breaks any remaining tie by picking the
//! upper-leftmost cell in reading order.

use rustc_hash::FxHashMap;

use crate::board::{Coord, DiscColor};
use crate::error::{ReversiError, Result};
use crate::game::{Game, GameState};

/// The candidate set during filtering: legal placement cells mapped to
/// the number of opponent discs each would flip.
pub type CandidateMoves = FxHashMap<Coord, usize>;

/// Full legal-move map for the active player, built by evaluating every
/// grid cell through the capture engine.
pub fn all_legal_moves(game: &Game) -> Result<CandidateMoves> {
    let mut moves = CandidateMoves::default();
    for coord in game.board().cells() {
        let eval = game.move_eval(coord)?;
        if eval.is_legal {
            moves.insert(coord, eval.captures);
        }
    }
    Ok(moves)
}

/// One heuristic narrowing the candidate map.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MoveFilter {
    /// Keep only the candidates that flip the most discs.
    MaxCapture,
    /// Drop cells bordering a corner. No-op if that would drop every
    /// candidate: risk avoidance never eliminates all options.
    AvoidNextToCorners,
    /// Keep only corner cells when at least one corner is available;
    /// otherwise a no-op.
    PlayToCorners,
    /// Keep the candidates that leave the opponent the weakest best
    /// reply, measured by their maximum capture count after the move.
    MinimizeOpponentMaxCapture,
}

impl MoveFilter {
    /// Narrow the candidate map. Filters only read the game; the
    /// simulating filter works on throwaway position copies.
    pub fn apply(self, candidates: CandidateMoves, game: &Game) -> Result<CandidateMoves> {
        match self {
            MoveFilter::MaxCapture => Ok(max_capture(candidates)),
            MoveFilter::AvoidNextToCorners => Ok(avoid_next_to_corners(candidates, game)),
            MoveFilter::PlayToCorners => Ok(play_to_corners(candidates, game)),
            MoveFilter::MinimizeOpponentMaxCapture => minimize_opponent_max_capture(candidates, game),
        }
    }
}

fn max_capture(candidates: CandidateMoves) -> CandidateMoves {
    let max = candidates.values().max().copied().unwrap_or(0);
    candidates
        .into_iter()
        .filter(|&(_, captures)| captures == max)
        .collect()
}

fn avoid_next_to_corners(candidates: CandidateMoves, game: &Game) -> CandidateMoves {
    let risky = game.board().corner_adjacent_cells();
    let filtered: CandidateMoves = candidates
        .iter()
        .filter(|(cell, _)| !risky.contains(cell))
        .map(|(&cell, &captures)| (cell, captures))
        .collect();
    if filtered.is_empty() {
        candidates
    } else {
        filtered
    }
}

fn play_to_corners(candidates: CandidateMoves, game: &Game) -> CandidateMoves {
    let corners = game.board().corners();
    let filtered: CandidateMoves = candidates
        .iter()
        .filter(|(cell, _)| corners.contains(cell))
        .map(|(&cell, &captures)| (cell, captures))
        .collect();
    if filtered.is_empty() {
        candidates
    } else {
        filtered
    }
}

fn minimize_opponent_max_capture(
    candidates: CandidateMoves,
    game: &Game,
) -> Result<CandidateMoves> {
    let mut best_replies: FxHashMap<Coord, usize> = FxHashMap::default();
    for &cell in candidates.keys() {
        let mut copy = game.clone_position();
        copy.place_disc(cell)?;
        // An opponent with no moves can capture nothing.
        let best_reply = all_legal_moves(&copy)?.values().max().copied().unwrap_or(0);
        best_replies.insert(cell, best_reply);
    }
    let min = best_replies.values().min().copied().unwrap_or(0);
    Ok(candidates
        .into_iter()
        .filter(|(cell, _)| best_replies[cell] == min)
        .collect())
}

/// A computer player's move selector: an ordered chain of filters over
/// the legal-move map.
#[derive(Clone, Debug)]
pub struct AiStrategy {
    filters: Vec<MoveFilter>,
}

impl AiStrategy {
    /// Strategy applying the given filters in order. With no filters the
    /// strategy picks the upper-leftmost legal move.
    pub fn new(filters: Vec<MoveFilter>) -> Self {
        Self { filters }
    }

    /// Upper-leftmost legal move, no filtering.
    pub fn first_available() -> Self {
        Self::new(vec![])
    }

    /// Flip as many discs as possible.
    pub fn greedy() -> Self {
        Self::new(vec![MoveFilter::MaxCapture])
    }

    /// Take corners when possible, stay away from them otherwise.
    pub fn corner_seeking() -> Self {
        Self::new(vec![
            MoveFilter::PlayToCorners,
            MoveFilter::AvoidNextToCorners,
            MoveFilter::MaxCapture,
        ])
    }

    /// Greedy, tie-broken by the weakest reply left to the opponent.
    pub fn cautious() -> Self {
        Self::new(vec![
            MoveFilter::MaxCapture,
            MoveFilter::MinimizeOpponentMaxCapture,
        ])
    }

    pub fn filters(&self) -> &[MoveFilter] {
        &self.filters
    }

    /// Choose the cell to play for `color`.
    ///
    /// Fails with `NotYourTurn` when `color` is not the active player
    /// and `NoLegalMoves` when the candidate set starts empty; callers
    /// turn either into a pass.
    pub fn choose_move(&self, game: &Game, color: DiscColor) -> Result<Coord> {
        match game.game_state() {
            GameState::Turn(active) if active == color => {}
            GameState::Turn(_) => return Err(ReversiError::NotYourTurn),
            GameState::Unstarted => return Err(ReversiError::GameNotStarted),
            GameState::Over => return Err(ReversiError::GameOver),
        }

        let mut candidates = all_legal_moves(game)?;
        if candidates.is_empty() {
            return Err(ReversiError::NoLegalMoves);
        }
        for filter in &self.filters {
            candidates = filter.apply(candidates, game)?;
        }

        // Reading-order tie-break: topmost row, then leftmost column.
        candidates
            .keys()
            .min()
            .copied()
            .ok_or(ReversiError::NoLegalMoves)
    }
}
