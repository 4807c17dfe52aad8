//! Turn, pass, and game-over state machine
//!
//! `Game` owns the board exclusively; every mutation goes through
//! `place_disc`, `pass`, or `start`, and successful mutations notify the
//! registered `TurnListener`s. Failed calls return a typed error and
//! leave the game untouched.

use serde::{Deserialize, Serialize};

use crate::board::{Board, Coord, DiscColor};
use crate::capture::{self, MoveEval};
use crate::error::{ReversiError, Result};

/// Phase of a game. Exactly one of these holds at any time.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameState {
    Unstarted,
    /// The color whose turn it is. Invariant: never `DiscColor::None`.
    Turn(DiscColor),
    Over,
}

/// Observer for successful mutations.
///
/// A placement or a non-final pass fires `on_board_changed` followed by
/// `on_turn_advanced`; the pass that ends the game fires only
/// `on_game_over`. Listeners run in registration order.
pub trait TurnListener {
    fn on_board_changed(&mut self) {}
    fn on_turn_advanced(&mut self) {}
    fn on_game_over(&mut self) {}
}

/// Handle identifying a registered listener for removal.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

/// A game of Reversi on a regular hexagonal grid of variable size.
pub struct Game {
    board: Board,
    state: GameState,
    pass_counter: u32,
    listeners: Vec<(ListenerId, Box<dyn TurnListener>)>,
    next_listener_id: u64,
}

impl Game {
    /// Fresh unstarted game: empty grid plus the classic six-disc
    /// opening alternating around the center cell.
    pub fn new(edge_length: usize) -> Result<Self> {
        let mut board = Board::new(edge_length)?;
        let center = Coord::new(edge_length as i32 - 1, edge_length as i32 - 1);
        board.place(Coord::new(center.row - 1, center.col - 1), DiscColor::Black)?;
        board.place(Coord::new(center.row - 1, center.col), DiscColor::White)?;
        board.place(Coord::new(center.row, center.col - 1), DiscColor::White)?;
        board.place(Coord::new(center.row, center.col + 1), DiscColor::Black)?;
        board.place(Coord::new(center.row + 1, center.col - 1), DiscColor::Black)?;
        board.place(Coord::new(center.row + 1, center.col), DiscColor::White)?;
        Ok(Self {
            board,
            state: GameState::Unstarted,
            pass_counter: 0,
            listeners: Vec::new(),
            next_listener_id: 0,
        })
    }

    /// Game resumed from an arbitrary position. Used for speculative
    /// copies and position-level tests.
    pub(crate) fn from_position(board: Board, state: GameState, pass_counter: u32) -> Self {
        Self {
            board,
            state,
            pass_counter,
            listeners: Vec::new(),
            next_listener_id: 0,
        }
    }

    /// Deep copy of the position (board, phase, pass counter) with no
    /// registered listeners. Speculative evaluation mutates the copy,
    /// never the live game.
    pub fn clone_position(&self) -> Game {
        Game::from_position(self.board.clone(), self.state, self.pass_counter)
    }

    // ========================================================================
    // QUERIES
    // ========================================================================

    pub fn game_state(&self) -> GameState {
        self.state
    }

    pub fn is_game_over(&self) -> bool {
        self.state == GameState::Over
    }

    pub fn edge_length(&self) -> usize {
        self.board.edge_length()
    }

    pub fn pass_count(&self) -> u32 {
        self.pass_counter
    }

    /// Shared view of the live board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Detached copy of the grid; mutating it never affects the engine.
    pub fn snapshot(&self) -> Vec<Vec<DiscColor>> {
        self.board.snapshot()
    }

    pub fn color_at(&self, coord: Coord) -> Result<DiscColor> {
        self.board.color_at(coord)
    }

    pub fn score(&self, color: DiscColor) -> Result<usize> {
        self.board.score(color)
    }

    /// The color whose turn it is.
    pub fn active_color(&self) -> Result<DiscColor> {
        match self.state {
            GameState::Turn(color) => Ok(color),
            GameState::Unstarted => Err(ReversiError::GameNotStarted),
            GameState::Over => Err(ReversiError::GameOver),
        }
    }

    /// Legality and capture count of a placement by the active player.
    pub fn move_eval(&self, coord: Coord) -> Result<MoveEval> {
        let mover = self.active_color()?;
        capture::evaluate_move(&self.board, coord, mover)
    }

    /// Capture lines of a placement by the active player.
    pub fn capture_lines(&self, coord: Coord) -> Result<Vec<Vec<Coord>>> {
        let mover = self.active_color()?;
        capture::capture_lines(&self.board, coord, mover)
    }

    /// Whether any cell is a legal placement for the active player.
    pub fn any_legal_moves(&self) -> Result<bool> {
        self.active_color()?;
        for coord in self.board.cells() {
            if self.move_eval(coord)?.is_legal {
                return Ok(true);
            }
        }
        Ok(false)
    }

    /// The higher-scoring color once the game is over, or
    /// `DiscColor::None` for a tie.
    pub fn winner(&self) -> Result<DiscColor> {
        if self.state != GameState::Over {
            return Err(ReversiError::GameNotOver);
        }
        let black = self.board.score(DiscColor::Black)?;
        let white = self.board.score(DiscColor::White)?;
        if black > white {
            Ok(DiscColor::Black)
        } else if white > black {
            Ok(DiscColor::White)
        } else {
            Ok(DiscColor::None)
        }
    }

    // ========================================================================
    // MUTATIONS
    // ========================================================================

    /// Begin play. Black always opens.
    pub fn start(&mut self) -> Result<()> {
        if self.state != GameState::Unstarted {
            return Err(ReversiError::AlreadyStarted);
        }
        self.state = GameState::Turn(DiscColor::Black);
        self.notify_board_changed();
        self.notify_turn_advanced();
        Ok(())
    }

    /// Place a disc for the active player, flipping every captured line.
    ///
    /// Preconditions are checked in order: game started, game not over,
    /// coordinate on the grid, move legal. A failed call never mutates
    /// the board.
    pub fn place_disc(&mut self, coord: Coord) -> Result<()> {
        let mover = self.active_color()?;
        if self.board.color_at(coord)? != DiscColor::None {
            return Err(ReversiError::IllegalMove(coord));
        }
        let lines = capture::capture_lines(&self.board, coord, mover)?;
        if lines.is_empty() {
            return Err(ReversiError::IllegalMove(coord));
        }

        self.board.place(coord, mover)?;
        for line in &lines {
            for &cell in line {
                self.board.flip(cell)?;
            }
        }
        self.pass_counter = 0;
        self.state = GameState::Turn(mover.opposite()?);
        self.notify_board_changed();
        self.notify_turn_advanced();
        Ok(())
    }

    /// Give up the active player's turn. The second consecutive pass
    /// ends the game.
    pub fn pass(&mut self) -> Result<()> {
        let mover = self.active_color()?;
        self.pass_counter += 1;
        if self.pass_counter >= 2 {
            self.state = GameState::Over;
            self.notify_game_over();
        } else {
            self.state = GameState::Turn(mover.opposite()?);
            self.notify_board_changed();
            self.notify_turn_advanced();
        }
        Ok(())
    }

    // ========================================================================
    // LISTENERS
    // ========================================================================

    /// Register a listener; the returned handle removes it again.
    pub fn subscribe(&mut self, listener: Box<dyn TurnListener>) -> ListenerId {
        let id = ListenerId(self.next_listener_id);
        self.next_listener_id += 1;
        self.listeners.push((id, listener));
        id
    }

    /// Remove a listener by its handle. Returns false for unknown ids.
    pub fn unsubscribe(&mut self, id: ListenerId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(listener_id, _)| *listener_id != id);
        self.listeners.len() != before
    }

    fn notify_board_changed(&mut self) {
        for (_, listener) in &mut self.listeners {
            listener.on_board_changed();
        }
    }

    fn notify_turn_advanced(&mut self) {
        for (_, listener) in &mut self.listeners {
            listener.on_turn_advanced();
        }
    }

    fn notify_game_over(&mut self) {
        for (_, listener) in &mut self.listeners {
            listener.on_game_over();
        }
    }
}
