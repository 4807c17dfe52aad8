//! Hexagonal board geometry and the disc grid
//!
//! The hexagon is stored as a jagged rectangle-of-rows rather than axial
//! coordinates: a board with edge length `E` has `2E - 1` rows and row `r`
//! has `(2E - 1) - |r - (E - 1)|` cells. Column deltas for the diagonal
//! directions therefore depend on whether a row sits above, at, or below
//! the horizontal midline (row `E - 1`).

use serde::{Deserialize, Serialize};

use crate::error::{ReversiError, Result};

/// Disc color of a cell.
///
/// `None` marks an empty cell and doubles as the tie value returned by
/// `Game::winner`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DiscColor {
    Black,
    White,
    None,
}

impl DiscColor {
    /// Opposite player color. The neutral color has no opposite.
    pub fn opposite(self) -> Result<DiscColor> {
        match self {
            DiscColor::Black => Ok(DiscColor::White),
            DiscColor::White => Ok(DiscColor::Black),
            DiscColor::None => Err(ReversiError::InvalidColor(DiscColor::None)),
        }
    }

    pub fn is_player(self) -> bool {
        self != DiscColor::None
    }
}

/// A (row, column) cell address, 0-indexed from the top-left of the
/// jagged layout.
///
/// Plain value, copied freely. Adjacency may step outside the grid;
/// bounds are the board's concern, never this type's. `Ord` is
/// lexicographic by row then column, which is exactly the
/// "upper-leftmost" reading order used to break ties in move selection.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub struct Coord {
    pub row: i32,
    pub col: i32,
}

impl Coord {
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// Adjacent coordinate in the given direction on a board with the
    /// given edge length. No bounds checking.
    pub fn neighbor(self, direction: Direction, edge_length: usize) -> Coord {
        let (dr, dc) = direction.offsets(self.row, edge_length);
        Coord::new(self.row + dr, self.col + dc)
    }
}

/// The six directions around a pointy-top hexagonal cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    UpperLeft,
    UpperRight,
    Left,
    Right,
    LowerLeft,
    LowerRight,
}

impl Direction {
    pub const ALL: [Direction; 6] = [
        Direction::UpperLeft,
        Direction::UpperRight,
        Direction::Left,
        Direction::Right,
        Direction::LowerLeft,
        Direction::LowerRight,
    ];

    /// Row/column deltas for one step out of a cell in row `row`.
    ///
    /// The diagonal deltas flip around the midline row `E - 1`; this
    /// asymmetry is what keeps the jagged grid visually hexagonal and
    /// must not be "simplified".
    fn offsets(self, row: i32, edge_length: usize) -> (i32, i32) {
        let midline = edge_length as i32 - 1;
        match self {
            Direction::UpperLeft => {
                if row > midline {
                    (-1, 0)
                } else {
                    (-1, -1)
                }
            }
            Direction::UpperRight => {
                if row <= midline {
                    (-1, 0)
                } else {
                    (-1, 1)
                }
            }
            Direction::Left => (0, -1),
            Direction::Right => (0, 1),
            Direction::LowerLeft => {
                if row >= midline {
                    (1, -1)
                } else {
                    (1, 0)
                }
            }
            Direction::LowerRight => {
                if row >= midline {
                    (1, 0)
                } else {
                    (1, 1)
                }
            }
        }
    }
}

/// The jagged hexagonal grid of cells.
///
/// The shape is fixed at construction; only cell contents mutate. The
/// live board is owned exclusively by `Game`; external readers get
/// `snapshot` copies or a shared borrow.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    edge_length: usize,
    grid: Vec<Vec<DiscColor>>,
}

impl Board {
    /// Empty board with the given edge length (cells per hexagon side).
    pub fn new(edge_length: usize) -> Result<Self> {
        if edge_length < 2 {
            return Err(ReversiError::InvalidEdgeLength(edge_length));
        }
        let rows = 2 * edge_length - 1;
        let midline = edge_length as i32 - 1;
        let grid = (0..rows)
            .map(|row| {
                let length = (2 * edge_length - 1) - (row as i32 - midline).unsigned_abs() as usize;
                vec![DiscColor::None; length]
            })
            .collect();
        Ok(Self { edge_length, grid })
    }

    pub fn edge_length(&self) -> usize {
        self.edge_length
    }

    pub fn row_count(&self) -> usize {
        self.grid.len()
    }

    /// Length of one row of the jagged grid.
    pub fn row_length(&self, row: usize) -> Option<usize> {
        self.grid.get(row).map(Vec::len)
    }

    /// Whether the coordinate addresses a cell of the jagged grid.
    pub fn contains(&self, coord: Coord) -> bool {
        if coord.row < 0 || coord.col < 0 {
            return false;
        }
        match self.grid.get(coord.row as usize) {
            Some(row) => (coord.col as usize) < row.len(),
            None => false,
        }
    }

    pub fn color_at(&self, coord: Coord) -> Result<DiscColor> {
        if !self.contains(coord) {
            return Err(ReversiError::OutOfBounds(coord));
        }
        Ok(self.grid[coord.row as usize][coord.col as usize])
    }

    /// Unconditional write. Legality is the state machine's job, not the
    /// board's.
    pub fn place(&mut self, coord: Coord, color: DiscColor) -> Result<()> {
        if !self.contains(coord) {
            return Err(ReversiError::OutOfBounds(coord));
        }
        self.grid[coord.row as usize][coord.col as usize] = color;
        Ok(())
    }

    /// Turn a disc over to the opposite color.
    pub fn flip(&mut self, coord: Coord) -> Result<()> {
        let color = self.color_at(coord)?;
        if color == DiscColor::None {
            return Err(ReversiError::EmptyCell(coord));
        }
        self.place(coord, color.opposite()?)
    }

    /// Number of discs of a player color on the whole grid.
    pub fn score(&self, color: DiscColor) -> Result<usize> {
        if !color.is_player() {
            return Err(ReversiError::InvalidColor(color));
        }
        Ok(self
            .grid
            .iter()
            .flatten()
            .filter(|&&cell| cell == color)
            .count())
    }

    /// Deep copy of the grid. Mutating the returned rows never affects
    /// the board.
    pub fn snapshot(&self) -> Vec<Vec<DiscColor>> {
        self.grid.clone()
    }

    /// Every cell coordinate in reading order (row, then column).
    pub fn cells(&self) -> impl Iterator<Item = Coord> + '_ {
        self.grid.iter().enumerate().flat_map(|(row, cells)| {
            (0..cells.len()).map(move |col| Coord::new(row as i32, col as i32))
        })
    }

    pub fn cell_count(&self) -> usize {
        self.grid.iter().map(Vec::len).sum()
    }

    /// The six corner cells of the hexagon.
    pub fn corners(&self) -> [Coord; 6] {
        let e = self.edge_length as i32;
        [
            Coord::new(0, 0),
            Coord::new(0, e - 1),
            Coord::new(e - 1, 0),
            Coord::new(e - 1, 2 * e - 2),
            Coord::new(2 * e - 2, 0),
            Coord::new(2 * e - 2, e - 1),
        ]
    }

    /// The three cells bordering each corner, eighteen in total. These
    /// are the "risky" cells the defensive filter steers away from.
    pub fn corner_adjacent_cells(&self) -> Vec<Coord> {
        let e = self.edge_length as i32;
        vec![
            // Top-left corner
            Coord::new(0, 1),
            Coord::new(1, 0),
            Coord::new(1, 1),
            // Top-right corner
            Coord::new(0, e - 2),
            Coord::new(1, e - 1),
            Coord::new(1, e),
            // Left corner
            Coord::new(e - 2, 0),
            Coord::new(e - 1, 1),
            Coord::new(e, 0),
            // Right corner
            Coord::new(e - 2, 2 * e - 3),
            Coord::new(e - 1, 2 * e - 3),
            Coord::new(e, 2 * e - 3),
            // Bottom-left corner
            Coord::new(2 * e - 3, 0),
            Coord::new(2 * e - 3, 1),
            Coord::new(2 * e - 2, 1),
            // Bottom-right corner
            Coord::new(2 * e - 3, e),
            Coord::new(2 * e - 3, e - 1),
            Coord::new(2 * e - 2, e - 2),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grid_shape() {
        for edge in 2..=5usize {
            let board = Board::new(edge).unwrap();
            assert_eq!(board.row_count(), 2 * edge - 1);
            for row in 0..board.row_count() {
                let expected =
                    (2 * edge - 1) - (row as i32 - (edge as i32 - 1)).unsigned_abs() as usize;
                assert_eq!(board.row_length(row), Some(expected));
            }
            assert_eq!(
                board.cell_count(),
                board.cells().count(),
                "cells() must visit the whole grid"
            );
        }
    }

    #[test]
    fn test_edge_length_too_small() {
        assert_eq!(Board::new(1), Err(ReversiError::InvalidEdgeLength(1)));
        assert_eq!(Board::new(0), Err(ReversiError::InvalidEdgeLength(0)));
    }

    #[test]
    fn test_bounds() {
        let board = Board::new(3).unwrap();
        assert!(board.contains(Coord::new(0, 2)));
        assert!(!board.contains(Coord::new(0, 3))); // row 0 has 3 cells
        assert!(board.contains(Coord::new(2, 4)));
        assert!(!board.contains(Coord::new(-1, 0)));
        assert!(!board.contains(Coord::new(5, 0)));
        assert_eq!(
            board.color_at(Coord::new(0, 3)),
            Err(ReversiError::OutOfBounds(Coord::new(0, 3)))
        );
    }

    #[test]
    fn test_neighbor_midline_asymmetry() {
        // Above the midline (E=3, midline row 2) upper steps keep the
        // column, lower steps widen.
        assert_eq!(
            Coord::new(1, 1).neighbor(Direction::UpperRight, 3),
            Coord::new(0, 1)
        );
        assert_eq!(
            Coord::new(1, 1).neighbor(Direction::UpperLeft, 3),
            Coord::new(0, 0)
        );
        assert_eq!(
            Coord::new(1, 1).neighbor(Direction::LowerLeft, 3),
            Coord::new(2, 1)
        );
        assert_eq!(
            Coord::new(1, 1).neighbor(Direction::LowerRight, 3),
            Coord::new(2, 2)
        );
        // Below the midline the deltas mirror.
        assert_eq!(
            Coord::new(3, 1).neighbor(Direction::UpperRight, 3),
            Coord::new(2, 2)
        );
        assert_eq!(
            Coord::new(3, 1).neighbor(Direction::UpperLeft, 3),
            Coord::new(2, 1)
        );
        assert_eq!(
            Coord::new(3, 1).neighbor(Direction::LowerLeft, 3),
            Coord::new(4, 0)
        );
        assert_eq!(
            Coord::new(3, 1).neighbor(Direction::LowerRight, 3),
            Coord::new(4, 1)
        );
        // Left/right never shift rows.
        assert_eq!(
            Coord::new(2, 2).neighbor(Direction::Left, 3),
            Coord::new(2, 1)
        );
        assert_eq!(
            Coord::new(2, 2).neighbor(Direction::Right, 3),
            Coord::new(2, 3)
        );
    }

    #[test]
    fn test_place_and_flip() {
        let mut board = Board::new(2).unwrap();
        let cell = Coord::new(1, 1);
        board.place(cell, DiscColor::Black).unwrap();
        assert_eq!(board.color_at(cell), Ok(DiscColor::Black));
        board.flip(cell).unwrap();
        assert_eq!(board.color_at(cell), Ok(DiscColor::White));
    }

    #[test]
    fn test_flip_empty_cell_fails() {
        let mut board = Board::new(2).unwrap();
        let cell = Coord::new(0, 0);
        assert_eq!(board.flip(cell), Err(ReversiError::EmptyCell(cell)));
    }

    #[test]
    fn test_score_rejects_neutral_color() {
        let board = Board::new(2).unwrap();
        assert_eq!(
            board.score(DiscColor::None),
            Err(ReversiError::InvalidColor(DiscColor::None))
        );
    }

    #[test]
    fn test_snapshot_is_detached() {
        let mut board = Board::new(2).unwrap();
        board.place(Coord::new(0, 0), DiscColor::Black).unwrap();
        let mut snapshot = board.snapshot();
        snapshot[0][0] = DiscColor::White;
        assert_eq!(board.color_at(Coord::new(0, 0)), Ok(DiscColor::Black));
    }

    #[test]
    fn test_corner_cells() {
        let board = Board::new(3).unwrap();
        assert_eq!(
            board.corners(),
            [
                Coord::new(0, 0),
                Coord::new(0, 2),
                Coord::new(2, 0),
                Coord::new(2, 4),
                Coord::new(4, 0),
                Coord::new(4, 2),
            ]
        );
        let adjacent = board.corner_adjacent_cells();
        assert_eq!(adjacent.len(), 18);
        // Corners themselves are never in the risky set.
        for corner in board.corners() {
            assert!(!adjacent.contains(&corner));
        }
        // Every risky cell is actually on the grid.
        for cell in &adjacent {
            assert!(board.contains(*cell), "{cell:?} off grid");
        }
    }

    #[test]
    fn test_opposite_color() {
        assert_eq!(DiscColor::Black.opposite(), Ok(DiscColor::White));
        assert_eq!(DiscColor::White.opposite(), Ok(DiscColor::Black));
        assert!(DiscColor::None.opposite().is_err());
    }
}
