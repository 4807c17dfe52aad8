//! Capture-line detection: the "sandwich" rule in six directions
//!
//! A placement captures along every direction whose adjacent cell holds
//! an opponent disc (the seed) and whose outward walk eventually closes
//! on a disc of the mover's own color. Walks that run off the grid or
//! into an empty cell capture nothing in that direction.

use crate::board::{Board, Coord, Direction, DiscColor};
use crate::error::Result;

/// Legality verdict for a candidate cell, together with the total number
/// of opponent discs the placement would flip.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MoveEval {
    pub is_legal: bool,
    pub captures: usize,
}

/// All capturable runs for placing `mover` at `cell`, one per direction
/// that closes on a mover-colored disc.
///
/// Lines hold only opponent discs; the terminal own-color disc is never
/// part of a line, and the seed cell is appended last because the walk
/// moves outward before the line is known to close.
pub fn capture_lines(board: &Board, cell: Coord, mover: DiscColor) -> Result<Vec<Vec<Coord>>> {
    let opponent = mover.opposite()?;
    let mut lines = Vec::new();
    for direction in Direction::ALL {
        let seed = cell.neighbor(direction, board.edge_length());
        if board.color_at(seed) != Ok(opponent) {
            continue;
        }
        if let Some(line) = walk_line(board, seed, direction, mover) {
            lines.push(line);
        }
    }
    Ok(lines)
}

/// Walk outward from the seed cell, accumulating opponent discs until
/// one of three terminals: off-grid (discard), empty cell (discard), or
/// a mover disc (the line is valid).
fn walk_line(
    board: &Board,
    seed: Coord,
    direction: Direction,
    mover: DiscColor,
) -> Option<Vec<Coord>> {
    let mut line = Vec::new();
    let mut current = seed;
    loop {
        let next = current.neighbor(direction, board.edge_length());
        match board.color_at(next) {
            Err(_) => return None,
            Ok(DiscColor::None) => return None,
            Ok(color) if color == mover => {
                line.push(seed);
                return Some(line);
            }
            Ok(_) => {
                line.push(next);
                current = next;
            }
        }
    }
}

/// Combined legality and capture count for placing `mover` at `cell`.
///
/// A move is legal iff the target cell is currently empty and at least
/// one line closes; `captures` sums the lengths of every valid line.
pub fn evaluate_move(board: &Board, cell: Coord, mover: DiscColor) -> Result<MoveEval> {
    if board.color_at(cell)? != DiscColor::None {
        return Ok(MoveEval {
            is_legal: false,
            captures: 0,
        });
    }
    let lines = capture_lines(board, cell, mover)?;
    let captures = lines.iter().map(Vec::len).sum::<usize>();
    Ok(MoveEval {
        is_legal: captures > 0,
        captures,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ReversiError;

    fn board_with(edge_length: usize, discs: &[(Coord, DiscColor)]) -> Board {
        let mut board = Board::new(edge_length).unwrap();
        for &(coord, color) in discs {
            board.place(coord, color).unwrap();
        }
        board
    }

    #[test]
    fn test_single_line_capture() {
        // Row 2 of an E=3 board: _ W B
        let board = board_with(
            3,
            &[
                (Coord::new(2, 1), DiscColor::White),
                (Coord::new(2, 2), DiscColor::Black),
            ],
        );
        let lines = capture_lines(&board, Coord::new(2, 0), DiscColor::Black).unwrap();
        assert_eq!(lines, vec![vec![Coord::new(2, 1)]]);

        let eval = evaluate_move(&board, Coord::new(2, 0), DiscColor::Black).unwrap();
        assert!(eval.is_legal);
        assert_eq!(eval.captures, 1);
    }

    #[test]
    fn test_longer_line_keeps_seed_last() {
        // Row 2 of an E=3 board: _ W W W B
        let board = board_with(
            3,
            &[
                (Coord::new(2, 1), DiscColor::White),
                (Coord::new(2, 2), DiscColor::White),
                (Coord::new(2, 3), DiscColor::White),
                (Coord::new(2, 4), DiscColor::Black),
            ],
        );
        let lines = capture_lines(&board, Coord::new(2, 0), DiscColor::Black).unwrap();
        // The walk pushes the outward cells first and the seed on close.
        assert_eq!(
            lines,
            vec![vec![
                Coord::new(2, 2),
                Coord::new(2, 3),
                Coord::new(2, 1),
            ]]
        );
        let eval = evaluate_move(&board, Coord::new(2, 0), DiscColor::Black).unwrap();
        assert_eq!(eval.captures, 3);
    }

    #[test]
    fn test_line_into_empty_cell_is_discarded() {
        // Row 2: _ W _   (no closing disc)
        let board = board_with(3, &[(Coord::new(2, 1), DiscColor::White)]);
        let lines = capture_lines(&board, Coord::new(2, 0), DiscColor::Black).unwrap();
        assert!(lines.is_empty());
        let eval = evaluate_move(&board, Coord::new(2, 0), DiscColor::Black).unwrap();
        assert!(!eval.is_legal);
    }

    #[test]
    fn test_line_off_grid_is_discarded() {
        // Row 0 of an E=2 board: _ W  with the line running off the edge.
        let board = board_with(2, &[(Coord::new(0, 1), DiscColor::White)]);
        let lines = capture_lines(&board, Coord::new(0, 0), DiscColor::Black).unwrap();
        assert!(lines.is_empty());
    }

    #[test]
    fn test_occupied_target_is_illegal() {
        let board = board_with(
            3,
            &[
                (Coord::new(2, 0), DiscColor::White),
                (Coord::new(2, 1), DiscColor::White),
                (Coord::new(2, 2), DiscColor::Black),
            ],
        );
        let eval = evaluate_move(&board, Coord::new(2, 0), DiscColor::Black).unwrap();
        assert_eq!(
            eval,
            MoveEval {
                is_legal: false,
                captures: 0
            }
        );
    }

    #[test]
    fn test_diagonal_lines_cross_the_midline() {
        // Opening position for E=3. The captures at (0,1) and (1,3) run
        // through the same white disc in different directions.
        let board = board_with(
            3,
            &[
                (Coord::new(1, 1), DiscColor::Black),
                (Coord::new(1, 2), DiscColor::White),
                (Coord::new(2, 1), DiscColor::White),
                (Coord::new(2, 3), DiscColor::Black),
                (Coord::new(3, 1), DiscColor::Black),
                (Coord::new(3, 2), DiscColor::White),
            ],
        );
        // (0,1) reaches B(2,3) through W(1,2) going lower-right.
        let lines = capture_lines(&board, Coord::new(0, 1), DiscColor::Black).unwrap();
        assert_eq!(lines, vec![vec![Coord::new(1, 2)]]);

        // (1,3) reaches B(1,1) through W(1,2) going left.
        let lines = capture_lines(&board, Coord::new(1, 3), DiscColor::Black).unwrap();
        assert_eq!(lines, vec![vec![Coord::new(1, 2)]]);
    }

    #[test]
    fn test_two_direction_capture() {
        // Row 2: B W _ W B, so placing in the middle captures both sides.
        let board = board_with(
            3,
            &[
                (Coord::new(2, 0), DiscColor::Black),
                (Coord::new(2, 1), DiscColor::White),
                (Coord::new(2, 3), DiscColor::White),
                (Coord::new(2, 4), DiscColor::Black),
            ],
        );
        let lines = capture_lines(&board, Coord::new(2, 2), DiscColor::Black).unwrap();
        assert_eq!(lines.len(), 2);
        assert!(lines.contains(&vec![Coord::new(2, 1)]));
        assert!(lines.contains(&vec![Coord::new(2, 3)]));
        let eval = evaluate_move(&board, Coord::new(2, 2), DiscColor::Black).unwrap();
        assert_eq!(eval.captures, 2);
    }

    #[test]
    fn test_neutral_mover_is_rejected() {
        let board = Board::new(2).unwrap();
        assert_eq!(
            capture_lines(&board, Coord::new(1, 1), DiscColor::None),
            Err(ReversiError::InvalidColor(DiscColor::None))
        );
    }

    #[test]
    fn test_out_of_bounds_target() {
        let board = Board::new(2).unwrap();
        let off = Coord::new(0, 2);
        assert_eq!(
            evaluate_move(&board, off, DiscColor::Black),
            Err(ReversiError::OutOfBounds(off))
        );
    }
}
