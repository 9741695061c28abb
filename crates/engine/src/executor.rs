//! Applies a chosen move to a board.
//!
//! The executor trusts its caller: the destination must already be one of the
//! legal moves for the piece on the origin. It does not re-validate.

use crate::board::Board;
use crate::constants::Cell;
use crate::coords::{index_of, row_col_of};
use crate::r#move::Move;

/// Moves the piece on `origin` to `destination` and returns the new board.
pub fn apply_move(board: &Board, origin: usize, destination: usize) -> Board {
    make_move(board, origin, destination).0
}

/// Like [`apply_move`], also returning a [`Move`] describing what happened.
///
/// A diagonal move longer than one step is a capture: the first occupied
/// cell between origin and destination is emptied, and only that one.
pub fn make_move(board: &Board, origin: usize, destination: usize) -> (Board, Move) {
    let mut next = *board;

    let (from_row, from_col) = row_col_of(origin);
    let (to_row, to_col) = row_col_of(destination);
    let delta_row = to_row as isize - from_row as isize;
    let delta_col = to_col as isize - from_col as isize;

    let mut captured = false;
    if delta_row.abs() == delta_col.abs() && delta_row.abs() > 1 {
        let (step_row, step_col) = (delta_row.signum(), delta_col.signum());
        for distance in 1..delta_row.abs() {
            let sq = index_of(
                (from_row as isize + distance * step_row) as usize,
                (from_col as isize + distance * step_col) as usize,
            );
            if !next.cell(sq).is_empty() {
                next.set(sq, Cell::Empty);
                captured = true;
                break;
            }
        }
    }

    let moving = next.cell(origin);
    next.set(origin, Cell::Empty);

    let mut promoted = false;
    let landed = match moving {
        Cell::Occupied(piece) => {
            let after = piece.promoted_at(to_row);
            promoted = after != piece;
            Cell::Occupied(after)
        }
        Cell::Empty => Cell::Empty,
    };
    next.set(destination, landed);

    (next, Move::new(origin, destination, captured, promoted))
}
