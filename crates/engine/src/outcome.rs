//! Win detection.

use crate::board::Board;
use crate::constants::Color;

/// The side that has won, if any: a player wins once the opponent has no
/// pieces left. Positions where a side is blocked are not treated as lost.
pub fn winner(board: &Board) -> Option<Color> {
    let mut has_dark = false;
    let mut has_light = false;
    for cell in board.cells() {
        has_dark |= cell.belongs_to(Color::Dark);
        has_light |= cell.belongs_to(Color::Light);
    }

    if !has_dark {
        Some(Color::Light)
    } else if !has_light {
        Some(Color::Dark)
    } else {
        None
    }
}
