//! Mapping between linear cell indices and (row, col) coordinates.
//!
//! Row 0 is the top of the board (Dark's home row). Square names use files
//! `a..h` for columns 0..7 and ranks `8..1` for rows 0..7.

use crate::constants::BOARD_SIZE;
use crate::error::NotationError;

pub const fn index_of(row: usize, col: usize) -> usize {
    row * BOARD_SIZE + col
}

pub const fn row_col_of(index: usize) -> (usize, usize) {
    (index / BOARD_SIZE, index % BOARD_SIZE)
}

/// Only dark cells, where `row + col` is odd, ever hold pieces.
pub const fn is_playable_cell(row: usize, col: usize) -> bool {
    (row + col) % 2 == 1
}

/// Steps `(dr, dc)` away from `index`, or `None` if that leaves the board.
pub fn offset(index: usize, dr: isize, dc: isize) -> Option<usize> {
    let (row, col) = row_col_of(index);
    let row = row.checked_add_signed(dr).filter(|&r| r < BOARD_SIZE)?;
    let col = col.checked_add_signed(dc).filter(|&c| c < BOARD_SIZE)?;
    Some(index_of(row, col))
}

/// Gets algebraic notation from a square index.
pub fn square_name(index: usize) -> String {
    let (row, col) = row_col_of(index);
    format!("{}{}", (b'a' + col as u8) as char, BOARD_SIZE - row)
}

/// Parses a square name such as `c3` into a playable index.
pub fn parse_square(text: &str) -> Result<usize, NotationError> {
    let bad = || NotationError::BadSquare(text.to_string());
    let mut chars = text.trim().chars();
    let file = chars.next().ok_or_else(bad)?;
    let rank = chars.next().and_then(|c| c.to_digit(10)).ok_or_else(bad)? as usize;
    if chars.next().is_some() || !('a'..='h').contains(&file) || !(1..=BOARD_SIZE).contains(&rank) {
        return Err(bad());
    }

    let row = BOARD_SIZE - rank;
    let col = (file as u8 - b'a') as usize;
    if !is_playable_cell(row, col) {
        return Err(NotationError::UnplayableSquare(text.trim().to_string()));
    }
    Ok(index_of(row, col))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::SQUARE_COUNT;

    #[test]
    fn test_index_round_trip() {
        for index in 0..SQUARE_COUNT {
            let (row, col) = row_col_of(index);
            assert_eq!(index_of(row, col), index);
        }
        assert_eq!(index_of(2, 3), 19);
        assert_eq!(row_col_of(63), (7, 7));
    }

    #[test]
    fn test_playable_cells() {
        assert!(is_playable_cell(0, 1));
        assert!(!is_playable_cell(0, 0));
        assert!(is_playable_cell(7, 0));
        let playable = (0..SQUARE_COUNT)
            .filter(|&i| {
                let (r, c) = row_col_of(i);
                is_playable_cell(r, c)
            })
            .count();
        assert_eq!(playable, 32);
    }

    #[test]
    fn test_offset_stays_on_board() {
        assert_eq!(offset(index_of(0, 1), -1, 1), None);
        assert_eq!(offset(index_of(0, 1), 1, -1), Some(index_of(1, 0)));
        assert_eq!(offset(index_of(7, 6), 1, 1), None);
        assert_eq!(offset(index_of(3, 7), -1, 1), None);
    }

    #[test]
    fn test_square_names() {
        assert_eq!(square_name(index_of(7, 0)), "a1");
        assert_eq!(square_name(index_of(0, 7)), "h8");
        assert_eq!(parse_square("a1"), Ok(index_of(7, 0)));
        assert_eq!(parse_square("c3"), Ok(index_of(5, 2)));
        assert!(matches!(parse_square("a2"), Err(NotationError::UnplayableSquare(_))));
        assert!(matches!(parse_square("i1"), Err(NotationError::BadSquare(_))));
        assert!(matches!(parse_square("a9"), Err(NotationError::BadSquare(_))));
        assert!(matches!(parse_square("c33"), Err(NotationError::BadSquare(_))));
        assert!(matches!(parse_square(""), Err(NotationError::BadSquare(_))));
    }
}
