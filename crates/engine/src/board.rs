//! The board representation for the draughts engine.

use crate::bitboard::SquareSet;
use crate::constants::{BOARD_SIZE, Cell, Color, Piece, Rank, SETUP_ROWS, SQUARE_COUNT};
use crate::coords::{index_of, is_playable_cell};
use crate::error::NotationError;
use std::fmt;

/// A full position: one cell per board index, `index = row * 8 + col`.
///
/// Boards are plain values. Every move produces a new `Board`, the old one is
/// never touched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Board {
    cells: [Cell; SQUARE_COUNT],
}

impl Board {
    pub fn empty() -> Self {
        Self {
            cells: [Cell::Empty; SQUARE_COUNT],
        }
    }

    /// Standard setup: Dark men on the dark cells of the top three rows,
    /// Light men on the dark cells of the bottom three rows.
    pub fn initial() -> Self {
        let mut board = Board::empty();
        for row in 0..BOARD_SIZE {
            let color = if row < SETUP_ROWS {
                Color::Dark
            } else if row >= BOARD_SIZE - SETUP_ROWS {
                Color::Light
            } else {
                continue;
            };
            for col in 0..BOARD_SIZE {
                if is_playable_cell(row, col) {
                    board.cells[index_of(row, col)] = Cell::Occupied(Piece::new(color, Rank::Man));
                }
            }
        }
        board
    }

    #[inline]
    pub fn cell(&self, index: usize) -> Cell {
        self.cells[index]
    }

    /// Returns a copy of the board with `index` set to `cell`.
    pub fn with_cell(&self, index: usize, cell: impl Into<Cell>) -> Board {
        let mut next = *self;
        next.cells[index] = cell.into();
        next
    }

    pub(crate) fn set(&mut self, index: usize, cell: Cell) {
        self.cells[index] = cell;
    }

    pub fn cells(&self) -> &[Cell; SQUARE_COUNT] {
        &self.cells
    }

    /// Indices of every man and king of `color`.
    pub fn pieces_of(&self, color: Color) -> SquareSet {
        (0..SQUARE_COUNT).filter(|&i| self.cells[i].belongs_to(color)).collect()
    }

    pub fn count(&self, color: Color) -> usize {
        self.cells.iter().filter(|cell| cell.belongs_to(color)).count()
    }

    pub fn piece_count(&self) -> usize {
        self.cells.iter().filter(|cell| !cell.is_empty()).count()
    }

    /// Reads the row layout produced by [`Board::to_notation`].
    ///
    /// Rows run top (row 0) to bottom separated by `/`. Digits stand for runs
    /// of empty cells, `d`/`D` are Dark men/kings and `l`/`L` Light ones.
    pub fn from_notation(text: &str) -> Result<Board, NotationError> {
        let rows: Vec<&str> = text.trim().split('/').collect();
        if rows.len() != BOARD_SIZE {
            return Err(NotationError::RowCount {
                expected: BOARD_SIZE,
                found: rows.len(),
            });
        }

        let mut board = Board::empty();
        for (row, layout) in rows.iter().enumerate() {
            let mut col = 0;
            for ch in layout.chars() {
                if let Some(run) = ch.to_digit(10) {
                    col += run as usize;
                    continue;
                }
                let cell = Cell::from_char(ch).ok_or(NotationError::UnknownPiece(ch))?;
                if col >= BOARD_SIZE {
                    return Err(NotationError::RowWidth { row, width: col + 1 });
                }
                if !cell.is_empty() && !is_playable_cell(row, col) {
                    return Err(NotationError::PieceOnLightCell { row, col });
                }
                board.cells[index_of(row, col)] = cell;
                col += 1;
            }
            if col != BOARD_SIZE {
                return Err(NotationError::RowWidth { row, width: col });
            }
        }
        Ok(board)
    }

    pub fn to_notation(&self) -> String {
        let mut out = String::with_capacity(72);
        for row in 0..BOARD_SIZE {
            let mut empty_count = 0;
            for col in 0..BOARD_SIZE {
                let cell = self.cells[index_of(row, col)];
                if cell.is_empty() {
                    empty_count += 1;
                } else {
                    if empty_count > 0 {
                        out.push_str(&empty_count.to_string());
                        empty_count = 0;
                    }
                    out.push(cell.to_char());
                }
            }
            if empty_count > 0 {
                out.push_str(&empty_count.to_string());
            }
            if row < BOARD_SIZE - 1 {
                out.push('/');
            }
        }
        out
    }
}

impl Default for Board {
    fn default() -> Self {
        Board::initial()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "  +-----------------+")?;
        for row in 0..BOARD_SIZE {
            write!(f, "{} | ", BOARD_SIZE - row)?;
            for col in 0..BOARD_SIZE {
                let cell = self.cells[index_of(row, col)];
                let symbol = if cell.is_empty() && is_playable_cell(row, col) { '.' } else { cell.glyph() };
                write!(f, "{} ", symbol)?;
            }
            writeln!(f, "|")?;
        }
        writeln!(f, "  +-----------------+")?;
        writeln!(f, "    a b c d e f g h")
    }
}
