//! Move generation for men and kings, including pre-computed diagonal rays.

use crate::bitboard::SquareSet;
use crate::board::Board;
use crate::constants::{Cell, Color, Rank, SQUARE_COUNT};
use crate::coords::offset;
use once_cell::sync::Lazy;

/// Diagonal directions as (row step, col step).
pub const DIRECTIONS: [(isize, isize); 4] = [(-1, -1), (-1, 1), (1, -1), (1, 1)];

/// Pre-computed diagonal rays, built once and then shared globally.
pub struct RayTables {
    /// `rays[square][direction]` lists the cells along that diagonal,
    /// ordered outward from `square` up to the board edge.
    pub rays: Vec<[Vec<usize>; 4]>,
}

impl RayTables {
    fn new() -> Self {
        let rays = (0..SQUARE_COUNT)
            .map(|sq| {
                std::array::from_fn(|dir| {
                    let (dr, dc) = DIRECTIONS[dir];
                    let mut ray = Vec::new();
                    let mut current = sq;
                    while let Some(next) = offset(current, dr, dc) {
                        ray.push(next);
                        current = next;
                    }
                    ray
                })
            })
            .collect();
        RayTables { rays }
    }
}

pub static RAY_TABLES: Lazy<RayTables> = Lazy::new(RayTables::new);

/// Legal destinations for the piece on `origin` when `player` is to move.
///
/// Returns an empty set when there is no origin, the origin is empty, or the
/// piece belongs to the other side. Captures are mandatory: whenever this
/// piece can capture, only capture landings are returned. With
/// `captures_only` set (continuing a chain) slides are never returned.
pub fn legal_moves(board: &Board, origin: Option<usize>, player: Color, captures_only: bool) -> SquareSet {
    let Some(origin) = origin else {
        return SquareSet::new();
    };
    let piece = match board.cell(origin) {
        Cell::Occupied(piece) if piece.color == player => piece,
        _ => return SquareSet::new(),
    };

    let (slides, captures) = match piece.rank {
        Rank::Man => man_moves(board, origin, player),
        Rank::King => king_moves(board, origin, player),
    };

    if captures_only || !captures.is_empty() {
        captures
    } else {
        slides
    }
}

/// True if the piece on `origin` has at least one capture available.
pub fn has_capture(board: &Board, origin: usize, player: Color) -> bool {
    !legal_moves(board, Some(origin), player, true).is_empty()
}

/// Slides one step forward; captures by jumping an adjacent opponent in any
/// of the four directions onto the empty cell right behind it.
fn man_moves(board: &Board, origin: usize, player: Color) -> (SquareSet, SquareSet) {
    let mut slides = SquareSet::new();
    let mut captures = SquareSet::new();

    for (dir, ray) in RAY_TABLES.rays[origin].iter().enumerate() {
        if let Some(&step) = ray.first() {
            if DIRECTIONS[dir].0 == player.forward() && board.cell(step).is_empty() {
                slides.insert(step);
            }
        }
        if let &[over, landing, ..] = ray.as_slice() {
            if board.cell(over).belongs_to(player.opponent()) && board.cell(landing).is_empty() {
                captures.insert(landing);
            }
        }
    }

    (slides, captures)
}

/// Slides any distance over empty cells. Captures the first opponent on a ray
/// only if the cell directly behind it is empty; that cell is the sole landing.
fn king_moves(board: &Board, origin: usize, player: Color) -> (SquareSet, SquareSet) {
    let mut slides = SquareSet::new();
    let mut captures = SquareSet::new();

    for ray in &RAY_TABLES.rays[origin] {
        let mut opponent_seen = false;
        for &sq in ray {
            let cell = board.cell(sq);
            if cell.is_empty() {
                if opponent_seen {
                    captures.insert(sq);
                    break;
                }
                slides.insert(sq);
            } else if cell.belongs_to(player) || opponent_seen {
                // Own piece, or a second piece straight after the opponent.
                break;
            } else {
                opponent_seen = true;
            }
        }
    }

    (slides, captures)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::Piece;
    use crate::coords::index_of;

    fn set(squares: &[(usize, usize)]) -> SquareSet {
        squares.iter().map(|&(r, c)| index_of(r, c)).collect()
    }

    #[test]
    fn test_ray_tables() {
        let rays = &RAY_TABLES.rays[index_of(0, 1)];
        assert!(rays[0].is_empty());
        assert!(rays[1].is_empty());
        assert_eq!(rays[2], vec![index_of(1, 0)]);
        assert_eq!(rays[3].len(), 6);
        assert_eq!(rays[3][0], index_of(1, 2));
        assert_eq!(rays[3][5], index_of(6, 7));
    }

    #[test]
    fn test_no_origin_or_wrong_owner() {
        let board = Board::initial();
        assert!(legal_moves(&board, None, Color::Dark, false).is_empty());
        assert!(legal_moves(&board, Some(index_of(3, 2)), Color::Dark, false).is_empty());
        assert!(legal_moves(&board, Some(index_of(5, 0)), Color::Dark, false).is_empty());
    }

    #[test]
    fn test_man_forward_steps() {
        let board = Board::initial();
        assert_eq!(
            legal_moves(&board, Some(index_of(2, 3)), Color::Dark, false),
            set(&[(3, 2), (3, 4)])
        );
        assert_eq!(
            legal_moves(&board, Some(index_of(5, 0)), Color::Light, false),
            set(&[(4, 1)])
        );
        // Back rows are blocked by their own side.
        assert!(legal_moves(&board, Some(index_of(1, 2)), Color::Dark, false).is_empty());
    }

    #[test]
    fn test_man_never_slides_backward() {
        let board = Board::empty().with_cell(index_of(4, 3), Piece::DARK_MAN);
        assert_eq!(
            legal_moves(&board, Some(index_of(4, 3)), Color::Dark, false),
            set(&[(5, 2), (5, 4)])
        );
    }

    #[test]
    fn test_man_capture_is_mandatory() {
        let board = Board::empty()
            .with_cell(index_of(2, 3), Piece::DARK_MAN)
            .with_cell(index_of(3, 4), Piece::LIGHT_MAN);
        assert_eq!(
            legal_moves(&board, Some(index_of(2, 3)), Color::Dark, false),
            set(&[(4, 5)])
        );
    }

    #[test]
    fn test_man_captures_backward() {
        let board = Board::empty()
            .with_cell(index_of(4, 3), Piece::DARK_MAN)
            .with_cell(index_of(3, 2), Piece::LIGHT_KING);
        assert_eq!(
            legal_moves(&board, Some(index_of(4, 3)), Color::Dark, false),
            set(&[(2, 1)])
        );
    }

    #[test]
    fn test_man_capture_needs_empty_landing() {
        let board = Board::empty()
            .with_cell(index_of(2, 3), Piece::DARK_MAN)
            .with_cell(index_of(3, 4), Piece::LIGHT_MAN)
            .with_cell(index_of(4, 5), Piece::LIGHT_MAN);
        assert_eq!(
            legal_moves(&board, Some(index_of(2, 3)), Color::Dark, false),
            set(&[(3, 2)])
        );
        // Own pieces are never jumped.
        let board = Board::empty()
            .with_cell(index_of(2, 3), Piece::DARK_MAN)
            .with_cell(index_of(3, 4), Piece::DARK_MAN);
        assert_eq!(
            legal_moves(&board, Some(index_of(2, 3)), Color::Dark, true),
            SquareSet::new()
        );
    }

    #[test]
    fn test_captures_only_drops_slides() {
        let board = Board::empty().with_cell(index_of(2, 3), Piece::DARK_MAN);
        assert!(legal_moves(&board, Some(index_of(2, 3)), Color::Dark, true).is_empty());
        assert!(!has_capture(&board, index_of(2, 3), Color::Dark));
    }

    #[test]
    fn test_king_slides_until_blocked() {
        let board = Board::empty()
            .with_cell(index_of(3, 2), Piece::DARK_KING)
            .with_cell(index_of(5, 4), Piece::DARK_MAN);
        assert_eq!(
            legal_moves(&board, Some(index_of(3, 2)), Color::Dark, false),
            set(&[
                (2, 1), (1, 0),
                (2, 3), (1, 4), (0, 5),
                (4, 1), (5, 0),
                (4, 3),
            ])
        );
    }

    #[test]
    fn test_king_capture_lands_directly_behind() {
        let board = Board::empty()
            .with_cell(index_of(0, 1), Piece::LIGHT_KING)
            .with_cell(index_of(3, 4), Piece::DARK_MAN);
        assert_eq!(
            legal_moves(&board, Some(index_of(0, 1)), Color::Light, false),
            set(&[(4, 5)])
        );
    }

    #[test]
    fn test_king_two_opponents_in_a_row_block_capture() {
        let board = Board::empty()
            .with_cell(index_of(1, 1), Piece::DARK_KING)
            .with_cell(index_of(2, 2), Piece::LIGHT_MAN)
            .with_cell(index_of(3, 3), Piece::LIGHT_MAN);
        assert_eq!(
            legal_moves(&board, Some(index_of(1, 1)), Color::Dark, false),
            set(&[(0, 0), (0, 2), (2, 0)])
        );
    }

    #[test]
    fn test_king_own_piece_behind_opponent_blocks_capture() {
        let board = Board::empty()
            .with_cell(index_of(1, 1), Piece::DARK_KING)
            .with_cell(index_of(2, 2), Piece::LIGHT_MAN)
            .with_cell(index_of(3, 3), Piece::DARK_MAN);
        assert!(!has_capture(&board, index_of(1, 1), Color::Dark));
        let targets = legal_moves(&board, Some(index_of(1, 1)), Color::Dark, false);
        assert_eq!(targets, set(&[(0, 0), (0, 2), (2, 0)]));
        assert!(!targets.contains(index_of(2, 2)));
        assert!(!targets.contains(index_of(4, 4)));
    }

    #[test]
    fn test_king_capture_blocked_at_edge() {
        let board = Board::empty()
            .with_cell(index_of(5, 2), Piece::DARK_KING)
            .with_cell(index_of(7, 4), Piece::LIGHT_MAN);
        assert!(!has_capture(&board, index_of(5, 2), Color::Dark));
        assert!(legal_moves(&board, Some(index_of(5, 2)), Color::Dark, false).contains(index_of(6, 3)));
    }
}
