//! The turn and capture-chain state machine.
//!
//! A [`GameState`] is a value: every transition returns a new state and
//! leaves the old one as it was. Illegal input (wrong-color selection, a
//! destination that is not legal, trying to leave a capture chain) is not an
//! error; the transition simply returns the state unchanged.

use crate::bitboard::SquareSet;
use crate::board::Board;
use crate::constants::{Color, SQUARE_COUNT};
use crate::coords::square_name;
use crate::executor::make_move;
use crate::move_gen::{has_capture, legal_moves};
use crate::outcome;
use crate::r#move::Move;
use tracing::trace;

/// What the active player has picked so far this turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Selection {
    /// Nothing chosen, any own piece may be selected.
    #[default]
    Idle,
    /// An own piece is chosen; its normal legal moves apply.
    Selected(usize),
    /// The piece on this square just captured and must capture again.
    Chaining(usize),
}

impl Selection {
    /// The chosen square, whether merely selected or forced by a chain.
    pub fn origin(self) -> Option<usize> {
        match self {
            Selection::Idle => None,
            Selection::Selected(origin) | Selection::Chaining(origin) => Some(origin),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GameState {
    board: Board,
    active_player: Color,
    selection: Selection,
}

impl GameState {
    /// The standard starting position with Dark to move.
    pub fn new() -> Self {
        Self::from_board(Board::initial(), Color::Dark)
    }

    pub fn from_board(board: Board, active_player: Color) -> Self {
        Self {
            board,
            active_player,
            selection: Selection::Idle,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn active_player(&self) -> Color {
        self.active_player
    }

    pub fn selection(&self) -> Selection {
        self.selection
    }

    /// The square a capture chain must continue from, if one is in progress.
    pub fn chain_origin(&self) -> Option<usize> {
        match self.selection {
            Selection::Chaining(origin) => Some(origin),
            _ => None,
        }
    }

    pub fn winner(&self) -> Option<Color> {
        outcome::winner(&self.board)
    }

    /// Destinations the current selection may move to.
    pub fn legal_targets(&self) -> SquareSet {
        match self.selection {
            Selection::Idle => SquareSet::new(),
            Selection::Selected(origin) => legal_moves(&self.board, Some(origin), self.active_player, false),
            Selection::Chaining(origin) => legal_moves(&self.board, Some(origin), self.active_player, true),
        }
    }

    /// Own pieces that have at least one legal move. While chaining this is
    /// only the chain origin.
    pub fn movable_origins(&self) -> SquareSet {
        if self.winner().is_some() {
            return SquareSet::new();
        }
        match self.selection {
            Selection::Chaining(origin) => [origin].into_iter().collect(),
            _ => self
                .board
                .pieces_of(self.active_player)
                .iter()
                .filter(|&sq| !legal_moves(&self.board, Some(sq), self.active_player, false).is_empty())
                .collect(),
        }
    }

    /// Selects the piece on `index`.
    ///
    /// Picking one of the active player's pieces selects it; anything else
    /// clears the selection. During a chain, or once the game is won, the
    /// state is returned unchanged.
    pub fn select_origin(&self, index: usize) -> GameState {
        if self.winner().is_some() {
            trace!(square = index, "selection ignored, game is over");
            return *self;
        }
        if let Selection::Chaining(origin) = self.selection {
            if index != origin {
                trace!(square = index, chain = %square_name(origin), "selection ignored, chain in progress");
            }
            return *self;
        }

        let own = index < SQUARE_COUNT && self.board.cell(index).belongs_to(self.active_player);
        GameState {
            selection: if own { Selection::Selected(index) } else { Selection::Idle },
            ..*self
        }
    }

    /// Moves the selected piece to `index`, returning the state unchanged if
    /// that is not a legal destination.
    pub fn attempt_move(&self, index: usize) -> GameState {
        self.try_move(index).map_or(*self, |(next, _)| next)
    }

    /// Same transition as [`GameState::attempt_move`], also reporting the
    /// executed move. Returns `None` when the input was rejected.
    ///
    /// After a capture, if the moved piece (promoted or not) can capture
    /// again, the same player stays on move in [`Selection::Chaining`].
    /// Otherwise the turn passes to the opponent.
    pub fn try_move(&self, index: usize) -> Option<(GameState, Move)> {
        if self.winner().is_some() {
            trace!(square = index, "move ignored, game is over");
            return None;
        }
        let (origin, captures_only) = match self.selection {
            Selection::Idle => return None,
            Selection::Selected(origin) => (origin, false),
            Selection::Chaining(origin) => (origin, true),
        };
        if !legal_moves(&self.board, Some(origin), self.active_player, captures_only).contains(index) {
            trace!(from = %square_name(origin), square = index, "illegal destination");
            return None;
        }

        let (board, mv) = make_move(&self.board, origin, index);
        let next = if mv.is_capture() && has_capture(&board, index, self.active_player) {
            GameState {
                board,
                active_player: self.active_player,
                selection: Selection::Chaining(index),
            }
        } else {
            GameState::from_board(board, self.active_player.opponent())
        };
        Some((next, mv))
    }
}

impl Default for GameState {
    fn default() -> Self {
        GameState::new()
    }
}
