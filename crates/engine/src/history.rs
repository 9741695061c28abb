//! Committed positions and the game session built on top of them.

use crate::constants::Color;
use crate::game::GameState;
use crate::r#move::Move;
use std::mem;
use tracing::{debug, trace};

/// The moves one player made in a single turn; more than one for a chain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Turn {
    pub player: Color,
    pub moves: Vec<Move>,
}

impl Turn {
    /// `c3xe5xg7` for a chain, `c3-d4` for a single move.
    pub fn to_notation(&self) -> String {
        let mut out = String::new();
        for (i, mv) in self.moves.iter().enumerate() {
            if i == 0 {
                out.push_str(&mv.to_notation());
            } else {
                let last = mv.to_notation();
                // Later steps start where the previous one landed.
                out.push_str(&last[2..]);
            }
        }
        out
    }
}

/// Append-only record of committed states: the initial state plus one per
/// completed turn. Entries are never modified once pushed.
#[derive(Debug, Clone)]
pub struct History {
    snapshots: Vec<GameState>,
    turns: Vec<Turn>,
}

impl History {
    pub fn new(initial: GameState) -> Self {
        Self {
            snapshots: vec![initial],
            turns: Vec::new(),
        }
    }

    /// The most recently committed state.
    pub fn last(&self) -> &GameState {
        // Never empty: the initial state cannot be popped.
        &self.snapshots[self.snapshots.len() - 1]
    }

    pub fn snapshots(&self) -> &[GameState] {
        &self.snapshots
    }

    /// `turns()[i]` led from `snapshots()[i]` to `snapshots()[i + 1]`.
    pub fn turns(&self) -> &[Turn] {
        &self.turns
    }

    /// Number of completed turns.
    pub fn len(&self) -> usize {
        self.turns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.turns.is_empty()
    }

    fn push(&mut self, state: GameState, turn: Turn) {
        self.snapshots.push(state);
        self.turns.push(turn);
    }

    fn pop(&mut self) -> bool {
        if self.turns.pop().is_none() {
            return false;
        }
        self.snapshots.pop();
        true
    }
}

/// A game in progress: the committed history plus the live state, which may
/// be part-way through a capture chain.
#[derive(Debug, Clone)]
pub struct Game {
    history: History,
    current: GameState,
    pending: Vec<Move>,
}

impl Game {
    pub fn new() -> Self {
        Self::from_state(GameState::new())
    }

    pub fn from_state(state: GameState) -> Self {
        Self {
            history: History::new(state),
            current: state,
            pending: Vec::new(),
        }
    }

    pub fn state(&self) -> &GameState {
        &self.current
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    /// Moves already made in an unfinished capture chain.
    pub fn pending_moves(&self) -> &[Move] {
        &self.pending
    }

    pub fn winner(&self) -> Option<Color> {
        self.current.winner()
    }

    pub fn select(&mut self, index: usize) {
        self.current = self.current.select_origin(index);
    }

    /// Moves the selected piece to `index`.
    ///
    /// A capture that must be continued replaces the live state in place; a
    /// finished turn is appended to the history. Returns `None` and changes
    /// nothing if the move was not legal.
    pub fn play(&mut self, index: usize) -> Option<Move> {
        let player = self.current.active_player();
        let (next, mv) = self.current.try_move(index)?;
        self.pending.push(mv);
        self.current = next;

        if let Some(origin) = next.chain_origin() {
            debug!(player = player.name(), mv = %mv.to_notation(), origin, "capture chain continues");
        } else {
            let turn = Turn {
                player,
                moves: mem::take(&mut self.pending),
            };
            debug!(player = player.name(), turn = %turn.to_notation(), number = self.history.len() + 1, "turn committed");
            self.history.push(next, turn);
        }
        Some(mv)
    }

    /// Steps back one turn. An unfinished chain is abandoned and the position
    /// from the start of the turn restored. Returns `false` at the start.
    pub fn undo(&mut self) -> bool {
        if !self.pending.is_empty() {
            self.pending.clear();
        } else if !self.history.pop() {
            trace!("nothing to undo");
            return false;
        }
        self.current = *self.history.last();
        debug!(turns = self.history.len(), "undo");
        true
    }

    /// Discards everything and starts over from the first committed state.
    pub fn reset(&mut self) {
        let initial = self.history.snapshots()[0];
        *self = Game::from_state(initial);
    }
}

impl Default for Game {
    fn default() -> Self {
        Game::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Board;
    use crate::constants::Piece;
    use crate::coords::index_of;
    use crate::game::Selection;

    fn chain_game() -> Game {
        let board = Board::empty()
            .with_cell(index_of(2, 1), Piece::DARK_MAN)
            .with_cell(index_of(3, 2), Piece::LIGHT_MAN)
            .with_cell(index_of(5, 4), Piece::LIGHT_MAN)
            .with_cell(index_of(7, 0), Piece::LIGHT_MAN);
        Game::from_state(GameState::from_board(board, Color::Dark))
    }

    #[test]
    fn test_completed_turns_are_appended() {
        let mut game = Game::new();
        game.select(index_of(2, 1));
        let mv = game.play(index_of(3, 2)).expect("legal move");
        assert_eq!(mv.to_notation(), "b6-c5");
        assert_eq!(game.history().len(), 1);
        assert_eq!(game.history().snapshots().len(), 2);
        assert_eq!(game.state().active_player(), Color::Light);
        assert_eq!(game.history().last(), game.state());
    }

    #[test]
    fn test_rejected_move_changes_nothing() {
        let mut game = Game::new();
        game.select(index_of(2, 1));
        let before = *game.state();
        assert_eq!(game.play(index_of(5, 0)), None);
        assert_eq!(*game.state(), before);
        assert!(game.history().is_empty());
    }

    #[test]
    fn test_chain_is_not_appended_until_finished() {
        let mut game = chain_game();
        game.select(index_of(2, 1));
        game.play(index_of(4, 3)).expect("first capture");

        assert!(game.history().is_empty());
        assert_eq!(game.pending_moves().len(), 1);
        assert_eq!(game.state().selection(), Selection::Chaining(index_of(4, 3)));

        game.play(index_of(6, 5)).expect("second capture");
        assert_eq!(game.history().len(), 1);
        assert!(game.pending_moves().is_empty());
        let turn = &game.history().turns()[0];
        assert_eq!(turn.player, Color::Dark);
        assert_eq!(turn.to_notation(), "b6xd4xf2");
    }

    #[test]
    fn test_undo_abandons_chain() {
        let mut game = chain_game();
        let start = *game.state();
        game.select(index_of(2, 1));
        game.play(index_of(4, 3));

        assert!(game.undo());
        assert_eq!(*game.state(), start);
        assert!(game.pending_moves().is_empty());
        assert!(!game.undo());
    }

    #[test]
    fn test_undo_and_reset() {
        let mut game = Game::new();
        game.select(index_of(2, 1));
        game.play(index_of(3, 2));
        game.select(index_of(5, 0));
        game.play(index_of(4, 1));
        assert_eq!(game.history().len(), 2);

        assert!(game.undo());
        assert_eq!(game.state().active_player(), Color::Light);
        assert_eq!(game.history().len(), 1);

        game.reset();
        assert_eq!(*game.state(), GameState::new());
        assert!(game.history().is_empty());
    }
}
