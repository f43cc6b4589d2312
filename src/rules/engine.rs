//! Rules engine trait for the game implementations.
//!
//! Games implement `RulesEngine` to define their rules:
//! - What moves are legal
//! - How a move changes the position
//! - How the computer picks a move
//!
//! Turn order, history and the game-over check are shared and live in the
//! provided methods.

use log::info;

use crate::core::{GameError, GameState, Result, Side};

/// Result of a finished game. A side that cannot move loses; there are no
/// draws.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GameResult {
    /// The side that made the last move.
    pub winner: Side,
}

impl GameResult {
    #[must_use]
    pub const fn new(winner: Side) -> Self {
        Self { winner }
    }

    /// The side left without a move.
    #[must_use]
    pub const fn loser(&self) -> Side {
        self.winner.opponent()
    }

    /// Check if a side won.
    #[must_use]
    pub fn is_winner(&self, side: Side) -> bool {
        self.winner == side
    }
}

/// Rules engine trait.
///
/// ## Implementation Notes
///
/// - `legal_moves`: return empty if the side can't move
/// - `apply_move`: validate first, leave the position untouched on error
/// - `computer_move`: draw randomness only from `state.rng`
pub trait RulesEngine {
    /// Position type (board state).
    type Position: Clone;

    /// Move type.
    type Move: Copy + Eq + std::fmt::Debug + std::fmt::Display;

    /// All legal moves for `side`.
    fn legal_moves(&self, position: &Self::Position, side: Side) -> Vec<Self::Move>;

    /// Validate and apply a move for `side`.
    fn apply_move(&self, position: &mut Self::Position, side: Side, mv: Self::Move) -> Result<()>;

    /// Move the computer would play for the side to move, or `None` if that
    /// side cannot move.
    fn computer_move(&self, state: &mut GameState<Self::Position, Self::Move>) -> Option<Self::Move>;

    // === Provided Methods ===

    /// Check whether `side` has any legal move.
    fn has_legal_move(&self, position: &Self::Position, side: Side) -> bool {
        !self.legal_moves(position, side).is_empty()
    }

    /// Check if the game is over.
    ///
    /// Returns `Some(result)` when the side to move is stuck, `None` if the
    /// game continues.
    fn is_terminal(&self, state: &GameState<Self::Position, Self::Move>) -> Option<GameResult> {
        if self.has_legal_move(&state.position, state.to_move) {
            None
        } else {
            Some(GameResult::new(state.to_move.opponent()))
        }
    }

    /// Play one half-move for the side to move.
    ///
    /// Applies and records the move, passes the turn, then checks whether
    /// the next side can move. Returns the result if that side is stuck.
    fn play(
        &self,
        state: &mut GameState<Self::Position, Self::Move>,
        mv: Self::Move,
    ) -> Result<Option<GameResult>> {
        if self.is_terminal(state).is_some() {
            return Err(GameError::GameOver);
        }

        self.apply_move(&mut state.position, state.to_move, mv)?;
        state.record(mv);

        let result = self.is_terminal(state);
        if let Some(result) = result {
            info!(
                "{} has no move after ply {}, {} wins",
                result.loser(),
                state.ply,
                result.winner
            );
        }
        Ok(result)
    }

    /// Let the computer play the side to move.
    ///
    /// Returns the move played (`None` if the side to move was already
    /// stuck) and the result if the game is now over.
    fn play_computer(
        &self,
        state: &mut GameState<Self::Position, Self::Move>,
    ) -> Result<(Option<Self::Move>, Option<GameResult>)> {
        match self.computer_move(state) {
            Some(mv) => {
                let result = self.play(state, mv)?;
                Ok((Some(mv), result))
            }
            None => Ok((None, self.is_terminal(state))),
        }
    }
}
