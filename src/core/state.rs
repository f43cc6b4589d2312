//! Game state shared by both games.
//!
//! ## GameState
//!
//! - Position (a Towers `Board` or the knight's `Square`)
//! - Side to move and half-move counter
//! - Move history
//! - RNG for every random decision of the game
//!
//! ## GameSnapshot
//!
//! Serializable capture of a `GameState`, including the RNG position, so a
//! restored game continues with exactly the same random stream.

use im::Vector;
use serde::{Deserialize, Serialize};

use super::action::MoveRecord;
use super::player::Side;
use super::rng::{GameRng, GameRngState};

/// Complete state of a game in progress.
///
/// History uses an `im` persistent vector so cloning a state is O(1).
#[derive(Clone, Debug)]
pub struct GameState<P, M: Clone> {
    /// Current position.
    pub position: P,

    /// Side whose turn it is.
    pub to_move: Side,

    /// Half-moves played so far.
    pub ply: u32,

    /// Moves played, oldest first.
    pub history: Vector<MoveRecord<M>>,

    /// RNG for setup and computer moves.
    pub rng: GameRng,
}

impl<P, M: Clone> GameState<P, M> {
    /// Create a state at `position` with Green to move.
    #[must_use]
    pub fn new(position: P, rng: GameRng) -> Self {
        Self {
            position,
            to_move: Side::FIRST,
            ply: 0,
            history: Vector::new(),
            rng,
        }
    }

    /// Record a move by the side to move and pass the turn.
    ///
    /// The position must already reflect the move.
    pub fn record(&mut self, mv: M) {
        self.ply += 1;
        self.history.push_back(MoveRecord::new(self.to_move, mv, self.ply));
        self.to_move = self.to_move.opponent();
    }

    /// Most recent move, if any.
    #[must_use]
    pub fn last_move(&self) -> Option<&MoveRecord<M>> {
        self.history.last()
    }

    /// Clone for a what-if line. The clone's RNG is a fork, so drawing from
    /// it leaves this state's random stream untouched.
    #[must_use]
    pub fn branch(&mut self) -> Self
    where
        P: Clone,
    {
        Self {
            position: self.position.clone(),
            to_move: self.to_move,
            ply: self.ply,
            history: self.history.clone(),
            rng: self.rng.fork(),
        }
    }

    /// Capture the state for serialization.
    #[must_use]
    pub fn snapshot(&self) -> GameSnapshot<P, M>
    where
        P: Clone,
    {
        GameSnapshot {
            position: self.position.clone(),
            to_move: self.to_move,
            ply: self.ply,
            history: self.history.iter().cloned().collect(),
            rng: self.rng.state(),
        }
    }

    /// Rebuild a state from a snapshot.
    #[must_use]
    pub fn restore(snapshot: GameSnapshot<P, M>) -> Self {
        Self {
            position: snapshot.position,
            to_move: snapshot.to_move,
            ply: snapshot.ply,
            history: snapshot.history.into_iter().collect(),
            rng: GameRng::from_state(&snapshot.rng),
        }
    }
}

/// Serializable capture of a `GameState`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSnapshot<P, M> {
    pub position: P,
    pub to_move: Side,
    pub ply: u32,
    pub history: Vec<MoveRecord<M>>,
    pub rng: GameRngState,
}
