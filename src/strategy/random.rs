//! Uniformly random legal move.

use log::trace;

use super::movegen::all_moves;
use crate::core::{Board, GameRng, Move, Side};

/// Pick a legal move for `mover` uniformly at random.
///
/// The draw is flat over every (column, row) pair of every column, so a
/// column with more reachable rows is proportionally more likely to be
/// chosen. Returns `None` when `mover` has no legal move, which loses.
pub fn random_move(board: &Board, mover: Side, rng: &mut GameRng) -> Option<Move> {
    let candidates = all_moves(board, mover);
    trace!("{mover}: {} random move candidates", candidates.len());
    rng.choose(&candidates).copied()
}
