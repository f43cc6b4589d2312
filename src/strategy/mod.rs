//! Towers move generation and computer strategy.
//!
//! - `movegen`: reachable rows per column, move validation, move listing
//! - `nim`: Nim-sum forced move with random fallback
//! - `random`: flat uniform choice over all legal moves

pub mod movegen;
pub mod nim;
pub mod random;

pub use movegen::{all_moves, has_any_move, legal_targets, side_targets, validate_move, Targets};
pub use nim::{choose_move, forced_move};
pub use random::random_move;
