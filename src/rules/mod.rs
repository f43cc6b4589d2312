//! Rules engine trait for game implementations.
//!
//! Games implement `RulesEngine` to define:
//! - Legal moves for a position
//! - How moves modify the position
//! - How the computer chooses a move
//!
//! Turn alternation, history and loss detection are provided once for all
//! games.

pub mod engine;

pub use engine::{GameResult, RulesEngine};
