//! # poker-nim
//!
//! Rules engines for two small two-player board games, with a computer
//! opponent for each.
//!
//! ## Towers (Poker Nim)
//!
//! Each side has one marker per column of an 8x8 board and slides them
//! vertically. Treating the empty cells between a column's two markers as a
//! Nim heap, the computer plays the move that leaves a zero nim-sum whenever
//! one exists, and a uniformly random legal move otherwise.
//!
//! ## Restricted knight
//!
//! One shared knight that can only jump toward `a1`. The side that cannot
//! jump loses.
//!
//! ## Design
//!
//! - **Plain values**: boards and states are passed explicitly; engine
//!   functions keep no state between calls.
//! - **Deterministic**: every random draw comes from a seeded `GameRng`, so
//!   games replay exactly.
//! - **No I/O**: rendering, prompts and input loops belong to the front end.
//!
//! ## Modules
//!
//! - `core`: sides, board coordinates, moves, state, RNG, config, errors
//! - `strategy`: Towers move generation and the Nim-sum computer player
//! - `rules`: `RulesEngine` trait, turn order and loss detection
//! - `games`: Towers and knight game implementations

pub mod core;
pub mod strategy;
pub mod rules;
pub mod games;

// Re-export commonly used types
pub use crate::core::{
    Side, SideMap,
    Board, Column, Row, Square,
    Move, MoveRecord,
    GameRng, GameRngState,
    GameConfig, Strategy,
    GameState, GameSnapshot,
    GameError, MoveRejection,
};

pub use crate::strategy::{choose_move, forced_move, legal_targets, random_move, validate_move};

pub use crate::rules::{GameResult, RulesEngine};

pub use crate::games::knight::{KnightBuilder, KnightGame};
pub use crate::games::towers::{TowersBuilder, TowersGame};
