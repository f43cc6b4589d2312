//! Core types: sides, board coordinates, moves, state, RNG, configuration
//! and errors.
//!
//! Everything here is plain data. Rules live in `strategy`, `rules` and
//! `games`.

pub mod player;
pub mod board;
pub mod action;
pub mod rng;
pub mod config;
pub mod state;
pub mod error;

pub use player::{Side, SideMap};
pub use board::{Board, Column, Row, Square, BOARD_SIZE};
pub use action::{Move, MoveRecord};
pub use rng::{GameRng, GameRngState};
pub use config::{GameConfig, Strategy};
pub use state::{GameSnapshot, GameState};
pub use error::{GameError, MoveRejection, Result};
