//! Towers (Poker Nim).
//!
//! Each side has one marker per column of an 8x8 board. A move slides one of
//! the mover's markers up or down its column, never onto or past another
//! marker. The side left without a move loses.
//!
//! The computer plays the Nim-sum strategy from `crate::strategy`.

mod game;

pub use game::{TowersBuilder, TowersGame, TowersState};
