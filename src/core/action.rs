//! Moves and move history.
//!
//! A Towers move names the column and the row the mover's marker goes to.
//! The marker never changes column, so the column also identifies which
//! marker moves. Moves share the `<column><row>` text form with squares.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use super::board::{Column, Row, Square};
use super::error::GameError;
use super::player::Side;

/// A Towers move: put the mover's marker of `column` on `row`.
///
/// ```
/// use poker_nim::core::{Column, Move};
///
/// let mv: Move = "c5".parse().unwrap();
/// assert_eq!(mv.column, Column::C);
/// assert_eq!(mv.row.get(), 5);
/// assert_eq!(mv.to_string(), "c5");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Move {
    pub column: Column,
    pub row: Row,
}

impl Move {
    #[must_use]
    pub const fn new(column: Column, row: Row) -> Self {
        Self { column, row }
    }

    /// Destination square.
    #[must_use]
    pub const fn target(self) -> Square {
        Square::new(self.column, self.row)
    }
}

impl From<Square> for Move {
    fn from(square: Square) -> Self {
        Move::new(square.column, square.row)
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.target())
    }
}

impl FromStr for Move {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse::<Square>().map(Move::from)
    }
}

/// A played move with metadata, for history and replay.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveRecord<M> {
    /// The side that moved.
    pub side: Side,

    /// The move played.
    pub mv: M,

    /// Half-move number, starting at 1.
    pub ply: u32,
}

impl<M> MoveRecord<M> {
    #[must_use]
    pub fn new(side: Side, mv: M, ply: u32) -> Self {
        Self { side, mv, ply }
    }
}
