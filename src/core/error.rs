//! Error types shared by the board, the move generator and the games.
//!
//! "No move available" is not an error: engine functions return `None` for
//! it. Errors here mean the caller asked for something the rules forbid.

use thiserror::Error;

use super::action::Move;
use super::board::{Column, Row};
use super::player::Side;

/// Why a requested move was refused.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum MoveRejection {
    /// The target is the marker's current row.
    #[error("the marker is already on that row")]
    SameRow,
    /// The target holds a marker.
    #[error("the target square is occupied")]
    Occupied,
    /// A marker sits strictly between the current and the target row.
    #[error("another marker blocks the way")]
    Blocked,
    /// The target is not one of the piece's movement squares.
    #[error("the piece cannot reach that square")]
    Unreachable,
}

/// Errors raised by the rules engines.
#[derive(Debug, Error)]
pub enum GameError {
    #[error("row {0} is out of range (1-8)")]
    RowOutOfRange(u8),

    #[error("invalid column label '{0}' (expected a-h)")]
    InvalidColumn(char),

    #[error("invalid square '{0}' (expected <column a-h><row 1-8>, e.g. c3)")]
    ParseSquare(String),

    #[error("both markers of column {column} are on row {row}")]
    SharedCell { column: Column, row: Row },

    #[error("{side} lists column {column} more than once")]
    DuplicateColumn { side: Side, column: Column },

    #[error("{side} has no marker in column {column}")]
    MissingColumn { side: Side, column: Column },

    #[error("invalid move request for {side} to {target}: {reason}")]
    InvalidMoveRequest {
        side: Side,
        target: Move,
        reason: MoveRejection,
    },

    #[error("the game is already over")]
    GameOver,

    #[error("invalid configuration: {0}")]
    Config(#[from] serde_json::Error),
}

/// Result alias used across the crate.
pub type Result<T> = std::result::Result<T, GameError>;
