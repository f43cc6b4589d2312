//! Towers move generation and move validation.
//!
//! A marker slides vertically inside its column and stops before the first
//! marker (of either side) in its direction of travel. Every caller that
//! needs reachable rows (human-move validation, the random fallback, the
//! game-over check) goes through `legal_targets`.

use smallvec::SmallVec;

use crate::core::{Board, Column, GameError, Move, MoveRejection, Result, Row, Side};

/// Reachable rows of one column; at most 7 on an 8-row board.
pub type Targets = SmallVec<[Row; 7]>;

/// Rows reachable from `current_row` in `column`.
///
/// Upward rows come first, nearest first, then downward rows, nearest first.
/// A scan stops before the first occupied row, so occupied rows and rows
/// beyond a marker never appear.
///
/// `current_row` must be the mover's stored row in `column`.
///
/// ```
/// use poker_nim::core::{Board, Column, Row};
/// use poker_nim::strategy::legal_targets;
///
/// // Column c: Green on 3, Red on 6.
/// let board = Board::new([1, 1, 3, 1, 1, 1, 1, 1], [8, 8, 6, 8, 8, 8, 8, 8]).unwrap();
/// let rows: Vec<u8> = legal_targets(Column::C, Row::new(3).unwrap(), &board)
///     .into_iter()
///     .map(Row::get)
///     .collect();
///
/// assert_eq!(rows, vec![2, 1, 4, 5]);
/// ```
#[must_use]
pub fn legal_targets(column: Column, current_row: Row, board: &Board) -> Targets {
    let mut targets = Targets::new();
    for step in [-1i8, 1] {
        let mut row = current_row.offset(step);
        while let Some(r) = row {
            if board.is_occupied(column, r) {
                break;
            }
            targets.push(r);
            row = r.offset(step);
        }
    }
    targets
}

/// `legal_targets` for a side's own marker in `column`.
#[must_use]
pub fn side_targets(board: &Board, side: Side, column: Column) -> Targets {
    legal_targets(column, board.row(side, column), board)
}

/// Every legal move of `side`, columns in ascending order.
#[must_use]
pub fn all_moves(board: &Board, side: Side) -> Vec<Move> {
    Column::ALL
        .into_iter()
        .flat_map(|column| {
            side_targets(board, side, column)
                .into_iter()
                .map(move |row| Move::new(column, row))
        })
        .collect()
}

/// Check whether `side` has at least one legal move.
#[must_use]
pub fn has_any_move(board: &Board, side: Side) -> bool {
    Column::ALL
        .into_iter()
        .any(|column| !side_targets(board, side, column).is_empty())
}

/// Check a requested move for `side`, explaining a refusal.
pub fn validate_move(board: &Board, side: Side, mv: Move) -> Result<()> {
    let reject = |reason| GameError::InvalidMoveRequest { side, target: mv, reason };

    let current = board.row(side, mv.column);
    if mv.row == current {
        return Err(reject(MoveRejection::SameRow));
    }
    if board.is_occupied(mv.column, mv.row) {
        return Err(reject(MoveRejection::Occupied));
    }
    if !side_targets(board, side, mv.column).contains(&mv.row) {
        return Err(reject(MoveRejection::Blocked));
    }
    Ok(())
}
