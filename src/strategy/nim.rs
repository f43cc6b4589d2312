//! Nim-sum strategy for Towers.
//!
//! Each column is a Nim heap whose size is the column's gap. Moving a marker
//! toward the other marker of its column shrinks that heap (moving away
//! grows it, which Poker Nim allows but never needs). From a position with a
//! non-zero nim-sum the mover can always hand the opponent a zero nim-sum by
//! shrinking one heap; from a zero nim-sum no such move exists and the engine
//! plays randomly.

use log::{debug, warn};

use super::random::random_move;
use crate::core::{Board, Column, GameRng, Move, Side};

/// Best move for `mover`, or `None` when `mover` cannot move at all.
///
/// Plays the forced-win move when the nim-sum is non-zero, otherwise a
/// uniformly random legal move. Pure apart from the draws on `rng`.
///
/// ```
/// use poker_nim::core::{Board, GameRng, Side};
/// use poker_nim::strategy::choose_move;
///
/// // Only column c has a gap: Green on 2, Red on 6.
/// let board = Board::new([1, 1, 2, 1, 1, 1, 1, 1], [2, 2, 6, 2, 2, 2, 2, 2]).unwrap();
/// let mv = choose_move(&board, Side::Green, &mut GameRng::new(0)).unwrap();
///
/// assert_eq!(mv.to_string(), "c5");
/// ```
pub fn choose_move(board: &Board, mover: Side, rng: &mut GameRng) -> Option<Move> {
    let nim_sum = board.nim_sum();
    if nim_sum == 0 {
        debug!("{mover}: balanced position, playing a random move");
        return random_move(board, mover, rng);
    }

    if let Some(mv) = search_forced(board, mover, nim_sum) {
        debug!("{mover}: nim-sum {nim_sum}, forced move {mv}");
        return Some(mv);
    }

    warn!("{mover}: nim-sum {nim_sum} but no column accepts a forced move, playing a random move");
    random_move(board, mover, rng)
}

/// The forced-win move for `mover`, without any random fallback.
///
/// `None` when the position is balanced.
#[must_use]
pub fn forced_move(board: &Board, mover: Side) -> Option<Move> {
    match board.nim_sum() {
        0 => None,
        nim_sum => search_forced(board, mover, nim_sum),
    }
}

/// First column, in label order, whose gap can shrink to `gap ^ nim_sum`.
///
/// The mover slides toward the opponent's marker by the number of cells to
/// remove; a candidate that would reach or pass that marker is skipped.
fn search_forced(board: &Board, mover: Side, nim_sum: u8) -> Option<Move> {
    let opponent = mover.opponent();

    Column::ALL.into_iter().find_map(|column| {
        let gap = board.gap(column);
        let target_gap = gap ^ nim_sum;
        if target_gap >= gap {
            return None;
        }
        let remove = (gap - target_gap) as i8;

        let own = board.row(mover, column);
        let theirs = board.row(opponent, column);
        let above = own < theirs;

        let candidate = own.offset(if above { remove } else { -remove })?;
        let accepted = if above { candidate < theirs } else { candidate > theirs };
        accepted.then(|| Move::new(column, candidate))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::strategy::movegen::{all_moves, validate_move};

    fn apply(board: &Board, side: Side, mv: Move) -> Board {
        let mut next = *board;
        next.set_row(side, mv.column, mv.row).unwrap();
        next
    }

    #[test]
    fn test_single_gap_is_closed() {
        let board = Board::new([1, 1, 2, 1, 1, 1, 1, 1], [2, 2, 6, 2, 2, 2, 2, 2]).unwrap();
        assert_eq!(board.nim_sum(), 3);

        let mv = choose_move(&board, Side::Green, &mut GameRng::new(0)).unwrap();
        assert_eq!(mv, "c5".parse().unwrap());
        assert_eq!(apply(&board, Side::Green, mv).nim_sum(), 0);
    }

    #[test]
    fn test_mover_below_moves_up() {
        // Column c: Red on 6 is below Green on 2, so Red closes the gap upward.
        let board = Board::new([1, 1, 2, 1, 1, 1, 1, 1], [2, 2, 6, 2, 2, 2, 2, 2]).unwrap();
        let mv = forced_move(&board, Side::Red).unwrap();
        assert_eq!(mv, "c3".parse().unwrap());
    }

    #[test]
    fn test_partial_reduction() {
        // Gaps: a = 5 (rows 1/7), b = 3 (rows 8/4), rest 0. nim-sum 6.
        // Column a: 5 ^ 6 = 3 < 5, remove 2.
        let board = Board::new([1, 8, 1, 1, 1, 1, 1, 1], [7, 4, 2, 2, 2, 2, 2, 2]).unwrap();
        assert_eq!(board.nim_sum(), 6);

        let green = forced_move(&board, Side::Green).unwrap();
        assert_eq!(green, "a3".parse().unwrap());
        assert_eq!(apply(&board, Side::Green, green).gap(Column::A), 3);

        let red = forced_move(&board, Side::Red).unwrap();
        assert_eq!(red, "a5".parse().unwrap());
        assert_eq!(apply(&board, Side::Red, red).nim_sum(), 0);
    }

    #[test]
    fn test_first_qualifying_column_wins() {
        // Gaps a = 1, b = 2, c = 1, d = 2, e = 4: nim-sum 4.
        // Only e qualifies (4 ^ 4 = 0).
        let board = Board::new([1, 1, 1, 1, 1, 1, 1, 1], [3, 4, 3, 4, 6, 2, 2, 2]).unwrap();
        assert_eq!(board.nim_sum(), 4);
        assert_eq!(forced_move(&board, Side::Green).unwrap(), "e5".parse().unwrap());

        // Gaps a = 3, b = 3, c = 1: nim-sum 1; a qualifies first (3 ^ 1 = 2).
        let board = Board::new([1, 1, 1, 1, 1, 1, 1, 1], [5, 5, 3, 2, 2, 2, 2, 2]).unwrap();
        assert_eq!(board.nim_sum(), 1);
        assert_eq!(forced_move(&board, Side::Green).unwrap(), "a2".parse().unwrap());
    }

    #[test]
    fn test_balanced_position_plays_random() {
        // Every column has gap 2: eight equal heaps XOR to zero.
        let board = Board::new([1; 8], [4; 8]).unwrap();
        assert_eq!(board.nim_sum(), 0);
        assert_eq!(forced_move(&board, Side::Green), None);

        let legal = all_moves(&board, Side::Green);
        let mut rng = GameRng::new(11);
        let mut same_seed = GameRng::new(11);
        for _ in 0..50 {
            let mv = choose_move(&board, Side::Green, &mut rng).unwrap();
            assert!(legal.contains(&mv));
            assert_eq!(Some(mv), random_move(&board, Side::Green, &mut same_seed));
        }
    }

    #[test]
    fn test_no_move_available() {
        let board = Board::new([1; 8], [2; 8]).unwrap();
        assert_eq!(choose_move(&board, Side::Green, &mut GameRng::new(3)), None);
    }

    #[test]
    fn test_forced_move_is_legal() {
        let board = Board::new([2, 6, 1, 8, 4, 4, 7, 3], [6, 2, 8, 1, 5, 3, 1, 7]).unwrap();
        for side in Side::ALL {
            if let Some(mv) = forced_move(&board, side) {
                assert!(validate_move(&board, side, mv).is_ok());
                assert_eq!(apply(&board, side, mv).nim_sum(), 0);
            }
        }
    }
}
