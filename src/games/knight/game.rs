//! Restricted knight game implementation.

use log::debug;
use smallvec::SmallVec;

use crate::core::{
    Column, GameConfig, GameError, GameRng, GameState, Move, MoveRejection, Result, Row, Side,
    Square, Strategy, BOARD_SIZE,
};
use crate::rules::RulesEngine;

/// State type of a knight game.
pub type KnightState = GameState<Square, Square>;

/// Knight jumps as (column delta, row delta). Row 1 is the top, so both
/// jumps head toward `a1`.
const JUMPS: [(i8, i8); 2] = [(-2, -1), (-1, -2)];

/// Squares the knight can jump to from `from`; at most two.
#[must_use]
pub fn knight_targets(from: Square) -> SmallVec<[Square; 2]> {
    JUMPS
        .iter()
        .filter_map(|&(dc, dr)| {
            let column = (from.column.index() as i8 + dc)
                .try_into()
                .ok()
                .and_then(Column::from_index)?;
            let row = from.row.offset(dr)?;
            Some(Square::new(column, row))
        })
        .collect()
}

/// Check whether the side to move from `square` loses against best play.
///
/// Every jump moves the knight strictly toward `a1`, so the recursion is
/// at most seven levels deep.
#[must_use]
pub fn is_losing_square(square: Square) -> bool {
    knight_targets(square)
        .into_iter()
        .all(|next| !is_losing_square(next))
}

/// A jump that leaves the opponent on a losing square, if one exists.
#[must_use]
pub fn winning_jump(from: Square) -> Option<Square> {
    knight_targets(from).into_iter().find(|&next| is_losing_square(next))
}

/// Knight game rules.
#[derive(Clone, Debug)]
pub struct KnightGame {
    config: GameConfig,
}

/// Builder for a knight game and its initial state.
///
/// Without an explicit start square the knight is placed uniformly at
/// random, drawn from the game RNG.
#[derive(Clone, Debug, Default)]
pub struct KnightBuilder {
    config: GameConfig,
    start: Option<Square>,
}

impl KnightBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn config(mut self, config: GameConfig) -> Self {
        self.config = config;
        self
    }

    /// Place the knight on a given square.
    pub fn start(mut self, square: Square) -> Self {
        self.start = Some(square);
        self
    }

    /// Build the game and initial state. Green moves first.
    pub fn build(self) -> (KnightGame, KnightState) {
        let mut rng = GameRng::new(self.config.seed);
        let start = self.start.unwrap_or_else(|| random_square(&mut rng));
        debug!("knight placed on {start}, human plays {}", self.config.human_side);

        (KnightGame { config: self.config }, GameState::new(start, rng))
    }
}

fn random_square(rng: &mut GameRng) -> Square {
    let column = Column::ALL[rng.gen_range_usize(0..BOARD_SIZE)];
    let row = Row::from_index(rng.gen_range_usize(0..BOARD_SIZE)).unwrap_or(Row::TOP);
    Square::new(column, row)
}

impl KnightGame {
    /// Get the configuration.
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Check whether the computer plays the side to move.
    pub fn is_computer_turn(&self, state: &KnightState) -> bool {
        state.to_move == self.config.computer_side()
    }
}

impl RulesEngine for KnightGame {
    type Position = Square;
    type Move = Square;

    fn legal_moves(&self, knight: &Square, _side: Side) -> Vec<Square> {
        knight_targets(*knight).into_vec()
    }

    fn apply_move(&self, knight: &mut Square, side: Side, to: Square) -> Result<()> {
        if !knight_targets(*knight).contains(&to) {
            return Err(GameError::InvalidMoveRequest {
                side,
                target: Move::from(to),
                reason: MoveRejection::Unreachable,
            });
        }
        *knight = to;
        Ok(())
    }

    fn computer_move(&self, state: &mut KnightState) -> Option<Square> {
        let targets = knight_targets(state.position);
        if self.config.strategy == Strategy::Optimal {
            if let Some(jump) = winning_jump(state.position) {
                debug!("{}: winning jump to {jump}", state.to_move);
                return Some(jump);
            }
        }
        state.rng.choose(&targets).copied()
    }
}
