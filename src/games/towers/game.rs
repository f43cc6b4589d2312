//! Towers game implementation.

use log::debug;

use crate::core::{Board, GameConfig, GameRng, GameState, Move, Result, Side, Strategy};
use crate::rules::RulesEngine;
use crate::strategy::{all_moves, choose_move, has_any_move, random_move, validate_move};

/// State type of a Towers game.
pub type TowersState = GameState<Board, Move>;

/// Towers game rules.
#[derive(Clone, Debug)]
pub struct TowersGame {
    config: GameConfig,
}

/// Builder for a Towers game and its initial state.
///
/// Without an explicit board the setup is random, drawn from the game RNG.
#[derive(Clone, Debug, Default)]
pub struct TowersBuilder {
    config: GameConfig,
    board: Option<Board>,
}

impl TowersBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn config(mut self, config: GameConfig) -> Self {
        self.config = config;
        self
    }

    /// Start from a given board instead of a random one.
    pub fn board(mut self, board: Board) -> Self {
        self.board = Some(board);
        self
    }

    /// Build the game and initial state. Green moves first.
    pub fn build(self) -> (TowersGame, TowersState) {
        let mut rng = GameRng::new(self.config.seed);
        let board = match self.board {
            Some(board) => board,
            None => Board::random(&mut rng),
        };
        debug!(
            "towers setup: nim-sum {}, human plays {}",
            board.nim_sum(),
            self.config.human_side
        );

        let game = TowersGame { config: self.config };
        (game, GameState::new(board, rng))
    }
}

impl TowersGame {
    /// Get the configuration.
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Check whether the computer plays the side to move.
    pub fn is_computer_turn(&self, state: &TowersState) -> bool {
        state.to_move == self.config.computer_side()
    }
}

impl RulesEngine for TowersGame {
    type Position = Board;
    type Move = Move;

    fn legal_moves(&self, board: &Board, side: Side) -> Vec<Move> {
        all_moves(board, side)
    }

    fn apply_move(&self, board: &mut Board, side: Side, mv: Move) -> Result<()> {
        validate_move(board, side, mv)?;
        board.set_row(side, mv.column, mv.row)
    }

    fn computer_move(&self, state: &mut TowersState) -> Option<Move> {
        let mover = state.to_move;
        match self.config.strategy {
            Strategy::Optimal => choose_move(&state.position, mover, &mut state.rng),
            Strategy::Random => random_move(&state.position, mover, &mut state.rng),
        }
    }

    fn has_legal_move(&self, board: &Board, side: Side) -> bool {
        has_any_move(board, side)
    }
}
