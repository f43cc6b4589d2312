//! Restricted knight game.
//!
//! Both sides move one shared knight that may only jump two columns left and
//! one row up, or one column left and two rows up. The side that cannot jump
//! loses.

mod game;

pub use game::{is_losing_square, knight_targets, winning_jump, KnightBuilder, KnightGame, KnightState};
