//! Game rules for the mobility game.
//!
//! Pure functions over a [`Board`](super::Board): move generation and the
//! checks a proposed move must pass. Kept apart from board storage so the
//! turn engine, the computer and the evaluator share one definition.

pub mod legality;
pub mod movegen;

pub use legality::{check_move, check_piece, is_chosen_position_valid, is_legal_move};
pub use movegen::{count_valid_moves, positions_of, valid_moves_for, valid_moves_from};
