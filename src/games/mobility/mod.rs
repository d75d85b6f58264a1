//! Sliding-piece mobility game: board, rules, heuristic and turn engine.

mod action;
mod board;
mod eval;
mod game;
mod position;
pub mod rules;
mod strategy;
mod types;

pub use action::{Axis, Move, MoveError, PieceError};
pub use board::{Board, BoardError, MAX_SIDE, SIDE};
pub use eval::{Evaluation, Mobility, score};
pub use game::{Game, GameResult, GameStatus, Termination, TurnStart};
pub use position::{Position, PositionError};
pub use strategy::choose_move;
pub use types::{Controller, Player, Roster, Square, Symbol};
