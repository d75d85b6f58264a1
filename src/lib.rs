//! XO Mobility library - a sliding-piece board game against the computer
//!
//! Two players scatter pieces on a square board (7x7 by default) and take
//! turns sliding one piece to an empty orthogonal neighbour. The game ends
//! when the player to move is stuck, who then loses, or when the turn limit
//! runs out, after which the more mobile player wins.
//!
//! # Architecture
//!
//! - **Games**: board model, move generation, legality checks, heuristic,
//!   computer strategy and the turn engine
//! - **Console**: setup prompts, human input, rendering and orchestration
//! - **Settings**: TOML settings file and validated game configuration
//!
//! # Example
//!
//! ```
//! use xo_mobility::{Board, Position, valid_moves_from};
//!
//! let board = Board::from_rows(&["X..", "...", "..O"]).unwrap();
//! let moves = valid_moves_from(&board, Position::new(0, 0));
//! assert_eq!(moves, vec![Position::new(1, 0), Position::new(0, 1)]);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod console;
mod games;
mod settings;

// Crate-level exports - Game types
pub use games::mobility::{
    Axis, Board, BoardError, Controller, Evaluation, Game, GameResult, GameStatus, MAX_SIDE,
    Mobility, Move, MoveError, PieceError, Player, Position, PositionError, Roster, SIDE, Square,
    Symbol, Termination, TurnStart, choose_move, score,
};

// Crate-level exports - Rules
pub use games::mobility::rules::{
    check_move, check_piece, count_valid_moves, is_chosen_position_valid, is_legal_move,
    positions_of, valid_moves_for, valid_moves_from,
};

// Crate-level exports - Console front-end
pub use console::{
    ComputerPlayer, Console, HumanPlayer, Orchestrator, Participant, TITLE, Terminal, ask_pieces,
    ask_symbol, ask_turns, play,
};

// Crate-level exports - Settings
pub use settings::{
    ConfigError, GameConfig, GameSettings, SetupError, check_pieces, check_turns, parse_pieces,
    parse_symbol, parse_turns,
};
