//! First-class move type and the reasons a move can be refused.

use super::{BoardError, Player, Position};
use derive_new::new;
use serde::{Deserialize, Serialize};

/// A player sliding one of their pieces from `from` to `to`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, new)]
pub struct Move {
    /// The player making the move.
    pub player: Player,
    /// Square the piece leaves.
    pub from: Position,
    /// Square the piece lands on.
    pub to: Position,
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "'{}' {} -> {}", self.player, self.from, self.to)
    }
}

/// Which coordinate of a position fell off the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum Axis {
    /// The row letter.
    #[display("Row")]
    Row,
    /// The column digit.
    #[display("Column")]
    Column,
}

/// Why a destination was refused.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum MoveError {
    /// Destination equals the piece's square.
    #[display("Move cannot be same as the chosen piece position")]
    Identity,

    /// Destination is off the board.
    #[display("{_0} of move is out of bound")]
    OutOfBounds(#[error(not(source))] Axis),

    /// Destination is diagonally adjacent.
    #[display("Diagonal moves are NOT allowed")]
    Diagonal,

    /// Destination already holds a piece.
    #[display("Chosen move position {_0} is already occupied")]
    Occupied(#[error(not(source))] Position),

    /// The moving piece is not the mover's.
    #[display("{_0}")]
    Piece(PieceError),

    /// It is not this player's turn.
    #[display("It's not {_0}'s turn")]
    WrongPlayer(#[error(not(source))] Player),

    /// The game is already over.
    #[display("Game is already over")]
    GameOver,

    /// The board refused the update.
    #[display("{_0}")]
    Board(BoardError),
}

/// Why a piece cannot be picked up.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum PieceError {
    /// Position is off the board.
    #[display("Position {_0} is not on the board")]
    OffBoard(#[error(not(source))] Position),

    /// Position holds no piece of this player.
    #[display("Position {_0} does not hold one of {_1}'s pieces")]
    NotOwned(Position, Player),
}
