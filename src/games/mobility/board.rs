//! Square grid of optional piece ownership.

use super::position::Position;
use super::types::{Player, Square};
use rand::Rng;
use tracing::{debug, instrument};

/// Default number of squares along one side.
pub const SIDE: usize = 7;

/// Largest supported side: columns are written as a single digit.
pub const MAX_SIDE: usize = 10;

/// Errors raised by board construction and mutation.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum BoardError {
    /// Position is not on the board.
    #[display("Position {_0} is off the board")]
    OutOfBounds(#[error(not(source))] Position),
    /// A text row had the wrong width or an unknown cell character.
    #[display("Malformed board row {_0}")]
    MalformedRow(#[error(not(source))] usize),
}

/// Square board stored in row-major order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    side: usize,
    squares: Vec<Square>,
}

impl Board {
    /// Creates an empty board with `side` squares per side.
    #[instrument]
    pub fn new(side: usize) -> Self {
        Self {
            side,
            squares: vec![Square::Empty; side * side],
        }
    }

    /// Creates a board with `pieces` pieces per player scattered at random.
    ///
    /// All of player one's pieces are placed first, then player two's; each
    /// piece retries random squares until it lands on an empty one. The caller
    /// guarantees `2 * pieces <= side * side`.
    #[instrument(skip(rng))]
    pub fn scatter(side: usize, pieces: usize, rng: &mut impl Rng) -> Self {
        let mut board = Self::new(side);
        for player in [Player::One, Player::Two] {
            let mut placed = 0;
            while placed < pieces {
                let row = rng.random_range(0..side);
                let col = rng.random_range(0..side);
                let idx = row * side + col;
                if board.squares[idx] == Square::Empty {
                    board.squares[idx] = Square::Occupied(player);
                    placed += 1;
                }
            }
        }
        debug!(side, pieces, "Pieces scattered");
        board
    }

    /// Builds a board from text rows: `X`, `O`, or `.` per square.
    ///
    /// The number of rows sets the side.
    pub fn from_rows(rows: &[&str]) -> Result<Self, BoardError> {
        let side = rows.len();
        let mut board = Self::new(side);
        for (r, line) in rows.iter().enumerate() {
            if line.chars().count() != side {
                return Err(BoardError::MalformedRow(r));
            }
            for (c, ch) in line.chars().enumerate() {
                let square = match ch.to_ascii_uppercase() {
                    'X' => Square::Occupied(Player::One),
                    'O' => Square::Occupied(Player::Two),
                    '.' | ' ' => Square::Empty,
                    _ => return Err(BoardError::MalformedRow(r)),
                };
                board.squares[r * side + c] = square;
            }
        }
        Ok(board)
    }

    /// Number of squares along one side.
    pub fn side(&self) -> usize {
        self.side
    }

    fn index(&self, pos: Position) -> Option<usize> {
        if !self.is_in_bounds(pos) {
            return None;
        }
        let row = usize::try_from(pos.row()).ok()?;
        let col = usize::try_from(pos.col()).ok()?;
        Some(row * self.side + col)
    }

    /// True if `pos` lies on the board.
    pub fn is_in_bounds(&self, pos: Position) -> bool {
        self.is_row_in_bounds(pos.row()) && self.is_col_in_bounds(pos.col())
    }

    /// True if `row` is a valid row index.
    pub fn is_row_in_bounds(&self, row: i32) -> bool {
        usize::try_from(row).is_ok_and(|r| r < self.side)
    }

    /// True if `col` is a valid column index.
    pub fn is_col_in_bounds(&self, col: i32) -> bool {
        usize::try_from(col).is_ok_and(|c| c < self.side)
    }

    /// Gets the square at `pos`, or `None` if it is off the board.
    pub fn get(&self, pos: Position) -> Option<Square> {
        self.index(pos).map(|idx| self.squares[idx])
    }

    /// Sets the square at `pos`.
    pub fn set(&mut self, pos: Position, square: Square) -> Result<(), BoardError> {
        let idx = self.index(pos).ok_or(BoardError::OutOfBounds(pos))?;
        self.squares[idx] = square;
        Ok(())
    }

    /// Checks if the square at `pos` is on the board and empty.
    pub fn is_empty(&self, pos: Position) -> bool {
        matches!(self.get(pos), Some(Square::Empty))
    }

    /// Iterates over every position in row-major order.
    pub fn positions(&self) -> impl Iterator<Item = Position> + '_ {
        let side = self.side as i32;
        (0..side).flat_map(move |row| (0..side).map(move |col| Position::new(row, col)))
    }

    /// Counts the pieces `player` has on the board.
    pub fn piece_count(&self, player: Player) -> usize {
        self.squares
            .iter()
            .filter(|s| **s == Square::Occupied(player))
            .count()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new(SIDE)
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "  ")?;
        for col in 0..self.side {
            write!(f, "{col:>2} ")?;
        }
        writeln!(f)?;
        for (row, cells) in self.squares.chunks(self.side).enumerate() {
            let letter = char::from(b'a' + row as u8);
            write!(f, "{letter:<2}")?;
            for square in cells {
                let mark = match square {
                    Square::Empty => ' ',
                    Square::Occupied(player) => player.symbol().as_char(),
                };
                write!(f, "{mark:>2} ")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
