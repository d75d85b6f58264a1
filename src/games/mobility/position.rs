//! Board coordinates and their two-character text form.
//!
//! A position is written `<row-letter><col-digit>`, e.g. `a0` for the top-left
//! square. Parsing only checks the shape of the text; whether the coordinates
//! fall on the board is a question for [`Board`](super::Board).

use serde::{Deserialize, Serialize};
use tracing::instrument;

/// A (row, column) coordinate, possibly off the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Position {
    row: i32,
    col: i32,
}

/// Error parsing a position from text.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum PositionError {
    /// Input was not exactly two characters.
    #[display(
        "Please enter the position in <row letter><column number> format, without angle brackets or spaces"
    )]
    WrongLength,
}

impl Position {
    /// Creates a position from row and column.
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// Row index, `0` for row `a`.
    pub fn row(&self) -> i32 {
        self.row
    }

    /// Column index.
    pub fn col(&self) -> i32 {
        self.col
    }

    /// Returns the position offset by `(dr, dc)`.
    pub fn offset(self, dr: i32, dc: i32) -> Self {
        Self::new(self.row + dr, self.col + dc)
    }

    /// True when `other` is one step away on both axes.
    pub fn is_diagonal_neighbor(&self, other: &Position) -> bool {
        (self.row - other.row).abs() == 1 && (self.col - other.col).abs() == 1
    }

    /// Parses `<row-letter><col-digit>`, case-insensitive.
    ///
    /// Surrounding whitespace is ignored. Characters outside `a..` / `0..`
    /// yield coordinates off the board rather than an error, so bounds can be
    /// reported per axis by the rules.
    #[instrument]
    pub fn parse(text: &str) -> Result<Self, PositionError> {
        let mut chars = text.trim().chars();
        let (Some(r), Some(c), None) = (chars.next(), chars.next(), chars.next()) else {
            return Err(PositionError::WrongLength);
        };
        let row = axis_index(r.to_ascii_lowercase(), 'a');
        let col = axis_index(c, '0');
        Ok(Self::new(row, col))
    }
}

fn axis_index(c: char, base: char) -> i32 {
    c as i32 - base as i32
}

impl std::str::FromStr for Position {
    type Err = PositionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let letter = u32::try_from(self.row)
            .ok()
            .filter(|r| *r < 26)
            .and_then(|r| char::from_u32('a' as u32 + r));
        let digit = u32::try_from(self.col)
            .ok()
            .and_then(|c| char::from_digit(c, 10));
        match (letter, digit) {
            (Some(letter), Some(digit)) => write!(f, "{letter}{digit}"),
            _ => write!(f, "({}, {})", self.row, self.col),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_lowercases_row() {
        assert_eq!(Position::parse("C4"), Ok(Position::new(2, 4)));
        assert_eq!(Position::parse(" a0\n"), Ok(Position::new(0, 0)));
    }

    #[test]
    fn test_parse_rejects_wrong_length() {
        assert_eq!(Position::parse("a"), Err(PositionError::WrongLength));
        assert_eq!(Position::parse("a10"), Err(PositionError::WrongLength));
        assert_eq!(Position::parse(""), Err(PositionError::WrongLength));
    }

    #[test]
    fn test_parse_keeps_off_board_coordinates() {
        let pos = Position::parse("z9").unwrap();
        assert_eq!((pos.row(), pos.col()), (25, 9));
        let pos = Position::parse("!x").unwrap();
        assert!(pos.row() < 0);
        assert!(pos.col() > 9);
    }

    #[test]
    fn test_display_is_canonical() {
        assert_eq!(Position::new(1, 6).to_string(), "b6");
        assert_eq!(Position::new(-1, 0).to_string(), "(-1, 0)");
    }
}
