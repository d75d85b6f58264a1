//! Move generation.
//!
//! Ordering matters here: the computer breaks ties by scan order, so pieces
//! are listed row-major and each piece's destinations vertical-first.

use super::super::{Board, Player, Position, Square};
use tracing::instrument;

/// Orthogonal steps in enumeration order: up, down, left, right.
const STEPS: [(i32, i32); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];

/// Returns the squares holding `player`'s pieces in row-major order.
#[instrument(skip(board))]
pub fn positions_of(board: &Board, player: Player) -> Vec<Position> {
    board
        .positions()
        .filter(|pos| board.get(*pos) == Some(Square::Occupied(player)))
        .collect()
}

/// Returns the empty on-board orthogonal neighbours of `pos`.
#[instrument(skip(board))]
pub fn valid_moves_from(board: &Board, pos: Position) -> Vec<Position> {
    STEPS
        .iter()
        .map(|&(dr, dc)| pos.offset(dr, dc))
        .filter(|dest| board.is_empty(*dest))
        .collect()
}

/// Returns every destination of every piece of `player`.
///
/// A square reachable from two pieces is listed twice.
#[instrument(skip(board))]
pub fn valid_moves_for(board: &Board, player: Player) -> Vec<Position> {
    positions_of(board, player)
        .into_iter()
        .flat_map(|pos| valid_moves_from(board, pos))
        .collect()
}

/// Mobility of `player`: the length of [`valid_moves_for`].
#[instrument(skip(board))]
pub fn count_valid_moves(board: &Board, player: Player) -> usize {
    valid_moves_for(board, player).len()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p(text: &str) -> Position {
        Position::parse(text).unwrap()
    }

    #[test]
    fn test_corner_piece_moves() {
        let mut board = Board::default();
        board.set(p("a0"), Square::Occupied(Player::One)).unwrap();
        assert_eq!(valid_moves_from(&board, p("a0")), vec![p("b0"), p("a1")]);
    }

    #[test]
    fn test_center_piece_order() {
        let mut board = Board::default();
        board.set(p("d3"), Square::Occupied(Player::One)).unwrap();
        assert_eq!(
            valid_moves_from(&board, p("d3")),
            vec![p("c3"), p("e3"), p("d2"), p("d4")]
        );
    }

    #[test]
    fn test_blocked_neighbours_skipped() {
        let board = Board::from_rows(&[
            ".......", //
            "...O...", //
            "..XX...", //
            "...X...", //
            ".......", //
            ".......", //
            ".......",
        ])
        .unwrap();
        assert_eq!(valid_moves_from(&board, p("c3")), vec![p("c4")]);
    }

    #[test]
    fn test_positions_row_major() {
        let board = Board::from_rows(&[
            "..X....", //
            "X......", //
            ".......", //
            ".....X.", //
            ".......", //
            ".......", //
            ".......",
        ])
        .unwrap();
        assert_eq!(
            positions_of(&board, Player::One),
            vec![p("a2"), p("b0"), p("d5")]
        );
        assert!(positions_of(&board, Player::Two).is_empty());
    }

    #[test]
    fn test_shared_destination_counted_twice() {
        let board = Board::from_rows(&[
            "X.X....", //
            ".......", //
            ".......", //
            ".......", //
            ".......", //
            ".......", //
            ".......",
        ])
        .unwrap();
        let moves = valid_moves_for(&board, Player::One);
        assert_eq!(moves, vec![p("b0"), p("a1"), p("b2"), p("a1"), p("a3")]);
        assert_eq!(count_valid_moves(&board, Player::One), 5);
    }
}
