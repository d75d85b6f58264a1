//! Move and piece-selection checks.

use super::super::{Axis, Board, Move, MoveError, PieceError, Player, Position, Square};
use tracing::instrument;

/// Checks that `pos` holds one of `player`'s pieces.
#[instrument(skip(board))]
pub fn check_piece(board: &Board, player: Player, pos: Position) -> Result<(), PieceError> {
    match board.get(pos) {
        None => Err(PieceError::OffBoard(pos)),
        Some(Square::Occupied(owner)) if owner == player => Ok(()),
        Some(_) => Err(PieceError::NotOwned(pos, player)),
    }
}

/// True if `pos` is a piece `player` may pick up.
pub fn is_chosen_position_valid(board: &Board, player: Player, pos: Position) -> bool {
    check_piece(board, player, pos).is_ok()
}

/// Checks a destination, reporting the first rule it breaks.
///
/// Rules in order: not the same square, on the board (row, then column),
/// not diagonal, empty. Distance is not checked, so a straight jump over
/// several squares onto an empty one passes.
#[instrument(skip(board))]
pub fn check_move(board: &Board, mov: &Move) -> Result<(), MoveError> {
    let Move { from, to, .. } = *mov;
    if to == from {
        return Err(MoveError::Identity);
    }
    if !board.is_row_in_bounds(to.row()) {
        return Err(MoveError::OutOfBounds(Axis::Row));
    }
    if !board.is_col_in_bounds(to.col()) {
        return Err(MoveError::OutOfBounds(Axis::Column));
    }
    if from.is_diagonal_neighbor(&to) {
        return Err(MoveError::Diagonal);
    }
    if !board.is_empty(to) {
        return Err(MoveError::Occupied(to));
    }
    Ok(())
}

/// True if [`check_move`] accepts the move.
pub fn is_legal_move(board: &Board, mov: &Move) -> bool {
    check_move(board, mov).is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p(text: &str) -> Position {
        Position::parse(text).unwrap()
    }

    fn board() -> Board {
        Board::from_rows(&[
            "X......", //
            ".......", //
            "...X...", //
            "...O...", //
            ".......", //
            ".......", //
            "......O",
        ])
        .unwrap()
    }

    #[test]
    fn test_identity_rejected_first() {
        let mov = Move::new(Player::One, p("z9"), p("z9"));
        assert_eq!(check_move(&board(), &mov), Err(MoveError::Identity));
    }

    #[test]
    fn test_row_reported_before_column() {
        let mov = Move::new(Player::One, p("g6"), p("h7"));
        assert_eq!(
            check_move(&board(), &mov),
            Err(MoveError::OutOfBounds(Axis::Row))
        );
        let mov = Move::new(Player::One, p("a0"), p("a7"));
        assert_eq!(
            check_move(&board(), &mov),
            Err(MoveError::OutOfBounds(Axis::Column))
        );
    }

    #[test]
    fn test_diagonal_rejected() {
        let mov = Move::new(Player::One, p("c3"), p("b4"));
        assert_eq!(check_move(&board(), &mov), Err(MoveError::Diagonal));
    }

    #[test]
    fn test_occupied_rejected() {
        let mov = Move::new(Player::One, p("c3"), p("d3"));
        assert_eq!(check_move(&board(), &mov), Err(MoveError::Occupied(p("d3"))));
    }

    #[test]
    fn test_distant_straight_move_accepted() {
        let mov = Move::new(Player::One, p("a0"), p("a5"));
        assert!(is_legal_move(&board(), &mov));
        let mov = Move::new(Player::One, p("a0"), p("c2"));
        assert!(is_legal_move(&board(), &mov));
    }

    #[test]
    fn test_check_piece() {
        let b = board();
        assert!(is_chosen_position_valid(&b, Player::One, p("c3")));
        assert_eq!(
            check_piece(&b, Player::One, p("d3")),
            Err(PieceError::NotOwned(p("d3"), Player::One))
        );
        assert_eq!(
            check_piece(&b, Player::Two, p("b1")),
            Err(PieceError::NotOwned(p("b1"), Player::Two))
        );
        assert_eq!(
            check_piece(&b, Player::One, p("h0")),
            Err(PieceError::OffBoard(p("h0")))
        );
    }
}
