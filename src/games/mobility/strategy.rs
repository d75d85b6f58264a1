//! Computer move selection.

use super::rules::{positions_of, valid_moves_from};
use super::{Board, Move, Player};
use rand::Rng;
use rand::seq::IndexedRandom;
use tracing::{debug, instrument};

/// Picks a move for `player`.
///
/// The piece with the most destinations wins, earliest in row-major order on
/// ties; its destination is drawn uniformly from `rng`. Returns `None` when
/// no piece can move.
#[instrument(skip(board, rng))]
pub fn choose_move(board: &Board, player: Player, rng: &mut impl Rng) -> Option<Move> {
    let pieces = positions_of(board, player);
    let mut best = *pieces.first()?;
    let mut max = 0;
    for &pos in &pieces {
        let count = valid_moves_from(board, pos).len();
        if count > max {
            max = count;
            best = pos;
        }
    }

    let dest = *valid_moves_from(board, best).choose(rng)?;
    debug!(piece = %best, moves = max, to = %dest, "Computer chose move");
    Some(Move::new(player, best, dest))
}
