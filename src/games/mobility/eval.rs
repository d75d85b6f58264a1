//! Mobility heuristic.

use super::rules::count_valid_moves;
use super::{Board, Player};
use tracing::instrument;

/// Both players' mobility on one board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Mobility {
    /// Destinations available to player one.
    pub one: usize,
    /// Destinations available to player two.
    pub two: usize,
}

impl Mobility {
    /// Counts both players' legal destinations.
    #[instrument(skip(board))]
    pub fn of(board: &Board) -> Self {
        Self {
            one: count_valid_moves(board, Player::One),
            two: count_valid_moves(board, Player::Two),
        }
    }

    /// Mobility of `player`.
    pub fn get(&self, player: Player) -> usize {
        match player {
            Player::One => self.one,
            Player::Two => self.two,
        }
    }

    /// The player with strictly more moves, `None` on a tie.
    pub fn leader(&self) -> Option<Player> {
        match self.one.cmp(&self.two) {
            std::cmp::Ordering::Greater => Some(Player::One),
            std::cmp::Ordering::Less => Some(Player::Two),
            std::cmp::Ordering::Equal => None,
        }
    }
}

/// Heuristic score of a board: player one's mobility minus player two's.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Evaluation {
    score: i64,
}

impl Evaluation {
    /// The signed score.
    pub fn score(&self) -> i64 {
        self.score
    }

    /// Player the board favours, `None` when balanced.
    pub fn favours(&self) -> Option<Player> {
        match self.score.signum() {
            1 => Some(Player::One),
            -1 => Some(Player::Two),
            _ => None,
        }
    }
}

impl From<Mobility> for Evaluation {
    fn from(m: Mobility) -> Self {
        Self {
            score: m.one as i64 - m.two as i64,
        }
    }
}

/// Scores `board` from player one's point of view.
#[instrument(skip(board))]
pub fn score(board: &Board) -> Evaluation {
    Mobility::of(board).into()
}
