//! Core domain types for the mobility game.

use serde::{Deserialize, Serialize};
use strum::EnumIter;
use tracing::instrument;

/// Turn-order role of a player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, EnumIter)]
pub enum Player {
    /// Moves first, plays `X`.
    One,
    /// Moves second, plays `O`.
    Two,
}

impl Player {
    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::One => Player::Two,
            Player::Two => Player::One,
        }
    }

    /// Returns the symbol this player's pieces are drawn with.
    pub fn symbol(self) -> Symbol {
        match self {
            Player::One => Symbol::X,
            Player::Two => Symbol::O,
        }
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Symbol printed for a player's pieces.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    EnumIter,
    derive_more::Display,
)]
pub enum Symbol {
    /// First player's symbol.
    #[display("X")]
    #[serde(alias = "x")]
    X,
    /// Second player's symbol.
    #[display("O")]
    #[serde(alias = "o")]
    O,
}

impl Symbol {
    /// Returns the player that owns this symbol.
    pub fn player(self) -> Player {
        match self {
            Symbol::X => Player::One,
            Symbol::O => Player::Two,
        }
    }

    /// Returns the symbol as a character.
    pub fn as_char(self) -> char {
        match self {
            Symbol::X => 'X',
            Symbol::O => 'O',
        }
    }
}

/// A square on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Square {
    /// Empty square.
    Empty,
    /// Square holding one of a player's pieces.
    Occupied(Player),
}

/// Who decides a player's moves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display)]
pub enum Controller {
    /// Moves are read from the terminal.
    #[display("you")]
    Human,
    /// Moves are picked by the mobility heuristic.
    #[display("Computer")]
    Computer,
}

/// Assignment of controllers to the two players.
///
/// Built once at setup from the symbol the human chose to play.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Roster {
    human: Player,
}

impl Roster {
    /// Creates a roster where the human plays `symbol`.
    #[instrument]
    pub fn new(symbol: Symbol) -> Self {
        Self {
            human: symbol.player(),
        }
    }

    /// Returns the player the human controls.
    pub fn human(&self) -> Player {
        self.human
    }

    /// Returns the player the computer controls.
    pub fn computer(&self) -> Player {
        self.human.opponent()
    }

    /// Returns who controls `player`.
    pub fn controller(&self, player: Player) -> Controller {
        if player == self.human {
            Controller::Human
        } else {
            Controller::Computer
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_symbols_follow_turn_order() {
        assert_eq!(Player::One.symbol(), Symbol::X);
        assert_eq!(Player::Two.symbol(), Symbol::O);
        assert_eq!(Symbol::O.player(), Player::Two);
    }

    #[test]
    fn test_roster_human_second() {
        let roster = Roster::new(Symbol::O);
        assert_eq!(roster.human(), Player::Two);
        assert_eq!(roster.computer(), Player::One);
        assert_eq!(roster.controller(Player::One), Controller::Computer);
        assert_eq!(roster.controller(Player::Two), Controller::Human);
    }
}
