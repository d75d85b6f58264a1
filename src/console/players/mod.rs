//! Participant trait and implementations.

mod computer;
mod human;

pub use computer::ComputerPlayer;
pub use human::HumanPlayer;

use super::terminal::Console;
use crate::games::mobility::{Controller, Game, Move};
use anyhow::Result;

/// Something that can decide moves for one side of the board.
pub trait Participant {
    /// Picks a move for the player to move in `game`.
    ///
    /// Called only when that player has at least one destination.
    fn choose_move(&mut self, game: &Game, console: &mut dyn Console) -> Result<Move>;

    /// Who is behind this participant.
    fn controller(&self) -> Controller;

    /// Returns the participant's display name.
    fn name(&self) -> &str;
}
