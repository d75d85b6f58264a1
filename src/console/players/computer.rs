//! Computer participant driven by the mobility heuristic.

use super::Participant;
use crate::console::terminal::Console;
use crate::games::mobility::{Controller, Game, Move, choose_move};
use anyhow::Result;
use rand::Rng;
use tracing::{debug, instrument};

/// Moves the most mobile piece to a random free neighbour.
#[derive(Debug)]
pub struct ComputerPlayer<G> {
    name: String,
    rng: G,
}

impl<G: Rng> ComputerPlayer<G> {
    /// Creates a computer player drawing its choices from `rng`.
    pub fn new(name: impl Into<String>, rng: G) -> Self {
        Self {
            name: name.into(),
            rng,
        }
    }
}

impl<G: Rng> Participant for ComputerPlayer<G> {
    #[instrument(skip(self, game, _console), fields(ai = %self.name))]
    fn choose_move(&mut self, game: &Game, _console: &mut dyn Console) -> Result<Move> {
        debug!("Computer making move");
        choose_move(game.board(), game.to_move(), &mut self.rng)
            .ok_or_else(|| anyhow::anyhow!("No valid moves available"))
    }

    fn controller(&self) -> Controller {
        Controller::Computer
    }

    fn name(&self) -> &str {
        &self.name
    }
}
