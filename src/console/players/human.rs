//! Human participant reading positions from the terminal.

use super::Participant;
use crate::console::terminal::Console;
use crate::games::mobility::{Controller, Game, Move, Position, rules};
use anyhow::Result;
use tracing::{debug, instrument};

/// Human player typing `<row><col>` positions.
#[derive(Debug)]
pub struct HumanPlayer {
    name: String,
}

impl HumanPlayer {
    /// Creates a new human player.
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl HumanPlayer {
    fn ask_piece(&self, game: &Game, console: &mut dyn Console) -> Result<Position> {
        let player = game.to_move();
        loop {
            let answer = console.ask(&format!(
                "Dear Player '{player}', please enter a piece position you wish to move: "
            ))?;
            let pos = match Position::parse(&answer) {
                Ok(pos) => pos,
                Err(e) => {
                    console.say(&format!("{e}."))?;
                    continue;
                }
            };
            match rules::check_piece(game.board(), player, pos) {
                Ok(()) => return Ok(pos),
                Err(e) => {
                    debug!(error = %e, "Piece rejected");
                    console.say(&format!(
                        "Oops! Chosen position is unfortunately, invalid ({e}). Please try again!"
                    ))?;
                }
            }
        }
    }
}

impl Participant for HumanPlayer {
    #[instrument(skip(self, game, console), fields(human = %self.name))]
    fn choose_move(&mut self, game: &Game, console: &mut dyn Console) -> Result<Move> {
        let board = game.board();
        let player = game.to_move();

        'piece: loop {
            let from = self.ask_piece(game, console)?;
            loop {
                let answer = console.ask(&format!(
                    "Dear Player '{player}', please enter your new move (or press Enter to choose another piece): "
                ))?;
                if answer.trim().is_empty() {
                    debug!(%from, "Piece choice withdrawn");
                    continue 'piece;
                }
                let to = match Position::parse(&answer) {
                    Ok(pos) => pos,
                    Err(e) => {
                        console.say(&format!("{e}."))?;
                        continue;
                    }
                };
                let mov = Move::new(player, from, to);
                match rules::check_move(board, &mov) {
                    Ok(()) => return Ok(mov),
                    Err(e) => {
                        debug!(error = %e, "Destination rejected");
                        console.say(&format!("ERROR: {e}."))?;
                        console.say("Oops! That was an invalid move! Please try again!")?;
                    }
                }
            }
        }
    }

    fn controller(&self) -> Controller {
        Controller::Human
    }

    fn name(&self) -> &str {
        &self.name
    }
}
