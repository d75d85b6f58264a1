//! Game orchestration between the two participants.

use super::players::Participant;
use super::terminal::Console;
use super::view;
use crate::games::mobility::{Game, GameResult, Player, Roster, TurnStart};
use anyhow::Result;
use tracing::{debug, info, instrument};

/// Runs a game to completion, dispatching each turn to its participant.
pub struct Orchestrator<'a> {
    game: Game,
    roster: Roster,
    player_one: Box<dyn Participant>,
    player_two: Box<dyn Participant>,
    console: &'a mut dyn Console,
}

impl<'a> Orchestrator<'a> {
    /// Creates an orchestrator.
    ///
    /// `player_one` moves first and plays `X`.
    pub fn new(
        game: Game,
        roster: Roster,
        player_one: Box<dyn Participant>,
        player_two: Box<dyn Participant>,
        console: &'a mut dyn Console,
    ) -> Self {
        Self {
            game,
            roster,
            player_one,
            player_two,
            console,
        }
    }

    /// Returns the game being played.
    pub fn game(&self) -> &Game {
        &self.game
    }

    /// Runs the game loop until the game ends.
    #[instrument(skip(self))]
    pub fn run(&mut self) -> Result<GameResult> {
        info!("Starting game orchestration");

        loop {
            let player = match self.game.begin_turn() {
                TurnStart::Over(reason) => {
                    let result = self
                        .game
                        .result()
                        .ok_or_else(|| anyhow::anyhow!("Game ended without a result"))?;
                    info!(?reason, winner = ?result.winner, "Game finished");
                    view::show_result(self.console, &self.game, &self.roster, &result)?;
                    return Ok(result);
                }
                TurnStart::Move(player) => player,
            };

            view::show_turn(self.console, &self.game, &self.roster)?;

            let participant = match player {
                Player::One => &mut self.player_one,
                Player::Two => &mut self.player_two,
            };
            debug!(player = %participant.name(), "Waiting for move");
            let mov = participant.choose_move(&self.game, self.console)?;
            let controller = participant.controller();

            self.game
                .apply(mov)
                .map_err(|e| anyhow::anyhow!("{} made an illegal move: {}", participant.name(), e))?;

            view::show_move(self.console, &mov, controller)?;
        }
    }
}
