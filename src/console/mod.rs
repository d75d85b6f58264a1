//! Console front-end: setup prompts, turn loop and rendering.

mod orchestrator;
mod players;
mod setup;
mod terminal;
mod view;

pub use orchestrator::Orchestrator;
pub use players::{ComputerPlayer, HumanPlayer, Participant};
pub use setup::{ask_pieces, ask_symbol, ask_turns};
pub use terminal::{Console, Terminal};
pub use view::TITLE;

use crate::games::mobility::{Board, Game, GameResult, Player, Roster};
use crate::settings::{GameConfig, GameSettings};
use anyhow::Result;
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::{info, instrument};

/// Runs the setup prompts and plays one game on `console`.
///
/// Placement and the computer's choices draw from one RNG seeded with the
/// settings' seed, or a random one that is logged.
#[instrument(skip(settings, console))]
pub fn play(settings: &GameSettings, console: &mut dyn Console) -> Result<GameResult> {
    settings.validate()?;
    let side = *settings.side();
    let seed = settings.seed().unwrap_or_else(rand::random);
    info!(seed, side, "Seeding game");
    let mut rng = StdRng::seed_from_u64(seed);

    console.say(TITLE)?;
    let symbol = ask_symbol(console, *settings.play_as())?;
    let pieces = ask_pieces(console, side, *settings.pieces())?;
    let board = Board::scatter(side, pieces, &mut rng);
    let turns = ask_turns(console, *settings.turns())?;
    let config = GameConfig::new(symbol, pieces as u32, turns, side)?;
    info!(?config, "Game configured");

    let roster = Roster::new(*config.symbol());
    let human: Box<dyn Participant> = Box::new(HumanPlayer::new("You"));
    let computer: Box<dyn Participant> = Box::new(ComputerPlayer::new("Computer", rng));
    let (player_one, player_two) = match roster.human() {
        Player::One => (human, computer),
        Player::Two => (computer, human),
    };

    let game = Game::new(board, *config.turns());
    let mut orchestrator = Orchestrator::new(game, roster, player_one, player_two, console);
    orchestrator.run()
}
