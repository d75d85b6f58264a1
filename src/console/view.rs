//! Text rendering of turns, moves and the final result.

use super::terminal::Console;
use crate::games::mobility::{
    Controller, Game, GameResult, Move, Player, Position, Roster, Termination, rules, score,
};
use anyhow::Result;
use strum::IntoEnumIterator;

/// Title shown at startup.
pub const TITLE: &str = "\t ******** 2D Board Game Between User & Computer ********";

fn join(positions: &[Position]) -> String {
    positions
        .iter()
        .map(Position::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Prints the heuristic score and which side it favours.
pub fn show_score(console: &mut dyn Console, game: &Game) -> Result<()> {
    let eval = score(game.board());
    console.say(&format!(
        "Heuristic score for the board state: {}",
        eval.score()
    ))?;
    let note = match eval.favours() {
        Some(player) => format!(
            "NOTE: Score indicates board state is more favourable for player '{player}'"
        ),
        None => "NOTE: Score indicates board state is favourable for both players!".to_string(),
    };
    console.say(&note)
}

/// Prints the banner, board and score for the turn about to be played.
pub fn show_turn(console: &mut dyn Console, game: &Game, roster: &Roster) -> Result<()> {
    let player = game.to_move();
    console.say(&format!("********** TURN: {} ***********", game.turn() + 1))?;
    console.say(&game.board().to_string())?;
    show_score(console, game)?;
    console.say("")?;
    match roster.controller(player) {
        Controller::Human => console.say(&format!("* PLAYER {player}'s turn *\n"))?,
        Controller::Computer => {
            console.say(&format!("* PLAYER {player}'s turn (computer's turn) *\n"))?;
            let pieces = rules::positions_of(game.board(), player);
            console.say(&format!("Player {player}'s positions: {}", join(&pieces)))?;
        }
    }
    Ok(())
}

/// Reports a move that has just been applied.
pub fn show_move(console: &mut dyn Console, mov: &Move, controller: Controller) -> Result<()> {
    let Move { player, from, to } = *mov;
    match controller {
        Controller::Human => {
            console.say(&format!(
                "\nPlayer '{player}' moves piece from '{from}' to '{to}'.\n"
            ))
        }
        Controller::Computer => {
            console.say(&format!(
                "Computer (Player '{player}') chooses piece at: '{from}'"
            ))?;
            console.say(&format!(
                "\nComputer (player '{player}') moves piece from: '{from}' to '{to}'\n"
            ))
        }
    }
}

/// Prints the final board and the outcome.
pub fn show_result(
    console: &mut dyn Console,
    game: &Game,
    roster: &Roster,
    result: &GameResult,
) -> Result<()> {
    console.say("******** FINAL STATE ********")?;
    console.say(&game.board().to_string())?;
    match result.termination {
        Termination::NoLegalMoves(stuck) => {
            console.say("!!!!!!!! GAME OVER !!!!!!!!")?;
            console.say(&format!("Player '{stuck}' has no legal moves left."))?;
            let winner = stuck.opponent();
            console.say(&format!(
                "\nPlayer: '{winner}' ({}) won the game!\n",
                roster.controller(winner)
            ))?;
        }
        Termination::TurnsExhausted => {
            console.say("!!!!!!!! NO MORE TURNS !!!!!!!!")?;
            for player in Player::iter() {
                let moves = rules::valid_moves_for(game.board(), player);
                console.say(&format!("Computing all valid moves for: '{player}'"))?;
                console.say(&format!(
                    "Player: '{player}' has {} valid moves (for each movable piece): {}\n",
                    result.mobility.get(player),
                    join(&moves)
                ))?;
            }
            match result.winner {
                Some(winner) => console.say(&format!(
                    "***** The WINNER is player: '{winner}' ({}) *****\n",
                    roster.controller(winner)
                ))?,
                None => console.say("*** The game is a DRAW ***")?,
            }
        }
    }
    Ok(())
}
