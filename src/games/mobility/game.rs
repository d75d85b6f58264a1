//! Turn engine for the mobility game.
//!
//! A game alternates between the two players until the turn limit is spent
//! or the player to move is stuck. The limit is checked first, so a player
//! who would be stuck on the turn after the last one does not lose.

use super::rules::{check_move, check_piece, count_valid_moves};
use super::{Board, Mobility, Move, MoveError, Player, Square};
use tracing::{info, instrument};

/// Why a game ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Termination {
    /// The named player had to move and could not.
    NoLegalMoves(Player),
    /// The turn counter reached the configured limit.
    TurnsExhausted,
}

/// Where the engine is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    /// Waiting for the named player to move.
    AwaitingTurn(Player),
    /// The game is over.
    Terminal(Termination),
}

/// What the player to move faces at the start of a turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnStart {
    /// The named player must move; at least one destination is open.
    Move(Player),
    /// The game has ended.
    Over(Termination),
}

/// Final result of a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameResult {
    /// How the game ended.
    pub termination: Termination,
    /// The winner, `None` for a draw.
    pub winner: Option<Player>,
    /// Both players' mobility on the final board.
    pub mobility: Mobility,
}

/// Game state: board, turn bookkeeping and move history.
#[derive(Debug, Clone)]
pub struct Game {
    board: Board,
    to_move: Player,
    turn: u32,
    turn_limit: u32,
    status: GameStatus,
    history: Vec<Move>,
}

impl Game {
    /// Starts a game on `board` with player one to move.
    #[instrument(skip(board))]
    pub fn new(board: Board, turn_limit: u32) -> Self {
        Self {
            board,
            to_move: Player::One,
            turn: 0,
            turn_limit,
            status: GameStatus::AwaitingTurn(Player::One),
            history: Vec::new(),
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the player to move.
    pub fn to_move(&self) -> Player {
        self.to_move
    }

    /// Number of turns played so far.
    pub fn turn(&self) -> u32 {
        self.turn
    }

    /// Configured turn limit.
    pub fn turn_limit(&self) -> u32 {
        self.turn_limit
    }

    /// Current lifecycle status.
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Returns the moves played so far.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// True once the game has ended.
    pub fn is_over(&self) -> bool {
        matches!(self.status, GameStatus::Terminal(_))
    }

    /// Opens the next turn, ending the game if it cannot continue.
    #[instrument(skip(self), fields(turn = self.turn, player = ?self.to_move))]
    pub fn begin_turn(&mut self) -> TurnStart {
        if let GameStatus::Terminal(reason) = self.status {
            return TurnStart::Over(reason);
        }
        if self.turn >= self.turn_limit {
            return self.terminate(Termination::TurnsExhausted);
        }
        if count_valid_moves(&self.board, self.to_move) == 0 {
            return self.terminate(Termination::NoLegalMoves(self.to_move));
        }
        TurnStart::Move(self.to_move)
    }

    fn terminate(&mut self, reason: Termination) -> TurnStart {
        info!(?reason, turn = self.turn, "Game over");
        self.status = GameStatus::Terminal(reason);
        TurnStart::Over(reason)
    }

    /// Validates and applies `mov`, then passes the turn.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError`] if the game is over, the mover is not the player
    /// to move, the piece is not theirs, or the destination breaks a rule.
    #[instrument(skip(self), fields(turn = self.turn))]
    pub fn apply(&mut self, mov: Move) -> Result<(), MoveError> {
        if self.is_over() {
            return Err(MoveError::GameOver);
        }
        if mov.player != self.to_move {
            return Err(MoveError::WrongPlayer(mov.player));
        }
        check_piece(&self.board, mov.player, mov.from).map_err(MoveError::Piece)?;
        check_move(&self.board, &mov)?;

        self.board
            .set(mov.to, Square::Occupied(mov.player))
            .map_err(MoveError::Board)?;
        self.board
            .set(mov.from, Square::Empty)
            .map_err(MoveError::Board)?;
        self.history.push(mov);
        self.turn += 1;
        self.to_move = self.to_move.opponent();
        self.status = GameStatus::AwaitingTurn(self.to_move);
        Ok(())
    }

    /// Result of a finished game, `None` while it is still running.
    pub fn result(&self) -> Option<GameResult> {
        let GameStatus::Terminal(termination) = self.status else {
            return None;
        };
        let mobility = Mobility::of(&self.board);
        let winner = match termination {
            Termination::NoLegalMoves(stuck) => Some(stuck.opponent()),
            Termination::TurnsExhausted => mobility.leader(),
        };
        Some(GameResult {
            termination,
            winner,
            mobility,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::mobility::Position;

    fn p(text: &str) -> Position {
        Position::parse(text).unwrap()
    }

    #[test]
    fn test_apply_moves_piece_and_passes_turn() {
        let board = Board::from_rows(&["X..", "...", "..O"]).unwrap();
        let mut game = Game::new(board, 10);
        assert!(matches!(game.begin_turn(), TurnStart::Move(Player::One)));
        game.apply(Move::new(Player::One, p("a0"), p("b0"))).unwrap();
        assert_eq!(game.board().get(p("a0")), Some(Square::Empty));
        assert_eq!(game.board().get(p("b0")), Some(Square::Occupied(Player::One)));
        assert_eq!(game.to_move(), Player::Two);
        assert_eq!(game.turn(), 1);
        assert_eq!(game.history().len(), 1);
    }

    #[test]
    fn test_apply_rejects_out_of_turn() {
        let board = Board::from_rows(&["X..", "...", "..O"]).unwrap();
        let mut game = Game::new(board, 10);
        assert_eq!(
            game.apply(Move::new(Player::Two, p("c2"), p("c1"))),
            Err(MoveError::WrongPlayer(Player::Two))
        );
    }

    #[test]
    fn test_limit_checked_before_stuck_player() {
        let board = Board::from_rows(&["XO.", "O..", "..."]).unwrap();
        let mut game = Game::new(board, 0);
        assert_eq!(game.begin_turn(), TurnStart::Over(Termination::TurnsExhausted));
        let result = game.result().unwrap();
        assert_eq!(result.winner, Some(Player::Two));
    }

    #[test]
    fn test_terminal_game_refuses_moves() {
        let board = Board::from_rows(&["XO.", "O..", "..."]).unwrap();
        let mut game = Game::new(board, 5);
        assert_eq!(
            game.begin_turn(),
            TurnStart::Over(Termination::NoLegalMoves(Player::One))
        );
        assert!(game.is_over());
        assert_eq!(
            game.apply(Move::new(Player::One, p("a0"), p("a2"))),
            Err(MoveError::GameOver)
        );
    }
}
