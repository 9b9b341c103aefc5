//! Game flow around the rule engine.
//!
//! [`Game`] owns everything [`attempt_move`](crate::rules::attempt_move)
//! leaves to its caller: whose turn it is, the fingerprint history, prisoner
//! totals, consecutive passes and whether the game is over.

use crate::board::{Board, Color, Fingerprint};
use crate::config::EngineConfig;
use crate::error::GameError;
use crate::rules::{attempt_move_with, KoRule};
use crate::scoring::{GameResult, Scorer};

/// A move or signal from either player.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Move {
    Play { x: i32, y: i32 },
    Pass,
    Resign,
}

/// Board plus running prisoner counts and move number.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Position {
    pub board: Board,
    /// White stones taken by Black.
    pub captured_by_black: usize,
    /// Black stones taken by White.
    pub captured_by_white: usize,
    /// Plies played so far, passes included.
    pub move_index: usize,
}

impl Position {
    pub fn new(size: usize) -> Self {
        Self {
            board: Board::new(size),
            captured_by_black: 0,
            captured_by_white: 0,
            move_index: 0,
        }
    }

    /// Prisoners taken by `color`.
    pub fn prisoners(&self, color: Color) -> usize {
        match color {
            Color::Black => self.captured_by_black,
            Color::White => self.captured_by_white,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EndReason {
    TwoConsecutivePasses,
    Resignation { winner: Color },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    Ended(EndReason),
}

#[derive(Debug)]
pub struct Game {
    position: Position,
    history: Vec<Fingerprint>,
    to_move: Color,
    passes: u32,
    status: GameStatus,
    last_move: Option<Move>,
    komi: f32,
    ko_rule: KoRule,
}

impl Default for Game {
    fn default() -> Self {
        Self::new(&EngineConfig::default())
    }
}

impl Game {
    /// Start a game on an empty board with Black to move.
    pub fn new(config: &EngineConfig) -> Self {
        let position = Position::new(config.size);
        let history = vec![position.board.fingerprint()];
        Self {
            position,
            history,
            to_move: Color::Black,
            passes: 0,
            status: GameStatus::InProgress,
            last_move: None,
            komi: config.komi,
            ko_rule: config.ko_rule,
        }
    }

    /// Clear the board and start over with the same settings.
    pub fn reset(&mut self) {
        let size = self.position.board.size();
        self.position = Position::new(size);
        self.history = vec![self.position.board.fingerprint()];
        self.to_move = Color::Black;
        self.passes = 0;
        self.status = GameStatus::InProgress;
        self.last_move = None;
    }

    pub fn position(&self) -> &Position {
        &self.position
    }

    pub fn board(&self) -> &Board {
        &self.position.board
    }

    /// One fingerprint per ply, starting with the initial empty board.
    pub fn history(&self) -> &[Fingerprint] {
        &self.history
    }

    pub fn to_move(&self) -> Color {
        self.to_move
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn is_over(&self) -> bool {
        self.status != GameStatus::InProgress
    }

    pub fn last_move(&self) -> Option<Move> {
        self.last_move
    }

    pub fn komi(&self) -> f32 {
        self.komi
    }

    pub fn set_komi(&mut self, komi: f32) {
        self.komi = komi;
    }

    pub fn ko_rule(&self) -> KoRule {
        self.ko_rule
    }

    /// Hand the turn to `color`. Used by front-ends that let either side
    /// move out of order.
    pub fn set_to_move(&mut self, color: Color) {
        self.to_move = color;
    }

    /// Play for the side to move. Returns the number of stones captured.
    pub fn play(&mut self, x: i32, y: i32) -> Result<usize, GameError> {
        self.ensure_in_progress()?;
        let color = self.to_move;
        let outcome = attempt_move_with(
            self.ko_rule,
            &self.position.board,
            x,
            y,
            color,
            &self.history,
        )?;

        match color {
            Color::Black => self.position.captured_by_black += outcome.captured,
            Color::White => self.position.captured_by_white += outcome.captured,
        }
        self.position.board = outcome.board;
        self.advance(Move::Play { x, y });
        self.passes = 0;
        Ok(outcome.captured)
    }

    /// Pass for the side to move. Two passes in a row end the game.
    pub fn pass(&mut self) -> Result<(), GameError> {
        self.ensure_in_progress()?;
        self.advance(Move::Pass);
        self.passes += 1;
        if self.passes >= 2 {
            self.status = GameStatus::Ended(EndReason::TwoConsecutivePasses);
        }
        Ok(())
    }

    /// The side to move resigns. Returns the winner.
    pub fn resign(&mut self) -> Result<Color, GameError> {
        self.ensure_in_progress()?;
        let winner = self.to_move.opponent();
        self.last_move = Some(Move::Resign);
        self.status = GameStatus::Ended(EndReason::Resignation { winner });
        Ok(winner)
    }

    /// Apply any [`Move`] for the side to move. Returns stones captured.
    pub fn apply(&mut self, mv: Move) -> Result<usize, GameError> {
        match mv {
            Move::Play { x, y } => self.play(x, y),
            Move::Pass => self.pass().map(|()| 0),
            Move::Resign => self.resign().map(|_| 0),
        }
    }

    /// Result of a finished game, or `None` while in progress or when
    /// `scorer` cannot decide.
    pub fn score_with(&self, scorer: &dyn Scorer) -> Option<GameResult> {
        match self.status {
            GameStatus::InProgress => None,
            GameStatus::Ended(EndReason::Resignation { winner }) => Some(GameResult::Win {
                winner,
                margin: None,
            }),
            GameStatus::Ended(EndReason::TwoConsecutivePasses) => {
                scorer.score(&self.position, self.komi)
            }
        }
    }

    fn ensure_in_progress(&self) -> Result<(), GameError> {
        if self.is_over() {
            return Err(GameError::GameOver);
        }
        Ok(())
    }

    fn advance(&mut self, mv: Move) {
        self.history.push(self.position.board.fingerprint());
        self.position.move_index += 1;
        self.last_move = Some(mv);
        self.to_move = self.to_move.opponent();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::MoveError;
    use crate::scoring::UndeterminedScorer;

    fn game(size: usize) -> Game {
        Game::new(&EngineConfig {
            size,
            ..EngineConfig::default()
        })
    }

    #[test]
    fn test_new_game() {
        let g = game(19);
        assert_eq!(g.to_move(), Color::Black);
        assert_eq!(g.status(), GameStatus::InProgress);
        assert_eq!(g.history().len(), 1);
        assert_eq!(g.position().move_index, 0);
    }

    #[test]
    fn test_play_alternates_and_records_history() {
        let mut g = game(9);
        g.play(2, 2).unwrap();
        assert_eq!(g.to_move(), Color::White);
        g.play(3, 3).unwrap();
        assert_eq!(g.to_move(), Color::Black);
        assert_eq!(g.history().len(), 3);
        assert_eq!(g.history().last(), Some(&g.board().fingerprint()));
        assert_eq!(g.position().move_index, 2);
    }

    #[test]
    fn test_rejected_move_keeps_turn() {
        let mut g = game(9);
        g.play(2, 2).unwrap();
        let before = g.position().clone();
        assert_eq!(g.play(2, 2), Err(GameError::Move(MoveError::Occupied)));
        assert_eq!(g.position(), &before);
        assert_eq!(g.to_move(), Color::White);
        assert_eq!(g.history().len(), 2);
    }

    #[test]
    fn test_two_passes_end_game() {
        let mut g = game(9);
        g.pass().unwrap();
        assert!(!g.is_over());
        g.play(4, 4).unwrap();
        g.pass().unwrap();
        assert!(!g.is_over());
        g.pass().unwrap();
        assert_eq!(
            g.status(),
            GameStatus::Ended(EndReason::TwoConsecutivePasses)
        );
        assert_eq!(g.play(0, 0), Err(GameError::GameOver));
        assert_eq!(g.score_with(&UndeterminedScorer), None);
    }

    #[test]
    fn test_pass_records_unchanged_board() {
        let mut g = game(9);
        g.play(1, 1).unwrap();
        g.pass().unwrap();
        let h = g.history();
        assert_eq!(h[h.len() - 1], h[h.len() - 2]);
    }

    #[test]
    fn test_resign() {
        let mut g = game(9);
        g.play(4, 4).unwrap();
        assert_eq!(g.resign(), Ok(Color::Black));
        assert_eq!(
            g.status(),
            GameStatus::Ended(EndReason::Resignation { winner: Color::Black })
        );
        assert_eq!(
            g.score_with(&UndeterminedScorer),
            Some(GameResult::Win { winner: Color::Black, margin: None })
        );
        assert_eq!(g.pass(), Err(GameError::GameOver));
    }

    #[test]
    fn test_prisoners_credit_the_capturer() {
        let mut g = game(9);
        // Black surrounds a white stone in the corner.
        g.play(1, 0).unwrap();
        g.play(0, 0).unwrap();
        assert_eq!(g.play(0, 1), Ok(1));
        assert_eq!(g.position().captured_by_black, 1);
        assert_eq!(g.position().captured_by_white, 0);
        assert_eq!(g.position().prisoners(Color::Black), 1);
    }

    #[test]
    fn test_set_to_move() {
        let mut g = game(9);
        g.set_to_move(Color::White);
        g.play(0, 0).unwrap();
        assert_eq!(g.board().get(0, 0), Some(Color::White));
        assert_eq!(g.to_move(), Color::Black);
    }

    #[test]
    fn test_reset() {
        let mut g = game(9);
        g.play(4, 4).unwrap();
        g.resign().unwrap();
        g.reset();
        assert_eq!(g.status(), GameStatus::InProgress);
        assert_eq!(g.board().count(Color::Black), 0);
        assert_eq!(g.board().size(), 9);
        assert_eq!(g.history().len(), 1);
    }
}
