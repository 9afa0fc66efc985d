//! Turn alternation, forced passes, and game-end detection.
//!
//! [`Game`] is a single game session. Each protocol step is driven by
//! [`Game::advance`]:
//!
//! 1. If either color has no discs, or the board is full, the game is over.
//! 2. Otherwise, if the active color has no legal move anywhere, its turn is
//!    skipped and the other color becomes active.
//! 3. Otherwise the active color must move, through [`Game::play`].
//!
//! Under [`EndRule::DoublePass`] the game also ends when both colors pass in
//! a row. [`EndRule::FullOrWipeout`] keeps only the first rule, so a board on
//! which neither color can move passes back and forth indefinitely.

use tracing::{debug, info, instrument, trace};

use crate::board::{Board, CellState, Color, Position};
use crate::constants::FIRST_TO_MOVE;
use crate::error::GameError;
use crate::moves::{Flips, apply_move, is_legal_move};
use crate::score::{Outcome, Tally, TieBreak};

/// When a game ends.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, clap::ValueEnum)]
pub enum EndRule {
    /// Board full, a color wiped out, or two consecutive passes.
    #[default]
    DoublePass,
    /// Board full or a color wiped out. Mutual stalls are not detected.
    FullOrWipeout,
}

/// Rule policy for a session.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Rules {
    pub end_rule: EndRule,
    pub tie_break: TieBreak,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    Finished,
}

/// Result of one protocol step.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Turn {
    /// The game is over; no further moves are accepted.
    Finished,
    /// The given color had no legal move and was skipped.
    Passed(Color),
    /// The given color has a legal move and must play.
    ToMove(Color),
}

/// Whether `color` has a legal move anywhere on the board.
pub fn has_any_legal_move(board: &Board, color: Color) -> bool {
    Board::positions().any(|pos| is_legal_move(board, pos, color).unwrap_or(false))
}

/// Whether no cell is empty.
pub fn is_board_full(board: &Board) -> bool {
    board.count(CellState::Empty) == 0
}

/// Board full, or either color has no discs left.
pub fn is_game_over(board: &Board) -> bool {
    is_board_full(board)
        || board.count(CellState::Black) == 0
        || board.count(CellState::White) == 0
}

/// A single game session.
#[derive(Clone, Debug)]
pub struct Game {
    board: Board,
    active: Color,
    /// Passes since the last placed disc.
    passes: u32,
    /// Set once a double pass ends the game under [`EndRule::DoublePass`].
    stalled: bool,
    /// Discs placed so far.
    moves: u32,
    rules: Rules,
}

impl Default for Game {
    fn default() -> Self {
        Self::new(Rules::default())
    }
}

impl Game {
    /// A new game from the standard starting board.
    pub fn new(rules: Rules) -> Self {
        Self::from_board(Board::new(), FIRST_TO_MOVE, rules)
    }

    /// A session resuming from an arbitrary board.
    pub fn from_board(board: Board, active: Color, rules: Rules) -> Self {
        Self {
            board,
            active,
            passes: 0,
            stalled: false,
            moves: 0,
            rules,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn active(&self) -> Color {
        self.active
    }

    pub fn rules(&self) -> Rules {
        self.rules
    }

    /// Passes since the last placed disc.
    pub fn consecutive_passes(&self) -> u32 {
        self.passes
    }

    /// Discs placed in this session.
    pub fn move_count(&self) -> u32 {
        self.moves
    }

    pub fn status(&self) -> GameStatus {
        if self.stalled || is_game_over(&self.board) {
            GameStatus::Finished
        } else {
            GameStatus::InProgress
        }
    }

    pub fn is_finished(&self) -> bool {
        self.status() == GameStatus::Finished
    }

    /// Run one protocol step: detect the end of the game or skip a color that
    /// cannot move.
    ///
    /// Returns [`Turn::ToMove`] without changing anything when the active
    /// color has a legal move.
    #[instrument(level = "trace", skip(self), fields(active = ?self.active))]
    pub fn advance(&mut self) -> Turn {
        if self.is_finished() {
            return Turn::Finished;
        }

        if has_any_legal_move(&self.board, self.active) {
            return Turn::ToMove(self.active);
        }

        let passed = self.active;
        self.passes += 1;
        self.active = !self.active;
        debug!(?passed, passes = self.passes, "forced pass");

        if self.rules.end_rule == EndRule::DoublePass && self.passes >= 2 {
            self.stalled = true;
            info!(tally = ?self.tally(), "game over: neither color can move");
            return Turn::Finished;
        }
        Turn::Passed(passed)
    }

    /// Advance through forced passes until someone must move or the game ends.
    ///
    /// Returns the color to move, or `None` once the game is over. Under
    /// [`EndRule::FullOrWipeout`] a mutual stall is cut short after both colors
    /// have passed, leaving the session in progress.
    pub fn next_to_move(&mut self) -> Option<Color> {
        loop {
            match self.advance() {
                Turn::ToMove(color) => return Some(color),
                Turn::Finished => return None,
                Turn::Passed(_) if self.passes >= 2 => return None,
                Turn::Passed(_) => {}
            }
        }
    }

    /// Place a disc for the active color.
    ///
    /// A rejected move leaves the session unchanged.
    ///
    /// # Errors
    /// - [`GameError::GameOver`] if the game has finished
    /// - [`GameError::OutOfBounds`] if `pos` is off the board
    /// - [`GameError::IllegalMove`] if `pos` does not capture for the active color
    #[instrument(level = "debug", skip(self), fields(active = ?self.active))]
    pub fn play(&mut self, pos: Position) -> Result<Flips, GameError> {
        if self.is_finished() {
            return Err(GameError::GameOver);
        }

        let flips = apply_move(&mut self.board, pos, self.active)?;
        trace!(flipped = flips.len(), "move applied");

        self.moves += 1;
        self.passes = 0;
        self.active = !self.active;

        if is_game_over(&self.board) {
            info!(tally = ?self.tally(), "game over");
        }
        Ok(flips)
    }

    pub fn tally(&self) -> Tally {
        Tally::of(&self.board)
    }

    /// The result under this session's tie-break, once the game is over.
    pub fn outcome(&self) -> Option<Outcome> {
        self.is_finished()
            .then(|| self.tally().outcome(self.rules.tie_break))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p(row: i32, col: i32) -> Position {
        Position::new(row, col)
    }

    #[test]
    fn test_new_game() {
        let game = Game::default();
        assert_eq!(game.active(), Color::Black);
        assert_eq!(game.status(), GameStatus::InProgress);
        assert_eq!(game.outcome(), None);
    }

    #[test]
    fn test_play_alternates() {
        let mut game = Game::default();
        assert_eq!(game.advance(), Turn::ToMove(Color::Black));
        game.play(p(3, 4)).unwrap();
        assert_eq!(game.active(), Color::White);
        assert_eq!(game.move_count(), 1);
        assert_eq!(game.advance(), Turn::ToMove(Color::White));
    }

    #[test]
    fn test_rejected_play_keeps_turn() {
        let mut game = Game::default();
        let err = game.play(p(1, 1)).unwrap_err();
        assert_eq!(err, GameError::IllegalMove { row: 1, col: 1 });
        assert_eq!(game.active(), Color::Black);
        assert_eq!(*game.board(), Board::new());
    }

    #[test]
    fn test_play_after_wipeout() {
        let mut board = Board::empty();
        board.set(p(1, 1), Color::Black).unwrap();
        let mut game = Game::from_board(board, Color::White, Rules::default());
        assert!(game.is_finished());
        assert_eq!(game.advance(), Turn::Finished);
        assert_eq!(game.play(p(2, 2)), Err(GameError::GameOver));
        assert_eq!(game.outcome(), Some(Outcome::Win(Color::Black)));
    }

    #[test]
    fn test_is_game_over_criteria() {
        assert!(!is_game_over(&Board::new()));
        assert!(is_game_over(&Board::empty()));
        assert!(!is_board_full(&Board::new()));
    }
}
