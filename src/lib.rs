//! Othello-Rules: the rules engine of 8x8 Othello (Reversi).
//!
//! This crate decides move legality, applies captures, alternates turns
//! (including forced passes), detects the end of the game, and scores it.
//! Reading moves and drawing the board are left to the caller.
//!
//! ## Modules
//!
//! - [`constants`] - Board geometry, scan directions, and starting layout
//! - [`board`] - Cell, color, and position types and the 8x8 grid
//! - [`scanner`] - Capture-line scanning along one direction
//! - [`moves`] - Move legality and capture application
//! - [`turn`] - Turn protocol, forced passes, and the [`Game`] session
//! - [`score`] - Disc counts and winner determination
//! - [`playout`] - Random self-play over the full protocol
//! - [`perft`] - Game-tree leaf counting for rules verification
//!
//! ## Example
//!
//! ```
//! use othello_rules::{Board, Color, Position, apply_move, is_legal_move, score};
//!
//! let mut board = Board::new();
//! let pos = Position::new(3, 4);
//!
//! assert_eq!(is_legal_move(&board, pos, Color::Black), Ok(true));
//! apply_move(&mut board, pos, Color::Black).unwrap();
//! assert_eq!(score(&board, Color::Black), 4);
//! ```

pub mod board;
pub mod constants;
pub mod error;
pub mod moves;
pub mod perft;
pub mod playout;
pub mod scanner;
pub mod score;
pub mod turn;

pub use board::{Board, CellState, Color, Position};
pub use error::GameError;
pub use moves::{Flips, apply_move, is_legal_move, legal_moves};
pub use score::{Outcome, Tally, TieBreak, outcome, score, winner};
pub use turn::{
    EndRule, Game, GameStatus, Rules, Turn, has_any_legal_move, is_board_full, is_game_over,
};
