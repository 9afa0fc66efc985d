//! Disc counting and winner determination.

use crate::board::{Board, Color};

/// How an exact tie is resolved.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, clap::ValueEnum)]
pub enum TieBreak {
    /// White wins only with strictly more discs; a tie goes to Black.
    #[default]
    FavorBlack,
    /// A tie is reported as a draw.
    Draw,
}

/// Final result of a game.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Outcome {
    Win(Color),
    Draw,
}

/// Disc counts for both colors.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Tally {
    pub black: u32,
    pub white: u32,
}

impl Tally {
    pub fn of(board: &Board) -> Self {
        Self {
            black: score(board, Color::Black),
            white: score(board, Color::White),
        }
    }

    pub fn get(&self, color: Color) -> u32 {
        match color {
            Color::Black => self.black,
            Color::White => self.white,
        }
    }

    pub fn outcome(&self, tie_break: TieBreak) -> Outcome {
        if self.white > self.black {
            Outcome::Win(Color::White)
        } else if self.black > self.white {
            Outcome::Win(Color::Black)
        } else {
            match tie_break {
                TieBreak::FavorBlack => Outcome::Win(Color::Black),
                TieBreak::Draw => Outcome::Draw,
            }
        }
    }
}

/// Number of `color` discs on the board.
pub fn score(board: &Board, color: Color) -> u32 {
    board.count(color.cell()) as u32
}

/// The winner under [`TieBreak::FavorBlack`].
///
/// Only meaningful once the game is over.
pub fn winner(board: &Board) -> Color {
    match Tally::of(board).outcome(TieBreak::FavorBlack) {
        Outcome::Win(color) => color,
        Outcome::Draw => Color::Black,
    }
}

/// The result of the game under the given tie-break policy.
pub fn outcome(board: &Board, tie_break: TieBreak) -> Outcome {
    Tally::of(board).outcome(tie_break)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_score() {
        let board = Board::new();
        assert_eq!(score(&board, Color::Black), 2);
        assert_eq!(score(&board, Color::White), 2);
    }

    #[test]
    fn test_tally_outcome() {
        let t = Tally { black: 10, white: 11 };
        assert_eq!(t.outcome(TieBreak::FavorBlack), Outcome::Win(Color::White));
        let t = Tally { black: 12, white: 11 };
        assert_eq!(t.outcome(TieBreak::Draw), Outcome::Win(Color::Black));
        assert_eq!(t.get(Color::White), 11);
    }

    #[test]
    fn test_tie_policy() {
        let t = Tally { black: 7, white: 7 };
        assert_eq!(t.outcome(TieBreak::FavorBlack), Outcome::Win(Color::Black));
        assert_eq!(t.outcome(TieBreak::Draw), Outcome::Draw);
    }
}
