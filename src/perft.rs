//! "Perft" move-path enumeration: count the leaves of the game tree at a
//! given depth.
//!
//! Perft counts for the standard opening are well known, which makes this a
//! cheap end-to-end check of legality, capture, and pass handling.
//! See: http://www.aartbik.com/MISC/reversi.html

use crate::board::{Board, Color};
use crate::constants::FIRST_TO_MOVE;
use crate::moves::{apply_move, legal_moves};

/// Leaf count at `depth` plies from the starting board.
pub fn run_perft(depth: u32) -> u64 {
    perft(&Board::new(), FIRST_TO_MOVE, depth)
}

/// Leaf count at `depth` plies from `board` with `to_move` to play.
///
/// A forced pass consumes a ply. Two passes in a row end the game and the
/// position counts as a single leaf.
pub fn perft(board: &Board, to_move: Color, depth: u32) -> u64 {
    leaves_below(board, to_move, depth, false)
}

fn leaves_below(board: &Board, to_move: Color, depth: u32, passed: bool) -> u64 {
    if depth == 0 {
        return 1;
    }

    let moves = legal_moves(board, to_move);
    if moves.is_empty() {
        if passed {
            return 1;
        }
        return leaves_below(board, !to_move, depth - 1, true);
    }

    moves
        .into_iter()
        .map(|mv| {
            let mut child = *board;
            // Moves come from `legal_moves`, so applying cannot fail.
            match apply_move(&mut child, mv, to_move) {
                Ok(_) => leaves_below(&child, !to_move, depth - 1, false),
                Err(_) => 0,
            }
        })
        .sum()
}
