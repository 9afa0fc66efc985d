//! Move legality and application.
//!
//! A move is legal when its cell is empty and at least one of the 8
//! directions is a capture line. Applying a move flips every captured run in
//! every direction and then places the mover's disc.

use crate::board::{Board, Color, Position};
use crate::constants::DIRECTIONS;
use crate::error::GameError;
use crate::scanner::{capture_run, is_capture_line};

/// Positions flipped by one move, grouped by direction in [`DIRECTIONS`] order.
pub type Flips = Vec<Position>;

/// Whether `mover` may place a disc at `pos`.
///
/// # Errors
/// - [`GameError::OutOfBounds`] if `pos` is off the board
pub fn is_legal_move(board: &Board, pos: Position, mover: Color) -> Result<bool, GameError> {
    if board.is_occupied(pos)? {
        return Ok(false);
    }
    Ok(DIRECTIONS
        .iter()
        .any(|&dir| is_capture_line(board, pos, mover, dir)))
}

/// Every disc a move at `pos` would flip, without touching the board.
///
/// Empty when the move is illegal.
pub fn flips_for(board: &Board, pos: Position, mover: Color) -> Result<Flips, GameError> {
    if board.is_occupied(pos)? {
        return Ok(Flips::new());
    }
    Ok(DIRECTIONS
        .iter()
        .filter_map(|&dir| capture_run(board, pos, mover, dir))
        .flat_map(|run| run.cells)
        .collect())
}

/// Play `mover` at `pos`, flipping all captured runs.
///
/// All runs are collected before the board is written, so a rejected move
/// leaves the board exactly as it was. Returns the flipped positions.
///
/// # Errors
/// - [`GameError::OutOfBounds`] if `pos` is off the board
/// - [`GameError::IllegalMove`] if the cell is occupied or nothing is captured
pub fn apply_move(board: &mut Board, pos: Position, mover: Color) -> Result<Flips, GameError> {
    let flips = flips_for(board, pos, mover)?;
    if flips.is_empty() {
        return Err(GameError::IllegalMove {
            row: pos.row,
            col: pos.col,
        });
    }

    for &f in &flips {
        board.set(f, mover)?;
    }
    board.set(pos, mover)?;
    Ok(flips)
}

/// All legal moves for `mover` in row-major order.
pub fn legal_moves(board: &Board, mover: Color) -> Vec<Position> {
    Board::positions()
        .filter(|&pos| is_legal_move(board, pos, mover).unwrap_or(false))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::CellState;

    fn p(row: i32, col: i32) -> Position {
        Position::new(row, col)
    }

    #[test]
    fn test_initial_legal_moves() {
        let board = Board::new();
        assert_eq!(
            legal_moves(&board, Color::Black),
            vec![p(3, 4), p(4, 3), p(5, 6), p(6, 5)]
        );
        assert_eq!(
            legal_moves(&board, Color::White),
            vec![p(3, 5), p(4, 6), p(5, 3), p(6, 4)]
        );
    }

    #[test]
    fn test_occupied_is_illegal() {
        let board = Board::new();
        assert_eq!(is_legal_move(&board, p(4, 4), Color::Black), Ok(false));
    }

    #[test]
    fn test_apply_first_move() {
        let mut board = Board::new();
        let flips = apply_move(&mut board, p(3, 4), Color::Black).unwrap();

        assert_eq!(flips, vec![p(4, 4)]);
        assert_eq!(board.get(p(3, 4)), Ok(CellState::Black));
        assert_eq!(board.get(p(4, 4)), Ok(CellState::Black));
        assert_eq!(board.count(CellState::Black), 4);
        assert_eq!(board.count(CellState::White), 1);
    }

    #[test]
    fn test_illegal_apply_is_noop() {
        let mut board = Board::new();
        let before = board;
        assert_eq!(
            apply_move(&mut board, p(1, 1), Color::Black),
            Err(GameError::IllegalMove { row: 1, col: 1 })
        );
        assert_eq!(board, before);
    }

    #[test]
    fn test_apply_occupied_is_illegal() {
        let mut board = Board::new();
        let before = board;
        assert_eq!(
            apply_move(&mut board, p(5, 4), Color::White),
            Err(GameError::IllegalMove { row: 5, col: 4 })
        );
        assert_eq!(board, before);
    }

    #[test]
    fn test_apply_out_of_bounds() {
        let mut board = Board::new();
        assert_eq!(
            apply_move(&mut board, p(0, 0), Color::Black),
            Err(GameError::OutOfBounds { row: 0, col: 0 })
        );
    }

    #[test]
    fn test_flips_for_does_not_mutate() {
        let board = Board::new();
        let flips = flips_for(&board, p(4, 3), Color::Black).unwrap();
        assert_eq!(flips, vec![p(4, 4)]);
        assert_eq!(board, Board::new());
    }
}
