//! Board state: an 8x8 grid of cells addressed by 1-indexed positions.
//!
//! The board knows nothing about turns or capture rules. It only stores cell
//! contents and enforces bounds.

use std::ops::Not;

use crate::constants::{INITIAL_DISCS, MAX_COORD, MIN_COORD, N};
use crate::error::GameError;

/// Contents of a single cell.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum CellState {
    #[default]
    Empty,
    Black,
    White,
}

/// A player, and the color of the discs they own.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Color {
    Black,
    White,
}

impl Color {
    /// The other player.
    pub const fn opponent(self) -> Color {
        match self {
            Color::Black => Color::White,
            Color::White => Color::Black,
        }
    }

    /// The cell state a disc of this color occupies.
    pub const fn cell(self) -> CellState {
        match self {
            Color::Black => CellState::Black,
            Color::White => CellState::White,
        }
    }
}

impl Not for Color {
    type Output = Color;

    fn not(self) -> Color {
        self.opponent()
    }
}

impl From<Color> for CellState {
    fn from(color: Color) -> Self {
        color.cell()
    }
}

/// A 1-indexed `(row, col)` coordinate.
///
/// Any pair of integers can be represented so out-of-range input can be
/// reported as [`GameError::OutOfBounds`] instead of being unrepresentable.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Position {
    pub row: i32,
    pub col: i32,
}

impl Position {
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// The neighbouring position one step along `(dr, dc)`. May be off-board.
    #[inline]
    pub const fn step(self, (dr, dc): (i32, i32)) -> Self {
        Self {
            row: self.row + dr,
            col: self.col + dc,
        }
    }
}

impl From<(i32, i32)> for Position {
    fn from((row, col): (i32, i32)) -> Self {
        Self::new(row, col)
    }
}

/// The 8x8 grid.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Board {
    cells: [[CellState; N]; N],
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    /// The standard starting board: four centre discs, everything else empty.
    pub fn new() -> Self {
        let mut board = Self::empty();
        for (row, col, color) in INITIAL_DISCS {
            board.cells[(row - 1) as usize][(col - 1) as usize] = color.cell();
        }
        board
    }

    /// A board with every cell empty.
    pub const fn empty() -> Self {
        Self {
            cells: [[CellState::Empty; N]; N],
        }
    }

    /// Build a board from explicit rows, top row first.
    pub const fn from_rows(cells: [[CellState; N]; N]) -> Self {
        Self { cells }
    }

    /// Whether both coordinates lie in `[1, 8]`.
    #[inline]
    pub fn is_in_bounds(&self, pos: Position) -> bool {
        (MIN_COORD..=MAX_COORD).contains(&pos.row) && (MIN_COORD..=MAX_COORD).contains(&pos.col)
    }

    fn idx(&self, pos: Position) -> Result<(usize, usize), GameError> {
        if !self.is_in_bounds(pos) {
            return Err(GameError::OutOfBounds {
                row: pos.row,
                col: pos.col,
            });
        }
        Ok(((pos.row - 1) as usize, (pos.col - 1) as usize))
    }

    pub fn get(&self, pos: Position) -> Result<CellState, GameError> {
        let (r, c) = self.idx(pos)?;
        Ok(self.cells[r][c])
    }

    /// Put a disc of `color` at `pos`, replacing whatever was there.
    pub fn set(&mut self, pos: Position, color: Color) -> Result<(), GameError> {
        let (r, c) = self.idx(pos)?;
        self.cells[r][c] = color.cell();
        Ok(())
    }

    pub fn is_empty(&self, pos: Position) -> Result<bool, GameError> {
        Ok(self.get(pos)? == CellState::Empty)
    }

    pub fn is_occupied(&self, pos: Position) -> Result<bool, GameError> {
        Ok(self.get(pos)? != CellState::Empty)
    }

    /// All 64 positions in row-major order.
    pub fn positions() -> impl Iterator<Item = Position> {
        (MIN_COORD..=MAX_COORD)
            .flat_map(|row| (MIN_COORD..=MAX_COORD).map(move |col| Position::new(row, col)))
    }

    /// Cell contents in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = CellState> + '_ {
        self.cells.iter().flatten().copied()
    }

    /// Number of cells holding `state`.
    pub fn count(&self, state: CellState) -> usize {
        self.cells().filter(|&c| c == state).count()
    }

    /// Number of occupied cells.
    pub fn disc_count(&self) -> usize {
        self.cells().filter(|&c| c != CellState::Empty).count()
    }
}
