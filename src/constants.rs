//! Constants for board geometry, the starting layout, and driver limits.
//!
//! The board is always 8x8 and addressed with 1-indexed `(row, col)`
//! coordinates, so every valid coordinate lies in `MIN_COORD..=MAX_COORD`.

use crate::board::Color;

// =============================================================================
// Board Geometry
// =============================================================================

/// Board size (NxN).
pub const N: usize = 8;

/// Total number of cells on the board.
pub const NUM_CELLS: usize = N * N;

/// Smallest valid coordinate on either axis.
pub const MIN_COORD: i32 = 1;

/// Largest valid coordinate on either axis.
pub const MAX_COORD: i32 = N as i32;

// =============================================================================
// Directions
// =============================================================================

/// A `(delta_row, delta_col)` step between neighbouring cells.
pub type Direction = (i32, i32);

/// The 8 scan directions: orthogonal first, then diagonal.
pub const DIRECTIONS: [Direction; 8] = [
    (1, 0),
    (-1, 0),
    (0, 1),
    (0, -1),
    (1, 1),
    (1, -1),
    (-1, 1),
    (-1, -1),
];

// =============================================================================
// Starting Layout
// =============================================================================

/// The four seeded centre discs. The diagonals of the central 2x2 block
/// alternate colors.
pub const INITIAL_DISCS: [(i32, i32, Color); 4] = [
    (4, 4, Color::White),
    (5, 5, Color::White),
    (4, 5, Color::Black),
    (5, 4, Color::Black),
];

/// Color that moves first.
pub const FIRST_TO_MOVE: Color = Color::Black;

// =============================================================================
// Driver Limits
// =============================================================================

/// Upper bound on protocol steps a self-play driver runs before giving up.
///
/// A finished game needs at most 60 moves plus the passes between them. Only a
/// mutual stall under `EndRule::FullOrWipeout` can get near this.
pub const MAX_TURNS: usize = NUM_CELLS * 4;

/// Default number of games for the self-play driver.
pub const N_GAMES: usize = 100;
