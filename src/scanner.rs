//! Capture-line scanning along a single direction.
//!
//! A direction from an origin cell is a capture line when it starts with one
//! or more opponent discs and the run is closed by a disc of the mover's own
//! color. Running off the board or hitting an empty cell invalidates it.
//!
//! This scan is pure and is shared by legality checks and move application.

use crate::board::{Board, Color, Position};
use crate::constants::{Direction, N};

/// The opponent discs a single direction would flip.
///
/// Never empty: a run is only produced for a valid capture line.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CaptureRun {
    pub direction: Direction,
    pub cells: Vec<Position>,
}

/// Scan from `origin` along `direction` for `mover`.
///
/// Returns the run of opponent discs bracketed by a `mover` disc, or `None`
/// if the direction does not capture. The origin itself is not inspected.
pub fn capture_run(
    board: &Board,
    origin: Position,
    mover: Color,
    direction: Direction,
) -> Option<CaptureRun> {
    let own = mover.cell();
    let opp = mover.opponent().cell();

    let mut cur = origin.step(direction);
    let mut cells = Vec::with_capacity(N - 2);

    // Out-of-bounds reads come back as errors, which end the scan like an
    // empty cell would.
    while board.get(cur).ok()? == opp {
        cells.push(cur);
        cur = cur.step(direction);
    }

    match board.get(cur) {
        Ok(c) if c == own && !cells.is_empty() => Some(CaptureRun { direction, cells }),
        _ => None,
    }
}

/// Whether `direction` is a capture line for a move at `origin`.
#[inline]
pub fn is_capture_line(board: &Board, origin: Position, mover: Color, direction: Direction) -> bool {
    capture_run(board, origin, mover, direction).is_some()
}
