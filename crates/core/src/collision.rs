//! Collision module - boundary and settled-cell checks for the active piece
//!
//! All checks look at the active piece with its pending offset applied.
//! Horizontal checks use the `x` axis; every other axis (including the two
//! rotation axes) is checked vertically, which for rotations means "is the
//! piece resting on something".

use crate::cell::Cell;
use crate::game_state::GameState;
use crate::types::{Axis, CANVAS_HEIGHT, CANVAS_WIDTH, CELL_HEIGHT, CELL_WIDTH};

/// Largest x a cell may occupy
const MAX_X: i32 = CANVAS_WIDTH - CELL_WIDTH;
/// Largest y a cell may occupy
const MAX_Y: i32 = CANVAS_HEIGHT - CELL_HEIGHT;

/// Whether moving the active piece by `delta` along `axis` leaves the board
///
/// There is no ceiling: pieces spawn partly above the board.
pub fn hits_boundary(state: &GameState, axis: Axis, delta: i32) -> bool {
    state.active.absolute_cells().any(|c| match axis {
        Axis::X => {
            let x = c.x + delta;
            x < 0 || x > MAX_X
        }
        _ => c.y + delta > MAX_Y,
    })
}

/// Whether a settled cell is directly in the way of the active piece
///
/// Horizontally: a settled cell on the same row exactly one cell away in the
/// direction of `delta` (a zero delta never collides). Otherwise: a settled
/// cell in the same column exactly one cell below, regardless of `delta`.
pub fn collides_with_settled(state: &GameState, axis: Axis, delta: i32) -> bool {
    state.active.absolute_cells().any(|cur| {
        state.previous.iter().any(|prev| match axis {
            Axis::X => {
                prev.y == cur.y
                    && ((delta > 0 && prev.x == cur.x + CELL_WIDTH)
                        || (delta < 0 && prev.x == cur.x - CELL_WIDTH))
            }
            _ => prev.x == cur.x && prev.y == cur.y + CELL_HEIGHT,
        })
    })
}

pub fn is_blocked(state: &GameState, axis: Axis, delta: i32) -> bool {
    hits_boundary(state, axis, delta) || collides_with_settled(state, axis, delta)
}

/// Whether a set of cells lies inside the side walls and floor without
/// overlapping any settled cell
pub fn fits(cells: &[Cell], settled: &[Cell]) -> bool {
    cells.iter().all(|c| {
        (0..=MAX_X).contains(&c.x)
            && c.y <= MAX_Y
            && !settled.iter().any(|s| s.same_position(c))
    })
}
