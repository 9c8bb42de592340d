//! Rotation module - quarter turns of the active piece
//!
//! Three cases:
//!
//! - the square piece never turns
//! - the long piece turns inside its 4x4 bounding box; the box origin is
//!   recovered from the occupied line (row `k` when horizontal, column `k`
//!   when vertical) and the piece's top-left cell
//! - every 3x3 piece turns around its centre cell (id `_11`), which keeps
//!   both its position and its id
//!
//! The rotated piece has its pending offset baked in. Whether it may replace
//! the current piece is decided by the reducer.

use crate::cell::Cell;
use crate::game_state::Tetromino;
use crate::geometry::{rotate_ccw, rotate_cw, Shape};
use crate::pieces::{is_long, is_square};
use crate::types::{CELL_HEIGHT, CELL_WIDTH};

/// Turn a piece one quarter clockwise or counter-clockwise
pub fn rotate(piece: &Tetromino, clockwise: bool) -> Tetromino {
    if is_square(&piece.shape) {
        return piece.clone();
    }

    let shape = if clockwise {
        rotate_cw(&piece.shape)
    } else {
        rotate_ccw(&piece.shape)
    };
    let current: Vec<Cell> = piece.absolute_cells().collect();

    let cells = if is_long(&piece.shape) {
        rotate_long(piece, &current, &shape)
    } else {
        match rotate_around_pivot(piece, &current, &shape) {
            Some(cells) => cells,
            None => return piece.clone(),
        }
    };

    Tetromino {
        cells,
        shape,
        offset_x: 0,
        offset_y: 0,
        ..piece.clone()
    }
}

/// Lay out `shape` with its (0, 0) entry at `origin`, row-major
fn place(
    shape: &Shape,
    origin: (i32, i32),
) -> impl Iterator<Item = (usize, usize, i32, i32)> + '_ {
    shape.occupied().map(move |(r, c)| {
        (
            r,
            c,
            origin.0 + CELL_WIDTH * c as i32,
            origin.1 + CELL_HEIGHT * r as i32,
        )
    })
}

/// Index of the occupied line of a long shape and whether it is a row
fn occupied_line(shape: &Shape) -> (usize, bool) {
    let size = shape.size();
    for k in 0..size {
        if (0..size).all(|c| shape.get(k, c)) {
            return (k, true);
        }
        if (0..size).all(|r| shape.get(r, k)) {
            return (k, false);
        }
    }
    (0, true)
}

fn rotate_long(piece: &Tetromino, current: &[Cell], shape: &Shape) -> Vec<Cell> {
    let min_x = current.iter().map(|c| c.x).min().unwrap_or(0);
    let min_y = current.iter().map(|c| c.y).min().unwrap_or(0);
    let k = occupied_line(&piece.shape);
    let origin = match k {
        (k, true) => (min_x, min_y - CELL_HEIGHT * k as i32),
        (k, false) => (min_x - CELL_WIDTH * k as i32, min_y),
    };

    // Ids follow the cell order, not the matrix entry
    place(shape, origin)
        .zip(current.iter())
        .map(|((_, _, x, y), old)| Cell {
            id: old.id,
            x,
            y,
            colour: piece.colour,
        })
        .collect()
}

fn rotate_around_pivot(
    piece: &Tetromino,
    current: &[Cell],
    shape: &Shape,
) -> Option<Vec<Cell>> {
    let pivot = current.iter().find(|c| c.id.is_pivot())?;
    let origin = (pivot.x - CELL_WIDTH, pivot.y - CELL_HEIGHT);
    let others = current.iter().filter(|c| !c.id.is_pivot());

    let mut cells: Vec<Cell> = place(shape, origin)
        .filter(|&(r, c, _, _)| (r, c) != (1, 1))
        .zip(others)
        .map(|((_, _, x, y), old)| Cell {
            id: old.id,
            x,
            y,
            colour: piece.colour,
        })
        .collect();
    cells.push(*pivot);
    Some(cells)
}
