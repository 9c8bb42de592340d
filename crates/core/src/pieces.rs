//! Pieces module - the seven catalog shapes and piece construction
//!
//! Shapes are occupancy matrices in spawn orientation. A new piece is laid
//! out with column 0 of its matrix at the horizontal centre of the board and
//! row 1 on the top visible row, so most pieces enter partly above the board.

use crate::cell::{Cell, CellId};
use crate::geometry::{reverse, rotate_ccw, rotate_cw, Shape};
use crate::types::{Colour, PieceKind, CELL_HEIGHT, CELL_WIDTH, SPAWN_X};

pub const O_SHAPE: Shape = Shape::from_rows([[1, 1], [1, 1]]);

pub const T_SHAPE: Shape = Shape::from_rows([[0, 1, 0], [1, 1, 1], [0, 0, 0]]);

pub const Z_SHAPE: Shape = Shape::from_rows([[1, 1, 0], [0, 1, 1], [0, 0, 0]]);

pub const S_SHAPE: Shape = Shape::from_rows([[0, 1, 1], [1, 1, 0], [0, 0, 0]]);

pub const J_SHAPE: Shape = Shape::from_rows([[1, 0, 0], [1, 1, 1], [0, 0, 0]]);

pub const L_SHAPE: Shape = Shape::from_rows([[0, 0, 1], [1, 1, 1], [0, 0, 0]]);

pub const I_SHAPE: Shape = Shape::from_rows([
    [0, 0, 0, 0],
    [1, 1, 1, 1],
    [0, 0, 0, 0],
    [0, 0, 0, 0],
]);

/// Spawn-orientation matrix for a piece kind
pub fn shape_of(kind: PieceKind) -> Shape {
    match kind {
        PieceKind::O => O_SHAPE,
        PieceKind::T => T_SHAPE,
        PieceKind::Z => Z_SHAPE,
        PieceKind::S => S_SHAPE,
        PieceKind::J => J_SHAPE,
        PieceKind::L => L_SHAPE,
        PieceKind::I => I_SHAPE,
    }
}

/// Colour paired with a piece kind (same catalog index)
pub fn colour_of(kind: PieceKind) -> Colour {
    match kind {
        PieceKind::O => Colour::Red,
        PieceKind::T => Colour::Blue,
        PieceKind::Z => Colour::Green,
        PieceKind::S => Colour::Pink,
        PieceKind::J => Colour::Yellow,
        PieceKind::L => Colour::Aqua,
        PieceKind::I => Colour::White,
    }
}

/// Pixel position of matrix entry (row, col) for a freshly spawned piece
pub fn spawn_position(row: usize, col: usize) -> (i32, i32) {
    (
        SPAWN_X + CELL_WIDTH * col as i32,
        CELL_HEIGHT * row as i32 - CELL_HEIGHT,
    )
}

/// Lay out one cell per occupied matrix entry, grouped by matrix row
///
/// Empty entries produce no cell, so a row may be empty.
pub fn create_piece(generation: u32, shape: &Shape, colour: Colour) -> Vec<Vec<Cell>> {
    (0..shape.size())
        .map(|row| {
            (0..shape.size())
                .filter(|&col| shape.get(row, col))
                .map(|col| {
                    let (x, y) = spawn_position(row, col);
                    Cell {
                        id: CellId::new(generation, row as u8, col as u8),
                        x,
                        y,
                        colour,
                    }
                })
                .collect()
        })
        .collect()
}

/// Concatenate the rows produced by [`create_piece`]
pub fn flatten(rows: Vec<Vec<Cell>>) -> Vec<Cell> {
    rows.into_iter().flatten().collect()
}

/// The square piece never rotates
pub fn is_square(shape: &Shape) -> bool {
    *shape == O_SHAPE
}

/// Any of the four orientations of the long piece
pub fn is_long(shape: &Shape) -> bool {
    *shape == I_SHAPE
        || *shape == rotate_cw(&I_SHAPE)
        || *shape == reverse(&I_SHAPE)
        || *shape == rotate_ccw(&I_SHAPE)
}
