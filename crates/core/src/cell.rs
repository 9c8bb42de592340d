//! Cell module - unit squares and their stable identifiers

use std::fmt;

use crate::types::{Colour, CELL_HEIGHT, CELL_WIDTH};

/// Stable identity of a cell
///
/// Renders as `"{generation}_{row}{col}"`, where `generation` is the id of the
/// piece that spawned the cell and `(row, col)` its entry in the spawn matrix.
/// Rotation reassigns ids positionally, so after a turn only the pivot
/// (`_11`) is guaranteed to sit at its original matrix entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CellId {
    pub generation: u32,
    pub row: u8,
    pub col: u8,
}

impl CellId {
    pub fn new(generation: u32, row: u8, col: u8) -> Self {
        Self {
            generation,
            row,
            col,
        }
    }

    /// The centre entry of a 3x3 shape, which rotation keeps in place
    pub fn is_pivot(&self) -> bool {
        self.row == 1 && self.col == 1
    }
}

impl fmt::Display for CellId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}_{}{}", self.generation, self.row, self.col)
    }
}

/// A single board square in pixel coordinates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Cell {
    pub id: CellId,
    pub x: i32,
    pub y: i32,
    pub colour: Colour,
}

impl Cell {
    pub fn translated(self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
            ..self
        }
    }

    /// Grid column (floor division, so cells left of the board are negative)
    pub fn column(&self) -> i32 {
        self.x.div_euclid(CELL_WIDTH)
    }

    /// Grid row (negative above the visible board)
    pub fn row(&self) -> i32 {
        self.y.div_euclid(CELL_HEIGHT)
    }

    pub fn same_position(&self, other: &Cell) -> bool {
        self.x == other.x && self.y == other.y
    }
}
