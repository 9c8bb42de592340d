//! Board module - occupancy grid derived from cells
//!
//! The game state keeps settled cells as a list (each cell carries its own
//! identity), but row-fill counting and rendering want a grid. `Board` is a
//! throwaway 10x20 index built from any set of cells. Cells outside the
//! visible board (above the top edge while spawning) are skipped.
//! Coordinates are grid units: (column, row), row 0 at the top.

use crate::cell::Cell;
use crate::types::{Colour, GRID_HEIGHT, GRID_WIDTH};

/// Total number of cells on the board
const BOARD_SIZE: usize = (GRID_WIDTH * GRID_HEIGHT) as usize;

/// Flat row-major grid of optional colours
#[derive(Debug, Clone, PartialEq)]
pub struct Board {
    cells: [Option<Colour>; BOARD_SIZE],
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Self {
            cells: [None; BOARD_SIZE],
        }
    }

    /// Index every cell that lies on the board
    pub fn from_cells<'a>(cells: impl IntoIterator<Item = &'a Cell>) -> Self {
        let mut board = Self::new();
        for cell in cells {
            board.set(cell.column(), cell.row(), Some(cell.colour));
        }
        board
    }

    #[inline(always)]
    fn index(col: i32, row: i32) -> Option<usize> {
        if col < 0 || col >= GRID_WIDTH || row < 0 || row >= GRID_HEIGHT {
            return None;
        }
        Some((row * GRID_WIDTH + col) as usize)
    }

    /// Cell at (col, row); `None` when out of bounds
    pub fn get(&self, col: i32, row: i32) -> Option<Option<Colour>> {
        Self::index(col, row).map(|idx| self.cells[idx])
    }

    /// Returns false if out of bounds
    pub fn set(&mut self, col: i32, row: i32, colour: Option<Colour>) -> bool {
        match Self::index(col, row) {
            Some(idx) => {
                self.cells[idx] = colour;
                true
            }
            None => false,
        }
    }

    pub fn is_occupied(&self, col: i32, row: i32) -> bool {
        matches!(self.get(col, row), Some(Some(_)))
    }

    /// Number of filled cells in a row (0 for rows off the board)
    pub fn row_count(&self, row: i32) -> usize {
        if row < 0 || row >= GRID_HEIGHT {
            return 0;
        }
        let start = (row * GRID_WIDTH) as usize;
        let end = start + GRID_WIDTH as usize;
        self.cells[start..end].iter().filter(|c| c.is_some()).count()
    }

    /// A row is full when every column holds a cell
    pub fn is_row_full(&self, row: i32) -> bool {
        self.row_count(row) == GRID_WIDTH as usize
    }

    /// Total number of filled cells
    pub fn filled(&self) -> usize {
        self.cells.iter().filter(|c| c.is_some()).count()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
