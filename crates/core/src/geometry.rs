//! Geometry module - square occupancy matrices
//!
//! Every catalog shape is a square boolean matrix (2x2, 3x3 or 4x4).
//! Rotation is expressed with two primitive operations:
//!
//! - clockwise: `transpose(reverse(m))`
//! - counter-clockwise: `reverse(transpose(m))`
//!
//! Matrices are stored in a fixed 4x4 array so they stay `Copy`; entries
//! outside `size` are always `false`, which keeps derived equality structural.

/// Largest matrix edge used by the catalog (the long piece)
pub const MAX_SHAPE_SIZE: usize = 4;

/// Square occupancy matrix
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Shape {
    size: usize,
    rows: [[bool; MAX_SHAPE_SIZE]; MAX_SHAPE_SIZE],
}

impl Shape {
    /// Build a shape from `0`/`1` rows
    pub const fn from_rows<const N: usize>(rows: [[u8; N]; N]) -> Self {
        assert!(N <= MAX_SHAPE_SIZE, "shape larger than 4x4");
        let mut out = [[false; MAX_SHAPE_SIZE]; MAX_SHAPE_SIZE];
        let mut r = 0;
        while r < N {
            let mut c = 0;
            while c < N {
                out[r][c] = rows[r][c] != 0;
                c += 1;
            }
            r += 1;
        }
        Self { size: N, rows: out }
    }

    /// Edge length of the matrix
    pub fn size(&self) -> usize {
        self.size
    }

    /// Occupancy at (row, col); out-of-range entries are empty
    pub fn get(&self, row: usize, col: usize) -> bool {
        row < self.size && col < self.size && self.rows[row][col]
    }

    /// Occupied entries as (row, col), row-major
    pub fn occupied(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        (0..self.size).flat_map(move |r| {
            (0..self.size).filter_map(move |c| self.rows[r][c].then_some((r, c)))
        })
    }

    /// Number of occupied entries
    pub fn count(&self) -> usize {
        self.occupied().count()
    }
}

/// Mirror the matrix along its main diagonal
pub fn transpose(m: &Shape) -> Shape {
    let mut out = Shape {
        size: m.size,
        rows: [[false; MAX_SHAPE_SIZE]; MAX_SHAPE_SIZE],
    };
    for r in 0..m.size {
        for c in 0..m.size {
            out.rows[c][r] = m.rows[r][c];
        }
    }
    out
}

/// Reverse the order of the rows (upside-down flip)
pub fn reverse(m: &Shape) -> Shape {
    let mut out = Shape {
        size: m.size,
        rows: [[false; MAX_SHAPE_SIZE]; MAX_SHAPE_SIZE],
    };
    for r in 0..m.size {
        out.rows[r] = m.rows[m.size - 1 - r];
    }
    out
}

/// Quarter turn clockwise
pub fn rotate_cw(m: &Shape) -> Shape {
    transpose(&reverse(m))
}

/// Quarter turn counter-clockwise
pub fn rotate_ccw(m: &Shape) -> Shape {
    reverse(&transpose(m))
}
