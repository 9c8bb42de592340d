//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are plain data, shared by the reducer, the renderer, the input
//! layer and the action recorder.
//!
//! # Board Geometry
//!
//! Positions are measured in canvas pixels, not grid indices:
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `CANVAS_WIDTH` | 200 | Play-field width in pixels |
//! | `CANVAS_HEIGHT` | 400 | Play-field height in pixels |
//! | `GRID_WIDTH` | 10 | Columns |
//! | `GRID_HEIGHT` | 20 | Rows |
//! | `CELL_WIDTH` | 20 | Pixel width of one cell |
//! | `CELL_HEIGHT` | 20 | Pixel height of one cell |
//!
//! # Timing
//!
//! The tick source fires every `TICK_MS` (10ms). The reducer only moves the
//! active piece down on ticks where `count % max(1, GRAVITY_TICKS / level) == 0`,
//! so level 1 falls one row per second.
//!
//! # Examples
//!
//! ```
//! use pixel_tetris_types::{Action, Axis, Change, PieceKind, CELL_WIDTH, GRID_WIDTH};
//!
//! let left = Change::left();
//! assert_eq!(left.axis, Axis::X);
//! assert_eq!(left.amount, -CELL_WIDTH);
//!
//! assert_eq!(Action::restart(), Action::Move(None));
//! assert_eq!(PieceKind::ALL[6], PieceKind::I);
//! assert_eq!(GRID_WIDTH, 10);
//! ```

use serde::{Deserialize, Serialize};

/// Play-field width in pixels
pub const CANVAS_WIDTH: i32 = 200;

/// Play-field height in pixels
pub const CANVAS_HEIGHT: i32 = 400;

/// Board width in cells (10 columns)
pub const GRID_WIDTH: i32 = 10;

/// Board height in cells (20 rows)
pub const GRID_HEIGHT: i32 = 20;

/// Pixel width of one cell
pub const CELL_WIDTH: i32 = CANVAS_WIDTH / GRID_WIDTH;

/// Pixel height of one cell
pub const CELL_HEIGHT: i32 = CANVAS_HEIGHT / GRID_HEIGHT;

/// Horizontal pixel position of column 0 of a freshly spawned shape matrix
pub const SPAWN_X: i32 = CANVAS_WIDTH / 2;

/// Offset of the next piece inside the preview area (never baked into its cells)
pub const PREVIEW_OFFSET: (i32, i32) = (CELL_WIDTH * 2, CELL_HEIGHT);

/// Nominal game rate in milliseconds
pub const TICK_RATE_MS: u64 = 500;

/// Number of ticks the nominal rate is divided into
pub const TICKS_PER_RATE: u64 = 50;

/// Interval between two ticks (10ms)
pub const TICK_MS: u64 = TICK_RATE_MS / TICKS_PER_RATE;

/// Gravity divisor: the active piece falls every `max(1, GRAVITY_TICKS / level)` ticks
pub const GRAVITY_TICKS: u64 = 100;

/// Score needed per level: level `n` advances once the score reaches `n * 50`
pub const LEVEL_SCORE_STEP: u32 = 50;

/// Seed of the deterministic piece sequence
pub const DEFAULT_SEED: u32 = 17;

/// The seven tetromino piece kinds, in catalog order
///
/// The order matters: the random sequence yields an index in `0..=6`
/// which selects both the shape and the colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PieceKind {
    O,
    T,
    Z,
    S,
    J,
    L,
    I,
}

impl PieceKind {
    /// All kinds in catalog order
    pub const ALL: [PieceKind; 7] = [
        PieceKind::O,
        PieceKind::T,
        PieceKind::Z,
        PieceKind::S,
        PieceKind::J,
        PieceKind::L,
        PieceKind::I,
    ];
}

/// Colour tag carried by every cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Colour {
    Red,
    Blue,
    Green,
    Pink,
    Yellow,
    Aqua,
    White,
}

/// Axis of a requested change
///
/// `X` and `Y` translate the active piece, `Cw` and `Ccw` rotate it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Axis {
    X,
    Y,
    Cw,
    Ccw,
}

/// A translation or rotation request
///
/// `amount` is the pixel delta for translations and is ignored for rotations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Change {
    pub axis: Axis,
    pub amount: i32,
}

impl Change {
    pub fn new(axis: Axis, amount: i32) -> Self {
        Self { axis, amount }
    }

    /// One cell to the left
    pub fn left() -> Self {
        Self::new(Axis::X, -CELL_WIDTH)
    }

    /// One cell to the right
    pub fn right() -> Self {
        Self::new(Axis::X, CELL_WIDTH)
    }

    /// One cell down (soft drop and gravity)
    pub fn down() -> Self {
        Self::new(Axis::Y, CELL_HEIGHT)
    }

    pub fn rotate_cw() -> Self {
        Self::new(Axis::Cw, 0)
    }

    pub fn rotate_ccw() -> Self {
        Self::new(Axis::Ccw, 0)
    }
}

/// Events consumed by the reducer, strictly one at a time
///
/// Serialized as `{"move":{"axis":"x","amount":-20}}`, `{"move":null}`
/// (restart) or `{"tick":42}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Action {
    /// Player input; `None` requests a restart
    Move(Option<Change>),
    /// Timer tick with a monotonically increasing counter
    Tick(u64),
}

impl Action {
    pub fn restart() -> Self {
        Action::Move(None)
    }

    pub fn is_tick(&self) -> bool {
        matches!(self, Action::Tick(_))
    }
}
