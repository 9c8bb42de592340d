//! Core game logic module - pure, deterministic, and testable
//!
//! This crate contains all the game rules as a single state reducer. It has
//! **zero dependencies** on terminals, timers or I/O, making it:
//!
//! - **Deterministic**: Same seed and same actions produce identical states
//! - **Testable**: Every rule is a pure function of `(&GameState, Action)`
//! - **Portable**: Can run in any environment (terminal, replay tool, benches)
//!
//! # Module Structure
//!
//! - [`geometry`]: square occupancy matrices, transpose/reverse and quarter turns
//! - [`rng`]: linear congruential piece sequence held as a cursor value
//! - [`cell`]: unit squares in pixel coordinates and their stable ids
//! - [`pieces`]: the seven catalog shapes, colours and spawn layout
//! - [`board`]: 10x20 occupancy grid built from cells
//! - [`collision`]: boundary and settled-cell checks
//! - [`rotation`]: square, long and pivot rotation rules
//! - [`scoring`]: points, level progression and gravity pacing
//! - [`game_state`]: the immutable game snapshot, locking and row compaction
//! - [`reducer`]: the `reduce` entry point
//!
//! # Game Rules
//!
//! - The active piece falls one cell every `100 / level` ticks
//! - A piece that cannot move down locks; full rows are removed and every
//!   removed cell scores one point
//! - Removed cells stay visible for one step, then the cells above drop
//! - The level rises by one when the score reaches `50 * level`
//! - The game ends when a piece locks touching the top row
//!
//! # Example
//!
//! ```
//! use pixel_tetris_core::{reduce, GameState};
//! use pixel_tetris_types::{Action, Change};
//!
//! let state = GameState::new(17);
//! let state = reduce(&state, Action::Move(Some(Change::left())));
//! let state = reduce(&state, Action::Tick(100));
//!
//! assert_eq!(state.score(), 0);
//! assert!(!state.is_game_over());
//! ```

pub mod board;
pub mod cell;
pub mod collision;
pub mod game_state;
pub mod geometry;
pub mod pieces;
pub mod reducer;
pub mod rng;
pub mod rotation;
pub mod scoring;

pub use pixel_tetris_types as types;

// Re-export commonly used types for convenience
pub use board::Board;
pub use cell::{Cell, CellId};
pub use game_state::{GameState, Tetromino};
pub use geometry::Shape;
pub use pieces::{colour_of, create_piece, flatten, shape_of};
pub use reducer::reduce;
pub use rng::{hash, piece_index, RandCursor};
