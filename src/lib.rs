//! Pixel Tetris (workspace facade crate).
//!
//! Re-exports the member crates as `pixel_tetris::{core,input,term,types}` and
//! holds the pieces shared by the two binaries: environment configuration and
//! the session summary printed by the replay tool.

pub mod config;
pub mod summary;

pub use pixel_tetris_core as core;
pub use pixel_tetris_input as input;
pub use pixel_tetris_term as term;
pub use pixel_tetris_types as types;
