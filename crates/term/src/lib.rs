//! Terminal "game renderer" module.
//!
//! A small, game-oriented rendering layer for terminal play. It renders into
//! a plain framebuffer that is flushed to the terminal as a diff.
//!
//! Goals:
//! - Keep `core` deterministic and free of I/O
//! - Control the aspect ratio (two columns per board cell by default)
//! - Flush only what changed between frames

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use pixel_tetris_core as core;
pub use pixel_tetris_types as types;

pub use fb::{FrameBuffer, Glyph, GlyphStyle, Rgb};
pub use game_view::{AnchorY, GameView, Viewport};
pub use renderer::{encode_frame, TerminalRenderer};
