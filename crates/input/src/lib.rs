//! Terminal input module (reducer-facing).
//!
//! This crate is independent of any UI framework. It maps `crossterm` key
//! events into [`crate::types::Action`]s, provides the fixed-interval tick
//! source, and records or reloads the merged action stream so a session can
//! be replayed headlessly.

pub mod clock;
pub mod map;
pub mod record;

pub use pixel_tetris_types as types;

pub use clock::{TickClock, MAX_CATCH_UP};
pub use map::{handle_key_event, should_quit};
pub use record::{read_replay, ActionRecorder, RecordingHeader, Replay};
