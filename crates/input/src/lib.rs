//! Terminal input module (engine-facing).
//!
//! This module is intentionally independent of any UI framework. It maps
//! `crossterm` key events into [`crate::types::GameAction`]s. Keys without a
//! mapping are ignored.

pub mod map;

pub use flappy_ascii_types as types;

pub use map::{handle_key_event, should_quit};
