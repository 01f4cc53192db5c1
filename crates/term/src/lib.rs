//! Terminal "game renderer" module.
//!
//! This is a small, game-oriented rendering layer for terminal gameplay.
//! It renders the playfield into a simple framebuffer that can be flushed to
//! a terminal backend or captured as lines of text.
//!
//! Goals:
//! - Keep `core` deterministic and testable
//! - Take glyphs and colors from a [`Theme`](crate::types::Theme) argument, never from globals
//! - Keep rendering separate from state mutation

pub mod fb;
pub mod game_view;
pub mod renderer;
pub mod sink;

pub use flappy_ascii_core as core;
pub use flappy_ascii_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{AnchorY, GameView, Palette, Viewport};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
pub use sink::{RenderSink, TextSink};
