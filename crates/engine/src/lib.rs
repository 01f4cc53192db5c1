//! Driver loop pieces.
//!
//! [`TickPacer`] decides when a fixed tick is due; [`Driver`] runs the tick,
//! forwards player commands, keeps the high score store up to date and hands
//! frames to a render sink. Both are host-agnostic: the caller supplies the
//! clock (`now_ms`) and the sink, so the terminal binary and tests drive them
//! the same way.

pub mod driver;
pub mod pacer;

pub use flappy_ascii_core as core;
pub use flappy_ascii_store as store;
pub use flappy_ascii_term as term;
pub use flappy_ascii_types as types;

pub use driver::{Driver, FrameOutcome};
pub use pacer::TickPacer;
