//! Pipe module - obstacles with a vertical gap
//!
//! A pipe drifts left one column per tick. The bird collides with it when it
//! sits in the pipe's column but outside the open rows.

use crate::rng::GapRng;
use crate::types::{GAP_HALF_WIDTH, PIPE_GAP_MARGIN, PIPE_SPEED, SCREEN_HEIGHT};
use crate::Bird;

/// One obstacle
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pipe {
    /// Horizontal position (fractional, decreasing)
    pub x: f64,
    /// Row at the center of the opening
    pub gap_y: i32,
    /// Set once the pipe has moved past the bird's lane
    pub passed: bool,
}

impl Pipe {
    /// Spawn a pipe at `x` with a gap center drawn from
    /// `[PIPE_GAP_MARGIN, SCREEN_HEIGHT - PIPE_GAP_MARGIN]`.
    pub fn new<R: GapRng + ?Sized>(x: f64, rng: &mut R) -> Self {
        let gap_y = rng.range_inclusive(min_gap_y(), max_gap_y());
        Self::with_gap(x, gap_y)
    }

    /// Pipe with an explicit gap center.
    pub fn with_gap(x: f64, gap_y: i32) -> Self {
        Self {
            x,
            gap_y,
            passed: false,
        }
    }

    pub fn advance(&mut self) {
        self.x -= PIPE_SPEED;
    }

    /// Column the pipe occupies on the grid (floor of `x`).
    pub fn column(&self) -> i32 {
        self.x.floor() as i32
    }

    /// Whether row `y` is part of the pipe body (outside the gap).
    ///
    /// The rows `gap_y - GAP_HALF_WIDTH` and `gap_y + GAP_HALF_WIDTH` are open.
    pub fn blocks_row(&self, y: i32) -> bool {
        y < self.gap_y - GAP_HALF_WIDTH || y > self.gap_y + GAP_HALF_WIDTH
    }

    pub fn collides_with(&self, bird: &Bird) -> bool {
        self.column() == bird.x() && self.blocks_row(bird.row())
    }

    pub fn is_offscreen(&self) -> bool {
        self.x < 0.0
    }
}

pub fn min_gap_y() -> i32 {
    PIPE_GAP_MARGIN
}

pub fn max_gap_y() -> i32 {
    SCREEN_HEIGHT as i32 - PIPE_GAP_MARGIN
}
