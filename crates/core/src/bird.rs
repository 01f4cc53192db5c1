//! Bird module - the player-controlled avatar
//!
//! The bird lives in a fixed lane and only moves vertically. Before a run has
//! started it hovers around mid-screen; afterwards gravity and flaps apply.

use crate::types::{
    BIRD_X, CEILING_Y, FLAP_STRENGTH, GRAVITY, GROUND_Y, HOVER_LIMIT, HOVER_STEP, SCREEN_HEIGHT,
};

/// The player's bird
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bird {
    y: f64,
    velocity: f64,
    animation_offset: f64,
    animation_direction: f64,
}

impl Bird {
    /// Create a bird at `y`, clamped into `[1, SCREEN_HEIGHT - 2]`.
    pub fn new(y: f64) -> Self {
        let y = if y.is_nan() {
            hover_center()
        } else {
            y.clamp(CEILING_Y, GROUND_Y - 1.0)
        };
        Self {
            y,
            velocity: 0.0,
            animation_offset: 0.0,
            animation_direction: HOVER_STEP,
        }
    }

    /// A bird centered vertically, as placed at the start of every run.
    pub fn centered() -> Self {
        Self::new(hover_center())
    }

    /// Same bird with a different velocity (for setting up scenarios).
    pub fn with_velocity(mut self, velocity: f64) -> Self {
        self.velocity = velocity;
        self
    }

    pub fn x(&self) -> i32 {
        BIRD_X
    }

    pub fn y(&self) -> f64 {
        self.y
    }

    /// Row the bird occupies on the grid (floor of `y`).
    pub fn row(&self) -> i32 {
        self.y.floor() as i32
    }

    pub fn velocity(&self) -> f64 {
        self.velocity
    }

    pub fn animation_offset(&self) -> f64 {
        self.animation_offset
    }

    /// Upward impulse. Replaces the current velocity, never adds to it.
    pub fn flap(&mut self) {
        self.velocity = FLAP_STRENGTH;
    }

    /// Advance one tick.
    pub fn update(&mut self, started: bool) {
        if started {
            self.velocity += GRAVITY;
            self.y += self.velocity;

            // Ceiling and ground absorb momentum.
            if self.y < CEILING_Y {
                self.y = CEILING_Y;
                self.velocity = 0.0;
            }
            if self.y >= GROUND_Y {
                self.y = GROUND_Y;
                self.velocity = 0.0;
            }
        } else {
            self.animation_offset += self.animation_direction;
            if self.animation_offset.abs() > HOVER_LIMIT {
                self.animation_direction = -self.animation_direction;
            }
            self.y = hover_center() + self.animation_offset;
        }
    }

    /// True once the bird rests on the ground row.
    pub fn on_ground(&self) -> bool {
        self.y >= GROUND_Y
    }
}

impl Default for Bird {
    fn default() -> Self {
        Self::centered()
    }
}

fn hover_center() -> f64 {
    (SCREEN_HEIGHT / 2) as f64
}
