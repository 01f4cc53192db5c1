//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (simulation, rendering, input mapping).
//!
//! # Screen Dimensions
//!
//! The playfield is a fixed character grid:
//!
//! - **Width**: 90 columns (indexed 0-89)
//! - **Height**: 28 rows (indexed 0-27), the last row is the ground
//! - **Bird lane**: column 20
//!
//! # Physics Constants
//!
//! Physics run on a fixed tick; all values are per tick:
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `TICK_MS` | 100 | Fixed timestep interval |
//! | `GRAVITY` | 0.5 | Downward acceleration |
//! | `FLAP_STRENGTH` | -1.5 | Velocity set by a flap |
//! | `PIPE_SPEED` | 1 | Leftward pipe drift |
//! | `PIPE_FREQUENCY` | 20 | Ticks between pipe spawns |
//! | `PIPE_GAP_SIZE` | 5 | Rows in a pipe opening |
//!
//! # Examples
//!
//! ```
//! use flappy_ascii_types::{Theme, GAP_HALF_WIDTH, SCREEN_HEIGHT};
//!
//! assert_eq!(Theme::from_str("dark"), Some(Theme::Dark));
//! assert_eq!(Theme::Light.toggled(), Theme::Dark);
//! assert_eq!(Theme::Dark.glyphs().pipe, '║');
//! assert_eq!(GAP_HALF_WIDTH, 2);
//! assert_eq!(SCREEN_HEIGHT, 28);
//! ```

/// Playfield width in columns
pub const SCREEN_WIDTH: u16 = 90;

/// Playfield height in rows (ground included)
pub const SCREEN_HEIGHT: u16 = 28;

/// Fixed timestep interval in milliseconds
pub const TICK_MS: u64 = 100;

/// Downward acceleration applied every tick once the run has started
pub const GRAVITY: f64 = 0.5;

/// Velocity a flap sets (negative is up)
pub const FLAP_STRENGTH: f64 = -1.5;

/// Columns a pipe drifts left per tick
pub const PIPE_SPEED: f64 = 1.0;

/// A new pipe spawns every `PIPE_FREQUENCY` started ticks
pub const PIPE_FREQUENCY: u32 = 20;

/// Height of the opening in a pipe
pub const PIPE_GAP_SIZE: i32 = 5;

/// Rows above and below the gap center that are still open.
///
/// Integer division: a gap of 5 rows is the center plus two rows on each side.
pub const GAP_HALF_WIDTH: i32 = PIPE_GAP_SIZE / 2;

/// Minimum distance between a gap center and the top/bottom of the screen
pub const PIPE_GAP_MARGIN: i32 = 8;

/// The bird's fixed column
pub const BIRD_X: i32 = 20;

/// Per-tick change of the idle hover offset
pub const HOVER_STEP: f64 = 0.1;

/// The idle hover reverses once the offset magnitude exceeds this
pub const HOVER_LIMIT: f64 = 0.5;

/// Upper bound on simultaneously live pipes
pub const MAX_PIPES: usize = 8;

/// Key the high score is persisted under
pub const HIGH_SCORE_KEY: &str = "flappyBirdHighScore";

/// Topmost row the bird may occupy (row 0 holds the score header)
pub const CEILING_Y: f64 = 1.0;

/// Row of the ground; reaching it ends a run
pub const GROUND_Y: f64 = (SCREEN_HEIGHT - 1) as f64;


/// Logical player commands
///
/// These are the only inputs the simulation and driver understand.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    /// Start the run (first use) and give the bird an upward impulse
    Flap,
    /// Begin a new run; only acts once the current run is over
    Restart,
    /// Switch between the light and dark glyph sets
    ToggleTheme,
}

/// Characters used to draw the playfield
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Glyphs {
    pub bird: char,
    pub pipe: char,
    pub ground: char,
    pub empty: char,
}

/// Light glyph set (ASCII)
pub const LIGHT_GLYPHS: Glyphs = Glyphs {
    bird: '@',
    pipe: '|',
    ground: '_',
    empty: ' ',
};

/// Dark glyph set (heavier box-drawing characters)
pub const DARK_GLYPHS: Glyphs = Glyphs {
    bird: '■',
    pipe: '║',
    ground: '═',
    empty: ' ',
};

/// Visual theme
///
/// A theme only selects glyphs and colors; switching it never touches
/// simulation state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// Parse theme from string (case-insensitive)
    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "light" => Some(Theme::Light),
            "dark" => Some(Theme::Dark),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn toggled(&self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn glyphs(&self) -> Glyphs {
        match self {
            Theme::Light => LIGHT_GLYPHS,
            Theme::Dark => DARK_GLYPHS,
        }
    }
}
