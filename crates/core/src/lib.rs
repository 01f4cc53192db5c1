//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains the simulation of one flappy-bird run: the bird's
//! physics, pipe spawning/advancing/retiring, collisions and scoring.
//! It has **zero dependencies** on rendering, terminals or persistence, making it:
//!
//! - **Deterministic**: the same seed (or scripted [`SequenceRng`]) replays the same run
//! - **Testable**: scenarios are plain [`RunState`] values injected into a [`GameState`]
//! - **Portable**: the driver, renderer and store are external collaborators
//!
//! # Module Structure
//!
//! - [`bird`]: vertical physics, flap impulse, idle hover
//! - [`pipe`]: obstacle drift, gap test, off-screen test
//! - [`game_state`]: run state, fixed tick, collision and score bookkeeping
//! - [`rng`]: injectable gap RNG
//!
//! # Example
//!
//! ```
//! use flappy_ascii_core::GameState;
//! use flappy_ascii_types::GameAction;
//!
//! let mut game = GameState::new(12345);
//! assert!(!game.started());
//!
//! // The first flap starts the run.
//! game.apply_action(GameAction::Flap);
//! assert!(game.tick());
//! assert!(game.started());
//! ```
//!
//! # Timing
//!
//! One call to [`GameState::tick`] is one fixed step (nominally 100ms). Pacing
//! the calls is the driver's job.

pub mod bird;
pub mod game_state;
pub mod pipe;
pub mod rng;

pub use flappy_ascii_types as types;

// Re-export commonly used types for convenience
pub use bird::Bird;
pub use game_state::{GameState, Phase, RunState};
pub use pipe::Pipe;
pub use rng::{GapRng, SequenceRng, SimpleRng};
