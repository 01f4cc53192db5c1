//! Game state module - the fixed-timestep simulation
//!
//! [`GameState`] is the only mutator of a run. It owns the [`RunState`]
//! (bird, pipes, score, counters, flags), the in-memory high score and the
//! gap RNG. Rendering and input code read the state through accessors and
//! feed commands through [`GameState::apply_action`].

use arrayvec::ArrayVec;

use crate::rng::{GapRng, SimpleRng};
use crate::types::{GameAction, BIRD_X, MAX_PIPES, PIPE_FREQUENCY, SCREEN_WIDTH};
use crate::{Bird, Pipe};

/// Everything that changes during a run.
///
/// Fields are public so harnesses can build a scenario directly and hand it
/// to [`GameState::from_parts`].
#[derive(Debug, Clone, PartialEq)]
pub struct RunState {
    pub bird: Bird,
    pub pipes: ArrayVec<Pipe, MAX_PIPES>,
    pub score: u32,
    /// Started ticks since reset; drives pipe spawning.
    pub tick_counter: u32,
    /// False once the bird has crashed.
    pub running: bool,
    /// False until the first flap of the run.
    pub started: bool,
}

impl RunState {
    /// Fresh run: centered bird, no pipes, waiting for the first flap.
    pub fn new() -> Self {
        Self {
            bird: Bird::centered(),
            pipes: ArrayVec::new(),
            score: 0,
            tick_counter: 0,
            running: true,
            started: false,
        }
    }
}

impl Default for RunState {
    fn default() -> Self {
        Self::new()
    }
}

/// Run-level phase derived from the flags
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Waiting for the first flap; the bird hovers
    Idle,
    /// Gravity, pipes and scoring are live
    Active,
    /// Crashed; nothing moves until a restart
    Over,
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState<R = SimpleRng> {
    run: RunState,
    high_score: u32,
    rng: R,
}

impl GameState<SimpleRng> {
    /// Create a new game with the given RNG seed
    pub fn new(seed: u32) -> Self {
        Self::with_rng(SimpleRng::new(seed))
    }
}

impl<R: GapRng> GameState<R> {
    pub fn with_rng(rng: R) -> Self {
        Self::from_parts(RunState::new(), 0, rng)
    }

    /// Build a game around an existing run (scenario setup).
    pub fn from_parts(run: RunState, high_score: u32, rng: R) -> Self {
        Self {
            run,
            high_score,
            rng,
        }
    }

    pub fn run(&self) -> &RunState {
        &self.run
    }

    pub fn run_mut(&mut self) -> &mut RunState {
        &mut self.run
    }

    pub fn bird(&self) -> &Bird {
        &self.run.bird
    }

    pub fn pipes(&self) -> &[Pipe] {
        &self.run.pipes
    }

    pub fn score(&self) -> u32 {
        self.run.score
    }

    pub fn high_score(&self) -> u32 {
        self.high_score
    }

    /// Seed the in-memory high score (typically from persistence at startup).
    pub fn set_high_score(&mut self, high_score: u32) {
        self.high_score = high_score;
    }

    pub fn tick_counter(&self) -> u32 {
        self.run.tick_counter
    }

    pub fn running(&self) -> bool {
        self.run.running
    }

    pub fn started(&self) -> bool {
        self.run.started
    }

    pub fn phase(&self) -> Phase {
        if !self.run.running {
            Phase::Over
        } else if self.run.started {
            Phase::Active
        } else {
            Phase::Idle
        }
    }

    /// Begin a new run. The high score is kept.
    pub fn reset(&mut self) {
        self.run = RunState::new();
    }

    /// Apply a player command. Returns whether it changed anything.
    ///
    /// `ToggleTheme` is presentation-only and never touches the run.
    pub fn apply_action(&mut self, action: GameAction) -> bool {
        match action {
            GameAction::Flap => {
                if !self.run.running {
                    return false;
                }
                self.run.started = true;
                self.run.bird.flap();
                true
            }
            GameAction::Restart => {
                if self.run.running {
                    return false;
                }
                self.reset();
                true
            }
            GameAction::ToggleTheme => false,
        }
    }

    /// Advance the world by one fixed step and return whether the run is alive.
    ///
    /// A finished run is left untouched.
    pub fn tick(&mut self) -> bool {
        if !self.run.running {
            return false;
        }

        self.run.bird.update(self.run.started);

        if self.run.started {
            self.run.tick_counter = self.run.tick_counter.wrapping_add(1);
            if self.run.tick_counter % PIPE_FREQUENCY == 0 {
                self.spawn_pipe();
            }

            self.update_pipes();

            if self.run.bird.on_ground() {
                self.run.running = false;
            }
        }

        self.run.running
    }

    /// Compare the final score of a finished run against the high score.
    ///
    /// Returns the new high score when it improved; the caller persists it.
    pub fn record_final_score(&mut self) -> Option<u32> {
        if self.run.running || self.run.score <= self.high_score {
            return None;
        }
        self.high_score = self.run.score;
        Some(self.high_score)
    }

    pub fn spawn_pipe(&mut self) -> bool {
        let pipe = Pipe::new((SCREEN_WIDTH - 1) as f64, &mut self.rng);
        self.run.pipes.try_push(pipe).is_ok()
    }

    fn update_pipes(&mut self) {
        let RunState {
            bird,
            pipes,
            score,
            running,
            ..
        } = &mut self.run;

        pipes.retain(|pipe| {
            pipe.advance();

            if !pipe.passed && pipe.x < BIRD_X as f64 {
                pipe.passed = true;
                *score += 1;
            }

            if pipe.collides_with(bird) {
                *running = false;
            }

            !pipe.is_offscreen()
        });
    }
}
