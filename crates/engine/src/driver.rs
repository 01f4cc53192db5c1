//! Driver: glue between the clock, the player, the simulation, the store and
//! the screen.
//!
//! The driver owns the [`GameState`] and is the only caller of its mutators.
//! Each frame callback either skips (too early), ticks and renders, or, on the
//! tick that ends a run, records the high score and renders the game-over
//! screen. After that the schedule stays disarmed until a restart.

use crate::core::{GameState, GapRng, SimpleRng};
use crate::store::HighScoreStore;
use crate::term::{FrameBuffer, GameView, RenderSink, Viewport};
use crate::types::{GameAction, Theme, TICK_MS};
use crate::TickPacer;

/// What a frame callback did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameOutcome {
    /// Called before the tick interval elapsed; nothing changed
    Skipped,
    /// One tick ran and the run continues
    Ticked,
    /// One tick ran and ended the run
    GameOver,
    /// The run is over; waiting for a restart
    Halted,
}

pub struct Driver<R = SimpleRng> {
    game: GameState<R>,
    scores: HighScoreStore,
    pacer: TickPacer,
    theme: Theme,
    view: GameView,
    viewport: Viewport,
    fb: FrameBuffer,
    armed: bool,
}

impl<R: GapRng> Driver<R> {
    /// Wrap a game, seeding its high score from the store.
    pub fn new(mut game: GameState<R>, scores: HighScoreStore, theme: Theme) -> Self {
        game.set_high_score(scores.load());
        let armed = game.running();
        let viewport = Viewport::grid();
        Self {
            game,
            scores,
            pacer: TickPacer::new(TICK_MS),
            theme,
            view: GameView::default(),
            viewport,
            fb: FrameBuffer::new(viewport.width, viewport.height),
            armed,
        }
    }

    pub fn with_pacer(mut self, pacer: TickPacer) -> Self {
        self.pacer = pacer;
        self
    }

    pub fn game(&self) -> &GameState<R> {
        &self.game
    }

    pub fn scores(&self) -> &HighScoreStore {
        &self.scores
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn pacer(&self) -> &TickPacer {
        &self.pacer
    }

    /// Whether frame callbacks currently advance the game.
    pub fn armed(&self) -> bool {
        self.armed
    }

    pub fn set_viewport(&mut self, viewport: Viewport) {
        self.viewport = viewport;
    }

    /// One scheduling callback.
    pub fn frame(&mut self, now_ms: u64, sink: Option<&mut dyn RenderSink>) -> FrameOutcome {
        if !self.armed {
            return FrameOutcome::Halted;
        }
        if !self.pacer.should_tick(now_ms) {
            return FrameOutcome::Skipped;
        }

        if self.game.tick() {
            self.render(sink);
            return FrameOutcome::Ticked;
        }

        self.finish_run();
        self.armed = false;
        self.render(sink);
        FrameOutcome::GameOver
    }

    /// Apply a player command. Returns whether it had any effect.
    pub fn handle_action(&mut self, action: GameAction, sink: Option<&mut dyn RenderSink>) -> bool {
        match action {
            GameAction::Flap => self.game.apply_action(action),
            GameAction::Restart => {
                if !self.game.apply_action(action) {
                    return false;
                }
                tracing::info!("run restarted");
                self.armed = true;
                self.render(sink);
                true
            }
            GameAction::ToggleTheme => {
                self.theme = self.theme.toggled();
                tracing::debug!("theme switched to {}", self.theme.as_str());
                self.render(sink);
                true
            }
        }
    }

    /// Render the current state without advancing it.
    pub fn render(&mut self, sink: Option<&mut dyn RenderSink>) {
        let Some(sink) = sink else {
            return;
        };
        self.view
            .render_into(&self.game, self.theme, self.viewport, &mut self.fb);
        if let Err(e) = sink.present(&self.fb) {
            tracing::warn!("frame dropped: {:#}", e);
        }
    }

    /// Record the final score of a finished run and persist an improvement.
    ///
    /// Persistence failures are logged; the in-memory high score still moves.
    pub fn finish_run(&mut self) {
        let score = self.game.score();
        let Some(best) = self.game.record_final_score() else {
            tracing::info!("run over: score={} high_score={}", score, self.game.high_score());
            return;
        };
        tracing::info!("run over: new high score {}", best);
        if let Err(e) = self.scores.save(best) {
            tracing::warn!("could not persist high score {}: {}", best, e);
        }
    }
}
