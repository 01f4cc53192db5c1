//! Terminal Flappy ASCII runner (default binary).
//!
//! Crossterm supplies keys and the screen; the engine's `Driver` owns the game.
//! Configuration comes from `FLAPPY_ASCII_*` environment variables.

use std::fs::File;
use std::path::Path;
use std::sync::Mutex;
use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::event::{self, Event};
use tracing_subscriber::filter::EnvFilter;

use flappy_ascii::config::Config;
use flappy_ascii::core::GameState;
use flappy_ascii::engine::{Driver, FrameOutcome};
use flappy_ascii::input::{handle_key_event, should_quit};
use flappy_ascii::store::{FileStore, HighScoreStore, MemoryStore};
use flappy_ascii::term::{TerminalRenderer, Viewport};

/// Poll interval while the run is over and only keys matter.
const HALTED_POLL: Duration = Duration::from_millis(250);

fn main() -> Result<()> {
    let config = Config::from_env();
    init_logging(&config);

    let scores = open_scores(&config);
    let game = GameState::new(config.seed_or_clock());
    let mut driver = Driver::new(game, scores, config.theme);

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut driver, &mut term);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn run(driver: &mut Driver, term: &mut TerminalRenderer) -> Result<()> {
    let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
    driver.set_viewport(Viewport::new(w, h));
    driver.render(Some(&mut *term));

    let start = Instant::now();
    let now_ms = || start.elapsed().as_millis() as u64;

    loop {
        let timeout = if driver.armed() {
            Duration::from_millis(driver.pacer().ms_until_next(now_ms()))
        } else {
            HALTED_POLL
        };

        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) => {
                    if should_quit(key) {
                        return Ok(());
                    }
                    if let Some(action) = handle_key_event(key) {
                        driver.handle_action(action, Some(&mut *term));
                    }
                }
                Event::Resize(w, h) => {
                    driver.set_viewport(Viewport::new(w, h));
                    term.invalidate();
                    driver.render(Some(&mut *term));
                }
                _ => {}
            }
        }

        if driver.frame(now_ms(), Some(&mut *term)) == FrameOutcome::GameOver {
            tracing::info!("final score {}", driver.game().score());
        }
    }
}

fn open_scores(config: &Config) -> HighScoreStore {
    let opened = match &config.data_dir {
        Some(dir) => FileStore::open_in(dir),
        None => FileStore::open_default(),
    };
    match opened {
        Ok(store) => {
            tracing::info!("high score store at {}", store.path().display());
            HighScoreStore::new(store)
        }
        Err(e) => {
            tracing::warn!("high score will not persist: {}", e);
            HighScoreStore::new(MemoryStore::new())
        }
    }
}

/// Log to a file when configured; the terminal belongs to the game.
fn init_logging(config: &Config) {
    let Some(path) = &config.log_file else {
        return;
    };
    let Some(file) = open_log_file(path) else {
        return;
    };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into()))
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();
}

/// The terminal is still in cooked mode here, so a failure goes to stderr.
fn open_log_file(path: &Path) -> Option<File> {
    match File::create(path) {
        Ok(file) => Some(file),
        Err(e) => {
            eprintln!("flappy-ascii: cannot open log file {}: {e}; logging disabled", path.display());
            None
        }
    }
}
