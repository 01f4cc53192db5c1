//! High score persistence on top of a [`KeyValueStore`].

use std::io;

use crate::types::HIGH_SCORE_KEY;
use crate::KeyValueStore;

pub struct HighScoreStore {
    backend: Box<dyn KeyValueStore>,
}

impl HighScoreStore {
    pub fn new(backend: impl KeyValueStore + 'static) -> Self {
        Self {
            backend: Box::new(backend),
        }
    }

    /// Stored high score, or 0 when absent or unparseable.
    pub fn load(&self) -> u32 {
        let Some(raw) = self.backend.get(HIGH_SCORE_KEY) else {
            return 0;
        };
        match raw.trim().parse::<u32>() {
            Ok(score) => score,
            Err(_) => {
                tracing::warn!("ignoring malformed high score {:?}", raw);
                0
            }
        }
    }

    pub fn save(&mut self, score: u32) -> io::Result<()> {
        self.backend.set(HIGH_SCORE_KEY, &score.to_string())
    }

    pub fn backend(&self) -> &dyn KeyValueStore {
        self.backend.as_ref()
    }
}
