//! Persistence for the one value that outlives a run: the high score.
//!
//! [`KeyValueStore`] is the collaborator seam (string keys, string values).
//! [`MemoryStore`] backs tests and the no-disk fallback, [`FileStore`] keeps a
//! small JSON file in the platform data directory. [`HighScoreStore`] layers
//! the parse/format rules for the high score on top of either.

pub mod file;
pub mod high_score;

use std::collections::HashMap;
use std::io;

pub use flappy_ascii_types as types;

pub use file::FileStore;
pub use high_score::HighScoreStore;

/// String key-value persistence
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;

    /// Persist `value` under `key`. Writes are synchronous.
    fn set(&mut self, key: &str, value: &str) -> io::Result<()>;
}

/// In-memory store
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_entry(mut self, key: &str, value: &str) -> Self {
        self.entries.insert(key.to_string(), value.to_string());
        self
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> io::Result<()> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for Box<S> {
    fn get(&self, key: &str) -> Option<String> {
        (**self).get(key)
    }

    fn set(&mut self, key: &str, value: &str) -> io::Result<()> {
        (**self).set(key, value)
    }
}
