//! JSON-file backed [`KeyValueStore`].

use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;

use crate::KeyValueStore;

const STORE_FILE: &str = "store.json";

/// Key-value pairs kept as a flat JSON object on disk.
///
/// The whole file is loaded on open and rewritten on every `set`.
#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
    entries: BTreeMap<String, String>,
}

impl FileStore {
    /// Open `store.json` in the platform data directory, creating the
    /// directory if needed.
    pub fn open_default() -> io::Result<Self> {
        let project_dirs = ProjectDirs::from("", "", "flappy-ascii").ok_or_else(|| {
            io::Error::new(io::ErrorKind::NotFound, "Could not determine data directory")
        })?;
        Self::open_in(project_dirs.data_dir())
    }

    /// Open `store.json` inside `dir`, creating the directory if needed.
    pub fn open_in(dir: &Path) -> io::Result<Self> {
        fs::create_dir_all(dir)?;
        Ok(Self::open(dir.join(STORE_FILE)))
    }

    /// Open the store at `path`. A missing or corrupt file opens empty.
    pub fn open(path: PathBuf) -> Self {
        let entries: BTreeMap<String, String> = match fs::read_to_string(&path) {
            Ok(json) => serde_json::from_str(&json).unwrap_or_else(|e| {
                tracing::warn!("ignoring unreadable store {}: {}", path.display(), e);
                BTreeMap::new()
            }),
            Err(e) if e.kind() == io::ErrorKind::NotFound => BTreeMap::new(),
            Err(e) => {
                tracing::warn!("cannot read store {}: {}", path.display(), e);
                BTreeMap::new()
            }
        };
        Self { path, entries }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn write(&self) -> io::Result<()> {
        let json = serde_json::to_string_pretty(&self.entries)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
        fs::write(&self.path, json)
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> io::Result<()> {
        self.entries.insert(key.to_string(), value.to_string());
        self.write()
    }
}
