use std::cell::RefCell;
use std::collections::HashMap;
use std::env;
use std::fs;
use std::path::PathBuf;
use std::rc::Rc;

use log::warn;

/// The key all player state lives under.
pub const STORAGE_KEY: &str = "musicPlayerData";

/// Durable key-value storage, the shape of the browser's localStorage.
///
/// Writes are best effort: implementations log and swallow failures.
pub trait StorageBackend {
    fn read(&self, key: &str) -> Option<String>;
    fn write(&mut self, key: &str, value: &str);
}

/// In-memory backend with shared interior, for tests and for hosts
/// that persist elsewhere. Clones observe each other's writes, the way
/// every handle to localStorage sees the same data.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    entries: Rc<RefCell<HashMap<String, String>>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl StorageBackend for MemoryStorage {
    fn read(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    fn write(&mut self, key: &str, value: &str) {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
    }
}

/// File-per-key backend rooted at a data directory.
#[derive(Debug, Clone)]
pub struct FileStorage {
    dir: PathBuf,
}

impl FileStorage {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Default data directory: `$XDG_DATA_HOME/dacapo` or
    /// `~/.local/share/dacapo` when `XDG_DATA_HOME` is not set.
    pub fn default_dir() -> Option<PathBuf> {
        let data_home = if let Some(xdg) = env::var_os("XDG_DATA_HOME") {
            Some(PathBuf::from(xdg))
        } else if let Some(home) = env::var_os("HOME") {
            Some(PathBuf::from(home).join(".local").join("share"))
        } else {
            None
        };

        data_home.map(|d| d.join("dacapo"))
    }

    fn key_path(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }
}

impl StorageBackend for FileStorage {
    fn read(&self, key: &str) -> Option<String> {
        fs::read_to_string(self.key_path(key)).ok()
    }

    fn write(&mut self, key: &str, value: &str) {
        let result = fs::create_dir_all(&self.dir)
            .and_then(|()| fs::write(self.key_path(key), value));
        if let Err(err) = result {
            warn!("failed to persist {key}: {err}");
        }
    }
}
