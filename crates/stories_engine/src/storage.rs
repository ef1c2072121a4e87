//! Durable key-value slots, used for the persisted search term.
//!
//! [`StorageState`] wraps any [`KeyValueStore`] and never fails outward:
//! unreadable or unwritable storage is logged and treated as absent.

use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, PoisonError};

use serde::{Deserialize, Serialize};
use stories_logging::{stories_debug, stories_warn};

use crate::persist::{AtomicFileWriter, PersistError};

/// File name of the RON store inside the state directory.
pub const STORE_FILENAME: &str = "hacker_stories.ron";

pub trait KeyValueStore: Send + Sync {
    fn read(&self, key: &str) -> Result<Option<String>, PersistError>;
    fn write(&self, key: &str, value: &str) -> Result<(), PersistError>;
}

/// In-process store; contents vanish with the value.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: Mutex<BTreeMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn read(&self, key: &str) -> Result<Option<String>, PersistError> {
        let entries = self.entries.lock().unwrap_or_else(PoisonError::into_inner);
        Ok(entries.get(key).cloned())
    }

    fn write(&self, key: &str, value: &str) -> Result<(), PersistError> {
        let mut entries = self.entries.lock().unwrap_or_else(PoisonError::into_inner);
        entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[derive(Debug, Default, Serialize, Deserialize)]
struct PersistedEntries {
    #[serde(default)]
    entries: BTreeMap<String, String>,
}

/// All slots in one RON file, rewritten atomically on every write.
#[derive(Debug)]
pub struct RonFileStore {
    writer: AtomicFileWriter,
    path: PathBuf,
    lock: Mutex<()>,
}

impl RonFileStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        let dir = dir.into();
        Self {
            path: dir.join(STORE_FILENAME),
            writer: AtomicFileWriter::new(dir),
            lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn load(&self) -> Result<PersistedEntries, PersistError> {
        let content = match fs::read_to_string(&self.path) {
            Ok(text) => text,
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                return Ok(PersistedEntries::default());
            }
            Err(err) => return Err(PersistError::Io(err)),
        };
        ron::from_str(&content).map_err(|err| PersistError::Format(err.to_string()))
    }
}

impl KeyValueStore for RonFileStore {
    fn read(&self, key: &str) -> Result<Option<String>, PersistError> {
        let _guard = self.lock.lock().unwrap_or_else(PoisonError::into_inner);
        Ok(self.load()?.entries.get(key).cloned())
    }

    fn write(&self, key: &str, value: &str) -> Result<(), PersistError> {
        let _guard = self.lock.lock().unwrap_or_else(PoisonError::into_inner);
        let mut state = match self.load() {
            Ok(state) => state,
            Err(PersistError::Format(message)) => {
                stories_warn!(
                    "Replacing malformed store {:?}: {}",
                    self.path,
                    message
                );
                PersistedEntries::default()
            }
            Err(err) => return Err(err),
        };
        state.entries.insert(key.to_string(), value.to_string());

        let pretty = ron::ser::PrettyConfig::new();
        let content = ron::ser::to_string_pretty(&state, pretty)
            .map_err(|err| PersistError::Format(err.to_string()))?;
        self.writer.write(STORE_FILENAME, &content)?;
        Ok(())
    }
}

/// Read-with-fallback / write-through view over a store.
#[derive(Debug)]
pub struct StorageState<S> {
    backend: S,
}

impl<S: KeyValueStore> StorageState<S> {
    pub fn new(backend: S) -> Self {
        Self { backend }
    }

    /// Stored value for `key`; `fallback` when it is absent, empty or unreadable.
    pub fn get(&self, key: &str, fallback: &str) -> String {
        match self.backend.read(key) {
            Ok(Some(value)) if !value.is_empty() => value,
            Ok(_) => fallback.to_string(),
            Err(err) => {
                stories_warn!("Failed to read {:?} from storage: {}", key, err);
                fallback.to_string()
            }
        }
    }

    pub fn set(&self, key: &str, value: &str) {
        match self.backend.write(key, value) {
            Ok(()) => stories_debug!("Stored {:?} ({} bytes)", key, value.len()),
            Err(err) => stories_warn!("Failed to write {:?} to storage: {}", key, err),
        }
    }
}
