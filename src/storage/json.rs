//! JSON file-backed session store.
//!
//! Keeps every entry in memory and rewrites the whole file on each change using
//! write-to-temp + rename, so a crash mid-write never leaves a truncated file.
//!
//! # File Format
//!
//! ```json
//! {
//!   "version": 1,
//!   "entries": {
//!     "timewheel.events": "{\"version\":1,\"saved_at\":1700000000,\"events\":[]}"
//!   }
//! }
//! ```

use crate::domain::error::{Result, TimewheelError};
use crate::storage::backend::SessionStore;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Serialize, Deserialize)]
struct StoreData {
    version: u32,

    #[serde(default)]
    entries: HashMap<String, String>,
}

impl Default for StoreData {
    fn default() -> Self {
        Self {
            version: 1,
            entries: HashMap::new(),
        }
    }
}

/// Session store persisted to a single JSON file.
pub struct JsonSessionStore {
    file_path: PathBuf,
    data: StoreData,
    dirty: bool,
}

impl JsonSessionStore {
    /// Opens the store at `file_path`, creating parent directories as needed.
    ///
    /// # Errors
    ///
    /// Returns an error if the parent directory cannot be created or the
    /// existing file is not valid JSON.
    pub fn open(file_path: PathBuf) -> Result<Self> {
        tracing::debug!(path = ?file_path, "opening JSON session store");

        if let Some(parent) = file_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let data = if file_path.exists() {
            Self::load_from_file(&file_path)?
        } else {
            tracing::debug!("starting with empty session store");
            StoreData::default()
        };

        Ok(Self {
            file_path,
            data,
            dirty: false,
        })
    }

    fn load_from_file(path: &Path) -> Result<StoreData> {
        let contents = std::fs::read_to_string(path)?;
        let data: StoreData = serde_json::from_str(&contents)
            .map_err(|e| TimewheelError::Storage(format!("failed to parse JSON: {e}")))?;

        tracing::debug!(
            version = data.version,
            entries = data.entries.len(),
            "loaded session store"
        );
        Ok(data)
    }

    fn save_to_file(&mut self) -> Result<()> {
        if !self.dirty {
            tracing::trace!("skipping save, no changes");
            return Ok(());
        }

        let json = serde_json::to_string_pretty(&self.data)
            .map_err(|e| TimewheelError::Storage(format!("failed to serialize JSON: {e}")))?;

        let tmp_path = self.file_path.with_extension("tmp");
        std::fs::write(&tmp_path, json)?;
        std::fs::rename(&tmp_path, &self.file_path)?;

        self.dirty = false;
        tracing::debug!(path = ?self.file_path, "session store saved");
        Ok(())
    }
}

impl SessionStore for JsonSessionStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.data.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        let _span = tracing::debug_span!("json_session_set", key = %key, bytes = value.len()).entered();

        self.data.entries.insert(key.to_string(), value.to_string());
        self.dirty = true;
        self.save_to_file()
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        let _span = tracing::debug_span!("json_session_remove", key = %key).entered();

        if self.data.entries.remove(key).is_some() {
            self.dirty = true;
        }
        self.save_to_file()
    }
}

impl Drop for JsonSessionStore {
    fn drop(&mut self) {
        if self.dirty {
            if let Err(e) = self.save_to_file() {
                tracing::error!(error = %e, "failed to save session store on drop");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn values_survive_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("session.json");

        {
            let mut store = JsonSessionStore::open(path.clone()).unwrap();
            store.set("greeting", "salve").unwrap();
            store.set("other", "x").unwrap();
            store.remove("other").unwrap();
        }

        let store = JsonSessionStore::open(path).unwrap();
        assert_eq!(store.get("greeting").unwrap().as_deref(), Some("salve"));
        assert_eq!(store.get("other").unwrap(), None);
    }

    #[test]
    fn no_temp_file_left_behind() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.json");

        let mut store = JsonSessionStore::open(path.clone()).unwrap();
        store.set("k", "v").unwrap();

        assert!(path.exists());
        assert!(!path.with_extension("tmp").exists());
    }

    #[test]
    fn corrupt_file_is_a_storage_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.json");
        std::fs::write(&path, "{ not json").unwrap();

        let err = JsonSessionStore::open(path).err().unwrap();
        assert!(matches!(err, TimewheelError::Storage(_)));
    }
}
