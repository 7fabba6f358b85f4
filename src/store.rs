//! File-backed preference store for native hosts.
//!
//! The file holds a single JSON object mapping keys to string values,
//! standing in for a browser's per-origin storage. Every write goes
//! straight to disk.

use std::collections::BTreeMap;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::error::{Error, Result};
use crate::host::PreferenceStore;

/// A [`PreferenceStore`] persisted as a JSON file.
///
/// # Example
///
/// ```rust
/// use themeswitch::{FileStore, PreferenceStore};
///
/// let dir = tempfile::tempdir().unwrap();
/// let path = dir.path().join("prefs.json");
///
/// let mut store = FileStore::open(&path).unwrap();
/// store.set_item("theme", "dark");
///
/// let reopened = FileStore::open(&path).unwrap();
/// assert_eq!(reopened.get_item("theme").as_deref(), Some("dark"));
/// ```
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
    items: BTreeMap<String, String>,
}

impl FileStore {
    /// Opens the store at `path`.
    ///
    /// A missing or blank file is an empty store; the file is created on
    /// the first write.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let items = match fs::read_to_string(&path) {
            Ok(text) if text.trim().is_empty() => BTreeMap::new(),
            Ok(text) => serde_json::from_str(&text)?,
            Err(err) if err.kind() == ErrorKind::NotFound => BTreeMap::new(),
            Err(err) => return Err(Error::io(path, err)),
        };
        debug!(path = %path.display(), items = items.len(), "opened preference store");
        Ok(Self { path, items })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Removes `key`, persisting the change. Returns whether it existed.
    pub fn remove_item(&mut self, key: &str) -> Result<bool> {
        if self.items.remove(key).is_none() {
            return Ok(false);
        }
        self.save()?;
        Ok(true)
    }

    /// Writes all items to disk, creating parent directories as needed.
    pub fn save(&self) -> Result<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| Error::io(parent, e))?;
        }
        let json = serde_json::to_string_pretty(&self.items)?;
        fs::write(&self.path, json).map_err(|e| Error::io(&self.path, e))
    }
}

impl PreferenceStore for FileStore {
    fn get_item(&self, key: &str) -> Option<String> {
        self.items.get(key).cloned()
    }

    /// Keeps the new value in memory even if the write fails, so the page
    /// stays consistent until the next load.
    fn set_item(&mut self, key: &str, value: &str) {
        self.items.insert(key.to_string(), value.to_string());
        if let Err(err) = self.save() {
            warn!(error = %err, key, "failed to persist preference");
        }
    }
}
