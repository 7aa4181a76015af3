//! Durable per-tenant client storage
//!
//! The order manager persists through a small `KeyValueStore` capability so
//! it stays storage-agnostic and testable with an in-memory fake. The file
//! implementation keeps all keys in one JSON file under the platform config
//! directory, written through on every set.
//!
//! Storage failure is never fatal: callers degrade to catalog order for the
//! session and stop persisting.

use std::collections::HashMap;
use std::fs;
#[cfg(unix)]
use std::path::Path;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// File name for persisted sidebar state
const SIDEBAR_FILE_NAME: &str = "sidebar.json";

/// Application config directory name
const APP_DIR_NAME: &str = "campus";

/// File permissions for the sidebar file on Unix (owner read/write only)
#[cfg(unix)]
const SIDEBAR_FILE_MODE: u32 = 0o600;

/// Errors from durable storage
#[derive(Debug)]
pub enum StorageError {
    /// The platform config directory could not be determined
    NoConfigDir,
    /// Filesystem error
    Io(std::io::Error),
    /// Serialization error
    Serde(serde_json::Error),
}

impl std::fmt::Display for StorageError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NoConfigDir => write!(f, "config directory could not be determined"),
            Self::Io(err) => write!(f, "storage io error: {}", err),
            Self::Serde(err) => write!(f, "storage serialization error: {}", err),
        }
    }
}

impl std::error::Error for StorageError {}

impl From<std::io::Error> for StorageError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<serde_json::Error> for StorageError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serde(err)
    }
}

/// Durable string key/value storage
pub trait KeyValueStore: std::fmt::Debug {
    /// Read a value by key
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Write a value by key
    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Remove a key
    fn remove(&mut self, key: &str) -> Result<(), StorageError>;
}

// =============================================================================
// File Store
// =============================================================================

/// On-disk file structure
#[derive(Debug, Default, Serialize, Deserialize)]
struct SidebarFile {
    /// All persisted keys
    entries: HashMap<String, String>,
}

/// File-backed key/value store
///
/// All keys live in a single JSON file. Reads are served from memory;
/// writes go through to disk immediately (writes are rare: drop events and
/// settled reconciliations).
#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
    entries: HashMap<String, String>,
}

impl FileStore {
    /// Platform-specific path for the sidebar state file
    ///
    /// Returns None if the config directory cannot be determined.
    #[must_use]
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(APP_DIR_NAME).join(SIDEBAR_FILE_NAME))
    }

    /// Open the store at the default platform path
    ///
    /// # Errors
    ///
    /// Returns `StorageError::NoConfigDir` if the platform config directory
    /// cannot be determined.
    pub fn open() -> Result<Self, StorageError> {
        let path = Self::default_path().ok_or(StorageError::NoConfigDir)?;
        Ok(Self::open_at(path))
    }

    /// Open the store at an explicit path
    ///
    /// A missing or unreadable file yields an empty store; persisted state
    /// is best-effort, never required for startup.
    pub fn open_at(path: PathBuf) -> Self {
        let entries = if path.exists() {
            fs::read_to_string(&path)
                .ok()
                .and_then(|contents| serde_json::from_str::<SidebarFile>(&contents).ok())
                .map(|file| file.entries)
                .unwrap_or_default()
        } else {
            HashMap::new()
        };

        Self { path, entries }
    }

    /// Write the current entries to disk
    fn save(&self) -> Result<(), StorageError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }

        let file = SidebarFile {
            entries: self.entries.clone(),
        };
        let json = serde_json::to_string_pretty(&file)?;
        fs::write(&self.path, json)?;

        #[cfg(unix)]
        Self::set_file_permissions(&self.path)?;

        Ok(())
    }

    /// Set sidebar file permissions to owner read/write only on Unix
    #[cfg(unix)]
    fn set_file_permissions(path: &Path) -> Result<(), StorageError> {
        use std::os::unix::fs::PermissionsExt;

        let metadata = fs::metadata(path)?;
        let mut perms = metadata.permissions();
        perms.set_mode(SIDEBAR_FILE_MODE);
        fs::set_permissions(path, perms)?;

        Ok(())
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        self.entries.insert(key.to_string(), value.to_string());
        self.save()
    }

    fn remove(&mut self, key: &str) -> Result<(), StorageError> {
        if self.entries.remove(key).is_some() {
            self.save()?;
        }
        Ok(())
    }
}

// =============================================================================
// Memory Store
// =============================================================================

/// In-memory key/value store
///
/// Used in tests and as the session fallback when durable storage is
/// unavailable.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    /// Create an empty in-memory store
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<(), StorageError> {
        self.entries.remove(key);
        Ok(())
    }
}

// =============================================================================
// Tests
// =============================================================================
