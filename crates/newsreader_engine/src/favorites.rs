use std::collections::HashMap;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use tempfile::NamedTempFile;
use thiserror::Error;

use crate::Article;

/// The one logical key the favorites blob lives under.
pub const FAVORITES_KEY: &str = "favorites.json";

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("data directory missing or not writable: {0}")]
    DataDir(String),
    #[error("io error: {0}")]
    Io(#[from] io::Error),
    #[error("corrupt favorites blob: {0}")]
    Corrupt(#[from] serde_json::Error),
}

/// Encode the favorites sequence to the JSON blob format.
pub fn encode_favorites(articles: &[Article]) -> Result<Vec<u8>, StorageError> {
    Ok(serde_json::to_vec(articles)?)
}

/// Decode a favorites blob back into articles, order preserved.
pub fn decode_favorites(bytes: &[u8]) -> Result<Vec<Article>, StorageError> {
    Ok(serde_json::from_slice(bytes)?)
}

/// Opaque store-bytes-by-key capability backing the favorites collection.
///
/// A single store instance per process is assumed; concurrent access from
/// multiple instances is not guarded.
pub trait FavoritesStorage: Send {
    /// Read the blob under `key`; `None` when nothing was ever stored.
    fn load(&self, key: &str) -> Result<Option<Vec<u8>>, StorageError>;
    /// Overwrite the blob under `key`.
    fn save(&self, key: &str, bytes: &[u8]) -> Result<(), StorageError>;
}

/// Ensure the data directory exists; create if missing.
pub fn ensure_data_dir(dir: &Path) -> Result<(), StorageError> {
    if dir.exists() {
        let meta = fs::metadata(dir).map_err(|e| StorageError::DataDir(e.to_string()))?;
        if !meta.is_dir() {
            return Err(StorageError::DataDir("path is not a directory".into()));
        }
    } else {
        fs::create_dir_all(dir).map_err(|e| StorageError::DataDir(e.to_string()))?;
    }
    // Writability probe: try creating a temp file.
    NamedTempFile::new_in(dir).map_err(|e| StorageError::DataDir(e.to_string()))?;
    Ok(())
}

/// File-backed storage: one file per key inside a data directory, written
/// atomically (temp file then rename) so a crash mid-write cannot leave a
/// truncated blob behind.
#[derive(Debug)]
pub struct FileFavoritesStorage {
    dir: PathBuf,
}

impl FileFavoritesStorage {
    pub fn new(dir: PathBuf) -> Self {
        Self { dir }
    }

    fn key_path(&self, key: &str) -> PathBuf {
        self.dir.join(key)
    }
}

impl FavoritesStorage for FileFavoritesStorage {
    fn load(&self, key: &str) -> Result<Option<Vec<u8>>, StorageError> {
        match fs::read(self.key_path(key)) {
            Ok(bytes) => Ok(Some(bytes)),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(err) => Err(err.into()),
        }
    }

    fn save(&self, key: &str, bytes: &[u8]) -> Result<(), StorageError> {
        ensure_data_dir(&self.dir)?;

        let target = self.key_path(key);
        let mut tmp = NamedTempFile::new_in(&self.dir)?;
        tmp.write_all(bytes)?;
        tmp.flush()?;
        tmp.as_file_mut().sync_all()?;

        // Replace existing blob if present to keep determinism.
        if target.exists() {
            fs::remove_file(&target)?;
        }
        tmp.persist(&target).map_err(|e| StorageError::Io(e.error))?;
        Ok(())
    }
}

/// In-memory storage for tests and ephemeral sessions.
#[derive(Debug, Default)]
pub struct MemoryFavoritesStorage {
    entries: Mutex<HashMap<String, Vec<u8>>>,
}

impl MemoryFavoritesStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl FavoritesStorage for MemoryFavoritesStorage {
    fn load(&self, key: &str) -> Result<Option<Vec<u8>>, StorageError> {
        Ok(self
            .entries
            .lock()
            .expect("storage lock")
            .get(key)
            .cloned())
    }

    fn save(&self, key: &str, bytes: &[u8]) -> Result<(), StorageError> {
        self.entries
            .lock()
            .expect("storage lock")
            .insert(key.to_string(), bytes.to_vec());
        Ok(())
    }
}
