//! Persistence backends for the document editor.

use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::info;

use crate::error::StorageError;

pub const DEFAULT_DOCUMENT_PATH: &str = "document.txt";

pub trait Persistence {
    fn save(&self, data: &str) -> Result<(), StorageError>;
}

impl<P: Persistence + ?Sized> Persistence for Box<P> {
    fn save(&self, data: &str) -> Result<(), StorageError> {
        (**self).save(data)
    }
}

/// Writes the whole text to one file, replacing what was there.
#[derive(Debug, Clone)]
pub struct FileStorage {
    path: PathBuf,
}

impl FileStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn io_error(&self, source: std::io::Error) -> StorageError {
        StorageError::Io {
            path: self.path.clone(),
            source,
        }
    }
}

impl Default for FileStorage {
    fn default() -> Self {
        Self::new(DEFAULT_DOCUMENT_PATH)
    }
}

impl Persistence for FileStorage {
    fn save(&self, data: &str) -> Result<(), StorageError> {
        // handle is dropped (closed) on every return path
        let mut file = File::create(&self.path).map_err(|e| self.io_error(e))?;
        file.write_all(data.as_bytes()).map_err(|e| self.io_error(e))?;
        file.flush().map_err(|e| self.io_error(e))?;
        info!(path = %self.path.display(), bytes = data.len(), "document saved");
        Ok(())
    }
}

/// Disabled database backend: accepts the data and discards it.
#[derive(Debug, Default, Clone, Copy)]
pub struct DbStorage;

impl Persistence for DbStorage {
    fn save(&self, _data: &str) -> Result<(), StorageError> {
        Ok(())
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Backend {
    #[default]
    File,
    Database,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    pub backend: Backend,
    pub path: PathBuf,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            backend: Backend::File,
            path: PathBuf::from(DEFAULT_DOCUMENT_PATH),
        }
    }
}

pub fn open_backend(config: &StorageConfig) -> Box<dyn Persistence> {
    match config.backend {
        Backend::File => Box::new(FileStorage::new(config.path.clone())),
        Backend::Database => Box::new(DbStorage),
    }
}
