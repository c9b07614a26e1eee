//! File I/O for session documents
//!
//! The store reads and overwrites its document wholesale through the
//! [`Persistence`] trait. [`FilePersistence`] writes atomically so a crash
//! mid-save never leaves a half-written document behind;
//! [`MemoryPersistence`] keeps documents in memory for embedding and tests.

use std::collections::HashMap;
use std::ffi::OsString;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use std::sync::{Arc, RwLock};

use crate::error::{SessionError, SessionResult};

/// Whole-document storage backend
pub trait Persistence {
    /// Whether a document exists at `path`
    fn exists(&self, path: &Path) -> bool;

    /// Read the full document at `path`
    fn read_all(&self, path: &Path) -> SessionResult<String>;

    /// Replace the document at `path` with `contents`
    fn write_all(&self, path: &Path, contents: &str) -> SessionResult<()>;

    /// Delete the document at `path`; deleting a missing document is not an error
    fn delete(&self, path: &Path) -> SessionResult<()>;
}

/// Filesystem-backed persistence
#[derive(Debug, Clone, Copy, Default)]
pub struct FilePersistence;

impl FilePersistence {
    pub fn new() -> Self {
        Self
    }
}

impl Persistence for FilePersistence {
    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn read_all(&self, path: &Path) -> SessionResult<String> {
        log::debug!("reading {}", path.display());
        fs::read_to_string(path)
            .map_err(|e| SessionError::Io(format!("Failed to read {}: {}", path.display(), e)))
    }

    fn write_all(&self, path: &Path, contents: &str) -> SessionResult<()> {
        log::debug!("writing {} bytes to {}", contents.len(), path.display());
        write_text_atomic(path, contents)
    }

    fn delete(&self, path: &Path) -> SessionResult<()> {
        match fs::remove_file(path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(SessionError::Io(format!(
                "Failed to delete {}: {}",
                path.display(),
                e
            ))),
        }
    }
}

/// Sibling path used while writing `path`
fn temp_path_for(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map(|n| n.to_os_string())
        .unwrap_or_else(|| OsString::from("session"));
    name.push(".tmp");
    path.with_file_name(name)
}

/// Write text to a file atomically (write to temp, then rename)
///
/// This ensures that the file is either completely written or not modified at all,
/// preventing corruption on crashes or power failures.
pub fn write_text_atomic<P: AsRef<Path>>(path: P, contents: &str) -> SessionResult<()> {
    let path = path.as_ref();

    // Ensure parent directory exists
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| {
            SessionError::Io(format!(
                "Failed to create directory {}: {}",
                parent.display(),
                e
            ))
        })?;
    }

    // Create temp file in same directory (important for atomic rename)
    let temp_path = temp_path_for(path);

    let file = File::create(&temp_path)
        .map_err(|e| SessionError::Io(format!("Failed to create temp file: {}", e)))?;

    let mut writer = BufWriter::new(file);
    writer
        .write_all(contents.as_bytes())
        .map_err(|e| SessionError::Io(format!("Failed to write data: {}", e)))?;

    writer
        .flush()
        .map_err(|e| SessionError::Io(format!("Failed to flush data: {}", e)))?;

    // Sync to disk before rename
    writer
        .get_ref()
        .sync_all()
        .map_err(|e| SessionError::Io(format!("Failed to sync data: {}", e)))?;

    fs::rename(&temp_path, path).map_err(|e| {
        // Try to clean up temp file if rename fails
        let _ = fs::remove_file(&temp_path);
        SessionError::Io(format!("Failed to rename temp file: {}", e))
    })?;

    Ok(())
}

/// In-memory persistence
///
/// Clones share the same documents, so a test can hand one clone to a store
/// and inspect writes through another.
#[derive(Debug, Clone, Default)]
pub struct MemoryPersistence {
    files: Arc<RwLock<HashMap<PathBuf, String>>>,
    writes: Arc<RwLock<usize>>,
}

impl MemoryPersistence {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current document at `path`, if any
    pub fn contents(&self, path: &Path) -> Option<String> {
        self.files.read().ok()?.get(path).cloned()
    }

    /// Number of successful writes so far
    pub fn write_count(&self) -> usize {
        self.writes.read().map(|w| *w).unwrap_or(0)
    }

    /// Seed a document directly
    pub fn insert(&self, path: impl Into<PathBuf>, contents: impl Into<String>) {
        if let Ok(mut files) = self.files.write() {
            files.insert(path.into(), contents.into());
        }
    }
}

fn poisoned<E: std::fmt::Display>(e: E) -> SessionError {
    SessionError::Io(format!("Failed to acquire lock: {}", e))
}

impl Persistence for MemoryPersistence {
    fn exists(&self, path: &Path) -> bool {
        self.files
            .read()
            .map(|files| files.contains_key(path))
            .unwrap_or(false)
    }

    fn read_all(&self, path: &Path) -> SessionResult<String> {
        let files = self.files.read().map_err(poisoned)?;
        files
            .get(path)
            .cloned()
            .ok_or_else(|| SessionError::Io(format!("File not found: {}", path.display())))
    }

    fn write_all(&self, path: &Path, contents: &str) -> SessionResult<()> {
        let mut files = self.files.write().map_err(poisoned)?;
        files.insert(path.to_path_buf(), contents.to_string());
        let mut writes = self.writes.write().map_err(poisoned)?;
        *writes += 1;
        Ok(())
    }

    fn delete(&self, path: &Path) -> SessionResult<()> {
        let mut files = self.files.write().map_err(poisoned)?;
        files.remove(path);
        Ok(())
    }
}
