//! Path management for session-store
//!
//! ## Path Resolution Order
//!
//! 1. `SESSION_STORE_DATA_DIR` environment variable (if set)
//! 2. The platform data directory from `directories`
//!    (e.g. `~/.local/share/session-store` on Linux)

use std::path::PathBuf;

use directories::ProjectDirs;

use crate::error::SessionError;

/// Extension appended to logical session names
pub const SESSION_EXTENSION: &str = "txt";

/// Manages all paths used by session-store
#[derive(Debug, Clone)]
pub struct SessionPaths {
    /// Base directory for all session-store data
    base_dir: PathBuf,
}

impl SessionPaths {
    /// Create a new SessionPaths instance
    ///
    /// # Errors
    ///
    /// Returns an error if no platform data directory can be determined.
    pub fn new() -> Result<Self, SessionError> {
        let base_dir = if let Ok(custom) = std::env::var("SESSION_STORE_DATA_DIR") {
            PathBuf::from(custom)
        } else {
            ProjectDirs::from("", "", "session-store")
                .map(|dirs| dirs.data_dir().to_path_buf())
                .ok_or_else(|| {
                    SessionError::Config("Could not determine a data directory".into())
                })?
        };

        Ok(Self { base_dir })
    }

    /// Create SessionPaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Directory holding session documents
    pub fn data_dir(&self) -> PathBuf {
        self.base_dir.join("data")
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    /// Get the path to the diagnostics journal
    pub fn journal_file(&self) -> PathBuf {
        self.base_dir.join("journal.log")
    }

    /// Path of the session document with logical name `name`
    ///
    /// Callers taking names from outside should run
    /// [`validate_session_name`] first.
    pub fn session_file(&self, name: &str) -> PathBuf {
        self.data_dir()
            .join(format!("{}.{}", name, SESSION_EXTENSION))
    }

    /// Ensure the base and data directories exist
    pub fn ensure_directories(&self) -> Result<(), SessionError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| SessionError::Io(format!("Failed to create base directory: {}", e)))?;

        std::fs::create_dir_all(self.data_dir())
            .map_err(|e| SessionError::Io(format!("Failed to create data directory: {}", e)))?;

        Ok(())
    }
}

/// Check that `name` maps to a file directly inside the data directory
pub fn validate_session_name(name: &str) -> Result<(), SessionError> {
    if name.trim().is_empty() {
        return Err(SessionError::Validation(
            "Session file name cannot be empty".into(),
        ));
    }
    if name == "." || name == ".." || name.contains(['/', '\\', '\0']) {
        return Err(SessionError::Validation(format!(
            "Session file name '{}' must not contain path separators",
            name
        )));
    }
    Ok(())
}
