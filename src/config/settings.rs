//! Store settings
//!
//! Manages the save policy, diagnostics verbosity and obfuscation mode.
//! The library takes a [`Settings`] value directly; the CLI persists it in
//! `config.json` next to the session files.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::paths::SessionPaths;
use crate::diagnostics::Level;
use crate::error::SessionError;

/// When mutations reach the disk
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum SaveMode {
    /// Every mutation rewrites the session file (default)
    #[default]
    OnChange,
    /// Only explicit saves write the session file
    Manual,
}

impl SaveMode {
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "on_change" | "on-change" | "onchange" | "auto" => Some(Self::OnChange),
            "manual" | "manually" => Some(Self::Manual),
            _ => None,
        }
    }
}

impl fmt::Display for SaveMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OnChange => write!(f, "on-change"),
            Self::Manual => write!(f, "manual"),
        }
    }
}

/// Diagnostics verbosity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum LogMode {
    /// Every diagnostic
    All,
    /// Warnings and errors only
    Important,
    /// Nothing (default)
    #[default]
    Nothing,
}

impl LogMode {
    /// Whether a diagnostic at `level` passes this verbosity
    pub fn allows(&self, level: Level) -> bool {
        match self {
            Self::All => true,
            Self::Important => level != Level::Info,
            Self::Nothing => false,
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "all" => Some(Self::All),
            "important" => Some(Self::Important),
            "nothing" | "none" | "off" => Some(Self::Nothing),
            _ => None,
        }
    }
}

impl fmt::Display for LogMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::All => write!(f, "all"),
            Self::Important => write!(f, "important"),
            Self::Nothing => write!(f, "nothing"),
        }
    }
}

/// Whether session files are passed through the shift cipher
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Obfuscation {
    /// Stored as written (default)
    #[default]
    Plain,
    /// Shifted on write, unshifted on read
    Encrypted,
}

impl Obfuscation {
    pub fn is_encrypted(&self) -> bool {
        matches!(self, Self::Encrypted)
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "plain" | "none" | "off" => Some(Self::Plain),
            "encrypted" | "on" => Some(Self::Encrypted),
            _ => None,
        }
    }
}

impl fmt::Display for Obfuscation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Plain => write!(f, "plain"),
            Self::Encrypted => write!(f, "encrypted"),
        }
    }
}

/// Store settings
///
/// Every field falls back to its default when missing from the file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub save_mode: SaveMode,

    #[serde(default)]
    pub log_mode: LogMode,

    #[serde(default)]
    pub obfuscation: Obfuscation,
}

impl Settings {
    pub fn new(save_mode: SaveMode, log_mode: LogMode, obfuscation: Obfuscation) -> Self {
        Self {
            save_mode,
            log_mode,
            obfuscation,
        }
    }

    /// Load settings from disk, or use defaults if the file doesn't exist
    pub fn load_or_create(paths: &SessionPaths) -> Result<Self, SessionError> {
        let settings_path = paths.settings_file();

        if settings_path.exists() {
            let contents = std::fs::read_to_string(&settings_path).map_err(|e| {
                SessionError::Io(format!("Failed to read settings file: {}", e))
            })?;

            let settings: Settings = serde_json::from_str(&contents).map_err(|e| {
                SessionError::Config(format!("Failed to parse settings file: {}", e))
            })?;

            Ok(settings)
        } else {
            // Don't save yet - let caller decide when to persist
            Ok(Settings::default())
        }
    }

    /// Save settings to disk
    pub fn save(&self, paths: &SessionPaths) -> Result<(), SessionError> {
        paths.ensure_directories()?;

        let contents = serde_json::to_string_pretty(self).map_err(|e| {
            SessionError::Config(format!("Failed to serialize settings: {}", e))
        })?;

        std::fs::write(paths.settings_file(), contents).map_err(|e| {
            SessionError::Io(format!("Failed to write settings file: {}", e))
        })?;

        Ok(())
    }
}
