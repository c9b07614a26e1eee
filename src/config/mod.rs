//! Configuration module for session-store
//!
//! This module provides:
//! - Platform data directory resolution
//! - Store settings (save policy, verbosity, obfuscation) and their persistence

pub mod paths;
pub mod settings;

pub use paths::{validate_session_name, SessionPaths};
pub use settings::{LogMode, Obfuscation, SaveMode, Settings};
