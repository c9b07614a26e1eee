//! session-store - file-backed persistence for small session state
//!
//! This library keeps named scalar variables and named, ordered lists of
//! typed values in a single human-readable text file, optionally obfuscated
//! with a position-dependent shift cipher.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Core data models (scalars, variables, lists, the document)
//! - `crypto`: The shift cipher applied to stored documents
//! - `storage`: Document codec and file persistence
//! - `diagnostics`: Leveled diagnostics sinks and the journal
//! - `session`: The store itself, tying the above together
//! - `cli` / `display`: The `session` command line tool
//!
//! # Example
//!
//! ```rust,ignore
//! use session_store::config::{SessionPaths, Settings};
//! use session_store::SessionStore;
//!
//! let paths = SessionPaths::new()?;
//! let mut store = SessionStore::on_disk(Settings::default(), paths);
//! store.open("Settings")?;
//! let volume = store.get_float_var("MasterVolume", 1.0)?;
//! store.create_list("HighScores")?;
//! store.add("HighScores", 1200)?;
//! ```

pub mod cli;
pub mod config;
pub mod crypto;
pub mod diagnostics;
pub mod display;
pub mod error;
pub mod models;
pub mod session;
pub mod storage;

pub use config::Settings;
pub use error::{SessionError, SessionResult};
pub use models::{Scalar, ScalarType};
pub use session::SessionStore;
