//! Storage layer for session-store
//!
//! Provides the document codec and the persistence backends that read and
//! overwrite session files wholesale.

pub mod codec;
pub mod file_io;

pub use codec::{decode, encode};
pub use file_io::{write_text_atomic, FilePersistence, MemoryPersistence, Persistence};

/// Document written for a session that has no file yet
pub const DEFAULT_DOCUMENT: &str = "-";
