//! Diagnostics sinks
//!
//! The store reports soft failures and routine successes through a
//! [`Diagnostics`] sink. Sinks are purely observational: nothing a sink
//! does can change the outcome of a store operation.

use std::sync::{Arc, Mutex};

use super::entry::{DiagnosticEntry, Level};

/// Receiver of human-readable diagnostic lines
///
/// Verbosity filtering happens before `emit` is called.
pub trait Diagnostics {
    fn emit(&self, level: Level, message: &str);
}

/// Forwards diagnostics to the `log` facade
#[derive(Debug, Clone, Copy, Default)]
pub struct LogDiagnostics;

impl Diagnostics for LogDiagnostics {
    fn emit(&self, level: Level, message: &str) {
        match level {
            Level::Info => log::info!(target: "session_store", "{}", message),
            Level::Warning => log::warn!(target: "session_store", "{}", message),
            Level::Error => log::error!(target: "session_store", "{}", message),
        }
    }
}

/// Collects diagnostics in memory
///
/// Clones share the same buffer.
#[derive(Debug, Clone, Default)]
pub struct MemoryDiagnostics {
    entries: Arc<Mutex<Vec<DiagnosticEntry>>>,
}

impl MemoryDiagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of everything emitted so far
    pub fn entries(&self) -> Vec<DiagnosticEntry> {
        self.entries.lock().map(|e| e.clone()).unwrap_or_default()
    }

    /// Entries at `level`
    pub fn at_level(&self, level: Level) -> Vec<DiagnosticEntry> {
        self.entries()
            .into_iter()
            .filter(|e| e.level == level)
            .collect()
    }

    pub fn clear(&self) {
        if let Ok(mut entries) = self.entries.lock() {
            entries.clear();
        }
    }
}

impl Diagnostics for MemoryDiagnostics {
    fn emit(&self, level: Level, message: &str) {
        if let Ok(mut entries) = self.entries.lock() {
            entries.push(DiagnosticEntry::new(level, message));
        }
    }
}
