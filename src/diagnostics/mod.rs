//! Diagnostics for session-store
//!
//! Store operations report soft failures (duplicate lists, out-of-range
//! removals, values not found) and routine successes as human-readable
//! lines at three levels. The configured [`LogMode`](crate::config::LogMode)
//! decides which levels reach the sink.
//!
//! # Architecture
//!
//! - `Level` / `DiagnosticEntry`: a single timestamped line.
//! - `Diagnostics`: the sink trait the store is built with.
//! - `LogDiagnostics`: forwards to the `log` facade.
//! - `JournalDiagnostics`: appends JSON lines to a file and reads them back.
//! - `MemoryDiagnostics`: keeps lines in memory.

mod entry;
mod journal;
mod sink;

pub use entry::{DiagnosticEntry, Level};
pub use journal::JournalDiagnostics;
pub use sink::{Diagnostics, LogDiagnostics, MemoryDiagnostics};
