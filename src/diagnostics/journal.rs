//! Diagnostics journal
//!
//! One JSON object per line, appended as diagnostics are emitted. A crash
//! mid-append can leave a line cut short. Readers skip lines that do not
//! parse, and the next append starts on a fresh line.

use std::fs::{self, File, OpenOptions};
use std::io::{Read, Seek, SeekFrom, Write};
use std::path::{Path, PathBuf};

use crate::error::SessionResult;

use super::entry::{DiagnosticEntry, Level};
use super::sink::Diagnostics;

/// Diagnostics sink that keeps a history on disk
pub struct JournalDiagnostics {
    path: PathBuf,
}

impl JournalDiagnostics {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Append one entry as a complete line
    pub fn append(&self, entry: &DiagnosticEntry) -> SessionResult<()> {
        let mut line = String::new();
        if self.ends_mid_line()? {
            line.push('\n');
        }
        line.push_str(&serde_json::to_string(entry)?);
        line.push('\n');

        if let Some(dir) = self.path.parent() {
            fs::create_dir_all(dir)?;
        }
        // one write per entry
        OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?
            .write_all(line.as_bytes())?;
        Ok(())
    }

    /// Every entry at `min_level` or above, oldest first
    pub fn entries(&self, min_level: Level) -> SessionResult<Vec<DiagnosticEntry>> {
        let text = match fs::read_to_string(&self.path) {
            Ok(text) => text,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(e.into()),
        };

        let mut entries = Vec::new();
        for (n, line) in text.lines().enumerate() {
            if line.trim().is_empty() {
                continue;
            }
            match serde_json::from_str::<DiagnosticEntry>(line) {
                Ok(entry) if entry.level >= min_level => entries.push(entry),
                Ok(_) => {}
                Err(e) => log::warn!(
                    "skipping unreadable line {} of {}: {}",
                    n + 1,
                    self.path.display(),
                    e
                ),
            }
        }
        Ok(entries)
    }

    /// The last `count` entries at `min_level` or above
    pub fn recent(&self, count: usize, min_level: Level) -> SessionResult<Vec<DiagnosticEntry>> {
        let mut entries = self.entries(min_level)?;
        let skip = entries.len().saturating_sub(count);
        entries.drain(..skip);
        Ok(entries)
    }

    /// Whether the journal's last byte is something other than a newline
    fn ends_mid_line(&self) -> SessionResult<bool> {
        let mut file = match File::open(&self.path) {
            Ok(file) => file,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(false),
            Err(e) => return Err(e.into()),
        };
        if file.metadata()?.len() == 0 {
            return Ok(false);
        }
        let mut last = [0u8; 1];
        file.seek(SeekFrom::End(-1))?;
        file.read_exact(&mut last)?;
        Ok(last[0] != b'\n')
    }
}

impl Diagnostics for JournalDiagnostics {
    fn emit(&self, level: Level, message: &str) {
        if let Err(e) = self.append(&DiagnosticEntry::new(level, message)) {
            log::warn!("dropping diagnostic '{}': {}", message, e);
        }
    }
}
