//! Session store
//!
//! [`SessionStore`] owns the lists and variables of one bound session file
//! and drives loading and saving through the codec and the cipher.
//!
//! Every mutating operation follows the same shape: validate, mutate the
//! in-memory data, persist if the save policy is [`SaveMode::OnChange`],
//! refresh the cached file content, then emit a diagnostic. Persisting
//! always rewrites the whole document, and a failed write leaves the
//! in-memory data as it was.
//!
//! The store is single-writer: every method that touches data takes
//! `&mut self`, and nothing guards the file against other processes.

mod lists;
mod variables;

use std::path::{Path, PathBuf};

use crate::config::{validate_session_name, Obfuscation, SaveMode, SessionPaths, Settings};
use crate::crypto::{check_shiftable, shift, unshift};
use crate::diagnostics::{Diagnostics, Level, LogDiagnostics};
use crate::error::{SessionError, SessionResult};
use crate::models::{validate_name, validate_value, Scalar, SessionData, SessionList, Variable};
use crate::storage::{decode, encode, FilePersistence, Persistence, DEFAULT_DOCUMENT};

/// File-backed store of typed lists and variables
pub struct SessionStore {
    settings: Settings,
    paths: SessionPaths,
    persistence: Box<dyn Persistence>,
    diagnostics: Box<dyn Diagnostics>,
    data: SessionData,
    /// Path of the currently bound session file
    bound: Option<PathBuf>,
    /// Last document read from or written to the bound file, as stored
    file_content: String,
}

impl SessionStore {
    /// Create a store with explicit collaborators
    pub fn new(
        settings: Settings,
        paths: SessionPaths,
        persistence: Box<dyn Persistence>,
        diagnostics: Box<dyn Diagnostics>,
    ) -> Self {
        Self {
            settings,
            paths,
            persistence,
            diagnostics,
            data: SessionData::new(),
            bound: None,
            file_content: DEFAULT_DOCUMENT.to_string(),
        }
    }

    /// Create a store that writes real files and reports through `log`
    pub fn on_disk(settings: Settings, paths: SessionPaths) -> Self {
        Self::new(
            settings,
            paths,
            Box::new(FilePersistence::new()),
            Box::new(LogDiagnostics),
        )
    }

    /// Replace the configuration; data and the bound file are untouched
    pub fn configure(&mut self, settings: Settings) {
        self.settings = settings;
        self.emit(Level::Info, "Successfully initialized".to_string());
    }

    /// Bind the store to the session file `name`
    ///
    /// A missing file is created holding the empty document. On success
    /// all previous in-memory data is replaced, including anything unsaved.
    /// If the file cannot be read or decoded the store keeps its previous
    /// binding and data.
    pub fn open(&mut self, name: &str) -> SessionResult<()> {
        validate_session_name(name)?;
        let path = self.paths.session_file(name);
        let stored = self.read_or_create(&path)?;
        let data = self.decode_stored(&stored)?;

        self.bound = Some(path);
        self.data = data;
        self.file_content = stored;

        self.emit(
            Level::Info,
            format!(
                "Opened session '{}' ({} lists, {} variables)",
                name,
                self.data.lists.len(),
                self.data.variables.len()
            ),
        );
        Ok(())
    }

    /// Write the full current state to the bound file
    pub fn save(&mut self) -> SessionResult<()> {
        self.write_document(self.settings.obfuscation)?;
        self.refresh_file_content()?;
        self.emit(Level::Info, "Session data successfully saved".to_string());
        Ok(())
    }

    /// Rewrite the bound file once using `mode`, whatever the configuration
    ///
    /// Useful for converting an existing file between plain and obfuscated
    /// form. Subsequent saves still follow the configured mode.
    pub fn rewrite_as(&mut self, mode: Obfuscation) -> SessionResult<()> {
        self.write_document(mode)?;
        self.refresh_file_content()?;
        self.emit(Level::Info, format!("Session file rewritten as {}", mode));
        Ok(())
    }

    /// Delete the bound file and forget all data
    ///
    /// The store stays bound; the file is recreated holding the empty
    /// document.
    pub fn clear_all(&mut self) -> SessionResult<()> {
        let path = self.bound_path_required()?.to_path_buf();
        self.persistence.delete(&path)?;
        self.data.clear();
        self.refresh_file_content()?;
        self.emit(Level::Info, "Successfully cleared the session data".to_string());
        Ok(())
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn paths(&self) -> &SessionPaths {
        &self.paths
    }

    /// All lists and variables
    pub fn data(&self) -> &SessionData {
        &self.data
    }

    pub fn lists(&self) -> &[SessionList] {
        &self.data.lists
    }

    pub fn variables(&self) -> &[Variable] {
        &self.data.variables
    }

    pub fn bound_path(&self) -> Option<&Path> {
        self.bound.as_deref()
    }

    pub fn is_bound(&self) -> bool {
        self.bound.is_some()
    }

    /// The last document read from or written to disk, exactly as stored
    pub fn file_content(&self) -> &str {
        &self.file_content
    }

    // --- internals shared by the operation modules ---

    fn bound_path_required(&self) -> SessionResult<&Path> {
        self.bound.as_deref().ok_or(SessionError::NoFileOpen)
    }

    /// Fail before mutating if the mutation could not be persisted
    fn require_writable(&self) -> SessionResult<()> {
        if self.settings.save_mode == SaveMode::OnChange {
            self.bound_path_required()?;
        }
        Ok(())
    }

    /// Reject text the configured obfuscation could not write
    fn check_encodable(&self, text: &str) -> SessionResult<()> {
        if self.settings.obfuscation.is_encrypted() {
            check_shiftable(text)?;
        }
        Ok(())
    }

    /// Validate a list or variable name for this store
    fn check_name(&self, entity: &str, name: &str) -> SessionResult<()> {
        validate_name(entity, name)?;
        self.check_encodable(name)
    }

    /// Validate a value for this store
    fn check_value(&self, value: &Scalar) -> SessionResult<()> {
        validate_value(value)?;
        if let Scalar::Str(s) = value {
            self.check_encodable(s)?;
        }
        Ok(())
    }

    /// Run a mutation, persist it per policy and refresh the cache
    ///
    /// Nothing is written if the mutation left the data unchanged. If the
    /// write fails the data is restored to its state before the mutation.
    fn apply<T>(&mut self, mutate: impl FnOnce(&mut SessionData) -> T) -> SessionResult<T> {
        self.require_writable()?;

        let previous = self.data.clone();
        let outcome = mutate(&mut self.data);
        if self.data == previous {
            return Ok(outcome);
        }

        if self.settings.save_mode == SaveMode::OnChange {
            if let Err(e) = self.write_document(self.settings.obfuscation) {
                self.data = previous;
                return Err(e);
            }
        }
        if self.bound.is_some() {
            self.refresh_file_content()?;
        }
        Ok(outcome)
    }

    fn write_document(&self, mode: Obfuscation) -> SessionResult<()> {
        let path = self.bound_path_required()?;
        let mut document = encode(&self.data);
        if mode.is_encrypted() {
            document = shift(&document)?;
        }
        self.persistence.write_all(path, &document)
    }

    /// Re-read the bound file into the cache, creating it if missing
    fn refresh_file_content(&mut self) -> SessionResult<()> {
        let path = self.bound_path_required()?.to_path_buf();
        self.file_content = self.read_or_create(&path)?;
        Ok(())
    }

    fn read_or_create(&self, path: &Path) -> SessionResult<String> {
        if self.persistence.exists(path) {
            return self.persistence.read_all(path);
        }
        self.persistence.write_all(path, DEFAULT_DOCUMENT)?;
        Ok(DEFAULT_DOCUMENT.to_string())
    }

    /// Decode a document as stored under the configured obfuscation
    fn decode_stored(&self, stored: &str) -> SessionResult<SessionData> {
        if self.settings.obfuscation.is_encrypted() {
            decode(&unshift(stored)?)
        } else {
            decode(stored)
        }
    }

    fn emit(&self, level: Level, message: String) {
        if self.settings.log_mode.allows(level) {
            self.diagnostics.emit(level, &message);
        }
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use super::*;
    use crate::config::LogMode;
    use crate::diagnostics::MemoryDiagnostics;
    use crate::storage::MemoryPersistence;

    pub const BASE: &str = "/virtual/session-store";

    pub struct Harness {
        pub store: SessionStore,
        pub files: MemoryPersistence,
        pub log: MemoryDiagnostics,
    }

    impl Harness {
        pub fn path(&self, name: &str) -> PathBuf {
            self.store.paths().session_file(name)
        }

        pub fn on_disk(&self, name: &str) -> Option<String> {
            self.files.contents(&self.path(name))
        }
    }

    pub fn harness_with(settings: Settings) -> Harness {
        let files = MemoryPersistence::new();
        let log = MemoryDiagnostics::new();
        let store = SessionStore::new(
            settings,
            SessionPaths::with_base_dir(PathBuf::from(BASE)),
            Box::new(files.clone()),
            Box::new(log.clone()),
        );
        Harness { store, files, log }
    }

    /// Store bound to "test", saving on change, logging everything
    pub fn opened() -> Harness {
        let mut h = harness_with(Settings::new(
            SaveMode::OnChange,
            LogMode::All,
            Obfuscation::Plain,
        ));
        h.store.open("test").unwrap();
        h
    }
}
