//! Session-level CLI commands
//!
//! Dumping, obfuscation, clearing, configuration and diagnostics history.

use crate::config::{LogMode, Obfuscation, SaveMode, SessionPaths, Settings};
use crate::diagnostics::{JournalDiagnostics, Level};
use crate::display::{format_history, format_session};
use crate::error::{SessionError, SessionResult};
use crate::session::SessionStore;

/// Print every list and variable of the open session
pub fn handle_show(store: &SessionStore) -> SessionResult<()> {
    if let Some(path) = store.bound_path() {
        println!("Session: {}", path.display());
        println!();
    }
    print!("{}", format_session(store.data()));
    Ok(())
}

/// Print the session file exactly as stored
pub fn handle_raw(store: &SessionStore) -> SessionResult<()> {
    println!("{}", store.file_content());
    Ok(())
}

/// Rewrite the open session file in `mode` and make it the configured mode
pub fn handle_obfuscation(
    paths: &SessionPaths,
    store: &mut SessionStore,
    mode: Obfuscation,
) -> SessionResult<()> {
    if store.settings().obfuscation == mode {
        println!("Session file is already {}.", mode);
        return Ok(());
    }

    store.rewrite_as(mode)?;

    let mut settings = store.settings().clone();
    settings.obfuscation = mode;
    settings.save(paths)?;
    store.configure(settings);

    println!("Session file is now {}.", mode);
    Ok(())
}

/// Delete the session file and all its data
pub fn handle_clear(store: &mut SessionStore) -> SessionResult<()> {
    store.clear_all()?;
    println!("Session cleared.");
    Ok(())
}

/// Show the configuration, or update it when any option is given
pub fn handle_config(
    paths: &SessionPaths,
    settings: &mut Settings,
    save_mode: Option<String>,
    log_mode: Option<String>,
    obfuscation: Option<String>,
) -> SessionResult<()> {
    let changed = save_mode.is_some() || log_mode.is_some() || obfuscation.is_some();

    if let Some(mode) = save_mode {
        settings.save_mode = SaveMode::parse(&mode).ok_or_else(|| {
            SessionError::Validation(format!(
                "Invalid save mode: '{}'. Valid modes: on-change, manual",
                mode
            ))
        })?;
    }
    if let Some(mode) = log_mode {
        settings.log_mode = LogMode::parse(&mode).ok_or_else(|| {
            SessionError::Validation(format!(
                "Invalid log mode: '{}'. Valid modes: all, important, nothing",
                mode
            ))
        })?;
    }
    if let Some(mode) = obfuscation {
        settings.obfuscation = Obfuscation::parse(&mode).ok_or_else(|| {
            SessionError::Validation(format!(
                "Invalid obfuscation: '{}'. Valid modes: plain, encrypted",
                mode
            ))
        })?;
    }

    if changed {
        settings.save(paths)?;
        println!("Configuration updated.");
        println!();
    }

    println!("Session Store Configuration");
    println!("===========================");
    println!("Base directory:  {}", paths.base_dir().display());
    println!("Data directory:  {}", paths.data_dir().display());
    println!("Settings file:   {}", paths.settings_file().display());
    println!("Journal file:    {}", paths.journal_file().display());
    println!();
    println!("Settings:");
    println!("  Save mode:     {}", settings.save_mode);
    println!("  Log mode:      {}", settings.log_mode);
    println!("  Obfuscation:   {}", settings.obfuscation);
    Ok(())
}

/// Print the most recent journal entries at `level` or above
pub fn handle_history(
    paths: &SessionPaths,
    limit: usize,
    level: Option<String>,
) -> SessionResult<()> {
    let min_level = match level {
        None => Level::Info,
        Some(level) => Level::parse(&level).ok_or_else(|| {
            SessionError::Validation(format!(
                "Invalid level: '{}'. Valid levels: info, warn, error",
                level
            ))
        })?,
    };

    let journal = JournalDiagnostics::new(paths.journal_file());
    let entries = journal.recent(limit, min_level)?;
    print!("{}", format_history(&entries));
    Ok(())
}
