//! Display formatting for terminal output
//!
//! Provides utilities for formatting sessions and diagnostics history
//! as plain-text tables.

pub mod session;

pub use session::{format_history, format_list, format_session, format_variables};
