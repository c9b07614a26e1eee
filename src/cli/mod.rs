//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the session store.

pub mod list;
pub mod session;
pub mod var;

pub use list::{handle_list_command, ListCommands};
pub use session::{
    handle_clear, handle_config, handle_history, handle_obfuscation, handle_raw, handle_show,
};
pub use var::{handle_var_command, VarCommands};
