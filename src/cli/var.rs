//! Variable CLI commands

use clap::Subcommand;

use super::list::{parse_kind, parse_typed_value};
use crate::error::{SessionError, SessionResult};
use crate::models::Scalar;
use crate::session::SessionStore;

/// Variable subcommands
#[derive(Subcommand)]
pub enum VarCommands {
    /// Print a variable
    ///
    /// With --default, a missing variable is created holding that value.
    Get {
        /// Variable name
        name: String,
        /// Expected type (string, int, float); required with --default
        #[arg(short = 't', long = "type", value_name = "TYPE")]
        kind: Option<String>,
        /// Value to bind if the variable does not exist
        #[arg(short, long, allow_hyphen_values = true)]
        default: Option<String>,
    },
    /// Bind a variable, replacing any previous value
    Set {
        /// Variable name
        name: String,
        /// Value type (string, int, float)
        #[arg(value_name = "TYPE")]
        kind: String,
        /// Value
        #[arg(allow_hyphen_values = true)]
        value: String,
    },
    /// Print every variable
    List,
}

impl VarCommands {
    /// Whether this command may change the session
    pub fn mutates(&self) -> bool {
        match self {
            Self::Get { default, .. } => default.is_some(),
            Self::Set { .. } => true,
            Self::List => false,
        }
    }
}

/// Handle a variable command
pub fn handle_var_command(store: &mut SessionStore, cmd: VarCommands) -> SessionResult<()> {
    match cmd {
        VarCommands::Get {
            name,
            kind,
            default,
        } => {
            let value = match (kind, default) {
                (kind, Some(default)) => {
                    let kind = kind.as_deref().unwrap_or("string");
                    let default = parse_typed_value(kind, &default)?;
                    store.get_var(&name, default)?
                }
                (Some(kind), None) => {
                    let kind = parse_kind(&kind)?;
                    let value = store.var_value(&name)?;
                    if value.scalar_type() != kind {
                        return Err(SessionError::TypeMismatch {
                            name,
                            expected: kind.name(),
                            found: value.scalar_type().name(),
                        });
                    }
                    value
                }
                (None, None) => store.var_value(&name)?,
            };
            println!("{}", value);
        }

        VarCommands::Set { name, kind, value } => {
            let value: Scalar = parse_typed_value(&kind, &value)?;
            store.set_var(&name, value.clone())?;
            println!("{} = {}", name, value);
        }

        VarCommands::List => {
            if store.variables().is_empty() {
                println!("No variables found.");
            } else {
                print!("{}", crate::display::format_variables(store.variables()));
            }
        }
    }

    Ok(())
}
