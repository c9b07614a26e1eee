//! List CLI commands
//!
//! Implements CLI commands for creating, editing and querying lists.

use clap::Subcommand;

use crate::display::format_list;
use crate::error::{SessionError, SessionResult};
use crate::models::{Scalar, ScalarType};
use crate::session::SessionStore;

/// List subcommands
#[derive(Subcommand)]
pub enum ListCommands {
    /// Create an empty list
    Create {
        /// List name
        name: String,
    },
    /// Remove a list and all its entries
    Remove {
        /// List name
        name: String,
    },
    /// Append a value to a list
    Add {
        /// List name
        list: String,
        /// Value type (string, int, float)
        #[arg(value_name = "TYPE")]
        kind: String,
        /// Value to append
        #[arg(allow_hyphen_values = true)]
        value: String,
    },
    /// Print the value at an index
    Get {
        /// List name
        list: String,
        /// Entry index
        index: usize,
        /// Read as this type instead of the stored one
        #[arg(short = 't', long = "type", value_name = "TYPE")]
        kind: Option<String>,
    },
    /// Remove the entry at an index
    RemoveAt {
        /// List name
        list: String,
        /// Entry index
        index: usize,
    },
    /// Remove entries equal to a value
    RemoveValue {
        /// List name
        list: String,
        /// Value type (string, int, float)
        #[arg(value_name = "TYPE")]
        kind: String,
        /// Value to remove
        #[arg(allow_hyphen_values = true)]
        value: String,
        /// Remove every match instead of the first
        #[arg(short, long)]
        all: bool,
    },
    /// Print the index of the first entry equal to a value
    IndexOf {
        /// List name
        list: String,
        /// Value type (string, int, float)
        #[arg(value_name = "TYPE")]
        kind: String,
        /// Value to look for
        #[arg(allow_hyphen_values = true)]
        value: String,
    },
    /// Print the number of entries
    Len {
        /// List name
        list: String,
    },
    /// Print every entry of a list
    Show {
        /// List name
        list: String,
    },
}

impl ListCommands {
    /// Whether this command changes the session
    pub fn mutates(&self) -> bool {
        matches!(
            self,
            Self::Create { .. }
                | Self::Remove { .. }
                | Self::Add { .. }
                | Self::RemoveAt { .. }
                | Self::RemoveValue { .. }
        )
    }
}

/// Parse a `<type> <value>` pair from the command line
pub fn parse_typed_value(kind: &str, value: &str) -> SessionResult<Scalar> {
    let kind = parse_kind(kind)?;
    Scalar::parse_as(kind, value)
}

pub(crate) fn parse_kind(kind: &str) -> SessionResult<ScalarType> {
    ScalarType::parse(kind).ok_or_else(|| {
        SessionError::Validation(format!(
            "Invalid type: '{}'. Valid types: string, int, float",
            kind
        ))
    })
}

/// Handle a list command
pub fn handle_list_command(store: &mut SessionStore, cmd: ListCommands) -> SessionResult<()> {
    match cmd {
        ListCommands::Create { name } => {
            store.create_list(&name)?;
            println!("List: {}", name);
        }

        ListCommands::Remove { name } => {
            store.remove_list(&name)?;
            println!("Removed list: {}", name);
        }

        ListCommands::Add { list, kind, value } => {
            let value = parse_typed_value(&kind, &value)?;
            store.add(&list, value.clone())?;
            let index = store.list_len(&list)? - 1;
            println!("Added {} to {} at index {}", value, list, index);
        }

        ListCommands::Get { list, index, kind } => {
            let value = match kind {
                None => store.get_at(&list, index)?,
                Some(kind) => match parse_kind(&kind)? {
                    ScalarType::String => Scalar::Str(store.get_string_at(&list, index)?),
                    ScalarType::Int => Scalar::Int(store.get_int_at(&list, index)?),
                    ScalarType::Float => Scalar::Float(store.get_float_at(&list, index)?),
                },
            };
            println!("{}", value);
        }

        ListCommands::RemoveAt { list, index } => {
            let before = store.list_len(&list)?;
            store.remove_at(&list, index)?;
            if store.list_len(&list)? < before {
                println!("Removed index {} from {}", index, list);
            } else {
                println!("Index {} is out of range for {} (length {})", index, list, before);
            }
        }

        ListCommands::RemoveValue {
            list,
            kind,
            value,
            all,
        } => {
            let value = parse_typed_value(&kind, &value)?;
            let removed = store.remove_value(&list, value.clone(), all)?;
            println!("Removed {} occurrence(s) of '{}' from {}", removed, value, list);
        }

        ListCommands::IndexOf { list, kind, value } => {
            let value = parse_typed_value(&kind, &value)?;
            match store.index_of(&list, value)? {
                Some(index) => println!("{}", index),
                None => println!("-1"),
            }
        }

        ListCommands::Len { list } => {
            println!("{}", store.list_len(&list)?);
        }

        ListCommands::Show { list } => {
            let found = store
                .list(&list)
                .ok_or_else(|| SessionError::list_not_found(&list))?;
            print!("{}", format_list(found));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_typed_value() {
        assert_eq!(parse_typed_value("int", "-7").unwrap(), Scalar::Int(-7));
        assert_eq!(parse_typed_value("float", "0.5").unwrap(), Scalar::Float(0.5));
        assert_eq!(parse_typed_value("string", "hi").unwrap(), Scalar::from("hi"));
        assert!(parse_typed_value("int", "seven").unwrap_err().is_validation());
        assert!(parse_typed_value("bool", "true").unwrap_err().is_validation());
    }

    #[test]
    fn test_mutating_commands() {
        assert!(ListCommands::Create { name: "L".into() }.mutates());
        assert!(!ListCommands::Len { list: "L".into() }.mutates());
    }
}
