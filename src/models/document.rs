//! Session document model
//!
//! The aggregate of all lists and variables held by one store. This is
//! the unit the codec encodes and decodes.

use super::list::SessionList;
use super::scalar::Scalar;
use super::variable::Variable;
use crate::error::{SessionError, SessionResult};

/// Characters that delimit names and entries in the document format
pub const RESERVED_CHARS: [char; 2] = ['^', ']'];

/// All lists and variables of a session
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SessionData {
    /// Lists in creation order
    pub lists: Vec<SessionList>,

    /// Variables in binding order
    pub variables: Vec<Variable>,
}

impl SessionData {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.lists.is_empty() && self.variables.is_empty()
    }

    pub fn clear(&mut self) {
        self.lists.clear();
        self.variables.clear();
    }

    /// Look up a list by name
    pub fn list(&self, name: &str) -> Option<&SessionList> {
        self.lists.iter().find(|l| l.name == name)
    }

    /// Look up a list by name for mutation
    pub fn list_mut(&mut self, name: &str) -> Option<&mut SessionList> {
        self.lists.iter_mut().find(|l| l.name == name)
    }

    pub fn has_list(&self, name: &str) -> bool {
        self.list(name).is_some()
    }

    /// Append an empty list; returns false if the name is taken
    pub fn add_list(&mut self, name: &str) -> bool {
        if self.has_list(name) {
            return false;
        }
        self.lists.push(SessionList::new(name));
        true
    }

    /// Remove a list and all its entries
    pub fn remove_list(&mut self, name: &str) -> Option<SessionList> {
        let pos = self.lists.iter().position(|l| l.name == name)?;
        Some(self.lists.remove(pos))
    }

    /// Look up a variable by name
    pub fn variable(&self, name: &str) -> Option<&Variable> {
        self.variables.iter().find(|v| v.name == name)
    }

    /// Bind a variable, replacing any existing binding with that name
    ///
    /// The new binding is appended at the end. Returns true if a previous
    /// binding was replaced.
    pub fn set_variable(&mut self, name: &str, value: &Scalar) -> bool {
        let replaced = match self.variables.iter().position(|v| v.name == name) {
            Some(pos) => {
                self.variables.remove(pos);
                true
            }
            None => false,
        };
        self.variables.push(Variable::new(name, value));
        replaced
    }
}

/// Check a list or variable name against the document format
pub fn validate_name(entity: &str, name: &str) -> SessionResult<()> {
    if name.is_empty() {
        return Err(SessionError::Validation(format!(
            "{} name cannot be empty",
            entity
        )));
    }
    if let Some(c) = name.chars().find(|c| RESERVED_CHARS.contains(c)) {
        return Err(SessionError::Validation(format!(
            "{} name '{}' contains reserved character '{}'",
            entity, name, c
        )));
    }
    Ok(())
}

/// Check a value's text against the document format
pub fn validate_value(value: &Scalar) -> SessionResult<()> {
    if let Scalar::Str(s) = value {
        if let Some(c) = s.chars().find(|c| RESERVED_CHARS.contains(c)) {
            return Err(SessionError::Validation(format!(
                "value '{}' contains reserved character '{}'",
                s, c
            )));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_list_rejects_duplicates() {
        let mut data = SessionData::new();
        assert!(data.add_list("Scores"));
        assert!(!data.add_list("Scores"));
        assert_eq!(data.lists.len(), 1);
    }

    #[test]
    fn test_remove_list() {
        let mut data = SessionData::new();
        data.add_list("A");
        data.add_list("B");
        assert!(data.remove_list("A").is_some());
        assert!(data.remove_list("A").is_none());
        assert_eq!(data.lists[0].name, "B");
    }

    #[test]
    fn test_set_variable_replaces_and_moves_to_end() {
        let mut data = SessionData::new();
        assert!(!data.set_variable("A", &Scalar::Int(1)));
        data.set_variable("B", &Scalar::Int(2));
        assert!(data.set_variable("A", &Scalar::Float(1.5)));

        assert_eq!(data.variables.len(), 2);
        assert_eq!(data.variables[1].name, "A");
        assert_eq!(data.variable("A").unwrap().content, "1.5");
    }

    #[test]
    fn test_validate_name() {
        assert!(validate_name("List", "Scores").is_ok());
        assert!(validate_name("List", "high-scores.v2").is_ok());
        assert!(validate_name("List", "").unwrap_err().is_validation());
        assert!(validate_name("List", "a^b").is_err());
        assert!(validate_name("Variable", "a]b").is_err());
    }

    #[test]
    fn test_validate_value() {
        assert!(validate_value(&Scalar::from("a-b.c")).is_ok());
        assert!(validate_value(&Scalar::Int(-5)).is_ok());
        assert!(validate_value(&Scalar::from("x]y")).is_err());
        assert!(validate_value(&Scalar::from("^")).is_err());
    }
}
