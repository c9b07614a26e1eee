//! Variable operations on a [`SessionStore`]
//!
//! Reading a variable that does not exist binds the supplied default and
//! returns it, persisting per the save policy.

use super::SessionStore;
use crate::diagnostics::Level;
use crate::error::{SessionError, SessionResult};
use crate::models::{Scalar, Variable};

impl SessionStore {
    /// Look up a variable by name
    pub fn variable(&self, name: &str) -> Option<&Variable> {
        self.data.variable(name)
    }

    /// Current value of an existing variable
    pub fn var_value(&self, name: &str) -> SessionResult<Scalar> {
        self.data
            .variable(name)
            .ok_or_else(|| SessionError::variable_not_found(name))?
            .value()
    }

    /// Read a variable, binding `default` if it is absent
    ///
    /// The stored type must match the type of `default`.
    pub fn get_var(&mut self, name: &str, default: impl Into<Scalar>) -> SessionResult<Scalar> {
        let default = default.into();

        if let Some(existing) = self.data.variable(name) {
            let expected = default.scalar_type();
            if existing.kind != expected {
                return Err(SessionError::TypeMismatch {
                    name: name.to_string(),
                    expected: expected.name(),
                    found: existing.kind.name(),
                });
            }
            return existing.value();
        }

        self.bind(name, &default)?;
        self.emit(
            Level::Info,
            format!("Variable {} not found, created it with value {}", name, default),
        );
        Ok(default)
    }

    pub fn get_string_var(&mut self, name: &str, default: &str) -> SessionResult<String> {
        match self.get_var(name, default)? {
            Scalar::Str(s) => Ok(s),
            other => Err(unexpected(name, &other)),
        }
    }

    pub fn get_int_var(&mut self, name: &str, default: i32) -> SessionResult<i32> {
        match self.get_var(name, default)? {
            Scalar::Int(i) => Ok(i),
            other => Err(unexpected(name, &other)),
        }
    }

    pub fn get_float_var(&mut self, name: &str, default: f32) -> SessionResult<f32> {
        match self.get_var(name, default)? {
            Scalar::Float(f) => Ok(f),
            other => Err(unexpected(name, &other)),
        }
    }

    /// Bind `name` to `value`, replacing any previous binding of any type
    pub fn set_var(&mut self, name: &str, value: impl Into<Scalar>) -> SessionResult<()> {
        let value = value.into();
        let replaced = self.bind(name, &value)?;

        let message = if replaced {
            format!("Variable {} set to {}", name, value)
        } else {
            format!("Variable {} created with value {}", name, value)
        };
        self.emit(Level::Info, message);
        Ok(())
    }

    /// Validate, bind and persist; returns true if a binding was replaced
    fn bind(&mut self, name: &str, value: &Scalar) -> SessionResult<bool> {
        self.check_name("Variable", name)?;
        self.check_value(value)?;
        self.apply(|data| data.set_variable(name, value))
    }
}

// get_var always returns the default's type, so this only guards the match
fn unexpected(name: &str, value: &Scalar) -> SessionError {
    SessionError::TypeMismatch {
        name: name.to_string(),
        expected: "matching type",
        found: value.scalar_type().name(),
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_support::*;
    use crate::config::{LogMode, Obfuscation, SaveMode, Settings};
    use crate::diagnostics::Level;
    use crate::error::SessionError;
    use crate::models::{Scalar, ScalarType};

    #[test]
    fn test_default_inserted_on_read() {
        let mut h = opened();

        assert_eq!(h.store.get_float_var("Volume", 1.0).unwrap(), 1.0);

        let var = h.store.variable("Volume").unwrap();
        assert_eq!(var.kind, ScalarType::Float);
        assert_eq!(var.content, "1");
        assert_eq!(h.on_disk("test").as_deref(), Some("-^Volume]2.1]"));

        // a second read returns the stored value, not the new default
        assert_eq!(h.store.get_float_var("Volume", 0.25).unwrap(), 1.0);
    }

    #[test]
    fn test_default_not_persisted_when_manual() {
        let mut h = harness_with(Settings::new(
            SaveMode::Manual,
            LogMode::Nothing,
            Obfuscation::Plain,
        ));
        h.store.open("test").unwrap();

        assert_eq!(h.store.get_int_var("Lives", 3).unwrap(), 3);
        assert_eq!(h.on_disk("test").as_deref(), Some("-"));
        assert!(h.store.variable("Lives").is_some());
    }

    #[test]
    fn test_type_mismatch() {
        let mut h = opened();
        h.store.set_var("Name", "ada").unwrap();

        let err = h.store.get_int_var("Name", 0).unwrap_err();
        match err {
            SessionError::TypeMismatch {
                name,
                expected,
                found,
            } => {
                assert_eq!(name, "Name");
                assert_eq!(expected, "integer");
                assert_eq!(found, "string");
            }
            other => panic!("unexpected error: {other}"),
        }
        assert!(h.store.get_float_var("Name", 0.0).unwrap_err().is_type_mismatch());
        assert_eq!(h.store.get_string_var("Name", "").unwrap(), "ada");
    }

    #[test]
    fn test_set_var_replaces_and_moves_to_end() {
        let mut h = opened();
        h.store.set_var("A", 1).unwrap();
        h.store.set_var("B", 2).unwrap();
        h.store.set_var("A", "one").unwrap();

        assert_eq!(h.store.variables().len(), 2);
        assert_eq!(h.store.variables()[1].name, "A");
        assert_eq!(h.store.var_value("A").unwrap(), Scalar::from("one"));
        assert_eq!(h.on_disk("test").as_deref(), Some("-^B]1.2]^A]0.one]"));
    }

    #[test]
    fn test_set_var_validates() {
        let mut h = opened();
        assert!(h.store.set_var("", 1).unwrap_err().is_validation());
        assert!(h.store.set_var("x^y", 1).unwrap_err().is_validation());
        assert!(h.store.set_var("Name", "a]b").unwrap_err().is_validation());
        assert!(h.store.variables().is_empty());
        assert_eq!(h.on_disk("test").as_deref(), Some("-"));
    }

    #[test]
    fn test_var_value_missing() {
        let h = opened();
        assert!(h.store.var_value("Ghost").unwrap_err().is_not_found());
    }

    #[test]
    fn test_negative_and_text_values() {
        let mut h = opened();
        h.store.set_var("Offset", -1).unwrap();
        h.store.set_var("Title", "a-b.c").unwrap();

        assert_eq!(
            h.on_disk("test").as_deref(),
            Some("-^Offset]1.-1]^Title]0.a-b.c]")
        );
        assert_eq!(h.store.get_int_var("Offset", 0).unwrap(), -1);
        assert_eq!(h.store.get_string_var("Title", "").unwrap(), "a-b.c");
    }

    #[test]
    fn test_diagnostics_distinguish_create_and_replace() {
        let mut h = opened();
        h.log.clear();

        h.store.set_var("Lives", 3).unwrap();
        h.store.set_var("Lives", 2).unwrap();

        let info = h.log.at_level(Level::Info);
        assert_eq!(info.len(), 2);
        assert!(info[0].message.contains("created"));
        assert!(info[1].message.contains("set to"));
    }
}
