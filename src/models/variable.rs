//! Variable model
//!
//! A named scalar binding. Names act as primary keys within a store.

use super::scalar::{Scalar, ScalarType};
use crate::error::SessionResult;

/// A named scalar variable
#[derive(Debug, Clone, PartialEq)]
pub struct Variable {
    /// Unique variable name
    pub name: String,

    /// Type tag of the stored value
    pub kind: ScalarType,

    /// Canonical text of the value
    pub content: String,
}

impl Variable {
    /// Create a variable from a typed value
    pub fn new(name: impl Into<String>, value: &Scalar) -> Self {
        Self {
            name: name.into(),
            kind: value.scalar_type(),
            content: value.to_content(),
        }
    }

    /// Typed view of the stored value
    pub fn value(&self) -> SessionResult<Scalar> {
        Scalar::from_content(self.kind, &self.content)
    }
}
