//! Core data models for session-store
//!
//! This module contains the data structures that make up a session:
//! typed scalars, named variables, named lists and the document holding
//! them all.

pub mod document;
pub mod list;
pub mod scalar;
pub mod variable;

pub use document::{validate_name, validate_value, SessionData, RESERVED_CHARS};
pub use list::{ListEntry, SessionList};
pub use scalar::{approximately, Scalar, ScalarType};
pub use variable::Variable;
