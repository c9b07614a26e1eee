//! Scalar values
//!
//! Every stored value is one of three scalar types. Values are kept in
//! their canonical text form and converted back on read, so integers and
//! floats round-trip through text rather than raw binary.

use std::fmt;

use crate::error::{SessionError, SessionResult};

/// Type tag of a stored value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScalarType {
    /// Text, wire tag `0`
    String,
    /// 32-bit signed integer, wire tag `1`
    Int,
    /// 32-bit float, wire tag `2`
    Float,
}

impl ScalarType {
    /// Single-digit tag used in the session document
    pub fn tag(&self) -> char {
        match self {
            Self::String => '0',
            Self::Int => '1',
            Self::Float => '2',
        }
    }

    /// Parse a wire tag
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "0" => Some(Self::String),
            "1" => Some(Self::Int),
            "2" => Some(Self::Float),
            _ => None,
        }
    }

    /// Human-readable name used in messages and listings
    pub fn name(&self) -> &'static str {
        match self {
            Self::String => "string",
            Self::Int => "integer",
            Self::Float => "float",
        }
    }

    /// Parse a type name from user input
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "string" | "str" | "s" | "0" => Some(Self::String),
            "int" | "integer" | "i" | "1" => Some(Self::Int),
            "float" | "f" | "2" => Some(Self::Float),
            _ => None,
        }
    }

    /// Check that `content` is valid text for this type
    pub fn accepts(&self, content: &str) -> bool {
        match self {
            Self::String => true,
            Self::Int => content.parse::<i32>().is_ok(),
            Self::Float => content.parse::<f32>().is_ok(),
        }
    }
}

impl fmt::Display for ScalarType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A typed scalar value
#[derive(Debug, Clone, PartialEq)]
pub enum Scalar {
    Str(String),
    Int(i32),
    Float(f32),
}

impl Scalar {
    /// The type tag of this value
    pub fn scalar_type(&self) -> ScalarType {
        match self {
            Self::Str(_) => ScalarType::String,
            Self::Int(_) => ScalarType::Int,
            Self::Float(_) => ScalarType::Float,
        }
    }

    /// Canonical text representation stored in the document
    pub fn to_content(&self) -> String {
        match self {
            Self::Str(s) => s.clone(),
            Self::Int(i) => i.to_string(),
            Self::Float(f) => f.to_string(),
        }
    }

    /// Rebuild a scalar from its tag and stored text
    pub fn from_content(kind: ScalarType, content: &str) -> SessionResult<Self> {
        match kind {
            ScalarType::String => Ok(Self::Str(content.to_string())),
            ScalarType::Int => content.parse().map(Self::Int).map_err(|_| {
                SessionError::Parse(format!("'{}' is not a valid integer", content))
            }),
            ScalarType::Float => content.parse().map(Self::Float).map_err(|_| {
                SessionError::Parse(format!("'{}' is not a valid float", content))
            }),
        }
    }

    /// Parse user input as the given type
    pub fn parse_as(kind: ScalarType, input: &str) -> SessionResult<Self> {
        Self::from_content(kind, input)
            .map_err(|_| SessionError::Validation(format!("'{}' is not a valid {}", input, kind)))
    }
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_content())
    }
}

impl From<&str> for Scalar {
    fn from(value: &str) -> Self {
        Self::Str(value.to_string())
    }
}

impl From<String> for Scalar {
    fn from(value: String) -> Self {
        Self::Str(value)
    }
}

impl From<i32> for Scalar {
    fn from(value: i32) -> Self {
        Self::Int(value)
    }
}

impl From<f32> for Scalar {
    fn from(value: f32) -> Self {
        Self::Float(value)
    }
}

/// Approximate float equality used for lookups
///
/// Two values are equal when their difference is within a relative epsilon
/// of the larger magnitude, with an absolute floor near zero.
pub fn approximately(a: f32, b: f32) -> bool {
    let scale = a.abs().max(b.abs());
    (b - a).abs() < (1e-6 * scale).max(f32::EPSILON * 8.0)
}
