//! Obfuscation for session files
//!
//! Provides the reversible position-dependent character shift applied to
//! session documents when obfuscation is enabled.

pub mod shift;

pub use shift::{check_shiftable, shift, unshift, SEPARATOR};
