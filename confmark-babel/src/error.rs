//! Error types for conversion operations

use std::fmt;

/// Errors that can occur during conversion operations
///
/// Malformed input is never an error: both converters are permissive and fall
/// back to plain-text handling. Errors come from registry lookups and from
/// option values a converter cannot interpret.
#[derive(Debug, Clone, PartialEq)]
pub enum ConvertError {
    /// Converter not found in registry
    ConverterNotFound(String),
    /// An option value could not be interpreted
    InvalidOption(String),
    /// Converter does not support the requested operation
    NotSupported(String),
}

impl fmt::Display for ConvertError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConvertError::ConverterNotFound(name) => write!(f, "Converter '{name}' not found"),
            ConvertError::InvalidOption(msg) => write!(f, "Invalid option: {msg}"),
            ConvertError::NotSupported(msg) => write!(f, "Operation not supported: {msg}"),
        }
    }
}

impl std::error::Error for ConvertError {}
