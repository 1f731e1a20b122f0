//! Converter trait definition
//!
//! This module defines the core Converter trait that all converter implementations must
//! implement. The trait provides a uniform interface for one-way document conversions.

use crate::error::ConvertError;
use std::collections::HashMap;

/// Trait for document converters
///
/// Implementors provide a one-way transformation from a source representation to a
/// target representation. Both sides are plain strings; converters perform no I/O.
///
/// # Examples
///
/// ```ignore
/// struct MyConverter;
///
/// impl Converter for MyConverter {
///     fn name(&self) -> &str {
///         "my-converter"
///     }
///
///     fn convert(&self, source: &str) -> Result<String, ConvertError> {
///         Ok(source.to_uppercase())
///     }
/// }
/// ```
pub trait Converter: Send + Sync {
    /// The name of this converter (e.g., "storage", "markdown")
    fn name(&self) -> &str;

    /// Optional description of this converter
    fn description(&self) -> &str {
        ""
    }

    /// File extensions this converter accepts as input (without the leading dot)
    ///
    /// Used for automatic converter detection from filenames.
    fn file_extensions(&self) -> &[&str] {
        &[]
    }

    /// Convert source text with default rules
    fn convert(&self, source: &str) -> Result<String, ConvertError>;

    /// Convert source text, optionally using extra parameters.
    ///
    /// Converters without tunable behavior can rely on the default implementation,
    /// which delegates to [`Converter::convert`] when no parameters are given.
    fn convert_with_options(
        &self,
        source: &str,
        options: &HashMap<String, String>,
    ) -> Result<String, ConvertError> {
        if options.is_empty() {
            self.convert(source)
        } else {
            Err(ConvertError::NotSupported(format!(
                "Converter '{}' does not support extra parameters",
                self.name()
            )))
        }
    }
}

/// Parse a boolean option value, mirroring the CLI's flag conventions.
pub fn parse_bool_option(key: &str, raw: &str) -> Result<bool, ConvertError> {
    match raw.to_lowercase().as_str() {
        "true" | "1" | "yes" | "y" => Ok(true),
        "false" | "0" | "no" | "n" => Ok(false),
        other => Err(ConvertError::InvalidOption(format!(
            "expected a boolean for '{key}', got '{other}'"
        ))),
    }
}

/// Parse a single-character option value.
pub fn parse_char_option(key: &str, raw: &str) -> Result<char, ConvertError> {
    let mut chars = raw.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Ok(c),
        _ => Err(ConvertError::InvalidOption(format!(
            "expected a single character for '{key}', got '{raw}'"
        ))),
    }
}
