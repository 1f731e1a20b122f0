//! Converter registry for discovery and selection
//!
//! This module provides a centralized registry for all available converters.
//! Converters can be registered and retrieved by name.

use crate::convert::Converter;
use crate::error::ConvertError;
use std::collections::HashMap;

/// Registry of document converters
///
/// Provides a centralized registry for all available converters.
/// Converters can be registered and retrieved by name.
///
/// # Examples
///
/// ```ignore
/// let mut registry = ConverterRegistry::new();
/// registry.register(MyConverter);
///
/// let converter = registry.get("my-converter")?;
/// let output = converter.convert("source text")?;
/// ```
pub struct ConverterRegistry {
    converters: HashMap<String, Box<dyn Converter>>,
}

impl ConverterRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        ConverterRegistry {
            converters: HashMap::new(),
        }
    }

    /// Register a converter
    ///
    /// If a converter with the same name already exists, it will be replaced.
    pub fn register<C: Converter + 'static>(&mut self, converter: C) {
        self.converters
            .insert(converter.name().to_string(), Box::new(converter));
    }

    /// Get a converter by name
    pub fn get(&self, name: &str) -> Result<&dyn Converter, ConvertError> {
        self.converters
            .get(name)
            .map(|c| c.as_ref())
            .ok_or_else(|| ConvertError::ConverterNotFound(name.to_string()))
    }

    /// Check if a converter exists
    pub fn has(&self, name: &str) -> bool {
        self.converters.contains_key(name)
    }

    /// List all available converter names (sorted)
    pub fn list_converters(&self) -> Vec<String> {
        let mut names: Vec<_> = self.converters.keys().cloned().collect();
        names.sort();
        names
    }

    /// Detect the converter for a filename based on its extension
    ///
    /// The extension identifies the converter that consumes that kind of input
    /// (`doc.md` → "storage", `doc.html` → "markdown"). Returns None if no
    /// registered converter claims the extension.
    pub fn detect_converter_from_filename(&self, filename: &str) -> Option<String> {
        let extension = std::path::Path::new(filename)
            .extension()
            .and_then(|ext| ext.to_str())?;

        for converter in self.converters.values() {
            if converter.file_extensions().contains(&extension) {
                return Some(converter.name().to_string());
            }
        }

        None
    }

    /// Convert source text using the named converter
    pub fn convert(&self, source: &str, converter: &str) -> Result<String, ConvertError> {
        self.get(converter)?.convert(source)
    }

    /// Convert source text using the named converter and options
    pub fn convert_with_options(
        &self,
        source: &str,
        converter: &str,
        options: &HashMap<String, String>,
    ) -> Result<String, ConvertError> {
        self.get(converter)?.convert_with_options(source, options)
    }

    /// Create a registry with the built-in converters
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();

        registry.register(crate::storage::StorageFormat);
        registry.register(crate::markdown::MarkdownLightFormat);

        registry
    }
}

impl Default for ConverterRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}
