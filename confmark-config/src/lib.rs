//! Shared configuration loader for the confmark toolchain.
//!
//! `defaults/confmark.default.toml` is embedded into every binary so that docs
//! and runtime behavior stay in sync. Applications layer user-specific files on
//! top of those defaults via [`Loader`] before deserializing into
//! [`ConfmarkConfig`].

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, File, FileFormat, ValueKind};
use confmark_babel::{ReduceRules, RenderRules};
use serde::Deserialize;
use std::path::Path;

const DEFAULT_TOML: &str = include_str!("../defaults/confmark.default.toml");

/// Top-level configuration consumed by confmark applications.
#[derive(Debug, Clone, Deserialize)]
pub struct ConfmarkConfig {
    pub render: RenderConfig,
    pub reduce: ReduceConfig,
}

/// Mirrors the knobs exposed by the storage-format renderer.
#[derive(Debug, Clone, Deserialize)]
pub struct RenderConfig {
    pub code_language_class: bool,
}

/// Mirrors the knobs exposed by the Markdown reducer.
#[derive(Debug, Clone, Deserialize)]
pub struct ReduceConfig {
    pub bullet_marker: char,
}

impl From<RenderConfig> for RenderRules {
    fn from(config: RenderConfig) -> Self {
        RenderRules {
            code_language_class: config.code_language_class,
        }
    }
}

impl From<&RenderConfig> for RenderRules {
    fn from(config: &RenderConfig) -> Self {
        RenderRules {
            code_language_class: config.code_language_class,
        }
    }
}

impl From<ReduceConfig> for ReduceRules {
    fn from(config: ReduceConfig) -> Self {
        ReduceRules {
            bullet_marker: config.bullet_marker,
        }
    }
}

impl From<&ReduceConfig> for ReduceRules {
    fn from(config: &ReduceConfig) -> Self {
        ReduceRules {
            bullet_marker: config.bullet_marker,
        }
    }
}

/// Helper for layering user overrides over the built-in defaults.
#[derive(Debug, Clone)]
pub struct Loader {
    builder: ConfigBuilder<DefaultState>,
}

impl Loader {
    /// Start a loader seeded with the embedded defaults.
    pub fn new() -> Self {
        let builder = Config::builder().add_source(File::from_str(DEFAULT_TOML, FileFormat::Toml));
        Self { builder }
    }

    /// Layer a configuration file. Missing files trigger an error.
    pub fn with_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(true);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Layer an optional configuration file (ignored if the file is absent).
    pub fn with_optional_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(false);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Apply a single key/value override (useful for CLI settings).
    pub fn set_override<I>(mut self, key: &str, value: I) -> Result<Self, ConfigError>
    where
        I: Into<ValueKind>,
    {
        self.builder = self.builder.set_override(key, value)?;
        Ok(self)
    }

    /// Finalize the builder and deserialize the resulting configuration.
    pub fn build(self) -> Result<ConfmarkConfig, ConfigError> {
        self.builder.build()?.try_deserialize()
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

/// Convenience helper for callers that only need the defaults.
pub fn load_defaults() -> Result<ConfmarkConfig, ConfigError> {
    Loader::new().build()
}
