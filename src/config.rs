//! Configuration loading
//!
//! `defaults/c4d-symbols.default.toml` is embedded into the binary so the documented defaults
//! and the runtime behavior cannot drift apart. User files and CLI flags are layered on top
//! of those defaults via [`Loader`] before deserializing into [`SymbolsConfig`].

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, File, FileFormat, ValueKind};
use serde::Deserialize;
use std::path::Path;

const DEFAULT_TOML: &str = include_str!("../defaults/c4d-symbols.default.toml");

/// Per-project configuration file, picked up from the working directory when present.
pub const PROJECT_CONFIG: &str = "c4d-symbols.toml";

/// Top-level configuration
#[derive(Debug, Clone, Deserialize)]
pub struct SymbolsConfig {
    pub output: OutputConfig,
}

/// Controls how an extracted table is written out
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct OutputConfig {
    pub format: String,
    pub variable: String,
    pub indent: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: "python".to_string(),
            variable: "res".to_string(),
            indent: "    ".to_string(),
        }
    }
}

/// Layers project files, `--config` files and flag overrides over the embedded defaults.
///
/// Later sources win.
#[derive(Debug, Clone)]
pub struct Loader {
    builder: ConfigBuilder<DefaultState>,
}

impl Loader {
    /// Loader holding only the embedded defaults.
    pub fn new() -> Self {
        let builder = Config::builder().add_source(File::from_str(DEFAULT_TOML, FileFormat::Toml));
        Self { builder }
    }

    /// Layer a TOML file that must exist.
    pub fn with_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(true);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Layer a TOML file, skipped when absent.
    pub fn with_optional_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(false);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Apply a single key/value override (e.g. `output.format` from the CLI).
    pub fn set_override<I>(mut self, key: &str, value: I) -> Result<Self, ConfigError>
    where
        I: Into<ValueKind>,
    {
        self.builder = self.builder.set_override(key, value)?;
        Ok(self)
    }

    pub fn build(self) -> Result<SymbolsConfig, ConfigError> {
        self.builder.build()?.try_deserialize()
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}
