//! Format registry for format discovery and selection
//!
//! Formats are registered and retrieved by name.

use crate::config::OutputConfig;
use crate::error::FormatError;
use crate::format::Format;
use crate::formats::{JsonFormat, PythonFormat, YamlFormat};
use crate::table::SymbolTable;
use std::collections::HashMap;

/// Registry of output formats
pub struct FormatRegistry {
    formats: HashMap<String, Box<dyn Format>>,
}

impl FormatRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        FormatRegistry {
            formats: HashMap::new(),
        }
    }

    /// Create a registry holding every built-in format
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        registry.register(PythonFormat);
        registry.register(JsonFormat);
        registry.register(YamlFormat);
        registry
    }

    /// Register a format
    ///
    /// If a format with the same name already exists, it will be replaced.
    pub fn register<F: Format + 'static>(&mut self, format: F) {
        self.formats
            .insert(format.name().to_string(), Box::new(format));
    }

    /// Get a format by name
    pub fn get(&self, name: &str) -> Result<&dyn Format, FormatError> {
        self.formats
            .get(name)
            .map(|f| f.as_ref())
            .ok_or_else(|| FormatError::FormatNotFound(name.to_string()))
    }

    /// Check if a format exists
    pub fn has(&self, name: &str) -> bool {
        self.formats.contains_key(name)
    }

    /// List all available format names (sorted)
    pub fn list_formats(&self) -> Vec<String> {
        let mut names: Vec<_> = self.formats.keys().cloned().collect();
        names.sort();
        names
    }

    /// Serialize a table using the specified format
    pub fn serialize(
        &self,
        table: &SymbolTable,
        format: &str,
        config: &OutputConfig,
    ) -> Result<String, FormatError> {
        self.get(format)?.serialize(table, config)
    }
}

impl Default for FormatRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}
