//! YAML mapping serialization

use crate::config::OutputConfig;
use crate::error::FormatError;
use crate::format::Format;
use crate::table::SymbolTable;

pub struct YamlFormat;

impl Format for YamlFormat {
    fn name(&self) -> &str {
        "yaml"
    }

    fn description(&self) -> &str {
        "YAML mapping, symbols in id order"
    }

    fn serialize(&self, table: &SymbolTable, _config: &OutputConfig) -> Result<String, FormatError> {
        Ok(serde_yaml::to_string(table)?)
    }
}
