//! JSON object serialization

use crate::config::OutputConfig;
use crate::error::FormatError;
use crate::format::Format;
use crate::table::SymbolTable;

pub struct JsonFormat;

impl Format for JsonFormat {
    fn name(&self) -> &str {
        "json"
    }

    fn description(&self) -> &str {
        "JSON object, symbols in id order"
    }

    fn serialize(&self, table: &SymbolTable, _config: &OutputConfig) -> Result<String, FormatError> {
        let mut output = serde_json::to_string_pretty(table)?;
        output.push('\n');
        Ok(output)
    }
}
