//! Format trait definition
//!
//! Every output format implements [`Format`]: it turns an extracted [`SymbolTable`] into
//! text. Formats are looked up by name through the
//! [`FormatRegistry`](crate::registry::FormatRegistry).

use crate::config::OutputConfig;
use crate::error::FormatError;
use crate::table::SymbolTable;

/// Trait for output formats
///
/// Implementations must list symbols in ascending id order, which is what
/// [`SymbolTable::sorted_by_value`] and the table's `Serialize` impl provide.
pub trait Format: Send + Sync {
    /// The name of this format (e.g. "python", "json")
    fn name(&self) -> &str;

    /// Optional description of this format
    fn description(&self) -> &str {
        ""
    }

    /// Serialize a symbol table into text
    fn serialize(&self, table: &SymbolTable, config: &OutputConfig) -> Result<String, FormatError>;
}
