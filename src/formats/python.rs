//! Python literal serialization
//!
//! The default output: a dict literal assigned to a variable, one entry per line, ascending
//! by id. Scripts that load symbol ids by executing this text depend on the exact shape.
//!
//! ```text
//! res = {
//!     '_FIRST_ELEMENT_': 10000,
//!     'DLG_BATCHRENDERPOSTSCRIPT': 10001,
//! }
//! ```

use crate::config::OutputConfig;
use crate::error::FormatError;
use crate::format::Format;
use crate::table::SymbolTable;
use std::fmt::Write;

pub struct PythonFormat;

impl Format for PythonFormat {
    fn name(&self) -> &str {
        "python"
    }

    fn description(&self) -> &str {
        "Python dict literal assigned to a variable"
    }

    fn serialize(&self, table: &SymbolTable, config: &OutputConfig) -> Result<String, FormatError> {
        let mut output = String::new();
        let write_err = |e: std::fmt::Error| FormatError::Serialization(e.to_string());

        writeln!(output, "{} = {{", config.variable).map_err(write_err)?;
        for symbol in table.sorted_by_value() {
            writeln!(
                output,
                "{}{}: {},",
                config.indent,
                quote(&symbol.name),
                symbol.value
            )
            .map_err(write_err)?;
        }
        output.push_str("}\n");

        Ok(output)
    }
}

/// Quote a name the way Python's `repr` quotes a plain string
fn quote(name: &str) -> String {
    if name.contains('\'') && !name.contains('"') {
        return format!("\"{}\"", name.replace('\\', "\\\\"));
    }
    let mut quoted = String::with_capacity(name.len() + 2);
    quoted.push('\'');
    for c in name.chars() {
        match c {
            '\\' => quoted.push_str("\\\\"),
            '\'' => quoted.push_str("\\'"),
            _ => quoted.push(c),
        }
    }
    quoted.push('\'');
    quoted
}
