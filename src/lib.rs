//! # c4d-symbols
//!
//! Extracts symbol ids from a `c4d_symbols.h` resource header.
//!
//! The header is a single C enumeration written by the resource editor. This crate reads it
//! line by line, resolves the id of every enumerator and writes the resulting name to id
//! mapping out in one of several formats.
//!
//! File Layout
//!
//!     .
//!     ├── extraction.rs   # line classification and id resolution
//!     ├── table.rs        # SymbolTable, the extraction result
//!     ├── format.rs       # Format trait definition
//!     ├── formats         # python, json and yaml serializers
//!     ├── registry.rs     # FormatRegistry for discovery and selection
//!     ├── config.rs       # layered configuration loader
//!     ├── error.rs
//!     └── bin/c4d-symbols.rs
//!
//! The library performs no printing and reads no environment; the binary owns the shell side
//! (arguments, stdout, logging setup).

pub mod config;
pub mod error;
pub mod extraction;
pub mod format;
pub mod formats;
pub mod registry;
pub mod table;

pub use error::{CommandError, FormatError, SymbolsError};
pub use extraction::{extract, extract_path, extract_reader, extract_str};
pub use table::{Symbol, SymbolTable};
