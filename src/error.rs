//! Error types
//!
//! Extraction itself never fails: lines that are not enumerator declarations are skipped.
//! The errors here cover the boundary around it (reading input, loading configuration,
//! picking and running an output format) plus [`CommandError`], the generic failure a
//! command mode can raise.

use std::io;
use std::path::PathBuf;

/// Generic failure raised by a command mode
///
/// Carries a human-readable message that the command surface reports verbatim.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct CommandError {
    pub message: String,
}

impl CommandError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Errors raised while selecting or running an output format
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FormatError {
    #[error("Format '{0}' not found")]
    FormatNotFound(String),

    #[error("Serialization failed: {0}")]
    Serialization(String),
}

impl From<serde_json::Error> for FormatError {
    fn from(err: serde_json::Error) -> Self {
        FormatError::Serialization(err.to_string())
    }
}

impl From<serde_yaml::Error> for FormatError {
    fn from(err: serde_yaml::Error) -> Self {
        FormatError::Serialization(err.to_string())
    }
}

/// Top-level error for the library
#[derive(Debug, thiserror::Error)]
pub enum SymbolsError {
    #[error("can't open '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Read error: {0}")]
    Read(#[from] io::Error),

    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error(transparent)]
    Format(#[from] FormatError),

    #[error(transparent)]
    Command(#[from] CommandError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn command_error_displays_its_message() {
        let err = CommandError::new("no symbols to extract");
        assert_eq!(err.to_string(), "no symbols to extract");
        assert_eq!(err.message, "no symbols to extract");
    }

    #[test]
    fn io_error_names_the_path() {
        let err = SymbolsError::Io {
            path: PathBuf::from("missing/c4d_symbols.h"),
            source: io::Error::new(io::ErrorKind::NotFound, "No such file or directory"),
        };
        assert_eq!(
            err.to_string(),
            "can't open 'missing/c4d_symbols.h': No such file or directory"
        );
    }

    #[test]
    fn command_error_is_transparent_in_symbols_error() {
        let err: SymbolsError = CommandError::new("unsupported header").into();
        assert_eq!(err.to_string(), "unsupported header");
    }
}
