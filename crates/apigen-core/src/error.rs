//! Error handling for the binding generator
//!
//! Only conditions that must stop a run are errors. Recoverable issues
//! (malformed override lines, expression kinds rendered verbatim) are
//! reported through `log::warn!` and generation continues.

use thiserror::Error;
use std::path::PathBuf;

use crate::config::ConfigError;

/// Main error type for binding generation
#[derive(Error, Debug)]
pub enum ApiGenError {
    /// The override table could not be opened or read. Fatal: nothing is emitted.
    #[error("Name override file failed to load: {}: {source}", .path.display())]
    OverrideTableLoad {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Invalid generator configuration
    #[error("Configuration error: {0}")]
    Configuration(#[from] ConfigError),

    /// The serialized header AST could not be read or decoded
    #[error("AST load error: {}: {message}", .path.display())]
    AstLoad {
        path: PathBuf,
        message: String,
    },

    /// Writing the generated file failed
    #[error("Failed to write generated file {}: {source}", .path.display())]
    Output {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl ApiGenError {
    /// Create an override table load error for `path`
    pub fn override_table_load<P: Into<PathBuf>>(path: P, source: std::io::Error) -> Self {
        Self::OverrideTableLoad {
            path: path.into(),
            source,
        }
    }

    /// Create an AST load error for `path`
    pub fn ast_load<P: Into<PathBuf>, S: Into<String>>(path: P, message: S) -> Self {
        Self::AstLoad {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Create an output error for `path`
    pub fn output<P: Into<PathBuf>>(path: P, source: std::io::Error) -> Self {
        Self::Output {
            path: path.into(),
            source,
        }
    }

    /// True for errors raised before any output could be produced
    pub fn is_fatal_load(&self) -> bool {
        matches!(self, Self::OverrideTableLoad { .. } | Self::AstLoad { .. } | Self::Configuration(_))
    }
}

/// Result type for binding generation
pub type ApiGenResult<T> = Result<T, ApiGenError>;
