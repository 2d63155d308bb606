//! Plugin error type.

use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::engine::EngineError;

/// Error type for everything the plugin can fail at.
///
/// Construction errors (unreadable entry stylesheet, bad options) are
/// returned to the host. Per-file compilation errors never escape a hook:
/// the transform logs them and passes the importer's code through.
///
/// # Example
///
/// ```ignore
/// match plugin.compile_importer(path, &code, &mut watch) {
///     Ok(Some(css)) => { /* registry updated */ }
///     Ok(None) => { /* compiler produced no output */ }
///     Err(PluginError::Compile { importer, source }) => {
///         eprintln!("{}: {source}", importer.display());
///     }
///     Err(e) => eprintln!("{e}"),
/// }
/// ```
#[derive(Debug, Error)]
pub enum PluginError {
    /// File I/O error.
    #[error("failed to read {}: {source}", path.display())]
    Io {
        /// The file that could not be read.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// File content is not valid UTF-8.
    #[error("{} is not valid UTF-8", path.display())]
    InvalidUtf8 {
        /// The offending file.
        path: PathBuf,
    },

    /// Invalid plugin options.
    #[error("invalid options: {0}")]
    Config(String),

    /// Plugin options were not valid JSON.
    #[error("invalid options JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// The design-system compiler failed.
    #[error("compiling styles for {} failed: {source}", importer.display())]
    Compile {
        /// The file whose styles were being compiled.
        importer: PathBuf,
        /// Error reported by the compiler.
        #[source]
        source: EngineError,
    },

    /// The candidate scanner failed.
    #[error("scanning class candidates for {} failed: {source}", importer.display())]
    Scan {
        /// The file whose sources were being scanned.
        importer: PathBuf,
        /// Error reported by the scanner.
        #[source]
        source: EngineError,
    },

    /// The CSS optimizer failed.
    #[error("optimizing styles for {} failed: {source}", importer.display())]
    Optimize {
        /// The file whose styles were being optimized.
        importer: PathBuf,
        /// Error reported by the optimizer.
        #[source]
        source: EngineError,
    },
}

impl PluginError {
    /// Create an I/O error for `path`.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Create an options error.
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// The importer this error belongs to, if it came out of a compilation.
    pub fn importer(&self) -> Option<&Path> {
        match self {
            Self::Compile { importer, .. }
            | Self::Scan { importer, .. }
            | Self::Optimize { importer, .. } => Some(importer),
            _ => None,
        }
    }
}
