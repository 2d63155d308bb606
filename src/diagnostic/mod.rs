//! Error types and failure reporting.

mod error;
mod format;

pub use error::PluginError;
pub use format::{format_failure, DiagnosticOptions};
