//! Human-readable failure reports.
//!
//! Failures inside a transform are never returned to the host; they are
//! rendered here and handed to the `log` facade instead.

use std::error::Error;
use std::fmt::Write;

use chrono::Local;

use super::error::PluginError;
use crate::plugin::NAME;

/// Options for rendering failure reports.
#[derive(Debug, Clone, Copy)]
pub struct DiagnosticOptions {
    /// Apply terminal colors.
    pub colored: bool,
    /// Prefix the report with a local wall-clock timestamp.
    pub timestamp: bool,
}

impl Default for DiagnosticOptions {
    fn default() -> Self {
        Self {
            colored: cfg!(feature = "colored-diagnostics"),
            timestamp: true,
        }
    }
}

impl DiagnosticOptions {
    /// Plain output, no colors and no timestamp. Stable across runs.
    pub fn plain() -> Self {
        Self {
            colored: false,
            timestamp: false,
        }
    }
}

// ============================================================================
// Coloring
// ============================================================================

#[cfg(feature = "colored-diagnostics")]
fn paint_error(text: &str) -> String {
    use owo_colors::OwoColorize;
    text.red().bold().to_string()
}

#[cfg(feature = "colored-diagnostics")]
fn paint_dim(text: &str) -> String {
    use owo_colors::OwoColorize;
    text.dimmed().to_string()
}

#[cfg(not(feature = "colored-diagnostics"))]
fn paint_error(text: &str) -> String {
    text.to_owned()
}

#[cfg(not(feature = "colored-diagnostics"))]
fn paint_dim(text: &str) -> String {
    text.to_owned()
}

fn painter(options: &DiagnosticOptions, f: fn(&str) -> String) -> Box<dyn Fn(&str) -> String> {
    if options.colored {
        Box::new(f)
    } else {
        Box::new(|s: &str| s.to_owned())
    }
}

// ============================================================================
// Rendering
// ============================================================================

/// Render a failure report for a plugin error.
///
/// ```text
/// 14:02:11 [tailwindcss-scoped] error: compiling styles for /src/card.ts failed: ...
///   caused by: ...
/// ```
pub fn format_failure(error: &PluginError, options: &DiagnosticOptions) -> String {
    let error_paint = painter(options, paint_error);
    let dim_paint = painter(options, paint_dim);

    let mut out = String::new();
    if options.timestamp {
        let now = Local::now().format("%H:%M:%S").to_string();
        let _ = write!(out, "{} ", dim_paint(&now));
    }
    let _ = write!(out, "{} {} {error}", dim_paint(&format!("[{NAME}]")), error_paint("error:"));

    // The top-level message already embeds its direct source.
    let mut cause = error.source().and_then(|err| err.source());
    while let Some(err) = cause {
        let _ = write!(out, "\n  {} {err}", dim_paint("caused by:"));
        cause = err.source();
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[derive(Debug)]
    struct Inner;

    impl std::fmt::Display for Inner {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            f.write_str("unexpected `}` at line 3")
        }
    }

    impl Error for Inner {}

    #[derive(Debug)]
    struct Outer(Inner);

    impl std::fmt::Display for Outer {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            f.write_str("parse failed")
        }
    }

    impl Error for Outer {
        fn source(&self) -> Option<&(dyn Error + 'static)> {
            Some(&self.0)
        }
    }

    #[test]
    fn test_plain_report() {
        let err = PluginError::Compile {
            importer: PathBuf::from("/src/card.ts"),
            source: Box::new(Outer(Inner)),
        };
        let report = format_failure(&err, &DiagnosticOptions::plain());
        assert_eq!(
            report,
            "[tailwindcss-scoped] error: compiling styles for /src/card.ts failed: parse failed\n  \
             caused by: unexpected `}` at line 3"
        );
    }

    #[test]
    fn test_timestamp_prefix() {
        let err = PluginError::config("bad");
        let options = DiagnosticOptions {
            colored: false,
            timestamp: true,
        };
        let report = format_failure(&err, &options);
        // HH:MM:SS prefix
        assert_eq!(report.as_bytes()[2], b':');
        assert!(report.ends_with("error: invalid options: bad"));
    }
}
