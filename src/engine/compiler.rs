//! Design-system compiler seam.
//!
//! The compiler itself (Tailwind or anything speaking the same protocol)
//! lives outside this crate. The pipeline drives it in two phases:
//!
//! ```text
//! compile(CompileInput) ──► CompiledDesignSystem
//!                               ├── dependencies()  → watch files
//!                               ├── sources()       → handed to the scanner
//!                               └── build(candidates) → CSS text
//! ```

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use super::EngineError;

/// Class-name candidates found in scanned sources.
///
/// Ordered so that builds are deterministic regardless of scan order.
pub type CandidateSet = BTreeSet<String>;

/// Input to one design-system compilation.
#[derive(Debug, Clone, Copy)]
pub struct CompileInput<'a> {
    /// Entry stylesheet text, including any `@source` directives appended
    /// for the importer being compiled.
    pub css: &'a str,
    /// Directory that relative `@import`/`@source` paths resolve against.
    pub base: &'a Path,
    /// Path of the entry stylesheet.
    pub from: &'a Path,
    /// Files to scan, when running in config-file mode.
    pub content: &'a [PathBuf],
    /// Legacy config file, when running in config-file mode.
    pub config: Option<&'a Path>,
}

/// A location the compiler wants scanned for candidates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanSource {
    /// Directory the pattern is relative to.
    pub base: PathBuf,
    /// File name or glob pattern.
    pub pattern: String,
    /// Excluded rather than included.
    pub negated: bool,
}

impl ScanSource {
    /// An included source pointing at exactly one file.
    pub fn file(path: &Path) -> Self {
        Self {
            base: path.parent().map(Path::to_path_buf).unwrap_or_default(),
            pattern: path
                .file_name()
                .map(|name| name.to_string_lossy().into_owned())
                .unwrap_or_default(),
            negated: false,
        }
    }

    /// The pattern joined onto its base.
    pub fn path(&self) -> PathBuf {
        self.base.join(&self.pattern)
    }
}

/// The design-system compiler.
pub trait DesignSystemCompiler: Send + Sync {
    /// Compile the entry stylesheet into a design system ready to build.
    fn compile(&self, input: &CompileInput<'_>) -> Result<Box<dyn CompiledDesignSystem>, EngineError>;
}

/// A compiled design system for one importer.
pub trait CompiledDesignSystem: Send {
    /// Files the compilation read (imports, plugins, config).
    fn dependencies(&self) -> &[PathBuf];

    /// Locations to scan for candidates.
    fn sources(&self) -> &[ScanSource];

    /// Emit CSS for `candidates`. `Ok(None)` means there is nothing to emit.
    fn build(&mut self, candidates: &CandidateSet) -> Result<Option<String>, EngineError>;
}

/// Render an `@source` directive for `path`.
pub fn source_directive(path: &Path) -> String {
    let raw = path.to_string_lossy();
    let mut escaped = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '\\' => escaped.push_str("\\\\"),
            '"' => escaped.push_str("\\\""),
            '\n' => escaped.push_str("\\a "),
            _ => escaped.push(c),
        }
    }
    format!("@source \"{escaped}\";")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_source_directive() {
        assert_eq!(
            source_directive(Path::new("/app/src/card.ts")),
            "@source \"/app/src/card.ts\";"
        );
        assert_eq!(
            source_directive(Path::new("C:\\app\\\"q\".ts")),
            "@source \"C:\\\\app\\\\\\\"q\\\".ts\";"
        );
    }

    #[test]
    fn test_scan_source_file() {
        let source = ScanSource::file(Path::new("/app/src/card.ts"));
        assert_eq!(source.base, PathBuf::from("/app/src"));
        assert_eq!(source.pattern, "card.ts");
        assert!(!source.negated);
        assert_eq!(source.path(), PathBuf::from("/app/src/card.ts"));
    }
}
