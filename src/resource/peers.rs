//! Peer stylesheet discovery.
//!
//! A lightweight lexical scan, not a parse: only lines that *start* with
//! `import` are considered, and the whole statement must sit on that line.
//!
//! ```text
//! import "./card.css";                      ✓ side-effect import
//! import styles from "./card.css?inline";   ✓ query is dropped
//! import { a } from './a.ts';               ✗ not a stylesheet
//! import {                                  ✗ multi-line, not detected
//!   b } from "./b.css";
//! ```

use std::path::{Path, PathBuf};

use rustc_hash::FxHashSet;

use super::path::{resolve_sibling, strip_query};
use super::read::read_text;
use crate::diagnostic::PluginError;

/// File extensions treated as stylesheets.
pub const STYLESHEET_EXTENSIONS: &[&str] = &["css", "pcss", "postcss"];

/// Find stylesheets directly imported by `file`.
///
/// Paths are resolved against the directory of `file`, returned in import
/// order without duplicates. Bare package specifiers are resolved the same
/// way and will usually not exist; the scanner skips them.
pub fn discover_peers(file: &Path) -> Result<Vec<PathBuf>, PluginError> {
    let content = read_text(file)?;
    Ok(peers_in(file, &content))
}

/// Find stylesheets imported by `content`, which was read from `file`.
pub fn peers_in(file: &Path, content: &str) -> Vec<PathBuf> {
    let mut seen = FxHashSet::default();
    content
        .lines()
        .filter_map(import_specifier)
        .filter(|spec| is_stylesheet(spec))
        .map(|spec| resolve_sibling(file, spec))
        .filter(|path| seen.insert(path.clone()))
        .collect()
}

/// Check if a specifier points at a stylesheet.
pub fn is_stylesheet(specifier: &str) -> bool {
    Path::new(specifier)
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| STYLESHEET_EXTENSIONS.contains(&ext))
}

/// Extract the module specifier of a single-line static import.
///
/// Returns the specifier without its `?query`.
pub(crate) fn import_specifier(line: &str) -> Option<&str> {
    let rest = line.strip_prefix("import")?;
    // `importer = ...`, `import(...)` and friends are not static imports.
    if !rest.starts_with([' ', '\t', '"', '\'', '{', '*']) {
        return None;
    }

    // Everything before the opening quote is either nothing (side-effect
    // import) or a clause ending in `from`.
    let open = rest.find(['"', '\''])?;
    let head = rest[..open].trim_end();
    if !head.is_empty() && !head.ends_with("from") {
        return None;
    }
    let quote = rest[open..].chars().next()?;
    let body = &rest[open + 1..];
    let end = body.find(quote)?;
    let specifier = strip_query(&body[..end]);
    (!specifier.is_empty()).then_some(specifier)
}
