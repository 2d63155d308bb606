//! Dependency set of the design-system entry.
//!
//! The host watches every file in this set so that editing anything the
//! entry stylesheet (or legacy config file) pulls in triggers a reload.

use std::path::{Path, PathBuf};

use rustc_hash::FxHashSet;

use super::path::resolve_sibling;
use super::peers::import_specifier;
use super::read::read_text;

/// Enumerates the files an entry file depends on.
///
/// Implement this to plug in a full module resolver. The built-in
/// [`ImportGraphWalker`] only follows relative specifiers.
pub trait DependencyWalker: Send + Sync {
    /// Transitive dependencies of `entry`, including `entry` itself.
    fn dependencies(&self, entry: &Path) -> Vec<PathBuf>;
}

/// Heuristic import-graph walker.
///
/// Follows `@import "..."` / `@import url(...)` in stylesheets and
/// single-line static imports in scripts. Bare package specifiers are not
/// resolved. Files that cannot be read are skipped.
#[derive(Debug, Clone, Copy, Default)]
pub struct ImportGraphWalker;

/// Extensions tried for extension-less script specifiers.
const SCRIPT_EXTENSIONS: &[&str] = &["js", "ts", "mjs", "cjs", "mts", "cts"];

impl DependencyWalker for ImportGraphWalker {
    fn dependencies(&self, entry: &Path) -> Vec<PathBuf> {
        let mut seen: FxHashSet<PathBuf> = FxHashSet::default();
        let mut order = Vec::new();
        let mut stack = vec![entry.to_path_buf()];

        while let Some(file) = stack.pop() {
            if !seen.insert(file.clone()) {
                continue;
            }
            let content = match read_text(&file) {
                Ok(content) => content,
                Err(e) => {
                    log::debug!("skipping dependency {}: {e}", file.display());
                    continue;
                }
            };
            order.push(file.clone());

            let specifiers: Vec<&str> = if is_css(&file) {
                content.lines().filter_map(css_import_specifier).collect()
            } else {
                content.lines().filter_map(import_specifier).collect()
            };

            for specifier in specifiers.into_iter().rev() {
                if !is_relative(specifier) {
                    continue;
                }
                if let Some(dep) = resolve_file(&file, specifier)
                    && !seen.contains(&dep)
                {
                    stack.push(dep);
                }
            }
        }

        order
    }
}

fn is_css(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| super::peers::STYLESHEET_EXTENSIONS.contains(&ext))
}

fn is_relative(specifier: &str) -> bool {
    specifier.starts_with("./") || specifier.starts_with("../") || specifier.starts_with('/')
}

/// Extract the target of an `@import` rule on a single line.
fn css_import_specifier(line: &str) -> Option<&str> {
    let rest = line.trim_start().strip_prefix("@import")?.trim_start();
    let rest = rest.strip_prefix("url(").map_or(rest, str::trim_start);
    match rest.chars().next()? {
        quote @ ('"' | '\'') => {
            let body = &rest[1..];
            body.find(quote).map(|end| &body[..end])
        }
        // Unquoted `url(path)`.
        _ => rest.find(')').map(|end| rest[..end].trim()),
    }
}

/// Resolve a relative specifier to an existing file.
fn resolve_file(from: &Path, specifier: &str) -> Option<PathBuf> {
    let base = resolve_sibling(from, specifier);
    if base.is_file() {
        return Some(base);
    }
    SCRIPT_EXTENSIONS
        .iter()
        .map(|ext| base.with_extension(ext))
        .chain(SCRIPT_EXTENSIONS.iter().map(|ext| base.join("index").with_extension(ext)))
        .find(|candidate| candidate.is_file())
}
