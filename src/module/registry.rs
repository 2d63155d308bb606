//! Per-importer compiled CSS.
//!
//! ```text
//! Registry (one per plugin instance)
//! └── RwLock<FxHashMap<PathBuf, Arc<str>>>
//!     ├── written by: transform (whole-value replace)
//!     └── read by:    load
//! ```

use std::path::{Path, PathBuf};
use std::sync::Arc;

use parking_lot::RwLock;
use rustc_hash::FxHashMap;

/// Compiled stylesheet text keyed by importer path.
///
/// Entries are only ever replaced, never cleared: a failed recompile
/// leaves the previous text in place. A reader sees either the old or the
/// new value, never a mix.
#[derive(Default)]
pub struct Registry {
    entries: RwLock<FxHashMap<PathBuf, Arc<str>>>,
}

impl Registry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the compiled CSS for `importer`.
    pub fn get(&self, importer: &Path) -> Option<Arc<str>> {
        self.entries.read().get(importer).cloned()
    }

    /// Store compiled CSS for `importer`, replacing any previous entry.
    pub fn set(&self, importer: impl Into<PathBuf>, css: impl Into<Arc<str>>) {
        self.entries.write().insert(importer.into(), css.into());
    }

    /// Check if `importer` has an entry.
    pub fn contains(&self, importer: &Path) -> bool {
        self.entries.read().contains_key(importer)
    }

    /// Number of importers with compiled CSS.
    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    /// Check if no importer has been compiled yet.
    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }

    /// Snapshot of all importers with entries.
    pub fn importers(&self) -> Vec<PathBuf> {
        self.entries.read().keys().cloned().collect()
    }
}

impl std::fmt::Debug for Registry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Registry").field("entries", &self.len()).finish()
    }
}
