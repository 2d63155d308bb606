//! The host side of the plugin lifecycle.
//!
//! ```text
//! resolve_id(source, importer) ──► ResolveOutcome
//! load(id, watch)              ──► LoadOutcome
//! transform(code, id, watch)   ──► TransformOutcome
//! handle_hot_update(ctx)       ──► HotUpdateOutcome
//! ```
//!
//! Hosts adapt their own plugin context to [`WatchContext`] and their dev
//! server to [`DevServer`].

use std::path::{Path, PathBuf};

use rustc_hash::FxHashSet;

use crate::module::VirtualId;

// =============================================================================
// Watch registration
// =============================================================================

/// Lets hooks register extra files with the host's watcher.
pub trait WatchContext {
    /// Watch `path`; changes to it re-run the current module's hooks.
    fn add_watch_file(&mut self, path: &Path);
}

/// A [`WatchContext`] that just collects paths, de-duplicated in order.
#[derive(Debug, Clone, Default)]
pub struct WatchList {
    files: Vec<PathBuf>,
    seen: FxHashSet<PathBuf>,
}

impl WatchList {
    /// Create an empty list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Collected paths.
    pub fn files(&self) -> &[PathBuf] {
        &self.files
    }

    /// Take the collected paths.
    pub fn into_files(self) -> Vec<PathBuf> {
        self.files
    }

    /// Check if `path` was registered.
    pub fn contains(&self, path: &Path) -> bool {
        self.seen.contains(path)
    }
}

impl WatchContext for WatchList {
    fn add_watch_file(&mut self, path: &Path) {
        if self.seen.insert(path.to_path_buf()) {
            self.files.push(path.to_path_buf());
        }
    }
}

// =============================================================================
// Hot update
// =============================================================================

/// The dev server as seen from the hot-update hook.
pub trait DevServer {
    /// Handle to a module in the server's module graph.
    type Module: Clone;

    /// Look up a module by id.
    fn module_by_id(&self, id: &str) -> Option<Self::Module>;

    /// Mark a module stale so its hooks run again.
    fn invalidate_module(&self, module: &Self::Module);

    /// Ask connected clients to reload the page.
    fn send_full_reload(&self);
}

/// Input to the hot-update hook.
pub struct HotUpdateContext<'a, S: DevServer> {
    /// The file that changed on disk.
    pub file: &'a Path,
    /// The dev server.
    pub server: &'a S,
}

impl<'a, S: DevServer> HotUpdateContext<'a, S> {
    /// Create a context for a change to `file`.
    pub fn new(file: &'a Path, server: &'a S) -> Self {
        Self { file, server }
    }
}

// =============================================================================
// Hook outcomes
// =============================================================================

/// Result of `resolve_id`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolveOutcome {
    /// Not ours; let other resolvers run.
    NoMatch,
    /// Resolved to this virtual module.
    Identity(VirtualId),
}

/// Result of `load`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadOutcome {
    /// Not ours; let other loaders run.
    NoMatch,
    /// Synthetic module source.
    Module(String),
}

/// Result of `transform`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransformOutcome {
    /// File was not eligible; nothing to report.
    Skip,
    /// Transformed code (always the input code: the registry is populated
    /// as a side effect).
    Code(String),
}

/// Result of `handle_hot_update`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HotUpdateOutcome<M> {
    /// Let the host apply its default handling.
    Default,
    /// Re-process exactly these modules.
    Modules(Vec<M>),
}

impl ResolveOutcome {
    /// The resolved identity, if any.
    pub fn identity(&self) -> Option<&VirtualId> {
        match self {
            Self::Identity(id) => Some(id),
            Self::NoMatch => None,
        }
    }
}

impl LoadOutcome {
    /// The module source, if any.
    pub fn source(&self) -> Option<&str> {
        match self {
            Self::Module(source) => Some(source),
            Self::NoMatch => None,
        }
    }
}
