//! The plugin: one instance per build, driving the whole lifecycle.
//!
//! ```text
//! card.ts ── import css from "shadow-tailwind:css"
//!    │
//!    ├─ resolve_id ─► shadow-tailwind:css:{/app/src/card.ts}
//!    ├─ transform  ─► peers + @source directives ─► compile ─► scan
//!    │                ─► build ─► optimize ─► Registry[/app/src/card.ts]
//!    └─ load       ─► export default `...compiled css...`;
//! ```

mod invalidate;
mod transform;
#[cfg(feature = "batch")]
mod batch;

#[cfg(feature = "batch")]
pub use batch::PrimeResult;

use std::path::{Path, PathBuf};
use std::sync::Arc;

use parking_lot::RwLock;

use crate::config::Options;
use crate::diagnostic::{DiagnosticOptions, PluginError};
use crate::engine::Engines;
use crate::host::{LoadOutcome, ResolveOutcome, WatchContext};
use crate::module::{default_export, Registry, VirtualId};
use crate::resource::{normalize_path, read_text, strip_query, DependencyWalker, ImportGraphWalker};

/// Plugin name reported to the host.
pub const NAME: &str = "tailwindcss-scoped";

/// The shared design-system input, read once per session.
#[derive(Debug)]
pub(crate) struct DesignSystemSource {
    /// Absolute path of the entry stylesheet.
    pub(crate) entry_path: PathBuf,
    /// Entry stylesheet text.
    pub(crate) text: String,
    /// Absolute path of the legacy config file.
    pub(crate) config_path: Option<PathBuf>,
    /// Files to watch: the dependency set of the config (legacy mode) or
    /// of the entry stylesheet.
    pub(crate) dependencies: Vec<PathBuf>,
}

impl DesignSystemSource {
    fn read(options: &Options, walker: &dyn DependencyWalker) -> Result<Self, PluginError> {
        let entry_path = normalize_path(&options.entry_file_path);
        let text = read_text(&entry_path)?;
        let config_path = options.tailwind_config_path.as_deref().map(normalize_path);
        let dependencies = walker.dependencies(config_path.as_deref().unwrap_or(&entry_path));
        log::debug!(
            "design system {} loaded ({} dependencies)",
            entry_path.display(),
            dependencies.len()
        );
        Ok(Self {
            entry_path,
            text,
            config_path,
            dependencies,
        })
    }
}

/// Scoped Tailwind plugin.
///
/// # Example
///
/// ```ignore
/// use shadow_tailwind::prelude::*;
///
/// let options = OptionsBuilder::new().entry_file_path("shadow.css").build();
/// let plugin = Plugin::new(options, Engines::new(MyTailwind::default()))?;
///
/// // Host wiring, per hook:
/// let id = plugin.resolve_id("shadow-tailwind:css", Some(importer));
/// plugin.transform(&code, importer_id, &mut watch);
/// let source = plugin.load(id.identity().unwrap().as_str(), &mut watch);
/// ```
pub struct Plugin {
    options: Options,
    engines: Engines,
    walker: Box<dyn DependencyWalker>,
    design_system: RwLock<Arc<DesignSystemSource>>,
    registry: Registry,
    diagnostics: DiagnosticOptions,
}

impl Plugin {
    /// Create a plugin, reading the entry stylesheet and its dependency set.
    ///
    /// Fails if the entry stylesheet cannot be read.
    pub fn new(options: Options, engines: Engines) -> Result<Self, PluginError> {
        Self::with_walker(options, engines, ImportGraphWalker)
    }

    /// Create a plugin with a custom dependency walker.
    pub fn with_walker<W: DependencyWalker + 'static>(
        options: Options,
        engines: Engines,
        walker: W,
    ) -> Result<Self, PluginError> {
        let design_system = DesignSystemSource::read(&options, &walker)?;
        Ok(Self {
            options,
            engines,
            walker: Box::new(walker),
            design_system: RwLock::new(Arc::new(design_system)),
            registry: Registry::new(),
            diagnostics: DiagnosticOptions::default(),
        })
    }

    /// Set how failure reports are rendered.
    pub fn with_diagnostics(mut self, diagnostics: DiagnosticOptions) -> Self {
        self.diagnostics = diagnostics;
        self
    }

    /// Plugin name.
    pub fn name(&self) -> &'static str {
        NAME
    }

    /// Plugin options.
    pub fn options(&self) -> &Options {
        &self.options
    }

    /// Compiled CSS per importer.
    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    /// Absolute path of the entry stylesheet.
    pub fn entry_path(&self) -> PathBuf {
        self.design_system.read().entry_path.clone()
    }

    /// Files registered as watch dependencies on every transform.
    pub fn dependencies(&self) -> Vec<PathBuf> {
        self.design_system.read().dependencies.clone()
    }

    /// Re-read the entry stylesheet and its dependency set.
    ///
    /// The entry is never re-read on its own; hosts that want edits to it
    /// picked up mid-session call this from their own change handling.
    /// On failure the previous design system stays in use.
    pub fn refresh_design_system(&self) -> Result<(), PluginError> {
        let fresh = DesignSystemSource::read(&self.options, self.walker.as_ref())?;
        *self.design_system.write() = Arc::new(fresh);
        Ok(())
    }

    pub(crate) fn design_system(&self) -> Arc<DesignSystemSource> {
        Arc::clone(&self.design_system.read())
    }

    // =========================================================================
    // resolve_id / load
    // =========================================================================

    /// Resolve `source` imported from `importer`.
    ///
    /// Anything not starting with the scheme is declined. An import with no
    /// importer has nothing to scope to and is declined too.
    pub fn resolve_id(&self, source: &str, importer: Option<&Path>) -> ResolveOutcome {
        if !VirtualId::matches(&self.options.scheme, source) {
            return ResolveOutcome::NoMatch;
        }
        let Some(importer) = importer else {
            return ResolveOutcome::NoMatch;
        };
        let importer = importer_key(&importer.to_string_lossy());
        ResolveOutcome::Identity(VirtualId::for_importer(&self.options.scheme, &importer))
    }

    /// Load a virtual module.
    ///
    /// Never fails for ids of our scheme: an importer that was never
    /// compiled (or an id that cannot be parsed) loads as empty CSS.
    pub fn load(&self, id: &str, watch: &mut dyn WatchContext) -> LoadOutcome {
        if !VirtualId::matches(&self.options.scheme, id) {
            return LoadOutcome::NoMatch;
        }
        watch.add_watch_file(&self.design_system.read().entry_path);

        let css = VirtualId::parse(&self.options.scheme, id).and_then(|importer| self.registry.get(&importer));
        if css.is_none() {
            log::debug!("no compiled styles for {id}");
        }
        LoadOutcome::Module(default_export(css.as_deref().unwrap_or_default()))
    }
}

/// Registry key for a module id: the id without its `?query`.
pub(crate) fn importer_key(id: &str) -> PathBuf {
    PathBuf::from(strip_query(id))
}
