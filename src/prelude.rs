//! Prelude module for convenient imports.
//!
//! ```ignore
//! use shadow_tailwind::prelude::*;
//! ```

// Plugin
pub use crate::plugin::{Plugin, NAME};
#[cfg(feature = "batch")]
pub use crate::plugin::PrimeResult;

// Options
pub use crate::config::{Options, OptionsBuilder};

// Host lifecycle
pub use crate::host::{
    DevServer, HotUpdateContext, HotUpdateOutcome, LoadOutcome, ResolveOutcome,
    TransformOutcome, WatchContext, WatchList,
};

// Engines
pub use crate::engine::{
    CandidateScanner, CandidateSet, CompileInput, CompiledDesignSystem, CssOptimizer,
    DesignSystemCompiler, EngineError, Engines, OptimizeOptions, PassthroughOptimizer,
    ScanSource, Targets, TokenScanner,
};

// Virtual modules
pub use crate::module::{Registry, VirtualId, DEFAULT_SCHEME};

// Resources
pub use crate::resource::{DependencyWalker, ImportGraphWalker};

// Diagnostics
pub use crate::diagnostic::{format_failure, DiagnosticOptions, PluginError};
