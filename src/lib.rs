//! # shadow-tailwind
//!
//! Scoped, pre-compiled Tailwind stylesheets for shadow DOM components,
//! served to bundlers as virtual modules.
//!
//! A component imports the virtual module and adopts the result inside its
//! shadow root:
//!
//! ```text
//! import TAILWIND_CSS from "shadow-tailwind:css";
//!
//! class Card extends LitElement {
//!   static styles = unsafeCSS(TAILWIND_CSS);
//! }
//! ```
//!
//! At build time the plugin compiles only the classes that file (and the
//! stylesheets it imports directly) actually uses, against one shared
//! design-system entry stylesheet:
//!
//! - **Per-importer isolation**: every file gets its own stylesheet
//! - **Read once**: the entry stylesheet is read when the plugin is built
//! - **Watch-aware**: the entry's dependency set is registered on every transform
//! - **Failure-tolerant**: a file whose styles fail to compile keeps its last good CSS
//!
//! Theming works across the shadow boundary because Tailwind themes through
//! CSS variables, and variables defined on `:root` penetrate shadow roots.
//!
//! ## Quick Start
//!
//! ```ignore
//! use shadow_tailwind::prelude::*;
//!
//! let options = OptionsBuilder::new().entry_file_path("src/shadow.css").build();
//! let plugin = Plugin::new(options, Engines::new(my_compiler).with_optimizer(my_optimizer))?;
//!
//! // Host hooks:
//! plugin.resolve_id(source, Some(importer));   // ResolveOutcome
//! plugin.transform(code, id, &mut watch);       // TransformOutcome
//! plugin.load(id, &mut watch);                  // LoadOutcome
//! plugin.handle_hot_update(&ctx);               // HotUpdateOutcome
//! ```
//!
//! ## Modules
//!
//! - [`config`]: Plugin options
//! - [`plugin`]: The plugin and its lifecycle hooks
//! - [`host`]: Traits and outcomes the host adapts to
//! - [`engine`]: Compiler, scanner and optimizer seams
//! - [`module`]: Virtual module identity, registry and source generation
//! - [`resource`]: File reading, peer discovery, dependency sets
//! - [`diagnostic`]: Errors and failure reports

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod config;
pub mod diagnostic;
pub mod engine;
pub mod host;
pub mod module;
pub mod plugin;
pub mod prelude;
pub mod resource;

#[cfg(test)]
mod testing;

pub use config::{Options, OptionsBuilder};
pub use diagnostic::{DiagnosticOptions, PluginError};
pub use engine::Engines;
pub use plugin::{Plugin, NAME};
