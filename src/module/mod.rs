//! Virtual stylesheet modules.
//!
//! - [`VirtualId`] - identity scheme mapping importers to virtual modules
//! - [`Registry`] - compiled CSS per importer
//! - [`default_export`] - synthetic module source served by `load`

mod id;
mod literal;
mod registry;

pub use id::{VirtualId, DEFAULT_SCHEME};
pub use literal::{default_export, template_literal};
pub use registry::Registry;
