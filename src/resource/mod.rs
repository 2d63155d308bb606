//! File-system side of the pipeline: reading, peers, dependency sets.

pub mod deps;
pub mod path;
pub mod peers;
pub mod read;

pub use deps::{DependencyWalker, ImportGraphWalker};
pub use path::{normalize_path, resolve_sibling, strip_query};
pub use peers::{discover_peers, is_stylesheet, peers_in, STYLESHEET_EXTENSIONS};
pub use read::{decode_utf8, read_text};
