//! Virtual module identity.
//!
//! Wire format: `<scheme>:{<importer-absolute-path>}`, e.g.
//! `shadow-tailwind:css:{/app/src/card.ts}`.

use std::fmt;
use std::path::{Path, PathBuf};

/// Default virtual module scheme imported by components.
pub const DEFAULT_SCHEME: &str = "shadow-tailwind:css";

/// Rollup-style marker some hosts put in front of virtual ids.
const VIRTUAL_MARKER: char = '\0';

/// Identity of one importer's virtual stylesheet module.
///
/// A pure function of the scheme and the importer path: the same importer
/// always yields the same identity and distinct importers yield distinct
/// identities. [`VirtualId::parse`] recovers the importer for any path
/// that contains neither `{` nor `}`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct VirtualId(String);

impl VirtualId {
    /// Build the identity for `importer`.
    pub fn for_importer(scheme: &str, importer: &Path) -> Self {
        Self(format!("{scheme}:{{{}}}", importer.display()))
    }

    /// Recover the importer path from a virtual module id.
    ///
    /// Returns `None` if `id` does not belong to `scheme` or is malformed.
    pub fn parse(scheme: &str, id: &str) -> Option<PathBuf> {
        let id = id.strip_prefix(VIRTUAL_MARKER).unwrap_or(id);
        let path = id
            .strip_prefix(scheme)?
            .strip_prefix(":{")?
            .strip_suffix('}')?;
        if path.is_empty() || path.contains(['{', '}']) {
            return None;
        }
        Some(PathBuf::from(path))
    }

    /// Check if a request or id refers to the virtual scheme at all.
    ///
    /// This runs for every module resolution in the build and must stay a
    /// plain prefix test.
    #[inline]
    pub fn matches(scheme: &str, request: &str) -> bool {
        request
            .strip_prefix(VIRTUAL_MARKER)
            .unwrap_or(request)
            .starts_with(scheme)
    }

    /// Get the id string.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Take ownership of the id string.
    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for VirtualId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for VirtualId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
