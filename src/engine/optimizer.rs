//! CSS optimizer seam.

use super::EngineError;

/// Browser targets, encoded like lightningcss: `(major << 16) | (minor << 8) | patch`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Targets {
    /// Minimum Safari version.
    pub safari: Option<u32>,
    /// Minimum Chrome version.
    pub chrome: Option<u32>,
    /// Minimum Firefox version.
    pub firefox: Option<u32>,
}

impl Targets {
    /// Encode a browser version.
    pub const fn version(major: u32, minor: u32) -> u32 {
        (major << 16) | (minor << 8)
    }

    /// Safari 16.4, the baseline shadow-DOM stylesheets are built for.
    pub const fn safari_16_4() -> Self {
        Self {
            safari: Some(Self::version(16, 4)),
            chrome: None,
            firefox: None,
        }
    }
}

/// Options passed to the optimizer for every stylesheet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptimizeOptions {
    /// Virtual filename used in optimizer diagnostics.
    pub filename: String,
    /// Minify output.
    pub minify: bool,
    /// Browser targets for down-leveling.
    pub targets: Targets,
    /// Keep going on recoverable parse errors.
    pub error_recovery: bool,
    /// Enable the `@custom-media` draft.
    pub custom_media: bool,
    /// Accept the non-standard `>>>` deep combinator.
    pub deep_selector_combinator: bool,
    /// Always lower CSS nesting.
    pub include_nesting: bool,
    /// Never lower logical properties.
    pub exclude_logical_properties: bool,
}

impl Default for OptimizeOptions {
    fn default() -> Self {
        Self {
            filename: "index.css".to_owned(),
            minify: false,
            targets: Targets::safari_16_4(),
            error_recovery: true,
            custom_media: true,
            deep_selector_combinator: true,
            include_nesting: true,
            exclude_logical_properties: true,
        }
    }
}

/// Optimizes compiled CSS for the configured targets.
pub trait CssOptimizer: Send + Sync {
    /// Return optimized CSS text.
    fn optimize(&self, css: &str, options: &OptimizeOptions) -> Result<String, EngineError>;
}

/// Returns CSS unchanged.
#[derive(Debug, Clone, Copy, Default)]
pub struct PassthroughOptimizer;

impl CssOptimizer for PassthroughOptimizer {
    fn optimize(&self, css: &str, _options: &OptimizeOptions) -> Result<String, EngineError> {
        Ok(css.to_owned())
    }
}
