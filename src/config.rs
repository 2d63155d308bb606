//! Plugin options.
//!
//! Build options with [`OptionsBuilder`], or parse the JSON object a host
//! passes through from its own config file with [`Options::from_json`].

use std::path::{Path, PathBuf};

use serde_json::Value as JsonValue;

use crate::diagnostic::PluginError;
use crate::engine::{OptimizeOptions, Targets};
use crate::module::DEFAULT_SCHEME;

/// Default design-system entry stylesheet.
pub const DEFAULT_ENTRY_FILE: &str = "./src/shadow.css";

/// Extensions whose files may import the virtual module.
pub const DEFAULT_EXTENSIONS: &[&str] = &["ts", "tsx", "js", "jsx", "mjs", "mts", "cjs", "cts", "html"];

/// Plugin options.
#[derive(Debug, Clone)]
pub struct Options {
    /// Shared design-system entry stylesheet.
    pub entry_file_path: PathBuf,
    /// Legacy config-file mode: scan content is passed to the compiler
    /// alongside this config instead of as `@source` directives.
    pub tailwind_config_path: Option<PathBuf>,
    /// Virtual module scheme.
    pub scheme: String,
    /// Extensions (without dot) of files eligible for transform.
    pub extensions: Vec<String>,
    /// Only transform files whose text mentions the scheme.
    pub require_scheme_reference: bool,
    /// Optimizer options.
    pub optimize: OptimizeOptions,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            entry_file_path: PathBuf::from(DEFAULT_ENTRY_FILE),
            tailwind_config_path: None,
            scheme: DEFAULT_SCHEME.to_owned(),
            extensions: DEFAULT_EXTENSIONS.iter().map(|ext| (*ext).to_owned()).collect(),
            require_scheme_reference: true,
            optimize: OptimizeOptions {
                minify: is_production(),
                ..OptimizeOptions::default()
            },
        }
    }
}

impl Options {
    /// Parse options from a JSON object.
    ///
    /// Recognized keys: `entryFilePath`, `tailwindConfigPath`, `extensions`,
    /// `requireSchemeReference`, `minify`. Unknown keys are ignored.
    ///
    /// ```
    /// use shadow_tailwind::config::Options;
    ///
    /// let options = Options::from_json(r#"{ "entryFilePath": "shadow.css" }"#).unwrap();
    /// assert_eq!(options.entry_file_path.to_str(), Some("shadow.css"));
    /// ```
    pub fn from_json(json: &str) -> Result<Self, PluginError> {
        let value: JsonValue = serde_json::from_str(json)?;
        let object = value
            .as_object()
            .ok_or_else(|| PluginError::config("options must be a JSON object"))?;

        let mut builder = OptionsBuilder::new();
        if let Some(path) = object.get("entryFilePath") {
            builder = builder.entry_file_path(expect_str(path, "entryFilePath")?);
        }
        if let Some(path) = object.get("tailwindConfigPath")
            && !path.is_null()
        {
            builder = builder.tailwind_config_path(expect_str(path, "tailwindConfigPath")?);
        }
        if let Some(extensions) = object.get("extensions") {
            let list = extensions
                .as_array()
                .ok_or_else(|| PluginError::config("`extensions` must be an array of strings"))?
                .iter()
                .map(|ext| expect_str(ext, "extensions"))
                .collect::<Result<Vec<_>, _>>()?;
            builder = builder.extensions(list);
        }
        if let Some(flag) = object.get("requireSchemeReference") {
            builder = builder.require_scheme_reference(expect_bool(flag, "requireSchemeReference")?);
        }
        if let Some(flag) = object.get("minify") {
            builder = builder.minify(expect_bool(flag, "minify")?);
        }
        Ok(builder.build())
    }

    /// Check if `extension` (without dot) is eligible.
    pub fn accepts_extension(&self, extension: &str) -> bool {
        self.extensions.iter().any(|ext| ext == extension)
    }
}

fn expect_str<'a>(value: &'a JsonValue, key: &str) -> Result<&'a str, PluginError> {
    value
        .as_str()
        .ok_or_else(|| PluginError::config(format!("`{key}` must be a string")))
}

fn expect_bool(value: &JsonValue, key: &str) -> Result<bool, PluginError> {
    value
        .as_bool()
        .ok_or_else(|| PluginError::config(format!("`{key}` must be a boolean")))
}

/// Check `NODE_ENV` the way the surrounding JS toolchain does.
fn is_production() -> bool {
    std::env::var("NODE_ENV").is_ok_and(|env| env == "production")
}

/// Options builder for fluent API.
#[derive(Debug, Clone, Default)]
pub struct OptionsBuilder {
    options: Options,
}

impl OptionsBuilder {
    /// Create a builder with default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the design-system entry stylesheet.
    ///
    /// Default: `./src/shadow.css`
    pub fn entry_file_path(mut self, path: impl AsRef<Path>) -> Self {
        self.options.entry_file_path = path.as_ref().to_path_buf();
        self
    }

    /// Enable legacy config-file mode.
    pub fn tailwind_config_path(mut self, path: impl AsRef<Path>) -> Self {
        self.options.tailwind_config_path = Some(path.as_ref().to_path_buf());
        self
    }

    /// Set the virtual module scheme.
    pub fn scheme(mut self, scheme: impl Into<String>) -> Self {
        self.options.scheme = scheme.into();
        self
    }

    /// Set eligible extensions. A leading dot is accepted and dropped.
    pub fn extensions<I, S>(mut self, extensions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.options.extensions = extensions
            .into_iter()
            .map(|ext| ext.as_ref().trim_start_matches('.').to_owned())
            .collect();
        self
    }

    /// Require eligible files to mention the scheme in their text.
    pub fn require_scheme_reference(mut self, required: bool) -> Self {
        self.options.require_scheme_reference = required;
        self
    }

    /// Minify optimizer output.
    ///
    /// Default: on when `NODE_ENV=production`.
    pub fn minify(mut self, minify: bool) -> Self {
        self.options.optimize.minify = minify;
        self
    }

    /// Set optimizer browser targets.
    pub fn targets(mut self, targets: Targets) -> Self {
        self.options.optimize.targets = targets;
        self
    }

    /// Finish building.
    pub fn build(self) -> Options {
        self.options
    }
}
