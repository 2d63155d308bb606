//! Transform orchestration.
//!
//! The transform never rewrites the importer's code. It compiles the
//! importer's styles and stores them in the registry, where `load` picks
//! them up for the virtual module.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use super::{importer_key, Plugin};
use crate::diagnostic::{format_failure, PluginError};
use crate::engine::{source_directive, CompileInput, EngineError, ScanSource};
use crate::host::{TransformOutcome, WatchContext};
use crate::resource::{discover_peers, peers_in};

impl Plugin {
    /// Transform hook.
    ///
    /// Ineligible files are skipped. For eligible files the importer's
    /// styles are compiled into the registry and the code is returned
    /// unchanged. Compilation failures are logged and the file is skipped;
    /// the registry keeps whatever it had for this importer.
    pub fn transform(&self, code: &str, id: &str, watch: &mut dyn WatchContext) -> TransformOutcome {
        let importer = importer_key(id);
        if !self.is_eligible(&importer, code) {
            return TransformOutcome::Skip;
        }

        match self.compile_importer(&importer, code, watch) {
            Ok(Some(_)) => TransformOutcome::Code(code.to_owned()),
            Ok(None) => {
                log::debug!("no styles emitted for {}", importer.display());
                TransformOutcome::Code(code.to_owned())
            }
            Err(e) => {
                log::error!("{}", format_failure(&e, &self.diagnostics));
                TransformOutcome::Skip
            }
        }
    }

    /// Check if a file is processed by the transform.
    ///
    /// The extension must be one of the configured ones and, unless
    /// disabled, the code must mention the virtual module scheme.
    pub fn is_eligible(&self, importer: &Path, code: &str) -> bool {
        let extension_ok = importer
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| self.options.accepts_extension(ext));
        extension_ok && (!self.options.require_scheme_reference || code.contains(self.options.scheme.as_str()))
    }

    /// Compile the styles for one importer and store them in the registry.
    ///
    /// `code` is only consulted when the importer cannot be read from disk.
    /// Returns the stored CSS, or `None` if the compiler had nothing to emit.
    pub fn compile_importer(
        &self,
        importer: &Path,
        code: &str,
        watch: &mut dyn WatchContext,
    ) -> Result<Option<Arc<str>>, PluginError> {
        let design = self.design_system();

        for dep in &design.dependencies {
            watch.add_watch_file(dep);
        }

        let peers = discover_peers(importer).unwrap_or_else(|e| {
            log::debug!("reading peers from transform input: {e}");
            peers_in(importer, code)
        });

        // Directive mode scans through `@source`; config mode hands the
        // files to the compiler as content.
        let legacy = design.config_path.is_some();
        let mut content: Vec<PathBuf> = Vec::new();
        let mut css = design.text.clone();
        if legacy {
            content.push(importer.to_path_buf());
            content.extend(peers.iter().cloned());
        } else {
            for file in std::iter::once(importer).chain(peers.iter().map(PathBuf::as_path)) {
                css.push('\n');
                css.push_str(&source_directive(file));
            }
            css.push('\n');
        }

        let base = design
            .entry_path
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_default();
        let input = CompileInput {
            css: &css,
            base: &base,
            from: &design.entry_path,
            content: &content,
            config: design.config_path.as_deref(),
        };

        log::debug!(
            "compiling {} ({} peer stylesheets)",
            importer.display(),
            peers.len()
        );
        let compile_err = |source: EngineError| PluginError::Compile {
            importer: importer.to_path_buf(),
            source,
        };
        let mut compiled = self.engines.compiler.compile(&input).map_err(compile_err)?;

        for dep in compiled.dependencies() {
            watch.add_watch_file(dep);
        }

        let mut sources = compiled.sources().to_vec();
        sources.extend(content.iter().map(|file| ScanSource::file(file)));
        let candidates = self
            .engines
            .scanner
            .scan(&sources)
            .map_err(|source| PluginError::Scan {
                importer: importer.to_path_buf(),
                source,
            })?;

        let Some(output) = compiled.build(&candidates).map_err(compile_err)? else {
            return Ok(None);
        };

        let optimized = self
            .engines
            .optimizer
            .optimize(&output, &self.options.optimize)
            .map_err(|source| PluginError::Optimize {
                importer: importer.to_path_buf(),
                source,
            })?;

        let css: Arc<str> = optimized.into();
        self.registry.set(importer, Arc::clone(&css));
        Ok(Some(css))
    }
}
