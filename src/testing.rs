//! Test support: a fixture project and fake engines.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Arc;

use parking_lot::Mutex;
use rustc_hash::FxHashSet;
use tempfile::TempDir;

use crate::config::OptionsBuilder;
use crate::diagnostic::DiagnosticOptions;
use crate::engine::{
    CandidateSet, CompileInput, CompiledDesignSystem, CssOptimizer, DesignSystemCompiler,
    EngineError, Engines, OptimizeOptions, ScanSource, TokenScanner,
};
use crate::host::DevServer;
use crate::plugin::Plugin;

pub const SHADOW_CSS: &str = "\
@import \"tailwindcss\";
@import \"./theme.css\";

.text-xl { font-size: 1.25rem }
.underline { text-decoration-line: underline }
.rounded-md { border-radius: 0.375rem }
";

pub const CARD_TS: &str = r#"import { html, LitElement, unsafeCSS } from "lit";
import TAILWIND_CSS from "shadow-tailwind:css";

export class CardElement extends LitElement {
  static styles = unsafeCSS(TAILWIND_CSS);

  render() {
    return html`<slot class="text-xl pointer-events-none" name="title"></slot>`;
  }
}
"#;

// =============================================================================
// Fixture
// =============================================================================

#[derive(Default)]
struct FakeState {
    fail: AtomicBool,
    empty_build: AtomicBool,
    last_input: Mutex<String>,
}

/// A temporary project with `shadow.css` and `theme.css`.
pub struct Fixture {
    _dir: TempDir,
    root: PathBuf,
    state: Arc<FakeState>,
}

impl Fixture {
    pub fn new() -> Self {
        let dir = TempDir::new().unwrap();
        let root = dir.path().canonicalize().unwrap();
        let fixture = Self {
            _dir: dir,
            root,
            state: Arc::default(),
        };
        fixture.write("shadow.css", SHADOW_CSS);
        fixture.write("theme.css", ":root { --radius: 0.375rem }\n");
        fixture
    }

    pub fn path(&self, name: &str) -> PathBuf {
        self.root.join(name)
    }

    pub fn write(&self, name: &str, content: &str) -> PathBuf {
        let path = self.path(name);
        fs::write(&path, content).unwrap();
        path
    }

    /// Make every following compile fail.
    pub fn fail_compiles(&self, fail: bool) {
        self.state.fail.store(fail, Ordering::SeqCst);
    }

    /// Make every following build emit nothing.
    pub fn empty_builds(&self, empty: bool) {
        self.state.empty_build.store(empty, Ordering::SeqCst);
    }

    /// The CSS text of the most recent compile input.
    pub fn last_input(&self) -> String {
        self.state.last_input.lock().clone()
    }
}

pub fn fake_engines() -> Engines {
    Engines::new(FakeCompiler {
        state: Arc::default(),
    })
    .with_scanner(TokenScanner)
    .with_optimizer(FakeMinifier)
}

pub fn fake_plugin(fixture: &Fixture) -> Plugin {
    fake_plugin_with(fixture, |builder| builder)
}

pub fn fake_plugin_with(fixture: &Fixture, f: impl FnOnce(OptionsBuilder) -> OptionsBuilder) -> Plugin {
    let options = f(OptionsBuilder::new()
        .entry_file_path(fixture.path("shadow.css"))
        .minify(true))
    .build();
    let engines = Engines::new(FakeCompiler {
        state: Arc::clone(&fixture.state),
    })
    .with_optimizer(FakeMinifier);
    Plugin::new(options, engines)
        .unwrap()
        .with_diagnostics(DiagnosticOptions::plain())
}

// =============================================================================
// Fake compiler
// =============================================================================

/// Treats every `.class { ... }` rule of the entry as a utility and every
/// `@source "..."` line as a file to scan.
struct FakeCompiler {
    state: Arc<FakeState>,
}

struct FakeDesignSystem {
    empty: bool,
    rules: Vec<(String, String)>,
    sources: Vec<ScanSource>,
    dependencies: Vec<PathBuf>,
}

impl DesignSystemCompiler for FakeCompiler {
    fn compile(&self, input: &CompileInput<'_>) -> Result<Box<dyn CompiledDesignSystem>, EngineError> {
        *self.state.last_input.lock() = input.css.to_owned();
        if self.state.fail.load(Ordering::SeqCst) {
            return Err("fake compiler failure".into());
        }

        let rules = input
            .css
            .split('}')
            .filter_map(|chunk| {
                let (head, body) = chunk.split_once('{')?;
                let selector = head.rsplit(';').next()?.trim();
                let class = class_name(selector)?;
                Some((class, format!("{selector} {{ {} }}", body.trim())))
            })
            .collect();

        let sources = input
            .css
            .lines()
            .filter_map(|line| line.trim().strip_prefix("@source \"")?.strip_suffix("\";"))
            .map(|path| ScanSource::file(Path::new(&path.replace("\\\\", "\\"))))
            .collect();

        Ok(Box::new(FakeDesignSystem {
            empty: self.state.empty_build.load(Ordering::SeqCst),
            rules,
            sources,
            dependencies: vec![input.from.to_path_buf()],
        }))
    }
}

/// Class name of a `.class` selector, with CSS escapes removed.
fn class_name(selector: &str) -> Option<String> {
    let mut chars = selector.strip_prefix('.')?.chars();
    let mut name = String::new();
    while let Some(c) = chars.next() {
        match c {
            '\\' => name.push(chars.next()?),
            ':' | ' ' | '.' | '[' => break,
            _ => name.push(c),
        }
    }
    (!name.is_empty()).then_some(name)
}

impl CompiledDesignSystem for FakeDesignSystem {
    fn dependencies(&self) -> &[PathBuf] {
        &self.dependencies
    }

    fn sources(&self) -> &[ScanSource] {
        &self.sources
    }

    fn build(&mut self, candidates: &CandidateSet) -> Result<Option<String>, EngineError> {
        if self.empty {
            return Ok(None);
        }
        let css: Vec<&str> = self
            .rules
            .iter()
            .filter(|(class, _)| candidates.contains(class))
            .map(|(_, rule)| rule.as_str())
            .collect();
        Ok(Some(css.join("\n")))
    }
}

/// Whitespace-only minifier.
struct FakeMinifier;

impl CssOptimizer for FakeMinifier {
    fn optimize(&self, css: &str, options: &OptimizeOptions) -> Result<String, EngineError> {
        if !options.minify {
            return Ok(css.to_owned());
        }
        let mut out = String::with_capacity(css.len());
        for c in css.split_whitespace().collect::<Vec<_>>().join(" ").chars() {
            if c == ' ' && out.ends_with(['{', '}', ';', ':']) {
                continue;
            }
            if matches!(c, '{' | '}') && out.ends_with(' ') {
                out.pop();
            }
            out.push(c);
        }
        Ok(out)
    }
}

// =============================================================================
// Fake dev server
// =============================================================================

pub struct FakeServer {
    modules: FxHashSet<String>,
    invalidated: Mutex<Vec<String>>,
    reloads: AtomicUsize,
}

impl FakeServer {
    pub fn with_modules<'a>(ids: impl IntoIterator<Item = &'a str>) -> Self {
        Self {
            modules: ids.into_iter().map(str::to_owned).collect(),
            invalidated: Mutex::new(Vec::new()),
            reloads: AtomicUsize::new(0),
        }
    }

    pub fn invalidated(&self) -> Vec<String> {
        self.invalidated.lock().clone()
    }

    pub fn reloads(&self) -> usize {
        self.reloads.load(Ordering::SeqCst)
    }
}

impl DevServer for FakeServer {
    type Module = String;

    fn module_by_id(&self, id: &str) -> Option<String> {
        self.modules.get(id).cloned()
    }

    fn invalidate_module(&self, module: &String) {
        self.invalidated.lock().push(module.clone());
    }

    fn send_full_reload(&self) {
        self.reloads.fetch_add(1, Ordering::SeqCst);
    }
}
