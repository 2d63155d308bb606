//! External engines: compiler, candidate scanner, optimizer.
//!
//! None of these are implemented here beyond trivial defaults. The host
//! plugs in the real engines through [`Engines`].

mod compiler;
mod optimizer;
mod scanner;

pub use compiler::{
    source_directive, CandidateSet, CompileInput, CompiledDesignSystem, DesignSystemCompiler,
    ScanSource,
};
pub use optimizer::{CssOptimizer, OptimizeOptions, PassthroughOptimizer, Targets};
pub use scanner::{extend_candidates, CandidateScanner, TokenScanner};

/// Error type returned by engine implementations.
pub type EngineError = Box<dyn std::error::Error + Send + Sync>;

/// The set of engines one plugin instance drives.
pub struct Engines {
    pub(crate) compiler: Box<dyn DesignSystemCompiler>,
    pub(crate) scanner: Box<dyn CandidateScanner>,
    pub(crate) optimizer: Box<dyn CssOptimizer>,
}

impl Engines {
    /// Use `compiler` with the built-in [`TokenScanner`] and [`PassthroughOptimizer`].
    pub fn new<C: DesignSystemCompiler + 'static>(compiler: C) -> Self {
        Self {
            compiler: Box::new(compiler),
            scanner: Box::new(TokenScanner),
            optimizer: Box::new(PassthroughOptimizer),
        }
    }

    /// Replace the candidate scanner.
    pub fn with_scanner<S: CandidateScanner + 'static>(mut self, scanner: S) -> Self {
        self.scanner = Box::new(scanner);
        self
    }

    /// Replace the optimizer.
    pub fn with_optimizer<O: CssOptimizer + 'static>(mut self, optimizer: O) -> Self {
        self.optimizer = Box::new(optimizer);
        self
    }
}
