//! Validate phase - runs lints on the schema models.

mod lint;
pub mod lints;

use eyre::{Result, bail};
pub use lint::{Lint, LintInfo};
pub use lints::{DuplicatePropertyLint, ParentCycleLint, UnresolvedParentLint};
use tracing::{error, info, warn};

use crate::pipeline::{GenerationContext, Phase, Severity};

/// Phase that validates the schema using configurable lints.
pub struct ValidatePhase {
    lints: Vec<Box<dyn Lint>>,
}

impl ValidatePhase {
    /// Create a new validate phase with default lints.
    pub fn new() -> Self {
        Self {
            lints: vec![
                Box::new(DuplicatePropertyLint),
                Box::new(ParentCycleLint),
                Box::new(UnresolvedParentLint),
            ],
        }
    }

    /// Create a validate phase with no lints.
    pub fn empty() -> Self {
        Self { lints: Vec::new() }
    }

    /// Add a custom lint to the validation phase.
    pub fn with_lint(mut self, lint: impl Lint + 'static) -> Self {
        self.lints.push(Box::new(lint));
        self
    }

    /// Get the names of all lints that will be run.
    pub fn lint_names(&self) -> Vec<&'static str> {
        self.lints.iter().map(|l| l.name()).collect()
    }

    /// Get information about all lints that will be run.
    pub fn lint_info(&self) -> Vec<LintInfo> {
        self.lints.iter().map(|l| l.info()).collect()
    }
}

impl Default for ValidatePhase {
    fn default() -> Self {
        Self::new()
    }
}

impl Phase for ValidatePhase {
    fn name(&self) -> &'static str {
        "validate"
    }

    fn description(&self) -> &'static str {
        "Check schema integrity and collect diagnostics"
    }

    fn run(&self, ctx: &mut GenerationContext) -> Result<()> {
        let before = ctx.diagnostics.len();
        for lint in &self.lints {
            lint.check(&ctx.models, &mut ctx.diagnostics);
        }
        for diagnostic in &ctx.diagnostics[before..] {
            let location = diagnostic.location.as_deref();
            match diagnostic.severity {
                Severity::Error => error!(location, "{}", diagnostic),
                Severity::Warning => warn!(location, "{}", diagnostic),
                Severity::Info => info!(location, "{}", diagnostic),
            }
        }

        // Fail if there are any errors (warnings are allowed)
        if ctx.has_errors() {
            bail!("Validation failed with {} error(s)", ctx.error_count());
        }

        Ok(())
    }
}
