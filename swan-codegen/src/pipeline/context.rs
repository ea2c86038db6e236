//! Generation context passed through pipeline phases.

use eyre::{Result, WrapErr, bail};
use serde::Serialize;
use swan_core::ReservedWords;
use swan_ir::{ModelMap, Operation};
use swan_manifest::{Manifest, SchemaDocument};

use super::diagnostic::{Diagnostic, Severity};
use crate::{language::SWIFT_NAMING, naming::Namer, types::TypeResolver};

/// Context passed through all pipeline phases.
///
/// Holds the models and operations being normalized in place, plus the
/// diagnostics accumulated along the way.
#[derive(Debug)]
pub struct GenerationContext {
    /// Naming options and reserved-word replacements.
    pub manifest: Manifest,
    /// The Swift reserved words plus the manifest's replacements.
    pub reserved: ReservedWords,
    /// Models keyed by raw schema name.
    pub models: ModelMap,
    pub operations: Vec<Operation>,
    /// Diagnostics collected during the run.
    pub diagnostics: Vec<Diagnostic>,
}

/// The normalized models and operations, ready for templating.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Normalized {
    pub models: ModelMap,
    pub operations: Vec<Operation>,
}

impl Normalized {
    /// Serialize for the template layer.
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).wrap_err("failed to serialize normalized models")
    }
}

impl GenerationContext {
    /// Create a new context from a schema document and a manifest.
    pub fn new(document: SchemaDocument, manifest: Manifest) -> Self {
        let reserved = manifest.reserved_word_table();
        Self {
            manifest,
            reserved,
            models: document.models,
            operations: document.operations,
            diagnostics: Vec::new(),
        }
    }

    /// A name resolver configured from the manifest.
    pub fn namer(&self) -> Namer<'_> {
        Namer::new(&SWIFT_NAMING, &self.manifest.naming, &self.reserved)
    }

    /// A type resolver configured from the manifest.
    pub fn type_resolver(&self) -> TypeResolver<'_> {
        TypeResolver::new(self.namer())
    }

    /// Check if any error diagnostics have been recorded.
    pub fn has_errors(&self) -> bool {
        self.diagnostics.iter().any(|d| d.severity.is_error())
    }

    /// Check if any warning diagnostics have been recorded.
    pub fn has_warnings(&self) -> bool {
        self.diagnostics.iter().any(|d| d.severity.is_warning())
    }

    /// Count the number of error diagnostics.
    pub fn error_count(&self) -> usize {
        self.errors().count()
    }

    /// Count the number of warning diagnostics.
    pub fn warning_count(&self) -> usize {
        self.warnings().count()
    }

    /// Add an error diagnostic.
    pub fn add_error(&mut self, phase: &str, message: impl Into<String>) {
        self.diagnostics.push(Diagnostic::error(phase, message));
    }

    /// Add a warning diagnostic.
    pub fn add_warning(&mut self, phase: &str, message: impl Into<String>) {
        self.diagnostics.push(Diagnostic::warning(phase, message));
    }

    /// Add an info diagnostic.
    pub fn add_info(&mut self, phase: &str, message: impl Into<String>) {
        self.diagnostics.push(Diagnostic::info(phase, message));
    }

    /// Add a diagnostic with a location.
    pub fn add_diagnostic(&mut self, diagnostic: Diagnostic) {
        self.diagnostics.push(diagnostic);
    }

    /// Get all error diagnostics.
    pub fn errors(&self) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics
            .iter()
            .filter(|d| matches!(d.severity, Severity::Error))
    }

    /// Get all warning diagnostics.
    pub fn warnings(&self) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics
            .iter()
            .filter(|d| matches!(d.severity, Severity::Warning))
    }

    /// Hand out the normalized models and operations.
    ///
    /// # Errors
    ///
    /// Fails if any error diagnostic was recorded, listing every error.
    pub fn into_output(self) -> Result<Normalized> {
        if self.has_errors() {
            let errors: Vec<String> = self.errors().map(ToString::to_string).collect();
            bail!(
                "Normalization failed with {} error(s):\n{}",
                errors.len(),
                errors.join("\n")
            );
        }

        Ok(Normalized {
            models: self.models,
            operations: self.operations,
        })
    }
}
