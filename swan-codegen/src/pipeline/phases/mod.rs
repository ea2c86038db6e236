//! Built-in pipeline phases.
//!
//! This module provides the standard phases that run in every pipeline:
//!
//! - [`ValidatePhase`] - lints the schema and collects diagnostics
//! - [`LowerPhase`] - resolves names and types
//! - [`ReconcilePhase`] - partitions inherited properties
//! - [`PostProcessPhase`] - sets template annotations

mod lower;
mod post_process;
mod reconcile;
mod validate;

pub use lower::LowerPhase;
pub use post_process::PostProcessPhase;
pub use reconcile::ReconcilePhase;
pub use validate::{
    DuplicatePropertyLint, Lint, LintInfo, ParentCycleLint, UnresolvedParentLint, ValidatePhase,
};
