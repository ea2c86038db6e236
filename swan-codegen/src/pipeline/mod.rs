//! Normalization pipeline.
//!
//! This module provides a [`Pipeline`] orchestrator that runs the phases
//! from a loaded schema document to template-ready models:
//!
//! - Explicit phase boundaries (validate → lower → reconcile → post-process)
//! - Plugin hooks for extensibility (before/after each phase)
//! - Unified diagnostics collection
//!
//! # Example
//!
//! ```ignore
//! use swan_codegen::pipeline::Pipeline;
//!
//! let ctx = Pipeline::new().run(document, &manifest)?;
//!
//! for diag in ctx.warnings() {
//!     eprintln!("{}", diag);
//! }
//!
//! let output = ctx.into_output()?;
//! ```

mod context;
mod diagnostic;
mod phase;
pub mod phases;
mod plugin;
mod runner;

pub use context::{GenerationContext, Normalized};
pub use diagnostic::{Diagnostic, Severity};
pub use phase::{Phase, PhaseInfo};
pub use plugin::Plugin;
pub use runner::Pipeline;
