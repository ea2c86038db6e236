//! Swift model normalization for the swan code generator.
//!
//! Takes a schema document with raw names and turns it into a model map
//! that Swift templates can render directly: legal identifiers, Swift type
//! expressions, enum cases, inherited properties split out, and template
//! annotations set.
//!
//! # Module Organization
//!
//! - [`language`] - The Swift naming convention (casing, reserved words, markers)
//! - [`naming`] - Identifier resolvers and rename records
//! - [`types`] - Type expression resolution
//! - [`reconcile`] - Inheritance partitioning of property lists
//! - [`postprocess`] - Template annotations
//! - [`pipeline`] - Phase pipeline, context, and diagnostics

pub mod language;
pub mod naming;
pub mod pipeline;
pub mod postprocess;
pub mod reconcile;
pub mod types;

use eyre::Result;
use swan_manifest::{Manifest, SchemaDocument};

pub use pipeline::{Normalized, Pipeline};

/// Run the built-in pipeline and hand out the normalized result.
///
/// # Errors
///
/// Fails if validation rejects the schema or any error diagnostic was
/// recorded along the way.
pub fn normalize(document: SchemaDocument, manifest: &Manifest) -> Result<Normalized> {
    Pipeline::new().run(document, manifest)?.into_output()
}
