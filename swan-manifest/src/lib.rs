// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

//! Configuration and schema loading for the swan Swift model normalizer.
//!
//! `swan.toml` carries naming options and reserved-word replacements; the
//! schema document is a JSON description of models and operations.

mod error;
mod manifest;
mod schema;
mod validate;

pub use error::{Error, Result, SourceContext};
pub use manifest::{Manifest, SwanToml, parse_manifest};
pub use schema::SchemaDocument;
