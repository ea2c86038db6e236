//! Schema model types for the swan Swift model normalizer.
//!
//! These types are both the input and the output of normalization: they are
//! built from the schema with raw names, mutated in place by the pipeline,
//! and serialized for the template layer.
//!
//! # Architecture
//!
//! ```text
//! schema.json → swan-manifest (loading) → swan-ir (models) → swan-codegen (normalize) → templates
//! ```

mod extensions;
mod model;
mod operation;
mod types;

pub use extensions::{
    ESCAPED_PROPERTY_NAME, Extensions, HAS_ESCAPED_PROPERTY_NAMES, SWIFT_OPTIONAL_SCALAR,
};
pub use model::{EnumMember, ModelMap, SchemaModel, SchemaProperty, mark_has_more};
pub use operation::{Operation, Parameter};
pub use types::{ScalarKind, TypeDescriptor};
