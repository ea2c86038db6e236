//! Core utilities and types for the swan Swift model normalizer.
//!
//! This crate provides the leaf components used by every naming operation:
//! string sanitizing and casing, the reserved-word table, the schema type
//! table, and the global naming options.

mod naming_context;
mod reserved;
mod type_mapper;
mod utils;

pub use naming_context::NamingContext;
pub use reserved::{ReservedWords, SWIFT_RESERVED_WORDS};
pub use type_mapper::{SWIFT_DEFAULT_INCLUDES, SWIFT_PRIMITIVES, SwiftTypeMapper, TypeMapper};
// String utilities
pub use utils::{
    camelize, capitalize_fully, escape_quotation_mark, escape_unsafe_characters, initial_caps,
    is_screaming_case, sanitize_name, starts_with_digit,
};
