//! Identifier resolution for Swift output.
//!
//! - [`Namer`] - model, property, parameter, operation and enum names
//! - [`Rename`] - record of a name that had to be decorated
//! - [`NamingError`] - names that cannot be resolved

mod enum_member;
mod rename;
mod resolver;

pub use rename::{IdentifierKind, Rename, RenameReason, Resolved};
pub use resolver::{Namer, NamingError};
