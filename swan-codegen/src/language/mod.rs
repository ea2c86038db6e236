//! Language-specific abstractions.
//!
//! - [`NamingConvention`] - Language-specific naming rules
//! - [`SWIFT_NAMING`] - The Swift convention used by the resolvers

mod naming;

pub use naming::{NamingConvention, SWIFT_NAMING};
