//! Built-in lints for schema validation.

mod duplicate_property;
mod parent_cycle;
mod unresolved_parent;

pub use duplicate_property::DuplicatePropertyLint;
pub use parent_cycle::ParentCycleLint;
pub use unresolved_parent::UnresolvedParentLint;
