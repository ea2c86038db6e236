//! Rename records emitted when a resolver has to decorate a name.

use std::fmt;

use serde::Serialize;

/// The kind of identifier being resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum IdentifierKind {
    Model,
    Variable,
    Parameter,
    Operation,
    EnumMember,
    EnumType,
}

impl fmt::Display for IdentifierKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IdentifierKind::Model => write!(f, "model"),
            IdentifierKind::Variable => write!(f, "property"),
            IdentifierKind::Parameter => write!(f, "parameter"),
            IdentifierKind::Operation => write!(f, "operation"),
            IdentifierKind::EnumMember => write!(f, "enum case"),
            IdentifierKind::EnumType => write!(f, "enum type"),
        }
    }
}

/// Why a name was decorated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RenameReason {
    /// The candidate is a reserved word (or has a configured replacement).
    ReservedWord,
    /// The candidate starts with a digit.
    LeadingDigit,
    /// The candidate equals another name in the same scope.
    Collision,
}

/// A forced rename of an identifier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Rename {
    pub kind: IdentifierKind,
    /// The candidate name before decoration.
    pub from: String,
    /// The decorated name.
    pub to: String,
    pub reason: RenameReason,
}

impl Rename {
    pub(crate) fn new(
        kind: IdentifierKind,
        from: impl Into<String>,
        to: impl Into<String>,
        reason: RenameReason,
    ) -> Self {
        Self {
            kind,
            from: from.into(),
            to: to.into(),
            reason,
        }
    }
}

impl fmt::Display for Rename {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let why = match self.reason {
            RenameReason::ReservedWord => "is a reserved word",
            RenameReason::LeadingDigit => "starts with a digit",
            RenameReason::Collision => "collides with its datatype or property",
        };
        write!(
            f,
            "{} name '{}' {}, renamed to '{}'",
            self.kind, self.from, why, self.to
        )
    }
}

/// A resolved identifier and the rename that produced it, if any.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolved {
    pub name: String,
    pub rename: Option<Rename>,
}

impl Resolved {
    pub(crate) fn plain(name: String) -> Self {
        Self { name, rename: None }
    }

    pub(crate) fn renamed(rename: Rename) -> Self {
        Self {
            name: rename.to.clone(),
            rename: Some(rename),
        }
    }

    /// Returns true if the resolver had to decorate the name.
    pub fn is_renamed(&self) -> bool {
        self.rename.is_some()
    }
}
