//! Identifier resolvers.
//!
//! Every resolver follows the same policy: sanitize the raw name, apply the
//! language casing, then decorate the candidate if it is a reserved word or
//! starts with a digit. Decorations are reported as [`Rename`]s so the
//! caller can surface them; they never fail the run.

use swan_core::{NamingContext, ReservedWords, initial_caps, sanitize_name, starts_with_digit};
use thiserror::Error;

use super::{
    enum_member,
    rename::{IdentifierKind, Rename, RenameReason, Resolved},
};
use crate::language::NamingConvention;

/// Errors raised for names that cannot be resolved at all.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NamingError {
    #[error("operation id '{raw}' is empty after sanitizing")]
    EmptyOperationId { raw: String },
}

/// Resolves raw schema names into legal identifiers.
#[derive(Debug, Clone, Copy)]
pub struct Namer<'a> {
    convention: &'a NamingConvention,
    context: &'a NamingContext,
    reserved: &'a ReservedWords,
}

impl<'a> Namer<'a> {
    pub fn new(
        convention: &'a NamingConvention,
        context: &'a NamingContext,
        reserved: &'a ReservedWords,
    ) -> Self {
        Self {
            convention,
            context,
            reserved,
        }
    }

    pub fn convention(&self) -> &'a NamingConvention {
        self.convention
    }

    pub fn context(&self) -> &'a NamingContext {
        self.context
    }

    pub fn reserved(&self) -> &'a ReservedWords {
        self.reserved
    }

    /// Resolve a model (type) name, applying the configured prefix and suffix.
    pub fn model_name(&self, raw: &str) -> Resolved {
        let mut candidate = sanitize_name(raw);
        if let Some(suffix) = self.context.suffix() {
            candidate = format!("{}_{}", candidate, suffix);
        }
        if let Some(prefix) = self.context.prefix() {
            candidate = format!("{}_{}", prefix, candidate);
        }
        let candidate = self.convention.type_name(&candidate);

        self.decorate(IdentifierKind::Model, candidate, |name| {
            self.convention.marked_type(name)
        })
    }

    /// Resolve a property name.
    pub fn var_name(&self, raw: &str) -> Resolved {
        let candidate = self.convention.value_name(&sanitize_name(raw));
        self.decorate(IdentifierKind::Variable, candidate, underscored)
    }

    /// Resolve an operation parameter name.
    pub fn param_name(&self, raw: &str) -> Resolved {
        let candidate = self.convention.value_name(&sanitize_name(raw));
        self.decorate(IdentifierKind::Parameter, candidate, underscored)
    }

    /// Resolve an operation id into a method name.
    pub fn operation_id(&self, raw: &str) -> Result<Resolved, NamingError> {
        let candidate = self.convention.method_name(&sanitize_name(raw));
        if candidate.is_empty() {
            return Err(NamingError::EmptyOperationId {
                raw: raw.to_string(),
            });
        }

        Ok(self.decorate(IdentifierKind::Operation, candidate, |name| {
            self.convention.verb_method(name)
        }))
    }

    /// Resolve an enum case name for a raw enum value.
    pub fn enum_member_name(&self, value: &str, datatype: &str) -> Resolved {
        enum_member::resolve(self, value, datatype)
    }

    /// Resolve the type name of an inline enum declared by a property.
    ///
    /// `property` is the property's name, `datatype` its resolved type. The
    /// rename, if any, spans from the cased candidate to the final name.
    pub fn enum_type_name(&self, property: &str, datatype: &str) -> Resolved {
        let resolved = self.model_name(property);
        let mut rename = resolved.rename;
        let mut name = resolved.name;

        let reason = if self.reserved.is_reserved(&name) {
            Some(RenameReason::ReservedWord)
        } else if name == datatype || name == self.var_name(property).name {
            Some(RenameReason::Collision)
        } else {
            None
        };
        if let Some(reason) = reason {
            let from = rename.take().map_or_else(|| name.clone(), |r| r.from);
            name.push_str(self.convention.enum_suffix);
            rename = Some(Rename::new(IdentifierKind::EnumType, from, name.clone(), reason));
        }
        if starts_with_digit(&name) {
            let from = rename.take().map_or_else(|| name.clone(), |r| r.from);
            name.insert(0, '_');
            rename = Some(Rename::new(
                IdentifierKind::EnumType,
                from,
                name.clone(),
                RenameReason::LeadingDigit,
            ));
        }

        match rename {
            Some(rename) => Resolved::renamed(Rename {
                kind: IdentifierKind::EnumType,
                ..rename
            }),
            None => Resolved::plain(name),
        }
    }

    /// Resolve the API class name for an operation tag.
    pub fn api_name(&self, tag: &str) -> String {
        if tag.is_empty() {
            "DefaultAPI".to_string()
        } else {
            format!("{}API", initial_caps(tag))
        }
    }

    /// Apply the reserved-word and leading-digit checks to a cased candidate.
    ///
    /// A configured replacement wins over `mark` for reserved words.
    fn decorate(
        &self,
        kind: IdentifierKind,
        candidate: String,
        mark: impl Fn(&str) -> String,
    ) -> Resolved {
        if self.reserved.is_reserved(&candidate) {
            let to = match self.reserved.mapping(&candidate) {
                Some(replacement) => replacement.to_string(),
                None => mark(&candidate),
            };
            return Resolved::renamed(Rename::new(
                kind,
                candidate,
                to,
                RenameReason::ReservedWord,
            ));
        }

        if starts_with_digit(&candidate) {
            let to = mark(&candidate);
            return Resolved::renamed(Rename::new(
                kind,
                candidate,
                to,
                RenameReason::LeadingDigit,
            ));
        }

        Resolved::plain(candidate)
    }
}

fn underscored(name: &str) -> String {
    format!("_{}", name)
}
