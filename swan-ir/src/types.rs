//! Core type definitions.

use serde::Serialize;

/// A schema-level type, before it is mapped to a Swift type expression.
///
/// Containers hold their element (or map value) type; map keys are always
/// strings.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TypeDescriptor {
    /// A named schema primitive or alias (e.g., "integer", "DateTime").
    Primitive(String),
    /// A reference to another model by its raw schema name.
    Reference(String),
    /// An array of the inner type.
    Array(Box<TypeDescriptor>),
    /// A string-keyed map with values of the inner type.
    Map(Box<TypeDescriptor>),
}

impl TypeDescriptor {
    /// Create a primitive type.
    pub fn primitive(name: impl Into<String>) -> Self {
        TypeDescriptor::Primitive(name.into())
    }

    /// Create a model reference.
    pub fn reference(name: impl Into<String>) -> Self {
        TypeDescriptor::Reference(name.into())
    }

    /// Create an array of `inner`.
    pub fn array(inner: TypeDescriptor) -> Self {
        TypeDescriptor::Array(Box::new(inner))
    }

    /// Create a string-keyed map with `inner` values.
    pub fn map(inner: TypeDescriptor) -> Self {
        TypeDescriptor::Map(Box::new(inner))
    }

    /// Returns true for arrays and maps.
    pub fn is_container(&self) -> bool {
        matches!(self, TypeDescriptor::Array(_) | TypeDescriptor::Map(_))
    }
}

/// Scalar categories that matter for optional-value interop.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ScalarKind {
    Integer,
    Long,
    Float,
    Double,
    Boolean,
}

impl ScalarKind {
    /// Classify a resolved Swift type name.
    pub fn from_swift_type(datatype: &str) -> Option<Self> {
        match datatype {
            "Int" | "Int32" => Some(ScalarKind::Integer),
            "Int64" => Some(ScalarKind::Long),
            "Float" => Some(ScalarKind::Float),
            "Double" => Some(ScalarKind::Double),
            "Bool" => Some(ScalarKind::Boolean),
            _ => None,
        }
    }

    /// Returns true for integer and floating point kinds.
    pub fn is_numeric(&self) -> bool {
        !matches!(self, ScalarKind::Boolean)
    }
}
