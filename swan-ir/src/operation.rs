//! API operations and their parameters.

use serde::Serialize;

use crate::TypeDescriptor;

/// An API operation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Operation {
    /// Raw operation id as written in the schema.
    pub operation_id: String,
    /// Resolved method name.
    pub nickname: String,
    /// Grouping tag (one API class per tag).
    pub tag: Option<String>,
    /// Resolved API class name.
    pub api_name: String,
    pub parameters: Vec<Parameter>,
    /// Response body type, if any.
    pub response: Option<TypeDescriptor>,
    /// Resolved response type expression.
    pub return_type: Option<String>,
}

impl Operation {
    /// Create an unresolved operation.
    pub fn new(operation_id: impl Into<String>) -> Self {
        let operation_id = operation_id.into();
        Self {
            nickname: operation_id.clone(),
            operation_id,
            tag: None,
            api_name: String::new(),
            parameters: Vec::new(),
            response: None,
            return_type: None,
        }
    }

    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tag = Some(tag.into());
        self
    }

    pub fn with_parameter(mut self, parameter: Parameter) -> Self {
        self.parameters.push(parameter);
        self
    }

    pub fn with_response(mut self, ty: TypeDescriptor) -> Self {
        self.response = Some(ty);
        self
    }
}

/// An operation parameter.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Parameter {
    /// Raw parameter name.
    pub base_name: String,
    /// Resolved identifier.
    pub name: String,
    #[serde(rename = "schema_type")]
    pub ty: TypeDescriptor,
    /// Resolved Swift type expression.
    pub datatype: String,
    pub required: bool,
    pub description: Option<String>,
    /// True iff another parameter follows.
    pub has_more: bool,
}

impl Parameter {
    /// Create an unresolved parameter.
    pub fn new(base_name: impl Into<String>, ty: TypeDescriptor) -> Self {
        let base_name = base_name.into();
        Self {
            name: base_name.clone(),
            base_name,
            ty,
            datatype: String::new(),
            required: false,
            description: None,
            has_more: false,
        }
    }

    pub fn required(mut self, required: bool) -> Self {
        self.required = required;
        self
    }
}
