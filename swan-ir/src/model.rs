//! Models and their properties.

use std::collections::BTreeSet;

use indexmap::IndexMap;
use serde::Serialize;

use crate::{Extensions, ScalarKind, TypeDescriptor};

/// All models of a run, keyed by raw schema name in declaration order.
pub type ModelMap = IndexMap<String, SchemaModel>;

/// A resolved enum case.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EnumMember {
    /// Swift case identifier.
    pub name: String,
    /// Raw value as written in the schema.
    pub value: String,
}

/// A model property.
///
/// Constructed with `name == base_name`; the lower phase replaces `name`
/// and fills in the resolved type fields.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SchemaProperty {
    /// Raw key as written in the schema.
    pub base_name: String,
    /// Resolved identifier.
    pub name: String,
    /// Declared schema type.
    #[serde(rename = "schema_type")]
    pub ty: TypeDescriptor,
    /// Resolved leaf type (element type for containers).
    pub base_type: String,
    /// Resolved Swift type expression (e.g., "[String:Pet]").
    pub datatype: String,
    /// `datatype`, or the enum type name for enum properties.
    pub datatype_with_enum: String,
    /// Enum type name for enum properties.
    pub enum_name: Option<String>,
    /// Concrete container type used to create an empty value.
    pub instantiation_type: Option<String>,
    /// Always absent; Swift uses `nil` for missing values.
    pub default_value: Option<String>,
    /// Description, escaped for embedding in comments.
    pub description: Option<String>,
    pub required: bool,
    /// Scalar category of `datatype`, if any.
    pub scalar: Option<ScalarKind>,
    pub is_file: bool,
    pub is_binary: bool,
    /// Raw enum values in schema order.
    pub enum_values: Option<Vec<String>>,
    /// Resolved enum cases, parallel to `enum_values`.
    pub enum_members: Vec<EnumMember>,
    /// True iff another property follows in the owning list.
    pub has_more: bool,
    pub extensions: Extensions,
}

impl SchemaProperty {
    /// Create an unresolved property.
    pub fn new(base_name: impl Into<String>, ty: TypeDescriptor) -> Self {
        let base_name = base_name.into();
        Self {
            name: base_name.clone(),
            base_name,
            ty,
            base_type: String::new(),
            datatype: String::new(),
            datatype_with_enum: String::new(),
            enum_name: None,
            instantiation_type: None,
            default_value: None,
            description: None,
            required: false,
            scalar: None,
            is_file: false,
            is_binary: false,
            enum_values: None,
            enum_members: Vec::new(),
            has_more: false,
            extensions: Extensions::new(),
        }
    }

    /// Set the required flag.
    pub fn required(mut self, required: bool) -> Self {
        self.required = required;
        self
    }

    /// Set the enum values.
    pub fn with_enum_values<I, S>(mut self, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.enum_values = Some(values.into_iter().map(Into::into).collect());
        self
    }

    /// Set the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Returns true if the property declares enum values.
    pub fn is_enum(&self) -> bool {
        self.enum_values.is_some()
    }

    /// Returns true if the resolved name differs from the raw key.
    pub fn is_escaped(&self) -> bool {
        self.name != self.base_name
    }
}

/// A schema model.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SchemaModel {
    /// Raw schema name (key in the [`ModelMap`]).
    pub base_name: String,
    /// Resolved type name.
    pub name: String,
    /// Raw name of the parent model.
    pub parent_schema: Option<String>,
    /// Resolved name of the parent model.
    pub parent: Option<String>,
    pub description: Option<String>,
    /// Properties declared by this model.
    pub vars: Vec<SchemaProperty>,
    /// Own and inherited properties.
    pub all_vars: Vec<SchemaProperty>,
    /// Properties of the immediate parent, including its inherited ones.
    pub parent_vars: Vec<SchemaProperty>,
    /// Value type of additional (free-form) properties.
    pub additional_properties: Option<TypeDescriptor>,
    /// Resolved value type of additional properties.
    pub additional_properties_type: Option<String>,
    /// Extra imports the template layer should emit.
    pub imports: BTreeSet<String>,
    pub extensions: Extensions,
}

impl SchemaModel {
    /// Create an unresolved model with no properties.
    pub fn new(base_name: impl Into<String>) -> Self {
        let base_name = base_name.into();
        Self {
            name: base_name.clone(),
            base_name,
            parent_schema: None,
            parent: None,
            description: None,
            vars: Vec::new(),
            all_vars: Vec::new(),
            parent_vars: Vec::new(),
            additional_properties: None,
            additional_properties_type: None,
            imports: BTreeSet::new(),
            extensions: Extensions::new(),
        }
    }

    /// Set the parent model by raw name.
    pub fn with_parent(mut self, parent: impl Into<String>) -> Self {
        self.parent_schema = Some(parent.into());
        self
    }

    /// Append a declared property.
    pub fn with_property(mut self, property: SchemaProperty) -> Self {
        self.vars.push(property);
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Set the value type of additional properties.
    pub fn with_additional_properties(mut self, ty: TypeDescriptor) -> Self {
        self.additional_properties = Some(ty);
        self
    }

    /// Find a declared property by raw key.
    pub fn var(&self, base_name: &str) -> Option<&SchemaProperty> {
        self.vars.iter().find(|p| p.base_name == base_name)
    }

    /// Returns true if a declared property has the given raw key.
    pub fn declares(&self, base_name: &str) -> bool {
        self.var(base_name).is_some()
    }
}

/// Recompute `has_more` over a list in order: every entry but the last is true.
pub fn mark_has_more(properties: &mut [SchemaProperty]) {
    let count = properties.len();
    for (i, property) in properties.iter_mut().enumerate() {
        property.has_more = i + 1 < count;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn prop(name: &str) -> SchemaProperty {
        SchemaProperty::new(name, TypeDescriptor::primitive("string"))
    }

    #[test]
    fn test_new_property_is_unescaped() {
        let p = prop("created-at");
        assert_eq!(p.name, "created-at");
        assert!(!p.is_escaped());
        assert!(!p.is_enum());
    }

    #[test]
    fn test_mark_has_more() {
        let mut props = vec![prop("a"), prop("b"), prop("c")];
        props[2].has_more = true;
        mark_has_more(&mut props);

        let flags: Vec<bool> = props.iter().map(|p| p.has_more).collect();
        assert_eq!(flags, [true, true, false]);
    }

    #[test]
    fn test_mark_has_more_empty() {
        let mut props: Vec<SchemaProperty> = Vec::new();
        mark_has_more(&mut props);
        assert!(props.is_empty());
    }

    #[test]
    fn test_model_builder() {
        let model = SchemaModel::new("Dog")
            .with_parent("Animal")
            .with_property(prop("bark"));

        assert_eq!(model.parent_schema.as_deref(), Some("Animal"));
        assert!(model.declares("bark"));
        assert!(!model.declares("name"));
    }
}
