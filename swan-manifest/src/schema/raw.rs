//! Serde shapes of the schema document, before folding into swan-ir types.

use indexmap::IndexMap;
use serde::Deserialize;
use serde_json::Value;

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub(super) struct RawDocument {
    #[serde(default)]
    pub models: IndexMap<String, RawModel>,
    #[serde(default)]
    pub operations: Vec<RawOperation>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub(super) struct RawModel {
    pub parent: Option<String>,
    pub description: Option<String>,
    #[serde(default)]
    pub required: Vec<String>,
    #[serde(default)]
    pub properties: IndexMap<String, RawSchema>,
    pub additional_properties: Option<AdditionalProperties>,
}

/// A JSON-schema style type declaration.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(super) struct RawSchema {
    #[serde(rename = "type")]
    pub ty: Option<String>,
    pub format: Option<String>,
    #[serde(rename = "$ref")]
    pub reference: Option<String>,
    pub items: Option<Box<RawSchema>>,
    pub additional_properties: Option<AdditionalProperties>,
    #[serde(rename = "enum")]
    pub enum_values: Option<Vec<Value>>,
    pub description: Option<String>,
}

/// `additionalProperties` is either a boolean or a value schema.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub(super) enum AdditionalProperties {
    Allowed(bool),
    Schema(Box<RawSchema>),
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub(super) struct RawOperation {
    #[serde(default)]
    pub operation_id: String,
    pub tag: Option<String>,
    #[serde(default)]
    pub parameters: Vec<RawParameter>,
    pub response: Option<RawSchema>,
}

#[derive(Debug, Deserialize)]
pub(super) struct RawParameter {
    pub name: String,
    #[serde(default)]
    pub required: bool,
    #[serde(flatten)]
    pub schema: RawSchema,
}
