//! Schema document loading.
//!
//! Reads the JSON model/operation document and folds JSON-schema type and
//! format pairs into [`TypeDescriptor`]s. Names are kept raw; resolving them
//! is the job of the codegen pipeline.

mod raw;

use std::{path::Path, str::FromStr};

use swan_ir::{ModelMap, Operation, Parameter, SchemaModel, SchemaProperty, TypeDescriptor};

use crate::{Error, Result, error::SourceContext};
use raw::{AdditionalProperties, RawDocument, RawModel, RawOperation, RawSchema};

/// Models and operations read from a schema document, with raw names.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SchemaDocument {
    /// Models keyed by raw schema name, in document order.
    pub models: ModelMap,
    pub operations: Vec<Operation>,
}

impl FromStr for SchemaDocument {
    type Err = Box<Error>;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_str_with_filename(s, "schema.json")
    }
}

impl SchemaDocument {
    /// Load a schema document from the given path.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
        Self::from_str_with_filename(&content, &path.display().to_string())
    }

    /// Parse a schema document with a custom filename for error reporting.
    pub fn from_str_with_filename(content: &str, filename: &str) -> Result<Self> {
        let ctx = SourceContext::new(content, filename);
        let raw: RawDocument = serde_json::from_str(content).map_err(|e| ctx.json_error(e))?;

        let mut models = ModelMap::with_capacity(raw.models.len());
        for (name, model) in raw.models {
            let model = fold_model(&ctx, &name, model)?;
            models.insert(name, model);
        }

        let operations = raw
            .operations
            .into_iter()
            .enumerate()
            .map(|(index, op)| fold_operation(&ctx, index, op))
            .collect::<Result<Vec<_>>>()?;

        Ok(Self { models, operations })
    }
}

fn fold_model(ctx: &SourceContext, name: &str, raw: RawModel) -> Result<SchemaModel> {
    let location = format!("models.{}", name);

    if let Some(missing) = raw
        .required
        .iter()
        .find(|key| !raw.properties.contains_key(key.as_str()))
    {
        return Err(ctx.invalid_schema_error(
            &location,
            format!("required property '{}' is not declared", missing),
            &format!("\"{}\"", missing),
        ));
    }

    let mut model = SchemaModel::new(name);
    model.parent_schema = raw.parent;
    model.description = raw.description;
    model.additional_properties = match raw.additional_properties {
        Some(extra) => additional_value_type(ctx, &location, &extra)?,
        None => None,
    };

    for (key, schema) in raw.properties {
        let property_location = format!("{}.properties.{}", location, key);
        let ty = fold_type(ctx, &property_location, &key, &schema)?;

        let mut property = SchemaProperty::new(key.as_str(), ty)
            .required(raw.required.iter().any(|r| r == &key));
        property.description = schema.description;
        property.enum_values = schema
            .enum_values
            .map(|values| values.iter().map(enum_value).collect());

        model.vars.push(property);
    }

    Ok(model)
}

fn fold_operation(ctx: &SourceContext, index: usize, raw: RawOperation) -> Result<Operation> {
    let location = format!("operations[{}]", index);
    let mut operation = Operation::new(raw.operation_id);
    operation.tag = raw.tag;

    if let Some(response) = &raw.response {
        operation.response = Some(fold_type(
            ctx,
            &format!("{}.response", location),
            "response",
            response,
        )?);
    }

    for parameter in raw.parameters {
        let ty = fold_type(
            ctx,
            &format!("{}.parameters.{}", location, parameter.name),
            &parameter.name,
            &parameter.schema,
        )?;
        let mut folded = Parameter::new(parameter.name, ty).required(parameter.required);
        folded.description = parameter.schema.description;
        operation.parameters.push(folded);
    }

    Ok(operation)
}

/// Fold a JSON-schema declaration into a [`TypeDescriptor`].
///
/// `needle` is the text used to point the error label into the source.
fn fold_type(
    ctx: &SourceContext,
    location: &str,
    needle: &str,
    schema: &RawSchema,
) -> Result<TypeDescriptor> {
    if let Some(reference) = &schema.reference {
        let name = reference.rsplit('/').next().unwrap_or(reference.as_str());
        if name.is_empty() {
            return Err(ctx.invalid_schema_error(location, "empty $ref", reference));
        }
        return Ok(TypeDescriptor::reference(name));
    }

    let Some(ty) = schema.ty.as_deref() else {
        return Err(ctx.invalid_schema_error(
            location,
            "schema declares neither 'type' nor '$ref'",
            &format!("\"{}\"", needle),
        ));
    };

    let folded = match (ty, schema.format.as_deref()) {
        ("array", _) => {
            let Some(items) = &schema.items else {
                return Err(ctx.invalid_schema_error(
                    location,
                    "array schema is missing 'items'",
                    &format!("\"{}\"", needle),
                ));
            };
            TypeDescriptor::array(fold_type(ctx, &format!("{}.items", location), needle, items)?)
        }
        ("object", _) => match &schema.additional_properties {
            Some(extra) => match additional_value_type(ctx, location, extra)? {
                Some(value) => TypeDescriptor::map(value),
                None => TypeDescriptor::primitive("object"),
            },
            None => TypeDescriptor::primitive("object"),
        },
        ("integer", Some("int64")) => TypeDescriptor::primitive("long"),
        ("integer", _) => TypeDescriptor::primitive("integer"),
        ("number", Some("float")) => TypeDescriptor::primitive("float"),
        ("number", Some("double")) => TypeDescriptor::primitive("double"),
        ("number", _) => TypeDescriptor::primitive("number"),
        ("string", Some("date")) => TypeDescriptor::primitive("date"),
        ("string", Some("date-time")) => TypeDescriptor::primitive("DateTime"),
        ("string", Some("uuid")) => TypeDescriptor::primitive("UUID"),
        ("string", Some("binary")) => TypeDescriptor::primitive("binary"),
        ("string", Some("byte")) => TypeDescriptor::primitive("ByteArray"),
        (other, _) => TypeDescriptor::primitive(other),
    };

    Ok(folded)
}

/// Value type of `additionalProperties`: `true` allows free-form values,
/// `false` allows none.
fn additional_value_type(
    ctx: &SourceContext,
    location: &str,
    extra: &AdditionalProperties,
) -> Result<Option<TypeDescriptor>> {
    match extra {
        AdditionalProperties::Allowed(true) => Ok(Some(TypeDescriptor::primitive("object"))),
        AdditionalProperties::Allowed(false) => Ok(None),
        AdditionalProperties::Schema(schema) => fold_type(
            ctx,
            &format!("{}.additionalProperties", location),
            "additionalProperties",
            schema,
        )
        .map(Some),
    }
}

/// Enum values are kept as written; non-string values use their JSON text.
fn enum_value(value: &serde_json::Value) -> String {
    match value {
        serde_json::Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PETSTORE: &str = r##"{
  "models": {
    "Pet": {
      "parent": "Animal",
      "description": "A pet",
      "required": ["id"],
      "properties": {
        "id": {"type": "integer", "format": "int64"},
        "tags": {"type": "array", "items": {"type": "string"}},
        "owner": {"$ref": "#/definitions/Person"},
        "status": {"type": "string", "enum": ["available", "sold"]},
        "scores": {"type": "object", "additionalProperties": {"type": "number", "format": "double"}}
      },
      "additionalProperties": {"type": "string"}
    },
    "Animal": {
      "properties": {
        "born": {"type": "string", "format": "date-time"}
      }
    }
  },
  "operations": [
    {"operationId": "getPetById", "tag": "pet",
     "parameters": [{"name": "pet_id", "type": "integer", "required": true}],
     "response": {"$ref": "#/definitions/Pet"}}
  ]
}"##;

    #[test]
    fn test_parse_document() {
        let doc: SchemaDocument = PETSTORE.parse().unwrap();

        let names: Vec<_> = doc.models.keys().map(String::as_str).collect();
        assert_eq!(names, ["Pet", "Animal"]);

        let pet = &doc.models["Pet"];
        assert_eq!(pet.base_name, "Pet");
        assert_eq!(pet.parent_schema.as_deref(), Some("Animal"));
        assert_eq!(pet.description.as_deref(), Some("A pet"));
        assert_eq!(
            pet.additional_properties,
            Some(TypeDescriptor::primitive("string"))
        );

        let keys: Vec<_> = pet.vars.iter().map(|p| p.base_name.as_str()).collect();
        assert_eq!(keys, ["id", "tags", "owner", "status", "scores"]);

        let id = pet.var("id").unwrap();
        assert!(id.required);
        assert_eq!(id.ty, TypeDescriptor::primitive("long"));

        assert_eq!(
            pet.var("tags").unwrap().ty,
            TypeDescriptor::array(TypeDescriptor::primitive("string"))
        );
        assert_eq!(pet.var("owner").unwrap().ty, TypeDescriptor::reference("Person"));
        assert_eq!(
            pet.var("scores").unwrap().ty,
            TypeDescriptor::map(TypeDescriptor::primitive("double"))
        );

        let status = pet.var("status").unwrap();
        assert!(!status.required);
        assert_eq!(
            status.enum_values.as_deref(),
            Some(&["available".to_string(), "sold".to_string()][..])
        );

        assert_eq!(
            doc.models["Animal"].var("born").unwrap().ty,
            TypeDescriptor::primitive("DateTime")
        );
    }

    #[test]
    fn test_parse_operations() {
        let doc: SchemaDocument = PETSTORE.parse().unwrap();
        assert_eq!(doc.operations.len(), 1);

        let op = &doc.operations[0];
        assert_eq!(op.operation_id, "getPetById");
        assert_eq!(op.tag.as_deref(), Some("pet"));
        assert_eq!(op.response, Some(TypeDescriptor::reference("Pet")));

        let param = &op.parameters[0];
        assert_eq!(param.base_name, "pet_id");
        assert!(param.required);
        assert_eq!(param.ty, TypeDescriptor::primitive("integer"));
    }

    #[test]
    fn test_format_folding() {
        let cases = [
            (r#"{"type": "integer"}"#, "integer"),
            (r#"{"type": "integer", "format": "int32"}"#, "integer"),
            (r#"{"type": "number"}"#, "number"),
            (r#"{"type": "number", "format": "float"}"#, "float"),
            (r#"{"type": "string", "format": "date"}"#, "date"),
            (r#"{"type": "string", "format": "uuid"}"#, "UUID"),
            (r#"{"type": "string", "format": "binary"}"#, "binary"),
            (r#"{"type": "string", "format": "byte"}"#, "ByteArray"),
            (r#"{"type": "string", "format": "email"}"#, "string"),
            (r#"{"type": "boolean"}"#, "boolean"),
            (r#"{"type": "file"}"#, "file"),
            (r#"{"type": "object"}"#, "object"),
        ];

        for (schema, expected) in cases {
            let json = format!(r#"{{"models": {{"M": {{"properties": {{"p": {}}}}}}}}}"#, schema);
            let doc: SchemaDocument = json.parse().unwrap();
            assert_eq!(
                doc.models["M"].vars[0].ty,
                TypeDescriptor::primitive(expected),
                "{}",
                schema
            );
        }
    }

    #[test]
    fn test_free_form_additional_properties() {
        let json = r#"{"models": {"M": {"properties": {
            "any": {"type": "object", "additionalProperties": true},
            "none": {"type": "object", "additionalProperties": false}
        }}}}"#;
        let doc: SchemaDocument = json.parse().unwrap();
        let model = &doc.models["M"];
        assert_eq!(
            model.var("any").unwrap().ty,
            TypeDescriptor::map(TypeDescriptor::primitive("object"))
        );
        assert_eq!(model.var("none").unwrap().ty, TypeDescriptor::primitive("object"));
    }

    #[test]
    fn test_non_string_enum_values() {
        let json = r#"{"models": {"M": {"properties": {
            "level": {"type": "integer", "enum": [1, -2, 3]}
        }}}}"#;
        let doc: SchemaDocument = json.parse().unwrap();
        assert_eq!(
            doc.models["M"].vars[0].enum_values.as_deref(),
            Some(&["1".to_string(), "-2".to_string(), "3".to_string()][..])
        );
    }

    #[test]
    fn test_empty_document() {
        let doc: SchemaDocument = "{}".parse().unwrap();
        assert_eq!(doc, SchemaDocument::default());
    }

    #[test]
    fn test_malformed_json() {
        let err = "{\"models\": [}".parse::<SchemaDocument>().unwrap_err();
        match *err {
            Error::Json { span, .. } => assert!(span.is_some()),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_missing_type() {
        let json = r#"{"models": {"M": {"properties": {"p": {"description": "?"}}}}}"#;
        let err = json.parse::<SchemaDocument>().unwrap_err();
        match *err {
            Error::InvalidSchema { location, .. } => assert_eq!(location, "models.M.properties.p"),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_array_without_items() {
        let json = r#"{"models": {"M": {"properties": {"p": {"type": "array"}}}}}"#;
        let err = json.parse::<SchemaDocument>().unwrap_err();
        assert!(matches!(*err, Error::InvalidSchema { .. }));
    }

    #[test]
    fn test_undeclared_required_property() {
        let json = r#"{"models": {"M": {"required": ["ghost"], "properties": {}}}}"#;
        let err = json.parse::<SchemaDocument>().unwrap_err();
        match *err {
            Error::InvalidSchema { reason, span, .. } => {
                assert!(reason.contains("ghost"));
                assert!(span.is_some());
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("schema.json");
        std::fs::write(&path, PETSTORE).unwrap();

        let doc = SchemaDocument::from_file(&path).unwrap();
        assert_eq!(doc.models.len(), 2);
    }
}
