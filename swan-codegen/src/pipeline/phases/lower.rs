//! Lower phase - resolves names and types.
//!
//! Turns the raw schema models and operations into Swift-ready ones in
//! place: identifiers, type expressions, enum cases, and `has_more` flags.
//! Forced renames are recorded as warnings.

use std::collections::HashSet;

use eyre::Result;
use swan_core::{escape_quotation_mark, escape_unsafe_characters};
use swan_ir::{EnumMember, Operation, Parameter, SchemaModel, SchemaProperty, mark_has_more};
use tracing::{error, warn};

use crate::{
    naming::{Namer, Rename},
    pipeline::{Diagnostic, GenerationContext, Phase},
    types::TypeResolver,
};

/// Import added to models that carry a description.
const API_MODEL_IMPORT: &str = "ApiModel";

/// Phase that resolves every name and type in the schema.
pub struct LowerPhase;

impl Phase for LowerPhase {
    fn name(&self) -> &'static str {
        "lower"
    }

    fn description(&self) -> &'static str {
        "Resolve Swift names and types"
    }

    fn run(&self, ctx: &mut GenerationContext) -> Result<()> {
        let mut models = std::mem::take(&mut ctx.models);
        let operations = std::mem::take(&mut ctx.operations);

        let mut lowering = Lowering {
            namer: ctx.namer(),
            types: ctx.type_resolver(),
            known: models.keys().cloned().collect(),
            diagnostics: Vec::new(),
        };

        for model in models.values_mut() {
            lowering.model(model);
        }
        let operations: Vec<Operation> = operations
            .into_iter()
            .enumerate()
            .filter_map(|(index, operation)| lowering.operation(index, operation))
            .collect();

        let diagnostics = lowering.diagnostics;
        ctx.models = models;
        ctx.operations = operations;
        ctx.diagnostics.extend(diagnostics);
        Ok(())
    }
}

struct Lowering<'a> {
    namer: Namer<'a>,
    types: TypeResolver<'a>,
    /// Raw names of all models, for parent resolution.
    known: HashSet<String>,
    diagnostics: Vec<Diagnostic>,
}

impl Lowering<'_> {
    fn model(&mut self, model: &mut SchemaModel) {
        let location = format!("models.{}", model.base_name);

        let resolved = self.namer.model_name(&model.base_name);
        self.record(resolved.rename, &location);
        model.name = resolved.name;

        model.parent = model
            .parent_schema
            .as_deref()
            .filter(|parent| self.known.contains(*parent))
            .map(|parent| self.namer.model_name(parent).name);

        model.additional_properties_type = model
            .additional_properties
            .as_ref()
            .map(|ty| self.types.resolve_type(ty));

        if let Some(description) = model.description.take() {
            model.description = Some(escape_text(&description));
            model.imports.insert(API_MODEL_IMPORT.to_string());
        }

        for property in &mut model.vars {
            let location = format!("{}.properties.{}", location, property.base_name);
            self.property(property, &location);
        }
        mark_has_more(&mut model.vars);
    }

    fn property(&mut self, property: &mut SchemaProperty, location: &str) {
        let resolved = self.namer.var_name(&property.base_name);
        self.record(resolved.rename, location);
        property.name = resolved.name;

        let types = &self.types;
        property.datatype = types.resolve_type(&property.ty);
        property.base_type = types.base_type(&property.ty);
        property.instantiation_type = types.instantiation_type(&property.ty);
        property.default_value = types.default_value(&property.ty);
        property.scalar = types.scalar_kind(&property.datatype);
        property.is_file = types.is_file(&property.datatype);
        property.is_binary = types.is_binary(&property.datatype);
        property.description = property.description.as_deref().map(escape_text);
        property.datatype_with_enum = property.datatype.clone();

        if let Some(values) = &property.enum_values {
            let enum_type = self
                .namer
                .enum_type_name(&property.name, &property.datatype);
            self.record(enum_type.rename, location);

            let mut members = Vec::with_capacity(values.len());
            for value in values {
                let resolved = self.namer.enum_member_name(value, &property.datatype);
                self.record(resolved.rename, &format!("{}.enum.{}", location, value));
                members.push(EnumMember {
                    name: resolved.name,
                    value: value.clone(),
                });
            }
            property.enum_members = members;
            property.datatype_with_enum = enum_type.name.clone();
            property.enum_name = Some(enum_type.name);
        }
    }

    fn operation(&mut self, index: usize, mut operation: Operation) -> Option<Operation> {
        let location = format!("operations[{}]", index);

        match self.namer.operation_id(&operation.operation_id) {
            Ok(resolved) => {
                self.record(resolved.rename, &location);
                operation.nickname = resolved.name;
            }
            Err(err) => {
                error!(location = %location, "{}", err);
                self.diagnostics
                    .push(Diagnostic::error("lower", err.to_string()).at(location));
                return None;
            }
        }

        operation.api_name = self.namer.api_name(operation.tag.as_deref().unwrap_or(""));
        operation.return_type = operation
            .response
            .as_ref()
            .map(|ty| self.types.resolve_type(ty));

        for parameter in &mut operation.parameters {
            let location = format!("{}.parameters.{}", location, parameter.base_name);
            self.parameter(parameter, &location);
        }
        let count = operation.parameters.len();
        for (i, parameter) in operation.parameters.iter_mut().enumerate() {
            parameter.has_more = i + 1 < count;
        }

        Some(operation)
    }

    fn parameter(&mut self, parameter: &mut Parameter, location: &str) {
        let resolved = self.namer.param_name(&parameter.base_name);
        self.record(resolved.rename, location);
        parameter.name = resolved.name;
        parameter.datatype = self.types.resolve_type(&parameter.ty);
        parameter.description = parameter.description.as_deref().map(escape_text);
    }

    fn record(&mut self, rename: Option<Rename>, location: &str) {
        let Some(rename) = rename else {
            return;
        };
        warn!(
            kind = %rename.kind,
            from = %rename.from,
            to = %rename.to,
            location,
            "{}",
            rename
        );
        self.diagnostics
            .push(Diagnostic::warning("lower", rename.to_string()).at(location));
    }
}

/// Make free text safe to embed in a string literal or block comment.
fn escape_text(text: &str) -> String {
    let flattened = text.replace(['\t', '\n', '\r'], " ");
    escape_unsafe_characters(&escape_quotation_mark(&flattened))
}
