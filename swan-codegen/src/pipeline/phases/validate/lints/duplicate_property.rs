//! Lint for duplicate property detection.

use std::collections::HashSet;

use swan_ir::ModelMap;

use super::super::Lint;
use crate::pipeline::Diagnostic;

/// Lint that errors on a raw property key declared twice by one model.
pub struct DuplicatePropertyLint;

impl Lint for DuplicatePropertyLint {
    fn name(&self) -> &'static str {
        "duplicate-property"
    }

    fn description(&self) -> &'static str {
        "Detect properties declared twice by the same model"
    }

    fn check(&self, models: &ModelMap, diagnostics: &mut Vec<Diagnostic>) {
        for (name, model) in models {
            let mut seen: HashSet<&str> = HashSet::new();
            for property in &model.vars {
                if !seen.insert(property.base_name.as_str()) {
                    diagnostics.push(
                        Diagnostic::error(
                            "validate",
                            format!(
                                "model '{}' declares property '{}' more than once",
                                name, property.base_name
                            ),
                        )
                        .at(format!("models.{}.properties.{}", name, property.base_name)),
                    );
                }
            }
        }
    }
}
