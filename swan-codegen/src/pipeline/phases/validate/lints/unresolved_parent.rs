//! Lint for parents that are not defined in the schema.

use swan_ir::ModelMap;

use super::super::Lint;
use crate::pipeline::Diagnostic;

/// Lint that warns about a parent name with no matching model.
///
/// Such a model is treated as having no parent.
pub struct UnresolvedParentLint;

impl Lint for UnresolvedParentLint {
    fn name(&self) -> &'static str {
        "unresolved-parent"
    }

    fn description(&self) -> &'static str {
        "Warn about parent models that are not defined"
    }

    fn check(&self, models: &ModelMap, diagnostics: &mut Vec<Diagnostic>) {
        for (name, model) in models {
            if let Some(parent) = &model.parent_schema
                && !models.contains_key(parent)
            {
                diagnostics.push(
                    Diagnostic::warning(
                        "validate",
                        format!(
                            "parent '{}' of model '{}' is not defined; treating it as having no parent",
                            parent, name
                        ),
                    )
                    .at(format!("models.{}", name)),
                );
            }
        }
    }
}
