//! Lint for cyclic inheritance.

use swan_ir::ModelMap;

use super::super::Lint;
use crate::pipeline::Diagnostic;

/// Lint that errors on a model that is its own ancestor.
pub struct ParentCycleLint;

impl Lint for ParentCycleLint {
    fn name(&self) -> &'static str {
        "parent-cycle"
    }

    fn description(&self) -> &'static str {
        "Detect models that inherit from themselves"
    }

    fn check(&self, models: &ModelMap, diagnostics: &mut Vec<Diagnostic>) {
        for (name, model) in models {
            let mut path = vec![name.as_str()];
            let mut next = model.parent_schema.as_deref();

            while let Some(parent) = next {
                if parent == name.as_str() {
                    path.push(parent);
                    diagnostics.push(
                        Diagnostic::error(
                            "validate",
                            format!(
                                "model '{}' inherits from itself ({})",
                                name,
                                path.join(" -> ")
                            ),
                        )
                        .at(format!("models.{}", name)),
                    );
                    break;
                }
                // A cycle further up the chain is reported by its own members.
                if path.contains(&parent) {
                    break;
                }
                path.push(parent);
                next = models.get(parent).and_then(|m| m.parent_schema.as_deref());
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use swan_ir::SchemaModel;

    use super::*;

    fn chain(links: &[(&str, Option<&str>)]) -> ModelMap {
        links
            .iter()
            .map(|(name, parent)| {
                let mut model = SchemaModel::new(*name);
                model.parent_schema = parent.map(str::to_string);
                (name.to_string(), model)
            })
            .collect()
    }

    #[test]
    fn test_no_cycle() {
        let models = chain(&[
            ("Entity", None),
            ("Animal", Some("Entity")),
            ("Dog", Some("Animal")),
        ]);

        let mut diagnostics = Vec::new();
        ParentCycleLint.check(&models, &mut diagnostics);

        assert!(diagnostics.is_empty());
    }

    #[test]
    fn test_two_model_cycle() {
        let models = chain(&[("A", Some("B")), ("B", Some("A"))]);

        let mut diagnostics = Vec::new();
        ParentCycleLint.check(&models, &mut diagnostics);

        assert_eq!(diagnostics.len(), 2);
        assert!(diagnostics.iter().all(|d| d.severity.is_error()));
        assert!(diagnostics[0].message.contains("A -> B -> A"));
    }

    #[test]
    fn test_self_parent() {
        let models = chain(&[("Node", Some("Node"))]);

        let mut diagnostics = Vec::new();
        ParentCycleLint.check(&models, &mut diagnostics);

        assert_eq!(diagnostics.len(), 1);
        assert!(diagnostics[0].message.contains("Node -> Node"));
    }

    #[test]
    fn test_cycle_above_is_not_reported_below() {
        let models = chain(&[("A", Some("B")), ("B", Some("A")), ("C", Some("A"))]);

        let mut diagnostics = Vec::new();
        ParentCycleLint.check(&models, &mut diagnostics);

        assert_eq!(diagnostics.len(), 2);
        assert!(diagnostics.iter().all(|d| d.location.as_deref() != Some("models.C")));
    }

    #[test]
    fn test_missing_parent_ends_walk() {
        let models = chain(&[("Dog", Some("Ghost"))]);

        let mut diagnostics = Vec::new();
        ParentCycleLint.check(&models, &mut diagnostics);

        assert!(diagnostics.is_empty());
    }
}
