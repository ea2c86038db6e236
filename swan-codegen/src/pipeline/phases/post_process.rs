//! Post-process phase - sets template annotations.

use eyre::Result;

use crate::{
    pipeline::{GenerationContext, Phase},
    postprocess::post_process_models,
};

/// Phase that flags escaped names and optional scalars.
pub struct PostProcessPhase;

impl Phase for PostProcessPhase {
    fn name(&self) -> &'static str {
        "post-process"
    }

    fn description(&self) -> &'static str {
        "Annotate escaped names and optional scalars"
    }

    fn run(&self, ctx: &mut GenerationContext) -> Result<()> {
        post_process_models(&mut ctx.models, &ctx.manifest.naming);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use swan_ir::{
        ESCAPED_PROPERTY_NAME, HAS_ESCAPED_PROPERTY_NAMES, SWIFT_OPTIONAL_SCALAR, ScalarKind,
        SchemaModel, SchemaProperty, TypeDescriptor,
    };
    use swan_manifest::{Manifest, SchemaDocument};

    use super::*;

    fn run(manifest: Manifest) -> GenerationContext {
        let mut age = SchemaProperty::new("age", TypeDescriptor::primitive("integer")).required(true);
        age.name = "age".into();
        age.scalar = Some(ScalarKind::Integer);
        let mut created = SchemaProperty::new("created-at", TypeDescriptor::primitive("string"));
        created.name = "createdAt".into();

        let mut model = SchemaModel::new("Pet").with_property(age).with_property(created);
        model.all_vars = model.vars.clone();

        let mut document = SchemaDocument::default();
        document.models.insert("Pet".into(), model);
        let mut ctx = GenerationContext::new(document, manifest);
        PostProcessPhase.run(&mut ctx).unwrap();
        ctx
    }

    #[test]
    fn test_post_process_phase() {
        let ctx = run(Manifest::default());
        let pet = &ctx.models["Pet"];

        assert!(pet.vars[0].extensions.flag(SWIFT_OPTIONAL_SCALAR));
        assert!(pet.vars[1].extensions.flag(ESCAPED_PROPERTY_NAME));
        assert!(pet.extensions.flag(HAS_ESCAPED_PROPERTY_NAMES));
    }

    #[test]
    fn test_post_process_unwrap_required() {
        let manifest: Manifest = "[naming]\nunwrap-required = true\n".parse().unwrap();
        let ctx = run(manifest);

        assert!(!ctx.models["Pet"].vars[0].extensions.flag(SWIFT_OPTIONAL_SCALAR));
    }
}
