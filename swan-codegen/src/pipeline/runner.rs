//! Pipeline orchestrator.

use eyre::Result;
use swan_manifest::{Manifest, SchemaDocument};
use tracing::debug;

use super::{
    GenerationContext, Phase, Plugin,
    phases::{LowerPhase, PostProcessPhase, ReconcilePhase, ValidatePhase},
};

/// The normalization pipeline orchestrator.
///
/// Runs the built-in phases (validate, lower, reconcile, post-process)
/// followed by any user phases, calling plugin hooks before and after each.
///
/// # Example
///
/// ```ignore
/// let pipeline = Pipeline::new()
///     .plugin(MyPlugin::new())
///     .phase(MyCustomPhase);
///
/// let ctx = pipeline.run(document, &manifest)?;
/// ```
pub struct Pipeline {
    phases: Vec<Box<dyn Phase>>,
    plugins: Vec<Box<dyn Plugin>>,
}

impl Pipeline {
    /// Create a new pipeline with only the built-in phases.
    pub fn new() -> Self {
        Self {
            phases: Vec::new(),
            plugins: Vec::new(),
        }
    }

    /// Add a phase to run after the built-in phases.
    pub fn phase(mut self, phase: impl Phase + 'static) -> Self {
        self.phases.push(Box::new(phase));
        self
    }

    /// Add a plugin to receive phase lifecycle hooks.
    pub fn plugin(mut self, plugin: impl Plugin + 'static) -> Self {
        self.plugins.push(Box::new(plugin));
        self
    }

    /// Run the pipeline on a schema document.
    ///
    /// Executes all phases in order:
    /// 1. ValidatePhase - lints the schema, collects diagnostics
    /// 2. LowerPhase - resolves names and types
    /// 3. ReconcilePhase - partitions inherited properties
    /// 4. PostProcessPhase - sets template annotations
    /// 5. User phases (if any)
    ///
    /// # Errors
    ///
    /// Returns an error if any phase fails fatally. Errors recorded as
    /// diagnostics surface from [`GenerationContext::into_output`].
    pub fn run(&self, document: SchemaDocument, manifest: &Manifest) -> Result<GenerationContext> {
        let mut ctx = GenerationContext::new(document, manifest.clone());

        // Built-in phases in execution order
        let builtin_phases: Vec<Box<dyn Phase>> = vec![
            Box::new(ValidatePhase::new()),
            Box::new(LowerPhase),
            Box::new(ReconcilePhase),
            Box::new(PostProcessPhase),
        ];

        for phase in builtin_phases.iter().chain(self.phases.iter()) {
            self.run_phase(phase.as_ref(), &mut ctx)?;
        }

        Ok(ctx)
    }

    /// Run a single phase with plugin hooks.
    fn run_phase(&self, phase: &dyn Phase, ctx: &mut GenerationContext) -> Result<()> {
        let phase_name = phase.name();

        for plugin in &self.plugins {
            plugin.on_before_phase(phase_name, ctx)?;
        }

        debug!(phase = phase_name, description = phase.description(), "phase started");
        phase.run(ctx)?;
        debug!(
            phase = phase_name,
            diagnostics = ctx.diagnostics.len(),
            "phase finished"
        );

        for plugin in &self.plugins {
            plugin.on_after_phase(phase_name, ctx)?;
        }

        Ok(())
    }
}

impl Default for Pipeline {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{
        Arc, Mutex,
        atomic::{AtomicUsize, Ordering},
    };

    use swan_ir::{SchemaModel, SchemaProperty, TypeDescriptor};

    use super::*;

    struct CountingPlugin {
        before_count: Arc<AtomicUsize>,
        after_count: Arc<AtomicUsize>,
    }

    impl CountingPlugin {
        fn new() -> (Self, Arc<AtomicUsize>, Arc<AtomicUsize>) {
            let before = Arc::new(AtomicUsize::new(0));
            let after = Arc::new(AtomicUsize::new(0));
            (
                Self {
                    before_count: before.clone(),
                    after_count: after.clone(),
                },
                before,
                after,
            )
        }
    }

    impl Plugin for CountingPlugin {
        fn name(&self) -> &'static str {
            "counting"
        }

        fn on_before_phase(&self, _phase: &str, _ctx: &mut GenerationContext) -> Result<()> {
            self.before_count.fetch_add(1, Ordering::SeqCst);
            Ok(())
        }

        fn on_after_phase(&self, _phase: &str, _ctx: &mut GenerationContext) -> Result<()> {
            self.after_count.fetch_add(1, Ordering::SeqCst);
            Ok(())
        }
    }

    struct RecordingPlugin(Arc<Mutex<Vec<String>>>);

    impl Plugin for RecordingPlugin {
        fn name(&self) -> &'static str {
            "recording"
        }

        fn on_before_phase(&self, phase: &str, _ctx: &mut GenerationContext) -> Result<()> {
            self.0.lock().unwrap().push(phase.to_string());
            Ok(())
        }
    }

    struct MarkerPhase;

    impl Phase for MarkerPhase {
        fn name(&self) -> &'static str {
            "marker"
        }

        fn description(&self) -> &'static str {
            "Adds an info diagnostic"
        }

        fn run(&self, ctx: &mut GenerationContext) -> Result<()> {
            ctx.add_info("marker", "ran");
            Ok(())
        }
    }

    fn make_test_document() -> SchemaDocument {
        let mut document = SchemaDocument::default();
        document.models.insert(
            "pet".into(),
            SchemaModel::new("pet").with_property(SchemaProperty::new(
                "pet_id",
                TypeDescriptor::primitive("long"),
            )),
        );
        document
    }

    #[test]
    fn test_pipeline_runs_phases() {
        let pipeline = Pipeline::new();
        let ctx = pipeline
            .run(make_test_document(), &Manifest::default())
            .expect("pipeline should succeed");

        let pet = &ctx.models["pet"];
        assert_eq!(pet.name, "Pet");
        assert_eq!(pet.vars[0].name, "petId");
        assert_eq!(pet.vars[0].datatype, "Int64");
        assert_eq!(pet.all_vars.len(), 1);
    }

    #[test]
    fn test_pipeline_plugin_hooks() {
        let (plugin, before_count, after_count) = CountingPlugin::new();

        let pipeline = Pipeline::new().plugin(plugin);
        let _ = pipeline
            .run(make_test_document(), &Manifest::default())
            .expect("pipeline should succeed");

        // 4 built-in phases = 4 before + 4 after hooks
        assert_eq!(before_count.load(Ordering::SeqCst), 4);
        assert_eq!(after_count.load(Ordering::SeqCst), 4);
    }

    #[test]
    fn test_pipeline_phase_order() {
        let phases = Arc::new(Mutex::new(Vec::new()));
        let pipeline = Pipeline::new()
            .plugin(RecordingPlugin(phases.clone()))
            .phase(MarkerPhase);

        let ctx = pipeline
            .run(make_test_document(), &Manifest::default())
            .expect("pipeline should succeed");

        assert_eq!(
            *phases.lock().unwrap(),
            ["validate", "lower", "reconcile", "post-process", "marker"]
        );
        assert!(ctx.diagnostics.iter().any(|d| d.phase == "marker"));
    }
}
