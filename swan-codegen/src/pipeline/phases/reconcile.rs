//! Reconcile phase - partitions inherited properties.

use eyre::Result;
use tracing::debug;

use crate::{
    pipeline::{GenerationContext, Phase},
    reconcile::reconcile_all,
};

/// Phase that removes inherited properties from each model's own list.
pub struct ReconcilePhase;

impl Phase for ReconcilePhase {
    fn name(&self) -> &'static str {
        "reconcile"
    }

    fn description(&self) -> &'static str {
        "Reconcile properties along inheritance chains"
    }

    fn run(&self, ctx: &mut GenerationContext) -> Result<()> {
        let changed = reconcile_all(&mut ctx.models);
        debug!(changed, "reconciled inherited properties");
        Ok(())
    }
}
