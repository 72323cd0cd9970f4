//! Fill observers: watch the greedy pass without touching it.

use crate::allocation::Fill;
use crate::asset::Asset;
use crate::efficiency::Efficiency;

/// One step of the greedy fill, reported after the budget was updated.
///
/// Only steps that took something are reported; assets left at zero
/// allocation produce no event.
#[derive(Clone, Copy, Debug)]
pub struct FillEvent<'a> {
    pub asset: &'a Asset,
    pub efficiency: Efficiency,
    /// `Fill::Full` or `Fill::Partial`
    pub fill: Fill,
    /// Share of the asset taken, in `(0, 1]`
    pub fraction: f64,
    pub allocated_risk: f64,
    pub return_contribution: f64,
    /// Budget left after this step
    pub remaining_budget: f64,
}

/// Receives fill events from [`allocate_with`](crate::allocate_with).
///
/// Observers see the computation but cannot change it. Use them for
/// progress narration, logging, or tracing.
pub trait FillObserver {
    fn on_fill(&mut self, event: &FillEvent<'_>);
}

/// No-op observer.
impl FillObserver for () {
    #[inline]
    fn on_fill(&mut self, _event: &FillEvent<'_>) {}
}

/// Records the name and fill kind of every step, in order.
#[derive(Clone, Debug, Default)]
pub struct FillTrace {
    pub steps: Vec<(String, Fill)>,
}

impl FillObserver for FillTrace {
    fn on_fill(&mut self, event: &FillEvent<'_>) {
        self.steps.push((event.asset.name().to_string(), event.fill));
    }
}
