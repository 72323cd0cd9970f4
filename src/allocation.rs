//! Allocation results: per-asset annotations and run totals.

use std::fmt;

use crate::asset::Asset;
use crate::efficiency::Efficiency;

/// How much of an asset the greedy pass took.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Fill {
    /// The whole asset (always the case for a taken risk-free asset).
    Full,
    /// A strict fraction; the budget ran out inside this asset.
    Partial,
    /// Nothing.
    None,
}

impl fmt::Display for Fill {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Fill::Full => write!(f, "FULL"),
            Fill::Partial => write!(f, "PARTIAL"),
            Fill::None => write!(f, "NONE"),
        }
    }
}

/// An input asset annotated with the allocator's decision.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AllocatedAsset {
    /// The asset as supplied by the caller
    pub asset: Asset,
    /// Greedy selection key
    pub efficiency: Efficiency,
    /// Risk consumed from the budget, `0 <= allocated_risk <= asset.risk()`
    pub allocated_risk: f64,
    /// Return captured by this allocation
    pub return_contribution: f64,
    /// Full, partial, or no allocation
    pub fill: Fill,
}

impl AllocatedAsset {
    /// Share of the asset taken, in `[0, 1]`.
    ///
    /// A taken risk-free asset reports 1.0 even though its allocated risk is 0.
    pub fn fraction(&self) -> f64 {
        match self.fill {
            Fill::Full => 1.0,
            Fill::None => 0.0,
            Fill::Partial => self.allocated_risk / self.asset.risk(),
        }
    }

    #[inline]
    pub fn name(&self) -> &str {
        self.asset.name()
    }

    /// True if any part of the asset was taken.
    #[inline]
    pub fn is_selected(&self) -> bool {
        self.fill != Fill::None
    }
}

/// Outcome of one [`allocate`](crate::allocate) call.
///
/// Assets appear in processing order: descending efficiency, with ties in
/// their original input order.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Allocation {
    /// Risk budget the run started with
    pub budget: f64,
    /// Sum of all return contributions
    pub total_return: f64,
    /// `budget - remaining_budget`
    pub total_risk_consumed: f64,
    /// Budget left unconsumed after the greedy pass
    pub remaining_budget: f64,
    /// Annotated assets in processing order
    pub assets: Vec<AllocatedAsset>,
}

impl Allocation {
    /// Annotated assets in processing order.
    pub fn assets(&self) -> &[AllocatedAsset] {
        &self.assets
    }

    /// Look up an asset's annotation by name.
    pub fn get(&self, name: &str) -> Option<&AllocatedAsset> {
        self.assets.iter().find(|a| a.name() == name)
    }

    /// The partially filled asset, if the budget ran out inside one.
    pub fn partial(&self) -> Option<&AllocatedAsset> {
        self.assets.iter().find(|a| a.fill == Fill::Partial)
    }

    /// Assets that received any allocation.
    pub fn selected(&self) -> impl Iterator<Item = &AllocatedAsset> {
        self.assets.iter().filter(|a| a.is_selected())
    }

    /// Fraction of the budget consumed, in `[0, 1]`. Zero for a zero budget.
    pub fn utilization(&self) -> f64 {
        if self.budget > 0.0 {
            self.total_risk_consumed / self.budget
        } else {
            0.0
        }
    }

    /// True if no budget is left over.
    pub fn is_exhausted(&self) -> bool {
        self.remaining_budget == 0.0
    }
}
