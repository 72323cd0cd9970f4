//! Fractional knapsack allocation of a risk budget.
//!
//! The greedy pass takes assets in descending [`Efficiency`] order, each one
//! whole while it fits, then a fraction of the first asset that does not fit.
//! For the fractional problem this is globally optimal: moving budget from a
//! higher-ratio asset to a lower-ratio one can never raise total return.

use log::debug;
use rustc_hash::FxHashSet;

use crate::allocation::{AllocatedAsset, Allocation, Fill};
use crate::asset::Asset;
use crate::efficiency::Efficiency;
use crate::error::AllocationError;
use crate::observer::{FillEvent, FillObserver};

/// Allocate `budget` across `assets` to maximize total expected return.
///
/// The input slice is not modified. The result lists every asset, annotated,
/// in processing order.
///
/// # Errors
///
/// - [`AllocationError::InvalidBudget`] if `budget` is negative or not finite.
/// - [`AllocationError::InvalidAsset`] if an asset has an empty or duplicate
///   name, a negative or non-finite risk, or a non-finite expected return.
///
/// ```
/// use riskbudget::{allocate, Asset, Fill};
///
/// let assets = [
///     Asset::new("Bonds", 4.0, 40.0),
///     Asset::new("Equity", 10.0, 150.0),
/// ];
/// let alloc = allocate(&assets, 12.0).unwrap();
///
/// assert_eq!(alloc.assets[0].name(), "Equity");
/// assert_eq!(alloc.assets[1].fill, Fill::Partial);
/// assert_eq!(alloc.total_return, 170.0);
/// assert_eq!(alloc.total_risk_consumed, 12.0);
/// ```
pub fn allocate(assets: &[Asset], budget: f64) -> Result<Allocation, AllocationError> {
    allocate_with(assets, budget, &mut ())
}

/// Same as [`allocate`], reporting every step that takes budget or return
/// to `observer`.
pub fn allocate_with<O>(
    assets: &[Asset],
    budget: f64,
    observer: &mut O,
) -> Result<Allocation, AllocationError>
where
    O: FillObserver + ?Sized,
{
    validate(assets, budget)?;

    // `sort_by` is stable: equal efficiencies keep their input order.
    let mut order: Vec<(usize, Efficiency)> = assets
        .iter()
        .enumerate()
        .map(|(i, a)| (i, Efficiency::of(a)))
        .collect();
    order.sort_by(|a, b| b.1.cmp(&a.1));

    let mut remaining = budget;
    let mut total_return = 0.0;
    let mut exhausted = false;
    let mut annotated = Vec::with_capacity(assets.len());

    for (idx, efficiency) in order {
        let asset = &assets[idx];
        let risk = asset.risk();

        let (fill, allocated_risk, return_contribution) = if exhausted {
            (Fill::None, 0.0, 0.0)
        } else if risk <= remaining {
            remaining -= risk;
            let allocated = if asset.is_risk_free() { 0.0 } else { risk };
            (Fill::Full, allocated, asset.expected_return())
        } else if remaining > 0.0 {
            let fraction = remaining / risk;
            let allocated = remaining;
            remaining = 0.0;
            exhausted = true;
            (Fill::Partial, allocated, asset.expected_return() * fraction)
        } else {
            (Fill::None, 0.0, 0.0)
        };

        if fill != Fill::None {
            total_return += return_contribution;
            let fraction = if fill == Fill::Full {
                1.0
            } else {
                allocated_risk / risk
            };
            debug!(
                "{} {} ({efficiency}): risk {allocated_risk:.4}, return {return_contribution:.4}, remaining {remaining:.4}",
                fill,
                asset.name(),
            );
            observer.on_fill(&FillEvent {
                asset,
                efficiency,
                fill,
                fraction,
                allocated_risk,
                return_contribution,
                remaining_budget: remaining,
            });
        }

        annotated.push(AllocatedAsset {
            asset: asset.clone(),
            efficiency,
            allocated_risk,
            return_contribution,
            fill,
        });
    }

    Ok(Allocation {
        budget,
        total_return,
        total_risk_consumed: budget - remaining,
        remaining_budget: remaining,
        assets: annotated,
    })
}

/// Check every precondition before any work is done.
fn validate(assets: &[Asset], budget: f64) -> Result<(), AllocationError> {
    if !budget.is_finite() || budget < 0.0 {
        debug!("rejected budget {budget}");
        return Err(AllocationError::InvalidBudget { budget });
    }

    let mut seen = FxHashSet::default();
    for asset in assets {
        let name = asset.name();
        let defect = if name.is_empty() {
            Some("name must not be empty")
        } else if !asset.risk().is_finite() {
            Some("risk must be a finite number")
        } else if asset.risk() < 0.0 {
            Some("risk must be >= 0")
        } else if !asset.expected_return().is_finite() {
            Some("expected return must be a finite number")
        } else if !seen.insert(name) {
            Some("duplicate name")
        } else {
            None
        };

        if let Some(reason) = defect {
            debug!("rejected asset '{name}': {reason}");
            return Err(AllocationError::asset(name, reason));
        }
    }

    Ok(())
}
