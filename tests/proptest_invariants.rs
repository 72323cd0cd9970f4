//! Property-based tests for allocation invariants.
//!
//! These tests use proptest to verify that key invariants hold
//! across randomly generated asset universes and budgets.

use proptest::prelude::*;
use riskbudget::{Allocation, Asset, Efficiency, Fill, allocate};

const EPS: f64 = 1e-9;

/// Generate a risk, with a fair share of zero-risk assets
fn risk_strategy() -> impl Strategy<Value = f64> {
    prop_oneof![
        1 => Just(0.0),
        6 => 0.01f64..100.0,
    ]
}

/// Generate an asset universe with unique names
fn assets_strategy(
    max_len: usize,
    returns: impl Strategy<Value = f64> + Clone,
) -> impl Strategy<Value = Vec<Asset>> {
    prop::collection::vec((risk_strategy(), returns), 0..max_len).prop_map(|rows| {
        rows.into_iter()
            .enumerate()
            .map(|(i, (risk, ret))| Asset::new(format!("A{i:02}"), risk, ret))
            .collect()
    })
}

fn budget_strategy() -> impl Strategy<Value = f64> {
    prop_oneof![
        1 => Just(0.0),
        8 => 0.0f64..300.0,
    ]
}

fn tolerance(scale: f64) -> f64 {
    EPS * scale.abs().max(1.0)
}

/// Best total return over every feasible allocation that takes a subset of
/// assets whole plus at most one more in part.
///
/// Some optimum of the fractional problem always has that shape (a basic
/// solution of the LP has at most one fractional variable), so this is the
/// true optimum for non-negative returns.
fn brute_force_optimum(assets: &[Asset], budget: f64) -> f64 {
    let n = assets.len();
    let mut best = 0.0f64;

    for mask in 0u32..(1u32 << n) {
        let mut risk = 0.0;
        let mut ret = 0.0;
        for (i, a) in assets.iter().enumerate() {
            if mask & (1 << i) != 0 {
                risk += a.risk();
                ret += a.expected_return();
            }
        }
        if risk > budget + 1e-12 {
            continue;
        }
        best = best.max(ret);

        let left = (budget - risk).max(0.0);
        for (j, a) in assets.iter().enumerate() {
            if mask & (1 << j) != 0 || a.risk() <= 0.0 {
                continue;
            }
            let fraction = (left / a.risk()).min(1.0);
            best = best.max(ret + a.expected_return() * fraction);
        }
    }

    best
}

fn sum_allocated(alloc: &Allocation) -> f64 {
    alloc.assets.iter().map(|a| a.allocated_risk).sum()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(1000))]

    // ========================================================================
    // BUDGET INVARIANTS
    // ========================================================================

    /// Consumed risk never exceeds the budget and matches the per-asset sum
    #[test]
    fn consumed_within_budget(
        assets in assets_strategy(12, -50.0f64..500.0),
        budget in budget_strategy(),
    ) {
        let alloc = allocate(&assets, budget).unwrap();

        prop_assert!(alloc.total_risk_consumed <= budget + tolerance(budget));
        prop_assert!(alloc.remaining_budget >= 0.0);
        prop_assert!(
            (alloc.total_risk_consumed - sum_allocated(&alloc)).abs() <= tolerance(budget),
            "consumed {} != sum {}", alloc.total_risk_consumed, sum_allocated(&alloc)
        );
    }

    /// Budget is used up unless every asset fits
    #[test]
    fn budget_exhausted_unless_everything_fits(
        assets in assets_strategy(12, 0.0f64..500.0),
        budget in budget_strategy(),
    ) {
        let alloc = allocate(&assets, budget).unwrap();
        let total_risk: f64 = assets.iter().map(|a| a.risk()).sum();

        if total_risk >= budget {
            prop_assert!((alloc.total_risk_consumed - budget).abs() <= tolerance(budget));
        } else {
            prop_assert!(alloc.assets.iter().all(|a| a.fill == Fill::Full));
        }
    }

    /// Every asset gets between nothing and all of its risk
    #[test]
    fn per_asset_caps(
        assets in assets_strategy(12, -50.0f64..500.0),
        budget in budget_strategy(),
    ) {
        let alloc = allocate(&assets, budget).unwrap();

        for a in &alloc.assets {
            prop_assert!(a.allocated_risk >= 0.0, "{} negative", a.name());
            prop_assert!(a.allocated_risk <= a.asset.risk(), "{} over cap", a.name());
            prop_assert!((0.0..=1.0).contains(&a.fraction()));
        }
    }

    // ========================================================================
    // ORDERING INVARIANTS
    // ========================================================================

    /// Assets come out in non-increasing efficiency with zero-risk ones first
    #[test]
    fn sorted_by_efficiency(
        assets in assets_strategy(20, -50.0f64..500.0),
        budget in budget_strategy(),
    ) {
        let alloc = allocate(&assets, budget).unwrap();

        prop_assert_eq!(alloc.assets.len(), assets.len());
        for pair in alloc.assets.windows(2) {
            prop_assert!(pair[0].efficiency >= pair[1].efficiency);
        }
        for a in &alloc.assets {
            prop_assert_eq!(a.efficiency, Efficiency::of(&a.asset));
            if a.asset.is_risk_free() {
                prop_assert_eq!(a.fill, Fill::Full);
            }
        }
    }

    /// Fills read Full*, then at most one Partial, then None*
    #[test]
    fn single_partial_boundary(
        assets in assets_strategy(20, -50.0f64..500.0),
        budget in budget_strategy(),
    ) {
        let alloc = allocate(&assets, budget).unwrap();

        let partials = alloc.assets.iter().filter(|a| a.fill == Fill::Partial).count();
        prop_assert!(partials <= 1);

        if let Some(pos) = alloc.assets.iter().position(|a| a.fill == Fill::Partial) {
            let p = &alloc.assets[pos];
            prop_assert!(p.allocated_risk > 0.0 && p.allocated_risk < p.asset.risk());
            prop_assert!(alloc.assets[..pos].iter().all(|a| a.fill == Fill::Full));
            prop_assert!(alloc.assets[pos + 1..].iter().all(|a| a.fill == Fill::None));
            prop_assert_eq!(alloc.remaining_budget, 0.0);
        }
    }

    // ========================================================================
    // OPTIMALITY
    // ========================================================================

    /// Greedy total return matches the brute-force optimum
    #[test]
    fn matches_brute_force_optimum(
        assets in assets_strategy(9, 0.0f64..500.0),
        budget in budget_strategy(),
    ) {
        let alloc = allocate(&assets, budget).unwrap();
        let best = brute_force_optimum(&assets, budget);

        prop_assert!(
            (alloc.total_return - best).abs() <= 1e-6 * best.max(1.0),
            "greedy {} vs optimum {}", alloc.total_return, best
        );
    }

    /// Return contributions add up to the reported total
    #[test]
    fn contributions_sum_to_total(
        assets in assets_strategy(12, -50.0f64..500.0),
        budget in budget_strategy(),
    ) {
        let alloc = allocate(&assets, budget).unwrap();
        let sum: f64 = alloc.assets.iter().map(|a| a.return_contribution).sum();
        prop_assert!((alloc.total_return - sum).abs() <= 1e-6 * sum.abs().max(1.0));
    }

    // ========================================================================
    // DETERMINISM
    // ========================================================================

    /// Calling twice with the same inputs gives the same result
    #[test]
    fn idempotent(
        assets in assets_strategy(15, -50.0f64..500.0),
        budget in budget_strategy(),
    ) {
        let first = allocate(&assets, budget).unwrap();
        let second = allocate(&assets, budget).unwrap();
        prop_assert_eq!(first, second);
    }

    /// Negative budgets are always rejected
    #[test]
    fn negative_budget_rejected(
        assets in assets_strategy(5, 0.0f64..10.0),
        budget in -1000.0f64..-0.0001,
    ) {
        prop_assert!(allocate(&assets, budget).is_err());
    }
}
