//! Efficiency: the greedy selection key.

use std::cmp::Ordering;
use std::fmt;

use crate::asset::Asset;

/// Return earned per unit of risk.
///
/// Zero-risk assets form their own top tier instead of getting a large
/// sentinel ratio: they cost nothing, so they outrank every finite ratio.
///
/// The ordering is total. `RiskFree` values are equal to each other and
/// greater than any `Ratio`; ratios compare with [`f64::total_cmp`].
///
/// ```
/// use riskbudget::Efficiency;
///
/// assert!(Efficiency::RiskFree > Efficiency::Ratio(f64::MAX));
/// assert!(Efficiency::Ratio(20.0) > Efficiency::Ratio(15.0));
/// ```
#[derive(Clone, Copy, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Efficiency {
    /// The asset has zero risk.
    RiskFree,
    /// `expected_return / risk` for an asset with positive risk.
    Ratio(f64),
}

impl Efficiency {
    /// Compute the efficiency of an asset.
    ///
    /// Callers must have rejected negative risk already.
    pub fn of(asset: &Asset) -> Self {
        if asset.is_risk_free() {
            Efficiency::RiskFree
        } else {
            Efficiency::Ratio(asset.expected_return() / asset.risk())
        }
    }

    /// The numeric ratio, or `None` for the risk-free tier.
    #[inline]
    pub fn ratio(self) -> Option<f64> {
        match self {
            Efficiency::RiskFree => None,
            Efficiency::Ratio(r) => Some(r),
        }
    }

    #[inline]
    pub fn is_risk_free(self) -> bool {
        matches!(self, Efficiency::RiskFree)
    }
}

impl PartialEq for Efficiency {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Efficiency {}

impl PartialOrd for Efficiency {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Efficiency {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Efficiency::RiskFree, Efficiency::RiskFree) => Ordering::Equal,
            (Efficiency::RiskFree, Efficiency::Ratio(_)) => Ordering::Greater,
            (Efficiency::Ratio(_), Efficiency::RiskFree) => Ordering::Less,
            (Efficiency::Ratio(a), Efficiency::Ratio(b)) => a.total_cmp(b),
        }
    }
}

impl fmt::Display for Efficiency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Efficiency::RiskFree => write!(f, "risk-free"),
            Efficiency::Ratio(r) => write!(f, "{r:.2}"),
        }
    }
}
