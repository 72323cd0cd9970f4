//! Asset: the immutable allocation input.

use std::fmt;

/// An investment asset competing for the risk budget.
///
/// `risk` is the knapsack weight and `expected_return` the knapsack value.
/// Both are opaque scalars; the allocator only divides one by the other.
/// Fields are private so an `Asset` cannot change once built; the allocator
/// reports its decisions in a separate [`AllocatedAsset`](crate::AllocatedAsset).
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Asset {
    name: String,
    risk: f64,
    expected_return: f64,
}

impl Asset {
    /// Create an asset. Validation happens in [`allocate`](crate::allocate),
    /// not here, so malformed records can still be built and reported.
    pub fn new(name: impl Into<String>, risk: f64, expected_return: f64) -> Self {
        Self {
            name: name.into(),
            risk,
            expected_return,
        }
    }

    /// Identifier, unique within one allocation run.
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Risk cost of taking the whole asset.
    #[inline]
    pub fn risk(&self) -> f64 {
        self.risk
    }

    /// Return earned by taking the whole asset.
    #[inline]
    pub fn expected_return(&self) -> f64 {
        self.expected_return
    }

    /// True if the asset consumes no budget.
    #[inline]
    pub fn is_risk_free(&self) -> bool {
        self.risk == 0.0
    }
}

impl fmt::Display for Asset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} (risk {:.2}, return {:.2})",
            self.name, self.risk, self.expected_return
        )
    }
}
