//! Validation errors for allocation input.

/// Errors returned by [`allocate`](crate::allocate) when its preconditions fail.
///
/// Validation runs before any ratio is computed, so an error means nothing
/// was allocated.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum AllocationError {
    /// An asset record violates the input contract.
    #[error("invalid asset '{name}': {reason}")]
    InvalidAsset { name: String, reason: &'static str },

    /// The risk budget is negative or not a finite number.
    #[error("invalid risk budget {budget}: must be finite and >= 0")]
    InvalidBudget { budget: f64 },
}

impl AllocationError {
    pub(crate) fn asset(name: &str, reason: &'static str) -> Self {
        AllocationError::InvalidAsset {
            name: name.to_string(),
            reason,
        }
    }
}
