//! # riskbudget
//!
//! Greedy fractional knapsack allocation of a single risk budget across
//! investment assets, maximizing total expected return.
//!
//! ## Features
//!
//! - **Efficiency ranking**: assets ordered by `expected_return / risk`
//! - **Risk-free tier**: zero-risk assets rank above every finite ratio
//! - **Fractional fill**: the last asset that does not fit is taken in part
//! - **Pure**: inputs are borrowed and never mutated; identical inputs give
//!   identical outputs
//!
//! ## Quick Start
//!
//! ```
//! use riskbudget::{allocate, Asset, Fill};
//!
//! let assets = [
//!     Asset::new("Tech Growth Fund", 12.5, 250.0),
//!     Asset::new("US Treasury Bonds", 4.0, 40.0),
//!     Asset::new("Real Estate Index", 7.0, 84.0),
//!     Asset::new("Emerging Markets ETF", 18.0, 270.0),
//!     Asset::new("Gold Futures", 6.0, 78.0),
//! ];
//!
//! let alloc = allocate(&assets, 20.0).unwrap();
//!
//! assert_eq!(alloc.total_return, 362.5);
//! assert_eq!(alloc.total_risk_consumed, 20.0);
//!
//! // Tech (ratio 20) is taken whole, Emerging Markets (ratio 15) in part.
//! assert_eq!(alloc.assets[0].name(), "Tech Growth Fund");
//! assert_eq!(alloc.assets[0].fill, Fill::Full);
//! assert_eq!(alloc.assets[1].name(), "Emerging Markets ETF");
//! assert_eq!(alloc.assets[1].allocated_risk, 7.5);
//! ```
//!
//! ## Watching the Greedy Pass
//!
//! [`allocate_with`] reports each step to a [`FillObserver`]:
//!
//! ```
//! use riskbudget::{allocate_with, Asset, Fill, FillTrace};
//!
//! let assets = [Asset::new("Cash", 0.0, 1.0), Asset::new("Fund", 10.0, 50.0)];
//! let mut trace = FillTrace::default();
//! allocate_with(&assets, 5.0, &mut trace).unwrap();
//!
//! assert_eq!(trace.steps[0], ("Cash".to_string(), Fill::Full));
//! assert_eq!(trace.steps[1], ("Fund".to_string(), Fill::Partial));
//! ```

mod allocation;
mod allocator;
mod asset;
mod efficiency;
mod error;
mod observer;

// Re-export public API
pub use allocation::{AllocatedAsset, Allocation, Fill};
pub use allocator::{allocate, allocate_with};
pub use asset::Asset;
pub use efficiency::Efficiency;
pub use error::AllocationError;
pub use observer::{FillEvent, FillObserver, FillTrace};
