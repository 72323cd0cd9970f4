//! riskbudget-planner: command-line front end for the riskbudget allocator.
//!
//! Reads an asset universe from a JSON file (or uses the built-in sample),
//! allocates the risk budget, prints a report, and appends an audit trail.

pub mod audit;
pub mod config;
pub mod error;
pub mod report;
pub mod run;
pub mod universe;
