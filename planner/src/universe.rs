//! Asset universe (universe.json) loading and validation.

use std::path::Path;

use riskbudget::Asset;
use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// The assets competing for one run's risk budget.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Universe {
    /// Budget for this universe; overrides the config, not the CLI flag
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_risk_budget: Option<f64>,
    pub assets: Vec<Asset>,
}

impl Universe {
    /// Load and validate a universe.json file.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| Error::UniverseRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        Self::from_json(&contents)
    }

    /// Parse from a JSON string (useful for testing).
    pub fn from_json(json: &str) -> Result<Self> {
        let universe: Universe = serde_json::from_str(json)?;
        universe.validate()?;
        Ok(universe)
    }

    /// The five demo assets with a budget of 20.
    pub fn sample() -> Self {
        Self {
            max_risk_budget: Some(20.0),
            assets: vec![
                Asset::new("Tech Growth Fund", 12.5, 250.0),
                Asset::new("US Treasury Bonds", 4.0, 40.0),
                Asset::new("Real Estate Index", 7.0, 84.0),
                Asset::new("Emerging Markets ETF", 18.0, 270.0),
                Asset::new("Gold Futures", 6.0, 78.0),
            ],
        }
    }

    /// Validate the universe.
    fn validate(&self) -> Result<()> {
        if self.assets.is_empty() {
            return Err(Error::Universe("assets list is empty".into()));
        }

        if let Some(budget) = self.max_risk_budget {
            if !budget.is_finite() || budget < 0.0 {
                return Err(Error::Universe(format!(
                    "max_risk_budget {budget} must be finite and >= 0"
                )));
            }
        }

        let mut seen = FxHashSet::default();
        for a in &self.assets {
            if a.name().trim().is_empty() {
                return Err(Error::Universe("empty asset name".into()));
            }
            if !seen.insert(a.name()) {
                return Err(Error::Universe(format!("duplicate asset: {}", a.name())));
            }
        }

        for a in &self.assets {
            if !a.risk().is_finite() || a.risk() < 0.0 {
                return Err(Error::Universe(format!(
                    "risk for {} ({}) must be finite and >= 0",
                    a.name(),
                    a.risk()
                )));
            }
            if !a.expected_return().is_finite() {
                return Err(Error::Universe(format!(
                    "expected_return for {} is not a finite number",
                    a.name()
                )));
            }
        }

        Ok(())
    }

    /// Sum of every asset's risk: the budget at which everything fits.
    pub fn total_risk(&self) -> f64 {
        self.assets.iter().map(|a| a.risk()).sum()
    }
}
