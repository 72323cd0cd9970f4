//! TOML configuration loading and validation.

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::{Error, Result};

/// Top-level configuration. Every section and key is optional.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub allocation: AllocationConfig,
    pub report: ReportConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AllocationConfig {
    /// Budget used when neither the CLI nor the universe file sets one
    #[serde(default = "default_budget")]
    pub max_risk_budget: f64,
}

fn default_budget() -> f64 {
    20.0
}

impl Default for AllocationConfig {
    fn default() -> Self {
        Self {
            max_risk_budget: default_budget(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct ReportConfig {
    /// Holdings with less allocated risk than this are left out of the summary
    #[serde(default = "default_min_display")]
    pub min_display_risk: f64,
    #[serde(default = "default_true")]
    pub show_narration: bool,
}

fn default_min_display() -> f64 {
    0.0001
}
fn default_true() -> bool {
    true
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            min_display_risk: default_min_display(),
            show_narration: true,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_dir")]
    pub dir: String,
    #[serde(default = "default_audit_file")]
    pub audit_file: String,
    #[serde(default = "default_true")]
    pub enabled: bool,
}

fn default_log_dir() -> String {
    "./logs".into()
}
fn default_audit_file() -> String {
    "audit.jsonl".into()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            dir: default_log_dir(),
            audit_file: default_audit_file(),
            enabled: true,
        }
    }
}

impl Config {
    /// Load config from a TOML file.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| Error::ConfigRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        Self::from_toml(&contents)
    }

    /// Parse and validate from a TOML string.
    pub fn from_toml(contents: &str) -> Result<Self> {
        let config: Config = toml::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate config invariants.
    fn validate(&self) -> Result<()> {
        let budget = self.allocation.max_risk_budget;
        if !budget.is_finite() || budget < 0.0 {
            return Err(Error::Config(
                "max_risk_budget must be finite and >= 0".into(),
            ));
        }
        let threshold = self.report.min_display_risk;
        if !threshold.is_finite() || threshold < 0.0 {
            return Err(Error::Config(
                "min_display_risk must be finite and >= 0".into(),
            ));
        }
        if self.logging.audit_file.is_empty() {
            return Err(Error::Config("audit_file must not be empty".into()));
        }
        Ok(())
    }

    /// Full path to the audit log file.
    pub fn audit_path(&self) -> PathBuf {
        Path::new(&self.logging.dir).join(&self.logging.audit_file)
    }
}
