//! Error types for the planner.

use std::path::PathBuf;

/// All errors that can occur during a planner run.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("config error: {0}")]
    Config(String),

    #[error("failed to read config file {path}: {source}")]
    ConfigRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse config: {0}")]
    ConfigParse(#[from] toml::de::Error),

    #[error("universe file error: {0}")]
    Universe(String),

    #[error("failed to read universe file {path}: {source}")]
    UniverseRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("allocation rejected: {0}")]
    Allocation(#[from] riskbudget::AllocationError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
