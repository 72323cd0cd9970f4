//! JSONL audit trail logging.
//!
//! Each planner run appends events to an audit.jsonl file,
//! one JSON object per line.

use std::fs::{self, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::Path;

use chrono::{DateTime, Utc};
use riskbudget::Allocation;
use serde::Serialize;

use crate::error::Result;

/// An audit event written to the JSONL trail.
#[derive(Debug, Clone, Serialize)]
pub struct AuditEvent {
    pub event: &'static str,
    pub ts: DateTime<Utc>,
    #[serde(flatten)]
    pub data: serde_json::Value,
}

/// Append-only audit logger.
pub struct AuditLog {
    writer: BufWriter<std::fs::File>,
}

impl AuditLog {
    /// Open (or create) the audit log file for appending.
    pub fn open(path: &Path) -> Result<Self> {
        // Ensure parent directory exists
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let file = OpenOptions::new().create(true).append(true).open(path)?;

        Ok(Self {
            writer: BufWriter::new(file),
        })
    }

    /// Log an event with arbitrary JSON data.
    pub fn log(&mut self, event: &'static str, data: serde_json::Value) -> Result<()> {
        let entry = AuditEvent {
            event,
            ts: Utc::now(),
            data,
        };
        let json = serde_json::to_string(&entry)?;
        writeln!(self.writer, "{json}")?;
        self.writer.flush()?;
        Ok(())
    }
}

pub fn log_run_started(
    audit: &mut AuditLog,
    source: &str,
    budget: f64,
    asset_count: usize,
) -> Result<()> {
    audit.log(
        "run_started",
        serde_json::json!({
            "source": source,
            "budget": budget,
            "assets": asset_count,
        }),
    )
}

/// Log the totals and every asset's decision.
pub fn log_allocation(audit: &mut AuditLog, allocation: &Allocation) -> Result<()> {
    let rows: Vec<_> = allocation
        .assets
        .iter()
        .map(|a| {
            serde_json::json!({
                "name": a.name(),
                "efficiency": a.efficiency.to_string(),
                "fill": a.fill.to_string(),
                "allocated_risk": a.allocated_risk,
                "return": a.return_contribution,
            })
        })
        .collect();

    audit.log(
        "allocation_computed",
        serde_json::json!({
            "budget": allocation.budget,
            "total_return": allocation.total_return,
            "total_risk_consumed": allocation.total_risk_consumed,
            "assets": rows,
        }),
    )
}

pub fn log_run_failed(audit: &mut AuditLog, reason: &str) -> Result<()> {
    audit.log("run_failed", serde_json::json!({ "reason": reason }))
}

pub fn log_run_completed(audit: &mut AuditLog, allocation: &Allocation) -> Result<()> {
    audit.log(
        "run_completed",
        serde_json::json!({
            "selected": allocation.selected().count(),
            "utilization": allocation.utilization(),
        }),
    )
}
