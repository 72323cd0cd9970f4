//! Run orchestrator: resolve budget → allocate → report → audit.
//!
//! This is the main workflow that ties together all components.

use std::io::Write;

use log::{info, warn};
use riskbudget::{Allocation, allocate_with};

use crate::audit::{self, AuditLog};
use crate::config::Config;
use crate::error::Result;
use crate::report::{self, Narration, Summary};
use crate::universe::Universe;

/// Options for one planner run.
#[derive(Debug, Clone, Default)]
pub struct RunOptions {
    /// Budget from the command line; wins over universe and config
    pub budget: Option<f64>,
    /// Print the allocation as JSON instead of the text report
    pub json: bool,
    /// Print only the summary
    pub quiet: bool,
    /// Skip the audit trail even if the config enables it
    pub no_audit: bool,
    /// Where the universe came from, for the audit trail
    pub source: String,
}

/// Pick the budget: CLI flag, then universe file, then config.
pub fn resolve_budget(cli: Option<f64>, universe: &Universe, config: &Config) -> f64 {
    cli.or(universe.max_risk_budget)
        .unwrap_or(config.allocation.max_risk_budget)
}

/// Allocate the budget across the universe and write the report to `out`.
pub fn run(
    config: &Config,
    universe: &Universe,
    opts: &RunOptions,
    out: &mut dyn Write,
) -> Result<Allocation> {
    let budget = resolve_budget(opts.budget, universe, config);

    let mut audit = if config.logging.enabled && !opts.no_audit {
        Some(AuditLog::open(&config.audit_path())?)
    } else {
        None
    };
    if let Some(log) = audit.as_mut() {
        audit::log_run_started(log, &opts.source, budget, universe.assets.len())?;
    }

    info!(
        "Allocating risk budget {budget:.2} across {} assets from {}",
        universe.assets.len(),
        opts.source
    );

    let mut narration = Narration::default();
    let allocation = match allocate_with(&universe.assets, budget, &mut narration) {
        Ok(a) => a,
        Err(e) => {
            warn!("Allocation rejected: {e}");
            if let Some(log) = audit.as_mut() {
                audit::log_run_failed(log, &e.to_string())?;
            }
            return Err(e.into());
        }
    };

    if let Some(log) = audit.as_mut() {
        audit::log_allocation(log, &allocation)?;
    }

    if opts.json {
        writeln!(out, "{}", serde_json::to_string_pretty(&allocation)?)?;
    } else {
        if !opts.quiet {
            report::write_header(out, &universe.assets)?;
            if config.report.show_narration {
                narration.write_to(out)?;
            }
        }
        write!(
            out,
            "{}",
            Summary::new(&allocation, config.report.min_display_risk)
        )?;
    }

    if allocation.remaining_budget > 0.0 {
        info!(
            "{:.2} of the risk budget left unallocated (total asset risk {:.2})",
            allocation.remaining_budget,
            universe.total_risk()
        );
    }

    if let Some(log) = audit.as_mut() {
        audit::log_run_completed(log, &allocation)?;
        info!("Audit logged to {}", config.audit_path().display());
    }

    Ok(allocation)
}
