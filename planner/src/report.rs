//! Console report: header, fill narration, and allocation summary.

use std::fmt;
use std::io::{self, Write};

use riskbudget::{Allocation, Asset, Fill, FillEvent, FillObserver};

const RULE: &str = "============================================";
const THIN_RULE: &str = "--------------------------------------------";

/// Write the run header and the list of available assets.
pub fn write_header(out: &mut dyn Write, assets: &[Asset]) -> io::Result<()> {
    writeln!(out, "{RULE}")?;
    writeln!(out, "Personalized Investment Portfolio Allocator")?;
    writeln!(out, "Algorithm: Fractional Knapsack (Greedy)")?;
    writeln!(
        out,
        "Goal: Maximize Total Expected Return within a Max Risk Constraint."
    )?;
    writeln!(out, "{RULE}")?;
    writeln!(out, "Available Assets (Return/Risk):")?;
    for a in assets {
        writeln!(
            out,
            "  - {:<20} | Return: ${:.2} | Risk Score: {:.2}",
            a.name(),
            a.expected_return(),
            a.risk()
        )?;
    }
    writeln!(out, "{THIN_RULE}")
}

/// Collects one narration line per greedy step.
#[derive(Debug, Default)]
pub struct Narration {
    pub lines: Vec<String>,
}

impl FillObserver for Narration {
    fn on_fill(&mut self, event: &FillEvent<'_>) {
        let share = match event.fill {
            Fill::Partial => format!("{:.2}%", event.fraction * 100.0),
            _ => "100%".to_string(),
        };
        self.lines.push(format!(
            "  > Took {share} of {:<20} (Ratio: {}) | Risk Consumed: {:.2} | Remaining Budget: {:.2}",
            event.asset.name(),
            event.efficiency,
            event.allocated_risk,
            event.remaining_budget,
        ));
    }
}

impl Narration {
    pub fn write_to(&self, out: &mut dyn Write) -> io::Result<()> {
        writeln!(out)?;
        writeln!(out, "--- Allocation Process (Greedy Choice) ---")?;
        for line in &self.lines {
            writeln!(out, "{line}")?;
        }
        Ok(())
    }
}

/// Final allocation summary, rendered through `Display`.
pub struct Summary<'a> {
    allocation: &'a Allocation,
    min_display_risk: f64,
}

impl<'a> Summary<'a> {
    pub fn new(allocation: &'a Allocation, min_display_risk: f64) -> Self {
        Self {
            allocation,
            min_display_risk,
        }
    }

    /// Rows of the holdings table: (name, allocated risk, % of asset risk).
    ///
    /// Taken risk-free assets are always listed, at 100%.
    pub fn holdings(&self) -> Vec<(&'a str, f64, f64)> {
        self.allocation
            .assets
            .iter()
            .filter(|a| {
                a.allocated_risk > self.min_display_risk
                    || (a.asset.is_risk_free() && a.fill == Fill::Full)
            })
            .map(|a| (a.name(), a.allocated_risk, a.fraction() * 100.0))
            .collect()
    }
}

impl fmt::Display for Summary<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let alloc = self.allocation;
        writeln!(f)?;
        writeln!(f, "{RULE}")?;
        writeln!(f, "      OPTIMAL PORTFOLIO ALLOCATION SUMMARY")?;
        writeln!(f, "{RULE}")?;
        writeln!(
            f,
            "Maximum Allowed Risk Budget (Knapsack Capacity): {:.2}",
            alloc.budget
        )?;
        writeln!(
            f,
            "Total Expected Portfolio Return:                 ${:.2}",
            alloc.total_return
        )?;
        writeln!(
            f,
            "Total Risk Consumed:                             {:.2}",
            alloc.total_risk_consumed
        )?;
        writeln!(f, "{THIN_RULE}")?;
        writeln!(f, "Asset Name            | Investment Risk")?;
        writeln!(f, "{THIN_RULE}")?;
        for (name, risk, pct) in self.holdings() {
            writeln!(f, "{name:<20} | {risk:.2} ({pct:.1}% of Asset Risk)")?;
        }
        writeln!(f, "{RULE}")
    }
}
