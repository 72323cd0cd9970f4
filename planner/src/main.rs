//! CLI entry point for the risk budget planner.

use std::io::{self, Write};
use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

use riskbudget_planner::config::Config;
use riskbudget_planner::error::Error;
use riskbudget_planner::run::{self, RunOptions};
use riskbudget_planner::universe::Universe;

#[derive(Parser)]
#[command(name = "planner")]
#[command(about = "Risk budget planner: fractional knapsack over an asset universe")]
#[command(version)]
struct Cli {
    /// Path to config.toml (built-in defaults when omitted)
    #[arg(long)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Allocate the risk budget and print the report
    Run {
        /// Path to universe.json (built-in sample when omitted)
        universe: Option<PathBuf>,

        /// Risk budget, overriding the universe file and config
        #[arg(long)]
        budget: Option<f64>,

        /// Print the allocation as JSON
        #[arg(long)]
        json: bool,

        /// Print only the summary
        #[arg(long)]
        quiet: bool,

        /// Do not write the audit trail
        #[arg(long)]
        no_audit: bool,
    },

    /// Print the built-in sample universe as JSON
    Sample,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_secs()
        .init();

    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => match Config::load(path) {
            Ok(c) => c,
            Err(e) => {
                eprintln!("Error loading config: {e}");
                process::exit(1);
            }
        },
        None => Config::default(),
    };

    let stdout = io::stdout();
    let mut out = stdout.lock();

    let result = match cli.command {
        Command::Run {
            universe,
            budget,
            json,
            quiet,
            no_audit,
        } => {
            let (spec, source) = match &universe {
                Some(path) => match Universe::load(path) {
                    Ok(u) => (u, path.display().to_string()),
                    Err(e) => {
                        eprintln!("Error loading universe: {e}");
                        process::exit(1);
                    }
                },
                None => (Universe::sample(), "sample".to_string()),
            };
            let opts = RunOptions {
                budget,
                json,
                quiet,
                no_audit,
                source,
            };
            run::run(&config, &spec, &opts, &mut out).map(|_| ())
        }
        Command::Sample => print_sample(&mut out),
    };

    if let Err(e) = result {
        match &e {
            Error::Allocation(inner) => {
                eprintln!("Rejected: {inner}");
                process::exit(1);
            }
            _ => {
                eprintln!("Error: {e}");
                process::exit(1);
            }
        }
    }
}

fn print_sample(out: &mut dyn Write) -> riskbudget_planner::error::Result<()> {
    writeln!(out, "{}", serde_json::to_string_pretty(&Universe::sample())?)?;
    Ok(())
}
