//! Command line definition.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use mall_sim_core::{DestinationId, ProjectPhase, TenantFeature};

// ── CLI definition ─────────────────────────────────────────────────

#[derive(Parser, Debug)]
#[command(
    name = "mall-sim",
    about = "Retail catchment forecast for the Mall of Zimbabwe",
    long_about = "Simulates where a synthetic population of Harare shoppers goes,\n\
                  and sweeps tenant strategies for the subject mall."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run one forecast and print the report
    Run(RunArgs),
    /// Run a parallel strategy sweep and export the results
    Sweep(SweepArgs),
}

#[derive(Args, Debug)]
pub struct RunArgs {
    /// JSON simulation config; flags below override its fields
    #[arg(long)]
    pub config: Option<PathBuf>,
    /// Number of shoppers to simulate
    #[arg(long)]
    pub agents: Option<usize>,
    /// RNG seed
    #[arg(long, default_value_t = 42)]
    pub seed: u64,
    /// Simulate peak-hour traffic
    #[arg(long)]
    pub traffic: bool,
    /// Tenant feature at the subject mall (repeatable: shop, eat, work, play)
    #[arg(long = "tenant")]
    pub tenants: Vec<TenantFeature>,
    /// Drop the default tenant mix before applying --tenant
    #[arg(long)]
    pub no_default_tenants: bool,
    /// Project phase, as a key (grand_opening) or a year (2028)
    #[arg(long, default_value = "stabilization")]
    pub phase: ProjectPhase,
    /// Destination quality override, e.g. `mall_of_zimbabwe=95` (repeatable)
    #[arg(long = "quality", value_parser = parse_quality)]
    pub qualities: Vec<(DestinationId, f64)>,
    /// Write the realized agents to this Parquet file
    #[arg(long)]
    pub agents_out: Option<PathBuf>,
}

#[derive(Args, Debug)]
pub struct SweepArgs {
    /// JSON base config for dimensions that are not swept
    #[arg(long)]
    pub config: Option<PathBuf>,
    /// Subject quality values to sweep
    #[arg(long, value_delimiter = ',', default_values_t = [60.0, 80.0, 100.0])]
    pub qualities: Vec<f64>,
    /// Sweep every combination of tenant features instead of the base mix
    #[arg(long)]
    pub all_tenant_mixes: bool,
    /// Phases to sweep
    #[arg(long, value_delimiter = ',', default_values = ["grand_opening", "stabilization"])]
    pub phases: Vec<ProjectPhase>,
    /// Sweep both normal flow and peak-hour traffic
    #[arg(long)]
    pub both_traffic: bool,
    /// Population sizes to sweep
    #[arg(long, value_delimiter = ',')]
    pub agents: Vec<usize>,
    /// Replicate runs per combination
    #[arg(long, default_value_t = 1)]
    pub runs: usize,
    /// Randomly sample this many combinations instead of the full grid
    #[arg(long)]
    pub sample: Option<usize>,
    /// Seed for random sampling
    #[arg(long, default_value_t = 42)]
    pub sample_seed: u64,
    /// Worker threads (defaults to all cores)
    #[arg(long)]
    pub threads: Option<usize>,
    /// Hide the progress bar
    #[arg(long)]
    pub no_progress: bool,
    #[arg(long, default_value = "strategy_results.csv")]
    pub csv: PathBuf,
    #[arg(long)]
    pub json: Option<PathBuf>,
    #[arg(long)]
    pub parquet: Option<PathBuf>,
}

/// Parse `destination=value`, where destination is a name or key.
fn parse_quality(raw: &str) -> Result<(DestinationId, f64), String> {
    let (name, value) = raw
        .split_once('=')
        .ok_or_else(|| format!("expected DESTINATION=VALUE, got `{raw}`"))?;
    let id = name.parse::<DestinationId>().map_err(|err| err.to_string())?;
    let value = value
        .trim()
        .parse::<f64>()
        .map_err(|err| format!("invalid quality `{value}`: {err}"))?;
    Ok((id, value))
}
