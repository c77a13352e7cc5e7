//! Subcommand implementations.

use std::fs;
use std::path::Path;

use mall_sim_core::agent_export::write_agents_parquet;
use mall_sim_core::report::render_report;
use mall_sim_core::spatial::GridProjection;
use mall_sim_core::{DestinationId, SimulationConfig};
use mall_sim_experiments::runner::run_parallel_experiments_with_progress;
use mall_sim_experiments::{
    export_to_csv, export_to_json, export_to_parquet, find_best_result_index, ParameterSpace,
    StrategyWeights,
};
use tracing::info;

use crate::cli::{RunArgs, SweepArgs};
use crate::error::{CliError, CliResult};

/// Load a JSON config file, or the default config when no path is given.
pub fn load_config(path: Option<&Path>) -> CliResult<SimulationConfig> {
    let Some(path) = path else {
        return Ok(SimulationConfig::default());
    };
    let raw = fs::read_to_string(path).map_err(|source| CliError::ReadConfig {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&raw).map_err(|source| CliError::ParseConfig {
        path: path.to_path_buf(),
        source,
    })
}

/// Apply `run` flags on top of the loaded config.
pub fn run_config(args: &RunArgs) -> CliResult<SimulationConfig> {
    let mut config = load_config(args.config.as_deref())?;

    if let Some(agents) = args.agents {
        config = config.with_agent_count(agents);
    }
    if args.traffic {
        config = config.with_traffic(true);
    }
    if args.no_default_tenants {
        config = config.with_tenant_features([]);
    }
    for feature in &args.tenants {
        config = config.with_tenant_feature(*feature);
    }
    for (id, value) in &args.qualities {
        config = config.with_attractiveness(*id, *value);
    }

    config.validate()?;
    Ok(config)
}

fn export_error(path: &Path, err: Box<dyn std::error::Error>) -> CliError {
    CliError::Export {
        path: path.to_path_buf(),
        message: err.to_string(),
    }
}

pub fn run(args: &RunArgs) -> CliResult<()> {
    let config = run_config(args)?;
    let effective = args.phase.apply(&config);
    info!(
        agents = effective.agent_count,
        seed = args.seed,
        phase = args.phase.key(),
        traffic = effective.traffic,
        "running forecast"
    );

    let run = mall_sim_core::run(&effective, args.seed)?;
    println!("{}", render_report(&run, &effective, args.phase));

    if let Some(path) = &args.agents_out {
        write_agents_parquet(path, &run.agents, &GridProjection::default())
            .map_err(|err| export_error(path, err))?;
        info!(path = %path.display(), rows = run.agents.len(), "wrote agents");
    }

    Ok(())
}

/// Build the parameter space described by `sweep` flags.
pub fn sweep_space(args: &SweepArgs) -> CliResult<ParameterSpace> {
    let base = load_config(args.config.as_deref())?;
    base.validate()?;

    let mut space = ParameterSpace::grid()
        .with_base(base)
        .subject_attractiveness(args.qualities.clone())
        .phases(args.phases.clone())
        .agent_counts(args.agents.clone())
        .runs_per_combination(args.runs);
    if args.all_tenant_mixes {
        space = space.tenant_mixes(ParameterSpace::all_tenant_mixes());
    }
    if args.both_traffic {
        space = space.traffic(vec![false, true]);
    }
    Ok(space)
}

pub fn sweep(args: &SweepArgs) -> CliResult<()> {
    let space = sweep_space(args)?;
    let parameter_sets = match args.sample {
        Some(count) => space.sample_random(count, args.sample_seed),
        None => space.generate(),
    };
    info!(parameter_sets = parameter_sets.len(), "generated parameter sets");

    let results = run_parallel_experiments_with_progress(parameter_sets, args.threads, !args.no_progress)?;

    let best_idx = find_best_result_index(&results, &StrategyWeights::default()).ok_or(CliError::NoResults)?;
    let best = &results[best_idx];
    println!("Best strategy: {} (run {})", best.experiment_id, best.run_id);
    println!("  phase:         {}", best.phase);
    println!("  tenant mix:    {}", best.tenant_mix);
    println!("  quality:       {:.1}", best.subject_attractiveness);
    println!("  traffic:       {}", best.traffic);
    println!("  {} share: {:.1}%", DestinationId::SUBJECT, best.subject_share);
    println!("  revenue:       ${:.0}", best.subject_revenue);
    println!("  verdict:       {}", best.verdict);

    export_to_csv(&results, &args.csv).map_err(|err| export_error(&args.csv, err))?;
    info!(path = %args.csv.display(), rows = results.len(), "wrote csv");
    if let Some(path) = &args.json {
        export_to_json(&results, path).map_err(|err| export_error(path, err))?;
        info!(path = %path.display(), "wrote json");
    }
    if let Some(path) = &args.parquet {
        export_to_parquet(&results, path).map_err(|err| export_error(path, err))?;
        info!(path = %path.display(), "wrote parquet");
    }

    Ok(())
}
