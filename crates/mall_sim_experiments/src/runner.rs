//! Parallel simulation execution using rayon.
//!
//! Each parameter set runs independently with no shared state, so a sweep is
//! a plain parallel map over the sets.

use indicatif::{ProgressBar, ProgressStyle};
use rayon::prelude::*;
use tracing::info;

use crate::error::ExperimentError;
use crate::metrics::{extract_metrics, ExperimentResult};
use crate::parameters::ParameterSet;

const PROGRESS_TEMPLATE: &str =
    "{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} ({eta})";

/// Run a single simulation with the given parameter set.
///
/// The phase is applied to the configured parameters before the run; metrics
/// report the configured values.
pub fn run_single_experiment(param_set: &ParameterSet) -> Result<ExperimentResult, ExperimentError> {
    let config = param_set.effective_config();
    let run = mall_sim_core::run(&config, param_set.seed).map_err(|source| {
        ExperimentError::Simulation {
            experiment_id: param_set.experiment_id.clone(),
            run_id: param_set.run_id,
            source,
        }
    })?;
    Ok(extract_metrics(param_set, &run))
}

/// Run multiple simulations in parallel, with a progress bar.
///
/// Results come back in the same order as `parameter_sets`. `num_threads`
/// of `None` uses rayon's default pool size.
pub fn run_parallel_experiments(
    parameter_sets: Vec<ParameterSet>,
    num_threads: Option<usize>,
) -> Result<Vec<ExperimentResult>, ExperimentError> {
    run_parallel_experiments_with_progress(parameter_sets, num_threads, true)
}

fn progress_bar(total: usize) -> ProgressBar {
    let bar = ProgressBar::new(total as u64);
    let style = ProgressStyle::default_bar()
        .template(PROGRESS_TEMPLATE)
        .map(|style| style.progress_chars("#>-"))
        .unwrap_or_else(|_| ProgressStyle::default_bar());
    bar.set_style(style);
    bar
}

/// Run multiple simulations in parallel with an optional progress bar.
///
/// Stops at the first failing parameter set and returns its error.
pub fn run_parallel_experiments_with_progress(
    parameter_sets: Vec<ParameterSet>,
    num_threads: Option<usize>,
    show_progress: bool,
) -> Result<Vec<ExperimentResult>, ExperimentError> {
    let total = parameter_sets.len();
    let pb = (show_progress && total > 0).then(|| progress_bar(total));

    let mut builder = rayon::ThreadPoolBuilder::new();
    if let Some(threads) = num_threads {
        builder = builder.num_threads(threads);
    }
    let pool = builder.build()?;

    info!(runs = total, threads = pool.current_num_threads(), "starting sweep");

    let pb_clone = pb.clone();
    let results = pool.install(|| {
        parameter_sets
            .par_iter()
            .map(|param_set| {
                let result = run_single_experiment(param_set);
                if let Some(ref progress_bar) = pb_clone {
                    progress_bar.inc(1);
                }
                result
            })
            .collect::<Result<Vec<_>, _>>()
    });

    if let Some(ref progress_bar) = pb {
        progress_bar.finish_with_message("Completed");
    }

    let results = results?;
    info!(runs = results.len(), "sweep complete");
    Ok(results)
}
