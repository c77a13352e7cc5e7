//! Parallel strategy sweeps for the retail catchment simulation.
//!
//! Runs many simulations with varying subject quality, tenant mix, traffic,
//! project phase and population size, extracts per-run metrics and ranks the
//! strategies by a weighted score.
//!
//! # Quick Start
//!
//! ```no_run
//! use mall_sim_experiments::{
//!     find_best_result_index, run_parallel_experiments, ParameterSpace, StrategyWeights,
//! };
//! use mall_sim_core::ProjectPhase;
//!
//! let space = ParameterSpace::grid()
//!     .subject_attractiveness(vec![60.0, 80.0, 100.0])
//!     .tenant_mixes(ParameterSpace::all_tenant_mixes())
//!     .phases(vec![ProjectPhase::GrandOpening, ProjectPhase::Stabilization]);
//!
//! let parameter_sets = space.generate();
//! let results = run_parallel_experiments(parameter_sets, None).unwrap();
//!
//! let best_idx = find_best_result_index(&results, &StrategyWeights::default()).unwrap();
//! ```
//!
//! # Architecture
//!
//! - [`parameters`]: parameter spaces (grid search, random sampling)
//! - [`runner`]: parallel execution using rayon
//! - [`metrics`]: per-run metrics and replicate summaries
//! - [`scoring`]: weighted strategy score
//! - [`export`]: CSV / JSON / Parquet export and ranking

pub mod error;
pub mod export;
pub mod metrics;
pub mod parameters;
pub mod runner;
pub mod scoring;

pub use error::ExperimentError;
pub use export::{
    export_to_csv, export_to_json, export_to_parquet, find_best_parameters, find_best_result_index,
};
pub use metrics::{summarize_replicates, ExperimentResult, ReplicateSummary};
pub use parameters::{ParameterSet, ParameterSpace};
pub use runner::run_parallel_experiments;
pub use scoring::{calculate_strategy_scores, StrategyWeights};
