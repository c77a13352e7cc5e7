//! Error types for the `mall_sim_experiments` crate.

use mall_sim_core::SimError;

#[derive(Debug, thiserror::Error)]
pub enum ExperimentError {
    /// A parameter set described an invalid run.
    #[error("experiment {experiment_id} run {run_id}: {source}")]
    Simulation {
        experiment_id: String,
        run_id: usize,
        #[source]
        source: SimError,
    },

    /// The rayon pool could not be created.
    #[error("failed to create thread pool: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),
}
