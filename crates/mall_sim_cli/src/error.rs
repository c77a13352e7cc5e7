//! Errors surfaced by the command line front end.

use std::path::PathBuf;

use mall_sim_core::SimError;
use mall_sim_experiments::ExperimentError;

#[derive(Debug, thiserror::Error)]
pub enum CliError {
    /// The simulation rejected its configuration.
    #[error(transparent)]
    Simulation(#[from] SimError),

    #[error(transparent)]
    Experiment(#[from] ExperimentError),

    /// A config file could not be read.
    #[error("failed to read config {}: {source}", .path.display())]
    ReadConfig {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A config file was not valid JSON for a simulation config.
    #[error("invalid config {}: {source}", .path.display())]
    ParseConfig {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// Writing an output file failed.
    #[error("failed to write {}: {message}", .path.display())]
    Export { path: PathBuf, message: String },

    #[error("sweep produced no results")]
    NoResults,
}

pub type CliResult<T> = Result<T, CliError>;
