//! Result export and analysis utilities.
//!
//! Writes experiment results to CSV, JSON and Parquet, and picks the best
//! strategy by score.

use std::path::Path;

use crate::metrics::ExperimentResult;
use crate::parameters::ParameterSet;
use crate::scoring::StrategyWeights;

#[path = "export/csv.rs"]
mod csv;
#[path = "export/json.rs"]
mod json;
#[path = "export/parquet.rs"]
mod parquet;
#[path = "export/ranking.rs"]
mod ranking;
#[path = "export/writer_utils.rs"]
mod writer_utils;

/// Export experiment results to Parquet.
///
/// One row per run; per-destination visits and revenue are spread into
/// `visits_<destination>` and `revenue_<destination>` columns.
///
/// # Errors
///
/// Returns an error if `results` is empty, or if file creation or Parquet
/// writing fails.
pub fn export_to_parquet(
    results: &[ExperimentResult],
    path: impl AsRef<Path>,
) -> Result<(), Box<dyn std::error::Error>> {
    writer_utils::ensure_not_empty(results)?;
    let file = writer_utils::create_output_file(path)?;
    parquet::export_to_parquet_impl(results, file)
}

/// Export experiment results to a pretty-printed JSON array.
pub fn export_to_json(
    results: &[ExperimentResult],
    path: impl AsRef<Path>,
) -> Result<(), Box<dyn std::error::Error>> {
    let file = writer_utils::create_output_file(path)?;
    json::export_to_json_impl(results, file)
}

/// Export experiment results to CSV, with the same columns as the Parquet export.
///
/// # Errors
///
/// Returns an error if `results` is empty, or if file creation or CSV writing fails.
pub fn export_to_csv(
    results: &[ExperimentResult],
    path: impl AsRef<Path>,
) -> Result<(), Box<dyn std::error::Error>> {
    writer_utils::ensure_not_empty(results)?;
    let file = writer_utils::create_output_file(path)?;
    csv::export_to_csv_impl(results, file)
}

/// Find the parameter set behind the highest-scoring result.
///
/// Results and parameter sets are paired by index. Returns `None` if the
/// inputs are empty or their lengths differ.
pub fn find_best_parameters<'a>(
    results: &[ExperimentResult],
    parameter_sets: &'a [ParameterSet],
    weights: &StrategyWeights,
) -> Option<&'a ParameterSet> {
    ranking::find_best_parameters_impl(results, parameter_sets, weights)
}

/// Index of the highest-scoring result, or `None` if there are no results.
///
/// Ties go to the earliest result.
pub fn find_best_result_index(results: &[ExperimentResult], weights: &StrategyWeights) -> Option<usize> {
    ranking::find_best_index_by_score(results, weights)
}
