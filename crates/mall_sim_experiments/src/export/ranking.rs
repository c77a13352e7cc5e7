use crate::metrics::ExperimentResult;
use crate::parameters::ParameterSet;
use crate::scoring::{calculate_strategy_scores, StrategyWeights};

pub(crate) fn find_best_index_by_score(
    results: &[ExperimentResult],
    weights: &StrategyWeights,
) -> Option<usize> {
    let scores = calculate_strategy_scores(results, weights);

    // strict > keeps the earliest of equal scores
    let mut best: Option<(usize, f64)> = None;
    for (idx, score) in scores.into_iter().enumerate() {
        let better = match best {
            Some((_, best_score)) => score > best_score,
            None => !score.is_nan(),
        };
        if better {
            best = Some((idx, score));
        }
    }
    best.map(|(idx, _)| idx)
}

pub(crate) fn find_best_parameters_impl<'a>(
    results: &[ExperimentResult],
    parameter_sets: &'a [ParameterSet],
    weights: &StrategyWeights,
) -> Option<&'a ParameterSet> {
    if results.is_empty() || results.len() != parameter_sets.len() {
        return None;
    }

    let best_idx = find_best_index_by_score(results, weights)?;
    parameter_sets.get(best_idx)
}
