//! Strategy score calculation.
//!
//! Combines subject revenue and market share, each min-max normalized across
//! the compared results, into a single score. Higher is better.

use mall_sim_core::DestinationId;

use crate::metrics::ExperimentResult;

/// Configurable weights for the strategy score.
///
/// # Default Weights
///
/// - Subject revenue: 0.6
/// - Subject market share: 0.4
/// - Revenue leadership bonus: 0.0
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StrategyWeights {
    /// Weight for subject revenue.
    pub revenue_weight: f64,
    /// Weight for subject market share.
    pub share_weight: f64,
    /// Flat bonus when the subject leads all destinations on revenue.
    pub leader_bonus: f64,
}

impl Default for StrategyWeights {
    fn default() -> Self {
        Self {
            revenue_weight: 0.6,
            share_weight: 0.4,
            leader_bonus: 0.0,
        }
    }
}

impl StrategyWeights {
    pub fn new(revenue_weight: f64, share_weight: f64, leader_bonus: f64) -> Self {
        Self {
            revenue_weight,
            share_weight,
            leader_bonus,
        }
    }
}

/// Normalize a metric value to [0, 1]. Returns 0.5 when every value is equal.
fn normalize_metric(value: f64, min: f64, max: f64) -> f64 {
    if max == min {
        0.5
    } else {
        ((value - min) / (max - min)).clamp(0.0, 1.0)
    }
}

fn min_max(values: impl Iterator<Item = f64>) -> (f64, f64) {
    values.fold((f64::INFINITY, f64::NEG_INFINITY), |(min, max), v| {
        (min.min(v), max.max(v))
    })
}

/// Calculate strategy scores for all results, in input order.
pub fn calculate_strategy_scores(results: &[ExperimentResult], weights: &StrategyWeights) -> Vec<f64> {
    if results.is_empty() {
        return vec![];
    }

    let (revenue_min, revenue_max) = min_max(results.iter().map(|r| r.subject_revenue));
    let (share_min, share_max) = min_max(results.iter().map(|r| r.subject_share));
    let subject_name = DestinationId::SUBJECT.name();

    results
        .iter()
        .map(|result| {
            let revenue_norm = normalize_metric(result.subject_revenue, revenue_min, revenue_max);
            let share_norm = normalize_metric(result.subject_share, share_min, share_max);
            let bonus = if result.revenue_leader == subject_name {
                weights.leader_bonus
            } else {
                0.0
            };

            revenue_norm * weights.revenue_weight + share_norm * weights.share_weight + bonus
        })
        .collect()
}
