//! Metrics extraction from simulation runs.
//!
//! Flattens a [`SimulationRun`] into one serializable row per run, and
//! summarizes replicate runs of the same experiment.

use std::collections::BTreeMap;

use mall_sim_core::{DestinationId, LaunchVerdict, SimulationRun, TenantFeature};
use serde::Serialize;

use crate::parameters::ParameterSet;

/// Aggregated metrics from a single simulation run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExperimentResult {
    pub experiment_id: String,
    pub run_id: usize,
    pub seed: u64,
    /// Phase key (`construction`, `grand_opening`, `stabilization`).
    pub phase: String,
    pub traffic: bool,
    /// Configured subject quality, before the phase is applied.
    pub subject_attractiveness: f64,
    /// Tenant feature keys joined by `+`, or `none`.
    pub tenant_mix: String,
    pub agent_count: usize,
    /// Number of agents that chose the subject destination.
    pub subject_visits: usize,
    /// Subject market share in percent.
    pub subject_share: f64,
    /// Subject revenue in dollars.
    pub subject_revenue: f64,
    /// Revenue across all destinations.
    pub total_revenue: f64,
    /// Name of the destination with the highest revenue.
    pub revenue_leader: String,
    /// Launch verdict from the phase and subject share.
    pub verdict: LaunchVerdict,
    pub visits: BTreeMap<DestinationId, usize>,
    pub revenue: BTreeMap<DestinationId, f64>,
}

/// Render a tenant mix as a stable, compact label.
pub fn tenant_mix_label<'a>(features: impl IntoIterator<Item = &'a TenantFeature>) -> String {
    let keys: Vec<&str> = features.into_iter().map(|f| f.key()).collect();
    if keys.is_empty() {
        "none".to_string()
    } else {
        keys.join("+")
    }
}

/// Extract metrics from a completed simulation run.
pub fn extract_metrics(param_set: &ParameterSet, run: &SimulationRun) -> ExperimentResult {
    let results = &run.results;
    let subject = DestinationId::SUBJECT;

    ExperimentResult {
        experiment_id: param_set.experiment_id.clone(),
        run_id: param_set.run_id,
        seed: param_set.seed,
        phase: param_set.phase.key().to_string(),
        traffic: param_set.config.traffic,
        subject_attractiveness: param_set.config.attractiveness.get(subject),
        tenant_mix: tenant_mix_label(&param_set.config.tenant_features),
        agent_count: param_set.config.agent_count,
        subject_visits: results.visits_for(subject),
        subject_share: results.market_share(subject),
        subject_revenue: results.revenue_for(subject),
        total_revenue: results.total_revenue(),
        revenue_leader: results.revenue_leader().name().to_string(),
        verdict: LaunchVerdict::verdict(param_set.phase, results.market_share(subject)),
        visits: results.visits.clone(),
        revenue: results.revenue.clone(),
    }
}

/// Calculate (avg, median, p90) of a set of values.
pub(crate) fn calculate_stats(values: &[f64]) -> (f64, f64, f64) {
    if values.is_empty() {
        return (0.0, 0.0, 0.0);
    }

    let mut sorted = values.to_vec();
    sorted.sort_by(f64::total_cmp);

    let avg = sorted.iter().sum::<f64>() / sorted.len() as f64;
    let median = if sorted.len() % 2 == 0 {
        (sorted[sorted.len() / 2 - 1] + sorted[sorted.len() / 2]) / 2.0
    } else {
        sorted[sorted.len() / 2]
    };
    let p90_idx = ((sorted.len() - 1) as f64 * 0.9) as usize;
    let p90 = sorted[p90_idx.min(sorted.len() - 1)];

    (avg, median, p90)
}

/// Summary of all replicate runs of one experiment.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReplicateSummary {
    pub experiment_id: String,
    pub runs: usize,
    pub avg_subject_revenue: f64,
    pub median_subject_revenue: f64,
    pub p90_subject_revenue: f64,
    pub avg_subject_share: f64,
    pub median_subject_share: f64,
    pub p90_subject_share: f64,
}

/// Group results by experiment and summarize subject revenue and share.
///
/// Summaries come back in order of first appearance of each experiment.
pub fn summarize_replicates(results: &[ExperimentResult]) -> Vec<ReplicateSummary> {
    let mut order: Vec<&str> = Vec::new();
    let mut groups: BTreeMap<&str, Vec<&ExperimentResult>> = BTreeMap::new();
    for result in results {
        let group = groups.entry(result.experiment_id.as_str()).or_default();
        if group.is_empty() {
            order.push(result.experiment_id.as_str());
        }
        group.push(result);
    }

    order
        .into_iter()
        .filter_map(|id| groups.get(id).map(|group| (id, group)))
        .map(|(id, group)| {
            let revenue: Vec<f64> = group.iter().map(|r| r.subject_revenue).collect();
            let share: Vec<f64> = group.iter().map(|r| r.subject_share).collect();
            let (avg_rev, median_rev, p90_rev) = calculate_stats(&revenue);
            let (avg_share, median_share, p90_share) = calculate_stats(&share);
            ReplicateSummary {
                experiment_id: id.to_string(),
                runs: group.len(),
                avg_subject_revenue: avg_rev,
                median_subject_revenue: median_rev,
                p90_subject_revenue: p90_rev,
                avg_subject_share: avg_share,
                median_subject_share: median_share,
                p90_subject_share: p90_share,
            }
        })
        .collect()
}

#[cfg(test)]
pub(crate) mod test_support {
    use super::*;
    use mall_sim_core::ProjectPhase;

    pub(crate) fn result_with(
        experiment_id: &str,
        subject_revenue: f64,
        subject_share: f64,
    ) -> ExperimentResult {
        ExperimentResult {
            experiment_id: experiment_id.to_string(),
            run_id: 0,
            seed: 1,
            phase: "stabilization".to_string(),
            traffic: false,
            subject_attractiveness: 80.0,
            tenant_mix: "shop+eat".to_string(),
            agent_count: 100,
            subject_visits: subject_share as usize,
            subject_share,
            subject_revenue,
            total_revenue: subject_revenue * 2.0,
            revenue_leader: DestinationId::SUBJECT.name().to_string(),
            verdict: LaunchVerdict::verdict(ProjectPhase::Stabilization, subject_share),
            visits: BTreeMap::new(),
            revenue: BTreeMap::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::test_support::result_with;
    use super::*;
    use mall_sim_core::{ProjectPhase, SimulationConfig};

    #[test]
    fn test_calculate_stats() {
        let values = vec![10.0, 20.0, 30.0, 40.0, 50.0, 60.0, 70.0, 80.0, 90.0, 100.0];
        let (avg, median, p90) = calculate_stats(&values);
        assert_eq!(avg, 55.0);
        assert_eq!(median, 55.0);
        assert_eq!(p90, 90.0);
    }

    #[test]
    fn test_calculate_stats_empty() {
        assert_eq!(calculate_stats(&[]), (0.0, 0.0, 0.0));
    }

    #[test]
    fn tenant_mix_label_joins_keys() {
        assert_eq!(tenant_mix_label(&[]), "none");
        assert_eq!(
            tenant_mix_label(&[TenantFeature::Shop, TenantFeature::Play]),
            "shop+play"
        );
    }

    #[test]
    fn extract_metrics_matches_run() {
        let config = SimulationConfig::default().with_agent_count(200);
        let set = ParameterSet::new(config, ProjectPhase::Stabilization, "exp_0".into(), 0, 7);
        let run = mall_sim_core::run(&set.effective_config(), set.seed).unwrap();
        let metrics = extract_metrics(&set, &run);

        assert_eq!(metrics.agent_count, 200);
        assert_eq!(metrics.visits.values().sum::<usize>(), 200);
        assert_eq!(metrics.subject_visits, run.results.visits_for(DestinationId::SUBJECT));
        assert!((metrics.total_revenue - run.results.total_revenue()).abs() < 1e-9);
        assert_eq!(metrics.tenant_mix, "shop+eat");
        assert_eq!(metrics.phase, "stabilization");
        assert_eq!(
            metrics.verdict,
            LaunchVerdict::verdict(ProjectPhase::Stabilization, metrics.subject_share)
        );
    }

    #[test]
    fn construction_runs_are_capital_deployment() {
        let config = SimulationConfig::default().with_agent_count(50);
        let set = ParameterSet::new(config, ProjectPhase::Construction, "exp_0".into(), 0, 3);
        let run = mall_sim_core::run(&set.effective_config(), set.seed).unwrap();
        assert_eq!(extract_metrics(&set, &run).verdict, LaunchVerdict::CapitalDeployment);
    }

    #[test]
    fn summarize_replicates_groups_in_first_seen_order() {
        let results = vec![
            result_with("exp_1", 100.0, 10.0),
            result_with("exp_0", 50.0, 5.0),
            result_with("exp_1", 300.0, 30.0),
        ];
        let summaries = summarize_replicates(&results);

        assert_eq!(summaries.len(), 2);
        assert_eq!(summaries[0].experiment_id, "exp_1");
        assert_eq!(summaries[0].runs, 2);
        assert_eq!(summaries[0].avg_subject_revenue, 200.0);
        assert_eq!(summaries[0].median_subject_share, 20.0);
        assert_eq!(summaries[1].experiment_id, "exp_0");
        assert_eq!(summaries[1].runs, 1);
    }
}
