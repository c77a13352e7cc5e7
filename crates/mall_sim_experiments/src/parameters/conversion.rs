use mall_sim_core::{DestinationId, SimulationConfig};

use super::combinations::ParameterCombination;
use super::ParameterSet;

const SEED_MULTIPLIER: u64 = 0x9e3779b9;

pub(super) fn experiment_seed(experiment_id: usize, run_id: usize) -> u64 {
    (experiment_id as u64)
        .wrapping_mul(SEED_MULTIPLIER)
        .wrapping_add((run_id as u64).wrapping_mul(SEED_MULTIPLIER << 16))
}

/// Expand one combination into its replicate parameter sets.
pub(super) fn combination_to_parameter_sets(
    base: &SimulationConfig,
    combo: ParameterCombination,
    experiment_id: usize,
    runs: usize,
) -> Vec<ParameterSet> {
    let config = base
        .clone()
        .with_attractiveness(DestinationId::SUBJECT, combo.subject_attractiveness)
        .with_tenant_features(combo.tenant_mix)
        .with_traffic(combo.traffic)
        .with_agent_count(combo.agent_count);

    (0..runs)
        .map(|run_id| {
            ParameterSet::new(
                config.clone(),
                combo.phase,
                format!("exp_{experiment_id}"),
                run_id,
                experiment_seed(experiment_id, run_id),
            )
        })
        .collect()
}
