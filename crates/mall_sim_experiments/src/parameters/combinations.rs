use std::collections::BTreeSet;

use mall_sim_core::{ProjectPhase, TenantFeature};

use super::ParameterSpace;

/// Represents a single parameter combination.
#[derive(Debug, Clone, PartialEq)]
pub(super) struct ParameterCombination {
    pub(super) subject_attractiveness: f64,
    pub(super) tenant_mix: BTreeSet<TenantFeature>,
    pub(super) traffic: bool,
    pub(super) phase: ProjectPhase,
    pub(super) agent_count: usize,
}

impl ParameterCombination {
    /// Hashable identity (f64 compared by bits).
    pub(super) fn key(&self) -> (u64, Vec<TenantFeature>, bool, ProjectPhase, usize) {
        (
            self.subject_attractiveness.to_bits(),
            self.tenant_mix.iter().copied().collect(),
            self.traffic,
            self.phase,
            self.agent_count,
        )
    }
}

/// Holds all parameter variations to explore, with defaults filled in.
pub(super) struct ParameterVariations {
    pub(super) subject_attractiveness: Vec<f64>,
    pub(super) tenant_mixes: Vec<BTreeSet<TenantFeature>>,
    pub(super) traffic: Vec<bool>,
    pub(super) phases: Vec<ProjectPhase>,
    pub(super) agent_counts: Vec<usize>,
}

fn or_default<T: Clone>(values: &[T], default: T) -> Vec<T> {
    if values.is_empty() {
        vec![default]
    } else {
        values.to_vec()
    }
}

impl ParameterVariations {
    pub(super) fn from_space(space: &ParameterSpace) -> Self {
        Self {
            subject_attractiveness: or_default(
                &space.subject_attractiveness,
                space.base_subject_attractiveness(),
            ),
            tenant_mixes: or_default(&space.tenant_mixes, space.base.tenant_features.clone()),
            traffic: or_default(&space.traffic, space.base.traffic),
            phases: or_default(&space.phases, space.base_phase),
            agent_counts: or_default(&space.agent_counts, space.base.agent_count),
        }
    }

    /// Generate all combinations using Cartesian product.
    pub(super) fn generate_combinations(&self) -> impl Iterator<Item = ParameterCombination> + '_ {
        self.phases.iter().flat_map(move |&phase| {
            self.subject_attractiveness.iter().flat_map(move |&subject_attractiveness| {
                self.tenant_mixes.iter().flat_map(move |tenant_mix| {
                    self.traffic.iter().flat_map(move |&traffic| {
                        self.agent_counts.iter().map(move |&agent_count| ParameterCombination {
                            subject_attractiveness,
                            tenant_mix: tenant_mix.clone(),
                            traffic,
                            phase,
                            agent_count,
                        })
                    })
                })
            })
        })
    }
}
