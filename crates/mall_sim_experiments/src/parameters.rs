//! Parameter variation framework for exploring strategy space.
//!
//! A [`ParameterSpace`] lists the values to explore per dimension; anything left
//! empty falls back to the base configuration. Grid search takes the Cartesian
//! product, random sampling draws unique combinations.

use std::collections::BTreeSet;

use mall_sim_core::{DestinationId, ProjectPhase, SimulationConfig, TenantFeature};

mod combinations;
mod constraints;
mod conversion;
mod sampling;

#[cfg(test)]
mod tests;

use combinations::ParameterVariations;
use constraints::is_canonical_combination;
use conversion::combination_to_parameter_sets;

/// A single configuration for a simulation run, plus experiment metadata.
#[derive(Debug, Clone, PartialEq)]
pub struct ParameterSet {
    /// Configured (pre-phase) simulation parameters.
    pub config: SimulationConfig,
    /// Phase applied on top of `config` before running.
    pub phase: ProjectPhase,
    /// Identifier shared by all replicate runs of one combination.
    pub experiment_id: String,
    /// Replicate index within the experiment.
    pub run_id: usize,
    /// Seed used for this run.
    pub seed: u64,
}

impl ParameterSet {
    pub fn new(
        config: SimulationConfig,
        phase: ProjectPhase,
        experiment_id: String,
        run_id: usize,
        seed: u64,
    ) -> Self {
        Self {
            config,
            phase,
            experiment_id,
            run_id,
            seed,
        }
    }

    /// The configuration the run actually uses, with the phase applied.
    pub fn effective_config(&self) -> SimulationConfig {
        self.phase.apply(&self.config)
    }
}

/// Defines a parameter space for exploration.
#[derive(Debug, Clone)]
pub struct ParameterSpace {
    base: SimulationConfig,
    base_phase: ProjectPhase,
    subject_attractiveness: Vec<f64>,
    tenant_mixes: Vec<BTreeSet<TenantFeature>>,
    traffic: Vec<bool>,
    phases: Vec<ProjectPhase>,
    agent_counts: Vec<usize>,
    runs_per_combination: usize,
}

impl Default for ParameterSpace {
    fn default() -> Self {
        Self::new()
    }
}

impl ParameterSpace {
    pub fn new() -> Self {
        Self {
            base: SimulationConfig::default(),
            base_phase: ProjectPhase::Stabilization,
            subject_attractiveness: vec![],
            tenant_mixes: vec![],
            traffic: vec![],
            phases: vec![],
            agent_counts: vec![],
            runs_per_combination: 1,
        }
    }

    /// Create a new parameter space for grid search.
    pub fn grid() -> Self {
        Self::new()
    }

    /// Every subset of the tenant features, smallest first.
    pub fn all_tenant_mixes() -> Vec<Vec<TenantFeature>> {
        let features = TenantFeature::ALL;
        let mut mixes: Vec<Vec<TenantFeature>> = (0u32..(1 << features.len()))
            .map(|mask| {
                features
                    .iter()
                    .enumerate()
                    .filter(|(bit, _)| mask & (1 << bit) != 0)
                    .map(|(_, feature)| *feature)
                    .collect()
            })
            .collect();
        mixes.sort_by_key(|mix| mix.len());
        mixes
    }

    /// Set subject destination attractiveness values to explore.
    pub fn subject_attractiveness(mut self, values: Vec<f64>) -> Self {
        self.subject_attractiveness = values;
        self
    }

    /// Set tenant mixes to explore.
    pub fn tenant_mixes(mut self, mixes: Vec<Vec<TenantFeature>>) -> Self {
        self.tenant_mixes = mixes
            .into_iter()
            .map(|mix| mix.into_iter().collect())
            .collect();
        self
    }

    /// Set traffic flags to explore.
    pub fn traffic(mut self, flags: Vec<bool>) -> Self {
        self.traffic = flags;
        self
    }

    /// Set project phases to explore.
    pub fn phases(mut self, phases: Vec<ProjectPhase>) -> Self {
        self.phases = phases;
        self
    }

    /// Set population sizes to explore.
    pub fn agent_counts(mut self, counts: Vec<usize>) -> Self {
        self.agent_counts = counts;
        self
    }

    /// Number of replicate runs (distinct seeds) per combination. At least one.
    pub fn runs_per_combination(mut self, runs: usize) -> Self {
        self.runs_per_combination = runs.max(1);
        self
    }

    /// Set base configuration (used for unspecified dimensions).
    pub fn with_base(mut self, base: SimulationConfig) -> Self {
        self.base = base;
        self
    }

    /// Phase used when no phases are listed.
    pub fn with_base_phase(mut self, phase: ProjectPhase) -> Self {
        self.base_phase = phase;
        self
    }

    pub(crate) fn base_subject_attractiveness(&self) -> f64 {
        self.base.attractiveness.get(DestinationId::SUBJECT)
    }

    /// Generate all parameter sets using grid search (Cartesian product).
    ///
    /// Combinations that cannot differ from another one (tenant mix and subject
    /// quality during construction) are dropped.
    pub fn generate(&self) -> Vec<ParameterSet> {
        let variations = ParameterVariations::from_space(self);

        variations
            .generate_combinations()
            .filter(|combo| is_canonical_combination(combo, &variations))
            .enumerate()
            .flat_map(|(experiment_id, combo)| {
                combination_to_parameter_sets(&self.base, combo, experiment_id, self.runs_per_combination)
            })
            .collect()
    }
}
