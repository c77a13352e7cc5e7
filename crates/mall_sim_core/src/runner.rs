//! Single-run entry point: generate, score, aggregate.
//!
//! A run is a pure function of its configuration, population policy and seed.
//! Nothing is kept between runs.

use tracing::debug;

use crate::agents::ShopperAgent;
use crate::aggregation::{aggregate, ResultSet};
use crate::choice::ChoiceEngine;
use crate::config::SimulationConfig;
use crate::destinations::{destinations_for, Destination};
use crate::error::SimResult;
use crate::population::{generate_population, PopulationPolicy};

/// Everything a run produced: the realized agents and their aggregate.
#[derive(Debug, Clone)]
pub struct SimulationRun {
    pub seed: u64,
    pub destinations: Vec<Destination>,
    pub agents: Vec<ShopperAgent>,
    pub results: ResultSet,
}

/// Run one simulation with the default population policy.
pub fn run(config: &SimulationConfig, seed: u64) -> SimResult<SimulationRun> {
    run_with_policy(config, &PopulationPolicy::default(), seed)
}

/// Run one simulation with an explicit population policy.
pub fn run_with_policy(
    config: &SimulationConfig,
    policy: &PopulationPolicy,
    seed: u64,
) -> SimResult<SimulationRun> {
    config.validate()?;

    let destinations = destinations_for(config);
    let mut agents = generate_population(config.agent_count, seed, policy)?;

    ChoiceEngine::new(&destinations, config).assign(&mut agents);
    let results = aggregate(&agents);

    debug!(
        seed,
        agents = agents.len(),
        traffic = config.traffic,
        tenant_features = config.tenant_features.len(),
        total_revenue = results.total_revenue(),
        "simulation run complete"
    );

    Ok(SimulationRun {
        seed,
        destinations,
        agents,
        results,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SimError;

    #[test]
    fn run_assigns_every_agent() {
        let config = SimulationConfig::default().with_agent_count(300);
        let run = run(&config, 42).unwrap();
        assert_eq!(run.agents.len(), 300);
        assert!(run.agents.iter().all(|a| a.chosen().is_some()));
        assert_eq!(run.results.total_visits(), 300);
        assert_eq!(run.destinations.len(), 5);
    }

    #[test]
    fn run_rejects_invalid_config() {
        let config = SimulationConfig::default().with_agent_count(0);
        assert_eq!(run(&config, 1).unwrap_err(), SimError::InvalidAgentCount(0));
    }
}
