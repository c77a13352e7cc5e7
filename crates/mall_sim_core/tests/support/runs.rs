use mall_sim_core::{run, DestinationId, SimulationConfig, SimulationRun};

/// Run and panic with context on error; tests only use valid configs.
pub fn run_ok(config: &SimulationConfig, seed: u64) -> SimulationRun {
    run(config, seed).unwrap_or_else(|err| panic!("run with seed {seed} failed: {err}"))
}

/// Chosen destination of every agent, in agent order.
pub fn choices(run: &SimulationRun) -> Vec<Option<DestinationId>> {
    run.agents.iter().map(|agent| agent.chosen()).collect()
}

/// Revenue recomputed straight from the agents, in agent order.
pub fn revenue_from_agents(run: &SimulationRun, id: DestinationId) -> f64 {
    run.agents
        .iter()
        .filter(|agent| agent.chosen() == Some(id))
        .fold(0.0, |total, agent| total + agent.income.spend())
}
