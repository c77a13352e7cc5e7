//! Test helpers for common test setup and utilities.

use crate::agents::{IncomeClass, ShopperAgent};
use crate::config::SimulationConfig;
use crate::destinations::DestinationId;
use crate::spatial::GridPoint;

/// Seed shared by tests that only need "some" fixed seed.
pub const TEST_SEED: u64 = 42;

/// Default config with the given agent count and no tenant features.
pub fn plain_config(agent_count: usize) -> SimulationConfig {
    SimulationConfig::default()
        .with_agent_count(agent_count)
        .with_tenant_features([])
}

/// Config with every destination at the same attractiveness and no tenants.
pub fn flat_config(agent_count: usize, attractiveness: f64) -> SimulationConfig {
    DestinationId::ALL
        .into_iter()
        .fold(plain_config(agent_count), |config, id| {
            config.with_attractiveness(id, attractiveness)
        })
}

/// An unscored shopper standing exactly on a destination.
pub fn agent_on(id: DestinationId, income: IncomeClass) -> ShopperAgent {
    ShopperAgent::new(0, id.position(), income)
}

/// An unscored shopper at an arbitrary grid point.
pub fn agent_at(x: f64, y: f64, income: IncomeClass) -> ShopperAgent {
    ShopperAgent::new(0, GridPoint::new(x, y), income)
}
