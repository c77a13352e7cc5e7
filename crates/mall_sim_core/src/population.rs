//! Population generation: shoppers with randomized position and income.

use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::agents::ShopperAgent;
use crate::distributions::{agent_rng, IncomeMix, Normal};
use crate::error::{SimError, SimResult};
use crate::spatial::GridPoint;

/// Spatial and income policy for generated shoppers.
///
/// Positions cluster around the destinations with some spread and are clamped
/// onto the grid.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PopulationPolicy {
    pub x: Normal,
    pub y: Normal,
    pub income_mix: IncomeMix,
}

impl Default for PopulationPolicy {
    fn default() -> Self {
        Self {
            x: Normal::new(6.5, 2.0),
            y: Normal::new(7.5, 2.0),
            income_mix: IncomeMix::default(),
        }
    }
}

impl PopulationPolicy {
    /// Generate agent `index` for a run seeded with `seed`.
    pub fn agent(&self, seed: u64, index: usize) -> ShopperAgent {
        let mut rng = agent_rng(seed, index);
        let x = self.x.sample(&mut rng);
        let y = self.y.sample(&mut rng);
        let income = self.income_mix.sample(&mut rng);
        ShopperAgent::new(index, GridPoint::new(x, y).clamped(), income)
    }
}

/// Generate exactly `count` agents. A zero count is rejected.
pub fn generate_population(
    count: usize,
    seed: u64,
    policy: &PopulationPolicy,
) -> SimResult<Vec<ShopperAgent>> {
    if count == 0 {
        return Err(SimError::InvalidAgentCount(count));
    }

    let agents: Vec<ShopperAgent> = (0..count)
        .into_par_iter()
        .map(|index| policy.agent(seed, index))
        .collect();

    debug!(count, seed, "generated shopper population");
    Ok(agents)
}
