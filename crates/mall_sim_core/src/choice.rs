//! Choice engine: utility scoring and destination selection.
//!
//! Each shopper scores every destination independently and picks the one with
//! the strictly greatest utility. Ties go to the destination evaluated first,
//! i.e. the earlier entry in the destination slice.

use std::collections::BTreeSet;

use rayon::prelude::*;

use crate::agents::{IncomeClass, ShopperAgent};
use crate::config::SimulationConfig;
use crate::destinations::{Destination, DestinationId};
use crate::tenants::{tenant_bonus, TenantFeature};

/// Income-weighted utility of a destination score at an effective distance.
///
/// `effective_distance` must be positive; callers floor raw distances first.
pub fn utility(score: f64, effective_distance: f64, income: IncomeClass) -> f64 {
    debug_assert!(
        effective_distance > 0.0,
        "effective distance must be floored before scoring, got {effective_distance}"
    );
    (score * income.quality_weight()) / (effective_distance * income.distance_weight())
}

/// Scores shoppers against a fixed destination list under one configuration.
#[derive(Debug, Clone, Copy)]
pub struct ChoiceEngine<'a> {
    destinations: &'a [Destination],
    friction: f64,
    tenant_features: &'a BTreeSet<TenantFeature>,
}

impl<'a> ChoiceEngine<'a> {
    pub fn new(destinations: &'a [Destination], config: &'a SimulationConfig) -> Self {
        Self {
            destinations,
            friction: config.friction(),
            tenant_features: &config.tenant_features,
        }
    }

    /// Floored straight-line distance times the traffic friction.
    pub fn effective_distance(&self, agent: &ShopperAgent, destination: &Destination) -> f64 {
        agent.position.floored_distance_to(destination.position) * self.friction
    }

    /// Attractiveness plus any tenant bonus (subject destination only).
    pub fn score(&self, agent: &ShopperAgent, destination: &Destination) -> f64 {
        let bonus = if destination.id.is_subject() {
            tenant_bonus(self.tenant_features, agent.income)
        } else {
            0.0
        };
        destination.attractiveness + bonus
    }

    pub fn utility(&self, agent: &ShopperAgent, destination: &Destination) -> f64 {
        utility(
            self.score(agent, destination),
            self.effective_distance(agent, destination),
            agent.income,
        )
    }

    /// Pick the destination with the strictly greatest utility.
    ///
    /// Returns `None` only when there are no destinations (or every utility is NaN).
    pub fn choose(&self, agent: &ShopperAgent) -> Option<DestinationId> {
        let mut best: Option<(DestinationId, f64)> = None;

        for destination in self.destinations {
            let value = self.utility(agent, destination);
            if value.is_nan() {
                continue;
            }
            match best {
                None => best = Some((destination.id, value)),
                Some((_, best_value)) if value > best_value => best = Some((destination.id, value)),
                _ => {}
            }
        }

        best.map(|(id, _)| id)
    }

    /// Score every agent in parallel and record its choice.
    pub fn assign(&self, agents: &mut [ShopperAgent]) {
        agents.par_iter_mut().for_each(|agent| {
            if let Some(choice) = self.choose(agent) {
                agent.record_choice(choice);
            }
        });
    }
}
