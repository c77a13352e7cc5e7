//! Run configuration.
//!
//! A [`SimulationConfig`] is built once per run and only read afterwards. It
//! derives serde so callers can load it from a file.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::destinations::DestinationId;
use crate::error::{SimError, SimResult};
use crate::tenants::TenantFeature;

/// Default number of shoppers per run.
const DEFAULT_AGENT_COUNT: usize = 1000;

/// Multiplier on every distance while peak-hour traffic is on.
pub const TRAFFIC_FRICTION: f64 = 2.5;

/// Attractiveness score per destination.
///
/// Keys are destination keys; a key naming any other destination is rejected.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Attractiveness {
    pub sam_levys_village: f64,
    pub highland_park: f64,
    pub arundel_village: f64,
    pub groombridge: f64,
    pub mall_of_zimbabwe: f64,
}

impl Default for Attractiveness {
    fn default() -> Self {
        Self {
            sam_levys_village: 85.0,
            highland_park: 75.0,
            arundel_village: 60.0,
            groombridge: 50.0,
            mall_of_zimbabwe: 80.0,
        }
    }
}

impl Attractiveness {
    /// Build from values listed in [`DestinationId::ALL`] order.
    pub fn from_ordered(values: [f64; 5]) -> Self {
        let [sam_levys_village, highland_park, arundel_village, groombridge, mall_of_zimbabwe] =
            values;
        Self {
            sam_levys_village,
            highland_park,
            arundel_village,
            groombridge,
            mall_of_zimbabwe,
        }
    }

    pub fn get(&self, id: DestinationId) -> f64 {
        match id {
            DestinationId::SamLevysVillage => self.sam_levys_village,
            DestinationId::HighlandPark => self.highland_park,
            DestinationId::ArundelVillage => self.arundel_village,
            DestinationId::Groombridge => self.groombridge,
            DestinationId::MallOfZimbabwe => self.mall_of_zimbabwe,
        }
    }

    pub fn set(&mut self, id: DestinationId, value: f64) {
        let slot = match id {
            DestinationId::SamLevysVillage => &mut self.sam_levys_village,
            DestinationId::HighlandPark => &mut self.highland_park,
            DestinationId::ArundelVillage => &mut self.arundel_village,
            DestinationId::Groombridge => &mut self.groombridge,
            DestinationId::MallOfZimbabwe => &mut self.mall_of_zimbabwe,
        };
        *slot = value;
    }
}

/// Parameters for one simulation run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SimulationConfig {
    pub agent_count: usize,
    pub attractiveness: Attractiveness,
    /// Peak-hour traffic: inflates every effective distance by [`TRAFFIC_FRICTION`].
    pub traffic: bool,
    /// Tenant features active at the subject destination.
    pub tenant_features: BTreeSet<TenantFeature>,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            agent_count: DEFAULT_AGENT_COUNT,
            attractiveness: Attractiveness::default(),
            traffic: false,
            tenant_features: [TenantFeature::Shop, TenantFeature::Eat].into_iter().collect(),
        }
    }
}

impl SimulationConfig {
    /// Validated constructor taking attractiveness in [`DestinationId::ALL`] order.
    pub fn new(
        agent_count: usize,
        attractiveness: [f64; 5],
        traffic: bool,
        tenant_features: impl IntoIterator<Item = TenantFeature>,
    ) -> SimResult<Self> {
        let config = Self {
            agent_count,
            attractiveness: Attractiveness::from_ordered(attractiveness),
            traffic,
            tenant_features: tenant_features.into_iter().collect(),
        };
        config.validate()?;
        Ok(config)
    }

    pub fn with_agent_count(mut self, agent_count: usize) -> Self {
        self.agent_count = agent_count;
        self
    }

    pub fn with_attractiveness(mut self, id: DestinationId, value: f64) -> Self {
        self.attractiveness.set(id, value);
        self
    }

    pub fn with_traffic(mut self, traffic: bool) -> Self {
        self.traffic = traffic;
        self
    }

    pub fn with_tenant_feature(mut self, feature: TenantFeature) -> Self {
        self.tenant_features.insert(feature);
        self
    }

    /// Replace the tenant mix.
    pub fn with_tenant_features(mut self, features: impl IntoIterator<Item = TenantFeature>) -> Self {
        self.tenant_features = features.into_iter().collect();
        self
    }

    /// Distance multiplier for this run.
    pub fn friction(&self) -> f64 {
        if self.traffic {
            TRAFFIC_FRICTION
        } else {
            1.0
        }
    }

    /// Check the invariants `run` relies on.
    pub fn validate(&self) -> SimResult<()> {
        if self.agent_count == 0 {
            return Err(SimError::InvalidAgentCount(self.agent_count));
        }
        for id in DestinationId::ALL {
            let value = self.attractiveness.get(id);
            if !value.is_finite() {
                return Err(SimError::InvalidAttractiveness {
                    destination: id.name().to_string(),
                    value,
                });
            }
        }
        Ok(())
    }
}
