//! Retail catchment simulation.
//!
//! Estimates how a population of shoppers splits across a fixed set of
//! competing malls, given each mall's attractiveness, peak-hour traffic and the
//! tenant mix of the subject mall. A run is one static snapshot:
//!
//! 1. [`population`] generates shoppers with clustered positions and income classes.
//! 2. [`choice`] scores every destination for every shopper and records the best one.
//! 3. [`aggregation`] tallies visits and revenue per destination.
//!
//! ```no_run
//! use mall_sim_core::{run, SimulationConfig, TenantFeature};
//!
//! let config = SimulationConfig::default()
//!     .with_agent_count(2000)
//!     .with_tenant_feature(TenantFeature::Play);
//! let run = run(&config, 42).unwrap();
//! println!("{:?}", run.results.visits);
//! ```

pub mod agent_export;
pub mod agents;
pub mod aggregation;
pub mod choice;
pub mod config;
pub mod destinations;
pub mod distributions;
pub mod error;
pub mod phase;
pub mod population;
pub mod report;
pub mod runner;
pub mod spatial;
pub mod tenants;
pub mod verdict;

#[cfg(any(test, feature = "test-helpers"))]
pub mod test_helpers;

pub use agents::{IncomeClass, ShopperAgent};
pub use aggregation::ResultSet;
pub use config::{Attractiveness, SimulationConfig};
pub use destinations::{Destination, DestinationId};
pub use error::{SimError, SimResult};
pub use phase::ProjectPhase;
pub use runner::{run, run_with_policy, SimulationRun};
pub use tenants::TenantFeature;
pub use verdict::LaunchVerdict;
