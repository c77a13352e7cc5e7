//! Error types for the `mall_sim_core` crate.

/// Errors surfaced to callers of the simulation entry points.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SimError {
    /// A run needs at least one shopper.
    #[error("agent count must be a positive integer, got {0}")]
    InvalidAgentCount(usize),

    /// A destination name outside the fixed market.
    #[error("unknown destination: {0:?}")]
    UnknownDestination(String),

    /// A tenant feature name outside the fixed feature set.
    #[error("unknown tenant feature: {0:?}")]
    UnknownTenantFeature(String),

    /// Attractiveness must be a finite number.
    #[error("attractiveness for {destination} must be finite, got {value}")]
    InvalidAttractiveness {
        /// Destination the value was supplied for.
        destination: String,
        /// The rejected value.
        value: f64,
    },

    /// A project phase name that does not exist.
    #[error("unknown project phase: {0:?}")]
    UnknownPhase(String),
}

pub type SimResult<T> = Result<T, SimError>;
