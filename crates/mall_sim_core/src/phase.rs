//! Project timeline of the subject destination.
//!
//! The subject venue is forecast across its build-out: closed while under
//! construction, boosted by launch hype in its opening year, then settling at
//! its configured quality.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::config::SimulationConfig;
use crate::destinations::DestinationId;
use crate::error::SimError;

/// Attractiveness added to the subject destination in its opening year.
pub const GRAND_OPENING_BONUS: f64 = 15.0;

/// First year the subject destination trades.
pub const OPENING_YEAR: u16 = 2028;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProjectPhase {
    /// Closed: zero attractiveness, no tenants.
    Construction,
    /// Opening year: launch hype bonus.
    GrandOpening,
    /// Configured values apply unchanged.
    Stabilization,
}

impl ProjectPhase {
    pub const ALL: [ProjectPhase; 3] = [
        ProjectPhase::Construction,
        ProjectPhase::GrandOpening,
        ProjectPhase::Stabilization,
    ];

    pub fn from_year(year: u16) -> Self {
        match year.cmp(&OPENING_YEAR) {
            std::cmp::Ordering::Less => ProjectPhase::Construction,
            std::cmp::Ordering::Equal => ProjectPhase::GrandOpening,
            std::cmp::Ordering::Greater => ProjectPhase::Stabilization,
        }
    }

    /// Year a forecast for this phase is reported under.
    pub const fn forecast_year(self) -> u16 {
        match self {
            ProjectPhase::Construction => OPENING_YEAR - 1,
            ProjectPhase::GrandOpening => OPENING_YEAR,
            ProjectPhase::Stabilization => OPENING_YEAR + 1,
        }
    }

    /// Whether the subject destination trades in this phase.
    pub fn is_open(self) -> bool {
        self != ProjectPhase::Construction
    }

    /// Effective configuration for this phase. The input is left untouched.
    pub fn apply(self, config: &SimulationConfig) -> SimulationConfig {
        let subject = DestinationId::SUBJECT;
        let base = config.attractiveness.get(subject);
        match self {
            ProjectPhase::Construction => config
                .clone()
                .with_attractiveness(subject, 0.0)
                .with_tenant_features([]),
            ProjectPhase::GrandOpening => config
                .clone()
                .with_attractiveness(subject, base + GRAND_OPENING_BONUS),
            ProjectPhase::Stabilization => config.clone(),
        }
    }

    pub const fn key(self) -> &'static str {
        match self {
            ProjectPhase::Construction => "construction",
            ProjectPhase::GrandOpening => "grand_opening",
            ProjectPhase::Stabilization => "stabilization",
        }
    }
}

impl fmt::Display for ProjectPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            ProjectPhase::Construction => "Construction (Mall Closed)",
            ProjectPhase::GrandOpening => "Grand Opening (Launch Hype)",
            ProjectPhase::Stabilization => "Stabilization",
        };
        f.write_str(label)
    }
}

impl FromStr for ProjectPhase {
    type Err = SimError;

    /// Accepts a phase key (`grand_opening`) or a year (`2028`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        if let Ok(year) = wanted.parse::<u16>() {
            return Ok(ProjectPhase::from_year(year));
        }
        ProjectPhase::ALL
            .into_iter()
            .find(|phase| phase.key().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| SimError::UnknownPhase(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tenants::TenantFeature;

    #[test]
    fn years_map_to_phases() {
        assert_eq!(ProjectPhase::from_year(2026), ProjectPhase::Construction);
        assert_eq!(ProjectPhase::from_year(2027), ProjectPhase::Construction);
        assert_eq!(ProjectPhase::from_year(2028), ProjectPhase::GrandOpening);
        assert_eq!(ProjectPhase::from_year(2029), ProjectPhase::Stabilization);
    }

    #[test]
    fn construction_closes_subject() {
        let config = SimulationConfig::default().with_tenant_feature(TenantFeature::Play);
        let effective = ProjectPhase::Construction.apply(&config);
        assert_eq!(effective.attractiveness.get(DestinationId::SUBJECT), 0.0);
        assert!(effective.tenant_features.is_empty());
        // competitors untouched
        assert_eq!(
            effective.attractiveness.get(DestinationId::SamLevysVillage),
            config.attractiveness.get(DestinationId::SamLevysVillage)
        );
    }

    #[test]
    fn grand_opening_adds_hype() {
        let config = SimulationConfig::default();
        let effective = ProjectPhase::GrandOpening.apply(&config);
        assert_eq!(effective.attractiveness.get(DestinationId::SUBJECT), 80.0 + GRAND_OPENING_BONUS);
        assert_eq!(effective.tenant_features, config.tenant_features);
    }

    #[test]
    fn stabilization_is_identity() {
        let config = SimulationConfig::default();
        assert_eq!(ProjectPhase::Stabilization.apply(&config), config);
    }

    #[test]
    fn parses_keys_and_years() {
        assert_eq!("grand_opening".parse::<ProjectPhase>(), Ok(ProjectPhase::GrandOpening));
        assert_eq!("2026".parse::<ProjectPhase>(), Ok(ProjectPhase::Construction));
        assert!("demolition".parse::<ProjectPhase>().is_err());
    }

    #[test]
    fn forecast_year_round_trips_through_from_year() {
        for phase in ProjectPhase::ALL {
            assert_eq!(ProjectPhase::from_year(phase.forecast_year()), phase);
        }
        assert_eq!(ProjectPhase::GrandOpening.forecast_year(), 2028);
        assert!(!ProjectPhase::Construction.is_open());
        assert!(ProjectPhase::Stabilization.is_open());
    }
}
