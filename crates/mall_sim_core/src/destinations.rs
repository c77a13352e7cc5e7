//! The fixed set of competing destinations.
//!
//! The market is closed: five venues with fixed positions, one of which (the
//! subject) is the venue under evaluation. [`DestinationId::ALL`] is also the
//! evaluation order used for tie-breaking during choice.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::config::SimulationConfig;
use crate::error::SimError;
use crate::spatial::GridPoint;

/// Identity of one destination in the market.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DestinationId {
    SamLevysVillage,
    HighlandPark,
    ArundelVillage,
    Groombridge,
    MallOfZimbabwe,
}

impl DestinationId {
    /// Every destination, in evaluation order.
    pub const ALL: [DestinationId; 5] = [
        DestinationId::SamLevysVillage,
        DestinationId::HighlandPark,
        DestinationId::ArundelVillage,
        DestinationId::Groombridge,
        DestinationId::MallOfZimbabwe,
    ];

    /// The venue whose tenant mix and phase are configurable.
    pub const SUBJECT: DestinationId = DestinationId::MallOfZimbabwe;

    /// Position in [`DestinationId::ALL`].
    pub const fn index(self) -> usize {
        match self {
            DestinationId::SamLevysVillage => 0,
            DestinationId::HighlandPark => 1,
            DestinationId::ArundelVillage => 2,
            DestinationId::Groombridge => 3,
            DestinationId::MallOfZimbabwe => 4,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            DestinationId::SamLevysVillage => "Sam Levy's Village",
            DestinationId::HighlandPark => "Highland Park",
            DestinationId::ArundelVillage => "Arundel Village",
            DestinationId::Groombridge => "Groombridge",
            DestinationId::MallOfZimbabwe => "Mall of Zimbabwe",
        }
    }

    /// Short machine-friendly key, also accepted by `FromStr`.
    pub const fn key(self) -> &'static str {
        match self {
            DestinationId::SamLevysVillage => "sam_levys_village",
            DestinationId::HighlandPark => "highland_park",
            DestinationId::ArundelVillage => "arundel_village",
            DestinationId::Groombridge => "groombridge",
            DestinationId::MallOfZimbabwe => "mall_of_zimbabwe",
        }
    }

    pub const fn position(self) -> GridPoint {
        match self {
            DestinationId::SamLevysVillage => GridPoint::new(9.0, 9.0),
            DestinationId::HighlandPark => GridPoint::new(10.0, 5.0),
            DestinationId::ArundelVillage => GridPoint::new(4.0, 8.0),
            DestinationId::Groombridge => GridPoint::new(6.0, 7.0),
            DestinationId::MallOfZimbabwe => GridPoint::new(7.0, 8.0),
        }
    }

    pub fn is_subject(self) -> bool {
        self == Self::SUBJECT
    }
}

impl fmt::Display for DestinationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for DestinationId {
    type Err = SimError;

    /// Accepts either the display name or the snake_case key, case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        DestinationId::ALL
            .into_iter()
            .find(|id| id.name().eq_ignore_ascii_case(wanted) || id.key().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| SimError::UnknownDestination(s.to_string()))
    }
}

/// A destination as seen by one run: identity, position and attractiveness.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Destination {
    pub id: DestinationId,
    pub position: GridPoint,
    pub attractiveness: f64,
}

impl Destination {
    pub fn new(id: DestinationId, attractiveness: f64) -> Self {
        Self {
            id,
            position: id.position(),
            attractiveness,
        }
    }
}

/// Build the destination list for a run, in evaluation order.
pub fn destinations_for(config: &SimulationConfig) -> Vec<Destination> {
    DestinationId::ALL
        .into_iter()
        .map(|id| Destination::new(id, config.attractiveness.get(id)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn index_matches_evaluation_order() {
        for (i, id) in DestinationId::ALL.into_iter().enumerate() {
            assert_eq!(id.index(), i);
        }
    }

    #[test]
    fn parses_names_and_keys() {
        assert_eq!(
            "Sam Levy's Village".parse::<DestinationId>(),
            Ok(DestinationId::SamLevysVillage)
        );
        assert_eq!(
            "highland_park".parse::<DestinationId>(),
            Ok(DestinationId::HighlandPark)
        );
        assert_eq!(
            " mall of zimbabwe ".parse::<DestinationId>(),
            Ok(DestinationId::MallOfZimbabwe)
        );
    }

    #[test]
    fn rejects_unknown_destination() {
        let err = "Eastgate".parse::<DestinationId>().unwrap_err();
        assert_eq!(err, SimError::UnknownDestination("Eastgate".to_string()));
    }

    #[test]
    fn only_mall_of_zimbabwe_is_subject() {
        let subjects: Vec<_> = DestinationId::ALL
            .into_iter()
            .filter(|id| id.is_subject())
            .collect();
        assert_eq!(subjects, vec![DestinationId::MallOfZimbabwe]);
    }

    #[test]
    fn destinations_follow_config_values() {
        let config = SimulationConfig::default().with_attractiveness(DestinationId::Groombridge, 12.5);
        let destinations = destinations_for(&config);
        assert_eq!(destinations.len(), 5);
        assert_eq!(destinations[3].id, DestinationId::Groombridge);
        assert_eq!(destinations[3].attractiveness, 12.5);
        assert_eq!(destinations[3].position, GridPoint::new(6.0, 7.0));
    }
}
