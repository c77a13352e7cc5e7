//! Tenant features of the subject destination and the bonuses they grant.

use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::agents::IncomeClass;
use crate::error::SimError;

/// A toggleable anchor offering at the subject destination.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TenantFeature {
    /// Luxury fashion.
    Shop,
    /// Fine dining precinct.
    Eat,
    /// Co-working hub.
    Work,
    /// Family entertainment.
    Play,
}

impl TenantFeature {
    pub const ALL: [TenantFeature; 4] = [
        TenantFeature::Shop,
        TenantFeature::Eat,
        TenantFeature::Work,
        TenantFeature::Play,
    ];

    /// Score bonus this feature grants to a shopper of the given income.
    pub const fn bonus_for(self, income: IncomeClass) -> f64 {
        match (self, income) {
            (TenantFeature::Shop, IncomeClass::High) => 25.0,
            (TenantFeature::Shop, _) => 0.0,
            (TenantFeature::Eat, IncomeClass::Medium | IncomeClass::High) => 20.0,
            (TenantFeature::Eat, IncomeClass::Low) => 0.0,
            (TenantFeature::Work, IncomeClass::Medium) => 20.0,
            (TenantFeature::Work, _) => 5.0,
            (TenantFeature::Play, _) => 15.0,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            TenantFeature::Shop => "Luxury Fashion (Shop)",
            TenantFeature::Eat => "Fine Dining (Eat)",
            TenantFeature::Work => "Co-working Hub (Work)",
            TenantFeature::Play => "Family Entertainment (Play)",
        }
    }

    /// The label without its category, as printed in reports.
    pub const fn pillar(self) -> &'static str {
        match self {
            TenantFeature::Shop => "Luxury Fashion",
            TenantFeature::Eat => "Fine Dining",
            TenantFeature::Work => "Co-working Hub",
            TenantFeature::Play => "Family Entertainment",
        }
    }

    pub const fn key(self) -> &'static str {
        match self {
            TenantFeature::Shop => "shop",
            TenantFeature::Eat => "eat",
            TenantFeature::Work => "work",
            TenantFeature::Play => "play",
        }
    }
}

impl fmt::Display for TenantFeature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for TenantFeature {
    type Err = SimError;

    /// Accepts the short key (`shop`) or the full label, case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        TenantFeature::ALL
            .into_iter()
            .find(|f| f.key().eq_ignore_ascii_case(wanted) || f.label().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| SimError::UnknownTenantFeature(s.to_string()))
    }
}

/// Total additive bonus of a tenant mix for one shopper.
pub fn tenant_bonus(features: &BTreeSet<TenantFeature>, income: IncomeClass) -> f64 {
    features.iter().map(|feature| feature.bonus_for(income)).sum()
}
