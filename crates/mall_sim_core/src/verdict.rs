//! Executive verdict on the subject destination's launch.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::phase::ProjectPhase;

/// Subject share (percent) above which a launch is dominant.
pub const DOMINANT_SHARE: f64 = 45.0;
/// Subject share (percent) above which a launch is competitive.
pub const COMPETITIVE_SHARE: f64 = 30.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LaunchVerdict {
    /// Subject is still being built; no trading to judge.
    CapitalDeployment,
    DominantLaunch,
    CompetitiveEntry,
    WeakLaunch,
}

impl LaunchVerdict {
    /// Classify a run from its phase and the subject's market share in percent.
    ///
    /// Both share thresholds are exclusive: exactly 45.0 is competitive and
    /// exactly 30.0 is weak.
    pub fn verdict(phase: ProjectPhase, subject_share: f64) -> Self {
        if !phase.is_open() {
            LaunchVerdict::CapitalDeployment
        } else if subject_share > DOMINANT_SHARE {
            LaunchVerdict::DominantLaunch
        } else if subject_share > COMPETITIVE_SHARE {
            LaunchVerdict::CompetitiveEntry
        } else {
            LaunchVerdict::WeakLaunch
        }
    }

    pub const fn key(self) -> &'static str {
        match self {
            LaunchVerdict::CapitalDeployment => "capital_deployment",
            LaunchVerdict::DominantLaunch => "dominant_launch",
            LaunchVerdict::CompetitiveEntry => "competitive_entry",
            LaunchVerdict::WeakLaunch => "weak_launch",
        }
    }

    pub const fn headline(self) -> &'static str {
        match self {
            LaunchVerdict::CapitalDeployment => "CAPITAL DEPLOYMENT PHASE",
            LaunchVerdict::DominantLaunch => "DOMINANT LAUNCH",
            LaunchVerdict::CompetitiveEntry => "COMPETITIVE ENTRY",
            LaunchVerdict::WeakLaunch => "WEAK LAUNCH WARNING",
        }
    }

    pub const fn detail(self) -> &'static str {
        match self {
            LaunchVerdict::CapitalDeployment => "Asset under construction.",
            LaunchVerdict::DominantLaunch => {
                "The mixed-use strategy successfully captures the market."
            }
            LaunchVerdict::CompetitiveEntry => {
                "Launch successful but incumbents are resilient."
            }
            LaunchVerdict::WeakLaunch => "Projected revenue below targets.",
        }
    }
}

impl fmt::Display for LaunchVerdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}. {}", self.headline(), self.detail())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn construction_is_always_capital_deployment() {
        for share in [0.0, 30.0, 99.0] {
            assert_eq!(
                LaunchVerdict::verdict(ProjectPhase::Construction, share),
                LaunchVerdict::CapitalDeployment
            );
        }
    }

    #[test]
    fn share_bands_for_open_phases() {
        for phase in [ProjectPhase::GrandOpening, ProjectPhase::Stabilization] {
            assert_eq!(LaunchVerdict::verdict(phase, 60.0), LaunchVerdict::DominantLaunch);
            assert_eq!(LaunchVerdict::verdict(phase, 35.0), LaunchVerdict::CompetitiveEntry);
            assert_eq!(LaunchVerdict::verdict(phase, 10.0), LaunchVerdict::WeakLaunch);
        }
    }

    #[test]
    fn thresholds_fall_into_lower_band() {
        let phase = ProjectPhase::Stabilization;
        assert_eq!(LaunchVerdict::verdict(phase, 45.0), LaunchVerdict::CompetitiveEntry);
        assert_eq!(LaunchVerdict::verdict(phase, 45.000001), LaunchVerdict::DominantLaunch);
        assert_eq!(LaunchVerdict::verdict(phase, 30.0), LaunchVerdict::WeakLaunch);
        assert_eq!(LaunchVerdict::verdict(phase, 30.000001), LaunchVerdict::CompetitiveEntry);
    }

    #[test]
    fn display_joins_headline_and_detail() {
        assert_eq!(
            LaunchVerdict::WeakLaunch.to_string(),
            "WEAK LAUNCH WARNING. Projected revenue below targets."
        );
    }
}
