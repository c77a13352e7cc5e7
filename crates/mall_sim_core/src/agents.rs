//! Shopper agents and their income classes.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::destinations::DestinationId;
use crate::spatial::GridPoint;

/// Discrete income tier of a shopper. Fixed at creation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IncomeClass {
    Low,
    Medium,
    High,
}

impl IncomeClass {
    pub const ALL: [IncomeClass; 3] = [IncomeClass::Low, IncomeClass::Medium, IncomeClass::High];

    /// Spend per visit, in currency units.
    pub const fn spend(self) -> f64 {
        match self {
            IncomeClass::Low => 5.50,
            IncomeClass::Medium => 50.00,
            IncomeClass::High => 135.00,
        }
    }

    /// Multiplier on the destination score in the utility numerator.
    pub const fn quality_weight(self) -> f64 {
        match self {
            IncomeClass::Low => 0.5,
            IncomeClass::Medium => 1.0,
            IncomeClass::High => 3.0,
        }
    }

    /// Multiplier on the effective distance in the utility denominator.
    pub const fn distance_weight(self) -> f64 {
        match self {
            IncomeClass::Low => 2.0,
            IncomeClass::Medium => 1.0,
            IncomeClass::High => 0.5,
        }
    }

    /// Compact code for columnar export.
    pub const fn code(self) -> u8 {
        match self {
            IncomeClass::Low => 1,
            IncomeClass::Medium => 2,
            IncomeClass::High => 3,
        }
    }
}

impl fmt::Display for IncomeClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            IncomeClass::Low => "Low",
            IncomeClass::Medium => "Medium",
            IncomeClass::High => "High",
        };
        f.write_str(label)
    }
}

/// One simulated shopper.
///
/// Position and income are set by the population generator and never change.
/// `chosen` starts empty and is filled once by the choice engine.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ShopperAgent {
    pub id: usize,
    pub position: GridPoint,
    pub income: IncomeClass,
    chosen: Option<DestinationId>,
}

impl ShopperAgent {
    pub fn new(id: usize, position: GridPoint, income: IncomeClass) -> Self {
        Self {
            id,
            position,
            income,
            chosen: None,
        }
    }

    pub fn chosen(&self) -> Option<DestinationId> {
        self.chosen
    }

    /// Record the agent's destination. Recording a different destination twice
    /// is a logic error.
    pub(crate) fn record_choice(&mut self, destination: DestinationId) {
        debug_assert!(
            self.chosen.map_or(true, |previous| previous == destination),
            "agent {} already chose {:?}",
            self.id,
            self.chosen
        );
        self.chosen = Some(destination);
    }
}
