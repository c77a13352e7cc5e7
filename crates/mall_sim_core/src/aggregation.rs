//! Aggregation of scored agents into visit counts and revenue.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::agents::ShopperAgent;
use crate::destinations::DestinationId;

/// Visits and revenue per destination for one run.
///
/// Every destination is present in both maps, with zero when nobody chose it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResultSet {
    pub visits: BTreeMap<DestinationId, usize>,
    pub revenue: BTreeMap<DestinationId, f64>,
}

impl ResultSet {
    fn empty() -> Self {
        Self {
            visits: DestinationId::ALL.into_iter().map(|id| (id, 0)).collect(),
            revenue: DestinationId::ALL.into_iter().map(|id| (id, 0.0)).collect(),
        }
    }

    pub fn visits_for(&self, id: DestinationId) -> usize {
        self.visits.get(&id).copied().unwrap_or(0)
    }

    pub fn revenue_for(&self, id: DestinationId) -> f64 {
        self.revenue.get(&id).copied().unwrap_or(0.0)
    }

    pub fn total_visits(&self) -> usize {
        self.visits.values().sum()
    }

    pub fn total_revenue(&self) -> f64 {
        self.revenue.values().sum()
    }

    /// Share of all visits, as a percentage. Zero when there were no visits.
    pub fn market_share(&self, id: DestinationId) -> f64 {
        let total = self.total_visits();
        if total == 0 {
            return 0.0;
        }
        self.visits_for(id) as f64 / total as f64 * 100.0
    }

    /// Destinations by revenue, highest first. Equal revenue keeps evaluation order.
    pub fn ranked_by_revenue(&self) -> Vec<DestinationId> {
        let mut ranked = DestinationId::ALL.to_vec();
        ranked.sort_by(|a, b| self.revenue_for(*b).total_cmp(&self.revenue_for(*a)));
        ranked
    }

    /// Destination with the most revenue.
    pub fn revenue_leader(&self) -> DestinationId {
        self.ranked_by_revenue()
            .first()
            .copied()
            .unwrap_or(DestinationId::SUBJECT)
    }
}

/// Tally choices in agent order. Agents without a choice are skipped.
pub fn aggregate(agents: &[ShopperAgent]) -> ResultSet {
    let mut results = ResultSet::empty();
    for agent in agents {
        let Some(choice) = agent.chosen() else {
            continue;
        };
        *results.visits.entry(choice).or_insert(0) += 1;
        *results.revenue.entry(choice).or_insert(0.0) += agent.income.spend();
    }
    results
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::agents::IncomeClass;
    use crate::spatial::GridPoint;

    fn chosen(id: usize, income: IncomeClass, destination: DestinationId) -> ShopperAgent {
        let mut agent = ShopperAgent::new(id, GridPoint::new(0.0, 0.0), income);
        agent.record_choice(destination);
        agent
    }

    #[test]
    fn counts_and_revenue_per_destination() {
        let agents = vec![
            chosen(0, IncomeClass::High, DestinationId::MallOfZimbabwe),
            chosen(1, IncomeClass::Low, DestinationId::MallOfZimbabwe),
            chosen(2, IncomeClass::Medium, DestinationId::Groombridge),
        ];
        let results = aggregate(&agents);

        assert_eq!(results.visits_for(DestinationId::MallOfZimbabwe), 2);
        assert_eq!(results.visits_for(DestinationId::Groombridge), 1);
        assert_eq!(results.visits_for(DestinationId::HighlandPark), 0);
        assert_eq!(results.revenue_for(DestinationId::MallOfZimbabwe), 140.5);
        assert_eq!(results.revenue_for(DestinationId::Groombridge), 50.0);
        assert_eq!(results.revenue_for(DestinationId::SamLevysVillage), 0.0);
        assert_eq!(results.total_visits(), 3);
        assert_eq!(results.visits.len(), 5);
        assert_eq!(results.revenue.len(), 5);
    }

    #[test]
    fn unscored_agents_are_skipped() {
        let agents = vec![
            ShopperAgent::new(0, GridPoint::new(0.0, 0.0), IncomeClass::High),
            chosen(1, IncomeClass::High, DestinationId::HighlandPark),
        ];
        let results = aggregate(&agents);
        assert_eq!(results.total_visits(), 1);
    }

    #[test]
    fn share_and_ranking() {
        let agents = vec![
            chosen(0, IncomeClass::Medium, DestinationId::ArundelVillage),
            chosen(1, IncomeClass::Medium, DestinationId::ArundelVillage),
            chosen(2, IncomeClass::High, DestinationId::HighlandPark),
            chosen(3, IncomeClass::Low, DestinationId::Groombridge),
        ];
        let results = aggregate(&agents);

        assert_eq!(results.market_share(DestinationId::ArundelVillage), 50.0);
        assert_eq!(results.market_share(DestinationId::SamLevysVillage), 0.0);
        assert_eq!(
            results.ranked_by_revenue(),
            vec![
                DestinationId::HighlandPark,
                DestinationId::ArundelVillage,
                DestinationId::Groombridge,
                DestinationId::SamLevysVillage,
                DestinationId::MallOfZimbabwe,
            ]
        );
        assert_eq!(results.revenue_leader(), DestinationId::HighlandPark);
    }

    #[test]
    fn empty_population_has_zero_share() {
        let results = aggregate(&[]);
        assert_eq!(results.total_visits(), 0);
        assert_eq!(results.market_share(DestinationId::SUBJECT), 0.0);
    }
}
