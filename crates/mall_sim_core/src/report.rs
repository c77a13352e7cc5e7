//! Plain-text forecast report.

use std::fmt;

use crate::config::SimulationConfig;
use crate::destinations::DestinationId;
use crate::phase::ProjectPhase;
use crate::runner::SimulationRun;
use crate::verdict::LaunchVerdict;

/// Whole currency units with thousands separators, e.g. `$12,345`.
pub fn format_currency(amount: f64) -> String {
    let rounded = amount.round().abs() as u64;
    let digits = rounded.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    if amount < 0.0 && rounded > 0 {
        format!("-${grouped}")
    } else {
        format!("${grouped}")
    }
}

/// A run's forecast, rendered through [`fmt::Display`].
///
/// `config` is the effective configuration the run used; the subject
/// destination row is marked with `*`.
#[derive(Debug, Clone, Copy)]
pub struct ForecastReport<'a> {
    pub run: &'a SimulationRun,
    pub config: &'a SimulationConfig,
    pub phase: ProjectPhase,
}

impl ForecastReport<'_> {
    pub fn verdict(&self) -> LaunchVerdict {
        let share = self.run.results.market_share(DestinationId::SUBJECT);
        LaunchVerdict::verdict(self.phase, share)
    }

    fn pillars(&self) -> String {
        if self.config.tenant_features.is_empty() {
            return "None Selected".to_string();
        }
        self.config
            .tenant_features
            .iter()
            .map(|f| f.pillar())
            .collect::<Vec<_>>()
            .join(", ")
    }

    fn write_table(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let results = &self.run.results;
        writeln!(f, "  {:<22} {:>8} {:>10} {:>14}", "DESTINATION", "SHARE", "VISITORS", "REVENUE")?;
        for id in results.ranked_by_revenue() {
            let marker = if id.is_subject() { '*' } else { ' ' };
            let share = format!("{:.1}%", results.market_share(id));
            writeln!(
                f,
                "{marker} {:<22} {:>8} {:>10} {:>14}",
                id.name(),
                share,
                results.visits_for(id),
                format_currency(results.revenue_for(id)),
            )?;
        }
        writeln!(
            f,
            "  {:<22} {:>8} {:>10} {:>14}",
            "TOTAL",
            "100.0%",
            results.total_visits(),
            format_currency(results.total_revenue()),
        )
    }
}

impl fmt::Display for ForecastReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let traffic = if self.config.traffic {
            "PEAK HOUR (High Friction)"
        } else {
            "NORMAL FLOW"
        };

        writeln!(f, "{} Strategic Forecast", DestinationId::SUBJECT)?;
        writeln!(f, "Forecast year:      {}", self.phase.forecast_year())?;
        writeln!(f, "Project phase:      {}", self.phase)?;
        writeln!(f, "Traffic condition:  {traffic}")?;
        writeln!(f, "Tenant pillars:     {}", self.pillars())?;
        writeln!(f, "Shoppers simulated: {} (seed {})", self.run.agents.len(), self.run.seed)?;
        writeln!(f)?;
        self.write_table(f)?;
        writeln!(f)?;
        writeln!(f, "Executive verdict:  {}", self.verdict())
    }
}

/// Render the run as a text report.
pub fn render_report(run: &SimulationRun, config: &SimulationConfig, phase: ProjectPhase) -> String {
    ForecastReport { run, config, phase }.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::runner::run;

    #[test]
    fn currency_grouping() {
        assert_eq!(format_currency(0.0), "$0");
        assert_eq!(format_currency(999.4), "$999");
        assert_eq!(format_currency(1000.0), "$1,000");
        assert_eq!(format_currency(1234567.5), "$1,234,568");
        assert_eq!(format_currency(-2500.0), "-$2,500");
    }

    #[test]
    fn report_lists_every_destination() {
        let config = SimulationConfig::default().with_agent_count(200);
        let run = run(&config, 7).unwrap();
        let report = render_report(&run, &config, ProjectPhase::Stabilization);

        for id in DestinationId::ALL {
            assert!(report.contains(id.name()), "missing {id}");
        }
        assert!(report.contains("NORMAL FLOW"));
        assert!(report.contains("Tenant pillars:     Luxury Fashion, Fine Dining\n"));
        assert!(report.contains("Forecast year:      2029"));
        assert!(report.contains("* Mall of Zimbabwe"));
    }

    #[test]
    fn report_without_tenants() {
        let config = SimulationConfig::default()
            .with_agent_count(20)
            .with_traffic(true)
            .with_tenant_features([]);
        let run = run(&config, 7).unwrap();
        let report = render_report(&run, &config, ProjectPhase::Construction);
        assert!(report.contains("None Selected"));
        assert!(report.contains("PEAK HOUR"));
        assert!(report.contains("Construction"));
    }

    #[test]
    fn verdict_follows_subject_share() {
        let config = SimulationConfig::default().with_agent_count(300);
        let run = run(&config, 11).unwrap();
        let report = ForecastReport {
            run: &run,
            config: &config,
            phase: ProjectPhase::Stabilization,
        };
        let share = run.results.market_share(DestinationId::SUBJECT);

        assert_eq!(report.verdict(), LaunchVerdict::verdict(ProjectPhase::Stabilization, share));
        assert!(report.to_string().contains(report.verdict().headline()));
    }

    #[test]
    fn construction_report_is_capital_deployment() {
        let config = ProjectPhase::Construction.apply(&SimulationConfig::default().with_agent_count(50));
        let run = run(&config, 3).unwrap();
        let report = render_report(&run, &config, ProjectPhase::Construction);
        assert!(report.contains("Forecast year:      2027"));
        assert!(report.contains("Executive verdict:  CAPITAL DEPLOYMENT PHASE. Asset under construction."));
    }
}
