use mall_sim_core::DestinationId;

use crate::metrics::ExperimentResult;

pub(crate) fn header() -> Vec<String> {
    let mut columns: Vec<String> = [
        "experiment_id",
        "run_id",
        "seed",
        "phase",
        "traffic",
        "subject_attractiveness",
        "tenant_mix",
        "agent_count",
        "subject_visits",
        "subject_share",
        "subject_revenue",
        "total_revenue",
        "revenue_leader",
        "verdict",
    ]
    .iter()
    .map(|c| c.to_string())
    .collect();

    columns.extend(DestinationId::ALL.iter().map(|id| format!("visits_{}", id.key())));
    columns.extend(DestinationId::ALL.iter().map(|id| format!("revenue_{}", id.key())));
    columns
}

fn record(result: &ExperimentResult) -> Vec<String> {
    let mut row = vec![
        result.experiment_id.clone(),
        result.run_id.to_string(),
        result.seed.to_string(),
        result.phase.clone(),
        result.traffic.to_string(),
        result.subject_attractiveness.to_string(),
        result.tenant_mix.clone(),
        result.agent_count.to_string(),
        result.subject_visits.to_string(),
        result.subject_share.to_string(),
        result.subject_revenue.to_string(),
        result.total_revenue.to_string(),
        result.revenue_leader.clone(),
        result.verdict.key().to_string(),
    ];

    row.extend(DestinationId::ALL.iter().map(|id| {
        result.visits.get(id).copied().unwrap_or_default().to_string()
    }));
    row.extend(DestinationId::ALL.iter().map(|id| {
        result.revenue.get(id).copied().unwrap_or_default().to_string()
    }));
    row
}

pub(crate) fn export_to_csv_impl(
    results: &[ExperimentResult],
    file: std::fs::File,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut wtr = csv::Writer::from_writer(file);
    wtr.write_record(header())?;
    for result in results {
        wtr.write_record(record(result))?;
    }
    wtr.flush()?;
    Ok(())
}
