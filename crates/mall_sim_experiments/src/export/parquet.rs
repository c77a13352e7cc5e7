use std::sync::Arc;

use arrow::array::{ArrayRef, BooleanArray, Float64Array, StringArray, UInt64Array};
use arrow::datatypes::{DataType, Field, Schema};
use arrow::record_batch::RecordBatch;
use mall_sim_core::DestinationId;
use parquet::arrow::ArrowWriter;
use parquet::file::properties::WriterProperties;

use crate::metrics::ExperimentResult;

pub(crate) fn export_to_parquet_impl(
    results: &[ExperimentResult],
    file: std::fs::File,
) -> Result<(), Box<dyn std::error::Error>> {
    let batch = build_record_batch(results)?;
    let props = WriterProperties::builder().build();
    let mut writer = ArrowWriter::try_new(file, batch.schema(), Some(props))?;
    writer.write(&batch)?;
    writer.close()?;

    Ok(())
}

fn build_record_batch(results: &[ExperimentResult]) -> Result<RecordBatch, arrow::error::ArrowError> {
    RecordBatch::try_new(Arc::new(parquet_schema()), build_arrays(results))
}

fn parquet_schema() -> Schema {
    let mut fields = vec![
        Field::new("experiment_id", DataType::Utf8, false),
        Field::new("run_id", DataType::UInt64, false),
        Field::new("seed", DataType::UInt64, false),
        Field::new("phase", DataType::Utf8, false),
        Field::new("traffic", DataType::Boolean, false),
        Field::new("subject_attractiveness", DataType::Float64, false),
        Field::new("tenant_mix", DataType::Utf8, false),
        Field::new("agent_count", DataType::UInt64, false),
        Field::new("subject_visits", DataType::UInt64, false),
        Field::new("subject_share", DataType::Float64, false),
        Field::new("subject_revenue", DataType::Float64, false),
        Field::new("total_revenue", DataType::Float64, false),
        Field::new("revenue_leader", DataType::Utf8, false),
        Field::new("verdict", DataType::Utf8, false),
    ];
    fields.extend(
        DestinationId::ALL
            .iter()
            .map(|id| Field::new(format!("visits_{}", id.key()), DataType::UInt64, false)),
    );
    fields.extend(
        DestinationId::ALL
            .iter()
            .map(|id| Field::new(format!("revenue_{}", id.key()), DataType::Float64, false)),
    );
    Schema::new(fields)
}

fn strings(results: &[ExperimentResult], f: impl Fn(&ExperimentResult) -> &str) -> ArrayRef {
    Arc::new(StringArray::from(results.iter().map(f).collect::<Vec<_>>()))
}

fn counts(results: &[ExperimentResult], f: impl Fn(&ExperimentResult) -> u64) -> ArrayRef {
    Arc::new(UInt64Array::from(results.iter().map(f).collect::<Vec<_>>()))
}

fn floats(results: &[ExperimentResult], f: impl Fn(&ExperimentResult) -> f64) -> ArrayRef {
    Arc::new(Float64Array::from(results.iter().map(f).collect::<Vec<_>>()))
}

fn build_arrays(results: &[ExperimentResult]) -> Vec<ArrayRef> {
    let mut arrays = vec![
        strings(results, |r| r.experiment_id.as_str()),
        counts(results, |r| r.run_id as u64),
        counts(results, |r| r.seed),
        strings(results, |r| r.phase.as_str()),
        Arc::new(BooleanArray::from(results.iter().map(|r| r.traffic).collect::<Vec<_>>())) as ArrayRef,
        floats(results, |r| r.subject_attractiveness),
        strings(results, |r| r.tenant_mix.as_str()),
        counts(results, |r| r.agent_count as u64),
        counts(results, |r| r.subject_visits as u64),
        floats(results, |r| r.subject_share),
        floats(results, |r| r.subject_revenue),
        floats(results, |r| r.total_revenue),
        strings(results, |r| r.revenue_leader.as_str()),
        strings(results, |r| r.verdict.key()),
    ];
    for id in DestinationId::ALL {
        arrays.push(counts(results, move |r| r.visits.get(&id).copied().unwrap_or_default() as u64));
    }
    for id in DestinationId::ALL {
        arrays.push(floats(results, move |r| r.revenue.get(&id).copied().unwrap_or_default()));
    }
    arrays
}
