//! Parquet export of realized agents for plotting.
//!
//! One row per shopper: grid position, projected lat/lng, income code and the
//! chosen destination (null if the agent was never scored).

use std::error::Error;
use std::fs::File;
use std::path::Path;
use std::sync::Arc;

use arrow::array::{ArrayRef, Float64Array, StringArray, UInt64Array, UInt8Array};
use arrow::datatypes::{DataType, Field, Schema};
use arrow::record_batch::RecordBatch;
use parquet::arrow::ArrowWriter;

use crate::agents::ShopperAgent;
use crate::spatial::GridProjection;

fn agent_schema() -> Schema {
    Schema::new(vec![
        Field::new("agent_id", DataType::UInt64, false),
        Field::new("x", DataType::Float64, false),
        Field::new("y", DataType::Float64, false),
        Field::new("lat", DataType::Float64, false),
        Field::new("lng", DataType::Float64, false),
        Field::new("income", DataType::UInt8, false),
        Field::new("destination_index", DataType::UInt8, true),
        Field::new("destination", DataType::Utf8, true),
    ])
}

pub fn write_agents_parquet<P: AsRef<Path>>(
    path: P,
    agents: &[ShopperAgent],
    projection: &GridProjection,
) -> Result<(), Box<dyn Error>> {
    let mut agent_id = Vec::with_capacity(agents.len());
    let mut x = Vec::with_capacity(agents.len());
    let mut y = Vec::with_capacity(agents.len());
    let mut lat = Vec::with_capacity(agents.len());
    let mut lng = Vec::with_capacity(agents.len());
    let mut income = Vec::with_capacity(agents.len());
    let mut destination_index = Vec::with_capacity(agents.len());
    let mut destination = Vec::with_capacity(agents.len());

    for agent in agents {
        let (agent_lat, agent_lng) = projection.to_lat_lng(agent.position);
        agent_id.push(agent.id as u64);
        x.push(agent.position.x);
        y.push(agent.position.y);
        lat.push(agent_lat);
        lng.push(agent_lng);
        income.push(agent.income.code());
        destination_index.push(agent.chosen().map(|id| id.index() as u8));
        destination.push(agent.chosen().map(|id| id.name()));
    }

    let schema = Arc::new(agent_schema());
    let arrays: Vec<ArrayRef> = vec![
        Arc::new(UInt64Array::from(agent_id)),
        Arc::new(Float64Array::from(x)),
        Arc::new(Float64Array::from(y)),
        Arc::new(Float64Array::from(lat)),
        Arc::new(Float64Array::from(lng)),
        Arc::new(UInt8Array::from(income)),
        Arc::new(UInt8Array::from(destination_index)),
        Arc::new(StringArray::from(destination)),
    ];

    let batch = RecordBatch::try_new(schema.clone(), arrays)?;
    let file = File::create(path)?;
    let mut writer = ArrowWriter::try_new(file, schema, None)?;
    writer.write(&batch)?;
    writer.close()?;
    Ok(())
}
