//! JSON rendering of the statistics snapshot for UI consumers.

use anyhow::Result;
use serde::Serialize;
use std::io::Write;

use crate::models::ProjectRecord;
use crate::services::aggregation::AggregateSnapshot;

/// Snapshot plus the working set it was computed from, as one payload.
#[derive(Debug, Serialize)]
pub struct ExportPayload<'a> {
    pub records: Vec<&'a ProjectRecord>,
    pub snapshot: &'a AggregateSnapshot,
}

/// Pretty-printed JSON of the snapshot alone.
pub fn snapshot_to_json(snapshot: &AggregateSnapshot) -> Result<String> {
    Ok(serde_json::to_string_pretty(snapshot)?)
}

/// Write the full payload (working set + snapshot) as JSON.
pub fn write_export_json<W: Write>(
    writer: W,
    records: &[&ProjectRecord],
    snapshot: &AggregateSnapshot,
) -> Result<()> {
    let payload = ExportPayload {
        records: records.to_vec(),
        snapshot,
    };
    serde_json::to_writer_pretty(writer, &payload)?;
    Ok(())
}
