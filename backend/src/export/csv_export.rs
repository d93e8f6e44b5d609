//! CSV export of the working set and the summary table.
//!
//! The exporter renders what it is given verbatim: the working set and the
//! already-ordered summary rows come straight from the engine, and the
//! corrected-value columns reuse the identical per-year factor lookup, so
//! exported and displayed figures always agree.

use anyhow::{Context, Result};
use std::io::Write;
use std::path::Path;

use crate::models::{CorrectionFactorSettings, CostGroup, ProjectRecord};
use crate::services::aggregation::CostGroupSummary;

/// Write the records table: identity columns, the applied correction
/// factor, raw per-group costs in canonical order, the cost year, and the
/// corrected per-group costs.
pub fn write_records_csv<W: Write>(
    writer: W,
    records: &[&ProjectRecord],
    factors: &CorrectionFactorSettings,
) -> Result<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);

    let mut header = vec![
        "Include".to_string(),
        "Project ID".to_string(),
        "Title".to_string(),
        "Types".to_string(),
        "Area".to_string(),
        "Correction Factor".to_string(),
    ];
    for group in CostGroup::ALL {
        header.push(format!("{} €/sqm", group.code()));
    }
    header.push("Year".to_string());
    for group in CostGroup::ALL {
        header.push(format!("{} corrected €/sqm", group.code()));
    }
    csv_writer.write_record(&header)?;

    for record in records {
        let factor = factors.factor_for_year(record.year);

        let mut row = vec![
            if record.include { "TRUE" } else { "FALSE" }.to_string(),
            record.project_id.clone(),
            record.title.clone(),
            record.project_types_display(),
            record.total_area.to_string(),
            format!("{:.4}", factor),
        ];
        for group in CostGroup::ALL {
            row.push(record.cost_per_sqm.get(group).to_string());
        }
        row.push(record.year.to_string());
        for group in CostGroup::ALL {
            row.push(format!(
                "{:.2}",
                record.cost_per_sqm.get(group) as f64 * factor
            ));
        }
        csv_writer.write_record(&row)?;
    }

    csv_writer.flush()?;
    Ok(())
}

/// Write the cost-group summary table (already in canonical order).
pub fn write_summary_csv<W: Write>(writer: W, summaries: &[CostGroupSummary]) -> Result<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);

    csv_writer.write_record([
        "Cost Group",
        "Description",
        "Average €/sqm",
        "Min €/sqm",
        "Max €/sqm",
        "Std Dev",
    ])?;

    for summary in summaries {
        csv_writer.write_record([
            summary.code.code(),
            summary.description.as_str(),
            format!("{:.2}", summary.average).as_str(),
            format!("{:.2}", summary.min).as_str(),
            format!("{:.2}", summary.max).as_str(),
            format!("{:.2}", summary.std_dev).as_str(),
        ])?;
    }

    csv_writer.flush()?;
    Ok(())
}

/// Write the records table to a file.
pub fn export_records(
    path: &Path,
    records: &[&ProjectRecord],
    factors: &CorrectionFactorSettings,
) -> Result<()> {
    let file = std::fs::File::create(path)
        .with_context(|| format!("failed to create {}", path.display()))?;
    write_records_csv(file, records, factors)
}

/// Write the summary table to a file.
pub fn export_summary(path: &Path, summaries: &[CostGroupSummary]) -> Result<()> {
    let file = std::fs::File::create(path)
        .with_context(|| format!("failed to create {}", path.display()))?;
    write_summary_csv(file, summaries)
}
