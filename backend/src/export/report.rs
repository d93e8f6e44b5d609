//! Plain-text report rendering.

use anyhow::Result;
use std::io::Write;

use crate::models::ProjectRecord;
use crate::services::aggregation::AggregateSnapshot;

/// Render the snapshot and the working set as a text report: counts and
/// area, the summary table, the overall per-group averages, and one line
/// per record.
pub fn write_report<W: Write>(
    mut writer: W,
    snapshot: &AggregateSnapshot,
    records: &[&ProjectRecord],
) -> Result<()> {
    writeln!(writer, "Costs Export")?;
    writeln!(writer, "============")?;
    writeln!(writer)?;
    writeln!(writer, "Included records: {}", snapshot.included_count)?;
    writeln!(writer, "Average Area: {:.1} sqm", snapshot.overall.area)?;
    writeln!(writer)?;

    writeln!(writer, "Cost Group Summary (DIN 276):")?;
    writeln!(
        writer,
        "{:<11} {:<32} {:>11} {:>11} {:>11} {:>9}",
        "Cost Group", "Description", "Avg €/sqm", "Min €/sqm", "Max €/sqm", "Std Dev"
    )?;
    for summary in &snapshot.cost_group_summaries {
        writeln!(
            writer,
            "{:<11} {:<32} {:>11.2} {:>11.2} {:>11.2} {:>9.2}",
            summary.code.code(),
            summary.description,
            summary.average,
            summary.min,
            summary.max,
            summary.std_dev
        )?;
    }
    writeln!(writer)?;

    writeln!(writer, "Overall Averages (DIN 276):")?;
    for entry in &snapshot.overall.per_group {
        writeln!(
            writer,
            "Average {} ({}): {:.2} €/sqm",
            entry.code.code(),
            entry.code.description(),
            entry.average
        )?;
    }
    writeln!(writer)?;

    writeln!(writer, "Projects:")?;
    for record in records {
        writeln!(
            writer,
            "{} {} | {} | {} | {} sqm",
            if record.include { "[x]" } else { "[ ]" },
            record.project_id,
            record.title,
            record.project_types_display(),
            record.total_area
        )?;
    }

    Ok(())
}
