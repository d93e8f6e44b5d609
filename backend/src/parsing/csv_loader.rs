//! CSV ingestion of project cost records.
//!
//! Columns are located by header name, with a fall-back to the legacy fixed
//! column layout when no known headers are present (older exports carry
//! localized headers in the first row). Parsing is forgiving by contract:
//! field-level failures degrade to defaults, malformed rows are skipped
//! with a diagnostic, and only file-level problems surface as errors. The
//! store and engine assume these defaults are already applied and perform
//! no re-validation.

use anyhow::{Context, Result};
use chrono::Datelike;
use std::fs::File;
use std::io::Read;
use std::path::Path;

use crate::models::{CostGroup, ProjectRecord};

/// Column positions resolved from the header row.
#[derive(Debug, Clone, Default)]
struct ColumnMap {
    include: Option<usize>,
    project_id: Option<usize>,
    title: Option<usize>,
    types: Option<usize>,
    area: Option<usize>,
    year: Option<usize>,
    costs: [Option<usize>; CostGroup::COUNT],
}

impl ColumnMap {
    fn from_headers(headers: &csv::StringRecord) -> Self {
        let mut map = ColumnMap::default();
        for (i, raw) in headers.iter().enumerate() {
            let header = normalize_header(raw);
            if let Some(group) = CostGroup::from_code(&header) {
                map.costs[group.index()] = Some(i);
            } else if header.eq_ignore_ascii_case("Include") {
                map.include = Some(i);
            } else if header.eq_ignore_ascii_case("Project ID") {
                map.project_id = Some(i);
            } else if header.eq_ignore_ascii_case("Title") {
                map.title = Some(i);
            } else if header.eq_ignore_ascii_case("Types") {
                map.types = Some(i);
            } else if header.eq_ignore_ascii_case("Area") {
                map.area = Some(i);
            } else if header.eq_ignore_ascii_case("Year")
                || header.eq_ignore_ascii_case("Year of cost calculation")
            {
                map.year = Some(i);
            }
        }
        map
    }

    /// The legacy export layout: Include, Project ID, Title, Types, Area,
    /// then cost columns in file order (KG434 ahead of KG430, no KG490),
    /// and no year column.
    fn legacy() -> Self {
        let mut map = ColumnMap {
            include: Some(0),
            project_id: Some(1),
            title: Some(2),
            types: Some(3),
            area: Some(4),
            ..ColumnMap::default()
        };
        let file_order = [
            CostGroup::Kg220,
            CostGroup::Kg230,
            CostGroup::Kg410,
            CostGroup::Kg420,
            CostGroup::Kg434,
            CostGroup::Kg430,
            CostGroup::Kg440,
            CostGroup::Kg450,
            CostGroup::Kg460,
            CostGroup::Kg474,
            CostGroup::Kg475,
            CostGroup::Kg480,
            CostGroup::Kg550,
        ];
        for (offset, group) in file_order.iter().enumerate() {
            map.costs[group.index()] = Some(5 + offset);
        }
        map
    }

    /// Whether the header row yielded anything usable.
    fn recognized(&self) -> bool {
        self.area.is_some() || self.costs.iter().any(|c| c.is_some())
    }
}

/// Strip the unit suffix some exports append to cost headers.
fn normalize_header(raw: &str) -> String {
    let header = raw.trim();
    let header = header
        .strip_suffix("€/sqm")
        .map(str::trim_end)
        .unwrap_or(header);
    header.to_string()
}

/// Load records from a CSV file.
pub fn load_csv(path: &Path) -> Result<Vec<ProjectRecord>> {
    let file =
        File::open(path).with_context(|| format!("failed to open {}", path.display()))?;
    parse_csv(file).with_context(|| format!("failed to parse {}", path.display()))
}

/// Parse records from CSV content.
pub fn parse_csv<R: Read>(reader: R) -> Result<Vec<ProjectRecord>> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(reader);

    let headers = csv_reader
        .headers()
        .context("failed to read CSV header row")?
        .clone();

    let mut columns = ColumnMap::from_headers(&headers);
    if !columns.recognized() {
        log::warn!("no known column headers found, assuming legacy column layout");
        columns = ColumnMap::legacy();
    }

    let mut records = Vec::new();
    for (row_number, row) in csv_reader.records().enumerate() {
        let row = match row {
            Ok(row) => row,
            Err(e) => {
                log::warn!("skipping unreadable row {}: {}", row_number + 2, e);
                continue;
            }
        };

        if row.iter().all(|f| f.trim().is_empty()) {
            continue;
        }
        if row.len() < headers.len() {
            log::warn!(
                "skipping row {}: {} fields, expected {}",
                row_number + 2,
                row.len(),
                headers.len()
            );
            continue;
        }

        records.push(parse_row(&row, &columns));
    }

    log::debug!("loaded {} records", records.len());
    Ok(records)
}

fn parse_row(row: &csv::StringRecord, columns: &ColumnMap) -> ProjectRecord {
    let field = |index: Option<usize>| index.and_then(|i| row.get(i)).unwrap_or("");

    let year = match columns.year {
        Some(i) => {
            let parsed = parse_int_field(field(Some(i)));
            if parsed > 0 {
                parsed
            } else {
                current_year()
            }
        }
        None => current_year(),
    };

    let mut record = ProjectRecord {
        project_id: field(columns.project_id).trim().to_string(),
        title: field(columns.title).trim().to_string(),
        project_types: parse_types(field(columns.types)),
        total_area: parse_int_field(field(columns.area)),
        year,
        // An absent Include column keeps the record default; a present but
        // unparseable value parses to false.
        include: match columns.include {
            Some(i) => parse_bool_field(field(Some(i))),
            None => true,
        },
        cost_per_sqm: Default::default(),
    };

    for group in CostGroup::ALL {
        record
            .cost_per_sqm
            .set(group, parse_int_field(field(columns.costs[group.index()])));
    }

    record
}

/// TRUE/FALSE, 1/0, YES/NO, case-insensitive; anything else is false.
fn parse_bool_field(field: &str) -> bool {
    matches!(
        field.trim().to_ascii_uppercase().as_str(),
        "TRUE" | "1" | "YES"
    )
}

/// Integer field; 0 on failure.
fn parse_int_field(field: &str) -> i32 {
    field.trim().parse().unwrap_or(0)
}

/// Comma-joined, optionally quoted type list.
fn parse_types(raw: &str) -> Vec<String> {
    raw.trim()
        .trim_matches('"')
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

fn current_year() -> i32 {
    chrono::Utc::now().year()
}

#[cfg(test)]
#[path = "csv_loader_tests.rs"]
mod csv_loader_tests;
