//! Shared builders for integration tests.

use costs_rust::api::{CostGroup, ProjectRecord};

/// Included record with the given id, area, and cost year; no types, all
/// cost groups at the "no data" sentinel.
pub fn record(id: &str, area: i32, year: i32) -> ProjectRecord {
    let mut record = ProjectRecord::new(id, year);
    record.total_area = area;
    record
}

pub fn with_types(mut record: ProjectRecord, types: &[&str]) -> ProjectRecord {
    record.project_types = types.iter().map(|s| s.to_string()).collect();
    record
}

pub fn with_cost(mut record: ProjectRecord, group: CostGroup, value: i32) -> ProjectRecord {
    record.cost_per_sqm.set(group, value);
    record
}

pub fn excluded(mut record: ProjectRecord) -> ProjectRecord {
    record.include = false;
    record
}
