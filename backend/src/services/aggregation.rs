//! Statistics aggregation over the working set.
//!
//! The engine is deliberately non-incremental: every mutation (inclusion
//! toggle, filter change, correction-factor edit, reload) triggers a full
//! recomputation. Datasets are small (tens to low-hundreds of records), so
//! the linear pass is effectively free and there are no partial sums that
//! can go stale.

use serde::{Deserialize, Serialize};

use crate::models::{CorrectionFactorSettings, CostGroup, FilterCriteria, ProjectRecord};
use crate::services::filtering::record_matches;
use crate::services::statistics;

/// Per-cost-group summary row, rendered in canonical group order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CostGroupSummary {
    pub code: CostGroup,
    pub description: String,
    pub average: f64,
    pub min: f64,
    pub max: f64,
    pub std_dev: f64,
}

/// Overall average for a single cost group; 0.0 when the group has no data
/// in the working set.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GroupAverage {
    pub code: CostGroup,
    pub average: f64,
}

/// Scalar overview of the working set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OverallAverages {
    /// Mean total area over the working set. Unlike cost fields, a zero
    /// area is a real value and stays in this mean.
    pub area: f64,
    /// One entry per cost group in canonical order. Where a summary row
    /// exists its average is repeated here verbatim, so the overview and
    /// the summary table always agree.
    pub per_group: Vec<GroupAverage>,
}

/// Full statistics snapshot produced by [`aggregate`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AggregateSnapshot {
    /// Number of records in the working set.
    pub included_count: usize,
    pub overall: OverallAverages,
    /// Summary rows for cost groups with at least one nonzero value,
    /// in canonical group order. Groups without data produce no row.
    pub cost_group_summaries: Vec<CostGroupSummary>,
}

impl AggregateSnapshot {
    /// Snapshot of an empty working set: zero scalars, no summary rows.
    pub fn empty() -> Self {
        Self {
            included_count: 0,
            overall: OverallAverages {
                area: 0.0,
                per_group: CostGroup::ALL
                    .iter()
                    .map(|&code| GroupAverage { code, average: 0.0 })
                    .collect(),
            },
            cost_group_summaries: Vec::new(),
        }
    }

    /// Overall average for a group; 0.0 when the group has no data.
    pub fn group_average(&self, code: CostGroup) -> f64 {
        self.overall.per_group[code.index()].average
    }

    /// Summary row for a group, if the working set has data for it.
    pub fn summary_for(&self, code: CostGroup) -> Option<&CostGroupSummary> {
        self.cost_group_summaries.iter().find(|s| s.code == code)
    }
}

/// Select the working set: included records passing the active filter.
pub fn working_set<'a>(
    records: &'a [ProjectRecord],
    criteria: &FilterCriteria,
) -> Vec<&'a ProjectRecord> {
    records
        .iter()
        .filter(|r| r.include && record_matches(r, criteria))
        .collect()
}

/// Compute the full statistics snapshot for the current record, filter, and
/// correction-table state.
///
/// This is a total function: any well-formed input produces a snapshot, and
/// recomputing with unchanged inputs yields a bit-identical result. Cost
/// values of 0 are treated as "no data" per group; the sentinel test is on
/// the raw value, before the correction factor is applied.
pub fn aggregate(
    records: &[ProjectRecord],
    criteria: &FilterCriteria,
    factors: &CorrectionFactorSettings,
) -> AggregateSnapshot {
    let working = working_set(records, criteria);
    if working.is_empty() {
        return AggregateSnapshot::empty();
    }

    let areas: Vec<f64> = working.iter().map(|r| r.total_area as f64).collect();
    let area = statistics::mean(&areas);

    let mut per_group = Vec::with_capacity(CostGroup::COUNT);
    let mut cost_group_summaries = Vec::new();

    for code in CostGroup::ALL {
        let values: Vec<f64> = working
            .iter()
            .filter(|r| r.cost_per_sqm.get(code) > 0)
            .map(|r| r.cost_per_sqm.get(code) as f64 * factors.factor_for_year(r.year))
            .collect();

        if values.is_empty() {
            per_group.push(GroupAverage { code, average: 0.0 });
            continue;
        }

        let stats = statistics::summarize(&values);
        per_group.push(GroupAverage {
            code,
            average: stats.mean,
        });
        cost_group_summaries.push(CostGroupSummary {
            code,
            description: code.description().to_string(),
            average: stats.mean,
            min: stats.min,
            max: stats.max,
            std_dev: stats.std_dev,
        });
    }

    AggregateSnapshot {
        included_count: working.len(),
        overall: OverallAverages { area, per_group },
        cost_group_summaries,
    }
}

#[cfg(test)]
#[path = "aggregation_tests.rs"]
mod aggregation_tests;
