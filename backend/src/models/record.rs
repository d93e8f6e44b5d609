//! Project cost records.

use serde::{Deserialize, Serialize};

use crate::models::cost_groups::CostGroup;

/// Per-sqm costs of one record, one slot per cost group in canonical order.
///
/// A value of 0 is the "no data recorded" sentinel, not a measured cost;
/// statistics exclude zero slots per group before aggregating.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CostPerSqm([i32; CostGroup::COUNT]);

impl CostPerSqm {
    /// Cost table with every group set to the "no data" sentinel.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn get(&self, group: CostGroup) -> i32 {
        self.0[group.index()]
    }

    pub fn set(&mut self, group: CostGroup, value: i32) {
        self.0[group.index()] = value;
    }

    /// (group, value) pairs in canonical order.
    pub fn iter(&self) -> impl Iterator<Item = (CostGroup, i32)> + '_ {
        CostGroup::ALL.iter().map(move |g| (*g, self.0[g.index()]))
    }
}

impl FromIterator<(CostGroup, i32)> for CostPerSqm {
    fn from_iter<T: IntoIterator<Item = (CostGroup, i32)>>(iter: T) -> Self {
        let mut costs = CostPerSqm::empty();
        for (group, value) in iter {
            costs.set(group, value);
        }
        costs
    }
}

/// One construction project's cost record.
///
/// Records are created in bulk on file load and mutated in place only via
/// the `include` flag; everything else is read-only after load.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectRecord {
    pub project_id: String,
    pub title: String,
    /// Project type tags in source order. Deduplication happens at the
    /// distinct-type-universe level, not per record.
    pub project_types: Vec<String>,
    /// Gross area in sqm. Unlike cost fields, 0 is a legitimate value here,
    /// not an absence sentinel.
    pub total_area: i32,
    /// Year the costs were calculated for; drives correction-factor lookup.
    pub year: i32,
    /// Whether the record participates in statistics.
    pub include: bool,
    pub cost_per_sqm: CostPerSqm,
}

impl ProjectRecord {
    /// New empty record for the given id, included by default.
    pub fn new(project_id: impl Into<String>, year: i32) -> Self {
        Self {
            project_id: project_id.into(),
            title: String::new(),
            project_types: Vec::new(),
            total_area: 0,
            year,
            include: true,
            cost_per_sqm: CostPerSqm::empty(),
        }
    }

    /// Comma-joined type tags for display and export.
    pub fn project_types_display(&self) -> String {
        self.project_types.join(", ")
    }
}
