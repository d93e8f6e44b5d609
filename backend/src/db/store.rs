//! In-memory project record store.
//!
//! The store owns the ordered record collection for the lifetime of a
//! session. Records are replaced wholesale on load and mutated in place
//! only through the `include` flag; there is no partial deletion.

use crate::models::{FilterCriteria, ProjectRecord};
use crate::services::filtering::record_matches;

/// Ordered, exclusively-owned collection of project records.
#[derive(Debug, Clone, Default)]
pub struct ProjectStore {
    records: Vec<ProjectRecord>,
}

impl ProjectStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the entire record set, discarding the previous one.
    pub fn replace_all(&mut self, records: Vec<ProjectRecord>) {
        self.records = records;
    }

    pub fn records(&self) -> &[ProjectRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Set one record's inclusion flag. Returns false (and changes nothing)
    /// when the index is out of range.
    pub fn set_include(&mut self, index: usize, include: bool) -> bool {
        match self.records.get_mut(index) {
            Some(record) => {
                record.include = include;
                true
            }
            None => false,
        }
    }

    /// Set the inclusion flag on every record the filter matches right now,
    /// regardless of its current flag. Returns the number of matched
    /// records. Callers trigger one recomputation after the batch.
    pub fn set_include_for_matches(&mut self, criteria: &FilterCriteria, include: bool) -> usize {
        let mut matched = 0;
        for record in &mut self.records {
            if record_matches(record, criteria) {
                record.include = include;
                matched += 1;
            }
        }
        matched
    }

    /// Records that are both included and pass the filter.
    pub fn included_count(&self, criteria: &FilterCriteria) -> usize {
        self.records
            .iter()
            .filter(|r| r.include && record_matches(r, criteria))
            .count()
    }

    /// Sorted distinct project-type universe across all records. The type
    /// picker prepends the "all types" sentinel to this list.
    pub fn distinct_types(&self) -> Vec<String> {
        let mut types: Vec<String> = self
            .records
            .iter()
            .flat_map(|r| r.project_types.iter().cloned())
            .collect();
        types.sort();
        types.dedup();
        types
    }
}
