//! Event-driven analysis session.
//!
//! The session owns the record store, the filter criteria, and the
//! correction-factor table, and keeps a statistics snapshot consistent with
//! them: every mutating call runs to completion and recomputes the snapshot
//! synchronously before returning. There is no observer graph and no
//! deferred propagation. Presentation layers call a mutator, then read
//! [`snapshot`](AnalysisSession::snapshot).

use std::collections::HashSet;

use crate::db::ProjectStore;
use crate::models::{
    CorrectionFactorSettings, FilterCriteria, ProjectRecord, TypeMatchMode, ALL_TYPES,
};
use crate::services::aggregation::{aggregate, AggregateSnapshot};

/// Single-threaded controller over one record set.
#[derive(Debug, Clone)]
pub struct AnalysisSession {
    store: ProjectStore,
    criteria: FilterCriteria,
    factors: CorrectionFactorSettings,
    snapshot: AggregateSnapshot,
}

impl AnalysisSession {
    /// Session with an empty record set and the default factor table.
    pub fn new() -> Self {
        Self::with_settings(CorrectionFactorSettings::create_default())
    }

    /// Session with an empty record set and a caller-provided factor table
    /// (typically from [`db::settings::load_or_default`](crate::db::settings)).
    pub fn with_settings(factors: CorrectionFactorSettings) -> Self {
        Self {
            store: ProjectStore::new(),
            criteria: FilterCriteria::default(),
            factors,
            snapshot: AggregateSnapshot::empty(),
        }
    }

    // ==================== read access ====================

    /// The statistics snapshot matching the current state.
    pub fn snapshot(&self) -> &AggregateSnapshot {
        &self.snapshot
    }

    pub fn criteria(&self) -> &FilterCriteria {
        &self.criteria
    }

    pub fn correction_settings(&self) -> &CorrectionFactorSettings {
        &self.factors
    }

    pub fn store(&self) -> &ProjectStore {
        &self.store
    }

    /// Records in the current working set (included and passing the filter).
    pub fn included_count(&self) -> usize {
        self.snapshot.included_count
    }

    /// Type-picker entries: the "all types" sentinel followed by the sorted
    /// distinct type universe of the loaded records.
    pub fn available_types(&self) -> Vec<String> {
        let mut types = vec![ALL_TYPES.to_string()];
        types.extend(self.store.distinct_types());
        types
    }

    /// Working-set view of the loaded records, for export collaborators.
    pub fn working_records(&self) -> Vec<&ProjectRecord> {
        crate::services::aggregation::working_set(self.store.records(), &self.criteria)
    }

    // ==================== mutations ====================
    // Every mutator recomputes before returning.

    /// Replace the loaded record set. Callers hand over only successfully
    /// parsed batches, so a failed load never reaches this point and the
    /// previous set stays untouched.
    pub fn load_records(&mut self, records: Vec<ProjectRecord>) {
        self.store.replace_all(records);
        self.recompute();
    }

    pub fn set_min_area(&mut self, min_area: Option<i32>) {
        self.criteria.min_area = min_area;
        self.recompute();
    }

    pub fn set_max_area(&mut self, max_area: Option<i32>) {
        self.criteria.max_area = max_area;
        self.recompute();
    }

    pub fn set_selected_types(&mut self, selected_types: HashSet<String>) {
        self.criteria.selected_types = selected_types;
        self.recompute();
    }

    pub fn set_match_mode(&mut self, match_mode: TypeMatchMode) {
        self.criteria.match_mode = match_mode;
        self.recompute();
    }

    /// Clear all filter restrictions.
    pub fn reset_filters(&mut self) {
        self.criteria = FilterCriteria::default();
        self.recompute();
    }

    /// Toggle one record's inclusion flag. Returns false for an
    /// out-of-range index (no recompute happens in that case).
    pub fn set_include(&mut self, index: usize, include: bool) -> bool {
        if self.store.set_include(index, include) {
            self.recompute();
            true
        } else {
            false
        }
    }

    /// Include every record the current filter matches. One recompute for
    /// the whole batch. Returns the match count.
    pub fn include_matches(&mut self) -> usize {
        let matched = self.store.set_include_for_matches(&self.criteria, true);
        self.recompute();
        matched
    }

    /// Exclude every record the current filter matches. One recompute for
    /// the whole batch. Returns the match count.
    pub fn exclude_matches(&mut self) -> usize {
        let matched = self.store.set_include_for_matches(&self.criteria, false);
        self.recompute();
        matched
    }

    pub fn set_factor(&mut self, year: i32, factor: f64) {
        self.factors.set_factor(year, factor);
        self.recompute();
    }

    /// Swap in a whole factor table, e.g. after a settings-dialog apply.
    pub fn replace_correction_settings(&mut self, factors: CorrectionFactorSettings) {
        self.factors = factors;
        self.recompute();
    }

    fn recompute(&mut self) {
        self.snapshot = aggregate(self.store.records(), &self.criteria, &self.factors);
        log::debug!(
            "recomputed snapshot: {} of {} records in working set, {} summary rows",
            self.snapshot.included_count,
            self.store.len(),
            self.snapshot.cost_group_summaries.len()
        );
    }
}

impl Default for AnalysisSession {
    fn default() -> Self {
        Self::new()
    }
}
