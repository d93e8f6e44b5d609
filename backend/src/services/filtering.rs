//! Record filter predicate.
//!
//! A pure function of (record, criteria); no side effects and no ordering
//! dependency. The predicate fails closed: a record that cannot satisfy an
//! active restriction is excluded rather than causing an error.

use crate::models::{FilterCriteria, ProjectRecord, TypeMatchMode};

/// Whether `record` passes the active filter criteria.
///
/// Area bounds are inclusive on both ends. Type filtering is skipped
/// entirely when the selection is empty or contains the "all types"
/// sentinel; in that case records without any type tags pass too.
pub fn record_matches(record: &ProjectRecord, criteria: &FilterCriteria) -> bool {
    if let Some(min_area) = criteria.min_area {
        if record.total_area < min_area {
            return false;
        }
    }

    if let Some(max_area) = criteria.max_area {
        if record.total_area > max_area {
            return false;
        }
    }

    if criteria.type_filter_active() {
        match criteria.match_mode {
            TypeMatchMode::All => {
                // Record must carry every selected type; fewer tags than
                // selections can never satisfy this.
                if !criteria
                    .selected_types
                    .iter()
                    .all(|t| record.project_types.iter().any(|pt| pt == t))
                {
                    return false;
                }
            }
            TypeMatchMode::Any => {
                if !record
                    .project_types
                    .iter()
                    .any(|t| criteria.selected_types.contains(t))
                {
                    return false;
                }
            }
        }
    }

    true
}
