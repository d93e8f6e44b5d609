//! Filter criteria held by the active session.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Sentinel entry in `selected_types` meaning "do not filter by type".
///
/// The type picker offers this alongside the real type universe; selecting
/// it disables type filtering even when other types are selected too.
pub const ALL_TYPES: &str = "All types";

/// How a multi-type selection matches against a record's type tags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum TypeMatchMode {
    /// Record passes if it carries at least one selected type.
    #[default]
    Any,
    /// Record passes only if it carries every selected type.
    All,
}

/// Transient filter state. An unset bound or empty type selection means
/// "no restriction" on that axis.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct FilterCriteria {
    /// Inclusive lower area bound in sqm.
    pub min_area: Option<i32>,
    /// Inclusive upper area bound in sqm.
    pub max_area: Option<i32>,
    pub selected_types: HashSet<String>,
    pub match_mode: TypeMatchMode,
}

impl FilterCriteria {
    /// Criteria that pass every record.
    pub fn unrestricted() -> Self {
        Self::default()
    }

    /// Whether the type axis participates in filtering at all. An empty
    /// selection or one containing the [`ALL_TYPES`] sentinel is type-blind.
    pub fn type_filter_active(&self) -> bool {
        !self.selected_types.is_empty() && !self.selected_types.contains(ALL_TYPES)
    }
}
