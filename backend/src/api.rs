//! Public API surface of the analysis engine.
//!
//! This file consolidates the domain and DTO types consumers work with.
//! All DTO types derive Serialize/Deserialize for JSON serialization.

pub use crate::models::correction::{
    CorrectionFactor, CorrectionFactorSettings, BASE_YEAR, NEUTRAL_FACTOR,
};
pub use crate::models::cost_groups::CostGroup;
pub use crate::models::criteria::{FilterCriteria, TypeMatchMode, ALL_TYPES};
pub use crate::models::record::{CostPerSqm, ProjectRecord};

pub use crate::services::aggregation::{
    aggregate, working_set, AggregateSnapshot, CostGroupSummary, GroupAverage, OverallAverages,
};
pub use crate::services::filtering::record_matches;
pub use crate::services::session::AnalysisSession;

pub use crate::db::settings::SettingsError;
pub use crate::db::store::ProjectStore;
