//! Domain model types: records, cost groups, filter criteria, and the
//! correction-factor table.

pub mod correction;
pub mod cost_groups;
pub mod criteria;
pub mod record;

pub use correction::{CorrectionFactor, CorrectionFactorSettings, BASE_YEAR, NEUTRAL_FACTOR};
pub use cost_groups::CostGroup;
pub use criteria::{FilterCriteria, TypeMatchMode, ALL_TYPES};
pub use record::{CostPerSqm, ProjectRecord};
