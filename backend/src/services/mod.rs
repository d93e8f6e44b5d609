//! Service layer: filtering, statistics, aggregation, and the session
//! controller that wires mutations to recomputation.

pub mod aggregation;
pub mod filtering;
pub mod session;
pub mod statistics;

pub use aggregation::{
    aggregate, working_set, AggregateSnapshot, CostGroupSummary, GroupAverage, OverallAverages,
};
pub use filtering::record_matches;
pub use session::AnalysisSession;
