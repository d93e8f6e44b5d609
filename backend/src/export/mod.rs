//! Export renderers for the working set and statistics snapshot.
//!
//! Exporters consume engine output verbatim and never recompute statistics;
//! the only shared logic is the correction-factor lookup, which must be the
//! same one the engine used so exported figures match displayed ones.

pub mod csv_export;
pub mod json;
pub mod report;

pub use csv_export::{export_records, export_summary, write_records_csv, write_summary_csv};
pub use json::{snapshot_to_json, write_export_json, ExportPayload};
pub use report::write_report;
