//! Owned in-memory storage and settings persistence.
//!
//! There is no shared or background state: the [`ProjectStore`] and the
//! correction-factor table are owned exclusively by the single control flow
//! that reads them (normally an [`AnalysisSession`](crate::services::session)).

pub mod settings;
pub mod store;

pub use settings::{load_or_default, save, try_load, validate_import_factor, SettingsError};
pub use store::ProjectStore;
