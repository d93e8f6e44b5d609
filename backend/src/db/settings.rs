//! Correction-factor settings persistence.
//!
//! The factor table is stored as a TOML array of (year, factor) tables.
//! Loading is forgiving by contract: a missing or unreadable settings file
//! falls back to the default table and is never surfaced to the user as an
//! error. Individual entries failing the import range check are rejected
//! with a diagnostic while the rest of the file keeps loading.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::models::{CorrectionFactor, CorrectionFactorSettings};

/// Upper bound of the accepted factor range on import paths. Programmatic
/// edits (e.g. the inflation model) are not bounded by this.
pub const MAX_IMPORT_FACTOR: f64 = 10.0;

/// Errors of the settings persistence boundary.
#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("failed to read settings file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse settings file: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("failed to serialize settings: {0}")]
    Serialize(#[from] toml::ser::Error),

    #[error("correction factor {factor} for year {year} outside (0, {}]", MAX_IMPORT_FACTOR)]
    FactorOutOfRange { year: i32, factor: f64 },
}

#[derive(Debug, Default, Serialize, Deserialize)]
struct SettingsFile {
    #[serde(default)]
    factors: Vec<CorrectionFactor>,
}

/// Check a single (year, factor) pair against the import range (0, 10].
pub fn validate_import_factor(year: i32, factor: f64) -> Result<(), SettingsError> {
    if factor > 0.0 && factor <= MAX_IMPORT_FACTOR {
        Ok(())
    } else {
        Err(SettingsError::FactorOutOfRange { year, factor })
    }
}

/// Load settings from `path`, or fall back to the default table.
///
/// Absence of the file, unreadable content, and parse failures all produce
/// the default table with a warning; this path never errors.
pub fn load_or_default(path: &Path) -> CorrectionFactorSettings {
    if !path.exists() {
        log::debug!(
            "no correction-factor settings at {}, using defaults",
            path.display()
        );
        return CorrectionFactorSettings::create_default();
    }

    match try_load(path) {
        Ok(settings) => settings,
        Err(e) => {
            log::warn!(
                "failed to load correction-factor settings from {}: {}, using defaults",
                path.display(),
                e
            );
            CorrectionFactorSettings::create_default()
        }
    }
}

/// Load settings from `path`, rejecting out-of-range entries individually.
///
/// Starts from the default table so years the file does not mention keep
/// their neutral factor.
pub fn try_load(path: &Path) -> Result<CorrectionFactorSettings, SettingsError> {
    let content = std::fs::read_to_string(path)?;
    let file: SettingsFile = toml::from_str(&content)?;

    let mut settings = CorrectionFactorSettings::create_default();
    for entry in file.factors {
        match validate_import_factor(entry.year, entry.factor) {
            Ok(()) => settings.set_factor(entry.year, entry.factor),
            Err(e) => log::warn!("rejected settings entry: {}", e),
        }
    }
    Ok(settings)
}

/// Persist the factor table to `path`.
pub fn save(path: &Path, settings: &CorrectionFactorSettings) -> Result<(), SettingsError> {
    let file = SettingsFile {
        factors: settings.entries(),
    };
    let content = toml::to_string_pretty(&file)?;
    std::fs::write(path, content)?;
    Ok(())
}
