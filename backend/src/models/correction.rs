//! Year-based cost correction factors.
//!
//! Historical per-sqm costs are normalized to a common basis by multiplying
//! with a per-year factor (an inflation-style adjustment). The table is a
//! total lookup: any year not present maps to the neutral factor 1.0, so
//! callers never deal with a missing-factor case.

use chrono::Datelike;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// First year covered by the default table.
pub const BASE_YEAR: i32 = 1999;

/// Factor applied to years absent from the table.
pub const NEUTRAL_FACTOR: f64 = 1.0;

/// The current calendar year (UTC).
pub fn current_year() -> i32 {
    chrono::Utc::now().year()
}

/// A single (year, factor) entry, the unit of settings persistence and of
/// the settings-dialog listing.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CorrectionFactor {
    pub year: i32,
    pub factor: f64,
}

/// Year → multiplicative correction factor.
///
/// The table itself accepts any positive factor silently; range validation
/// on the (0, 10] import window is the ingestion side's job (`db::settings`).
/// Programmatic edits such as [`apply_inflation`](Self::apply_inflation) may
/// legitimately produce factors outside that window at extreme years.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CorrectionFactorSettings {
    year_factors: BTreeMap<i32, f64>,
}

impl CorrectionFactorSettings {
    /// Empty table: every lookup yields the neutral factor.
    pub fn empty() -> Self {
        Self {
            year_factors: BTreeMap::new(),
        }
    }

    /// Table covering [`BASE_YEAR`]..=current year with factor 1.0, so
    /// lookups in the working range are never cold.
    pub fn create_default() -> Self {
        let mut settings = Self::empty();
        for year in BASE_YEAR..=current_year() {
            settings.year_factors.insert(year, NEUTRAL_FACTOR);
        }
        settings
    }

    /// Factor for `year`; 1.0 when the year is unmapped. Never fails.
    pub fn factor_for_year(&self, year: i32) -> f64 {
        self.year_factors
            .get(&year)
            .copied()
            .unwrap_or(NEUTRAL_FACTOR)
    }

    pub fn set_factor(&mut self, year: i32, factor: f64) {
        self.year_factors.insert(year, factor);
    }

    /// All mapped entries in ascending year order.
    pub fn entries(&self) -> Vec<CorrectionFactor> {
        self.year_factors
            .iter()
            .map(|(&year, &factor)| CorrectionFactor { year, factor })
            .collect()
    }

    pub fn len(&self) -> usize {
        self.year_factors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.year_factors.is_empty()
    }

    /// Reset every mapped year back to the neutral factor.
    pub fn reset_to_default(&mut self) {
        for factor in self.year_factors.values_mut() {
            *factor = NEUTRAL_FACTOR;
        }
    }

    /// Apply a compound inflation model across the mapped years:
    /// factor(year) = (1 + annual_rate)^(year - BASE_YEAR).
    pub fn apply_inflation(&mut self, annual_rate: f64) {
        for (year, factor) in self.year_factors.iter_mut() {
            let years_from_base = year - BASE_YEAR;
            *factor = (1.0 + annual_rate).powi(years_from_base);
        }
    }
}

impl Default for CorrectionFactorSettings {
    fn default() -> Self {
        Self::create_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_covers_base_to_current() {
        let settings = CorrectionFactorSettings::create_default();
        assert_eq!(settings.factor_for_year(BASE_YEAR), 1.0);
        assert_eq!(settings.factor_for_year(current_year()), 1.0);
        assert_eq!(
            settings.len(),
            (current_year() - BASE_YEAR + 1) as usize
        );
    }

    #[test]
    fn test_unmapped_year_is_neutral() {
        let settings = CorrectionFactorSettings::empty();
        assert_eq!(settings.factor_for_year(1850), 1.0);
        assert_eq!(settings.factor_for_year(3000), 1.0);
    }

    #[test]
    fn test_set_and_lookup() {
        let mut settings = CorrectionFactorSettings::empty();
        settings.set_factor(2000, 1.5);
        assert_eq!(settings.factor_for_year(2000), 1.5);
        assert_eq!(settings.factor_for_year(2001), 1.0);
    }

    #[test]
    fn test_entries_sorted_by_year() {
        let mut settings = CorrectionFactorSettings::empty();
        settings.set_factor(2010, 1.2);
        settings.set_factor(2001, 1.05);
        settings.set_factor(2020, 1.4);

        let years: Vec<i32> = settings.entries().iter().map(|e| e.year).collect();
        assert_eq!(years, vec![2001, 2010, 2020]);
    }

    #[test]
    fn test_reset_to_default() {
        let mut settings = CorrectionFactorSettings::create_default();
        settings.set_factor(2005, 2.5);
        settings.reset_to_default();
        assert_eq!(settings.factor_for_year(2005), 1.0);
    }

    #[test]
    fn test_apply_inflation() {
        let mut settings = CorrectionFactorSettings::create_default();
        settings.apply_inflation(0.02);

        assert_eq!(settings.factor_for_year(BASE_YEAR), 1.0);
        let expected = 1.02f64.powi(10);
        assert!((settings.factor_for_year(BASE_YEAR + 10) - expected).abs() < 1e-12);
        // Later years compound further.
        assert!(settings.factor_for_year(BASE_YEAR + 20) > settings.factor_for_year(BASE_YEAR + 10));
    }
}
