//! DIN 276 cost-group universe.
//!
//! The set of cost groups is fixed: every record carries one per-sqm value
//! per group, and every summary table renders the groups in the canonical
//! order below. The (code, description) pairs form an explicit ordered
//! table; lookups never go through field names at runtime.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A DIN 276 cost-group code.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum CostGroup {
    #[serde(rename = "KG220")]
    Kg220,
    #[serde(rename = "KG230")]
    Kg230,
    #[serde(rename = "KG410")]
    Kg410,
    #[serde(rename = "KG420")]
    Kg420,
    #[serde(rename = "KG430")]
    Kg430,
    #[serde(rename = "KG434")]
    Kg434,
    #[serde(rename = "KG440")]
    Kg440,
    #[serde(rename = "KG450")]
    Kg450,
    #[serde(rename = "KG460")]
    Kg460,
    #[serde(rename = "KG474")]
    Kg474,
    #[serde(rename = "KG475")]
    Kg475,
    #[serde(rename = "KG480")]
    Kg480,
    #[serde(rename = "KG490")]
    Kg490,
    #[serde(rename = "KG550")]
    Kg550,
}

impl CostGroup {
    /// Number of cost groups.
    pub const COUNT: usize = 14;

    /// All cost groups in canonical table order (the order summary tables
    /// and exports are rendered in; not input order, not alphabetical).
    pub const ALL: [CostGroup; CostGroup::COUNT] = [
        CostGroup::Kg220,
        CostGroup::Kg230,
        CostGroup::Kg410,
        CostGroup::Kg420,
        CostGroup::Kg430,
        CostGroup::Kg434,
        CostGroup::Kg440,
        CostGroup::Kg450,
        CostGroup::Kg460,
        CostGroup::Kg474,
        CostGroup::Kg475,
        CostGroup::Kg480,
        CostGroup::Kg490,
        CostGroup::Kg550,
    ];

    /// The `KGnnn` code string.
    pub fn code(&self) -> &'static str {
        match self {
            CostGroup::Kg220 => "KG220",
            CostGroup::Kg230 => "KG230",
            CostGroup::Kg410 => "KG410",
            CostGroup::Kg420 => "KG420",
            CostGroup::Kg430 => "KG430",
            CostGroup::Kg434 => "KG434",
            CostGroup::Kg440 => "KG440",
            CostGroup::Kg450 => "KG450",
            CostGroup::Kg460 => "KG460",
            CostGroup::Kg474 => "KG474",
            CostGroup::Kg475 => "KG475",
            CostGroup::Kg480 => "KG480",
            CostGroup::Kg490 => "KG490",
            CostGroup::Kg550 => "KG550",
        }
    }

    /// Human-readable DIN 276 description.
    pub fn description(&self) -> &'static str {
        match self {
            CostGroup::Kg220 => "Site Clearance & Preparation",
            CostGroup::Kg230 => "Earthworks & Foundations",
            CostGroup::Kg410 => "Sewage, Water & Gas Systems",
            CostGroup::Kg420 => "Heating Systems",
            CostGroup::Kg430 => "Ventilation & Air Conditioning",
            CostGroup::Kg434 => "Process-Specific Installations",
            CostGroup::Kg440 => "Electrical Systems",
            CostGroup::Kg450 => "Communication & Safety Systems",
            CostGroup::Kg460 => "Conveying Systems",
            CostGroup::Kg474 => "Fire Protection Systems",
            CostGroup::Kg475 => "Security & Access Control",
            CostGroup::Kg480 => "Building & System Automation",
            CostGroup::Kg490 => "Other Technical Installations",
            CostGroup::Kg550 => "Outdoor Technical Installations",
        }
    }

    /// Position in the canonical order. Used as the index into per-group
    /// value arrays.
    pub fn index(&self) -> usize {
        *self as usize
    }

    /// Parse a `KGnnn` code, e.g. from a column header. Case-insensitive.
    pub fn from_code(code: &str) -> Option<CostGroup> {
        let code = code.trim();
        CostGroup::ALL
            .iter()
            .copied()
            .find(|g| g.code().eq_ignore_ascii_case(code))
    }
}

impl fmt::Display for CostGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}
