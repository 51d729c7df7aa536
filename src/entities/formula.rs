//! Vertical rod formula records
//!
//! One [`DeviceFormula`] per device series key. The numeric constants live in
//! `data/rod_formulas.yaml`; this module only describes their shape.

use serde::{Deserialize, Serialize};

/// Exit device family a rod series belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeviceFamily {
    /// Concealed vertical rod
    Cvr,
    /// Surface vertical rod
    Svr,
}

impl std::fmt::Display for DeviceFamily {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DeviceFamily::Cvr => write!(f, "CVR"),
            DeviceFamily::Svr => write!(f, "SVR"),
        }
    }
}

/// Which measurement a computed extension is taken from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExtensionBase {
    /// `door_height - aff - extension_offset`
    Opening,
    /// `door_height - aff - height_offset - extension_offset`
    Span,
}

/// How a series decides on, and sizes, its extension rod
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum ExtensionRule {
    /// Extension length is computed from the measurements once the usable
    /// span exceeds `max_standard_span`; the top rod then snaps to
    /// `standard_top_rod`.
    Computed {
        max_standard_span: f64,
        standard_top_rod: f64,
        extension_offset: f64,
        base: ExtensionBase,
    },

    /// A fixed-length extension is used once `door_height - aff` exceeds
    /// `max_opening`; the top rod absorbs the remainder less
    /// `top_rod_adjustment`.
    Fixed {
        max_opening: f64,
        extension_length: f64,
        top_rod_adjustment: f64,
    },
}

/// Cut-length constants for one device series
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeviceFormula {
    /// Lookup key, e.g. `CVR_8400_MD8600_STD`
    pub key: String,

    /// Display label for selection lists
    pub label: String,

    pub family: DeviceFamily,

    /// Subtracted from `door_height - aff` to get the usable top rod span
    pub height_offset: f64,

    pub extension: ExtensionRule,

    /// Subtracted from the AFF to get the bottom rod. Absent for
    /// less-bottom-rod variants.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bottom_rod_offset: Option<f64>,
}

impl DeviceFormula {
    /// True when the series ships without a bottom rod
    pub fn is_less_bottom_rod(&self) -> bool {
        self.bottom_rod_offset.is_none()
    }
}

/// The full rod formula table
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RodFormulaTable {
    pub revision: String,

    /// Subtracted from the door width for crossbar-only devices
    pub crossbar_deduction: f64,

    pub series: Vec<DeviceFormula>,
}

impl RodFormulaTable {
    /// Look up a series by key (case-insensitive)
    pub fn get(&self, key: &str) -> Option<&DeviceFormula> {
        self.series
            .iter()
            .find(|f| f.key.eq_ignore_ascii_case(key.trim()))
    }
}
