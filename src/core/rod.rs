//! Vertical rod and crossbar length calculator
//!
//! Given a device type, a series key and the measured door height / AFF (or
//! door width for crossbar-only devices) this produces top rod, bottom rod,
//! extension rod and crossbar cut lengths. Every output is rounded up to the
//! next quarter inch; raw values at or below zero round to exactly zero and
//! are flagged with a warning rather than rejected.

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::core::error::{require_positive, CalcError};
use crate::core::measure::{round_up_quarter, Inches};
use crate::entities::formula::{
    DeviceFamily, DeviceFormula, ExtensionBase, ExtensionRule, RodFormulaTable,
};

/// Device type selected by the user
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeviceType {
    /// Concealed vertical rod device
    Cvr,
    /// Surface vertical rod device
    Svr,
    /// Crossbar only (90 series), no rods
    Crossbar,
}

impl DeviceType {
    /// Rod family for rod devices, `None` for crossbar-only
    pub fn family(self) -> Option<DeviceFamily> {
        match self {
            DeviceType::Cvr => Some(DeviceFamily::Cvr),
            DeviceType::Svr => Some(DeviceFamily::Svr),
            DeviceType::Crossbar => None,
        }
    }
}

impl std::fmt::Display for DeviceType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DeviceType::Cvr => write!(f, "CVR"),
            DeviceType::Svr => write!(f, "SVR"),
            DeviceType::Crossbar => write!(f, "Crossbar"),
        }
    }
}

/// Measurements and selections for one calculation.
///
/// Fields mirror the form inputs: anything may be absent, and absence of a
/// required field is reported as a validation error.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RodRequest {
    pub device: Option<DeviceType>,
    pub series: Option<String>,
    pub door_height: Option<f64>,
    pub aff: Option<f64>,
    pub door_width: Option<f64>,
}

/// Rounded cut lengths. `None` means not applicable to the device.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RodResult {
    pub device: DeviceType,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub series: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub top_rod: Option<Inches>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub bottom_rod: Option<Inches>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub extension: Option<Inches>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub crossbar: Option<Inches>,

    /// Advisory notes, e.g. a rod length that rounded to zero
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub warnings: Vec<String>,
}

impl RodResult {
    /// True when an extension rod is part of the result
    pub fn needs_extension(&self) -> bool {
        self.extension.is_some_and(|e| !e.is_zero())
    }
}

/// Unrounded rod lengths for one formula evaluation
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RawRods {
    pub top_rod: f64,
    pub extension: f64,
    pub bottom_rod: Option<f64>,
}

/// Evaluate a series formula without rounding.
///
/// Exactly one of {computed top rod, standard top rod} applies; the
/// extension is zero unless the series threshold is exceeded.
pub fn raw_rod_lengths(formula: &DeviceFormula, door_height: f64, aff: f64) -> RawRods {
    let opening = door_height - aff;
    let span = opening - formula.height_offset;

    let (top_rod, extension) = match formula.extension {
        ExtensionRule::Computed {
            max_standard_span,
            standard_top_rod,
            extension_offset,
            base,
        } => {
            if span > max_standard_span {
                let extension = match base {
                    ExtensionBase::Opening => opening - extension_offset,
                    ExtensionBase::Span => span - extension_offset,
                };
                trace!(span, max_standard_span, extension, "span exceeds standard rod");
                (standard_top_rod, extension)
            } else {
                (span, 0.0)
            }
        }
        ExtensionRule::Fixed {
            max_opening,
            extension_length,
            top_rod_adjustment,
        } => {
            if opening > max_opening {
                trace!(opening, max_opening, "opening exceeds standard rod, fixed extension");
                (
                    opening - extension_length - formula.height_offset - top_rod_adjustment,
                    extension_length,
                )
            } else {
                (span, 0.0)
            }
        }
    };

    RawRods {
        top_rod,
        extension,
        bottom_rod: formula.bottom_rod_offset.map(|offset| aff - offset),
    }
}

/// Calculate cut lengths for a request against the formula table
pub fn calculate(table: &RodFormulaTable, request: &RodRequest) -> Result<RodResult, CalcError> {
    let device = request.device.ok_or(CalcError::Missing {
        field: "Device Type",
    })?;
    debug!(?device, series = ?request.series, door_height = ?request.door_height,
        aff = ?request.aff, door_width = ?request.door_width, "rod calculation");

    // A door width alongside a rod device still yields a crossbar length
    let crossbar = match device {
        DeviceType::Crossbar => Some(crossbar_length(
            table,
            require_positive("Door Width", request.door_width)?,
        )),
        _ => request
            .door_width
            .filter(|w| w.is_finite() && *w > 0.0)
            .map(|w| crossbar_length(table, w)),
    };

    let Some(family) = device.family() else {
        return Ok(RodResult {
            device,
            series: None,
            top_rod: None,
            bottom_rod: None,
            extension: None,
            crossbar,
            warnings: Vec::new(),
        });
    };

    let door_height = require_positive("Door Height", request.door_height)?;
    let aff = require_positive("AFF", request.aff)?;

    let key = request
        .series
        .as_deref()
        .map(str::trim)
        .filter(|k| !k.is_empty())
        .ok_or(CalcError::Missing {
            field: "Device Series",
        })?;

    if door_height <= aff {
        return Err(CalcError::HeightNotAboveAff { door_height, aff });
    }

    let formula = table.get(key).ok_or_else(|| CalcError::UnknownSeries {
        key: key.to_string(),
    })?;
    if formula.family != family {
        return Err(CalcError::FamilyMismatch {
            key: formula.key.clone(),
            expected: family.to_string(),
            actual: formula.family.to_string(),
        });
    }

    let raw = raw_rod_lengths(formula, door_height, aff);
    let mut warnings = Vec::new();
    if raw.top_rod <= 0.0 || raw.bottom_rod.is_some_and(|b| b <= 0.0) {
        warnings.push(
            "Calculations resulted in a non-positive rod length. Please verify door height, AFF, and device series."
                .to_string(),
        );
    }

    Ok(RodResult {
        device,
        series: Some(formula.key.clone()),
        top_rod: Some(round_up_quarter(raw.top_rod)),
        bottom_rod: raw.bottom_rod.map(round_up_quarter),
        extension: Some(round_up_quarter(raw.extension)),
        crossbar,
        warnings,
    })
}

fn crossbar_length(table: &RodFormulaTable, door_width: f64) -> Inches {
    round_up_quarter(door_width - table.crossbar_deduction)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn formula_8400() -> DeviceFormula {
        DeviceFormula {
            key: "CVR_8400_MD8600_STD".to_string(),
            label: "STD Rods: 8400 / MD8600".to_string(),
            family: DeviceFamily::Cvr,
            height_offset: 13.0,
            extension: ExtensionRule::Computed {
                max_standard_span: 42.75,
                standard_top_rod: 35.0,
                extension_offset: 49.0,
                base: ExtensionBase::Opening,
            },
            bottom_rod_offset: Some(12.125),
        }
    }

    fn table() -> RodFormulaTable {
        RodFormulaTable {
            revision: "test".to_string(),
            crossbar_deduction: 4.625,
            series: vec![formula_8400()],
        }
    }

    fn cvr(door_height: f64, aff: f64) -> RodRequest {
        RodRequest {
            device: Some(DeviceType::Cvr),
            series: Some("CVR_8400_MD8600_STD".to_string()),
            door_height: Some(door_height),
            aff: Some(aff),
            door_width: None,
        }
    }

    #[test]
    fn test_raw_lengths_below_threshold() {
        let raw = raw_rod_lengths(&formula_8400(), 84.0, 41.0);
        assert_eq!(raw.top_rod, 30.0);
        assert_eq!(raw.extension, 0.0);
        assert_eq!(raw.bottom_rod, Some(28.875));
    }

    #[test]
    fn test_raw_lengths_above_threshold() {
        let raw = raw_rod_lengths(&formula_8400(), 120.0, 41.0);
        assert_eq!(raw.top_rod, 35.0);
        assert_eq!(raw.extension, 30.0);
    }

    #[test]
    fn test_calculate_rounds_bottom_rod_up() {
        let result = calculate(&table(), &cvr(84.0, 41.0)).unwrap();
        assert_eq!(result.top_rod, Some(Inches(30.0)));
        assert_eq!(result.bottom_rod, Some(Inches(29.0)));
        assert_eq!(result.extension, Some(Inches::ZERO));
        assert_eq!(result.crossbar, None);
        assert!(!result.needs_extension());
    }

    #[test]
    fn test_missing_series_is_validation_error() {
        let mut request = cvr(84.0, 41.0);
        request.series = Some("  ".to_string());
        assert_eq!(
            calculate(&table(), &request),
            Err(CalcError::Missing {
                field: "Device Series"
            })
        );
    }

    #[test]
    fn test_family_mismatch() {
        let mut request = cvr(84.0, 41.0);
        request.device = Some(DeviceType::Svr);
        assert!(matches!(
            calculate(&table(), &request),
            Err(CalcError::FamilyMismatch { .. })
        ));
    }

    #[test]
    fn test_crossbar_only_ignores_rod_fields() {
        let request = RodRequest {
            device: Some(DeviceType::Crossbar),
            door_width: Some(36.0),
            ..Default::default()
        };
        let result = calculate(&table(), &request).unwrap();
        assert_eq!(result.crossbar, Some(Inches(31.5)));
        assert_eq!(result.top_rod, None);
        assert_eq!(result.bottom_rod, None);
        assert_eq!(result.extension, None);
    }
}
