//! Exit device rail length calculator

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::error::{require_positive, CalcError};
use crate::core::measure::{round_thousandths, Inches};
use crate::entities::rail_spec::{Generation, OversizePolicy, RailFormulaTable, Stile};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RailRequest {
    pub generation: Generation,
    pub stile: Stile,
    pub door_width: Option<f64>,
}

/// Stock selection for a rail: a standard size class, or the oversize path
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RailSizing {
    Standard {
        size_class: String,
        range: String,
        stock_length: Inches,
    },
    Custom {
        /// Order guidance in place of a stock length
        stock: String,
        note: String,
        /// False when the generation cannot be supplied this wide at all
        orderable: bool,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RailResult {
    pub generation: Generation,
    pub generation_label: String,
    pub stile: Stile,
    pub stile_label: String,
    pub door_width: f64,
    pub deduction: f64,

    /// `door_width - deduction`, to three decimal places
    pub cut_length: Inches,

    pub sizing: RailSizing,
}

impl RailResult {
    pub fn is_custom(&self) -> bool {
        matches!(self.sizing, RailSizing::Custom { .. })
    }
}

/// Pick the rail stock and cut length for a door width
pub fn calculate_rail(
    table: &RailFormulaTable,
    request: &RailRequest,
) -> Result<RailResult, CalcError> {
    let door_width = require_positive("Door Width", request.door_width)?;
    if door_width < table.minimum_width {
        return Err(CalcError::BelowMinimumWidth {
            width: door_width,
            minimum: table.minimum_width,
        });
    }

    let spec = table
        .generation(request.generation)
        .ok_or_else(|| CalcError::UnknownGeneration {
            generation: request.generation.to_string(),
        })?;
    let stile = spec.stile(request.stile);
    debug!(generation = %request.generation, stile = %request.stile, door_width, "rail calculation");

    let sizing = match table.size_class_for(door_width) {
        Some(class) => RailSizing::Standard {
            size_class: class.label.clone(),
            range: class.range_label(),
            stock_length: Inches(stile.uncut.get(&class.label).copied().unwrap_or_default()),
        },
        None => match &spec.oversize {
            OversizePolicy::SpecialOrder { stock, note } => RailSizing::Custom {
                stock: stock.clone(),
                note: note.clone(),
                orderable: true,
            },
            OversizePolicy::NotExtendable { note } => RailSizing::Custom {
                stock: "N/A".to_string(),
                note: note.clone(),
                orderable: false,
            },
        },
    };

    Ok(RailResult {
        generation: request.generation,
        generation_label: spec.label.clone(),
        stile: request.stile,
        stile_label: stile.label.clone(),
        door_width,
        deduction: stile.deduction,
        cut_length: round_thousandths(door_width - stile.deduction),
        sizing,
    })
}
