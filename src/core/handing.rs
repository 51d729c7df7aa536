//! Handing classifier for locks and exit devices

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::error::CalcError;
use crate::entities::exit_device::{Handing, HandingTable, ProductCategory, Tutorial};

/// Handing is always determined looking at the door from this side
pub const VIEWING_SIDE: &str = "Always view door from the Secure Side (Outside).";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HandingResult {
    pub category: ProductCategory,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,

    pub status: Handing,
    pub title: String,
    pub guidance: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub tutorial: Option<Tutorial>,
}

/// Classify a product's handing.
///
/// Returns `Ok(None)` until enough has been chosen to answer: no category
/// yet, or an exit device without a model.
pub fn classify_handing(
    table: &HandingTable,
    category: Option<ProductCategory>,
    model: Option<&str>,
) -> Result<Option<HandingResult>, CalcError> {
    let Some(category) = category else {
        return Ok(None);
    };
    let model = model.map(str::trim).filter(|m| !m.is_empty());
    debug!(%category, ?model, "handing lookup");

    match category {
        ProductCategory::Mortise | ProductCategory::Bored => Ok(Some(HandingResult {
            category,
            model: None,
            status: Handing::Reversible,
            title: "Field Reversible".to_string(),
            guidance: "This product is designed for flexibility. You can easily change the handing in the field without disassembling the main lockbody.".to_string(),
            tutorial: table.tutorial_for(category, None).cloned(),
        })),
        ProductCategory::Exit => {
            let Some(model) = model else {
                return Ok(None);
            };
            let device = table.model(model).ok_or_else(|| CalcError::UnknownModel {
                model: model.to_string(),
            })?;
            let (title, guidance) = match device.handing {
                Handing::Handed => (
                    "Handed (Specify on Order)",
                    "This model is NOT field reversible. You must specify LHR (Left Hand Reverse) or RHR (Right Hand Reverse) when placing your order.",
                ),
                Handing::Reversible => (
                    "Field Reversible",
                    "Standard rim devices are reversible. This unit can be re-handed in the field to suit your specific door application.",
                ),
            };
            Ok(Some(HandingResult {
                category,
                model: Some(device.model.clone()),
                status: device.handing,
                title: title.to_string(),
                guidance: guidance.to_string(),
                tutorial: table.tutorial_for(category, Some(&device.model)).cloned(),
            }))
        }
    }
}
