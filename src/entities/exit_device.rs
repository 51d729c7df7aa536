//! Lock and exit device handing records

use serde::{Deserialize, Serialize};

/// Product category offered by the handing tool
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProductCategory {
    /// 80/90/20/30 series exit devices
    Exit,
    /// 8200 / R8200 mortise locks
    Mortise,
    /// 10-Line / 11-Line bored locks
    Bored,
}

impl std::fmt::Display for ProductCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ProductCategory::Exit => write!(f, "exit"),
            ProductCategory::Mortise => write!(f, "mortise"),
            ProductCategory::Bored => write!(f, "bored"),
        }
    }
}

/// Whether a product must be ordered for a specific door swing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Handing {
    /// Can be re-handed in the field
    Reversible,
    /// Hand (LHR/RHR) must be specified on the order
    Handed,
}

impl std::fmt::Display for Handing {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Handing::Reversible => write!(f, "REVERSIBLE"),
            Handing::Handed => write!(f, "HANDED"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExitDeviceModel {
    pub model: String,
    pub label: String,
    pub handing: Handing,
}

/// A re-handing video, selected by category and optional model prefix
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tutorial {
    pub category: ProductCategory,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prefix: Option<String>,

    pub title: String,
    pub url: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HandingTable {
    pub revision: String,
    pub models: Vec<ExitDeviceModel>,

    /// Checked in order; the first match wins
    pub tutorials: Vec<Tutorial>,
}

impl HandingTable {
    pub fn model(&self, model: &str) -> Option<&ExitDeviceModel> {
        let model = model.trim();
        self.models
            .iter()
            .find(|m| m.model.eq_ignore_ascii_case(model))
    }

    /// Tutorial for a category and, for exit devices, a model
    pub fn tutorial_for(&self, category: ProductCategory, model: Option<&str>) -> Option<&Tutorial> {
        self.tutorials.iter().find(|t| {
            t.category == category
                && match (&t.prefix, model) {
                    (None, _) => true,
                    (Some(prefix), Some(model)) => model
                        .to_ascii_uppercase()
                        .starts_with(&prefix.to_ascii_uppercase()),
                    (Some(_), None) => false,
                }
        })
    }
}
