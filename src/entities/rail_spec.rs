//! Exit device rail stock records

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Exit device generation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Generation {
    #[serde(rename = "80_SERIES")]
    Series80,
    #[serde(rename = "PE80_SERIES")]
    Pe80,
}

impl std::fmt::Display for Generation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Generation::Series80 => write!(f, "80_SERIES"),
            Generation::Pe80 => write!(f, "PE80_SERIES"),
        }
    }
}

impl std::str::FromStr for Generation {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "80" | "80_SERIES" => Ok(Generation::Series80),
            "PE80" | "PE80_SERIES" => Ok(Generation::Pe80),
            _ => Err(format!(
                "Invalid generation: '{}'. Use '80' or 'pe80'",
                s
            )),
        }
    }
}

/// Stile width of the door the device mounts on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Stile {
    /// 8300/8400/8500
    Narrow,
    /// 8600/8700/8800/8900
    Wide,
}

impl std::fmt::Display for Stile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Stile::Narrow => write!(f, "narrow"),
            Stile::Wide => write!(f, "wide"),
        }
    }
}

/// A contiguous, inclusive range of door widths sharing one rail stock size
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SizeClass {
    pub label: String,
    pub min: f64,
    pub max: f64,
}

impl SizeClass {
    /// Display range, e.g. `33" - 36"`
    pub fn range_label(&self) -> String {
        format!("{}\" - {}\"", self.min, self.max)
    }
}

/// Cut deduction and stock lengths for one generation/stile combination
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StileFormula {
    pub label: String,

    /// Subtracted from the door width to get the rail cut length
    pub deduction: f64,

    /// Nominal (uncut) stock length keyed by size class label
    pub uncut: BTreeMap<String, f64>,
}

/// What a generation offers for doors wider than every size class
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum OversizePolicy {
    /// Oversize rails can be special ordered
    SpecialOrder { stock: String, note: String },
    /// The rail cannot be extended; the cut length is advisory only
    NotExtendable { note: String },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerationSpec {
    pub generation: Generation,
    pub label: String,
    pub subtitle: String,
    pub oversize: OversizePolicy,
    pub narrow: StileFormula,
    pub wide: StileFormula,
}

impl GenerationSpec {
    pub fn stile(&self, stile: Stile) -> &StileFormula {
        match stile {
            Stile::Narrow => &self.narrow,
            Stile::Wide => &self.wide,
        }
    }
}

/// The full rail table
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RailFormulaTable {
    pub revision: String,

    /// Narrowest door the rails are offered for
    pub minimum_width: f64,

    /// Size classes in ascending width order
    pub size_classes: Vec<SizeClass>,

    pub generations: Vec<GenerationSpec>,
}

impl RailFormulaTable {
    pub fn generation(&self, generation: Generation) -> Option<&GenerationSpec> {
        self.generations.iter().find(|g| g.generation == generation)
    }

    /// Size class for a door width.
    ///
    /// Widths falling between two integer ranges (e.g. 32.5) resolve to the
    /// next larger class, since the smaller stock would be too short.
    /// Returns `None` when the width exceeds every class.
    pub fn size_class_for(&self, width: f64) -> Option<&SizeClass> {
        if width < self.minimum_width {
            return None;
        }
        self.size_classes.iter().find(|s| width <= s.max)
    }

    /// Widest door covered by a standard size class
    pub fn max_standard_width(&self) -> f64 {
        self.size_classes
            .iter()
            .map(|s| s.max)
            .fold(self.minimum_width, f64::max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn classes() -> RailFormulaTable {
        RailFormulaTable {
            revision: "test".to_string(),
            minimum_width: 24.0,
            size_classes: vec![
                SizeClass { label: "E Size".into(), min: 24.0, max: 32.0 },
                SizeClass { label: "F Size".into(), min: 33.0, max: 36.0 },
                SizeClass { label: "J Size".into(), min: 37.0, max: 42.0 },
                SizeClass { label: "G Size".into(), min: 43.0, max: 48.0 },
            ],
            generations: vec![],
        }
    }

    #[test]
    fn test_size_class_inclusive_bounds() {
        let t = classes();
        assert_eq!(t.size_class_for(24.0).unwrap().label, "E Size");
        assert_eq!(t.size_class_for(32.0).unwrap().label, "E Size");
        assert_eq!(t.size_class_for(33.0).unwrap().label, "F Size");
        assert_eq!(t.size_class_for(48.0).unwrap().label, "G Size");
        assert!(t.size_class_for(48.01).is_none());
        assert!(t.size_class_for(23.99).is_none());
    }

    #[test]
    fn test_size_class_gap_rounds_up() {
        let t = classes();
        assert_eq!(t.size_class_for(32.5).unwrap().label, "F Size");
        assert_eq!(t.size_class_for(42.25).unwrap().label, "G Size");
    }

    #[test]
    fn test_generation_from_str() {
        assert_eq!("80".parse::<Generation>().unwrap(), Generation::Series80);
        assert_eq!("pe80_series".parse::<Generation>().unwrap(), Generation::Pe80);
        assert!("90".parse::<Generation>().is_err());
    }

    #[test]
    fn test_range_label() {
        let t = classes();
        assert_eq!(t.size_classes[1].range_label(), "33\" - 36\"");
        assert_eq!(t.max_standard_width(), 48.0);
    }
}
