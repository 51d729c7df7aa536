//! Catalog - the static lookup tables every calculator reads
//!
//! The tables ship as YAML under `data/` and are embedded in the binary. A
//! directory of replacement files can be layered on top; any file it does not
//! contain falls back to the embedded copy.

use std::path::{Path, PathBuf};

use miette::Diagnostic;
use rust_embed::Embed;
use serde::de::DeserializeOwned;
use thiserror::Error;
use tracing::{debug, info};

use crate::entities::exit_device::HandingTable;
use crate::entities::formula::RodFormulaTable;
use crate::entities::rail_spec::RailFormulaTable;
use crate::entities::representative::RepresentativeList;
use crate::entities::territory::TerritoryTable;
use crate::yaml::{parse_yaml_bytes, parse_yaml_file, YamlError};

#[derive(Embed)]
#[folder = "data/"]
struct EmbeddedCatalog;

pub const ROD_FORMULAS_FILE: &str = "rod_formulas.yaml";
pub const RAIL_FORMULAS_FILE: &str = "rail_formulas.yaml";
pub const HANDING_FILE: &str = "handing.yaml";
pub const TERRITORIES_FILE: &str = "territories.yaml";
pub const REPRESENTATIVES_FILE: &str = "representatives.yaml";

#[derive(Debug, Error, Diagnostic)]
pub enum CatalogError {
    #[error(transparent)]
    #[diagnostic(transparent)]
    Yaml(#[from] YamlError),

    #[error("Embedded catalog file missing: {0}")]
    #[diagnostic(code(doorkit::catalog::missing))]
    MissingAsset(&'static str),

    #[error("Catalog directory not found: {}", .0.display())]
    #[diagnostic(code(doorkit::catalog::dir))]
    DirectoryNotFound(PathBuf),

    #[error("{file}: {message}")]
    #[diagnostic(code(doorkit::catalog::invalid))]
    Invalid { file: &'static str, message: String },
}

/// All lookup tables, loaded once and read-only thereafter
#[derive(Debug, Clone)]
pub struct Catalog {
    pub rods: RodFormulaTable,
    pub rails: RailFormulaTable,
    pub handing: HandingTable,
    pub territories: TerritoryTable,
    pub representatives: RepresentativeList,
}

impl Catalog {
    /// Load the tables compiled into the binary
    pub fn embedded() -> Result<Self, CatalogError> {
        Self::load(None)
    }

    /// Load the tables, preferring files found in `overrides`
    pub fn load(overrides: Option<&Path>) -> Result<Self, CatalogError> {
        if let Some(dir) = overrides {
            if !dir.is_dir() {
                return Err(CatalogError::DirectoryNotFound(dir.to_path_buf()));
            }
        }

        let catalog = Self {
            rods: load_table(overrides, ROD_FORMULAS_FILE)?,
            rails: load_table(overrides, RAIL_FORMULAS_FILE)?,
            handing: load_table(overrides, HANDING_FILE)?,
            territories: load_table(overrides, TERRITORIES_FILE)?,
            representatives: load_table(overrides, REPRESENTATIVES_FILE)?,
        };
        catalog.check()?;

        info!(
            rods = %catalog.rods.revision,
            rails = %catalog.rails.revision,
            territories = %catalog.territories.revision,
            representatives = %catalog.representatives.revision,
            "catalog loaded"
        );
        Ok(catalog)
    }

    /// Cross-table consistency checks
    fn check(&self) -> Result<(), CatalogError> {
        let mut keys: Vec<String> = self
            .rods
            .series
            .iter()
            .map(|f| f.key.to_ascii_uppercase())
            .collect();
        keys.sort();
        if let Some(pair) = keys.windows(2).find(|w| w[0] == w[1]) {
            return Err(CatalogError::Invalid {
                file: ROD_FORMULAS_FILE,
                message: format!("duplicate series key {}", pair[0]),
            });
        }

        if self.rails.size_classes.is_empty() {
            return Err(CatalogError::Invalid {
                file: RAIL_FORMULAS_FILE,
                message: "no size classes defined".to_string(),
            });
        }
        if self
            .rails
            .size_classes
            .windows(2)
            .any(|w| w[0].max >= w[1].min)
        {
            return Err(CatalogError::Invalid {
                file: RAIL_FORMULAS_FILE,
                message: "size classes must be in ascending, non-overlapping order".to_string(),
            });
        }
        for spec in &self.rails.generations {
            for stile in [&spec.narrow, &spec.wide] {
                for class in &self.rails.size_classes {
                    if !stile.uncut.contains_key(&class.label) {
                        return Err(CatalogError::Invalid {
                            file: RAIL_FORMULAS_FILE,
                            message: format!(
                                "{} {} has no stock length for {}",
                                spec.generation, stile.label, class.label
                            ),
                        });
                    }
                }
            }
        }

        for rep in &self.representatives.representatives {
            if rep.codes.is_empty() {
                return Err(CatalogError::Invalid {
                    file: REPRESENTATIVES_FILE,
                    message: format!("{} has no territory codes", rep.name),
                });
            }
        }

        Ok(())
    }
}

fn load_table<T: DeserializeOwned>(
    overrides: Option<&Path>,
    file: &'static str,
) -> Result<T, CatalogError> {
    if let Some(path) = overrides.map(|dir| dir.join(file)).filter(|p| p.is_file()) {
        debug!(path = %path.display(), "loading catalog override");
        return Ok(parse_yaml_file(&path)?);
    }

    let asset = EmbeddedCatalog::get(file).ok_or(CatalogError::MissingAsset(file))?;
    Ok(parse_yaml_bytes(&asset.data, file)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_catalog_loads() {
        let catalog = Catalog::embedded().unwrap();
        assert!(catalog.rods.get("CVR_8400_MD8600_STD").is_some());
        assert_eq!(catalog.rods.crossbar_deduction, 4.625);
        assert_eq!(catalog.rails.size_classes.len(), 4);
        assert_eq!(catalog.handing.models.len(), 18);
        assert_eq!(catalog.territories.state_name("tx"), Some("TEXAS"));
        assert_eq!(catalog.representatives.representatives.len(), 24);
    }

    #[test]
    fn test_missing_override_directory() {
        let err = Catalog::load(Some(Path::new("/nonexistent/doorkit-catalog"))).unwrap_err();
        assert!(matches!(err, CatalogError::DirectoryNotFound(_)));
    }
}
