//! User configuration
//!
//! Loaded from, in order: an explicit path (`--config` or `$DOORKIT_CONFIG`),
//! the per-user `config.yaml`, built-in defaults. Command-line flags are
//! applied on top by the caller.

use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use miette::Diagnostic;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::core::search::{SearchOptions, SortMode};
use crate::entities::representative::Brand;
use crate::yaml::{parse_yaml_file, YamlError};

pub const CONFIG_FILE: &str = "config.yaml";

#[derive(Debug, Error, Diagnostic)]
pub enum ConfigError {
    #[error(transparent)]
    #[diagnostic(transparent)]
    Yaml(#[from] YamlError),

    #[error("Config file not found: {}", .0.display())]
    #[diagnostic(
        code(doorkit::config::not_found),
        help("Check --config or the DOORKIT_CONFIG environment variable")
    )]
    NotFound(PathBuf),

    #[error("short_query_len must be at least 1")]
    #[diagnostic(code(doorkit::config::invalid))]
    InvalidShortQueryLen,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Brand whose representatives are listed first
    pub home_brand: Brand,

    /// Queries up to this many characters must match at a word start
    pub short_query_len: usize,

    pub sort: SortMode,

    /// Directory of catalog YAML files overriding the embedded tables
    #[serde(skip_serializing_if = "Option::is_none")]
    pub catalog_dir: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            home_brand: Brand::Sargent,
            short_query_len: 2,
            sort: SortMode::Brand,
            catalog_dir: None,
        }
    }
}

impl Config {
    /// Per-user config file location, if a home directory can be determined
    pub fn user_config_path() -> Option<PathBuf> {
        ProjectDirs::from("com", "doorkit", "doorkit")
            .map(|dirs| dirs.config_dir().join(CONFIG_FILE))
    }

    /// Load configuration, returning it with the file it came from.
    ///
    /// An explicit path must exist; the per-user file is optional.
    pub fn load(explicit: Option<&Path>) -> Result<(Self, Option<PathBuf>), ConfigError> {
        let source = match explicit {
            Some(path) if !path.is_file() => {
                return Err(ConfigError::NotFound(path.to_path_buf()))
            }
            Some(path) => Some(path.to_path_buf()),
            None => Self::user_config_path().filter(|p| p.is_file()),
        };

        let config = match &source {
            Some(path) => {
                debug!(path = %path.display(), "loading config");
                let config: Config = parse_yaml_file(path)?;
                config.resolve_relative(path)
            }
            None => Config::default(),
        };

        if config.short_query_len == 0 {
            return Err(ConfigError::InvalidShortQueryLen);
        }
        Ok((config, source))
    }

    /// Interpret a relative `catalog_dir` against the config file's directory
    fn resolve_relative(mut self, config_path: &Path) -> Self {
        if let (Some(dir), Some(base)) = (&self.catalog_dir, config_path.parent()) {
            if dir.is_relative() {
                self.catalog_dir = Some(base.join(dir));
            }
        }
        self
    }

    pub fn search_options(&self) -> SearchOptions {
        SearchOptions {
            home_brand: self.home_brand,
            short_query_len: self.short_query_len,
            sort: self.sort,
        }
    }
}
