//! Per-invocation state: configuration plus the loaded catalog

use std::path::PathBuf;

use miette::Result;
use tracing::debug;

use crate::cli::GlobalOpts;
use crate::core::catalog::Catalog;
use crate::core::config::Config;
use crate::core::search::{Directory, SortMode};

pub struct Context {
    pub config: Config,
    /// Config file that was read, `None` when running on defaults
    pub config_path: Option<PathBuf>,
    pub catalog: Catalog,
}

impl Context {
    /// `--catalog` wins over the config file's `catalog_dir`
    pub fn load(global: &GlobalOpts) -> Result<Self> {
        let (config, config_path) = Config::load(global.config.as_deref())?;
        let catalog_dir = global.catalog.clone().or_else(|| config.catalog_dir.clone());
        debug!(catalog_dir = ?catalog_dir, "loading catalog");
        let catalog = Catalog::load(catalog_dir.as_deref())?;
        Ok(Self {
            config,
            config_path,
            catalog,
        })
    }

    /// Representative directory, optionally overriding the configured sort
    pub fn directory(&self, sort: Option<SortMode>) -> Directory {
        let mut options = self.config.search_options();
        if let Some(sort) = sort {
            options.sort = sort;
        }
        Directory::new(
            &self.catalog.representatives.representatives,
            &self.catalog.territories,
            options,
        )
    }
}
