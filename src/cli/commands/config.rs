//! `doorkit config` command - show the effective configuration

use std::path::PathBuf;

use console::style;
use miette::Result;
use serde::Serialize;

use crate::cli::output::{effective_format, print_csv, print_structured};
use crate::cli::{GlobalOpts, OutputFormat};
use crate::core::config::Config;

#[derive(Debug, Serialize)]
struct ConfigReport {
    /// File the settings were read from, absent when running on defaults
    #[serde(skip_serializing_if = "Option::is_none")]
    source: Option<PathBuf>,

    #[serde(skip_serializing_if = "Option::is_none")]
    user_config_path: Option<PathBuf>,

    config: Config,
}

#[derive(Debug, Serialize)]
struct SettingRow {
    key: &'static str,
    value: String,
}

pub fn run(global: &GlobalOpts) -> Result<()> {
    let (mut config, source) = Config::load(global.config.as_deref())?;
    if let Some(catalog) = &global.catalog {
        config.catalog_dir = Some(catalog.clone());
    }

    let report = ConfigReport {
        source,
        user_config_path: Config::user_config_path(),
        config,
    };

    let format = effective_format(global.output, false);
    if print_structured(&report, format)? {
        return Ok(());
    }

    let catalog = report
        .config
        .catalog_dir
        .as_ref()
        .map(|p| p.display().to_string())
        .unwrap_or_else(|| "(built-in)".to_string());
    let settings = [
        ("home_brand", report.config.home_brand.to_string()),
        ("short_query_len", report.config.short_query_len.to_string()),
        ("sort", format!("{:?}", report.config.sort).to_lowercase()),
        ("catalog_dir", catalog),
    ];

    if format == OutputFormat::Csv {
        return print_csv(
            settings
                .into_iter()
                .map(|(key, value)| SettingRow { key, value }),
        );
    }

    match &report.source {
        Some(path) => println!("{} {}", style("Config file:").bold(), path.display()),
        None => println!("{} (defaults)", style("Config file:").bold()),
    }
    for (key, value) in settings {
        println!("  {:<16} {}", style(key).cyan(), value);
    }
    if report.source.is_none() {
        if let Some(path) = &report.user_config_path {
            println!(
                "{}",
                style(format!("Create {} to change these.", path.display())).dim()
            );
        }
    }
    Ok(())
}
