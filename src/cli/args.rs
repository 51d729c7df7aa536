//! Top-level argument definitions

use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use tracing::Level;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::cli::commands::completions::CompletionsArgs;
use crate::cli::commands::csr::CsrCommands;
use crate::cli::commands::handing::HandingCommands;
use crate::cli::commands::rail::RailCommands;
use crate::cli::commands::rod::RodCommands;

#[derive(Parser, Debug)]
#[command(
    name = "doorkit",
    version,
    about = "Door hardware support toolkit",
    long_about = "Rod and rail cut-length calculators, exit device handing guidance \
                  and customer support representative lookup by territory."
)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalOpts,

    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// Install the tracing subscriber. Diagnostics go to stderr so piped
    /// output stays clean.
    pub fn setup_logging(&self) {
        let level = match self.global.verbose {
            0 => Level::WARN,
            1 => Level::INFO,
            2 => Level::DEBUG,
            _ => Level::TRACE,
        };

        let filter = EnvFilter::from_default_env().add_directive(level.into());

        let fmt_layer = fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(false)
            .with_line_number(false);

        tracing_subscriber::registry()
            .with(filter)
            .with(fmt_layer)
            .init();
    }
}

/// Options shared by every subcommand
#[derive(clap::Args, Debug, Clone)]
pub struct GlobalOpts {
    /// Output format
    #[arg(long, short = 'o', global = true, value_enum, default_value = "auto")]
    pub output: OutputFormat,

    /// Directory of catalog YAML files overriding the built-in tables
    #[arg(long, global = true, value_name = "DIR")]
    pub catalog: Option<PathBuf>,

    /// Config file (defaults to the per-user config.yaml)
    #[arg(long, global = true, env = "DOORKIT_CONFIG", value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,
}

#[derive(Debug, Clone, Copy, ValueEnum, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Text on a terminal, CSV for piped lists
    #[default]
    Auto,
    Text,
    Json,
    Yaml,
    Csv,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Vertical rod and crossbar cut lengths
    #[command(subcommand)]
    Rod(RodCommands),

    /// Exit device rail sizing and cut length
    #[command(subcommand)]
    Rail(RailCommands),

    /// Handing guidance for locks and exit devices
    #[command(subcommand)]
    Handing(HandingCommands),

    /// Find customer support representatives by territory
    #[command(subcommand)]
    Csr(CsrCommands),

    /// Show the effective configuration
    Config,

    /// Generate shell completions
    Completions(CompletionsArgs),
}
