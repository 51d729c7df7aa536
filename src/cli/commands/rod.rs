//! `doorkit rod` command - vertical rod and crossbar cut lengths

use clap::Subcommand;
use console::style;
use miette::Result;
use serde::Serialize;
use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::cli::filters::{DeviceArg, FamilyFilter};
use crate::cli::helpers::format_length;
use crate::cli::output::{effective_format, print_csv, print_structured};
use crate::cli::{Context, GlobalOpts, OutputFormat};
use crate::core::measure::Inches;
use crate::core::rod::{calculate, RodRequest, RodResult};
use crate::entities::formula::ExtensionRule;

#[derive(Subcommand, Debug)]
pub enum RodCommands {
    /// Calculate top rod, bottom rod, extension and crossbar lengths
    Calc(CalcArgs),

    /// List the device series the calculator knows
    Series(SeriesArgs),
}

#[derive(clap::Args, Debug)]
pub struct CalcArgs {
    /// Device type
    #[arg(long, short = 'd')]
    pub device: DeviceArg,

    /// Device series key (see `doorkit rod series`)
    #[arg(long, short = 's')]
    pub series: Option<String>,

    /// Door height in inches
    #[arg(long = "door-height", short = 'H', allow_negative_numbers = true)]
    pub door_height: Option<f64>,

    /// Device height above finished floor, in inches
    #[arg(long, short = 'a', allow_negative_numbers = true)]
    pub aff: Option<f64>,

    /// Door width in inches (required for crossbar)
    #[arg(long = "door-width", short = 'w', allow_negative_numbers = true)]
    pub door_width: Option<f64>,
}

#[derive(clap::Args, Debug)]
pub struct SeriesArgs {
    /// Restrict to one rod family
    #[arg(long, short = 'f', default_value = "all")]
    pub family: FamilyFilter,
}

pub fn run(cmd: RodCommands, global: &GlobalOpts) -> Result<()> {
    let ctx = Context::load(global)?;
    match cmd {
        RodCommands::Calc(args) => run_calc(args, &ctx, global),
        RodCommands::Series(args) => run_series(args, &ctx, global),
    }
}

fn run_calc(args: CalcArgs, ctx: &Context, global: &GlobalOpts) -> Result<()> {
    let request = RodRequest {
        device: Some(args.device.into()),
        series: args.series,
        door_height: args.door_height,
        aff: args.aff,
        door_width: args.door_width,
    };
    let result = calculate(&ctx.catalog.rods, &request)?;

    let format = effective_format(global.output, false);
    if print_structured(&result, format)? {
        return Ok(());
    }
    if format == OutputFormat::Csv {
        return print_csv([RodRow::from(&result)]);
    }

    print_result_card(&result);
    Ok(())
}

fn print_result_card(result: &RodResult) {
    let heading = match &result.series {
        Some(series) => format!("{} {}", result.device, series),
        None => result.device.to_string(),
    };
    println!("{}  {}", style("Calculation Results").bold(), style(heading).cyan());
    println!("{}", style("─".repeat(48)).dim());

    if result.device.family().is_some() {
        println!("{:<22}{:>12}", "Top Rod Length", format_length(result.top_rod));
        println!("{:<22}{:>12}", "Bottom Rod Length", format_length(result.bottom_rod));
        let extension = format_length(result.extension);
        if result.needs_extension() {
            println!("{:<22}{:>12}", "Rod Extension", style(extension).yellow().bold());
        } else {
            println!("{:<22}{:>12}", "Rod Extension", extension);
        }
    }
    if result.crossbar.is_some() {
        println!("{:<22}{:>12}", "Crossbar Length", format_length(result.crossbar));
    }
    println!("{}", style("─".repeat(48)).dim());

    for warning in &result.warnings {
        println!("{} {}", style("!").yellow().bold(), style(warning).yellow());
    }
    println!(
        "{} Calculations complete. Double-check all inputs against the job specifications.",
        style("✓").green()
    );
}

/// Flat row for CSV output
#[derive(Debug, Serialize)]
struct RodRow {
    device: String,
    series: String,
    top_rod: String,
    bottom_rod: String,
    extension: String,
    crossbar: String,
}

impl From<&RodResult> for RodRow {
    fn from(result: &RodResult) -> Self {
        let cell = |v: Option<Inches>| v.map(|i| i.to_string()).unwrap_or_default();
        Self {
            device: result.device.to_string(),
            series: result.series.clone().unwrap_or_default(),
            top_rod: cell(result.top_rod),
            bottom_rod: cell(result.bottom_rod),
            extension: cell(result.extension),
            crossbar: cell(result.crossbar),
        }
    }
}

#[derive(Debug, Serialize, Tabled)]
struct SeriesRow {
    #[tabled(rename = "KEY")]
    key: String,
    #[tabled(rename = "FAMILY")]
    family: String,
    #[tabled(rename = "LABEL")]
    label: String,
    #[tabled(rename = "EXTENSION OVER")]
    extension_over: String,
    #[tabled(rename = "BOTTOM ROD")]
    bottom_rod: String,
}

fn run_series(args: SeriesArgs, ctx: &Context, global: &GlobalOpts) -> Result<()> {
    let formulas: Vec<_> = ctx
        .catalog
        .rods
        .series
        .iter()
        .filter(|f| args.family.matches(f.family))
        .collect();

    let format = effective_format(global.output, true);
    if print_structured(&formulas, format)? {
        return Ok(());
    }

    let rows: Vec<SeriesRow> = formulas
        .iter()
        .map(|f| SeriesRow {
            key: f.key.clone(),
            family: f.family.to_string(),
            label: f.label.clone(),
            extension_over: match f.extension {
                ExtensionRule::Computed {
                    max_standard_span, ..
                } => format!("span {:.3}", max_standard_span),
                ExtensionRule::Fixed { max_opening, .. } => format!("opening {:.3}", max_opening),
            },
            bottom_rod: if f.is_less_bottom_rod() { "none" } else { "yes" }.to_string(),
        })
        .collect();

    if format == OutputFormat::Csv {
        return print_csv(rows);
    }

    if rows.is_empty() {
        println!("No device series found.");
        return Ok(());
    }
    let count = rows.len();
    println!("{}", Table::new(rows).with(Style::rounded()));
    println!(
        "{} series, crossbar deduction {:.3}\"",
        style(count).cyan(),
        ctx.catalog.rods.crossbar_deduction
    );
    Ok(())
}
