//! `doorkit handing` command - field reversibility guidance

use clap::Subcommand;
use console::style;
use miette::Result;
use serde::Serialize;
use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::cli::filters::CategoryArg;
use crate::cli::output::{effective_format, print_csv, print_structured};
use crate::cli::{Context, GlobalOpts, OutputFormat};
use crate::core::handing::{classify_handing, HandingResult, VIEWING_SIDE};
use crate::entities::exit_device::Handing;

#[derive(Subcommand, Debug)]
pub enum HandingCommands {
    /// Tell whether a product can be re-handed in the field
    Check(CheckArgs),

    /// List exit device models and their handing
    Models,
}

#[derive(clap::Args, Debug)]
pub struct CheckArgs {
    /// Product category
    #[arg(long, short = 'c')]
    pub category: CategoryArg,

    /// Exit device model, e.g. 8804 or PE8813 (exit devices only)
    #[arg(long, short = 'm')]
    pub model: Option<String>,
}

pub fn run(cmd: HandingCommands, global: &GlobalOpts) -> Result<()> {
    let ctx = Context::load(global)?;
    match cmd {
        HandingCommands::Check(args) => run_check(args, &ctx, global),
        HandingCommands::Models => run_models(&ctx, global),
    }
}

fn run_check(args: CheckArgs, ctx: &Context, global: &GlobalOpts) -> Result<()> {
    let result = classify_handing(
        &ctx.catalog.handing,
        Some(args.category.into()),
        args.model.as_deref(),
    )?;

    // No model yet: `null` for JSON/YAML, no rows for CSV
    let format = effective_format(global.output, false);
    if print_structured(&result, format)? {
        return Ok(());
    }
    if format == OutputFormat::Csv {
        return print_csv(result.iter().map(HandingRow::from));
    }

    let Some(result) = result else {
        println!(
            "Select an exit device model with {} (see {}).",
            style("--model").cyan(),
            style("doorkit handing models").cyan()
        );
        return Ok(());
    };

    print_result_card(&result);
    Ok(())
}

fn print_result_card(result: &HandingResult) {
    println!("{} {}", style("ⓘ").cyan(), style(VIEWING_SIDE).dim());
    println!("{}", style("─".repeat(60)).dim());

    let subject = match &result.model {
        Some(model) => format!("{} ({})", model, result.category),
        None => result.category.to_string(),
    };
    let title = match result.status {
        Handing::Handed => style(&result.title).red().bold(),
        Handing::Reversible => style(&result.title).green().bold(),
    };
    println!("{}: {}", style(subject).bold(), title);
    println!("{}", result.guidance);

    if let Some(tutorial) = &result.tutorial {
        println!();
        println!("{} {}", style("▶").cyan(), tutorial.title);
        println!("  {}", style(&tutorial.url).underlined());
    }
    println!("{}", style("─".repeat(60)).dim());
}

#[derive(Debug, Serialize)]
struct HandingRow {
    category: String,
    model: String,
    status: String,
    title: String,
    tutorial: String,
}

impl From<&HandingResult> for HandingRow {
    fn from(result: &HandingResult) -> Self {
        Self {
            category: result.category.to_string(),
            model: result.model.clone().unwrap_or_default(),
            status: result.status.to_string(),
            title: result.title.clone(),
            tutorial: result
                .tutorial
                .as_ref()
                .map(|t| t.url.clone())
                .unwrap_or_default(),
        }
    }
}

#[derive(Debug, Serialize, Tabled)]
struct ModelRow {
    #[tabled(rename = "MODEL")]
    model: String,
    #[tabled(rename = "LABEL")]
    label: String,
    #[tabled(rename = "HANDING")]
    handing: String,
}

fn run_models(ctx: &Context, global: &GlobalOpts) -> Result<()> {
    let models = &ctx.catalog.handing.models;

    let format = effective_format(global.output, true);
    if print_structured(models, format)? {
        return Ok(());
    }

    let rows: Vec<ModelRow> = models
        .iter()
        .map(|m| ModelRow {
            model: m.model.clone(),
            label: m.label.clone(),
            handing: m.handing.to_string(),
        })
        .collect();

    if format == OutputFormat::Csv {
        return print_csv(rows);
    }

    let count = rows.len();
    println!("{}", Table::new(rows).with(Style::rounded()));
    println!("{} models", style(count).cyan());
    Ok(())
}
