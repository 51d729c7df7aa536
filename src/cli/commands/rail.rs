//! `doorkit rail` command - exit device rail sizing

use clap::Subcommand;
use console::style;
use miette::{IntoDiagnostic, Result};
use serde::Serialize;
use tabled::builder::Builder;
use tabled::settings::Style;

use crate::cli::filters::{GenerationArg, StileArg};
use crate::cli::output::{effective_format, print_csv, print_structured};
use crate::cli::{Context, GlobalOpts, OutputFormat};
use crate::core::rail::{calculate_rail, RailRequest, RailResult, RailSizing};
use crate::entities::rail_spec::Stile;

#[derive(Subcommand, Debug)]
pub enum RailCommands {
    /// Pick the rail stock and cut length for a door width
    Calc(CalcArgs),

    /// Show the size classes and stock lengths
    Sizes,
}

#[derive(clap::Args, Debug)]
pub struct CalcArgs {
    /// Device generation
    #[arg(long, short = 'g', default_value = "80")]
    pub generation: GenerationArg,

    /// Stile width
    #[arg(long, short = 's', default_value = "narrow")]
    pub stile: StileArg,

    /// Door width in inches
    #[arg(long = "door-width", short = 'w', allow_negative_numbers = true)]
    pub door_width: Option<f64>,
}

pub fn run(cmd: RailCommands, global: &GlobalOpts) -> Result<()> {
    let ctx = Context::load(global)?;
    match cmd {
        RailCommands::Calc(args) => run_calc(args, &ctx, global),
        RailCommands::Sizes => run_sizes(&ctx, global),
    }
}

fn run_calc(args: CalcArgs, ctx: &Context, global: &GlobalOpts) -> Result<()> {
    let request = RailRequest {
        generation: args.generation.into(),
        stile: args.stile.into(),
        door_width: args.door_width,
    };
    let result = calculate_rail(&ctx.catalog.rails, &request)?;

    let format = effective_format(global.output, false);
    if print_structured(&result, format)? {
        return Ok(());
    }
    if format == OutputFormat::Csv {
        return print_csv([RailRow::from(&result)]);
    }

    print_result_card(&result);
    Ok(())
}

fn print_result_card(result: &RailResult) {
    match &result.sizing {
        RailSizing::Standard {
            size_class, range, ..
        } => println!(
            "{}  {}",
            style(format!("{} Size Rail", size_class)).bold(),
            style(format!("(For Door Widths {})", range)).dim()
        ),
        RailSizing::Custom { .. } => println!(
            "{}  {}",
            style("Custom Size Required").bold().yellow(),
            style(format!("(Door Width {:.3}\")", result.door_width)).dim()
        ),
    }
    println!(
        "{}: {}   {}: {}",
        style("Device").bold(),
        result.generation_label,
        style("Stile").bold(),
        result.stile_label
    );
    println!("{}", style("─".repeat(48)).dim());

    match &result.sizing {
        RailSizing::Standard { stock_length, .. } => {
            println!("{:<16}{:>12}", "Uncut Length", format!("{}\"", stock_length));
        }
        RailSizing::Custom { stock, .. } => {
            println!("{:<16}{:>12}", "Uncut Length", stock);
        }
    }
    println!(
        "{:<16}{:>12}   {}",
        "Cut Length",
        style(format!("{}\"", result.cut_length)).cyan().bold(),
        style(format!("({:.3} - {:.3})", result.door_width, result.deduction)).dim()
    );
    println!("{}", style("─".repeat(48)).dim());

    if let RailSizing::Custom { note, orderable, .. } = &result.sizing {
        let marker = if *orderable {
            style("!").yellow().bold()
        } else {
            style("✗").red().bold()
        };
        println!("{} {}", marker, note);
    }
}

/// Flat row for CSV output
#[derive(Debug, Serialize)]
struct RailRow {
    generation: String,
    stile: String,
    door_width: f64,
    size_class: String,
    uncut_length: String,
    cut_length: String,
}

impl From<&RailResult> for RailRow {
    fn from(result: &RailResult) -> Self {
        let (size_class, uncut_length) = match &result.sizing {
            RailSizing::Standard {
                size_class,
                stock_length,
                ..
            } => (size_class.clone(), stock_length.to_string()),
            RailSizing::Custom { stock, .. } => ("custom".to_string(), stock.clone()),
        };
        Self {
            generation: result.generation.to_string(),
            stile: result.stile.to_string(),
            door_width: result.door_width,
            size_class,
            uncut_length,
            cut_length: result.cut_length.to_string(),
        }
    }
}

fn run_sizes(ctx: &Context, global: &GlobalOpts) -> Result<()> {
    let table = &ctx.catalog.rails;

    let format = effective_format(global.output, true);
    if print_structured(table, format)? {
        return Ok(());
    }

    let mut header = vec!["SIZE".to_string(), "DOOR WIDTH".to_string()];
    for spec in &table.generations {
        for stile in [Stile::Narrow, Stile::Wide] {
            header.push(format!("{} {}", spec.label, spec.stile(stile).label));
        }
    }

    let mut records = Vec::with_capacity(table.size_classes.len());
    for class in &table.size_classes {
        let mut record = vec![class.label.clone(), class.range_label()];
        for spec in &table.generations {
            for stile in [Stile::Narrow, Stile::Wide] {
                let cell = spec
                    .stile(stile)
                    .uncut
                    .get(&class.label)
                    .map(|len| format!("{:.3}", len))
                    .unwrap_or_default();
                record.push(cell);
            }
        }
        records.push(record);
    }

    if format == OutputFormat::Csv {
        let mut writer = csv::Writer::from_writer(std::io::stdout());
        writer.write_record(&header).into_diagnostic()?;
        for record in &records {
            writer.write_record(record).into_diagnostic()?;
        }
        writer.flush().into_diagnostic()?;
        return Ok(());
    }

    let mut builder = Builder::default();
    builder.push_record(header);
    for record in records {
        builder.push_record(record);
    }
    let mut rendered = builder.build();
    rendered.with(Style::rounded());
    println!("{}", rendered);

    println!("{}", style("Cut deductions").bold());
    for spec in &table.generations {
        for stile in [Stile::Narrow, Stile::Wide] {
            let formula = spec.stile(stile);
            println!(
                "  {:<12} {:<14} {:.3}\"",
                spec.label, formula.label, formula.deduction
            );
        }
    }
    println!(
        "{}",
        style(format!(
            "Doors wider than {}\" need a custom rail.",
            table.max_standard_width()
        ))
        .dim()
    );
    Ok(())
}
