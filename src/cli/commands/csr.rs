//! `doorkit csr` command - customer support representative lookup

use clap::Subcommand;
use console::style;
use miette::Result;
use serde::Serialize;
use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::cli::filters::{BrandFilter, SortArg};
use crate::cli::helpers::{plural, truncate_str};
use crate::cli::output::{effective_format, print_csv, print_structured};
use crate::cli::{Context, GlobalOpts, OutputFormat};
use crate::core::search::{highlight_segments, highlight_terms, DirectoryEntry};

#[derive(Subcommand, Debug)]
pub enum CsrCommands {
    /// Search by territory code, state, region or name
    Search(SearchArgs),

    /// List representatives, optionally for one brand
    List(ListArgs),

    /// Show what a territory code covers and who handles it
    Territory(TerritoryArgs),
}

#[derive(clap::Args, Debug)]
pub struct SearchArgs {
    /// Territory code (A27), state code (TX), state or region name, or rep name
    pub query: String,

    /// Restrict to one brand
    #[arg(long, short = 'b', default_value = "all")]
    pub brand: BrandFilter,

    /// Result ordering (defaults to the configured sort)
    #[arg(long)]
    pub sort: Option<SortArg>,
}

#[derive(clap::Args, Debug)]
pub struct ListArgs {
    /// Restrict to one brand
    #[arg(long, short = 'b', default_value = "all")]
    pub brand: BrandFilter,
}

#[derive(clap::Args, Debug)]
pub struct TerritoryArgs {
    /// Territory code, e.g. A27
    pub code: String,
}

pub fn run(cmd: CsrCommands, global: &GlobalOpts) -> Result<()> {
    let ctx = Context::load(global)?;
    match cmd {
        CsrCommands::Search(args) => run_search(args, &ctx, global),
        CsrCommands::List(args) => run_list(args, &ctx, global),
        CsrCommands::Territory(args) => run_territory(args, &ctx, global),
    }
}

fn run_search(args: SearchArgs, ctx: &Context, global: &GlobalOpts) -> Result<()> {
    let directory = ctx.directory(args.sort.map(Into::into));
    let matches = directory.search(&args.query, args.brand.brand());

    let format = effective_format(global.output, true);
    if print_structured(&matches, format)? {
        return Ok(());
    }
    if format == OutputFormat::Csv {
        return print_csv(matches.iter().map(|e| RepRow::from(*e)));
    }

    if matches.is_empty() {
        println!(
            "No representatives found matching '{}'{}.",
            args.query.trim(),
            brand_suffix(args.brand)
        );
        return Ok(());
    }

    let terms = highlight_terms(&args.query, &ctx.catalog.territories);
    for entry in &matches {
        print_entry(entry, &terms);
    }
    println!(
        "{} found{}",
        style(plural(matches.len(), "representative")).cyan(),
        brand_suffix(args.brand)
    );
    Ok(())
}

fn brand_suffix(brand: BrandFilter) -> String {
    match brand.brand() {
        Some(brand) => format!(" for {}", brand),
        None => String::new(),
    }
}

fn highlighted(text: &str, terms: &[String]) -> String {
    highlight_segments(text, terms)
        .into_iter()
        .map(|(segment, hit)| {
            if hit {
                style(segment).yellow().bold().to_string()
            } else {
                segment.to_string()
            }
        })
        .collect()
}

fn print_entry(entry: &DirectoryEntry, terms: &[String]) {
    let rep = &entry.representative;
    println!(
        "{}  {}",
        style(highlighted(&rep.name, terms)).bold(),
        style(format!("[{}]", rep.brand)).dim()
    );
    println!(
        "  {} {}  {}",
        style("Phone:").dim(),
        rep.phone,
        style(rep.tel_link()).underlined()
    );
    println!(
        "  {} {}  {}",
        style("Email:").dim(),
        rep.email,
        style(rep.mailto_link()).underlined()
    );
    println!(
        "  {} {}",
        style("Codes:").dim(),
        highlighted(&rep.codes.join(", "), terms)
    );
    println!(
        "  {} {}",
        style("Covers:").dim(),
        highlighted(&entry.region_description(), terms)
    );
    println!();
}

/// Flat row for CSV output and list tables
#[derive(Debug, Serialize, Tabled)]
struct RepRow {
    #[tabled(rename = "NAME")]
    name: String,
    #[tabled(rename = "BRAND")]
    brand: String,
    #[tabled(rename = "PHONE")]
    phone: String,
    #[tabled(rename = "EMAIL")]
    email: String,
    #[tabled(rename = "CODES")]
    codes: String,
    #[tabled(rename = "COVERS")]
    regions: String,
    #[tabled(skip)]
    tel: String,
    #[tabled(skip)]
    mailto: String,
}

impl From<&DirectoryEntry> for RepRow {
    fn from(entry: &DirectoryEntry) -> Self {
        let rep = &entry.representative;
        Self {
            name: rep.name.clone(),
            brand: rep.brand.to_string(),
            phone: rep.phone.clone(),
            email: rep.email.clone(),
            codes: rep.codes.join("; "),
            regions: entry.regions.join("; "),
            tel: rep.tel_link(),
            mailto: rep.mailto_link(),
        }
    }
}

fn run_list(args: ListArgs, ctx: &Context, global: &GlobalOpts) -> Result<()> {
    let directory = ctx.directory(None);
    let entries = directory.browse(args.brand.brand());

    let format = effective_format(global.output, true);
    if print_structured(&entries, format)? {
        return Ok(());
    }
    if format == OutputFormat::Csv {
        return print_csv(entries.iter().map(|e| RepRow::from(*e)));
    }

    if entries.is_empty() {
        println!("No representatives found{}.", brand_suffix(args.brand));
        return Ok(());
    }

    let rows: Vec<RepRow> = entries
        .iter()
        .map(|e| {
            let mut row = RepRow::from(*e);
            row.codes = truncate_str(&e.representative.codes.join(", "), 24);
            row.regions = truncate_str(&e.region_description(), 40);
            row
        })
        .collect();
    println!("{}", Table::new(rows).with(Style::rounded()));
    println!(
        "{}{}",
        style(plural(entries.len(), "representative")).cyan(),
        brand_suffix(args.brand)
    );
    Ok(())
}

#[derive(Debug, Serialize)]
struct TerritoryReport<'a> {
    code: String,
    regions: Vec<String>,
    states: Vec<String>,
    representatives: Vec<&'a DirectoryEntry>,
}

fn run_territory(args: TerritoryArgs, ctx: &Context, global: &GlobalOpts) -> Result<()> {
    let territories = &ctx.catalog.territories;
    let code = args.code.trim();

    let Some((code, regions)) = territories
        .territories
        .iter()
        .find(|(known, _)| known.eq_ignore_ascii_case(code))
    else {
        return Err(miette::miette!(
            help = "Territory codes look like A27 or SGT_NY; run `doorkit csr list` to see them in use",
            "Unknown territory code '{}'",
            code
        ));
    };

    let mut states: Vec<String> = Vec::new();
    for region in regions {
        for name in territories.states_in_region(region) {
            if !states.iter().any(|s| s == name) {
                states.push(name.to_string());
            }
        }
    }

    let directory = ctx.directory(None);
    let representatives: Vec<&DirectoryEntry> = directory
        .browse(None)
        .into_iter()
        .filter(|e| e.representative.codes.iter().any(|c| c == code))
        .collect();

    let report = TerritoryReport {
        code: code.clone(),
        regions: regions.clone(),
        states,
        representatives,
    };

    let format = effective_format(global.output, false);
    if print_structured(&report, format)? {
        return Ok(());
    }
    if format == OutputFormat::Csv {
        return print_csv(report.representatives.iter().map(|e| RepRow::from(*e)));
    }

    println!("{} {}", style("Territory").bold(), style(&report.code).cyan());
    println!("  {} {}", style("Regions:").dim(), report.regions.join(", "));
    if !report.states.is_empty() {
        println!("  {} {}", style("States:").dim(), report.states.join(", "));
    }
    if report.representatives.is_empty() {
        println!("  {}", style("No representative assigned").yellow());
    } else {
        for entry in &report.representatives {
            println!(
                "  {} {} [{}] {}",
                style("→").dim(),
                style(entry.name()).bold(),
                entry.brand(),
                entry.representative.phone
            );
        }
    }
    Ok(())
}
