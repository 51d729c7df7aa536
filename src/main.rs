use clap::Parser;
use doorkit::cli::commands;
use doorkit::cli::{Cli, Commands};
use miette::Result;

fn main() -> Result<()> {
    // Install miette's fancy error handler for beautiful diagnostics
    miette::set_hook(Box::new(|_| {
        Box::new(
            miette::MietteHandlerOpts::new()
                .terminal_links(true)
                .unicode(true)
                .context_lines(2)
                .tab_width(4)
                .build(),
        )
    }))?;

    let cli = Cli::parse();
    cli.setup_logging();

    let global = &cli.global;
    match cli.command {
        Commands::Rod(cmd) => commands::rod::run(cmd, global),
        Commands::Rail(cmd) => commands::rail::run(cmd, global),
        Commands::Handing(cmd) => commands::handing::run(cmd, global),
        Commands::Csr(cmd) => commands::csr::run(cmd, global),
        Commands::Config => commands::config::run(global),
        Commands::Completions(args) => commands::completions::run(args),
    }
}
