//! Strata CLI - Rank points into layered Pareto frontiers.

use clap::Parser;
use strata_cli::commands;
use strata_cli::{logging, Cli, Command, Config, Formatter};

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> strata_cli::Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();

    let config = Config::load(cli.config.as_deref())?;
    logging::init(cli.verbose, &config.settings.log_level);

    // Determine output format
    let format = cli
        .format
        .map(Into::into)
        .unwrap_or(config.settings.format);

    // Determine color setting
    let color_enabled = !cli.no_color && config.settings.color;

    let formatter = Formatter::new(format, color_enabled);

    let output = match cli.command {
        Command::Partition(args) => commands::execute_partition(args, &config, &formatter)?,
        Command::Compare(args) => commands::execute_compare(args, &config, &formatter)?,
        Command::Dedup(args) => commands::execute_dedup(args, &config, &formatter)?,
    };

    println!("{}", output);
    Ok(())
}
