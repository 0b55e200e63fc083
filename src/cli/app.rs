//! CLI definitions and entry point

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use super::commands;
use spesa::config::Config;
use spesa::output::OutputMode;

/// spesa - Shopping list manager
#[derive(Parser, Debug)]
#[command(
    name = "spesa",
    version,
    about = "Interactive shopping list with CSV persistence",
    long_about = "Keep a shopping list from the terminal.\n\n\
                  Without a command, spesa opens an interactive menu to add, \
                  search, tick off and total items, saving them to a CSV file."
)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output in JSON format (machine-readable)
    #[arg(long, global = true)]
    pub json: bool,

    /// CSV file holding the list (overrides the config file)
    #[arg(short, long, global = true, value_name = "PATH")]
    pub file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

/// One-shot commands; without one the interactive menu starts
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print the saved list and exit
    List,

    /// Print the totals of the saved list and exit
    Summary,
}

/// Run the CLI
pub fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Stay quiet by default so log lines do not interleave with the menu
    if cli.verbose {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();
    } else {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    }

    let output_mode = if cli.json {
        OutputMode::Json
    } else {
        OutputMode::Human
    };

    let config = Config::load()?.with_file(cli.file);

    match cli.command {
        None => commands::interactive(&config),
        Some(Command::List) => commands::list(&config, output_mode),
        Some(Command::Summary) => commands::summary(&config, output_mode),
    }
}
