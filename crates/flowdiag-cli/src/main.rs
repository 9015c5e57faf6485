use std::io::IsTerminal;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod commands;
mod render;
mod session;

#[derive(Parser)]
#[command(name = "flowdiag", version, about = "The FLOW Diagnostic")]
pub(crate) struct Cli {
    /// Increase log verbosity (-v info, -vv debug). RUST_LOG overrides.
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Take the diagnostic interactively
    Run {
        /// Print the final report as JSON (prompts go to stderr)
        #[arg(long)]
        json: bool,
        /// Open the booking link after showing results
        #[arg(long)]
        open: bool,
    },
    /// Score a list of answers without prompting
    Score(commands::score::ScoreArgs),
    /// List the question bank
    Questions(commands::questions::QuestionsArgs),
    /// Show and open the booking link
    Book {
        /// Print the link without opening a browser
        #[arg(long)]
        print_only: bool,
    },
    /// Configuration management
    Config {
        #[command(subcommand)]
        action: commands::config::ConfigAction,
    },
    /// Generate shell completions
    Completions {
        shell: clap_complete::Shell,
    },
}

fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .with_target(false)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let result = match cli.command {
        Commands::Run { json, open } => commands::run::run(json, open),
        Commands::Score(args) => commands::score::run(args),
        Commands::Questions(args) => commands::questions::run(args),
        Commands::Book { print_only } => commands::book::run(print_only),
        Commands::Config { action } => commands::config::run(action),
        Commands::Completions { shell } => commands::completions::run(shell),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
