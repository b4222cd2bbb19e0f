//! GeneSearch Binary
//!
//! Loads a record table, runs a command script and writes the report.

use clap::Parser;
use genesearch::{Config, ErrorPolicy};
use tracing_subscriber::{fmt, EnvFilter};

/// GeneSearch
#[derive(Parser, Debug)]
#[command(name = "genesearch")]
#[command(about = "Search, diff and mode queries over run-length encoded protein tables")]
#[command(version)]
struct Args {
    /// Record table (name<TAB>organism<TAB>formula per line)
    #[arg(short, long, default_value = "sequences.txt")]
    sequences: String,

    /// Command script
    #[arg(short, long, default_value = "commands.txt")]
    commands: String,

    /// Report file (overwritten)
    #[arg(short, long, default_value = "genedata.txt")]
    output: String,

    /// First report header line
    #[arg(long, default_value = "Maksim Porva")]
    author: String,

    /// Second report header line
    #[arg(long, default_value = "Genetic Searching")]
    title: String,

    /// Write the report to the file only
    #[arg(short, long)]
    quiet: bool,

    /// Report failing commands and continue instead of aborting
    #[arg(long)]
    skip_errors: bool,
}

fn main() {
    // Logs go to stderr so stdout carries only the report
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("warn,genesearch=info"));

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    tracing::info!("GeneSearch v{}", genesearch::VERSION);
    tracing::debug!("Arguments: {:?}", args);

    let error_policy = if args.skip_errors {
        ErrorPolicy::Skip
    } else {
        ErrorPolicy::Abort
    };

    // Build config from args
    let config = Config::builder()
        .sequences_path(&args.sequences)
        .commands_path(&args.commands)
        .output_path(&args.output)
        .author(args.author)
        .title(args.title)
        .echo_console(!args.quiet)
        .error_policy(error_policy)
        .build();

    if let Err(e) = genesearch::run(&config) {
        tracing::error!("Run failed: {}", e);
        std::process::exit(1);
    }
}
