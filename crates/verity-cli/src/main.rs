//! Verity CLI - Find the headlines most worth fact-checking.

use clap::Parser;
use tracing_subscriber::EnvFilter;
use verity_cli::commands;
use verity_cli::{Cli, Command, Config, Formatter, OutputFormat};

#[tokio::main]
async fn main() {
    // Parse CLI arguments
    let cli = Cli::parse();

    init_tracing(cli.verbose);

    // Errors can occur before the configured formatter exists
    let errors = Formatter::new(OutputFormat::Table, !cli.no_color);
    if let Err(e) = run(cli).await {
        eprintln!("{}", errors.error(&format!("Error: {}", e)));
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> verity_cli::Result<()> {
    // Load config from the given file, or ~/.verity/config.toml
    let mut config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };

    if let Some(path) = cli.heuristics {
        config.paths.heuristics = Some(path);
    }

    // Determine output format
    let format = cli
        .format
        .map(Into::into)
        .unwrap_or(config.settings.format);

    // Determine color setting
    let color_enabled = !cli.no_color && config.settings.color;

    let formatter = Formatter::new(format, color_enabled);

    match cli.command {
        Command::Scrape(args) => commands::execute_scrape(args, &config, &formatter).await?,
        Command::Analyze(args) => commands::execute_analyze(args, &config, &formatter).await?,
        Command::Run(args) => commands::execute_run(args, &config, &formatter).await?,
        Command::Classify(args) => commands::execute_classify(args, &config, &formatter).await?,
        Command::Score(args) => commands::execute_score(args, &config, &formatter).await?,
        Command::Import(args) => commands::execute_import(args, &config, &formatter).await?,
        Command::Review(args) => commands::execute_review(args, &config, &formatter).await?,
        Command::Reviews(args) => commands::execute_reviews(args, &config, &formatter).await?,
        Command::Stats => commands::execute_stats(&config, &formatter).await?,
        Command::Heuristics => commands::execute_heuristics(&config).await?,
    }

    Ok(())
}

/// Log to stderr so stdout stays clean for JSON and quiet output.
fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .with_target(false)
        .init();
}
