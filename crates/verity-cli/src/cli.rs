//! CLI command definitions and argument parsing.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Verity - Find the headlines most worth fact-checking.
#[derive(Debug, Parser)]
#[command(name = "verity")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Output format
    #[arg(short, long, value_enum, global = true)]
    pub format: Option<CliFormat>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Configuration file path
    #[arg(short, long, global = true, env = "VERITY_CONFIG")]
    pub config: Option<PathBuf>,

    /// Heuristics tables (TOML), overriding the configured file
    #[arg(long, global = true, env = "VERITY_HEURISTICS")]
    pub heuristics: Option<PathBuf>,

    /// Log debug details to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Output format options.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum CliFormat {
    /// Table format (default)
    Table,
    /// JSON format
    Json,
    /// Quiet format (minimal output)
    Quiet,
}

/// CLI commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Scrape headlines from a URL list into a results file
    Scrape(ScrapeArgs),

    /// Analyze a results file and write the reviewer shortlist
    Analyze(AnalyzeArgs),

    /// Scrape, then analyze
    Run(RunArgs),

    /// Show the credibility tier of a URL
    Classify(ClassifyArgs),

    /// Score a single headline
    Score(ScoreArgs),

    /// Import a shortlist into the review database
    Import(ImportArgs),

    /// Record a peer review for an article
    Review(ReviewArgs),

    /// Show the reviews recorded for an article
    Reviews(ReviewsArgs),

    /// Show review database statistics
    Stats,

    /// Print the default heuristics tables as TOML
    Heuristics,
}

/// Arguments for the scrape command.
#[derive(Debug, Parser)]
pub struct ScrapeArgs {
    /// File with one URL per line
    #[arg(default_value = "urls.txt")]
    pub urls: PathBuf,

    /// Where to write scrape results (default: results.json in the output directory)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Maximum concurrent requests
    #[arg(short, long)]
    pub workers: Option<usize>,

    /// Per-request timeout in seconds
    #[arg(short, long)]
    pub timeout: Option<u64>,
}

/// Arguments for the analyze command.
#[derive(Debug, Parser)]
pub struct AnalyzeArgs {
    /// Scrape results to analyze (default: results.json in the output directory)
    pub input: Option<PathBuf>,

    /// Where to write the shortlist (default: shortlist.json in the output directory)
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Arguments for the run command.
#[derive(Debug, Parser)]
pub struct RunArgs {
    #[command(flatten)]
    pub scrape: ScrapeArgs,

    /// Where to write the shortlist (default: shortlist.json in the output directory)
    #[arg(short, long)]
    pub shortlist: Option<PathBuf>,
}

/// Arguments for the classify command.
#[derive(Debug, Parser)]
pub struct ClassifyArgs {
    /// Article URL
    pub url: String,
}

/// Arguments for the score command.
#[derive(Debug, Parser)]
pub struct ScoreArgs {
    /// Headline text
    pub title: String,

    /// Source URL, used for credibility and truth level
    #[arg(short, long, default_value = "")]
    pub url: String,
}

/// Arguments for the import command.
#[derive(Debug, Parser)]
pub struct ImportArgs {
    /// Shortlist JSON file (grouped export or flat list)
    pub file: PathBuf,
}

/// Arguments for the review command.
#[derive(Debug, Parser)]
pub struct ReviewArgs {
    /// Article URL
    pub url: String,

    /// Factual accuracy (1-10)
    #[arg(long, value_parser = clap::value_parser!(u8).range(1..=10))]
    pub accuracy: u8,

    /// Source credibility (1-10)
    #[arg(long, value_parser = clap::value_parser!(u8).range(1..=10))]
    pub credibility: u8,

    /// Citation quality (1-10)
    #[arg(long, value_parser = clap::value_parser!(u8).range(1..=10))]
    pub citation: u8,

    /// Soundness of reasoning (1-10)
    #[arg(long, value_parser = clap::value_parser!(u8).range(1..=10))]
    pub reasoning: u8,

    /// Confidence in this review (1-10)
    #[arg(long, value_parser = clap::value_parser!(u8).range(1..=10))]
    pub confidence: u8,

    /// Free-form notes
    #[arg(short, long, default_value = "")]
    pub notes: String,
}

/// Arguments for the reviews command.
#[derive(Debug, Parser)]
pub struct ReviewsArgs {
    /// Article URL
    pub url: String,
}

impl From<CliFormat> for crate::config::OutputFormat {
    fn from(format: CliFormat) -> Self {
        match format {
            CliFormat::Table => crate::config::OutputFormat::Table,
            CliFormat::Json => crate::config::OutputFormat::Json,
            CliFormat::Quiet => crate::config::OutputFormat::Quiet,
        }
    }
}
