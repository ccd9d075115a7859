//! Analyze command implementation.

use crate::cli::AnalyzeArgs;
use crate::commands::scrape::RESULTS_FILE;
use crate::config::{Config, OutputFormat};
use crate::error::Result;
use crate::output::Formatter;
use crate::report::{read_results, successful_scrapes, write_shortlist};
use std::path::PathBuf;
use verity_domain::{ScrapedItem, Shortlist};
use verity_heuristics::HeadlineAnalyzer;

/// Default shortlist file name.
pub const SHORTLIST_FILE: &str = "shortlist.json";

/// Execute the analyze command.
pub async fn execute_analyze(args: AnalyzeArgs, config: &Config, formatter: &Formatter) -> Result<()> {
    let input = args.input.unwrap_or_else(|| config.output_file(RESULTS_FILE));
    let items = read_results(&input)?;
    tracing::info!("Loaded {} scrape results from {}", items.len(), input.display());

    analyze(&items, args.output, config, formatter)?;
    Ok(())
}

/// Analyze scrape results, write the shortlist file and print it.
pub(crate) fn analyze(
    items: &[ScrapedItem],
    output: Option<PathBuf>,
    config: &Config,
    formatter: &Formatter,
) -> Result<Shortlist> {
    let analyzer = HeadlineAnalyzer::new(&config.heuristics()?)?;
    let shortlist = analyzer.shortlist(items);

    let output = output.unwrap_or_else(|| config.output_file(SHORTLIST_FILE));
    write_shortlist(&output, &shortlist)?;

    println!("{}", formatter.format_shortlist(&shortlist, successful_scrapes(items))?);
    if formatter.format() == OutputFormat::Table {
        println!(
            "{}",
            formatter.success(&format!(
                "Saved {} headlines from diverse sources to {}",
                shortlist.len(),
                output.display()
            ))
        );
    }

    Ok(shortlist)
}
