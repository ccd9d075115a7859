//! Scrape command implementation.

use crate::cli::ScrapeArgs;
use crate::config::{Config, OutputFormat};
use crate::error::{CliError, Result};
use crate::output::Formatter;
use crate::report::{successful_scrapes, write_results};
use std::path::Path;
use verity_domain::ScrapedItem;
use verity_scraper::{load_urls, ScraperConfig, TitleScraper};

/// Default results file name.
pub const RESULTS_FILE: &str = "results.json";

/// Execute the scrape command.
pub async fn execute_scrape(args: ScrapeArgs, config: &Config, formatter: &Formatter) -> Result<()> {
    scrape(&args, config, formatter).await?;
    Ok(())
}

/// Scrape every listed URL and write the results file.
///
/// Returns the scrape outcomes for commands that continue with analysis.
pub(crate) async fn scrape(args: &ScrapeArgs, config: &Config, formatter: &Formatter) -> Result<Vec<ScrapedItem>> {
    let urls = load_urls(&args.urls)?;
    if urls.is_empty() {
        return Err(CliError::InvalidInput(format!(
            "No URLs found in {}",
            args.urls.display()
        )));
    }

    let scraper_config = scraper_config(args, config)?;
    let scraper = TitleScraper::http(scraper_config)?;
    let items = scraper.scrape_all(&urls).await;

    let output = args
        .output
        .clone()
        .unwrap_or_else(|| config.output_file(RESULTS_FILE));
    write_results(&output, &items)?;

    report_scrape(&items, &output, formatter);
    Ok(items)
}

fn scraper_config(args: &ScrapeArgs, config: &Config) -> Result<ScraperConfig> {
    let mut scraper_config = config.scraper()?;
    if let Some(workers) = args.workers {
        scraper_config.max_workers = workers;
    }
    if let Some(timeout) = args.timeout {
        scraper_config.timeout_secs = timeout;
    }
    scraper_config.validate().map_err(CliError::InvalidInput)?;
    Ok(scraper_config)
}

fn report_scrape(items: &[ScrapedItem], output: &Path, formatter: &Formatter) {
    if formatter.format() == OutputFormat::Quiet {
        return;
    }

    let succeeded = successful_scrapes(items);
    println!(
        "{}",
        formatter.success(&format!("Scraped {} of {} URLs", succeeded, items.len()))
    );
    if succeeded < items.len() {
        println!(
            "{}",
            formatter.warning(&format!("{} URL(s) yielded no title", items.len() - succeeded))
        );
    }
    println!(
        "{}",
        formatter.info(&format!("All results saved to {}", output.display()))
    );
}
