//! Run command implementation: scrape, then analyze.

use crate::cli::RunArgs;
use crate::commands::{analyze::analyze, scrape::scrape};
use crate::config::Config;
use crate::error::Result;
use crate::output::Formatter;

/// Execute the run command.
pub async fn execute_run(args: RunArgs, config: &Config, formatter: &Formatter) -> Result<()> {
    let items = scrape(&args.scrape, config, formatter).await?;

    tracing::info!("Analyzing titles for sensational content");
    analyze(&items, args.shortlist, config, formatter)?;

    Ok(())
}
