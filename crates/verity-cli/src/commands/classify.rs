//! Classify command implementation.

use crate::cli::ClassifyArgs;
use crate::config::Config;
use crate::error::Result;
use crate::output::Formatter;
use verity_heuristics::HeadlineAnalyzer;

/// Execute the classify command.
pub async fn execute_classify(args: ClassifyArgs, config: &Config, formatter: &Formatter) -> Result<()> {
    let analyzer = HeadlineAnalyzer::new(&config.heuristics()?)?;
    let tier = analyzer.classify(&args.url);

    println!("{}", formatter.format_tier(&args.url, tier)?);
    Ok(())
}
