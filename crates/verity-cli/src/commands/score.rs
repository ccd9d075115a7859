//! Score command implementation.

use crate::cli::ScoreArgs;
use crate::config::Config;
use crate::error::{CliError, Result};
use crate::output::Formatter;
use verity_heuristics::HeadlineAnalyzer;

/// Execute the score command.
pub async fn execute_score(args: ScoreArgs, config: &Config, formatter: &Formatter) -> Result<()> {
    if args.title.trim().is_empty() {
        return Err(CliError::InvalidInput("Title must not be empty".to_string()));
    }

    let analyzer = HeadlineAnalyzer::new(&config.heuristics()?)?;
    let analysis = analyzer.analyze(&args.url, &args.title);

    println!("{}", formatter.format_analysis(&analysis)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::OutputFormat;

    #[tokio::test]
    async fn test_empty_title_rejected() {
        let formatter = Formatter::new(OutputFormat::Quiet, false);
        let args = ScoreArgs {
            title: "   ".to_string(),
            url: String::new(),
        };
        let result = execute_score(args, &Config::default(), &formatter).await;
        assert!(matches!(result, Err(CliError::InvalidInput(_))));
    }
}
