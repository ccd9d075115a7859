//! Review and reviews command implementations.

use crate::cli::{ReviewArgs, ReviewsArgs};
use crate::config::{Config, OutputFormat};
use crate::error::Result;
use crate::output::Formatter;
use verity_domain::traits::ReviewStore;
use verity_domain::ReviewScores;

/// Execute the review command.
pub async fn execute_review(args: ReviewArgs, config: &Config, formatter: &Formatter) -> Result<()> {
    let scores = ReviewScores {
        accuracy: args.accuracy,
        credibility: args.credibility,
        citation: args.citation,
        reasoning: args.reasoning,
        confidence: args.confidence,
    };

    let mut store = config.open_store()?;
    let id = store.add_review(&args.url, scores, &args.notes)?;
    let stats = store.article_stats(&args.url)?;

    match formatter.format() {
        OutputFormat::Quiet => println!("{}", id),
        OutputFormat::Json => println!(
            "{}",
            serde_json::to_string_pretty(&serde_json::json!({
                "id": id.to_string(),
                "url": args.url,
                "mean": scores.mean(),
                "stats": stats,
            }))?
        ),
        OutputFormat::Table => {
            println!("{}", formatter.success(&format!("Review recorded: {}", id)));
            println!(
                "{}",
                formatter.info(&format!(
                    "{} review(s) for this article, average {:.2}",
                    stats.count, stats.average
                ))
            );
        }
    }

    Ok(())
}

/// Execute the reviews command.
pub async fn execute_reviews(args: ReviewsArgs, config: &Config, formatter: &Formatter) -> Result<()> {
    let store = config.open_store()?;

    if store.get_article(&args.url)?.is_none() {
        return Err(verity_store::StoreError::NotFound(args.url).into());
    }

    let reviews = store.reviews_for(&args.url)?;
    let stats = store.article_stats(&args.url)?;

    println!("{}", formatter.format_reviews(&reviews, &stats)?);
    Ok(())
}
