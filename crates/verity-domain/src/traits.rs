//! Trait definitions for external interactions
//!
//! These traits define the persistence boundary. Implementations live in
//! other crates (verity-store).

use crate::{ArticleRecord, ArticleStats, ImportSummary, Review, ReviewId, ReviewScores, StoreStatistics};

/// Trait for storing articles and their peer reviews
///
/// Implemented by the infrastructure layer (verity-store)
pub trait ReviewStore {
    /// Error type for store operations
    type Error;

    /// Add articles, skipping URLs that are already known
    fn add_articles(&mut self, articles: &[ArticleRecord]) -> Result<ImportSummary, Self::Error>;

    /// All known articles, newest first
    fn list_articles(&self) -> Result<Vec<ArticleRecord>, Self::Error>;

    /// Look up an article by URL
    fn get_article(&self, url: &str) -> Result<Option<ArticleRecord>, Self::Error>;

    /// Record a review, creating the article if it is not yet known
    fn add_review(
        &mut self,
        url: &str,
        scores: ReviewScores,
        notes: &str,
    ) -> Result<ReviewId, Self::Error>;

    /// Reviews for one article, oldest first
    fn reviews_for(&self, url: &str) -> Result<Vec<Review>, Self::Error>;

    /// Every stored review
    fn all_reviews(&self) -> Result<Vec<Review>, Self::Error>;

    /// Aggregate review figures for one article
    fn article_stats(&self, url: &str) -> Result<ArticleStats, Self::Error> {
        let reviews = self.reviews_for(url)?;
        Ok(ArticleStats::from_scores(reviews.iter().map(|r| &r.scores)))
    }

    /// Store-wide counts
    fn statistics(&self) -> Result<StoreStatistics, Self::Error>;
}
