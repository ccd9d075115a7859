//! Review module - peer credibility scores for articles

use serde::{Deserialize, Serialize};
use std::fmt;

/// Lowest value a review category accepts
pub const MIN_CATEGORY_SCORE: u8 = 1;

/// Highest value a review category accepts
pub const MAX_CATEGORY_SCORE: u8 = 10;

/// Unique identifier for a review based on UUIDv7
///
/// UUIDv7 keeps reviews chronologically sortable without a shared counter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ReviewId(u128);

impl ReviewId {
    /// Generate a new UUIDv7-based ReviewId
    ///
    /// # Examples
    ///
    /// ```
    /// use verity_domain::ReviewId;
    ///
    /// let id = ReviewId::new();
    /// assert!(id.value() > 0);
    /// ```
    pub fn new() -> Self {
        Self(uuid::Uuid::now_v7().as_u128())
    }

    /// Create a ReviewId from a raw u128 value (storage layer)
    pub fn from_value(value: u128) -> Self {
        Self(value)
    }

    /// Parse a ReviewId from its UUID string form
    pub fn from_string(s: &str) -> Result<Self, String> {
        uuid::Uuid::parse_str(s)
            .map(|u| Self(u.as_u128()))
            .map_err(|e| format!("Invalid review id: {}", e))
    }

    /// Get the raw u128 value
    pub fn value(&self) -> u128 {
        self.0
    }
}

impl Default for ReviewId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ReviewId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", uuid::Uuid::from_u128(self.0))
    }
}

/// The five review categories, each scored 1-10
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ReviewScores {
    /// Factual accuracy of the headline and article
    pub accuracy: u8,
    /// Credibility of the source
    pub credibility: u8,
    /// Quality of citations
    pub citation: u8,
    /// Soundness of reasoning
    pub reasoning: u8,
    /// Reviewer's confidence in their own assessment
    pub confidence: u8,
}

impl ReviewScores {
    /// Category names paired with their values, in display order
    pub fn categories(&self) -> [(&'static str, u8); 5] {
        [
            ("accuracy", self.accuracy),
            ("credibility", self.credibility),
            ("citation", self.citation),
            ("reasoning", self.reasoning),
            ("confidence", self.confidence),
        ]
    }

    /// Check every category is within 1-10
    pub fn validate(&self) -> Result<(), String> {
        for (name, value) in self.categories() {
            if !(MIN_CATEGORY_SCORE..=MAX_CATEGORY_SCORE).contains(&value) {
                return Err(format!(
                    "{} score {} is outside [{}, {}]",
                    name, value, MIN_CATEGORY_SCORE, MAX_CATEGORY_SCORE
                ));
            }
        }
        Ok(())
    }

    /// Mean of the five categories
    pub fn mean(&self) -> f64 {
        let total: u32 = self.categories().iter().map(|(_, v)| u32::from(*v)).sum();
        f64::from(total) / 5.0
    }
}

/// A stored peer review
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Review {
    /// Unique identifier
    #[serde(with = "review_id_string")]
    pub id: ReviewId,

    /// URL of the reviewed article
    pub url: String,

    /// Category scores
    pub scores: ReviewScores,

    /// Free-form reviewer notes
    pub notes: String,

    /// When the review was recorded (seconds since Unix epoch)
    pub created_at: u64,
}

mod review_id_string {
    use super::ReviewId;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(id: &ReviewId, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(id)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<ReviewId, D::Error> {
        let s = String::deserialize(deserializer)?;
        ReviewId::from_string(&s).map_err(serde::de::Error::custom)
    }
}

/// An article known to the review store
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArticleRecord {
    /// Article URL (unique)
    pub url: String,
    /// Headline shown to reviewers
    pub title: String,
}

/// Aggregate review figures for one article
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ArticleStats {
    /// Mean over reviews of each review's category mean; 0.0 when unreviewed
    pub average: f64,
    /// Number of reviews
    pub count: usize,
}

impl ArticleStats {
    /// Aggregate a set of reviews
    pub fn from_scores<'a, I>(scores: I) -> Self
    where
        I: IntoIterator<Item = &'a ReviewScores>,
    {
        let (sum, count) = scores
            .into_iter()
            .fold((0.0, 0usize), |(sum, count), s| (sum + s.mean(), count + 1));

        if count == 0 {
            return Self::default();
        }

        Self {
            average: sum / count as f64,
            count,
        }
    }
}

/// Outcome of importing a batch of articles
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImportSummary {
    /// Articles that were not yet known
    pub new_count: usize,
    /// Titles of skipped articles whose stored title matched
    pub duplicates: Vec<String>,
}

/// Store-wide counts
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoreStatistics {
    /// Known articles
    pub total_articles: usize,
    /// Stored reviews
    pub total_reviews: usize,
    /// Articles with at least one review
    pub articles_with_reviews: usize,
    /// Articles nobody has reviewed yet
    pub articles_without_reviews: usize,
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Property: the aggregate average stays within the category bounds
        #[test]
        fn test_average_within_bounds(values in prop::collection::vec(1u8..=10, 1..20)) {
            let reviews: Vec<ReviewScores> = values
                .iter()
                .map(|v| ReviewScores { accuracy: *v, credibility: *v, citation: *v, reasoning: *v, confidence: *v })
                .collect();
            let stats = ArticleStats::from_scores(reviews.iter());
            prop_assert_eq!(stats.count, values.len());
            prop_assert!(stats.average >= 1.0 && stats.average <= 10.0);
        }

        /// Property: ReviewId ordering matches u128 ordering
        #[test]
        fn test_review_id_ordering(a: u128, b: u128) {
            prop_assert_eq!(ReviewId::from_value(a) < ReviewId::from_value(b), a < b);
        }
    }
}
