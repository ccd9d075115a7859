//! Verity Domain Layer
//!
//! This crate contains the value types shared by every other Verity crate.
//! It holds no I/O and no mutable state; the heuristic engine, the scraper,
//! the review store and the CLI all speak in these types.
//!
//! ## Key Concepts
//!
//! - **ScrapedItem**: a (url, title, status) triple produced by the scraper
//! - **CredibilityTier**: ordered trust bucket assigned to a publishing domain
//! - **TruthLevel**: categorical verdict on how a headline reads
//! - **AnalyzedTitle**: one scored, classified headline
//! - **Shortlist**: the diversity-balanced selection handed to reviewers
//! - **Review**: a reviewer's five-category score for an article
//!
//! ## Architecture
//!
//! - Pure data and small helpers only
//! - Infrastructure implementations live in other crates
//! - Trait definitions for the persistence boundary

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod analysis;
pub mod article;
pub mod review;
pub mod tier;
pub mod traits;
pub mod truth;

// Re-exports for convenience
pub use analysis::{AnalyzedTitle, Shortlist};
pub use article::{ScrapeStatus, ScrapedItem};
pub use review::{
    ArticleRecord, ArticleStats, ImportSummary, Review, ReviewId, ReviewScores, StoreStatistics,
};
pub use tier::CredibilityTier;
pub use truth::{SignalCounts, TruthLevel};
