//! Verity Heuristics
//!
//! The title-credibility engine: a transparent, rule-based classifier for
//! scraped news headlines and the diversity-aware selection of which ones
//! most warrant human review.
//!
//! The engine provides:
//! - Domain credibility classification (curated tier lists, substring match)
//! - Title signal extraction (verifiable / speculative / extreme families)
//! - Truth-level estimation (ordered first-match decision table)
//! - Sensationalism scoring (pattern hits plus configurable boosts)
//! - Diversity-balanced shortlist selection (per-tier quotas)
//!
//! All tables are data in [`HeuristicsConfig`]; nothing here holds mutable
//! state, so analysis is deterministic and safe to run from many threads.
//!
//! # Examples
//!
//! ```
//! use verity_domain::{CredibilityTier, ScrapedItem};
//! use verity_heuristics::HeadlineAnalyzer;
//!
//! let analyzer = HeadlineAnalyzer::default_config().unwrap();
//! let items = vec![
//!     ScrapedItem::success("https://openai.com/blog", "OpenAI announces breakthrough model"),
//! ];
//!
//! let shortlist = analyzer.shortlist(&items);
//! assert_eq!(shortlist.len(), 1);
//! assert_eq!(shortlist.items()[0].credibility, CredibilityTier::High);
//! ```

#![warn(missing_docs)]

mod classifier;
mod config;
mod engine;
mod error;
mod patterns;
mod selector;
mod sensational;
mod signals;
pub mod truth;

pub use classifier::{domain_of, DomainClassifier};
pub use config::{HeuristicsConfig, SensationalConfig, SignalPatterns, TierDomains, TierQuotas};
pub use engine::HeadlineAnalyzer;
pub use error::HeuristicsError;
pub use patterns::PatternSet;
pub use selector::DiversitySelector;
pub use sensational::{SensationalScore, SensationalismScorer};
pub use signals::SignalExtractor;
