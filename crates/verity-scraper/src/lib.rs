//! Verity Scraper
//!
//! Fetches article pages and extracts their headlines, producing the
//! `ScrapedItem` batch the heuristic engine analyzes.
//!
//! # Architecture
//!
//! ```text
//! urls.txt → load_urls → TitleScraper → PageFetcher (HTTP) → extract_title → ScrapedItem
//! ```
//!
//! Fetching sits behind the [`PageFetcher`] trait so the batch logic can be
//! exercised without a network:
//!
//! - `HttpFetcher`: reqwest client with timeout, user agent and retries
//! - `MockFetcher`: canned responses for testing
//!
//! # Examples
//!
//! ```
//! use verity_domain::ScrapeStatus;
//! use verity_scraper::{MockFetcher, ScraperConfig, TitleScraper};
//!
//! # async fn example() {
//! let mut fetcher = MockFetcher::default();
//! fetcher.add_page("https://openai.com/blog", "<title>OpenAI announces a model</title>");
//!
//! let scraper = TitleScraper::new(fetcher, ScraperConfig::default());
//! let item = scraper.fetch_title("https://openai.com/blog").await;
//! assert_eq!(item.status, ScrapeStatus::Success);
//! # }
//! ```

#![warn(missing_docs)]

mod config;
mod extract;
mod fetcher;
mod runner;
mod urls;

use thiserror::Error;

pub use config::ScraperConfig;
pub use extract::{clean_title, extract_title};
pub use fetcher::{HttpFetcher, MockFetcher, MockResponse, PageFetcher};
pub use runner::TitleScraper;
pub use urls::{load_urls, parse_url_list};

/// Errors that can occur while scraping
#[derive(Error, Debug)]
pub enum ScraperError {
    /// Request did not complete within the configured timeout
    #[error("Request timed out")]
    Timeout,

    /// Network or transport failure
    #[error("Request failed: {0}")]
    Http(String),

    /// Server answered with a non-success status
    #[error("HTTP {0}: {1}")]
    Status(u16, String),

    /// Response body could not be read or decoded
    #[error("Invalid response body: {0}")]
    Body(String),

    /// URL list could not be read
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

impl ScraperError {
    /// Whether another attempt might succeed
    pub fn is_transient(&self) -> bool {
        match self {
            ScraperError::Timeout | ScraperError::Http(_) => true,
            ScraperError::Status(code, _) => *code >= 500,
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transient_errors() {
        assert!(ScraperError::Timeout.is_transient());
        assert!(ScraperError::Http("connection reset".to_string()).is_transient());
        assert!(ScraperError::Status(503, "Service Unavailable".to_string()).is_transient());
        assert!(!ScraperError::Status(404, "Not Found".to_string()).is_transient());
        assert!(!ScraperError::Body("bad utf-8".to_string()).is_transient());
    }
}
