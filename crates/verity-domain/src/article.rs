//! Scraped article module - what the scraping collaborator hands to the core

use serde::{Deserialize, Serialize};
use std::fmt;

/// Outcome of fetching one URL
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScrapeStatus {
    /// Page fetched and a headline was found
    Success,

    /// Page fetched but no headline could be extracted
    NoTitle,

    /// Request timed out
    Timeout,

    /// Transport or HTTP status failure
    Error,

    /// Response body could not be read or decoded
    ParseError,
}

impl ScrapeStatus {
    /// Get the status name as a string
    pub fn as_str(&self) -> &'static str {
        match self {
            ScrapeStatus::Success => "success",
            ScrapeStatus::NoTitle => "no_title",
            ScrapeStatus::Timeout => "timeout",
            ScrapeStatus::Error => "error",
            ScrapeStatus::ParseError => "parse_error",
        }
    }
}

impl fmt::Display for ScrapeStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One scraped (url, title) pair
///
/// Produced by the scraper and read-only to the heuristic engine. Only items
/// with `Success` status and a non-empty title take part in analysis.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScrapedItem {
    /// Article URL as requested
    pub url: String,

    /// Extracted headline, if any
    pub title: Option<String>,

    /// Fetch outcome
    pub status: ScrapeStatus,

    /// Short failure description for `Error` and `ParseError`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ScrapedItem {
    /// A successfully scraped headline
    pub fn success(url: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            title: Some(title.into()),
            status: ScrapeStatus::Success,
            error: None,
        }
    }

    /// A fetch that produced no headline
    pub fn failed(url: impl Into<String>, status: ScrapeStatus, error: Option<String>) -> Self {
        Self {
            url: url.into(),
            title: None,
            status,
            error,
        }
    }

    /// The headline to analyze, if this item qualifies for analysis
    pub fn analyzable_title(&self) -> Option<&str> {
        match (&self.status, &self.title) {
            (ScrapeStatus::Success, Some(title)) if !title.is_empty() => Some(title),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_is_analyzable() {
        let item = ScrapedItem::success("https://openai.com/blog", "OpenAI announces model");
        assert_eq!(item.analyzable_title(), Some("OpenAI announces model"));
    }

    #[test]
    fn test_failures_are_not_analyzable() {
        for status in [
            ScrapeStatus::NoTitle,
            ScrapeStatus::Timeout,
            ScrapeStatus::Error,
            ScrapeStatus::ParseError,
        ] {
            let item = ScrapedItem::failed("https://example.com", status, None);
            assert!(item.analyzable_title().is_none(), "{} should be skipped", status);
        }
    }

    #[test]
    fn test_empty_title_is_not_analyzable() {
        let item = ScrapedItem::success("https://example.com", "");
        assert!(item.analyzable_title().is_none());
    }

    #[test]
    fn test_status_serialization() {
        let item = ScrapedItem::failed(
            "https://example.com",
            ScrapeStatus::ParseError,
            Some("invalid utf-8".to_string()),
        );
        let json = serde_json::to_string(&item).unwrap();
        assert!(json.contains("\"parse_error\""));
        assert!(json.contains("invalid utf-8"));

        let ok = ScrapedItem::success("https://example.com", "Title");
        let json = serde_json::to_string(&ok).unwrap();
        assert!(!json.contains("error"));
    }
}
