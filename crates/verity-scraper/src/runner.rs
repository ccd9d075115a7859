//! Batch title scraping

use crate::{extract_title, HttpFetcher, PageFetcher, ScraperConfig, ScraperError};
use futures::stream::{self, StreamExt};
use verity_domain::{ScrapeStatus, ScrapedItem};

/// Scrapes headlines from a list of URLs
///
/// A failed fetch never aborts a batch: every URL yields exactly one
/// `ScrapedItem` carrying its status.
pub struct TitleScraper<F: PageFetcher> {
    fetcher: F,
    config: ScraperConfig,
}

impl TitleScraper<HttpFetcher> {
    /// Create a scraper backed by a real HTTP client
    pub fn http(config: ScraperConfig) -> Result<Self, ScraperError> {
        let fetcher = HttpFetcher::new(&config)?;
        Ok(Self::new(fetcher, config))
    }
}

impl<F: PageFetcher> TitleScraper<F> {
    /// Create a scraper around any fetcher
    pub fn new(fetcher: F, config: ScraperConfig) -> Self {
        Self { fetcher, config }
    }

    /// Fetch one page and extract its headline
    pub async fn fetch_title(&self, url: &str) -> ScrapedItem {
        match self.fetcher.fetch(url).await {
            Ok(html) => match extract_title(&html) {
                Some(title) => ScrapedItem::success(url, title),
                None => ScrapedItem::failed(url, ScrapeStatus::NoTitle, None),
            },
            Err(e) => {
                let status = match e {
                    ScraperError::Timeout => ScrapeStatus::Timeout,
                    ScraperError::Body(_) => ScrapeStatus::ParseError,
                    _ => ScrapeStatus::Error,
                };
                let message = match status {
                    ScrapeStatus::Timeout => None,
                    _ => Some(self.truncate(&e.to_string())),
                };
                ScrapedItem::failed(url, status, message)
            }
        }
    }

    /// Scrape every URL with at most `max_workers` requests in flight
    ///
    /// Results come back in completion order.
    pub async fn scrape_all(&self, urls: &[String]) -> Vec<ScrapedItem> {
        let total = urls.len();
        tracing::info!("Scraping {} URLs with {} workers", total, self.config.max_workers);

        let delay = self.config.politeness_delay();
        let mut pending = stream::iter(urls.iter())
            .map(|url| async move {
                let item = self.fetch_title(url).await;
                if !delay.is_zero() {
                    tokio::time::sleep(delay).await;
                }
                item
            })
            .buffer_unordered(self.config.max_workers.max(1));

        let mut items = Vec::with_capacity(total);
        while let Some(item) = pending.next().await {
            let index = items.len() + 1;
            match item.analyzable_title() {
                Some(title) => tracing::info!("[{}/{}] ✓ {}", index, total, title),
                None => tracing::warn!("[{}/{}] ✗ {} {}", index, total, item.status, item.url),
            }
            items.push(item);
        }

        let succeeded = items.iter().filter(|i| i.status == ScrapeStatus::Success).count();
        tracing::info!("Scraped {}/{} titles", succeeded, total);
        items
    }

    fn truncate(&self, message: &str) -> String {
        message.chars().take(self.config.error_message_limit).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{MockFetcher, MockResponse};

    fn quiet_config() -> ScraperConfig {
        ScraperConfig {
            politeness_delay_ms: 0,
            ..ScraperConfig::default()
        }
    }

    #[tokio::test]
    async fn test_fetch_title_success() {
        let mut fetcher = MockFetcher::default();
        fetcher.add_page(
            "https://openai.com/blog",
            r#"<html><head><meta property="og:title" content="  New   model released "></head></html>"#,
        );

        let scraper = TitleScraper::new(fetcher, quiet_config());
        let item = scraper.fetch_title("https://openai.com/blog").await;

        assert_eq!(item.status, ScrapeStatus::Success);
        assert_eq!(item.title.as_deref(), Some("New model released"));
        assert!(item.error.is_none());
    }

    #[tokio::test]
    async fn test_fetch_title_no_title() {
        let mut fetcher = MockFetcher::default();
        fetcher.add_page("https://a.example", "<html><body><p>text</p></body></html>");

        let scraper = TitleScraper::new(fetcher, quiet_config());
        let item = scraper.fetch_title("https://a.example").await;

        assert_eq!(item.status, ScrapeStatus::NoTitle);
        assert!(item.title.is_none());
    }

    #[tokio::test]
    async fn test_fetch_title_failure_statuses() {
        let mut fetcher = MockFetcher::default();
        fetcher.add_response("https://slow.example", MockResponse::Timeout);
        fetcher.add_response("https://gone.example", MockResponse::Status(410));
        fetcher.add_response("https://bad.example", MockResponse::Body("invalid utf-8".to_string()));

        let scraper = TitleScraper::new(fetcher, quiet_config());

        let item = scraper.fetch_title("https://slow.example").await;
        assert_eq!(item.status, ScrapeStatus::Timeout);

        let item = scraper.fetch_title("https://gone.example").await;
        assert_eq!(item.status, ScrapeStatus::Error);
        assert!(item.error.as_deref().unwrap().contains("410"));

        let item = scraper.fetch_title("https://bad.example").await;
        assert_eq!(item.status, ScrapeStatus::ParseError);
    }

    #[tokio::test]
    async fn test_error_message_truncated() {
        let mut fetcher = MockFetcher::default();
        fetcher.add_response("https://a.example", MockResponse::Transport("x".repeat(200)));

        let config = ScraperConfig {
            error_message_limit: 20,
            ..quiet_config()
        };
        let scraper = TitleScraper::new(fetcher, config);
        let item = scraper.fetch_title("https://a.example").await;

        assert_eq!(item.status, ScrapeStatus::Error);
        assert_eq!(item.error.unwrap().chars().count(), 20);
    }

    #[tokio::test]
    async fn test_scrape_all_yields_one_item_per_url() {
        let mut fetcher = MockFetcher::default();
        let mut urls = Vec::new();
        for i in 0..20 {
            let url = format!("https://site{}.example/post", i);
            if i % 4 == 0 {
                fetcher.add_response(url.clone(), MockResponse::Timeout);
            } else {
                fetcher.add_page(url.clone(), format!("<title>Headline {}</title>", i));
            }
            urls.push(url);
        }

        let config = ScraperConfig {
            max_workers: 3,
            ..quiet_config()
        };
        let scraper = TitleScraper::new(fetcher, config);
        let items = scraper.scrape_all(&urls).await;

        assert_eq!(items.len(), 20);
        let successes = items.iter().filter(|i| i.status == ScrapeStatus::Success).count();
        assert_eq!(successes, 15);

        let mut seen: Vec<_> = items.iter().map(|i| i.url.clone()).collect();
        seen.sort();
        let mut expected = urls.clone();
        expected.sort();
        assert_eq!(seen, expected);
    }

    #[tokio::test]
    async fn test_scrape_all_empty() {
        let scraper = TitleScraper::new(MockFetcher::default(), quiet_config());
        assert!(scraper.scrape_all(&[]).await.is_empty());
    }
}
