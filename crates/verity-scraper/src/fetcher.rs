//! Page fetching
//!
//! `HttpFetcher` talks to the network; `MockFetcher` serves canned pages for
//! tests and offline runs.

use crate::{ScraperConfig, ScraperError};
use async_trait::async_trait;
use std::collections::HashMap;
use std::future::Future;
use std::time::Duration;

/// Fetches the HTML body of a page
#[async_trait]
pub trait PageFetcher: Send + Sync {
    /// Fetch one URL, returning its body text
    async fn fetch(&self, url: &str) -> Result<String, ScraperError>;
}

/// reqwest-backed fetcher with timeout, user agent and retries
///
/// Transient failures (timeouts, transport errors, 5xx) are retried up to
/// `max_attempts` times with exponential backoff: 1s, 2s, 4s, ...
pub struct HttpFetcher {
    client: reqwest::Client,
    max_attempts: u32,
}

impl HttpFetcher {
    /// Create a fetcher from configuration
    pub fn new(config: &ScraperConfig) -> Result<Self, ScraperError> {
        config.validate().map_err(ScraperError::Config)?;

        let client = reqwest::Client::builder()
            .timeout(config.timeout())
            .user_agent(config.user_agent.clone())
            .build()
            .map_err(|e| ScraperError::Config(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            client,
            max_attempts: config.max_attempts,
        })
    }

    async fn fetch_once(&self, url: &str) -> Result<String, ScraperError> {
        let response = self.client.get(url).send().await.map_err(|e| {
            if e.is_timeout() {
                ScraperError::Timeout
            } else {
                ScraperError::Http(e.to_string())
            }
        })?;

        let status = response.status();
        if !status.is_success() {
            return Err(ScraperError::Status(
                status.as_u16(),
                status.canonical_reason().unwrap_or("Unknown status").to_string(),
            ));
        }

        response.text().await.map_err(|e| {
            if e.is_timeout() {
                ScraperError::Timeout
            } else {
                ScraperError::Body(e.to_string())
            }
        })
    }
}

#[async_trait]
impl PageFetcher for HttpFetcher {
    async fn fetch(&self, url: &str) -> Result<String, ScraperError> {
        retry_transient(url, self.max_attempts, move || self.fetch_once(url), tokio::time::sleep).await
    }
}

/// Run `attempt` until it succeeds, fails permanently, or `max_attempts` is spent
///
/// The n-th retry waits `2^(n-1)` seconds via `sleep`.
async fn retry_transient<T, A, AFut, S, SFut>(
    url: &str,
    max_attempts: u32,
    mut attempt: A,
    mut sleep: S,
) -> Result<T, ScraperError>
where
    A: FnMut() -> AFut,
    AFut: Future<Output = Result<T, ScraperError>>,
    S: FnMut(Duration) -> SFut,
    SFut: Future<Output = ()>,
{
    let mut attempts = 0;
    loop {
        match attempt().await {
            Ok(value) => return Ok(value),
            Err(e) => {
                attempts += 1;
                if attempts >= max_attempts || !e.is_transient() {
                    return Err(e);
                }
                let delay = Duration::from_secs(2u64.pow(attempts - 1));
                tracing::debug!(url, attempt = attempts, error = %e, "retrying fetch in {:?}", delay);
                sleep(delay).await;
            }
        }
    }
}

/// Canned outcome for one URL in a `MockFetcher`
#[derive(Debug, Clone, PartialEq)]
pub enum MockResponse {
    /// Serve this HTML body
    Html(String),
    /// Behave as if the request timed out
    Timeout,
    /// Answer with an HTTP error status
    Status(u16),
    /// Fail at the transport level
    Transport(String),
    /// Fail while reading the body
    Body(String),
}

/// Mock fetcher for deterministic testing
///
/// URLs without a configured response answer with HTTP 404.
///
/// # Examples
///
/// ```
/// use verity_scraper::{MockFetcher, MockResponse};
///
/// let mut fetcher = MockFetcher::default();
/// fetcher.add_page("https://a.example", "<title>A</title>");
/// fetcher.add_response("https://slow.example", MockResponse::Timeout);
/// ```
#[derive(Debug, Clone, Default)]
pub struct MockFetcher {
    responses: HashMap<String, MockResponse>,
}

impl MockFetcher {
    /// Serve `html` for `url`
    pub fn add_page(&mut self, url: impl Into<String>, html: impl Into<String>) {
        self.responses.insert(url.into(), MockResponse::Html(html.into()));
    }

    /// Configure an arbitrary outcome for `url`
    pub fn add_response(&mut self, url: impl Into<String>, response: MockResponse) {
        self.responses.insert(url.into(), response);
    }
}

#[async_trait]
impl PageFetcher for MockFetcher {
    async fn fetch(&self, url: &str) -> Result<String, ScraperError> {
        match self.responses.get(url) {
            Some(MockResponse::Html(body)) => Ok(body.clone()),
            Some(MockResponse::Timeout) => Err(ScraperError::Timeout),
            Some(MockResponse::Status(code)) => Err(ScraperError::Status(*code, "Mock status".to_string())),
            Some(MockResponse::Transport(msg)) => Err(ScraperError::Http(msg.clone())),
            Some(MockResponse::Body(msg)) => Err(ScraperError::Body(msg.clone())),
            None => Err(ScraperError::Status(404, "Not Found".to_string())),
        }
    }
}
