use async_trait::async_trait;
use thiserror::Error;

use crate::domain::page::PageDocument;

pub mod trustpilot;

/// Errors raised while talking to a review site.
#[derive(Debug, Error)]
pub enum CrawlerError {
    #[error("failed to build crawler: {0}")]
    Build(String),
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),
    #[error("unexpected status {status} for {url}")]
    Status {
        url: String,
        status: reqwest::StatusCode,
    },
    #[error("failed to parse page {url}: {reason}")]
    Parse { url: String, reason: String },
    #[error("invalid selector: {0}")]
    Selector(String),
}

pub type CrawlerResult<T> = Result<T, CrawlerError>;

/// Builds the shared HTTP client used by every page request of a run.
pub fn build_reqwest_client(user_agent: &str) -> CrawlerResult<reqwest::Client> {
    reqwest::Client::builder()
        .user_agent(user_agent)
        .build()
        .map_err(|e| CrawlerError::Build(e.to_string()))
}

/// Retrieves the review pages of a single product.
///
/// Implementations perform exactly one retrieval per call and never retry;
/// the caller decides whether a failure is fatal.
#[async_trait]
pub trait ReviewPageFetcher: Send + Sync {
    /// The product identifier as given by the caller.
    fn product_name(&self) -> &str;

    /// Query-free URL of the product's review page, used as the prefix of
    /// review permalinks.
    fn product_url(&self) -> &str;

    /// Fetches and parses page `page` (1-based).
    async fn fetch_page(&self, page: usize) -> CrawlerResult<PageDocument>;
}
