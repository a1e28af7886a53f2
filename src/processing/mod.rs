use thiserror::Error;

use crate::crawlers::CrawlerError;

pub mod collector;
pub mod extract;
pub mod pagination;
pub mod session;

/// Failures that abort a whole scraping run.
#[derive(Debug, Error)]
pub enum ScrapeError {
    #[error("failed to scrape first page of {product}: {source}")]
    FirstPage {
        product: String,
        #[source]
        source: CrawlerError,
    },
    #[error("failed to build review extractor: {0}")]
    Extractor(CrawlerError),
    #[error("couldn't await a scraping task: {0}")]
    Join(#[from] tokio::task::JoinError),
}

pub type ScrapeResult<T> = Result<T, ScrapeError>;
