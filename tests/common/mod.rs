//! Helpers for integration tests.
#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;
use review_crawlers::crawlers::{CrawlerError, CrawlerResult, ReviewPageFetcher};
use review_crawlers::domain::page::PageDocument;

pub const PRODUCT_URL: &str = "https://site.test/review/acme";

/// Markup of one review card whose title is `title`.
pub fn review_card(title: &str) -> String {
    format!(
        r#"<div class="styles_cardWrapper__brmxR styles_show__HUXRb styles_reviewCard__9HxJJ">
            <time datetime="2024-05-01T12:00:00.000Z">May 1, 2024</time>
            <a href="/reviews/{title}" data-review-title-typography="true"><h2>{title}</h2></a>
            <p data-service-review-text-typography="true">Review text of {title}</p>
            <img alt="Rated 4 out of 5 stars" src="/stars-4.svg">
        </div>"#
    )
}

/// A full page with the given review titles, an ad block and an optional
/// "last page" link.
pub fn review_page(titles: &[&str], last_page: Option<usize>) -> String {
    let cards: String = titles.iter().map(|t| review_card(t)).collect();
    let pagination = last_page
        .map(|n| {
            format!(r#"<a name="pagination-button-last" href="/review/acme?page={n}">Last</a>"#)
        })
        .unwrap_or_default();
    format!(
        r#"<html><body>
            <div class="styles_reviewCard__ad"><h2>Sponsored</h2></div>
            <section>{cards}</section>
            <nav>{pagination}</nav>
        </body></html>"#
    )
}

/// In-memory fetcher serving prepared pages; pages without a body fail.
#[derive(Default)]
pub struct FakeFetcher {
    pages: HashMap<usize, String>,
    requested: Mutex<Vec<usize>>,
}

impl FakeFetcher {
    pub fn new(pages: impl IntoIterator<Item = (usize, String)>) -> Self {
        Self {
            pages: pages.into_iter().collect(),
            ..Default::default()
        }
    }

    pub fn requested(&self) -> Vec<usize> {
        let mut requested = self
            .requested
            .lock()
            .expect("requested mutex poisoned")
            .clone();
        requested.sort_unstable();
        requested
    }
}

#[async_trait]
impl ReviewPageFetcher for FakeFetcher {
    fn product_name(&self) -> &str {
        "acme"
    }

    fn product_url(&self) -> &str {
        PRODUCT_URL
    }

    async fn fetch_page(&self, page: usize) -> CrawlerResult<PageDocument> {
        self.requested
            .lock()
            .expect("requested mutex poisoned")
            .push(page);
        match self.pages.get(&page) {
            Some(body) => Ok(PageDocument::parse(body)),
            None => Err(CrawlerError::Parse {
                url: format!("{PRODUCT_URL}?page={page}"),
                reason: "page not served".to_string(),
            }),
        }
    }
}
