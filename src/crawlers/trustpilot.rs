use async_trait::async_trait;
use url::Url;

use crate::crawlers::{CrawlerError, CrawlerResult, ReviewPageFetcher, build_reqwest_client};
use crate::domain::page::PageDocument;

/// Fetches review pages of one product from a Trustpilot-style site.
pub struct TrustpilotFetcher {
    product_name: String,
    product_url: String,
    client: reqwest::Client,
}

impl TrustpilotFetcher {
    /// Creates a fetcher for `product_name` hosted under `base_url`.
    pub fn new(base_url: &str, product_name: &str, user_agent: &str) -> CrawlerResult<Self> {
        let base = Url::parse(base_url).map_err(|e| CrawlerError::Build(e.to_string()))?;
        let product_url = format!(
            "{}/review/{}",
            base.as_str().trim_end_matches('/'),
            product_name
        );
        Ok(Self {
            product_name: product_name.to_string(),
            product_url,
            client: build_reqwest_client(user_agent)?,
        })
    }

    /// URL requested for `page`. The first page is the canonical URL itself.
    pub fn page_url(&self, page: usize) -> CrawlerResult<String> {
        if page <= 1 {
            return Ok(self.product_url.clone());
        }
        let mut url =
            Url::parse(&self.product_url).map_err(|e| CrawlerError::Build(e.to_string()))?;
        url.query_pairs_mut().append_pair("page", &page.to_string());
        Ok(url.to_string())
    }
}

#[async_trait]
impl ReviewPageFetcher for TrustpilotFetcher {
    fn product_name(&self) -> &str {
        &self.product_name
    }

    fn product_url(&self) -> &str {
        &self.product_url
    }

    async fn fetch_page(&self, page: usize) -> CrawlerResult<PageDocument> {
        let url = self.page_url(page)?;
        let res = self.client.get(&url).send().await?;
        if !res.status().is_success() {
            return Err(CrawlerError::Status {
                url,
                status: res.status(),
            });
        }
        let body = res.text().await?;
        if body.trim().is_empty() {
            return Err(CrawlerError::Parse {
                url,
                reason: "empty body".to_string(),
            });
        }
        Ok(PageDocument::parse(&body))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_canonical_and_page_urls() {
        let fetcher = TrustpilotFetcher::new("https://site.test/", "acme", "test").unwrap();
        assert_eq!(fetcher.product_url(), "https://site.test/review/acme");
        assert_eq!(fetcher.page_url(1).unwrap(), "https://site.test/review/acme");
        assert_eq!(
            fetcher.page_url(7).unwrap(),
            "https://site.test/review/acme?page=7"
        );
    }

    #[test]
    fn rejects_invalid_base_url() {
        let result = TrustpilotFetcher::new("not a url", "acme", "test");
        assert!(matches!(result, Err(CrawlerError::Build(_))));
    }
}
