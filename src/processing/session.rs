use std::sync::Arc;

use crate::crawlers::ReviewPageFetcher;
use crate::domain::review::ProductReviewSet;
use crate::processing::collector::collect_remaining_pages;
use crate::processing::extract::ReviewExtractor;
use crate::processing::pagination::discover_page_count;
use crate::processing::{ScrapeError, ScrapeResult};

/// Scrapes every review page of the fetcher's product.
///
/// The first page is fetched once and used both for its reviews and for the
/// page count. Failing to fetch it aborts the run; later pages fail softly
/// inside [`collect_remaining_pages`].
pub async fn scrape_product_reviews(
    fetcher: Arc<dyn ReviewPageFetcher>,
) -> ScrapeResult<ProductReviewSet> {
    let product = fetcher.product_name().to_string();
    log::info!("Start scraping page 1 for {product}");

    let extractor = Arc::new(
        ReviewExtractor::new(fetcher.product_url()).map_err(ScrapeError::Extractor)?,
    );

    let (mut reviews, last_page) = {
        let document =
            fetcher
                .fetch_page(1)
                .await
                .map_err(|source| ScrapeError::FirstPage {
                    product: product.clone(),
                    source,
                })?;
        let mut reviews = Vec::new();
        extractor.extract(&document, &mut reviews);
        (reviews, discover_page_count(&document))
    };
    log::info!(
        "Found {} reviews on page 1 and {last_page} pages in total for {product}",
        reviews.len()
    );

    if last_page > 1 {
        let remaining =
            collect_remaining_pages(Arc::clone(&fetcher), Arc::clone(&extractor), last_page)
                .await?;
        reviews.extend(remaining);
    }

    Ok(ProductReviewSet::new(product, reviews))
}
