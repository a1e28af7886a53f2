//! Concurrent fetching of the pages following the first one.
//!
//! Every page runs in its own task and pushes reviews into one unbounded
//! channel. A dedicated drain task owns the result vector; it finishes once
//! every page task has dropped its sender.

use std::sync::Arc;

use tokio::sync::mpsc;
use tokio::task::JoinSet;

use crate::crawlers::ReviewPageFetcher;
use crate::domain::review::Review;
use crate::processing::ScrapeResult;
use crate::processing::extract::ReviewExtractor;

/// Fetches pages `2..=last_page` concurrently and returns their reviews.
///
/// A page that fails to download or parse is logged and contributes nothing;
/// the other pages are unaffected. Returns only after all page tasks and the
/// drain task have finished.
pub async fn collect_remaining_pages(
    fetcher: Arc<dyn ReviewPageFetcher>,
    extractor: Arc<ReviewExtractor>,
    last_page: usize,
) -> ScrapeResult<Vec<Review>> {
    if last_page < 2 {
        return Ok(Vec::new());
    }

    let (review_tx, review_rx) = mpsc::unbounded_channel();
    let drain_handle = tokio::spawn(drain_reviews(review_rx));

    let mut page_tasks = JoinSet::new();
    for page in 2..=last_page {
        page_tasks.spawn({
            let fetcher = Arc::clone(&fetcher);
            let extractor = Arc::clone(&extractor);
            let review_tx = review_tx.clone();
            async move { scrape_page(fetcher.as_ref(), &extractor, page, review_tx).await }
        });
    }
    // The channel closes once the last page task drops its clone.
    drop(review_tx);

    while let Some(task) = page_tasks.join_next().await {
        if let Err(e) = task {
            log::error!("Page task for {} failed: {e}", fetcher.product_name());
        }
    }

    let reviews = drain_handle.await?;
    log::info!(
        "Collected {} reviews from pages 2..={last_page} for {}",
        reviews.len(),
        fetcher.product_name()
    );
    Ok(reviews)
}

/// Fetches one page and pushes its reviews into `sink`.
///
/// Returns the number of reviews emitted; zero when the page failed.
pub async fn scrape_page(
    fetcher: &dyn ReviewPageFetcher,
    extractor: &ReviewExtractor,
    page: usize,
    mut sink: mpsc::UnboundedSender<Review>,
) -> usize {
    log::info!("Start scraping page {page} for {}", fetcher.product_name());
    match fetcher.fetch_page(page).await {
        Ok(document) => extractor.extract(&document, &mut sink),
        Err(e) => {
            log::warn!("Cannot get page {page} product reviews: {e}");
            0
        }
    }
}

async fn drain_reviews(mut review_rx: mpsc::UnboundedReceiver<Review>) -> Vec<Review> {
    let mut reviews = Vec::new();
    while let Some(review) = review_rx.recv().await {
        reviews.push(review);
    }
    reviews
}
