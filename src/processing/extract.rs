//! Review card extraction from a parsed page.

use scraper::{ElementRef, Selector};
use tokio::sync::mpsc::UnboundedSender;

use crate::crawlers::{CrawlerError, CrawlerResult};
use crate::domain::page::PageDocument;
use crate::domain::review::Review;

const REVIEW_CARD_PREFIX: &str = "styles_reviewCard__";
const CARD_WRAPPER_PREFIX: &str = "styles_cardWrapper__";

/// Destination for extracted reviews.
pub trait ReviewSink {
    fn push_review(&mut self, review: Review);
}

impl ReviewSink for Vec<Review> {
    fn push_review(&mut self, review: Review) {
        self.push(review);
    }
}

impl ReviewSink for UnboundedSender<Review> {
    fn push_review(&mut self, review: Review) {
        if let Err(e) = self.send(review) {
            log::warn!("Review sink closed, dropping review: {e}");
        }
    }
}

/// Returns `true` when the class list marks a genuine review card.
///
/// Both a review card class and a card wrapper class must be present; ads and
/// layout containers only carry one of the two families.
pub fn is_review_card<'a, I>(classes: I) -> bool
where
    I: IntoIterator<Item = &'a str>,
{
    let mut review_card = false;
    let mut card_wrapper = false;
    for class in classes {
        if class.starts_with(REVIEW_CARD_PREFIX) {
            review_card = true;
        }
        if class.starts_with(CARD_WRAPPER_PREFIX) {
            card_wrapper = true;
        }
    }
    review_card && card_wrapper
}

/// Turns review cards of a page into [`Review`]s.
///
/// Selectors are compiled once and the extractor is shared by every page
/// task of a run.
pub struct ReviewExtractor {
    product_url: String,
    block: Selector,
    date: Selector,
    text: Selector,
    title: Selector,
    link: Selector,
    rating: Selector,
}

impl ReviewExtractor {
    /// `product_url` is the query-free product URL that prefixes permalinks.
    pub fn new(product_url: impl Into<String>) -> CrawlerResult<Self> {
        Ok(Self {
            product_url: product_url.into(),
            block: create_selector("div")?,
            date: create_selector("time")?,
            text: create_selector("p[data-service-review-text-typography]")?,
            title: create_selector("h2")?,
            link: create_selector("a[data-review-title-typography]")?,
            rating: create_selector("img")?,
        })
    }

    /// Pushes one review per qualifying card into `sink` and returns how many
    /// were emitted.
    pub fn extract<S>(&self, document: &PageDocument, sink: &mut S) -> usize
    where
        S: ReviewSink + ?Sized,
    {
        let mut emitted = 0;
        for block in document.html().select(&self.block) {
            let element = block.value();
            if element.attr("class").is_none() || !is_review_card(element.classes()) {
                continue;
            }
            sink.push_review(self.extract_card(block));
            emitted += 1;
        }
        emitted
    }

    fn extract_card(&self, card: ElementRef<'_>) -> Review {
        let link = first_attr(card, &self.link, "href");
        let link = if link.is_empty() {
            link
        } else {
            format!("{}{}", self.product_url, link)
        };

        Review {
            text: first_text(card, &self.text),
            date: first_attr(card, &self.date, "datetime"),
            rating: first_attr(card, &self.rating, "alt"),
            title: first_text(card, &self.title),
            link,
        }
    }
}

#[inline]
fn create_selector(sel_str: &str) -> CrawlerResult<Selector> {
    Selector::parse(sel_str).map_err(|_| CrawlerError::Selector(sel_str.into()))
}

fn first_attr(card: ElementRef<'_>, selector: &Selector, attr: &str) -> String {
    card.select(selector)
        .next()
        .and_then(|el| el.value().attr(attr))
        .map(str::to_string)
        .unwrap_or_default()
}

fn first_text(card: ElementRef<'_>, selector: &Selector) -> String {
    card.select(selector)
        .next()
        .map(|el| el.text().collect::<String>())
        .unwrap_or_default()
}
