use std::num::ParseIntError;

use regex::Regex;
use scraper::Selector;
use thiserror::Error;

use crate::domain::page::PageDocument;

const LAST_PAGE_LINK: &str = "a[name='pagination-button-last']";
const PAGE_PARAM: &str = r"[?&]page=(\d+)";

/// Reasons the "last page" control could not be read.
#[derive(Debug, Error)]
pub enum PaginationError {
    #[error("invalid pattern {0}")]
    Pattern(String),
    #[error("no last page link")]
    Missing,
    #[error("last page link has no href")]
    MissingHref,
    #[error("no page number in last page link {0}")]
    MissingPageNumber(String),
    #[error("invalid page number {value}: {source}")]
    InvalidPageNumber {
        value: String,
        #[source]
        source: ParseIntError,
    },
}

/// Reads the last page number from the "last page" navigation link.
pub fn parse_last_page(document: &PageDocument) -> Result<usize, PaginationError> {
    let selector = Selector::parse(LAST_PAGE_LINK)
        .map_err(|_| PaginationError::Pattern(LAST_PAGE_LINK.to_string()))?;
    let page_param =
        Regex::new(PAGE_PARAM).map_err(|_| PaginationError::Pattern(PAGE_PARAM.to_string()))?;

    let link = document
        .html()
        .select(&selector)
        .next()
        .ok_or(PaginationError::Missing)?;
    let href = link
        .value()
        .attr("href")
        .ok_or(PaginationError::MissingHref)?;

    let value = page_param
        .captures(href)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
        .ok_or_else(|| PaginationError::MissingPageNumber(href.to_string()))?;

    value
        .parse::<usize>()
        .map_err(|source| PaginationError::InvalidPageNumber {
            value: value.to_string(),
            source,
        })
}

/// Returns the total number of review pages, never less than one.
///
/// A missing or malformed "last page" link means the product has a single
/// page; malformed links are logged.
pub fn discover_page_count(document: &PageDocument) -> usize {
    match parse_last_page(document) {
        Ok(pages) => pages.max(1),
        Err(PaginationError::Missing) => 1,
        Err(e) => {
            log::warn!("Cannot parse last page, assuming a single page: {e}");
            1
        }
    }
}
