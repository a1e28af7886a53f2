use serde::Serialize;

/// A single customer review extracted from a product page.
///
/// Every field is a best-effort extraction: a sub-field missing from the
/// markup is kept as an empty string instead of dropping the review.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize)]
pub struct Review {
    pub text: String,
    pub date: String,
    pub rating: String,
    pub title: String,
    pub link: String,
}

/// All reviews collected for one product during a run.
///
/// The order of `reviews` follows completion order of the page tasks and is
/// not tied to page order.
#[derive(Clone, Debug, Serialize)]
pub struct ProductReviewSet {
    pub product_name: String,
    pub reviews: Vec<Review>,
}

impl ProductReviewSet {
    pub fn new(product_name: impl Into<String>, reviews: Vec<Review>) -> Self {
        Self {
            product_name: product_name.into(),
            reviews,
        }
    }

    pub fn len(&self) -> usize {
        self.reviews.len()
    }

    pub fn is_empty(&self) -> bool {
        self.reviews.is_empty()
    }
}
