use scraper::Html;

/// Parsed markup of one fetched page.
///
/// Owned by the task that fetched it and dropped once its reviews and
/// pagination data have been read.
pub struct PageDocument {
    html: Html,
}

impl PageDocument {
    pub fn parse(body: &str) -> Self {
        Self {
            html: Html::parse_document(body),
        }
    }

    pub fn html(&self) -> &Html {
        &self.html
    }
}
