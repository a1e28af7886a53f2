use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::domain::review::ProductReviewSet;
use crate::repository::{RepositoryResult, ReviewWriter};

/// Writes each product's reviews to `trustpilot_reviews_<product>.json`.
pub struct JsonFileRepository {
    output_dir: PathBuf,
}

impl JsonFileRepository {
    pub fn new(output_dir: impl AsRef<Path>) -> Self {
        Self {
            output_dir: output_dir.as_ref().to_path_buf(),
        }
    }

    pub fn file_path(&self, product_name: &str) -> PathBuf {
        self.output_dir
            .join(format!("trustpilot_reviews_{product_name}.json"))
    }
}

impl ReviewWriter for JsonFileRepository {
    fn save(&self, reviews: &ProductReviewSet) -> RepositoryResult<PathBuf> {
        let path = self.file_path(&reviews.product_name);
        let mut writer = BufWriter::new(File::create(&path)?);
        serde_json::to_writer(&mut writer, reviews)?;
        writer.write_all(b"\n")?;
        writer.flush()?;
        Ok(path)
    }
}
