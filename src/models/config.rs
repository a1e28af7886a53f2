//! Configuration model loaded from external sources.

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

pub const DEFAULT_PRODUCT_NAME: &str = "invideo.io";
pub const DEFAULT_BASE_URL: &str = "https://www.trustpilot.com";
const ENV_PREFIX: &str = "REVIEWS";

#[derive(Clone, Debug, Deserialize)]
/// Settings for one scraping run.
pub struct ScraperConfig {
    pub product_name: String,
    pub base_url: String,
    pub output_dir: String,
    pub user_agent: String,
}

impl ScraperConfig {
    /// Loads `config.yaml` from the working directory when present, then
    /// applies `REVIEWS_*` environment overrides.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from("config")
    }

    /// Same as [`ScraperConfig::load`] with an explicit file path. The file is
    /// optional.
    pub fn load_from(path: &str) -> Result<Self, ConfigError> {
        Config::builder()
            .set_default("product_name", DEFAULT_PRODUCT_NAME)?
            .set_default("base_url", DEFAULT_BASE_URL)?
            .set_default("output_dir", ".")?
            .set_default(
                "user_agent",
                concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")),
            )?
            .add_source(File::with_name(path).required(false))
            .add_source(Environment::with_prefix(ENV_PREFIX))
            .build()?
            .try_deserialize()
    }
}
