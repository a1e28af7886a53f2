use std::sync::Arc;

use review_crawlers::crawlers::trustpilot::TrustpilotFetcher;
use review_crawlers::models::config::ScraperConfig;
use review_crawlers::processing::session::scrape_product_reviews;
use review_crawlers::repository::ReviewWriter;
use review_crawlers::repository::json::JsonFileRepository;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    let mut config = match ScraperConfig::load() {
        Ok(config) => config,
        Err(e) => {
            log::error!("Failed to load configuration: {e}");
            std::process::exit(1);
        }
    };
    if let Some(product_name) = std::env::args().nth(1) {
        config.product_name = product_name;
    }

    log::info!("Start scraping reviews for {}", config.product_name);

    let fetcher =
        match TrustpilotFetcher::new(&config.base_url, &config.product_name, &config.user_agent) {
            Ok(fetcher) => fetcher,
            Err(e) => {
                log::error!("Failed to build crawler: {e}");
                std::process::exit(1);
            }
        };

    let reviews = match scrape_product_reviews(Arc::new(fetcher)).await {
        Ok(reviews) => reviews,
        Err(e) => {
            log::error!("{e}");
            std::process::exit(1);
        }
    };

    let repo = JsonFileRepository::new(&config.output_dir);
    match repo.save(&reviews) {
        Ok(path) => log::info!(
            "Successfully scraped {} reviews for {} into {}",
            reviews.len(),
            reviews.product_name,
            path.display()
        ),
        Err(e) => {
            log::error!("Failed to save reviews: {e}");
            std::process::exit(1);
        }
    }
}
