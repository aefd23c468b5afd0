//! Prints the top sports headlines about Lionel Messi from US outlets.
//!
//! Run with tracing enabled:
//! ```sh
//! NEWS_API_KEY=... RUST_LOG=info,hyper_util=off,hyper=off,reqwest=off,rustls=off cargo run --example top_headlines --features tracing
//! ```
//!
//! Optionally log to a file:
//! ```sh
//! LOG_FILE=headlines.log NEWS_API_KEY=... RUST_LOG=info cargo run --example top_headlines --features tracing
//! ```

use std::fs::File;

use newsapi_client_sdk::auth::API_KEY_VAR;
use newsapi_client_sdk::types::request::{SourcesRequest, TopHeadlinesRequest};
use newsapi_client_sdk::types::{Category, Country, Language};
use newsapi_client_sdk::{Client, Config, DEFAULT_HOST};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt as _;
use tracing_subscriber::util::SubscriberInitExt as _;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    if let Ok(path) = std::env::var("LOG_FILE") {
        let file = File::create(path)?;
        tracing_subscriber::registry()
            .with(EnvFilter::from_default_env())
            .with(
                tracing_subscriber::fmt::layer()
                    .with_writer(file)
                    .with_ansi(false),
            )
            .init();
    } else {
        tracing_subscriber::fmt::init();
    }

    let config = Config::builder()
        .api_key(std::env::var(API_KEY_VAR)?)
        .build();
    let client = Client::new(DEFAULT_HOST, config)?;

    let request = TopHeadlinesRequest::builder()
        .q("messi")
        .category(Category::Sports)
        .country(Country::UnitedStates)
        .build();

    match client.top_headlines(&request).await {
        Ok(response) => {
            info!(endpoint = "top_headlines", total_results = response.total_results);
            for article in &response.articles {
                info!(
                    source = %article.source.name,
                    title = %article.title,
                    url = %article.url,
                    published_at = %article.published_at
                );
            }
        }
        Err(e) => error!(endpoint = "top_headlines", error = %e),
    }

    let request = SourcesRequest::builder()
        .category(Category::Sports)
        .language(Language::English)
        .build();

    match client.sources(&request).await {
        Ok(response) => {
            let ids: Vec<&str> = response.sources.iter().map(|s| s.id.as_str()).collect();
            info!(endpoint = "sources", count = ids.len(), ids = ?ids);
        }
        Err(e) => error!(endpoint = "sources", error = %e),
    }

    Ok(())
}
