// src/source/mod.rs
//! # News Source Gateway
//! Fetches live headlines per country when a provider is configured and falls
//! back to the deterministic mock dataset on any failure. Callers always get
//! a result set plus its source tag; provider errors are logged, never
//! propagated.

pub mod mock;
pub mod newsapi;
pub mod types;

use std::sync::Arc;

use anyhow::{anyhow, Result};
use chrono::{DateTime, Utc};
use metrics::{counter, describe_counter};
use once_cell::sync::OnceCell;
use tracing::{info, warn};

use crate::article::Article;
use crate::config::AppConfig;

pub use mock::{mock_articles, MOCK_COUNTRIES};
pub use newsapi::NewsApiProvider;
pub use types::{ArticleProvider, NewsSource};

/// Fixed country list queried on a live fetch. Results are concatenated in
/// this order regardless of response arrival order.
pub const QUERY_COUNTRIES: [&str; 8] = ["us", "gb", "de", "jp", "fr", "in", "br", "au"];

/// One-time metrics registration (so series show up on /metrics).
fn ensure_metrics_described() {
    static ONCE: OnceCell<()> = OnceCell::new();
    ONCE.get_or_init(|| {
        describe_counter!("news_fetch_total", "Gateway fetches, live or mock.");
        describe_counter!(
            "news_provider_errors_total",
            "Live provider failures that fell back to mock data."
        );
        describe_counter!("news_cache_hits_total", "Retrievals served from cache.");
        describe_counter!("news_cache_misses_total", "Retrievals that hit the gateway.");
    });
}

/// Article sourcing behind a single `fetch` call.
pub struct NewsGateway {
    provider: Option<Arc<dyn ArticleProvider>>,
}

impl NewsGateway {
    /// Build from config: a live provider when `NEWS_API_KEY` is set,
    /// mock-only otherwise.
    pub fn from_config(cfg: &AppConfig) -> Self {
        match &cfg.news_api_key {
            Some(key) => Self::with_provider(Arc::new(NewsApiProvider::new(key.clone()))),
            None => Self::mock_only(),
        }
    }

    pub fn with_provider(provider: Arc<dyn ArticleProvider>) -> Self {
        Self {
            provider: Some(provider),
        }
    }

    /// Gateway that always serves the mock dataset.
    pub fn mock_only() -> Self {
        Self { provider: None }
    }

    /// Fetch articles, optionally narrowed to the inclusive `[from, to]`
    /// range. Open-ended when only one bound is given.
    pub async fn fetch(
        &self,
        from: Option<DateTime<Utc>>,
        to: Option<DateTime<Utc>>,
    ) -> (Vec<Article>, NewsSource) {
        ensure_metrics_described();
        counter!("news_fetch_total").increment(1);

        let (mut articles, source) = match &self.provider {
            Some(provider) => match fetch_all_countries(provider).await {
                Ok(articles) => {
                    info!(articles = articles.len(), "fetched articles from NewsAPI");
                    (articles, NewsSource::NewsApi)
                }
                Err(e) => {
                    warn!(error = ?e, "NewsAPI failed, using mock data");
                    counter!("news_provider_errors_total").increment(1);
                    (mock_articles(Utc::now()), NewsSource::Mock)
                }
            },
            None => {
                info!("no NewsAPI key configured, serving mock data");
                (mock_articles(Utc::now()), NewsSource::Mock)
            }
        };

        if from.is_some() || to.is_some() {
            let lo = from.unwrap_or(DateTime::<Utc>::MIN_UTC);
            let hi = to.unwrap_or(DateTime::<Utc>::MAX_UTC);
            articles.retain(|a| a.published_at >= lo && a.published_at <= hi);
        }

        (articles, source)
    }
}

/// Fan-out one request per country, join in fixed [`QUERY_COUNTRIES`] order.
/// Any single failure fails the whole live fetch (the gateway then falls back
/// to mock).
async fn fetch_all_countries(provider: &Arc<dyn ArticleProvider>) -> Result<Vec<Article>> {
    let handles: Vec<_> = QUERY_COUNTRIES
        .iter()
        .map(|country| {
            let provider = Arc::clone(provider);
            let country = country.to_string();
            tokio::spawn(async move { provider.fetch_country(&country).await })
        })
        .collect();

    let mut all = Vec::new();
    for handle in handles {
        let batch = handle
            .await
            .map_err(|e| anyhow!("provider task panicked: {e}"))??;
        all.extend(batch);
    }
    Ok(all)
}
