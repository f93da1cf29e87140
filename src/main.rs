//! BubbleMap Backend — Binary Entrypoint
//! Boots the Axum HTTP server: news retrieval API, Prometheus metrics, and
//! static file serving for the map UI.

use std::sync::Arc;

use tower_http::services::ServeDir;
use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use bubblemap::api::{self, AppState};
use bubblemap::config::AppConfig;
use bubblemap::metrics::Metrics;
use bubblemap::pipeline::NewsService;

fn init_tracing() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("bubblemap=info,warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().compact())
        .init();
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env in local/dev; no-op when absent.
    let _ = dotenvy::dotenv();

    init_tracing();

    let cfg = AppConfig::from_env();
    if cfg.news_api_key.is_some() {
        info!("NewsAPI: enabled (real headlines)");
    } else {
        info!("NewsAPI: disabled, set NEWS_API_KEY in .env for real data");
    }

    let service = Arc::new(NewsService::from_config(&cfg));
    let metrics = Metrics::init(service.cache_ttl_secs());

    let app = api::router(AppState { service })
        .merge(metrics.router())
        .fallback_service(ServeDir::new("public"));

    let listener = tokio::net::TcpListener::bind(("0.0.0.0", cfg.port)).await?;
    info!(port = cfg.port, "bubblemap server listening");
    axum::serve(listener, app).await?;
    Ok(())
}
