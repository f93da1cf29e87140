use std::sync::Arc;

use axum::{
    extract::{Query, State},
    http::{header::HeaderName, HeaderValue},
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde::Deserialize;
use tower_http::cors::CorsLayer;

use crate::pipeline::NewsService;

/// Response header carrying the source tag ("newsapi" | "mock").
pub const NEWS_SOURCE_HEADER: &str = "x-news-source";

#[derive(Clone)]
pub struct AppState {
    pub service: Arc<NewsService>,
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(|| async { "ok" }))
        .route("/api/news", get(get_news))
        .layer(CorsLayer::very_permissive())
        .with_state(state)
}

#[derive(Debug, Deserialize)]
struct NewsQuery {
    /// Inclusive range bounds, RFC 3339. Omitted bounds are open-ended.
    from: Option<chrono::DateTime<chrono::Utc>>,
    to: Option<chrono::DateTime<chrono::Utc>>,
}

/// GET /api/news?from=..&to=..
///
/// Always answers with an article array; provider-level degradation is
/// invisible here apart from the source header flipping to "mock".
async fn get_news(State(state): State<AppState>, Query(q): Query<NewsQuery>) -> Response {
    let (articles, source) = state.service.get_news(q.from, q.to).await;

    let mut resp = Json(articles).into_response();
    resp.headers_mut().insert(
        HeaderName::from_static(NEWS_SOURCE_HEADER),
        HeaderValue::from_static(source.as_str()),
    );
    resp
}
