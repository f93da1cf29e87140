// src/source/newsapi.rs
//! NewsAPI top-headlines provider.
//! https://newsapi.org/docs/endpoints/top-headlines

use anyhow::{bail, Context, Result};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::Deserialize;

use crate::article::{normalize, Article, RawArticle};
use crate::source::types::ArticleProvider;

const TOP_HEADLINES_URL: &str = "https://newsapi.org/v2/top-headlines";

/// Headlines per country per request.
pub const PAGE_SIZE: u32 = 15;

#[derive(Debug, Deserialize)]
struct HeadlinesResponse {
    status: String,
    articles: Option<Vec<WireArticle>>,
    code: Option<String>,
    message: Option<String>,
}

#[derive(Debug, Deserialize)]
struct WireArticle {
    source: Option<WireSource>,
    title: Option<String>,
    description: Option<String>,
    url: Option<String>,
    #[serde(rename = "publishedAt")]
    published_at: Option<DateTime<Utc>>,
    content: Option<String>,
}

#[derive(Debug, Deserialize)]
struct WireSource {
    name: Option<String>,
}

impl WireArticle {
    fn into_raw(self) -> RawArticle {
        RawArticle {
            title: self.title,
            description: self.description,
            content: self.content,
            source: self.source.and_then(|s| s.name),
            url: self.url,
            published_at: self.published_at,
            // top-headlines has no per-article category; the normalizer
            // defaults it to general/0.6
            category: None,
        }
    }
}

/// Live NewsAPI client. One HTTP request per `fetch_country` call.
pub struct NewsApiProvider {
    client: reqwest::Client,
    api_key: String,
}

impl NewsApiProvider {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_key: api_key.into(),
        }
    }
}

#[async_trait]
impl ArticleProvider for NewsApiProvider {
    async fn fetch_country(&self, country: &str) -> Result<Vec<Article>> {
        let params = [
            ("country", country.to_string()),
            ("pageSize", PAGE_SIZE.to_string()),
            ("apiKey", self.api_key.clone()),
        ];
        let resp = self
            .client
            .get(TOP_HEADLINES_URL)
            .query(&params)
            .send()
            .await
            .with_context(|| format!("newsapi request for country '{country}'"))?;

        if !resp.status().is_success() {
            bail!("newsapi returned {} for country '{country}'", resp.status());
        }

        let body: HeadlinesResponse = resp
            .json()
            .await
            .context("parsing newsapi top-headlines json")?;

        if body.status != "ok" {
            bail!(
                "newsapi error: {} - {}",
                body.code.unwrap_or_else(|| "unknown".to_string()),
                body.message.unwrap_or_else(|| "Unknown error".to_string())
            );
        }

        let now = Utc::now();
        Ok(body
            .articles
            .unwrap_or_default()
            .into_iter()
            .map(|w| normalize(w.into_raw(), country, now))
            .collect())
    }

    fn name(&self) -> &'static str {
        "newsapi"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wire_article_parses_and_normalizes() {
        let json = r#"{
            "source": {"id": null, "name": "Example Times"},
            "author": "Jane Doe",
            "title": "Markets Rally on Rate Pause",
            "description": "Equities climbed after the decision.",
            "url": "https://example.com/rally",
            "urlToImage": null,
            "publishedAt": "2024-01-15T10:00:00Z",
            "content": "Full text..."
        }"#;

        let wire: WireArticle = serde_json::from_str(json).unwrap();
        let a = normalize(wire.into_raw(), "us", Utc::now());
        assert_eq!(a.title, "Markets Rally on Rate Pause");
        assert_eq!(a.source, "Example Times");
        assert_eq!(a.id, "https://example.com/rally");
        assert_eq!(a.country, "us");
        // no per-article category upstream -> general/0.6
        assert_eq!(a.category, crate::article::Category::General);
        assert_eq!(a.importance, 0.6);
    }

    #[test]
    fn error_response_shape_parses() {
        let json = r#"{"status":"error","code":"apiKeyInvalid","message":"Your API key is invalid."}"#;
        let body: HeadlinesResponse = serde_json::from_str(json).unwrap();
        assert_eq!(body.status, "error");
        assert_eq!(body.code.as_deref(), Some("apiKeyInvalid"));
        assert!(body.articles.is_none());
    }
}
