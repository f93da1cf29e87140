// src/source/types.rs
use anyhow::Result;
use serde::{Deserialize, Serialize};

use crate::article::Article;

/// Tag recording where a result set came from. Travels with cached data and
/// is echoed to clients in the `X-News-Source` header.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NewsSource {
    NewsApi,
    Mock,
}

impl NewsSource {
    pub fn as_str(&self) -> &'static str {
        match self {
            NewsSource::NewsApi => "newsapi",
            NewsSource::Mock => "mock",
        }
    }
}

/// Per-country article source. The live NewsAPI client and test stubs both
/// sit behind this seam so the gateway's fan-out is testable offline.
#[async_trait::async_trait]
pub trait ArticleProvider: Send + Sync {
    /// Fetch and normalize the latest headlines for one country code.
    async fn fetch_country(&self, country: &str) -> Result<Vec<Article>>;
    fn name(&self) -> &'static str;
}
