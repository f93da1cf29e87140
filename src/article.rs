//! # Article model & normalizer
//! Converts a provider-shaped raw record plus a country code into the
//! internal [`Article`]. Every optional upstream field degrades to a
//! documented default; normalization never fails.

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};

use chrono::{DateTime, Utc};
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::geo;

/// Closed category set consumed by the bubble renderer's palette.
/// The renderer maps these to a fixed 5-color palette; do not grow silently.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Politics,
    Climate,
    Economy,
    Health,
    General,
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Politics => "politics",
            Category::Climate => "climate",
            Category::Economy => "economy",
            Category::Health => "health",
            Category::General => "general",
        }
    }
}

/// Importance assigned to unrecognized or missing raw categories.
pub const DEFAULT_IMPORTANCE: f64 = 0.6;

/// Provider category (lowercased) -> (internal category, fixed importance).
/// Importance is per-category, not per-article.
static CATEGORY_IMPORTANCE: Lazy<HashMap<&'static str, (Category, f64)>> = Lazy::new(|| {
    HashMap::from([
        ("business", (Category::Economy, 0.8)),
        ("entertainment", (Category::General, 0.5)),
        ("general", (Category::General, 0.6)),
        ("health", (Category::Health, 0.7)),
        ("science", (Category::Climate, 0.8)),
        ("sports", (Category::General, 0.4)),
        ("technology", (Category::Economy, 0.7)),
    ])
});

/// Resolve a raw provider category to the internal pair.
pub fn category_meta(raw: Option<&str>) -> (Category, f64) {
    let key = raw.unwrap_or("general").trim().to_ascii_lowercase();
    CATEGORY_IMPORTANCE
        .get(key.as_str())
        .copied()
        .unwrap_or((Category::General, DEFAULT_IMPORTANCE))
}

/// One normalized news item with geographic and categorical metadata.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Article {
    pub id: String,
    pub title: String,
    pub summary: String,
    pub source: String,
    pub url: String,
    pub published_at: DateTime<Utc>,
    pub lat: f64,
    pub lng: f64,
    pub country: String,
    pub category: Category,
    pub importance: f64,
}

/// Structurally-typed raw article as received from a provider. Every field is
/// optional; [`normalize`] supplies the defaults.
#[derive(Debug, Clone, Default)]
pub struct RawArticle {
    pub title: Option<String>,
    pub description: Option<String>,
    pub content: Option<String>,
    pub source: Option<String>,
    pub url: Option<String>,
    pub published_at: Option<DateTime<Utc>>,
    pub category: Option<String>,
}

/// Sequence for synthesized ids when an article has no URL.
static SYNTH_SEQ: AtomicU64 = AtomicU64::new(0);

/// Normalize one raw article for the given country code.
///
/// Defaults: title "Untitled", summary description->content->"", source
/// "Unknown", url "#", publishedAt -> `now`, country -> "default" when empty.
/// Coordinates come from the coordinate table, category/importance from the
/// static category table. Post-conditions: lat/lng/category/importance are
/// always set.
pub fn normalize(raw: RawArticle, country: &str, now: DateTime<Utc>) -> Article {
    let country = if country.trim().is_empty() {
        "default".to_string()
    } else {
        country.trim().to_ascii_lowercase()
    };
    let (lat, lng) = geo::coords_for(&country);
    let (category, importance) = category_meta(raw.category.as_deref());

    let id = match raw.url.clone() {
        Some(url) if !url.is_empty() => url,
        _ => {
            let n = SYNTH_SEQ.fetch_add(1, Ordering::Relaxed);
            format!("article-{}-{}", now.timestamp_millis(), n)
        }
    };

    Article {
        id,
        title: raw.title.filter(|t| !t.is_empty()).unwrap_or_else(|| "Untitled".to_string()),
        summary: raw.description.or(raw.content).unwrap_or_default(),
        source: raw.source.filter(|s| !s.is_empty()).unwrap_or_else(|| "Unknown".to_string()),
        url: raw.url.filter(|u| !u.is_empty()).unwrap_or_else(|| "#".to_string()),
        published_at: raw.published_at.unwrap_or(now),
        lat,
        lng,
        country,
        category,
        importance,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_raw_article_gets_all_defaults() {
        let now = Utc::now();
        let a = normalize(RawArticle::default(), "jp", now);
        assert_eq!(a.title, "Untitled");
        assert_eq!(a.summary, "");
        assert_eq!(a.source, "Unknown");
        assert_eq!(a.url, "#");
        assert_eq!(a.published_at, now);
        assert_eq!(a.country, "jp");
        assert_eq!(a.category, Category::General);
        assert_eq!(a.importance, DEFAULT_IMPORTANCE);
        assert!(a.id.starts_with("article-"));
    }

    #[test]
    fn summary_prefers_description_over_content() {
        let raw = RawArticle {
            description: Some("desc".into()),
            content: Some("content".into()),
            ..Default::default()
        };
        assert_eq!(normalize(raw, "us", Utc::now()).summary, "desc");

        let raw = RawArticle {
            content: Some("content".into()),
            ..Default::default()
        };
        assert_eq!(normalize(raw, "us", Utc::now()).summary, "content");
    }

    #[test]
    fn category_table_maps_provider_categories() {
        assert_eq!(category_meta(Some("science")), (Category::Climate, 0.8));
        assert_eq!(category_meta(Some("BUSINESS")), (Category::Economy, 0.8));
        assert_eq!(category_meta(Some("sports")), (Category::General, 0.4));
        assert_eq!(category_meta(Some("astrology")), (Category::General, 0.6));
        assert_eq!(category_meta(None), (Category::General, 0.6));
    }

    #[test]
    fn url_becomes_id_when_present() {
        let raw = RawArticle {
            url: Some("https://example.com/a".into()),
            ..Default::default()
        };
        let a = normalize(raw, "us", Utc::now());
        assert_eq!(a.id, "https://example.com/a");
        assert_eq!(a.url, "https://example.com/a");
    }

    #[test]
    fn missing_country_maps_to_default_anchor() {
        let a = normalize(RawArticle::default(), "", Utc::now());
        assert_eq!(a.country, "default");
        assert_eq!((a.lat, a.lng), crate::geo::DEFAULT_COORDS);
    }

    #[test]
    fn category_serializes_lowercase() {
        assert_eq!(
            serde_json::to_string(&Category::Politics).unwrap(),
            "\"politics\""
        );
    }
}
