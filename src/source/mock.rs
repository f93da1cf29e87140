// src/source/mock.rs
//! Deterministic mock dataset served when no NewsAPI key is configured or the
//! live fetch fails: 10 fixed countries x 2 articles each. Structure (country
//! set, counts, titles, timestamps) is deterministic; only the importance
//! value carries random jitter in [0.5, 1.0).

use chrono::{DateTime, Duration, Utc};
use rand::Rng;

use crate::article::{Article, Category};
use crate::geo;

/// Countries in the mock dataset, in output order.
pub const MOCK_COUNTRIES: [&str; 10] = ["us", "gb", "de", "jp", "br", "ru", "cn", "in", "au", "fr"];

/// Articles per mock country.
pub const ARTICLES_PER_COUNTRY: usize = 2;

const CATEGORIES: [Category; 4] = [
    Category::Politics,
    Category::Climate,
    Category::Economy,
    Category::General,
];

const TITLES: [&str; 8] = [
    "US-Greenland: New Talks on Strategic Cooperation",
    "European Central Bank Holds Rates Steady",
    "Climate Summit Reaches New Agreement",
    "Tech Giants Report Strong Quarterly Earnings",
    "Regional Tensions Ease After Diplomatic Talks",
    "Arctic Geopolitics: Resource and Shipping Debate",
    "Markets React to Policy Announcements",
    "Healthcare Reform Bill Advances",
];

/// Build the mock article set with timestamps staggered hourly back from `now`.
pub fn mock_articles(now: DateTime<Utc>) -> Vec<Article> {
    let mut rng = rand::rng();
    let mut out = Vec::with_capacity(MOCK_COUNTRIES.len() * ARTICLES_PER_COUNTRY);

    for (i, country) in MOCK_COUNTRIES.iter().enumerate() {
        let (lat, lng) = geo::coords_for(country);
        for j in 0..ARTICLES_PER_COUNTRY {
            let cycle = i + j;
            out.push(Article {
                id: format!("mock-{country}-{i}-{j}"),
                title: TITLES[cycle % TITLES.len()].to_string(),
                summary: "Summary of the story. Details and context for the headline."
                    .to_string(),
                source: format!("Source {}", country.to_ascii_uppercase()),
                url: "#".to_string(),
                published_at: now - Duration::hours(cycle as i64),
                lat,
                lng,
                country: country.to_string(),
                category: CATEGORIES[cycle % CATEGORIES.len()],
                importance: rng.random_range(0.5..1.0),
            });
        }
    }
    out
}
