//! # Timeline Filter
//! Narrows an article set to a trailing time window controlled by a
//! percentage-of-week slider. 100% is the full trailing 7 days; anything
//! older than 7 days is always excluded.

use chrono::{DateTime, Duration, Utc};

use crate::article::Article;

const WEEK_SECS: f64 = 7.0 * 24.0 * 3600.0;

/// Keep articles published within `percent/100 x 7 days` back from `now`,
/// inclusive of both bounds. `percent` is clamped to [0, 100]; 0 yields an
/// empty window (only an article stamped exactly `now` survives).
pub fn filter_by_window(articles: &[Article], percent: f64, now: DateTime<Utc>) -> Vec<Article> {
    if articles.is_empty() {
        return Vec::new();
    }
    let percent = percent.clamp(0.0, 100.0);
    let window_ms = (WEEK_SECS * 1000.0 * (percent / 100.0)).round() as i64;
    let from = now - Duration::milliseconds(window_ms);
    articles
        .iter()
        .filter(|a| a.published_at >= from && a.published_at <= now)
        .cloned()
        .collect()
}
