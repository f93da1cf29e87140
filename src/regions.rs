//! # Region Aggregator
//! Groups articles by country into the per-bubble unit the renderer consumes.
//! Regions are recomputed from scratch on every call; nothing is retained
//! between recomputations.

use std::cmp::Ordering;
use std::collections::hash_map::Entry;
use std::collections::HashMap;

use serde::Serialize;

use crate::article::{Article, Category};

/// An aggregation of articles sharing a country code. Head fields are copied
/// from the highest-importance article, not averaged.
#[derive(Debug, Clone, Serialize)]
pub struct Region {
    pub country: String,
    pub lat: f64,
    pub lng: f64,
    pub category: Category,
    pub importance: f64,
    pub articles: Vec<Article>,
}

/// Group articles into one Region per distinct country.
///
/// Grouping is case-insensitive and maps an empty country to "default".
/// Within a group, articles are stable-sorted descending by importance, so
/// ties keep their original relative order. Region output order is the order
/// of first appearance of each country in the input.
pub fn group_into_regions(articles: &[Article]) -> Vec<Region> {
    let mut order: Vec<String> = Vec::new();
    let mut groups: HashMap<String, Vec<Article>> = HashMap::new();

    for article in articles {
        let key = if article.country.trim().is_empty() {
            "default".to_string()
        } else {
            article.country.to_ascii_lowercase()
        };
        match groups.entry(key) {
            Entry::Vacant(e) => {
                order.push(e.key().clone());
                e.insert(vec![article.clone()]);
            }
            Entry::Occupied(mut e) => e.get_mut().push(article.clone()),
        }
    }

    let mut regions = Vec::with_capacity(order.len());
    for country in order {
        let mut group = match groups.remove(&country) {
            Some(g) => g,
            None => continue,
        };
        // Vec::sort_by is stable; equal importances keep input order.
        group.sort_by(|a, b| {
            b.importance
                .partial_cmp(&a.importance)
                .unwrap_or(Ordering::Equal)
        });
        let top = match group.first() {
            Some(t) => t,
            None => continue,
        };
        regions.push(Region {
            country,
            lat: top.lat,
            lng: top.lng,
            category: top.category,
            importance: top.importance,
            articles: group.clone(),
        });
    }
    regions
}
