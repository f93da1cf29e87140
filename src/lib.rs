// src/lib.rs
// Public library surface for integration tests (and the server binary).

pub mod api;
pub mod article;
pub mod cache;
pub mod config;
pub mod geo;
pub mod metrics;
pub mod pipeline;
pub mod regions;
pub mod source;
pub mod timeline;

// ---- Re-exports for stable public API ----
pub use crate::api::{router, AppState};
pub use crate::article::{normalize, Article, Category, RawArticle};
pub use crate::cache::NewsCache;
pub use crate::config::AppConfig;
pub use crate::pipeline::NewsService;
pub use crate::regions::{group_into_regions, Region};
pub use crate::source::{ArticleProvider, NewsGateway, NewsSource};
pub use crate::timeline::filter_by_window;
