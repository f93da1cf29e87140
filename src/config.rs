// src/config.rs
//! Environment-backed configuration. `.env` is loaded by the binary before
//! this runs, so local keys work without exporting anything.

const ENV_NEWS_API_KEY: &str = "NEWS_API_KEY";
const ENV_PORT: &str = "PORT";

const DEFAULT_PORT: u16 = 3000;

#[derive(Debug, Clone)]
pub struct AppConfig {
    /// NewsAPI credential. `None` means the gateway serves mock data only.
    pub news_api_key: Option<String>,
    pub port: u16,
}

impl AppConfig {
    pub fn from_env() -> Self {
        let news_api_key = std::env::var(ENV_NEWS_API_KEY)
            .ok()
            .map(|k| k.trim().to_string())
            .filter(|k| !k.is_empty());
        let port = std::env::var(ENV_PORT)
            .ok()
            .and_then(|p| p.trim().parse().ok())
            .unwrap_or(DEFAULT_PORT);
        Self { news_api_key, port }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;

    #[serial_test::serial]
    #[test]
    fn blank_key_counts_as_unconfigured() {
        env::set_var(ENV_NEWS_API_KEY, "   ");
        env::remove_var(ENV_PORT);
        let cfg = AppConfig::from_env();
        assert!(cfg.news_api_key.is_none());
        assert_eq!(cfg.port, DEFAULT_PORT);
        env::remove_var(ENV_NEWS_API_KEY);
    }

    #[serial_test::serial]
    #[test]
    fn env_values_are_picked_up() {
        env::set_var(ENV_NEWS_API_KEY, "test-key");
        env::set_var(ENV_PORT, "8080");
        let cfg = AppConfig::from_env();
        assert_eq!(cfg.news_api_key.as_deref(), Some("test-key"));
        assert_eq!(cfg.port, 8080);
        env::remove_var(ENV_NEWS_API_KEY);
        env::remove_var(ENV_PORT);
    }

    #[serial_test::serial]
    #[test]
    fn unparseable_port_falls_back_to_default() {
        env::remove_var(ENV_NEWS_API_KEY);
        env::set_var(ENV_PORT, "not-a-port");
        let cfg = AppConfig::from_env();
        assert_eq!(cfg.port, DEFAULT_PORT);
        env::remove_var(ENV_PORT);
    }
}
