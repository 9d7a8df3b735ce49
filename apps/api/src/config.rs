use anyhow::{Context, Result};

const DEFAULT_SITE_URL: &str = "https://osielsko.lokalnenewsy.pl";
const DEFAULT_SITE_REGION: &str = "Osielsko";

/// Brand name shared by every regional deployment.
pub const BRAND: &str = "lokalnenewsy.pl";

/// Application configuration loaded from environment variables.
/// Fails at startup if required variables are missing or malformed.
#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub db_max_connections: u32,
    pub db_acquire_timeout_secs: u64,
    pub port: u16,
    pub rust_log: String,
    /// Base URL with protocol and no trailing slash.
    pub site_url: String,
    /// Region (gmina) served by this deployment.
    pub site_region: String,
    /// Fixed seed for reproducible bento layouts. Unset in production.
    pub bento_seed: Option<u64>,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            database_url: require_env("DATABASE_URL")?,
            db_max_connections: parse_env("DB_MAX_CONNECTIONS", 10)?,
            db_acquire_timeout_secs: parse_env("DB_ACQUIRE_TIMEOUT_SECS", 5)?,
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            site_url: std::env::var("SITE_URL")
                .map(|url| url.trim_end_matches('/').to_string())
                .unwrap_or_else(|_| DEFAULT_SITE_URL.to_string()),
            site_region: std::env::var("SITE_REGION")
                .unwrap_or_else(|_| DEFAULT_SITE_REGION.to_string()),
            bento_seed: std::env::var("BENTO_SEED")
                .ok()
                .map(|seed| seed.parse::<u64>())
                .transpose()
                .context("BENTO_SEED must be an unsigned 64-bit integer")?,
        })
    }

    pub fn site_title(&self) -> String {
        format!("{} - {}", self.site_region, BRAND)
    }

    /// Absolute URL for a site path.
    pub fn url_for(&self, path: &str) -> String {
        format!("{}{}", self.site_url, path)
    }
}

fn require_env(key: &str) -> Result<String> {
    std::env::var(key).with_context(|| format!("Required environment variable '{key}' is not set"))
}

fn parse_env<T: std::str::FromStr>(key: &str, default: T) -> Result<T> {
    match std::env::var(key) {
        Ok(raw) => raw
            .parse::<T>()
            .map_err(|_| anyhow::anyhow!("{key} has invalid value '{raw}'")),
        Err(_) => Ok(default),
    }
}

#[cfg(test)]
pub(crate) fn test_config() -> Config {
    Config {
        database_url: "postgres://localhost/portal_test".to_string(),
        db_max_connections: 2,
        db_acquire_timeout_secs: 1,
        port: 8080,
        rust_log: "debug".to_string(),
        site_url: DEFAULT_SITE_URL.to_string(),
        site_region: DEFAULT_SITE_REGION.to_string(),
        bento_seed: None,
    }
}
