// src/config.rs
use std::{env, time::Duration};
use thiserror::Error;

use crate::infrastructure::google::{
    gemini_client::{DEFAULT_GEMINI_BASE_URL, DEFAULT_GEMINI_MODEL},
    places_client::DEFAULT_PLACES_BASE_URL,
};

#[derive(Clone, Debug)]
pub struct AppConfig {
    listen_addr: String,
    allowed_origins: Vec<String>,
    places_api_key: Option<String>,
    places_base_url: String,
    gemini_api_key: Option<String>,
    gemini_base_url: String,
    gemini_model: String,
    romanizer_url: Option<String>,
    redis_url: Option<String>,
    admin_api_key: Option<String>,
    cache_ttl: Duration,
    rate_limit_enabled: bool,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid configuration: {0}")]
    Invalid(String),
}

const DEFAULT_CACHE_TTL_SECS: u64 = 60 * 60 * 24 * 7;

fn default_listen_addr() -> String {
    "127.0.0.1:8080".into()
}

fn default_allowed_origins() -> Vec<String> {
    vec!["http://localhost:3000".into()]
}

fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|p| p.trim().to_string())
        .filter(|p| !p.is_empty())
        .collect()
}

fn parse_bool(name: &str, raw: &str) -> Result<bool, ConfigError> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        other => Err(ConfigError::Invalid(format!("{name} must be a boolean, got '{other}'"))),
    }
}

impl AppConfig {
    /// Build configuration from environment variables (and `.env` when
    /// present). Upstream keys are optional; features depending on a missing
    /// key fail at request time.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|name| env::var(name).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        // Empty values count as unset.
        let var = |name: &str| lookup(name).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

        let listen_addr = var("LISTEN_ADDR").unwrap_or_else(default_listen_addr);
        let allowed_origins = var("ALLOWED_ORIGINS")
            .map(|s| parse_origins(&s))
            .unwrap_or_else(default_allowed_origins);

        let cache_ttl_secs = match var("CACHE_TTL_SECS") {
            Some(raw) => raw.parse::<u64>().map_err(|_| {
                ConfigError::Invalid(format!("CACHE_TTL_SECS must be a number of seconds, got '{raw}'"))
            })?,
            None => DEFAULT_CACHE_TTL_SECS,
        };
        if cache_ttl_secs == 0 {
            return Err(ConfigError::Invalid("CACHE_TTL_SECS must be positive".into()));
        }

        let rate_limit_enabled = match var("RATE_LIMIT_ENABLED") {
            Some(raw) => parse_bool("RATE_LIMIT_ENABLED", &raw)?,
            None => true,
        };

        let redis_url = var("REDIS_URL");
        if let Some(url) = &redis_url {
            if !url.starts_with("redis://") && !url.starts_with("rediss://") {
                return Err(ConfigError::Invalid(
                    "REDIS_URL must start with redis:// or rediss://".into(),
                ));
            }
        }

        Ok(Self {
            listen_addr,
            allowed_origins,
            places_api_key: var("GOOGLE_PLACES_API_KEY"),
            places_base_url: var("GOOGLE_PLACES_BASE_URL")
                .unwrap_or_else(|| DEFAULT_PLACES_BASE_URL.to_string()),
            gemini_api_key: var("GEMINI_API_KEY"),
            gemini_base_url: var("GEMINI_BASE_URL")
                .unwrap_or_else(|| DEFAULT_GEMINI_BASE_URL.to_string()),
            gemini_model: var("GEMINI_MODEL").unwrap_or_else(|| DEFAULT_GEMINI_MODEL.to_string()),
            romanizer_url: var("ROMANIZER_URL"),
            redis_url,
            admin_api_key: var("ADMIN_API_KEY"),
            cache_ttl: Duration::from_secs(cache_ttl_secs),
            rate_limit_enabled,
        })
    }

    pub fn listen_addr(&self) -> &str {
        &self.listen_addr
    }

    pub fn allowed_origins(&self) -> &[String] {
        &self.allowed_origins
    }

    /// Used by router construction in tests where a full `AppConfig` is
    /// unnecessary.
    pub fn allowed_origins_from_env() -> Vec<String> {
        env::var("ALLOWED_ORIGINS")
            .ok()
            .map(|s| parse_origins(&s))
            .filter(|o| !o.is_empty())
            .unwrap_or_else(default_allowed_origins)
    }

    pub fn places_api_key(&self) -> Option<&str> {
        self.places_api_key.as_deref()
    }

    pub fn places_base_url(&self) -> &str {
        &self.places_base_url
    }

    pub fn gemini_api_key(&self) -> Option<&str> {
        self.gemini_api_key.as_deref()
    }

    pub fn gemini_base_url(&self) -> &str {
        &self.gemini_base_url
    }

    pub fn gemini_model(&self) -> &str {
        &self.gemini_model
    }

    pub fn romanizer_url(&self) -> Option<&str> {
        self.romanizer_url.as_deref()
    }

    pub fn redis_url(&self) -> Option<&str> {
        self.redis_url.as_deref()
    }

    pub fn admin_api_key(&self) -> Option<&str> {
        self.admin_api_key.as_deref()
    }

    pub fn cache_ttl(&self) -> Duration {
        self.cache_ttl
    }

    pub fn rate_limit_enabled(&self) -> bool {
        self.rate_limit_enabled
    }
}
