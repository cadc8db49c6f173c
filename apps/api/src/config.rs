//! Application configuration loading from environment variables.
//!
//! All configuration is read once at startup and then shared read-only with every request.
//! Nothing in request handling consults the process environment directly.
//!
//! # Environment Variables
//!
//! ## Required Variables
//! - `WEBFLOW_API_TOKEN`: Bearer credential for the collection item store
//! - `WEBFLOW_COLLECTION_ID`: Collection holding the liked items
//!
//! ## Optional Variables
//! - `RUST_LOG`: Logging level (default: "info,likes_api=debug,tower_http=debug")
//! - `HOST`: Server bind address (default: "0.0.0.0")
//! - `PORT`: Server port (default: 3000)
//! - `WEBFLOW_API_BASE_URL`: Item store base URL (default: "https://api.webflow.com/v2")
//! - `LIKE_COUNT_FIELD`: Field inside `fieldData` holding the count (default: "like-count")
//! - `LIKE_COUNT_COERCION`: `lenient` or `strict` (default: "lenient")
//! - `UPSTREAM_TIMEOUT_SECONDS`: HTTP client timeout for item store calls (default: 10)
//! - `MAX_BODY_BYTES`: Largest accepted request body (default: 16384)

use crate::domain::likes::like_count::CoercionMode;
use std::fmt;

pub const DEFAULT_API_BASE_URL: &str = "https://api.webflow.com/v2";
pub const DEFAULT_LIKE_COUNT_FIELD: &str = "like-count";

/// Complete server configuration loaded from environment.
#[derive(Clone)]
pub struct Config {
    /// Server bind address
    pub host: String,

    /// Server port
    pub port: u16,

    /// Bearer token sent to the item store
    pub webflow_api_token: String,

    /// Collection the liked items live in
    pub webflow_collection_id: String,

    /// Base URL of the item store API, without a trailing `/collections`
    pub webflow_api_base_url: String,

    /// Name of the like-count field inside the item's field set
    pub like_count_field: String,

    /// How strictly stored like-count values are interpreted
    pub like_count_coercion: CoercionMode,

    /// Transport timeout for each item store call
    pub upstream_timeout_seconds: u64,

    /// Maximum request body size in bytes
    pub max_body_bytes: usize,
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("webflow_api_token", &"<redacted>")
            .field("webflow_collection_id", &self.webflow_collection_id)
            .field("webflow_api_base_url", &self.webflow_api_base_url)
            .field("like_count_field", &self.like_count_field)
            .field("like_count_coercion", &self.like_count_coercion)
            .field("upstream_timeout_seconds", &self.upstream_timeout_seconds)
            .field("max_body_bytes", &self.max_body_bytes)
            .finish()
    }
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if any required environment variable is missing or
    /// cannot be parsed to the expected type.
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_source(|key| std::env::var(key).ok())
    }

    /// Load configuration from an arbitrary key lookup.
    pub fn from_source<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let config = Self {
            host: env_or(&lookup, "HOST", "0.0.0.0".to_string())?,
            port: env_or(&lookup, "PORT", 3000)?,
            webflow_api_token: env_required(&lookup, "WEBFLOW_API_TOKEN")?,
            webflow_collection_id: env_required(&lookup, "WEBFLOW_COLLECTION_ID")?,
            webflow_api_base_url: env_or(
                &lookup,
                "WEBFLOW_API_BASE_URL",
                DEFAULT_API_BASE_URL.to_string(),
            )?,
            like_count_field: env_or(
                &lookup,
                "LIKE_COUNT_FIELD",
                DEFAULT_LIKE_COUNT_FIELD.to_string(),
            )?,
            like_count_coercion: env_or(&lookup, "LIKE_COUNT_COERCION", CoercionMode::Lenient)?,
            upstream_timeout_seconds: env_or(&lookup, "UPSTREAM_TIMEOUT_SECONDS", 10)?,
            max_body_bytes: env_or(&lookup, "MAX_BODY_BYTES", 16 * 1024)?,
        };

        if config.like_count_field.trim().is_empty() {
            anyhow::bail!("LIKE_COUNT_FIELD must not be empty");
        }

        Ok(config)
    }
}

/// Load a required variable. Blank values count as missing.
fn env_required<F>(lookup: &F, key: &str) -> anyhow::Result<String>
where
    F: Fn(&str) -> Option<String>,
{
    lookup(key)
        .filter(|v| !v.trim().is_empty())
        .ok_or_else(|| anyhow::anyhow!("Missing required environment variable: {}", key))
}

/// Load a variable with a default value.
///
/// # Errors
///
/// Returns an error if the variable is set but cannot be parsed.
fn env_or<F, T>(lookup: &F, key: &str, default: T) -> anyhow::Result<T>
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    match lookup(key) {
        Some(val) => val
            .trim()
            .parse::<T>()
            .map_err(|e| anyhow::anyhow!("Failed to parse {}: {}", key, e)),
        None => Ok(default),
    }
}
