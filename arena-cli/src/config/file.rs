//! TOML file configuration structures.
//!
//! These structs directly map to the `arena-config.toml` file format.

use serde::{Deserialize, Serialize};
use url::Url;

/// Root configuration structure as read from the TOML file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FileConfig {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub governor: GovernorConfig,
    #[serde(default)]
    pub session: SessionConfig,
}

/// API endpoint section.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Root URL of the API (e.g., "https://api.example.com/api/").
    pub base_url: Option<Url>,
    /// Per-request timeout in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: None,
            timeout_secs: default_timeout_secs(),
        }
    }
}

fn default_timeout_secs() -> u64 {
    30
}

/// Client-side rate limit section.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GovernorConfig {
    /// Look-back window in milliseconds.
    #[serde(default = "default_window_ms")]
    pub window_ms: u64,
    /// Maximum calls per endpoint within one window.
    #[serde(default = "default_limit")]
    pub limit: u32,
}

impl Default for GovernorConfig {
    fn default() -> Self {
        Self {
            window_ms: default_window_ms(),
            limit: default_limit(),
        }
    }
}

fn default_window_ms() -> u64 {
    arena_sdk::governor::DEFAULT_WINDOW.as_millis() as u64
}

fn default_limit() -> u32 {
    arena_sdk::governor::DEFAULT_LIMIT
}

/// Stored session section.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Bearer token. Usually supplied through `ARENA_TOKEN` instead.
    pub token: Option<String>,
}
