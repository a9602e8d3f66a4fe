//! Backend API endpoint configuration.

use serde::{Deserialize, Serialize};

fn default_base_url() -> String {
    "http://localhost:8000/api".to_string()
}

/// Default per-request timeout in seconds.
const fn default_timeout_secs() -> u64 {
    30
}

/// Where the authentication and planning services live.
///
/// Both services are served from one backend in the original deployment, so
/// a single base URL covers `/login`, `/me`, `/token/refresh`, `/logout`,
/// `/planning`, and `/calendar/...`.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ApiConfig {
    /// Base URL without a trailing slash, e.g. `https://vigil.example/api`.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Per-request timeout applied to the HTTP client.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl ApiConfig {
    /// Base URL with any trailing slash removed.
    #[must_use]
    pub fn base_url(&self) -> &str {
        self.base_url.trim_end_matches('/')
    }
}
