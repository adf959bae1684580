//! Search backend configuration.

use serde::{Deserialize, Serialize};

/// Default result limit, matching the backend's own default.
const fn default_limit() -> u32 {
    10
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SearchConfig {
    /// Base URL of the search backend (e.g. `http://localhost:8000`).
    /// Empty means "not configured"; callers choose their own fallback.
    #[serde(default)]
    pub base_url: String,

    /// Default result limit for searches that don't pass one explicitly.
    #[serde(default = "default_limit")]
    pub default_limit: u32,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            base_url: String::new(),
            default_limit: default_limit(),
        }
    }
}

impl SearchConfig {
    /// Base URL with trailing slashes stripped. Empty when unconfigured.
    #[must_use]
    pub fn base_url(&self) -> &str {
        self.base_url.trim_end_matches('/')
    }

    /// Whether a backend base URL has been set.
    #[must_use]
    pub fn is_configured(&self) -> bool {
        !self.base_url.is_empty()
    }
}
