//! Web search provider configuration.

use serde::{Deserialize, Serialize};

fn default_endpoint() -> String {
    String::from("https://api.search.brave.com/res/v1/web/search")
}

const fn default_timeout_secs() -> u64 {
    10
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SearchConfig {
    /// Brave Search subscription token. Without it the scout uses fallback evidence.
    #[serde(default)]
    pub api_key: String,

    /// Web search endpoint.
    #[serde(default = "default_endpoint")]
    pub endpoint: String,

    /// HTTP client timeout, in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            endpoint: default_endpoint(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl SearchConfig {
    #[must_use]
    pub fn is_configured(&self) -> bool {
        !self.api_key.trim().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_not_configured() {
        let config = SearchConfig::default();
        assert!(!config.is_configured());
        assert_eq!(
            config.endpoint,
            "https://api.search.brave.com/res/v1/web/search"
        );
    }
}
