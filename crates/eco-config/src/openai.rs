//! OpenAI chat-completions configuration.

use serde::{Deserialize, Serialize};

fn default_model() -> String {
    String::from("gpt-4")
}

fn default_endpoint() -> String {
    String::from("https://api.openai.com/v1/chat/completions")
}

const fn default_timeout_secs() -> u64 {
    60
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct OpenAiConfig {
    /// API key. Optional; without it the analyst runs in fallback mode.
    #[serde(default)]
    pub api_key: String,

    /// Chat model identifier.
    #[serde(default = "default_model")]
    pub model: String,

    /// Chat completions endpoint (OpenAI-compatible).
    #[serde(default = "default_endpoint")]
    pub endpoint: String,

    /// HTTP client timeout, in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for OpenAiConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            model: default_model(),
            endpoint: default_endpoint(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl OpenAiConfig {
    #[must_use]
    pub fn is_configured(&self) -> bool {
        !self.api_key.trim().is_empty()
    }

    /// The configured key, if any.
    #[must_use]
    pub fn credential(&self) -> Option<String> {
        self.is_configured().then(|| self.api_key.clone())
    }
}
