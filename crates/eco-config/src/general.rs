//! General application configuration.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Default simulated latency of the templated analysis, in milliseconds.
const fn default_fallback_delay_ms() -> u64 {
    2000
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GeneralConfig {
    /// Pause before returning the templated report when no API key is set.
    /// Purely cosmetic; `0` disables it.
    #[serde(default = "default_fallback_delay_ms")]
    pub fallback_delay_ms: u64,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            fallback_delay_ms: default_fallback_delay_ms(),
        }
    }
}

impl GeneralConfig {
    #[must_use]
    pub const fn fallback_delay(&self) -> Duration {
        Duration::from_millis(self.fallback_delay_ms)
    }
}
