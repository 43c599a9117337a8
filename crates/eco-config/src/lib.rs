//! # eco-config
//!
//! Layered configuration loading for EcoLens using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`ECOLENS_*` prefix, `__` as separator)
//! 2. Project-level `.ecolens/config.toml`
//! 3. User-level `~/.config/ecolens/config.toml`
//! 4. The conventional `OPENAI_API_KEY` variable (maps to `openai.api_key`)
//! 5. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! Figment maps `ECOLENS_OPENAI__MODEL` -> `openai.model`, `ECOLENS_SEARCH__API_KEY` ->
//! `search.api_key`, etc. The `__` (double underscore) separates nested config sections.
//!
//! # Usage
//!
//! ```no_run
//! use eco_config::EcoConfig;
//!
//! let config = EcoConfig::load_with_dotenv().expect("config");
//!
//! if config.openai.is_configured() {
//!     println!("model: {}", config.openai.model);
//! }
//! ```

mod error;
mod general;
mod openai;
mod search;

pub use error::ConfigError;
pub use general::GeneralConfig;
pub use openai::OpenAiConfig;
pub use search::SearchConfig;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Well-known variable honored as a low-priority source for `openai.api_key`.
pub const OPENAI_KEY_ENV: &str = "OPENAI_API_KEY";

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct EcoConfig {
    #[serde(default)]
    pub openai: OpenAiConfig,
    #[serde(default)]
    pub search: SearchConfig,
    #[serde(default)]
    pub general: GeneralConfig,
}

impl EcoConfig {
    /// Load configuration from all sources (TOML files + environment variables).
    ///
    /// Does NOT call `dotenvy` -- use [`Self::load_with_dotenv`] if you need `.env` file loading.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Figment`] if a source cannot be parsed or a value has the wrong type.
    pub fn load() -> Result<Self, ConfigError> {
        Self::figment().extract().map_err(ConfigError::from)
    }

    /// Load configuration with `.env` file support.
    ///
    /// # Errors
    ///
    /// See [`Self::load`].
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        Self::load_dotenv_from_workspace();
        Self::load()
    }

    /// Build the figment provider chain.
    ///
    /// Public so tests can inspect the figment directly or layer providers on top.
    #[must_use]
    pub fn figment() -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()))
            .merge(
                Env::raw()
                    .only(&[OPENAI_KEY_ENV])
                    .map(|_| "openai.api_key".into()),
            );

        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                figment = figment.merge(Toml::file(global_path));
            }
        }

        let local_path = PathBuf::from(".ecolens/config.toml");
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        figment.merge(Env::prefixed("ECOLENS_").split("__"))
    }

    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("ecolens").join("config.toml"))
    }

    /// Load `.env` from the workspace root, falling back to the current directory.
    fn load_dotenv_from_workspace() {
        if let Ok(manifest_dir) = std::env::var("CARGO_MANIFEST_DIR") {
            let mut dir = PathBuf::from(manifest_dir);
            // crate -> crates/ -> workspace root
            for _ in 0..3 {
                let env_path = dir.join(".env");
                if env_path.exists() {
                    let _ = dotenvy::from_path(&env_path);
                    return;
                }
                if !dir.pop() {
                    break;
                }
            }
        }

        let _ = dotenvy::dotenv();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_offline() {
        let config = EcoConfig::default();
        assert!(!config.openai.is_configured());
        assert!(!config.search.is_configured());
        assert_eq!(config.general.fallback_delay_ms, 2000);
    }

    #[test]
    fn figment_builds_without_files() {
        figment::Jail::expect_with(|_jail| {
            let config: EcoConfig = EcoConfig::figment().extract()?;
            assert_eq!(config.openai.model, "gpt-4");
            assert_eq!(config.search.timeout_secs, 10);
            Ok(())
        });
    }
}
