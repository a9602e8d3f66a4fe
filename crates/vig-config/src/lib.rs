//! # vig-config
//!
//! Layered configuration loading for vigil using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`VIGIL_*` prefix, `__` as separator)
//! 2. Project-level `.vigil/config.toml`
//! 3. User-level `~/.config/vigil/config.toml`
//! 4. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! Figment maps `VIGIL_API__BASE_URL` -> `api.base_url`,
//! `VIGIL_GENERAL__JSON_OUTPUT` -> `general.json_output`, etc. The `__`
//! (double underscore) separates nested config sections.
//!
//! # Usage
//!
//! ```no_run
//! use vig_config::VigConfig;
//!
//! // Load from all sources (dotenvy + TOML + env):
//! let config = VigConfig::load_with_dotenv().expect("config");
//!
//! println!("API base: {}", config.api.base_url());
//! ```

mod api;
mod error;
mod general;

pub use api::ApiConfig;
pub use error::ConfigError;
pub use general::GeneralConfig;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct VigConfig {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub general: GeneralConfig,
}

impl VigConfig {
    /// Load configuration from all sources (TOML files + environment variables).
    ///
    /// Does NOT call `dotenvy` -- use [`Self::load_with_dotenv`] if you need
    /// `.env` file loading.
    ///
    /// Precedence (highest to lowest):
    /// 1. Environment variables (`VIGIL_*` prefix)
    /// 2. `.vigil/config.toml` (project-local)
    /// 3. `~/.config/vigil/config.toml` (user-global)
    /// 4. Default values
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Figment`] when extraction fails.
    pub fn load() -> Result<Self, ConfigError> {
        Self::figment().extract().map_err(ConfigError::from)
    }

    /// Load configuration with `.env` file support.
    ///
    /// Calls `dotenvy` before building the figment. This is the typical entry
    /// point for the CLI and tests.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Figment`] when extraction fails.
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();
        Self::load()
    }

    /// Build the figment provider chain.
    ///
    /// Public so tests can inspect the figment directly or add additional
    /// providers on top.
    #[must_use]
    pub fn figment() -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        // Layer 1: User-global config
        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                figment = figment.merge(Toml::file(global_path));
            }
        }

        // Layer 2: Project-local config
        let local_path = PathBuf::from(".vigil/config.toml");
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        // Layer 3: Environment variables (highest priority)
        figment = figment.merge(Env::prefixed("VIGIL_").split("__"));

        figment
    }

    /// Path to the user-global config file.
    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("vigil").join("config.toml"))
    }
}
