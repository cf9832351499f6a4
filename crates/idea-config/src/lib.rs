//! # idea-config
//!
//! Layered configuration loading for IdeaFlow using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`IDEAFLOW_*` prefix, `__` as separator)
//! 2. `GEMINI_API_KEY` (mapped to `gemini.api_key`)
//! 3. Project-level `.ideaflow/config.toml`
//! 4. User-level `~/.config/ideaflow/config.toml`
//! 5. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! Figment maps `IDEAFLOW_GEMINI__API_KEY` -> `gemini.api_key`,
//! `IDEAFLOW_STORE__PATH` -> `store.path`, etc.
//!
//! # Usage
//!
//! ```no_run
//! use idea_config::IdeaConfig;
//!
//! let config = IdeaConfig::load_with_dotenv().expect("config");
//!
//! if config.gemini.is_configured() {
//!     println!("model: {}", config.gemini.model);
//! }
//! ```

mod error;
mod gemini;
mod general;
mod store;

pub use error::ConfigError;
pub use gemini::GeminiConfig;
pub use general::GeneralConfig;
pub use store::StoreConfig;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Conventional credential variable honoured besides the prefixed one.
pub const GEMINI_KEY_ENV: &str = "GEMINI_API_KEY";

/// Project-local config file, relative to the working directory.
pub const PROJECT_CONFIG_PATH: &str = ".ideaflow/config.toml";

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct IdeaConfig {
    #[serde(default)]
    pub store: StoreConfig,
    #[serde(default)]
    pub gemini: GeminiConfig,
    #[serde(default)]
    pub general: GeneralConfig,
}

impl IdeaConfig {
    /// Load configuration from all sources (TOML files + environment variables).
    ///
    /// Does NOT call `dotenvy` -- use [`Self::load_with_dotenv`] if you need
    /// `.env` file loading.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if extraction fails or a value is out of range.
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_figment(&Self::figment())
    }

    /// Load configuration with `.env` file support.
    ///
    /// # Errors
    ///
    /// See [`Self::load`].
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();
        Self::load()
    }

    /// Extract and validate from an arbitrary figment.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if extraction fails or a value is out of range.
    pub fn from_figment(figment: &Figment) -> Result<Self, ConfigError> {
        let config: Self = figment.extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Build the figment provider chain.
    ///
    /// This is public so tests can inspect the figment directly or add
    /// additional providers on top.
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
        let local_path = PathBuf::from(PROJECT_CONFIG_PATH);
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        // Layer 3: conventional credential variable
        figment = figment.merge(
            Env::raw()
                .only(&[GEMINI_KEY_ENV])
                .map(|_| "gemini.api_key".into()),
        );

        // Layer 4: Environment variables (highest priority)
        figment.merge(Env::prefixed("IDEAFLOW_").split("__"))
    }

    /// Check values figment cannot express as types.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] for a zero timeout or an empty
    /// store path.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.gemini.timeout_secs == 0 {
            return Err(ConfigError::InvalidValue {
                field: "gemini.timeout_secs".into(),
                reason: "must be greater than zero".into(),
            });
        }
        if self.store.path.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "store.path".into(),
                reason: "must not be empty".into(),
            });
        }
        Ok(())
    }

    /// The Gemini section, or an error explaining how to configure it.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::NotConfigured`] when no API key is set.
    pub fn require_gemini(&self) -> Result<&GeminiConfig, ConfigError> {
        if self.gemini.is_configured() {
            Ok(&self.gemini)
        } else {
            Err(ConfigError::NotConfigured {
                section: "gemini".into(),
                hint: format!("set {GEMINI_KEY_ENV} or IDEAFLOW_GEMINI__API_KEY"),
            })
        }
    }

    /// Whether the TOML file at `path` carries `gemini.api_key`.
    ///
    /// Project files tend to end up in version control, so the binary warns
    /// when one holds the credential.
    #[must_use]
    pub fn file_sets_api_key(path: &Path) -> bool {
        path.exists()
            && Figment::from(Toml::file(path))
                .find_value("gemini.api_key")
                .is_ok()
    }

    /// Path to the user-global config file.
    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("ideaflow").join("config.toml"))
    }
}
