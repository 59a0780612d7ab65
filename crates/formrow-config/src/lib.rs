//! # formrow-config
//!
//! Layered configuration loading for formrow using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`FORMROW_*` prefix, `__` as separator)
//! 2. An explicit file passed by the caller (`formrow --config <path>`)
//! 3. Project-level `.formrow/config.toml`
//! 4. User-level `~/.config/formrow/config.toml`
//! 5. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! Figment maps `FORMROW_LAYOUT__ROW_SELECTOR` -> `layout.row_selector`,
//! `FORMROW_EXTRACT__UNCHECKED` -> `extract.unchecked`, etc.
//!
//! # Usage
//!
//! ```no_run
//! use formrow_config::FormrowConfig;
//!
//! let config = FormrowConfig::load_with_dotenv().expect("config");
//! println!("rows: {}", config.layout.row_selector);
//! ```

mod error;
mod extract;
mod layout;
mod output;

pub use error::ConfigError;
pub use extract::ExtractConfig;
pub use layout::{
    DEFAULT_LABEL_SELECTOR, DEFAULT_ROW_SELECTOR, DEFAULT_VALUE_SELECTOR, LayoutConfig,
};
pub use output::{OutputConfig, OutputFormat};

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct FormrowConfig {
    #[serde(default)]
    pub layout: LayoutConfig,
    #[serde(default)]
    pub extract: ExtractConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

impl FormrowConfig {
    /// Load configuration from all sources (TOML files + environment variables).
    ///
    /// Does NOT call `dotenvy`; use [`Self::load_with_dotenv`] for `.env` loading.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(None)
    }

    /// Load configuration with an extra TOML file layered above the
    /// project config and below the environment.
    pub fn load_from(extra: Option<&Path>) -> Result<Self, ConfigError> {
        if let Some(path) = extra
            && !path.exists()
        {
            return Err(ConfigError::MissingFile(path.to_path_buf()));
        }

        let config: Self = Self::figment_with(extra).extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration with `.env` file support.
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        Self::load_with_dotenv_from(None)
    }

    /// [`Self::load_from`] after loading `.env` into the environment, so
    /// `FORMROW_*` entries there take part in the env layer.
    pub fn load_with_dotenv_from(extra: Option<&Path>) -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();
        Self::load_from(extra)
    }

    /// Build the figment provider chain without an explicit file.
    pub fn figment() -> Figment {
        Self::figment_with(None)
    }

    /// Build the figment provider chain.
    ///
    /// Public so tests can inspect the figment directly or add providers.
    pub fn figment_with(extra: Option<&Path>) -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        // Layer 1: User-global config
        if let Some(global_path) = Self::global_config_path()
            && global_path.exists()
        {
            figment = figment.merge(Toml::file(global_path));
        }

        // Layer 2: Project-local config
        let local_path = PathBuf::from(".formrow/config.toml");
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        // Layer 3: Explicit file
        if let Some(path) = extra {
            figment = figment.merge(Toml::file(path));
        }

        // Layer 4: Environment variables (highest priority)
        figment.merge(Env::prefixed("FORMROW_").split("__"))
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.layout.validate()
    }

    /// Path to the user-global config file.
    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("formrow").join("config.toml"))
    }
}
