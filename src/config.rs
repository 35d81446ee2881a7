//! Server configuration.
//!
//! Loaded with figment from, in order of precedence (highest first):
//! 1. The raw `PORT` environment variable
//! 2. Environment variables prefixed with `ACADEMY_`
//! 3. `academy.toml` in the working directory, if present
//! 4. Built-in defaults

use std::path::PathBuf;

use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

const CONFIG_FILE_NAME: &str = "academy.toml";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to load configuration: {0}")]
    Load(Box<figment::Error>),

    #[error("invalid configuration: {0}")]
    Invalid(String),
}

impl From<figment::Error> for ConfigError {
    fn from(err: figment::Error) -> Self {
        Self::Load(Box::new(err))
    }
}

/// Which embedded dashboard document is served.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PageVariant {
    /// The complete dashboard with every panel.
    #[default]
    Full,
    /// The reduced dashboard: roster, chores and calendar only.
    Simplified,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub host: String,
    pub port: u16,
    /// Directory that `/attached_assets/*` is served from.
    pub assets_dir: PathBuf,
    pub page: PageVariant,
    pub admin_email: String,
    pub admin_password: String,
    /// Weekly grocery budget per player, in euro cents.
    pub budget_cap_cents: u32,
    /// Reported by `/health`.
    pub system_name: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 5000,
            assets_dir: PathBuf::from("attached_assets"),
            page: PageVariant::Full,
            admin_email: "admin@fckoln.de".to_string(),
            admin_password: "admin123".to_string(), // Default password, change this!
            budget_cap_cents: 3500,
            system_name: "FC Köln Management System".to_string(),
        }
    }
}

impl Config {
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_figment(Self::figment())
    }

    pub fn figment() -> Figment {
        Figment::from(Serialized::defaults(Config::default()))
            .merge(Toml::file(CONFIG_FILE_NAME))
            .merge(Env::prefixed("ACADEMY_"))
            .merge(Env::raw().only(&["PORT"]))
    }

    pub fn from_figment(figment: Figment) -> Result<Self, ConfigError> {
        let config: Config = figment.extract()?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.port == 0 {
            return Err(ConfigError::Invalid("port must be non-zero".to_string()));
        }
        if self.budget_cap_cents == 0 {
            return Err(ConfigError::Invalid(
                "budget_cap_cents must be greater than zero".to_string(),
            ));
        }
        if self.admin_email.trim().is_empty() || self.admin_password.is_empty() {
            return Err(ConfigError::Invalid(
                "admin credentials must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}
