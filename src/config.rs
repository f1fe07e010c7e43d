//! Configuration management

use crate::customization::{UiSettings, DEFAULT_CACHE_TTL_SECS};
use crate::error::Result;
use serde::Deserialize;
use std::path::Path;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    /// Built-in dashboard text and colors
    #[serde(default)]
    pub ui: UiSettings,
    /// Optional remote UI customization endpoint
    #[serde(default)]
    pub remote: RemoteConfig,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct RemoteConfig {
    /// Customization endpoint (GET)
    pub url: Option<String>,
    /// Bearer token sent with the request
    pub api_key: Option<String>,
    /// Request timeout in seconds
    pub timeout_secs: u64,
    /// How long a fetched customization stays valid
    pub cache_ttl_secs: u64,
}

impl Default for RemoteConfig {
    fn default() -> Self {
        Self {
            url: None,
            api_key: None,
            timeout_secs: 10,
            cache_ttl_secs: DEFAULT_CACHE_TTL_SECS,
        }
    }
}

impl RemoteConfig {
    /// Returns true if both the endpoint and the credential are set
    pub fn is_configured(&self) -> bool {
        self.url.as_deref().is_some_and(|u| !u.is_empty())
            && self.api_key.as_deref().is_some_and(|k| !k.is_empty())
    }

    /// Fill unset credentials from fallback values
    pub fn fill_credentials(&mut self, url: Option<String>, api_key: Option<String>) {
        if self.url.is_none() {
            self.url = url;
        }
        if self.api_key.is_none() {
            self.api_key = api_key;
        }
    }
}

impl Config {
    /// Load configuration from file, then `.env` and environment overrides
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        dotenvy::dotenv().ok();

        let settings = config::Config::builder()
            .add_source(config::File::from(path.as_ref()))
            .add_source(env_source())
            .build()?;

        let mut config: Config = settings.try_deserialize()?;
        config.apply_admin_env();
        Ok(config)
    }

    /// Load from TOML text (environment is not consulted)
    pub fn from_toml_str(source: &str) -> Result<Self> {
        let settings = config::Config::builder()
            .add_source(config::File::from_str(source, config::FileFormat::Toml))
            .build()?;

        Ok(settings.try_deserialize()?)
    }

    /// Load from default locations, falling back to built-in defaults
    pub fn load_default() -> Result<Self> {
        dotenvy::dotenv().ok();

        let paths = ["review-sentiment.toml", "~/.config/review-sentiment/config.toml"];

        for path in paths {
            let expanded = shellexpand::tilde(path);
            if Path::new(expanded.as_ref()).exists() {
                return Self::load(expanded.as_ref());
            }
        }

        tracing::debug!("No configuration file found, using defaults");

        let settings = config::Config::builder().add_source(env_source()).build()?;
        let mut config: Config = settings.try_deserialize()?;
        config.apply_admin_env();
        Ok(config)
    }

    /// Pick up ADMIN_API_URL / ADMIN_API_KEY credentials
    fn apply_admin_env(&mut self) {
        self.remote.fill_credentials(
            std::env::var("ADMIN_API_URL").ok(),
            std::env::var("ADMIN_API_KEY").ok(),
        );
    }
}

fn env_source() -> config::Environment {
    config::Environment::with_prefix("REVIEW_SENTIMENT")
        .prefix_separator("__")
        .separator("__")
}
