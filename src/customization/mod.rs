//! Optional remote UI customization
//!
//! An admin endpoint can override the dashboard title, welcome text,
//! footer and theme color. Fetching is best-effort: any failure leaves
//! the built-in settings in place.

pub mod cache;
pub mod remote;


pub use cache::{CachedCustomizationLoader, DEFAULT_CACHE_TTL_SECS};
pub use remote::RemoteCustomizationLoader;

use crate::config::Config;
use async_trait::async_trait;
use crossterm::style::Color;
use serde::{Deserialize, Serialize};

/// Overrides returned by the admin endpoint
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UiCustomization {
    pub app_title: Option<String>,
    pub welcome_message: Option<String>,
    pub footer_text: Option<String>,
    pub theme_color: Option<String>,
}

/// Resolved dashboard settings
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct UiSettings {
    pub app_title: String,
    pub welcome_message: String,
    pub footer_text: String,
    /// Hex color, e.g. `#1E88E5`
    pub theme_color: String,
}

impl Default for UiSettings {
    fn default() -> Self {
        Self {
            app_title: "Product Review Sentiment Analyzer".to_string(),
            welcome_message: String::new(),
            footer_text: String::new(),
            theme_color: "#1E88E5".to_string(),
        }
    }
}

impl UiSettings {
    /// Overlay a customization on these settings
    pub fn apply(&self, custom: Option<&UiCustomization>) -> UiSettings {
        let Some(custom) = custom else {
            return self.clone();
        };

        let pick = |over: &Option<String>, base: &String| over.clone().unwrap_or_else(|| base.clone());

        UiSettings {
            app_title: pick(&custom.app_title, &self.app_title),
            welcome_message: pick(&custom.welcome_message, &self.welcome_message),
            footer_text: pick(&custom.footer_text, &self.footer_text),
            theme_color: pick(&custom.theme_color, &self.theme_color),
        }
    }

    /// Theme color as a terminal RGB color, if it parses
    pub fn accent_color(&self) -> Option<Color> {
        let hex = self.theme_color.strip_prefix('#')?;
        if hex.len() != 6 || !hex.is_ascii() {
            return None;
        }
        let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();
        Some(Color::Rgb {
            r: channel(0)?,
            g: channel(2)?,
            b: channel(4)?,
        })
    }
}

/// Source of UI customization (allows mocking)
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CustomizationLoader: Send + Sync {
    /// Fetch overrides; `None` means use the defaults
    async fn load(&self) -> Option<UiCustomization>;
}

/// Loader returning a fixed value, for offline use
#[derive(Debug, Clone, Default)]
pub struct StaticCustomizationLoader {
    value: Option<UiCustomization>,
}

impl StaticCustomizationLoader {
    pub fn new(value: Option<UiCustomization>) -> Self {
        Self { value }
    }
}

#[async_trait]
impl CustomizationLoader for StaticCustomizationLoader {
    async fn load(&self) -> Option<UiCustomization> {
        self.value.clone()
    }
}

/// Load customization and merge it over `base`
pub async fn resolve_settings<L>(base: &UiSettings, loader: &L) -> UiSettings
where
    L: CustomizationLoader + ?Sized,
{
    let custom = loader.load().await;
    base.apply(custom.as_ref())
}

/// Settings for a dashboard session: local settings overlaid with the
/// remote customization when one is configured.
///
/// Never fails. A loader that cannot be built leaves the local settings.
pub async fn load_settings(config: &Config) -> UiSettings {
    if !config.remote.is_configured() {
        return config.ui.clone();
    }

    match RemoteCustomizationLoader::from_config(&config.remote) {
        Ok(remote) => {
            let loader = CachedCustomizationLoader::new(remote, config.remote.cache_ttl_secs);
            resolve_settings(&config.ui, &loader).await
        }
        Err(e) => {
            tracing::warn!("Remote customization disabled: {}", e);
            config.ui.clone()
        }
    }
}
