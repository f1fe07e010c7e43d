//! Admin API client for UI customization

use super::{CustomizationLoader, UiCustomization};
use crate::config::RemoteConfig;
use crate::error::Result;
use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use std::time::Duration;

/// Fetches customization with a bearer-token GET
pub struct RemoteCustomizationLoader {
    http: Client,
    url: Option<String>,
    api_key: Option<String>,
}

impl RemoteCustomizationLoader {
    /// Create a new loader. Missing url or key disables fetching.
    pub fn new(url: Option<String>, api_key: Option<String>, timeout: Duration) -> Result<Self> {
        let http = Client::builder().timeout(timeout).build()?;

        Ok(Self { http, url, api_key })
    }

    pub fn from_config(config: &RemoteConfig) -> Result<Self> {
        Self::new(
            config.url.clone(),
            config.api_key.clone(),
            Duration::from_secs(config.timeout_secs),
        )
    }

    /// One request. `Ok(None)` for any non-200 status.
    async fn fetch(&self, url: &str, api_key: &str) -> Result<Option<UiCustomization>> {
        let response = self.http.get(url).bearer_auth(api_key).send().await?;

        let status = response.status();
        if status != StatusCode::OK {
            tracing::warn!("Error fetching customizations: {}", status);
            return Ok(None);
        }

        Ok(Some(response.json().await?))
    }
}

#[async_trait]
impl CustomizationLoader for RemoteCustomizationLoader {
    async fn load(&self) -> Option<UiCustomization> {
        let (Some(url), Some(api_key)) = (self.url.as_deref(), self.api_key.as_deref()) else {
            tracing::debug!("Remote customization not configured");
            return None;
        };
        if url.is_empty() || api_key.is_empty() {
            tracing::debug!("Remote customization not configured");
            return None;
        }

        match self.fetch(url, api_key).await {
            Ok(custom) => custom,
            Err(e) => {
                tracing::warn!("Error fetching customizations: {}", e);
                None
            }
        }
    }
}
