//! TTL cache around a customization loader
//!
//! Keeps the last fetched result (including "no customization") so the
//! admin endpoint is hit at most once per TTL window.

use super::{CustomizationLoader, UiCustomization};
use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};
use parking_lot::RwLock;

/// Default TTL: one hour
pub const DEFAULT_CACHE_TTL_SECS: u64 = 3600;

/// Cache entry with TTL
#[derive(Debug, Clone)]
struct CacheEntry<T> {
    value: T,
    /// `None` when the TTL reaches past the representable time range
    expires_at: Option<DateTime<Utc>>,
}

impl<T> CacheEntry<T> {
    fn new(value: T, ttl_secs: u64) -> Self {
        let now = Utc::now();
        let expires_at = i64::try_from(ttl_secs)
            .ok()
            .and_then(Duration::try_seconds)
            .and_then(|ttl| now.checked_add_signed(ttl));

        Self { value, expires_at }
    }

    fn is_expired(&self) -> bool {
        self.expires_at.is_some_and(|at| Utc::now() >= at)
    }
}

/// Time-bounded cache over any loader
pub struct CachedCustomizationLoader<L> {
    inner: L,
    ttl_secs: u64,
    entry: RwLock<Option<CacheEntry<Option<UiCustomization>>>>,
}

impl<L: CustomizationLoader> CachedCustomizationLoader<L> {
    pub fn new(inner: L, ttl_secs: u64) -> Self {
        Self {
            inner,
            ttl_secs,
            entry: RwLock::new(None),
        }
    }

    /// Cache with the one hour default TTL
    pub fn with_default_ttl(inner: L) -> Self {
        Self::new(inner, DEFAULT_CACHE_TTL_SECS)
    }

    /// Cached value, if present and not expired
    fn cached(&self) -> Option<Option<UiCustomization>> {
        let entry = self.entry.read();
        entry
            .as_ref()
            .filter(|e| !e.is_expired())
            .map(|e| e.value.clone())
    }

    /// Drop the cached value so the next load refetches
    pub fn invalidate(&self) {
        *self.entry.write() = None;
    }
}

#[async_trait]
impl<L: CustomizationLoader> CustomizationLoader for CachedCustomizationLoader<L> {
    async fn load(&self) -> Option<UiCustomization> {
        if let Some(value) = self.cached() {
            tracing::debug!("Using cached UI customization");
            return value;
        }

        let value = self.inner.load().await;
        *self.entry.write() = Some(CacheEntry::new(value.clone(), self.ttl_secs));
        value
    }
}
