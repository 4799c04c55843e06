//! OpenWeatherMap adapter - Implements ConditionsPort using integration_openweathermap
//!
//! Resolves the configured location, consults the cache, fetches from the
//! current weather or station measurement endpoint, normalizes the payload
//! and caches non-empty results.

use std::sync::Arc;

use application::{
    error::ApplicationError,
    ports::{
        CachePort, CachePortExt, ConditionsPort, ConfigStoreExt, ConfigStorePort, HttpClientPort,
        HttpRequest,
    },
};
use async_trait::async_trait;
use chrono::Utc;
use domain::{NormalizedConditions, StationId};
use integration_openweathermap::{
    API_KEY_SETTING, ApiRequest, OpenWeatherMapConfig, STATION_ID_SETTING, Target,
    normalize_response,
};
use tracing::{debug, info, instrument, warn};

use crate::cache::generate_cache_key;

/// Provider name reported through [`ConditionsPort::provider_name`]
pub const PROVIDER_NAME: &str = "OpenWeatherMap";

/// Conditions provider for the OpenWeatherMap API
pub struct OpenWeatherMapAdapter<H: HttpClientPort> {
    config: OpenWeatherMapConfig,
    http: Arc<H>,
    cache: Option<Arc<dyn CachePort>>,
}

impl<H: HttpClientPort> std::fmt::Debug for OpenWeatherMapAdapter<H> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OpenWeatherMapAdapter")
            .field("config", &self.config)
            .field("cache", &self.cache)
            .finish_non_exhaustive()
    }
}

impl<H: HttpClientPort> OpenWeatherMapAdapter<H> {
    /// Create an adapter without a cache
    pub const fn new(config: OpenWeatherMapConfig, http: Arc<H>) -> Self {
        Self {
            config,
            http,
            cache: None,
        }
    }

    /// Create an adapter, filling a missing API key and station id from
    /// settings storage
    ///
    /// Settings that are absent or blank leave the configuration unchanged.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be read.
    pub async fn from_config_store(
        mut config: OpenWeatherMapConfig,
        http: Arc<H>,
        store: &dyn ConfigStorePort,
    ) -> Result<Self, ApplicationError> {
        if config.api_key().is_none() {
            config.api_key = store.get_non_empty(API_KEY_SETTING).await?;
        }

        if config.station_id.is_none() {
            if let Some(id) = store.get_non_empty(STATION_ID_SETTING).await? {
                config.station_id = Some(StationId::new(id)?);
            }
        }

        Ok(Self::new(config, http))
    }

    /// Attach a cache
    ///
    /// Results are only cached when the configuration also names a cache key.
    #[must_use]
    pub fn with_cache(mut self, cache: Arc<dyn CachePort>) -> Self {
        self.cache = Some(cache);
        self
    }

    /// Get the configuration
    #[must_use]
    pub const fn config(&self) -> &OpenWeatherMapConfig {
        &self.config
    }

    /// Cache key for `target`, if caching is enabled
    fn cache_key_for(&self, target: &Target) -> Option<String> {
        self.cache.as_ref()?;
        let prefix = self.config.cache_key()?;
        Some(generate_cache_key(prefix, &target.cache_subject()))
    }

    /// Check cache for conditions
    async fn get_cached(&self, cache_key: &str) -> Option<NormalizedConditions> {
        let cache = self.cache.as_ref()?;

        match cache.get::<NormalizedConditions>(cache_key).await {
            Ok(Some(cached)) => {
                debug!(key = %cache_key, "Cache hit for conditions");
                Some(cached)
            },
            Ok(None) => {
                debug!(key = %cache_key, "Cache miss for conditions");
                None
            },
            Err(e) => {
                warn!(error = %e, key = %cache_key, "Cache read error");
                None
            },
        }
    }

    /// Store conditions in cache
    async fn cache_conditions(&self, cache_key: &str, conditions: &NormalizedConditions) {
        let Some(cache) = self.cache.as_ref() else {
            return;
        };

        let ttl = self.config.cache_ttl();
        if let Err(e) = cache.set(cache_key, conditions, ttl).await {
            warn!(error = %e, key = %cache_key, "Cache write error");
        } else {
            debug!(key = %cache_key, ttl_secs = ttl.as_secs(), "Cached conditions");
        }
    }

    /// Fetch and normalize conditions for `target`
    async fn fetch(&self, target: &Target) -> Result<NormalizedConditions, ApplicationError> {
        let api_key = self.config.api_key().unwrap_or_default();
        if api_key.is_empty() {
            warn!("No OpenWeatherMap API key configured");
        }

        let request = target.request(
            &self.config.base_url,
            api_key,
            self.config.units,
            Utc::now(),
        );
        let response = self.http.get(&to_http_request(request)).await?;

        if !response.is_success() {
            warn!(status = response.status, "OpenWeatherMap returned non-success status");
        }

        Ok(normalize_response(
            target,
            &response.body,
            self.config.units,
            self.config.include_raw,
        ))
    }
}

fn to_http_request(request: ApiRequest) -> HttpRequest {
    request
        .params
        .into_iter()
        .fold(HttpRequest::get(request.url), |http, (name, value)| {
            http.param(name, value)
        })
}

#[async_trait]
impl<H: HttpClientPort> ConditionsPort for OpenWeatherMapAdapter<H> {
    #[instrument(skip(self))]
    async fn get_conditions(&self) -> Result<Option<NormalizedConditions>, ApplicationError> {
        let Some(target) = self.config.target() else {
            debug!("No location or station configured");
            return Ok(None);
        };

        let cache_key = self.cache_key_for(&target);
        if let Some(key) = cache_key.as_deref() {
            if let Some(cached) = self.get_cached(key).await {
                return Ok(Some(cached));
            }
        }

        let conditions = self.fetch(&target).await?;
        info!(
            temperature = ?conditions.temperature,
            summary = ?conditions.summary,
            "Fetched OpenWeatherMap conditions"
        );

        if let Some(key) = cache_key.as_deref() {
            if conditions.is_empty() {
                debug!(key = %key, "Not caching empty conditions");
            } else {
                self.cache_conditions(key, &conditions).await;
            }
        }

        Ok(Some(conditions))
    }

    fn provider_name(&self) -> &'static str {
        PROVIDER_NAME
    }

    fn is_available(&self) -> bool {
        self.config.target().is_some()
    }
}
