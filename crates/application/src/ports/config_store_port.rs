//! Port for provider settings
//!
//! Settings such as API keys or station ids can be supplied explicitly or
//! looked up from external settings storage (environment, config files,
//! a host application's options table). This port abstracts that storage.

use async_trait::async_trait;
#[cfg(test)]
use mockall::automock;

use crate::error::ApplicationError;

/// Port for settings lookups
///
/// A setting that is not present is `Ok(None)`; errors are reserved for a
/// store that cannot be read at all.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait ConfigStorePort: Send + Sync {
    /// Retrieve a setting by its key (e.g., "openweathermap/api_key")
    async fn get_setting(&self, key: &str) -> Result<Option<String>, ApplicationError>;
}

/// Extension trait for settings lookups
#[async_trait]
pub trait ConfigStoreExt: ConfigStorePort {
    /// Retrieve a setting, treating blank values as absent
    async fn get_non_empty(&self, key: &str) -> Result<Option<String>, ApplicationError> {
        Ok(self
            .get_setting(key)
            .await?
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty()))
    }
}

// Blanket implementation for all types implementing ConfigStorePort
impl<S: ConfigStorePort + ?Sized> ConfigStoreExt for S {}
