//! Current conditions port
//!
//! The interface every weather provider exposes to the aggregation layer.

use async_trait::async_trait;
use domain::NormalizedConditions;
#[cfg(test)]
use mockall::automock;

use crate::error::ApplicationError;

/// Port for current-conditions providers
#[cfg_attr(test, automock)]
#[async_trait]
pub trait ConditionsPort: Send + Sync {
    /// Get current conditions for the configured location or station
    ///
    /// Returns `Ok(None)` when the provider has neither a location nor a
    /// station to query. That is not an error: the aggregation layer simply
    /// skips the provider. Transport failures are returned as errors;
    /// malformed payloads degrade to conditions with fewer fields.
    async fn get_conditions(&self) -> Result<Option<NormalizedConditions>, ApplicationError>;

    /// Human-readable provider name
    fn provider_name(&self) -> &'static str;

    /// Whether the provider has a location or station to query
    fn is_available(&self) -> bool;
}
