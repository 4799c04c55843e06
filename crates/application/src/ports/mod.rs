//! Port definitions for application layer
//!
//! Ports are interfaces that define how the application interacts with
//! external systems. Adapters in the infrastructure layer implement these ports.

mod cache_port;
mod conditions_port;
mod config_store_port;
mod http_client_port;

#[cfg(test)]
pub use cache_port::MockCachePort;
pub use cache_port::{CachePort, CachePortExt, CacheStats};
#[cfg(test)]
pub use conditions_port::MockConditionsPort;
pub use conditions_port::ConditionsPort;
#[cfg(test)]
pub use config_store_port::MockConfigStorePort;
pub use config_store_port::{ConfigStoreExt, ConfigStorePort};
#[cfg(test)]
pub use http_client_port::MockHttpClientPort;
pub use http_client_port::{HttpClientPort, HttpRequest, HttpResponse};
