//! Infrastructure layer - Adapters for external systems
//!
//! Implements ports defined in the application layer: the OpenWeatherMap
//! conditions adapter, the reqwest HTTP transport, the in-memory cache and
//! the environment-backed settings store. Also owns layered configuration
//! loading and tracing setup.

pub mod adapters;
pub mod cache;
pub mod config;
pub mod telemetry;

pub use adapters::*;
pub use cache::{MokaCache, MokaCacheConfig, generate_cache_key};
pub use config::{AppConfig, OpenWeatherMapAppConfig};
pub use telemetry::{TelemetryConfig, TelemetryError, init_tracing};
