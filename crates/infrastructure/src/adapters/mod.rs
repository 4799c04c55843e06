//! Infrastructure adapters
//!
//! Adapters connect application ports to concrete implementations.

mod env_config_store;
mod openweathermap_adapter;
mod reqwest_http_client;

pub use env_config_store::EnvConfigStore;
pub use openweathermap_adapter::{OpenWeatherMapAdapter, PROVIDER_NAME};
pub use reqwest_http_client::{HttpClientConfig, ReqwestHttpClient};
