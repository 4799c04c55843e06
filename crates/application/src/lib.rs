//! Application layer - Ports and errors
//!
//! Defines the interfaces the conditions adapter depends on (cache, settings,
//! HTTP transport) and the port it exposes to the aggregation layer.

pub mod error;
pub mod ports;

pub use error::ApplicationError;
pub use ports::*;
