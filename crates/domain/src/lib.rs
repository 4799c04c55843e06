//! Domain layer for the conditions adapter
//!
//! Contains the shared conditions schema and the value objects used to
//! describe where conditions are observed. This layer performs no I/O.

pub mod entities;
pub mod errors;
pub mod value_objects;

pub use entities::*;
pub use errors::DomainError;
pub use value_objects::*;
