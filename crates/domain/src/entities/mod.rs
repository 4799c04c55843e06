//! Domain entities - Objects with identity and lifecycle

mod conditions;

pub use conditions::{NormalizedConditions, Wind};
