//! Domain model for the DeFi yield optimizer.
//!
//! Contains the yield opportunity catalog types, allocation and strategy
//! value objects, the error taxonomy, numeric utilities and the
//! constant-product impermanent loss engine.

/// Catalog entities (protocols, opportunities, history, projections).
pub mod entities;
/// Enumerations shared across crates.
pub mod enums;
/// Error types.
pub mod error;
/// Numeric utilities.
pub mod math;
/// Derived metrics (impermanent loss, yield statistics).
pub mod metrics;
/// Immutable value objects produced by the engines.
pub mod value_objects;

pub use error::{DomainError, DomainResult};
