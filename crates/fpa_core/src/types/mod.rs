//! Core value and record types.
//!
//! This module provides:
//! - `metric`: the `MetricValue` tagged sentinel for ratios that may be undefined
//! - `records`: immutable input record types for a single analysis pass
//! - `error`: structured error types for the ingestion boundary
//!
//! # Re-exports
//!
//! For convenience, commonly used types are re-exported at this module level:
//! - [`MetricValue`] from `metric`
//! - [`ProductRecord`], [`ScenarioRecord`], [`SimulationSample`] from `records`
//! - [`SchemaError`] from `error`

pub mod error;
pub mod metric;
pub mod records;

// Re-export commonly used types at module level
pub use error::SchemaError;
pub use metric::MetricValue;
pub use records::{ProductRecord, ScenarioRecord, SimulationSample};
