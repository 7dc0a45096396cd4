//! # fpa_core: Foundation Types for the FP&A Analytics Engine
//!
//! ## Layer 1 (Foundation) Role
//!
//! fpa_core serves as the bottom layer of the two-layer architecture, providing:
//! - The tagged metric sentinel `MetricValue` (`types::metric`)
//! - Input record types: `ProductRecord`, `ScenarioRecord`, `SimulationSample`
//!   (`types::records`)
//! - Structured error types: `SchemaError` (`types::error`)
//! - The tabular ingestion boundary that converts loosely-typed rows into
//!   typed records (`tabular`)
//!
//! ## Zero Dependency Principle
//!
//! Layer 1 has no dependencies on other fpa_* crates, with minimal external
//! dependencies:
//! - serde / serde_json: record serialisation and the loose-row representation
//!   handed over by external data loaders
//! - thiserror: structured schema errors
//!
//! ## Usage Examples
//!
//! ```rust
//! use fpa_core::types::{MetricValue, ProductRecord};
//!
//! let record = ProductRecord::new("Bakery", "Sourdough", 12_000.0, 3_000.0, 20_000.0, 18.0);
//! assert_eq!(record.return_on_capital, MetricValue::Undefined);
//!
//! // Sentinel arithmetic propagates the undefined state instead of NaN.
//! let delta = MetricValue::Defined(0.15).sub(MetricValue::Undefined);
//! assert_eq!(delta, MetricValue::Undefined);
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod tabular;
pub mod types;
