//! # FP&A Analytics (L2: Engine)
//!
//! Metric normalisation, risk flagging, aggregation, scenario comparison,
//! and Monte Carlo distribution summaries over pre-computed FP&A outputs.
//!
//! This crate provides:
//! - Return-on-capital normalisation with a materiality guard
//! - Performance/risk classification against configurable thresholds
//! - Brand- and portfolio-level roll-ups with stable rankings
//! - Scenario-vs-base variance computation
//! - Single-pass descriptive statistics over simulated distributions
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │             fpa_analytics (L2)              │
//! ├─────────────────────────────────────────────┤
//! │  normalize/    - ROCE with materiality guard│
//! │  classify/     - RiskFlag + ops report      │
//! │  aggregate/    - roll-ups, top/bottom ranks │
//! │  variance/     - scenario vs base deltas    │
//! │  distribution/ - Welford stats, histogram   │
//! └─────────────────────────────────────────────┘
//!          ↓
//! ┌─────────────────────────────────────────────┐
//! │               fpa_core (L1)                 │
//! │  Records, MetricValue sentinel, ingestion   │
//! └─────────────────────────────────────────────┘
//! ```
//!
//! Every operation is a deterministic function of its explicit input
//! snapshot. The engine holds no cross-call state, performs no I/O, and is
//! trivially safe under concurrent queries against the same immutable data.
//!
//! ## Example
//!
//! ```
//! use fpa_analytics::{aggregate, classify, normalize, RiskFlag, Thresholds};
//! use fpa_core::types::ProductRecord;
//!
//! let raw = vec![
//!     ProductRecord::new("Bakery", "Sourdough", 12_000.0, 3_000.0, 20_000.0, 18.0),
//!     ProductRecord::new("Bakery", "Croissant", 8_000.0, 400.0, 15_000.0, 30.0),
//! ];
//!
//! let thresholds = Thresholds::default();
//! let records = normalize(&raw, &thresholds);
//!
//! assert_eq!(classify(&records[0], &thresholds), RiskFlag::Ok);
//! assert_eq!(classify(&records[1], &thresholds), RiskFlag::LowReturn);
//!
//! let summary = aggregate(&records, |r| r.brand == "Bakery", &thresholds);
//! assert_eq!(summary.total_revenue, 20_000.0);
//! assert_eq!(summary.flagged_count, 1);
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod aggregate;
pub mod classify;
pub mod config;
pub mod distribution;
pub mod normalize;
pub mod variance;

// Re-export commonly used items
pub use aggregate::{aggregate, bottom_1, top_n, AggregateSummary};
pub use classify::{classify, ops_risk_flags, FlaggedProduct, RiskFlag};
pub use config::{ConfigError, OpsReportFilter, Thresholds};
pub use distribution::{
    ebitda_histogram, ebitda_percentile_band, summarize, DistributionStats, HistogramBin,
};
pub use normalize::normalize;
pub use variance::{compare, scenario_slice, VarianceRecord};
