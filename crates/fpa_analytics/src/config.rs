//! Engine threshold configuration.
//!
//! All classification cut-offs live here as one source of truth. The source
//! dashboards encoded the same rules twice with inconsistent units (a 0.10
//! fraction in one variant, a percentage-scaled 10 in the other); the engine
//! is canonical on fractions, and percentage scaling is a presentation
//! concern (`MetricValue::as_percent`).

use serde::{Deserialize, Serialize};
use thiserror::Error;

use fpa_core::types::ProductRecord;

/// Configuration error types.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    /// A threshold is NaN or infinite.
    #[error("threshold `{field}` must be finite, got {value}")]
    NonFinite {
        /// Name of the offending field.
        field: &'static str,
        /// The rejected value.
        value: f64,
    },

    /// A threshold that must be non-negative is negative.
    #[error("threshold `{field}` must be non-negative, got {value}")]
    Negative {
        /// Name of the offending field.
        field: &'static str,
        /// The rejected value.
        value: f64,
    },
}

/// Classification and normalisation thresholds.
///
/// Deserialisable so an embedding application can load overrides from its
/// own TOML/JSON configuration; absent fields keep their defaults.
///
/// # Examples
/// ```
/// use fpa_analytics::Thresholds;
///
/// let t: Thresholds = serde_json::from_str(r#"{ "low_return_roce": 0.08 }"#).unwrap();
/// assert_eq!(t.low_return_roce, 0.08);
/// assert_eq!(t.slow_payback_months, 24.0);
/// t.validate().unwrap();
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Thresholds {
    /// Return-on-capital below this fraction flags `LowReturn`.
    pub low_return_roce: f64,
    /// Payback period above this many months flags `SlowPayback`.
    pub slow_payback_months: f64,
    /// Capital bases at or below this amount yield an undefined ratio
    /// instead of a misleadingly extreme one.
    pub min_capital_base: f64,
}

impl Default for Thresholds {
    fn default() -> Self {
        Self {
            low_return_roce: 0.10,
            slow_payback_months: 24.0,
            min_capital_base: 10.0,
        }
    }
}

impl Thresholds {
    /// Check that every threshold is finite and non-negative.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let fields = [
            ("low_return_roce", self.low_return_roce),
            ("slow_payback_months", self.slow_payback_months),
            ("min_capital_base", self.min_capital_base),
        ];
        for (field, value) in fields {
            if !value.is_finite() {
                return Err(ConfigError::NonFinite { field, value });
            }
            if value < 0.0 {
                return Err(ConfigError::Negative { field, value });
            }
        }
        Ok(())
    }
}

/// Reporting-scope filter for the operational risk flags report.
///
/// The revenue floor excludes low-volume noise from the flags table. It is
/// a reporting parameter, not an engine invariant: classification itself
/// never consults it.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OpsReportFilter {
    /// Records with revenue at or below this floor are left out of the report.
    pub revenue_floor: f64,
}

impl Default for OpsReportFilter {
    fn default() -> Self {
        Self {
            revenue_floor: 5_000.0,
        }
    }
}

impl OpsReportFilter {
    /// Whether a record is material enough for the report.
    pub fn admits(&self, record: &ProductRecord) -> bool {
        record.revenue > self.revenue_floor
    }
}
