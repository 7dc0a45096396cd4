//! Return-on-capital normalisation.

use fpa_core::types::{MetricValue, ProductRecord};
use tracing::debug;

use crate::config::Thresholds;

/// Populate `return_on_capital` on every record, non-destructively.
///
/// ROCE is EBITDA over allocated capital. Capital bases at or below
/// `thresholds.min_capital_base` yield [`MetricValue::Undefined`] — a ratio
/// over a negligible denominator is not a comparable number. Negative
/// EBITDA produces a negative ratio and passes through unclamped.
///
/// Any ratio already present on the input is recomputed; the engine, not
/// the upstream export, is authoritative for the guard.
pub fn normalize(records: &[ProductRecord], thresholds: &Thresholds) -> Vec<ProductRecord> {
    debug!(records = records.len(), "normalising product snapshot");
    records
        .iter()
        .map(|record| {
            let return_on_capital = if record.allocated_capex > thresholds.min_capital_base {
                MetricValue::Defined(record.ebitda / record.allocated_capex)
            } else {
                MetricValue::Undefined
            };
            ProductRecord {
                return_on_capital,
                ..record.clone()
            }
        })
        .collect()
}
