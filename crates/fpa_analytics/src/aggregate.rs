//! Brand- and portfolio-level roll-ups and rankings.

use serde::{Deserialize, Serialize};
use tracing::debug;

use fpa_core::types::{MetricValue, ProductRecord};

use crate::classify::classify;
use crate::config::Thresholds;

/// Roll-up of a filtered record scope.
///
/// Scoped to one query and recomputed per call — summaries are never cached
/// across different filter scopes.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct AggregateSummary {
    /// Sum of revenue over the scope.
    pub total_revenue: f64,
    /// Sum of EBITDA over the scope.
    pub total_ebitda: f64,
    /// Mean return on capital, excluding undefined ratios. Undefined when
    /// the scope holds no defined ratio at all.
    pub mean_return_on_capital: MetricValue,
    /// Number of records whose flag is not `Ok`.
    pub flagged_count: usize,
}

/// Aggregate every record admitted by the scope predicate.
///
/// An empty scope yields zero totals and an undefined mean, never an error.
pub fn aggregate(
    records: &[ProductRecord],
    scope: impl Fn(&ProductRecord) -> bool,
    thresholds: &Thresholds,
) -> AggregateSummary {
    let mut total_revenue = 0.0;
    let mut total_ebitda = 0.0;
    let mut roce_sum = 0.0;
    let mut roce_count = 0usize;
    let mut flagged_count = 0usize;
    let mut scoped = 0usize;

    for record in records.iter().filter(|r| scope(r)) {
        scoped += 1;
        total_revenue += record.revenue;
        total_ebitda += record.ebitda;
        if let Some(roce) = record.return_on_capital.value() {
            roce_sum += roce;
            roce_count += 1;
        }
        if classify(record, thresholds).is_flagged() {
            flagged_count += 1;
        }
    }

    debug!(scoped, flagged = flagged_count, "aggregated record scope");

    let mean_return_on_capital = if roce_count > 0 {
        MetricValue::Defined(roce_sum / roce_count as f64)
    } else {
        MetricValue::Undefined
    };

    AggregateSummary {
        total_revenue,
        total_ebitda,
        mean_return_on_capital,
        flagged_count,
    }
}

/// Top `n` records by a numeric key, best first.
///
/// Records with an undefined key are excluded from the ranking. Ties keep
/// original input order (stable sort), so repeated runs over the same
/// snapshot return identical results.
pub fn top_n<'a>(
    records: &'a [ProductRecord],
    key: impl Fn(&ProductRecord) -> MetricValue,
    n: usize,
) -> Vec<&'a ProductRecord> {
    let mut ranked: Vec<(&ProductRecord, f64)> = records
        .iter()
        .filter_map(|record| key(record).value().map(|k| (record, k)))
        .collect();
    ranked.sort_by(|a, b| b.1.total_cmp(&a.1));
    ranked.truncate(n);
    ranked.into_iter().map(|(record, _)| record).collect()
}

/// The single worst record by a numeric key.
///
/// `None` when no record carries a defined key. The first of several tied
/// records wins, mirroring the stable ordering of [`top_n`].
pub fn bottom_1<'a>(
    records: &'a [ProductRecord],
    key: impl Fn(&ProductRecord) -> MetricValue,
) -> Option<&'a ProductRecord> {
    let mut worst: Option<(&ProductRecord, f64)> = None;
    for record in records {
        if let Some(k) = key(record).value() {
            let beats = match worst {
                Some((_, current)) => k < current,
                None => true,
            };
            if beats {
                worst = Some((record, k));
            }
        }
    }
    worst.map(|(record, _)| record)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn record(product: &str, revenue: f64, ebitda: f64, roce: MetricValue) -> ProductRecord {
        let mut r = ProductRecord::new("Bakery", product, revenue, ebitda, 30_000.0, 12.0);
        r.return_on_capital = roce;
        r
    }

    fn roce_key(r: &ProductRecord) -> MetricValue {
        r.return_on_capital
    }

    #[test]
    fn test_aggregate_sums_and_mean() {
        let records = vec![
            record("A", 10_000.0, 2_000.0, MetricValue::Defined(0.20)),
            record("B", 6_000.0, -500.0, MetricValue::Defined(0.10)),
            record("C", 4_000.0, 800.0, MetricValue::Undefined),
        ];
        let summary = aggregate(&records, |_| true, &Thresholds::default());
        assert_relative_eq!(summary.total_revenue, 20_000.0, epsilon = 1e-9);
        assert_relative_eq!(summary.total_ebitda, 2_300.0, epsilon = 1e-9);
        // Undefined ratios are excluded from the mean, not treated as zero.
        assert_relative_eq!(
            summary.mean_return_on_capital.value().unwrap(),
            0.15,
            epsilon = 1e-9
        );
    }

    #[test]
    fn test_aggregate_counts_flagged_records() {
        let records = vec![
            record("A", 10_000.0, 2_000.0, MetricValue::Defined(0.02)),
            record("B", 6_000.0, 500.0, MetricValue::Defined(0.30)),
        ];
        let summary = aggregate(&records, |_| true, &Thresholds::default());
        assert_eq!(summary.flagged_count, 1);
    }

    #[test]
    fn test_aggregate_respects_scope_predicate() {
        let mut other = record("X", 99_000.0, 9_000.0, MetricValue::Defined(0.5));
        other.brand = "Forecourt".to_string();
        let records = vec![
            record("A", 10_000.0, 2_000.0, MetricValue::Defined(0.20)),
            other,
        ];
        let summary = aggregate(&records, |r| r.brand == "Bakery", &Thresholds::default());
        assert_relative_eq!(summary.total_revenue, 10_000.0, epsilon = 1e-9);
    }

    #[test]
    fn test_aggregate_empty_scope_is_well_defined() {
        let summary = aggregate(&[], |_| true, &Thresholds::default());
        assert_eq!(summary.total_revenue, 0.0);
        assert_eq!(summary.total_ebitda, 0.0);
        assert_eq!(summary.mean_return_on_capital, MetricValue::Undefined);
        assert_eq!(summary.flagged_count, 0);
    }

    #[test]
    fn test_all_undefined_mean_is_undefined() {
        let records = vec![record("A", 1_000.0, 100.0, MetricValue::Undefined)];
        let summary = aggregate(&records, |_| true, &Thresholds::default());
        assert_eq!(summary.mean_return_on_capital, MetricValue::Undefined);
    }

    #[test]
    fn test_top_n_orders_best_first() {
        let records = vec![
            record("A", 0.0, 0.0, MetricValue::Defined(0.10)),
            record("B", 0.0, 0.0, MetricValue::Defined(0.30)),
            record("C", 0.0, 0.0, MetricValue::Undefined),
            record("D", 0.0, 0.0, MetricValue::Defined(0.20)),
        ];
        let top = top_n(&records, roce_key, 2);
        assert_eq!(top.len(), 2);
        assert_eq!(top[0].product, "B");
        assert_eq!(top[1].product, "D");
    }

    #[test]
    fn test_top_n_ties_keep_input_order() {
        let records = vec![
            record("A", 0.0, 0.0, MetricValue::Defined(0.20)),
            record("B", 0.0, 0.0, MetricValue::Defined(0.20)),
            record("C", 0.0, 0.0, MetricValue::Defined(0.20)),
        ];
        let top = top_n(&records, roce_key, 3);
        let names: Vec<&str> = top.iter().map(|r| r.product.as_str()).collect();
        assert_eq!(names, vec!["A", "B", "C"]);
    }

    #[test]
    fn test_top_n_larger_than_input() {
        let records = vec![record("A", 0.0, 0.0, MetricValue::Defined(0.1))];
        assert_eq!(top_n(&records, roce_key, 10).len(), 1);
    }

    #[test]
    fn test_bottom_1_picks_worst_defined() {
        let records = vec![
            record("A", 0.0, 0.0, MetricValue::Defined(0.10)),
            record("B", 0.0, 0.0, MetricValue::Undefined),
            record("C", 0.0, 0.0, MetricValue::Defined(-0.05)),
        ];
        assert_eq!(bottom_1(&records, roce_key).unwrap().product, "C");
    }

    #[test]
    fn test_bottom_1_tie_keeps_first() {
        let records = vec![
            record("A", 0.0, 0.0, MetricValue::Defined(0.10)),
            record("B", 0.0, 0.0, MetricValue::Defined(0.10)),
        ];
        assert_eq!(bottom_1(&records, roce_key).unwrap().product, "A");
    }

    #[test]
    fn test_bottom_1_of_all_undefined_is_none() {
        let records = vec![record("A", 0.0, 0.0, MetricValue::Undefined)];
        assert!(bottom_1(&records, roce_key).is_none());
    }
}
