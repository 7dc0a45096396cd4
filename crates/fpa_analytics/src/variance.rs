//! Scenario-vs-base variance computation.
//!
//! Scenario projections are joined against base results on (brand, product).
//! Unmatched scenario rows are kept with null deltas rather than dropped —
//! whether to filter them is the caller's decision. Output order mirrors
//! the scenario input; sorting for display is a presentation concern.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use fpa_core::types::{ProductRecord, ScenarioRecord};

/// Per-(product, scenario) deltas against the base results.
///
/// Deltas are `None` when the scenario row has no matching base row, or —
/// for the ratio delta — when either side of the subtraction is undefined.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct VarianceRecord {
    /// Owning brand.
    pub brand: String,
    /// Product name.
    pub product: String,
    /// Scenario name.
    pub scenario: String,
    /// Scenario EBITDA minus base EBITDA.
    pub ebitda_delta: Option<f64>,
    /// Scenario ROCE minus base ROCE.
    pub return_on_capital_delta: Option<f64>,
    /// Scenario payback minus base payback, in months.
    pub payback_delta: Option<f64>,
}

/// Compute variance records for every scenario row.
///
/// Output cardinality equals the scenario input cardinality, unmatched
/// rows included. When several base rows share a (brand, product) key the
/// first one wins; later duplicates are ignored.
pub fn compare(scenarios: &[ScenarioRecord], base: &[ProductRecord]) -> Vec<VarianceRecord> {
    let mut by_key: HashMap<(&str, &str), &ProductRecord> = HashMap::with_capacity(base.len());
    for record in base {
        by_key.entry(record.key()).or_insert(record);
    }

    let mut unmatched = 0usize;
    let variances: Vec<VarianceRecord> = scenarios
        .iter()
        .map(|scenario| match by_key.get(&scenario.key()) {
            Some(base_record) => VarianceRecord {
                brand: scenario.brand.clone(),
                product: scenario.product.clone(),
                scenario: scenario.scenario.clone(),
                ebitda_delta: Some(scenario.scenario_ebitda - base_record.ebitda),
                return_on_capital_delta: scenario
                    .scenario_return_on_capital
                    .sub(base_record.return_on_capital)
                    .value(),
                payback_delta: Some(scenario.scenario_payback - base_record.payback_months),
            },
            None => {
                unmatched += 1;
                VarianceRecord {
                    brand: scenario.brand.clone(),
                    product: scenario.product.clone(),
                    scenario: scenario.scenario.clone(),
                    ebitda_delta: None,
                    return_on_capital_delta: None,
                    payback_delta: None,
                }
            }
        })
        .collect();

    if unmatched > 0 {
        warn!(unmatched, "scenario rows without a matching base record");
    }
    debug!(
        scenarios = scenarios.len(),
        base = base.len(),
        "compared scenario projections against base"
    );
    variances
}

/// Scenario rows for one scenario name within one brand, in input order.
///
/// An unknown scenario or brand yields an empty slice of results, never an
/// error — missing data for a selected filter is an empty view.
pub fn scenario_slice<'a>(
    records: &'a [ScenarioRecord],
    scenario: &str,
    brand: &str,
) -> Vec<&'a ScenarioRecord> {
    records
        .iter()
        .filter(|r| r.scenario == scenario && r.brand == brand)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use fpa_core::types::MetricValue;
    use proptest::prelude::*;

    fn base(brand: &str, product: &str, ebitda: f64, roce: MetricValue) -> ProductRecord {
        let mut r = ProductRecord::new(brand, product, 10_000.0, ebitda, 30_000.0, 20.0);
        r.return_on_capital = roce;
        r
    }

    fn scenario(brand: &str, product: &str, name: &str, ebitda: f64) -> ScenarioRecord {
        ScenarioRecord {
            brand: brand.to_string(),
            product: product.to_string(),
            scenario: name.to_string(),
            scenario_ebitda: ebitda,
            scenario_return_on_capital: MetricValue::Defined(0.15),
            scenario_payback: 18.0,
        }
    }

    #[test]
    fn test_matched_row_deltas() {
        let bases = vec![base("Bakery", "Sourdough", 3_000.0, MetricValue::Defined(0.10))];
        let scenarios = vec![scenario("Bakery", "Sourdough", "Price +5%", 3_400.0)];

        let out = compare(&scenarios, &bases);
        assert_eq!(out.len(), 1);
        assert_relative_eq!(out[0].ebitda_delta.unwrap(), 400.0, epsilon = 1e-9);
        assert_relative_eq!(
            out[0].return_on_capital_delta.unwrap(),
            0.05,
            epsilon = 1e-9
        );
        assert_relative_eq!(out[0].payback_delta.unwrap(), -2.0, epsilon = 1e-9);
    }

    #[test]
    fn test_unmatched_row_kept_with_null_deltas() {
        let bases = vec![base("Bakery", "Sourdough", 3_000.0, MetricValue::Defined(0.10))];
        let scenarios = vec![scenario("Forecourt", "Coffee", "Price +5%", 900.0)];

        let out = compare(&scenarios, &bases);
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].product, "Coffee");
        assert_eq!(out[0].ebitda_delta, None);
        assert_eq!(out[0].return_on_capital_delta, None);
        assert_eq!(out[0].payback_delta, None);
    }

    #[test]
    fn test_undefined_base_roce_yields_null_ratio_delta_only() {
        let bases = vec![base("Bakery", "Sourdough", 3_000.0, MetricValue::Undefined)];
        let scenarios = vec![scenario("Bakery", "Sourdough", "Price +5%", 3_400.0)];

        let out = compare(&scenarios, &bases);
        assert!(out[0].ebitda_delta.is_some());
        assert_eq!(out[0].return_on_capital_delta, None);
        assert!(out[0].payback_delta.is_some());
    }

    #[test]
    fn test_duplicate_base_key_first_wins() {
        let bases = vec![
            base("Bakery", "Sourdough", 3_000.0, MetricValue::Defined(0.10)),
            base("Bakery", "Sourdough", 9_999.0, MetricValue::Defined(0.90)),
        ];
        let scenarios = vec![scenario("Bakery", "Sourdough", "Price +5%", 3_400.0)];
        let out = compare(&scenarios, &bases);
        assert_relative_eq!(out[0].ebitda_delta.unwrap(), 400.0, epsilon = 1e-9);
    }

    #[test]
    fn test_output_mirrors_scenario_order() {
        let bases = vec![base("Bakery", "Sourdough", 3_000.0, MetricValue::Defined(0.10))];
        let scenarios = vec![
            scenario("Bakery", "Sourdough", "Volume -10%", 2_700.0),
            scenario("Bakery", "Sourdough", "Price +5%", 3_400.0),
        ];
        let out = compare(&scenarios, &bases);
        assert_eq!(out[0].scenario, "Volume -10%");
        assert_eq!(out[1].scenario, "Price +5%");
    }

    #[test]
    fn test_scenario_slice_filters_by_name_and_brand() {
        let records = vec![
            scenario("Bakery", "Sourdough", "Price +5%", 3_400.0),
            scenario("Bakery", "Croissant", "Price +5%", 1_200.0),
            scenario("Bakery", "Sourdough", "Volume -10%", 2_700.0),
            scenario("Forecourt", "Coffee", "Price +5%", 900.0),
        ];
        let slice = scenario_slice(&records, "Price +5%", "Bakery");
        assert_eq!(slice.len(), 2);
        assert_eq!(slice[0].product, "Sourdough");
        assert_eq!(slice[1].product, "Croissant");

        assert!(scenario_slice(&records, "Price +5%", "Nowhere").is_empty());
        assert!(scenario_slice(&records, "No such scenario", "Bakery").is_empty());
    }

    proptest! {
        #[test]
        fn test_cardinality_is_preserved(n in 0usize..40) {
            let scenarios: Vec<ScenarioRecord> = (0..n)
                .map(|i| scenario("Bakery", &format!("P{i}"), "S", i as f64))
                .collect();
            // Base covers only every other product.
            let bases: Vec<ProductRecord> = (0..n)
                .step_by(2)
                .map(|i| base("Bakery", &format!("P{i}"), 100.0, MetricValue::Defined(0.1)))
                .collect();

            let out = compare(&scenarios, &bases);
            prop_assert_eq!(out.len(), scenarios.len());
            for (v, s) in out.iter().zip(&scenarios) {
                prop_assert_eq!(&v.product, &s.product);
            }
        }
    }
}
