//! Immutable input records for a single analysis pass.
//!
//! All records are plain data handed over by an external loading
//! collaborator. The engine never mutates them in place; every derived view
//! is a fresh value recomputed on demand.

use serde::{Deserialize, Serialize};

use super::metric::MetricValue;

/// One row per (brand, product) combination in the base results.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ProductRecord {
    /// Owning brand.
    pub brand: String,
    /// Product name, unique within a brand.
    pub product: String,
    /// Annual revenue, non-negative.
    pub revenue: f64,
    /// Operating profit proxy; may be negative.
    pub ebitda: f64,
    /// Capital allocated to the product, non-negative.
    pub allocated_capex: f64,
    /// Months to recover the allocated capital, non-negative.
    pub payback_months: f64,
    /// Return on capital employed. Populated by the normaliser; undefined
    /// when the capital base is below the materiality floor.
    pub return_on_capital: MetricValue,
}

impl ProductRecord {
    /// Create a record with an unpopulated return-on-capital metric.
    pub fn new(
        brand: impl Into<String>,
        product: impl Into<String>,
        revenue: f64,
        ebitda: f64,
        allocated_capex: f64,
        payback_months: f64,
    ) -> Self {
        Self {
            brand: brand.into(),
            product: product.into(),
            revenue,
            ebitda,
            allocated_capex,
            payback_months,
            return_on_capital: MetricValue::Undefined,
        }
    }

    /// The (brand, product) join key.
    pub fn key(&self) -> (&str, &str) {
        (&self.brand, &self.product)
    }
}

/// One row per (brand, product, scenario) in the scenario projections.
///
/// Many scenario records reference one product record by (brand, product);
/// no referential integrity is assumed, unmatched keys simply yield empty
/// joins downstream.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ScenarioRecord {
    /// Owning brand.
    pub brand: String,
    /// Product name.
    pub product: String,
    /// Scenario name (e.g. a price or volume change).
    pub scenario: String,
    /// Projected EBITDA under the scenario.
    pub scenario_ebitda: f64,
    /// Projected return on capital under the scenario.
    pub scenario_return_on_capital: MetricValue,
    /// Projected payback period in months.
    pub scenario_payback: f64,
}

impl ScenarioRecord {
    /// The (brand, product) join key against base results.
    pub fn key(&self) -> (&str, &str) {
        (&self.brand, &self.product)
    }
}

/// One Monte Carlo trial outcome for a product.
///
/// A product has an order-irrelevant set of many samples, typically
/// thousands of trials drawn from an external stochastic model.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SimulationSample {
    /// Product the trial belongs to.
    pub product: String,
    /// Simulated EBITDA for this trial.
    pub ebitda: f64,
    /// Simulated return on capital for this trial.
    pub return_on_capital: MetricValue,
    /// Simulated payback period in months.
    pub payback: f64,
}
