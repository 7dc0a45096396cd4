//! Tabular ingestion boundary.
//!
//! The engine makes no assumption about where its five input datasets come
//! from (workbook export, database query, message payload) — only about
//! column presence and cell types. This module converts the loose row
//! representation handed over by a data-loading collaborator
//! (`serde_json::Value` objects, one per row) into typed records, failing
//! fast with a [`SchemaError`] naming the offending column and row.
//!
//! Missing or null `ROCE` cells are not an error: the ratio is recomputed by
//! the normaliser, and a null cell maps to [`MetricValue::Undefined`].

use serde_json::{Map, Value};

use crate::types::{MetricValue, ProductRecord, ScenarioRecord, SchemaError, SimulationSample};

/// Canonical column names of the upstream workbook export.
pub mod columns {
    /// Brand name column.
    pub const BRAND: &str = "Brand";
    /// Product name column.
    pub const PRODUCT: &str = "Product";
    /// Revenue column.
    pub const REVENUE: &str = "Revenue";
    /// EBITDA column.
    pub const EBITDA: &str = "EBITDA";
    /// Allocated capital column.
    pub const CAPEX: &str = "CapEx";
    /// Payback period column, in months.
    pub const PAYBACK: &str = "Payback";
    /// Return-on-capital column (fraction, optional).
    pub const ROCE: &str = "ROCE";
    /// Scenario name column.
    pub const SCENARIO: &str = "Scenario";
    /// Projected EBITDA column in the scenario sheet.
    pub const SCENARIO_EBITDA: &str = "Scenario EBITDA";
    /// Projected return-on-capital column in the scenario sheet.
    pub const SCENARIO_ROCE: &str = "Scenario ROCE";
    /// Projected payback column in the scenario sheet.
    pub const SCENARIO_PAYBACK: &str = "Scenario Payback";
}

fn value_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

fn as_object(row: &Value, index: usize) -> Result<&Map<String, Value>, SchemaError> {
    row.as_object()
        .ok_or(SchemaError::MalformedRow { row: index })
}

fn get_str(
    row: &Map<String, Value>,
    column: &'static str,
    index: usize,
) -> Result<String, SchemaError> {
    let cell = row
        .get(column)
        .ok_or(SchemaError::MissingColumn { column, row: index })?;
    cell.as_str()
        .map(str::to_owned)
        .ok_or_else(|| SchemaError::TypeMismatch {
            column,
            row: index,
            expected: "string",
            found: value_type_name(cell),
        })
}

fn get_f64(
    row: &Map<String, Value>,
    column: &'static str,
    index: usize,
) -> Result<f64, SchemaError> {
    let cell = row
        .get(column)
        .ok_or(SchemaError::MissingColumn { column, row: index })?;
    cell.as_f64().ok_or_else(|| SchemaError::TypeMismatch {
        column,
        row: index,
        expected: "number",
        found: value_type_name(cell),
    })
}

/// Optional numeric cell: absent or null maps to `Undefined`, any other
/// non-numeric value is still a type mismatch.
fn get_metric(
    row: &Map<String, Value>,
    column: &'static str,
    index: usize,
) -> Result<MetricValue, SchemaError> {
    match row.get(column) {
        None | Some(Value::Null) => Ok(MetricValue::Undefined),
        Some(cell) => cell
            .as_f64()
            .map(MetricValue::Defined)
            .ok_or_else(|| SchemaError::TypeMismatch {
                column,
                row: index,
                expected: "number or null",
                found: value_type_name(cell),
            }),
    }
}

/// Parse the base-results dataset into product records.
///
/// Fails fast on the first structural problem; the error names the column
/// and zero-based row index.
pub fn parse_products(rows: &[Value]) -> Result<Vec<ProductRecord>, SchemaError> {
    let mut records = Vec::with_capacity(rows.len());
    for (index, raw) in rows.iter().enumerate() {
        let row = as_object(raw, index)?;
        records.push(ProductRecord {
            brand: get_str(row, columns::BRAND, index)?,
            product: get_str(row, columns::PRODUCT, index)?,
            revenue: get_f64(row, columns::REVENUE, index)?,
            ebitda: get_f64(row, columns::EBITDA, index)?,
            allocated_capex: get_f64(row, columns::CAPEX, index)?,
            payback_months: get_f64(row, columns::PAYBACK, index)?,
            return_on_capital: get_metric(row, columns::ROCE, index)?,
        });
    }
    Ok(records)
}

/// Parse the scenario-projections dataset into scenario records.
pub fn parse_scenarios(rows: &[Value]) -> Result<Vec<ScenarioRecord>, SchemaError> {
    let mut records = Vec::with_capacity(rows.len());
    for (index, raw) in rows.iter().enumerate() {
        let row = as_object(raw, index)?;
        records.push(ScenarioRecord {
            brand: get_str(row, columns::BRAND, index)?,
            product: get_str(row, columns::PRODUCT, index)?,
            scenario: get_str(row, columns::SCENARIO, index)?,
            scenario_ebitda: get_f64(row, columns::SCENARIO_EBITDA, index)?,
            scenario_return_on_capital: get_metric(row, columns::SCENARIO_ROCE, index)?,
            scenario_payback: get_f64(row, columns::SCENARIO_PAYBACK, index)?,
        });
    }
    Ok(records)
}

/// Parse the Monte Carlo dataset into simulation samples.
pub fn parse_samples(rows: &[Value]) -> Result<Vec<SimulationSample>, SchemaError> {
    let mut samples = Vec::with_capacity(rows.len());
    for (index, raw) in rows.iter().enumerate() {
        let row = as_object(raw, index)?;
        samples.push(SimulationSample {
            product: get_str(row, columns::PRODUCT, index)?,
            ebitda: get_f64(row, columns::EBITDA, index)?,
            return_on_capital: get_metric(row, columns::ROCE, index)?,
            payback: get_f64(row, columns::PAYBACK, index)?,
        });
    }
    Ok(samples)
}
