//! Performance/risk classification.
//!
//! Each record receives exactly one flag, evaluated in fixed priority
//! order: low return wins over slow payback when both thresholds are
//! crossed. An undefined return-on-capital is skipped on the low-return
//! axis only — the record is still evaluated for slow payback.

use serde::{Deserialize, Serialize};
use tracing::debug;

use fpa_core::types::ProductRecord;

use crate::config::{OpsReportFilter, Thresholds};

/// Performance/risk category attached to a product at classification time.
///
/// Derived, never stored: recomputed on demand from the record and the
/// active thresholds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RiskFlag {
    /// Return on capital below the low-return threshold.
    LowReturn,
    /// Payback period beyond the slow-payback threshold.
    SlowPayback,
    /// Neither threshold crossed.
    Ok,
}

impl RiskFlag {
    /// Get the name of this flag.
    pub fn name(&self) -> &'static str {
        match self {
            RiskFlag::LowReturn => "LowReturn",
            RiskFlag::SlowPayback => "SlowPayback",
            RiskFlag::Ok => "Ok",
        }
    }

    /// Whether the flag marks a problem.
    pub fn is_flagged(&self) -> bool {
        !matches!(self, RiskFlag::Ok)
    }
}

/// Classify one record against the thresholds.
///
/// Total and exclusive: every record gets exactly one of the three flags.
pub fn classify(record: &ProductRecord, thresholds: &Thresholds) -> RiskFlag {
    if let Some(roce) = record.return_on_capital.value() {
        if roce < thresholds.low_return_roce {
            return RiskFlag::LowReturn;
        }
    }
    if record.payback_months > thresholds.slow_payback_months {
        return RiskFlag::SlowPayback;
    }
    RiskFlag::Ok
}

/// A product paired with its flag, as presented in the risk report.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FlaggedProduct {
    /// The flagged record.
    pub record: ProductRecord,
    /// Why it was flagged.
    pub flag: RiskFlag,
}

/// Build the operational risk flags report.
///
/// Returns flagged records only, in input order, after applying the
/// reporting-scope revenue floor. A record that crosses a threshold but
/// falls under the floor is low-volume noise and is left out.
pub fn ops_risk_flags(
    records: &[ProductRecord],
    thresholds: &Thresholds,
    filter: &OpsReportFilter,
) -> Vec<FlaggedProduct> {
    let flagged: Vec<FlaggedProduct> = records
        .iter()
        .filter(|record| filter.admits(record))
        .filter_map(|record| {
            let flag = classify(record, thresholds);
            flag.is_flagged().then(|| FlaggedProduct {
                record: record.clone(),
                flag,
            })
        })
        .collect();
    debug!(
        records = records.len(),
        flagged = flagged.len(),
        "built operational risk flags report"
    );
    flagged
}
