//! Tagged metric values with an explicit undefined state.
//!
//! Profitability ratios over a negligible capital base are not comparable
//! numbers. Rather than letting float NaN propagate implicitly through
//! downstream aggregation, the undefined state is modelled as an explicit
//! variant so that exclusion logic stays visible and testable.

use serde::{Deserialize, Serialize};

/// A derived financial metric that may be undefined.
///
/// # Variants
/// - `Defined`: a computed, comparable value
/// - `Undefined`: no meaningful value exists (e.g. a ratio over a
///   near-zero denominator)
///
/// Arithmetic helpers propagate `Undefined`: any operation touching an
/// undefined operand yields `Undefined`, never a number.
///
/// # Examples
/// ```
/// use fpa_core::types::MetricValue;
///
/// let roce = MetricValue::Defined(0.12);
/// assert_eq!(roce.value(), Some(0.12));
/// assert_eq!(MetricValue::Undefined.value(), None);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub enum MetricValue {
    /// A computed, comparable value.
    Defined(f64),
    /// No meaningful value exists for this metric.
    Undefined,
}

impl Default for MetricValue {
    fn default() -> Self {
        MetricValue::Undefined
    }
}

impl From<Option<f64>> for MetricValue {
    fn from(value: Option<f64>) -> Self {
        match value {
            Some(v) => MetricValue::Defined(v),
            None => MetricValue::Undefined,
        }
    }
}

impl MetricValue {
    /// Get the inner value, or `None` when undefined.
    pub fn value(self) -> Option<f64> {
        match self {
            MetricValue::Defined(v) => Some(v),
            MetricValue::Undefined => None,
        }
    }

    /// Check whether the metric carries a value.
    pub fn is_defined(self) -> bool {
        matches!(self, MetricValue::Defined(_))
    }

    /// Apply a function to the inner value, preserving the undefined state.
    pub fn map(self, f: impl FnOnce(f64) -> f64) -> Self {
        match self {
            MetricValue::Defined(v) => MetricValue::Defined(f(v)),
            MetricValue::Undefined => MetricValue::Undefined,
        }
    }

    /// Subtract another metric, propagating `Undefined` from either side.
    pub fn sub(self, other: Self) -> Self {
        match (self, other) {
            (MetricValue::Defined(a), MetricValue::Defined(b)) => MetricValue::Defined(a - b),
            _ => MetricValue::Undefined,
        }
    }

    /// Percentage-scaled view of the value (0.10 becomes 10.0).
    ///
    /// The engine's canonical unit for ratios is a fraction; scaling to a
    /// percentage belongs at the presentation boundary only.
    pub fn as_percent(self) -> Option<f64> {
        self.value().map(|v| v * 100.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_value_and_is_defined() {
        assert_eq!(MetricValue::Defined(0.25).value(), Some(0.25));
        assert_eq!(MetricValue::Undefined.value(), None);
        assert!(MetricValue::Defined(-0.1).is_defined());
        assert!(!MetricValue::Undefined.is_defined());
    }

    #[test]
    fn test_default_is_undefined() {
        assert_eq!(MetricValue::default(), MetricValue::Undefined);
    }

    #[test]
    fn test_from_option() {
        assert_eq!(MetricValue::from(Some(1.5)), MetricValue::Defined(1.5));
        assert_eq!(MetricValue::from(None), MetricValue::Undefined);
    }

    #[test]
    fn test_map_preserves_undefined() {
        let doubled = MetricValue::Defined(0.2).map(|v| v * 2.0);
        assert_eq!(doubled, MetricValue::Defined(0.4));
        assert_eq!(
            MetricValue::Undefined.map(|v| v * 2.0),
            MetricValue::Undefined
        );
    }

    #[test]
    fn test_sub_propagates_undefined() {
        let a = MetricValue::Defined(0.30);
        let b = MetricValue::Defined(0.10);
        assert_eq!(a.sub(b), MetricValue::Defined(0.2));
        assert_eq!(a.sub(MetricValue::Undefined), MetricValue::Undefined);
        assert_eq!(MetricValue::Undefined.sub(b), MetricValue::Undefined);
    }

    #[test]
    fn test_as_percent() {
        assert_eq!(MetricValue::Defined(0.10).as_percent(), Some(10.0));
        assert_eq!(MetricValue::Undefined.as_percent(), None);
    }

    proptest! {
        #[test]
        fn test_sub_of_defined_is_defined(a in -1e6f64..1e6, b in -1e6f64..1e6) {
            let d = MetricValue::Defined(a).sub(MetricValue::Defined(b));
            prop_assert_eq!(d.value(), Some(a - b));
        }

        #[test]
        fn test_undefined_absorbs_everything(a in -1e6f64..1e6) {
            prop_assert_eq!(
                MetricValue::Defined(a).sub(MetricValue::Undefined),
                MetricValue::Undefined
            );
            prop_assert_eq!(
                MetricValue::Undefined.map(|v| v + a),
                MetricValue::Undefined
            );
        }
    }
}
