//! Descriptive statistics over Monte Carlo sample sets.
//!
//! A product's simulated distribution typically holds thousands of trials,
//! so the summary runs as a single streaming pass (Welford accumulation for
//! mean and variance, running extrema for the rest). Only the percentile
//! band materialises a sorted copy.

use serde::{Deserialize, Serialize};
use tracing::debug;

use fpa_core::types::{MetricValue, SimulationSample};

/// Summary statistics of one simulated distribution.
///
/// Every field degrades to [`MetricValue::Undefined`] instead of erroring:
/// the mean and extrema over an empty set, and the sample standard
/// deviation below two trials.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct DistributionStats {
    /// Mean trial EBITDA.
    pub mean_ebitda: MetricValue,
    /// Sample (n−1) standard deviation of trial EBITDA.
    pub stddev_ebitda: MetricValue,
    /// Smallest defined trial return on capital.
    pub min_return_on_capital: MetricValue,
    /// Largest defined trial return on capital.
    pub max_return_on_capital: MetricValue,
    /// Shortest trial payback.
    pub min_payback: MetricValue,
    /// Longest trial payback.
    pub max_payback: MetricValue,
}

/// Summarise a sample set in one pass.
pub fn summarize(samples: &[SimulationSample]) -> DistributionStats {
    let mut count = 0usize;
    let mut mean = 0.0;
    let mut m2 = 0.0;
    let mut min_roce: Option<f64> = None;
    let mut max_roce: Option<f64> = None;
    let mut min_payback: Option<f64> = None;
    let mut max_payback: Option<f64> = None;

    for sample in samples {
        count += 1;
        // Welford update keeps the variance numerically stable across
        // tens of thousands of trials.
        let delta = sample.ebitda - mean;
        mean += delta / count as f64;
        m2 += delta * (sample.ebitda - mean);

        if let Some(roce) = sample.return_on_capital.value() {
            min_roce = Some(min_roce.map_or(roce, |m| m.min(roce)));
            max_roce = Some(max_roce.map_or(roce, |m| m.max(roce)));
        }
        min_payback = Some(min_payback.map_or(sample.payback, |m| m.min(sample.payback)));
        max_payback = Some(max_payback.map_or(sample.payback, |m| m.max(sample.payback)));
    }

    debug!(trials = count, "summarised simulated distribution");

    let mean_ebitda = if count > 0 {
        MetricValue::Defined(mean)
    } else {
        MetricValue::Undefined
    };
    let stddev_ebitda = if count >= 2 {
        MetricValue::Defined((m2 / (count - 1) as f64).sqrt())
    } else {
        MetricValue::Undefined
    };

    DistributionStats {
        mean_ebitda,
        stddev_ebitda,
        min_return_on_capital: min_roce.into(),
        max_return_on_capital: max_roce.into(),
        min_payback: min_payback.into(),
        max_payback: max_payback.into(),
    }
}

/// One equal-width bucket of a histogram.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct HistogramBin {
    /// Inclusive lower edge.
    pub lower: f64,
    /// Exclusive upper edge (inclusive for the last bin).
    pub upper: f64,
    /// Number of trials falling in the bucket.
    pub count: usize,
}

/// Equal-width histogram of trial EBITDA.
///
/// Bin counts sum to the sample count and the bins span [min, max] of the
/// data. Empty input or zero bins yields no bins; a degenerate
/// distribution (all trials equal) collapses to a single zero-width bin.
pub fn ebitda_histogram(samples: &[SimulationSample], bins: usize) -> Vec<HistogramBin> {
    if samples.is_empty() || bins == 0 {
        return Vec::new();
    }

    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;
    for sample in samples {
        min = min.min(sample.ebitda);
        max = max.max(sample.ebitda);
    }

    if min == max {
        return vec![HistogramBin {
            lower: min,
            upper: max,
            count: samples.len(),
        }];
    }

    let width = (max - min) / bins as f64;
    let mut counts = vec![0usize; bins];
    for sample in samples {
        let index = (((sample.ebitda - min) / width) as usize).min(bins - 1);
        counts[index] += 1;
    }

    counts
        .into_iter()
        .enumerate()
        .map(|(i, count)| HistogramBin {
            lower: min + width * i as f64,
            upper: if i + 1 == bins {
                max
            } else {
                min + width * (i + 1) as f64
            },
            count,
        })
        .collect()
}

/// Nearest-rank percentile band of trial EBITDA.
///
/// Percentiles are given in [0, 100] with `lower_pct <= upper_pct`;
/// anything else, or an empty sample set, yields `None`.
pub fn ebitda_percentile_band(
    samples: &[SimulationSample],
    lower_pct: f64,
    upper_pct: f64,
) -> Option<(f64, f64)> {
    if samples.is_empty()
        || !(0.0..=100.0).contains(&lower_pct)
        || !(0.0..=100.0).contains(&upper_pct)
        || lower_pct > upper_pct
    {
        return None;
    }

    let mut sorted: Vec<f64> = samples.iter().map(|s| s.ebitda).collect();
    sorted.sort_by(f64::total_cmp);

    let rank = |pct: f64| -> f64 {
        let n = sorted.len();
        let position = (pct / 100.0 * n as f64).ceil() as usize;
        sorted[position.clamp(1, n) - 1]
    };

    Some((rank(lower_pct), rank(upper_pct)))
}
