//! Summary statistics over benchmark samples.
//!
//! Percentiles use linear interpolation between nearest ranks; the standard
//! deviation uses the sample (n - 1) denominator.

/// Summary of a sample set.
#[derive(Debug, Clone, Default)]
pub struct SummaryStatistics {
    /// Arithmetic mean.
    pub mean: f64,
    /// 50th percentile.
    pub median: f64,
    /// Sample standard deviation.
    pub std_dev: f64,
    /// Smallest sample.
    pub min: f64,
    /// Largest sample.
    pub max: f64,
    /// 95th percentile.
    pub p95: f64,
    /// 99th percentile.
    pub p99: f64,
    /// Number of samples.
    pub sample_count: usize,
}

impl SummaryStatistics {
    /// Coefficient of variation as a percentage of the mean.
    pub fn coefficient_of_variation(&self) -> f64 {
        if self.mean == 0.0 {
            0.0
        } else {
            (self.std_dev / self.mean) * 100.0
        }
    }

    /// Whether the distribution looks stable (CV below `cv_threshold` percent).
    pub fn is_stable(&self, cv_threshold: f64) -> bool {
        self.coefficient_of_variation() < cv_threshold
    }
}

/// Compute a percentile with linear interpolation between nearest ranks.
///
/// An empty slice yields 0.0.
pub fn percentile(samples: &[f64], pct: f64) -> f64 {
    match samples {
        [] => 0.0,
        [only] => *only,
        _ => {
            let mut sorted = samples.to_vec();
            sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));

            let rank = (pct / 100.0) * (sorted.len() - 1) as f64;
            let lo = rank.floor() as usize;
            let hi = (lo + 1).min(sorted.len() - 1);
            let frac = rank - lo as f64;

            sorted[lo] + frac * (sorted[hi] - sorted[lo])
        }
    }
}

/// Compute summary statistics. Empty input yields all-zero statistics.
pub fn compute_summary(samples: &[f64]) -> SummaryStatistics {
    if samples.is_empty() {
        return SummaryStatistics::default();
    }

    let n = samples.len();
    let mean = samples.iter().sum::<f64>() / n as f64;

    let std_dev = if n < 2 {
        0.0
    } else {
        let variance = samples.iter().map(|x| (x - mean).powi(2)).sum::<f64>() / (n - 1) as f64;
        variance.sqrt()
    };

    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;
    for &sample in samples {
        min = min.min(sample);
        max = max.max(sample);
    }

    SummaryStatistics {
        mean,
        median: percentile(samples, 50.0),
        std_dev,
        min,
        max,
        p95: percentile(samples, 95.0),
        p99: percentile(samples, 99.0),
        sample_count: n,
    }
}
