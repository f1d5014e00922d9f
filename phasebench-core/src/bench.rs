//! Warmup-then-measure benchmark loop.
//!
//! Runs a closure through an unmeasured warmup phase, then collects a fixed
//! number of samples, each the per-iteration average of a batch. The best
//! (minimum) sample is the headline number; the full sample set feeds the
//! statistics layer.

use std::hint::black_box;

use tracing::debug;

use crate::clock::{Clock, MonotonicClock};

/// Controls the shape of a benchmark run.
///
/// Zero `samples` or `iters_per_sample` are clamped to one at run time
/// rather than rejected.
#[derive(Debug, Clone)]
pub struct BenchConfig {
    /// Unmeasured iterations before sampling starts. Zero skips warmup.
    pub warmup_iters: u64,
    /// Number of samples to collect.
    pub samples: usize,
    /// Iterations averaged into each sample.
    pub iters_per_sample: u64,
}

impl Default for BenchConfig {
    fn default() -> Self {
        Self {
            warmup_iters: 10,
            samples: 20,
            iters_per_sample: 10,
        }
    }
}

/// Result of a benchmark run.
#[derive(Debug, Clone)]
pub struct BenchResult {
    /// Benchmark label.
    pub name: String,
    /// Per-iteration average duration of each sample, in nanoseconds.
    pub samples: Vec<u64>,
    /// Total measured iterations, excluding warmup.
    pub iterations: u64,
    /// Total time spent in measurement, in nanoseconds.
    pub total_time_ns: u64,
}

impl BenchResult {
    /// Best (minimum) sample in nanoseconds.
    pub fn best_ns(&self) -> u64 {
        self.samples.iter().copied().min().unwrap_or(0)
    }

    /// Mean sample in nanoseconds.
    pub fn mean_ns(&self) -> f64 {
        if self.samples.is_empty() {
            return 0.0;
        }
        self.samples.iter().sum::<u64>() as f64 / self.samples.len() as f64
    }

    /// Samples widened to `f64` for the statistics layer.
    pub fn samples_f64(&self) -> Vec<f64> {
        self.samples.iter().map(|&s| s as f64).collect()
    }
}

/// Benchmark `f` under the monotonic system clock.
pub fn run<F, T>(name: impl Into<String>, config: &BenchConfig, f: F) -> BenchResult
where
    F: FnMut() -> T,
{
    run_with_clock(MonotonicClock::new(), name, config, f)
}

/// Benchmark `f` under an explicit clock.
pub fn run_with_clock<C, F, T>(
    clock: C,
    name: impl Into<String>,
    config: &BenchConfig,
    mut f: F,
) -> BenchResult
where
    C: Clock,
    F: FnMut() -> T,
{
    let name = name.into();
    let sample_target = config.samples.max(1);
    let iters = config.iters_per_sample.max(1);

    for _ in 0..config.warmup_iters {
        black_box(f());
    }
    debug!(bench = %name, warmup_iters = config.warmup_iters, "warmup complete");

    let mut samples = Vec::with_capacity(sample_target);
    let mut iterations = 0u64;
    let mut total_time_ns = 0u64;

    for _ in 0..sample_target {
        let batch_start = clock.now();
        for _ in 0..iters {
            black_box(f());
        }
        let batch_ns = clock.now().saturating_sub(batch_start).as_nanos() as u64;

        samples.push(batch_ns / iters);
        iterations += iters;
        total_time_ns += batch_ns;
    }
    debug!(bench = %name, samples = samples.len(), iterations, "measurement complete");

    BenchResult {
        name,
        samples,
        iterations,
        total_time_ns,
    }
}
