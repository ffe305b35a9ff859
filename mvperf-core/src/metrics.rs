//! Speedup and parallel efficiency derived from raw timings

use crate::dataset::Configuration;
use serde::Serialize;

/// A configuration together with its derived metrics
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ConfigurationMetrics {
    #[serde(flatten)]
    pub configuration: Configuration,
    /// Baseline time divided by this configuration's time
    pub speedup: f64,
    /// Speedup per worker, as a percentage of linear scaling
    pub efficiency_pct: f64,
}

impl ConfigurationMetrics {
    /// Derive metrics for `configuration` against `baseline_time_ms`
    pub fn against_baseline(configuration: Configuration, baseline_time_ms: f64) -> Self {
        let speedup = speedup(baseline_time_ms, configuration.time_ms);
        let efficiency_pct = efficiency_pct(speedup, configuration.workers);

        Self {
            configuration,
            speedup,
            efficiency_pct,
        }
    }
}

/// `baseline_ms / time_ms`
pub fn speedup(baseline_ms: f64, time_ms: f64) -> f64 {
    baseline_ms / time_ms
}

/// `speedup / workers * 100`
pub fn efficiency_pct(speedup: f64, workers: u32) -> f64 {
    speedup / f64::from(workers) * 100.0
}

/// Derive metrics for every configuration, using the first entry as the
/// sequential baseline.
///
/// Zero times or worker counts are not rejected; the resulting infinities
/// or NaNs are passed through unchanged.
pub fn derive_metrics(configurations: &[Configuration]) -> Vec<ConfigurationMetrics> {
    let Some(baseline) = configurations.first() else {
        return Vec::new();
    };

    configurations
        .iter()
        .map(|c| ConfigurationMetrics::against_baseline(*c, baseline.time_ms))
        .collect()
}

/// Entry with the highest speedup. The first one wins on ties.
pub fn best_by_speedup(metrics: &[ConfigurationMetrics]) -> Option<&ConfigurationMetrics> {
    metrics.iter().fold(None, |best, m| match best {
        Some(b) if b.speedup >= m.speedup => Some(b),
        _ => Some(m),
    })
}
