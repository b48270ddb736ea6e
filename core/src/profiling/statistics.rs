//! Statistics aggregation over timing trials
//!
//! The median is the growth signal handed to inference since it ignores the
//! occasional slow trial. Mean and sample standard deviation are kept for
//! reporting.
//!
//! Copyright (c) 2025 Mohammad Atashi <mohammadaliatashi@icloud.com>

use log::debug;
use serde::{Deserialize, Serialize};

use super::timer::TimingSampleSet;

/// Central tendency and dispersion of one size's trials, in seconds
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SampleStatistics {
    pub median: f64,
    pub mean: f64,

    /// Sample standard deviation; `None` with fewer than two trials
    pub std_dev: Option<f64>,

    pub min: f64,
    pub max: f64,
    pub count: usize,
}

/// Reduces timing trials to [`SampleStatistics`]
#[derive(Debug, Default, Clone, Copy)]
pub struct StatisticsAggregator;

impl StatisticsAggregator {
    pub fn new() -> Self {
        Self
    }

    /// Aggregate a timing sample set
    pub fn aggregate(&self, samples: &TimingSampleSet) -> Option<SampleStatistics> {
        let statistics = self.calculate_statistics(&samples.seconds());
        if let Some(stats) = &statistics {
            debug!(
                "size {}: median={:.3e}s mean={:.3e}s std_dev={:?}",
                samples.size, stats.median, stats.mean, stats.std_dev
            );
        }
        statistics
    }

    /// Descriptive statistics of raw values; `None` for an empty slice
    pub fn calculate_statistics(&self, data: &[f64]) -> Option<SampleStatistics> {
        if data.is_empty() {
            return None;
        }

        let count = data.len();
        let mean = data.iter().sum::<f64>() / count as f64;

        let mut sorted = data.to_vec();
        sorted.sort_by(f64::total_cmp);

        Some(SampleStatistics {
            median: median_of_sorted(&sorted),
            mean,
            std_dev: sample_std_dev(data, mean),
            min: sorted[0],
            max: sorted[count - 1],
            count,
        })
    }
}

fn median_of_sorted(sorted: &[f64]) -> f64 {
    let mid = sorted.len() / 2;
    if sorted.len() % 2 == 0 {
        (sorted[mid - 1] + sorted[mid]) / 2.0
    } else {
        sorted[mid]
    }
}

/// Bessel-corrected standard deviation, undefined below two samples
fn sample_std_dev(data: &[f64], mean: f64) -> Option<f64> {
    if data.len() < 2 {
        return None;
    }
    let variance = data.iter().map(|x| (x - mean).powi(2)).sum::<f64>() / (data.len() - 1) as f64;
    Some(variance.sqrt())
}
