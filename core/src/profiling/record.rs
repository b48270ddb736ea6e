//! Measurement results and the result record handed to reporters
//!
//! `MeasurementResult` keeps one aligned entry per tested size: the size, the
//! median and mean time, and the sample standard deviation when there were
//! enough trials. A size can only be recorded once. `ResultRecord` bundles
//! those measurements with the names of both functions, the parameters of the
//! run and the inferred complexity.
//!
//! Copyright (c) 2025 Mohammad Atashi <mohammadaliatashi@icloud.com>

use serde::{Deserialize, Serialize};

use super::config::ProfilingParameters;
use super::error::ProfilingError;
use super::inference::InferenceOutcome;
use super::statistics::SampleStatistics;

/// Per-size statistics as four index-aligned sequences
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct MeasurementResult {
    sizes: Vec<usize>,
    medians: Vec<f64>,
    means: Vec<f64>,
    deviations: Vec<Option<f64>>,
}

impl MeasurementResult {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from aligned sequences, rejecting length mismatches and repeated sizes
    pub fn from_parts(
        sizes: Vec<usize>,
        medians: Vec<f64>,
        means: Vec<f64>,
        deviations: Vec<Option<f64>>,
    ) -> Result<Self, ProfilingError> {
        let expected = sizes.len();
        for times in [medians.len(), means.len(), deviations.len()] {
            if times != expected {
                return Err(ProfilingError::MisalignedMeasurements {
                    sizes: expected,
                    times,
                });
            }
        }

        let mut result = Self::new();
        for (((size, median), mean), std_dev) in sizes.into_iter().zip(medians).zip(means).zip(deviations) {
            result.push_values(size, median, mean, std_dev)?;
        }
        Ok(result)
    }

    /// Append the statistics of the next tested size
    pub fn push(&mut self, size: usize, statistics: &SampleStatistics) -> Result<(), ProfilingError> {
        self.push_values(size, statistics.median, statistics.mean, statistics.std_dev)
    }

    fn push_values(
        &mut self,
        size: usize,
        median: f64,
        mean: f64,
        std_dev: Option<f64>,
    ) -> Result<(), ProfilingError> {
        if self.sizes.contains(&size) {
            return Err(ProfilingError::invalid(
                "sizes",
                format!("size {} measured twice", size),
            ));
        }
        self.sizes.push(size);
        self.medians.push(median);
        self.means.push(mean);
        self.deviations.push(std_dev);
        Ok(())
    }

    pub fn sizes(&self) -> &[usize] {
        &self.sizes
    }

    pub fn medians(&self) -> &[f64] {
        &self.medians
    }

    pub fn means(&self) -> &[f64] {
        &self.means
    }

    pub fn deviations(&self) -> &[Option<f64>] {
        &self.deviations
    }

    pub fn len(&self) -> usize {
        self.sizes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sizes.is_empty()
    }

    /// `(size, median, mean, std_dev)` tuples in size order
    pub fn points(&self) -> impl Iterator<Item = (usize, f64, f64, Option<f64>)> + '_ {
        self.sizes
            .iter()
            .zip(&self.medians)
            .zip(&self.means)
            .zip(&self.deviations)
            .map(|(((size, median), mean), std_dev)| (*size, *median, *mean, *std_dev))
    }
}

/// Immutable bundle of one profiling run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResultRecord {
    analyzed_function: String,
    generation_function: String,
    parameters: ProfilingParameters,
    measurements: MeasurementResult,
    outcome: InferenceOutcome,
}

impl ResultRecord {
    pub fn new(
        analyzed_function: impl Into<String>,
        generation_function: impl Into<String>,
        parameters: ProfilingParameters,
        measurements: MeasurementResult,
        outcome: InferenceOutcome,
    ) -> Self {
        Self {
            analyzed_function: analyzed_function.into(),
            generation_function: generation_function.into(),
            parameters,
            measurements,
            outcome,
        }
    }

    pub fn analyzed_function(&self) -> &str {
        &self.analyzed_function
    }

    pub fn generation_function(&self) -> &str {
        &self.generation_function
    }

    pub fn parameters(&self) -> &ProfilingParameters {
        &self.parameters
    }

    pub fn measurements(&self) -> &MeasurementResult {
        &self.measurements
    }

    pub fn outcome(&self) -> &InferenceOutcome {
        &self.outcome
    }

    /// Notation of the inferred complexity, e.g. `O(n log n)`
    pub fn notation(&self) -> &'static str {
        self.outcome.notation()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_points_stay_aligned() {
        let result = MeasurementResult::from_parts(
            vec![1, 2, 4],
            vec![0.1, 0.2, 0.4],
            vec![0.11, 0.21, 0.41],
            vec![Some(0.01), None, Some(0.03)],
        )
        .unwrap();

        let points: Vec<_> = result.points().collect();
        assert_eq!(points[1], (2, 0.2, 0.21, None));
        assert_eq!(result.len(), 3);
        assert_eq!(result.deviations()[2], Some(0.03));
    }

    #[test]
    fn test_rejects_mismatched_lengths() {
        let error = MeasurementResult::from_parts(vec![1, 2], vec![0.1], vec![0.1, 0.2], vec![None, None])
            .unwrap_err();
        assert!(matches!(error, ProfilingError::MisalignedMeasurements { sizes: 2, times: 1 }));
    }

    #[test]
    fn test_rejects_repeated_size() {
        let stats = SampleStatistics {
            median: 1.0,
            mean: 1.0,
            std_dev: None,
            min: 1.0,
            max: 1.0,
            count: 1,
        };
        let mut result = MeasurementResult::new();
        result.push(8, &stats).unwrap();

        assert!(result.push(8, &stats).is_err());
        assert_eq!(result.len(), 1);
    }
}
