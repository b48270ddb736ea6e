//! Profiling pipeline
//!
//! Size progression → per-size timing → statistics → inference → record.
//! Timing runs on the calling thread, one trial after another. Every
//! configuration check happens before the first invocation, so a bad run
//! fails without spending any time in the analyzed function. An error raised
//! by the analyzed function at any size aborts the whole run and no partial
//! record is produced.
//!
//! Copyright (c) 2025 Mohammad Atashi <mohammadaliatashi@icloud.com>

use log::{debug, info};

use super::config::{ProfilingConfig, ProfilingParameters};
use super::error::ProfilingError;
use super::inference::{ComplexityInferenceEngine, InferenceOutcome, MIN_DISTINCT_SIZES};
use super::record::{MeasurementResult, ResultRecord};
use super::statistics::StatisticsAggregator;
use super::subject::{AnalyzedFunction, InputGenerator};
use super::timer::ExecutionTimer;

/// Drives a complete profiling run
#[derive(Debug, Clone, Default)]
pub struct ComplexityProfiler {
    aggregator: StatisticsAggregator,
    engine: ComplexityInferenceEngine,
}

impl ComplexityProfiler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_engine(mut self, engine: ComplexityInferenceEngine) -> Self {
        self.engine = engine;
        self
    }

    /// Time the analyzed function at every size of the progression
    ///
    /// Each input is generated once per size and shared by all trials.
    pub fn measure<A, G>(
        &self,
        analyzed: &A,
        generator: &G,
        parameters: &ProfilingParameters,
    ) -> Result<MeasurementResult, ProfilingError>
    where
        G: InputGenerator,
        A: AnalyzedFunction<G::Input>,
    {
        parameters.validate()?;
        let sizes = parameters.sizes()?;
        let timer = ExecutionTimer::from_parameters(parameters);
        let mut measurements = MeasurementResult::new();

        for size in sizes {
            debug!("Measuring {} at size {}", analyzed.name(), size);
            let input = generator.generate(size);
            let samples = timer.time(analyzed, &input, size)?;
            let statistics = self
                .aggregator
                .aggregate(&samples)
                .ok_or_else(|| ProfilingError::invalid("repeat_count", "no timing trials collected"))?;
            measurements.push(size, &statistics)?;
        }

        Ok(measurements)
    }

    /// Classify measured medians
    pub fn infer(&self, measurements: &MeasurementResult) -> Result<InferenceOutcome, ProfilingError> {
        self.engine.infer(measurements.sizes(), measurements.medians())
    }

    /// Run the full pipeline for one configuration
    ///
    /// Configuration problems surface before any timing. A failure of the
    /// analyzed function aborts the run and no record is produced.
    pub fn profile<A, G>(&self, config: &ProfilingConfig<A, G>) -> Result<ResultRecord, ProfilingError>
    where
        G: InputGenerator,
        A: AnalyzedFunction<G::Input>,
    {
        let parameters = &config.parameters;
        parameters.validate()?;

        let sizes = parameters.sizes()?;
        if sizes.len() < MIN_DISTINCT_SIZES {
            return Err(ProfilingError::InsufficientSizes {
                found: sizes.len(),
                required: MIN_DISTINCT_SIZES,
            });
        }

        info!(
            "Profiling {} with inputs from {}: sizes {:?}, {} trials of {} executions",
            config.analyzed.name(),
            config.generator.name(),
            sizes,
            parameters.repeat_count,
            parameters.execution_quantity
        );

        let measurements = self.measure(&config.analyzed, &config.generator, parameters)?;
        let outcome = self.infer(&measurements)?;

        Ok(ResultRecord::new(
            config.analyzed.name(),
            config.generator.name(),
            *parameters,
            measurements,
            outcome,
        ))
    }
}

/// Profile a configuration with the default engine
pub fn profile<A, G>(config: &ProfilingConfig<A, G>) -> Result<ResultRecord, ProfilingError>
where
    G: InputGenerator,
    A: AnalyzedFunction<G::Input>,
{
    ComplexityProfiler::new().profile(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profiling::subject::{analyzed, fallible, generator};
    use std::cell::{Cell, RefCell};

    fn parameters(order_count: u32, repeat_count: u32) -> ProfilingParameters {
        ProfilingParameters {
            initial_order: 0,
            order_count,
            magnitude_base: 2,
            execution_quantity: 1,
            repeat_count,
        }
    }

    #[test]
    fn test_measurements_follow_progression() {
        let requested = RefCell::new(Vec::new());
        let integers = generator("integers", |size: usize| {
            requested.borrow_mut().push(size);
            (0..size as u64).collect::<Vec<_>>()
        });
        let total = analyzed("total", |values: &Vec<u64>| values.iter().sum::<u64>());

        let measurements = ComplexityProfiler::new()
            .measure(&total, &integers, &parameters(4, 3))
            .unwrap();

        assert_eq!(measurements.sizes(), &[1, 2, 4, 8]);
        assert_eq!(*requested.borrow(), vec![1, 2, 4, 8]);
        assert_eq!(measurements.medians().len(), 4);
        assert!(measurements.deviations().iter().all(|d| d.map_or(false, |v| v >= 0.0)));
    }

    #[test]
    fn test_single_repeat_reports_absent_deviation() {
        let integers = generator("integers", |size: usize| vec![0u8; size]);
        let length = analyzed("length", |values: &Vec<u8>| values.len());

        let measurements = ComplexityProfiler::new()
            .measure(&length, &integers, &parameters(4, 1))
            .unwrap();

        assert!(measurements.deviations().iter().all(Option::is_none));
    }

    #[test]
    fn test_configuration_errors_precede_timing() {
        let calls = Cell::new(0usize);
        let counting = analyzed("counting", |_: &usize| calls.set(calls.get() + 1));
        let identity = generator("identity", |size: usize| size);

        let invalid = [
            parameters(0, 1),
            parameters(1, 1),
            ProfilingParameters { magnitude_base: 1, ..parameters(3, 1) },
        ];
        for parameters in invalid {
            let config = ProfilingConfig::new(&counting, &identity, parameters);
            let error = ComplexityProfiler::new().profile(&config).unwrap_err();
            assert!(error.is_configuration(), "{:?}", error);
        }

        assert_eq!(calls.get(), 0);
    }

    #[derive(Debug, thiserror::Error)]
    #[error("input of size {0} rejected")]
    struct Rejected(usize);

    #[test]
    fn test_failure_on_third_size_aborts_run() {
        let failing = fallible("failing", |values: &Vec<u32>| {
            if values.len() == 4 {
                Err(Rejected(values.len()))
            } else {
                Ok(values.len())
            }
        });
        let integers = generator("integers", |size: usize| vec![0u32; size]);
        let config = ProfilingConfig::new(failing, integers, parameters(4, 2));

        let error = profile(&config).unwrap_err();

        match &error {
            ProfilingError::Execution { size, .. } => assert_eq!(*size, 4),
            other => panic!("unexpected error: {:?}", other),
        }
        let source = error.execution_source().unwrap();
        assert_eq!(source.downcast_ref::<Rejected>().unwrap().0, 4);
    }

    #[test]
    fn test_record_carries_identifiers_and_parameters() {
        let integers = generator("generate_integers", |size: usize| vec![1u64; size]);
        let total = analyzed("total", |values: &Vec<u64>| {
            values.iter().fold(0u64, |acc, v| acc.wrapping_add(v.wrapping_mul(31)))
        });
        let config = ProfilingConfig::new(
            total,
            integers,
            ProfilingParameters {
                initial_order: 6,
                order_count: 3,
                magnitude_base: 2,
                execution_quantity: 5,
                repeat_count: 3,
            },
        );

        let record = profile(&config).unwrap();

        assert_eq!(record.analyzed_function(), "total");
        assert_eq!(record.generation_function(), "generate_integers");
        assert_eq!(record.parameters(), &config.parameters);
        assert_eq!(record.measurements().sizes(), &[64, 128, 256]);
        assert_eq!(record.outcome().candidates.len(), 8);
    }
}
