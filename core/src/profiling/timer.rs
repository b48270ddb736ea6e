//! Execution timer
//!
//! Each trial times `execution_quantity` back-to-back invocations as one
//! block, amortizing clock resolution for fast functions. Trials are repeated
//! `repeat_count` times, sequentially, so that a transient scheduling spike
//! affects a single sample rather than the whole measurement.
//!
//! Copyright (c) 2025 Mohammad Atashi <mohammadaliatashi@icloud.com>

use std::hint::black_box;
use std::time::{Duration, Instant};

use log::trace;
use serde::{Deserialize, Serialize};

use super::config::ProfilingParameters;
use super::error::ProfilingError;
use super::subject::AnalyzedFunction;

/// Elapsed times of every trial for one input size
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimingSampleSet {
    /// Input size the trials ran on
    pub size: usize,

    /// Invocations covered by each trial
    pub execution_quantity: u32,

    /// Total elapsed time of each trial, in collection order
    trials: Vec<Duration>,
}

impl TimingSampleSet {
    pub fn new(size: usize, execution_quantity: u32, trials: Vec<Duration>) -> Self {
        Self {
            size,
            execution_quantity,
            trials,
        }
    }

    pub fn trials(&self) -> &[Duration] {
        &self.trials
    }

    /// Trial durations in seconds
    pub fn seconds(&self) -> Vec<f64> {
        self.trials.iter().map(Duration::as_secs_f64).collect()
    }

    pub fn len(&self) -> usize {
        self.trials.len()
    }

    pub fn is_empty(&self) -> bool {
        self.trials.is_empty()
    }
}

/// Runs repeated timing trials of an analyzed function
#[derive(Debug, Clone, Copy)]
pub struct ExecutionTimer {
    execution_quantity: u32,
    repeat_count: u32,
}

impl ExecutionTimer {
    pub fn new(execution_quantity: u32, repeat_count: u32) -> Self {
        Self {
            execution_quantity,
            repeat_count,
        }
    }

    pub fn from_parameters(parameters: &ProfilingParameters) -> Self {
        Self::new(parameters.execution_quantity, parameters.repeat_count)
    }

    /// Time `repeat_count` trials of `execution_quantity` invocations on `input`
    ///
    /// The same input is reused by every invocation. The first failure aborts
    /// the measurement and is returned with the size it occurred at.
    pub fn time<I, A>(
        &self,
        analyzed: &A,
        input: &I,
        size: usize,
    ) -> Result<TimingSampleSet, ProfilingError>
    where
        I: ?Sized,
        A: AnalyzedFunction<I>,
    {
        let mut trials = Vec::with_capacity(self.repeat_count as usize);

        for trial in 0..self.repeat_count {
            let start = Instant::now();
            for _ in 0..self.execution_quantity {
                let output = analyzed
                    .invoke(black_box(input))
                    .map_err(|source| ProfilingError::Execution { size, source })?;
                black_box(output);
            }
            let elapsed = start.elapsed();

            trace!("size {} trial {}: {:?}", size, trial, elapsed);
            trials.push(elapsed);
        }

        Ok(TimingSampleSet::new(size, self.execution_quantity, trials))
    }
}
