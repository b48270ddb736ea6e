//! Empirical time-complexity profiling
//!
//! Measures an analyzed function over a geometric progression of input
//! sizes, aggregates repeated trials into robust statistics and infers the
//! canonical complexity class that best explains the growth of the median
//! times.
//!
//! Copyright (c) 2025 Mohammad Atashi <mohammadaliatashi@icloud.com>

pub mod config;
pub mod error;
pub mod inference;
pub mod profiler;
pub mod progression;
pub mod record;
pub mod statistics;
pub mod subject;
pub mod timer;

pub use self::config::{ConfigError, ProfilingConfig, ProfilingParameters};
pub use self::error::{BoxError, ProfilingError};
pub use self::inference::{ComplexityClass, ComplexityInferenceEngine, ComplexityModel, InferenceOutcome};
pub use self::profiler::{profile, ComplexityProfiler};
pub use self::progression::size_progression;
pub use self::record::{MeasurementResult, ResultRecord};
pub use self::statistics::{SampleStatistics, StatisticsAggregator};
pub use self::subject::{analyzed, fallible, generator, AnalyzedFunction, InputGenerator};
pub use self::timer::{ExecutionTimer, TimingSampleSet};
