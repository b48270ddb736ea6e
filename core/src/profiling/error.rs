//! Error types for the profiling pipeline
//!
//! One enum covers the whole pipeline. Configuration problems (bad
//! parameters, too few distinct sizes, misaligned series) are told apart
//! from failures of the analyzed function, which keep the original error as
//! their source, and from inference failures on degenerate data.
//!
//! Copyright (c) 2025 Mohammad Atashi <mohammadaliatashi@icloud.com>

use thiserror::Error;

/// Boxed error surfaced by an analyzed function
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Profiling pipeline errors
#[derive(Debug, Error)]
pub enum ProfilingError {
    #[error("Invalid configuration: {parameter} - {reason}")]
    InvalidConfiguration {
        parameter: &'static str,
        reason: String,
    },

    #[error("Insufficient distinct input sizes for inference: {found} < {required}")]
    InsufficientSizes { found: usize, required: usize },

    #[error("Misaligned measurements: {sizes} sizes but {times} times")]
    MisalignedMeasurements { sizes: usize, times: usize },

    #[error("Analyzed function failed at input size {size}: {source}")]
    Execution {
        size: usize,
        #[source]
        source: BoxError,
    },

    #[error("Complexity inference failed: {reason}")]
    InferenceFailure { reason: String },
}

impl ProfilingError {
    pub(crate) fn invalid(parameter: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidConfiguration {
            parameter,
            reason: reason.into(),
        }
    }

    /// Whether the error was raised before any timing took place
    pub fn is_configuration(&self) -> bool {
        matches!(
            self,
            Self::InvalidConfiguration { .. }
                | Self::InsufficientSizes { .. }
                | Self::MisalignedMeasurements { .. }
        )
    }

    /// The analyzed function's own error, when the run aborted on it
    pub fn execution_source(&self) -> Option<&(dyn std::error::Error + Send + Sync + 'static)> {
        match self {
            Self::Execution { source, .. } => Some(source.as_ref()),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Error)]
    #[error("boom")]
    struct Boom;

    #[test]
    fn test_execution_source_is_preserved() {
        let error = ProfilingError::Execution {
            size: 8,
            source: Box::new(Boom),
        };

        assert!(!error.is_configuration());
        let source = error.execution_source().unwrap();
        assert!(source.downcast_ref::<Boom>().is_some());
        assert_eq!(error.to_string(), "Analyzed function failed at input size 8: boom");
    }

    #[test]
    fn test_configuration_classification() {
        assert!(ProfilingError::invalid("order_count", "must be at least 1").is_configuration());
        assert!(ProfilingError::InsufficientSizes { found: 1, required: 2 }.is_configuration());
        assert!(!ProfilingError::InferenceFailure { reason: "x".into() }.is_configuration());
    }
}
