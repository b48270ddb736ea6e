//! Profiling configuration
//!
//! Parameters controlling the size progression and the timing trials, plus
//! the pairing of those parameters with the analyzed function and the input
//! generator that make up one profiling run.
//!
//! Copyright (c) 2025 Mohammad Atashi <mohammadaliatashi@icloud.com>

use std::fs;
use std::path::Path;

use log::debug;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::error::ProfilingError;

/// Numeric parameters of a profiling run
///
/// Tested sizes are `magnitude_base^(initial_order + k)` for
/// `k in 0..order_count`. Each size is timed `repeat_count` times, each
/// trial covering `execution_quantity` consecutive invocations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProfilingParameters {
    /// Exponent of the smallest tested size
    pub initial_order: u32,

    /// Number of distinct sizes to test
    pub order_count: u32,

    /// Base of the geometric progression
    pub magnitude_base: usize,

    /// Invocations per timing trial
    pub execution_quantity: u32,

    /// Independent timing trials per size
    pub repeat_count: u32,
}

impl Default for ProfilingParameters {
    fn default() -> Self {
        Self {
            initial_order: 3,
            order_count: 4,
            magnitude_base: 10,
            execution_quantity: 10_000,
            repeat_count: 10,
        }
    }
}

impl ProfilingParameters {
    /// Check every parameter against its lower bound
    pub fn validate(&self) -> Result<(), ProfilingError> {
        if self.order_count < 1 {
            return Err(ProfilingError::invalid("order_count", "must be at least 1"));
        }
        if self.magnitude_base < 2 {
            return Err(ProfilingError::invalid(
                "magnitude_base",
                format!("must be at least 2, got {}", self.magnitude_base),
            ));
        }
        if self.execution_quantity < 1 {
            return Err(ProfilingError::invalid("execution_quantity", "must be at least 1"));
        }
        if self.repeat_count < 1 {
            return Err(ProfilingError::invalid("repeat_count", "must be at least 1"));
        }
        Ok(())
    }

    /// Parse and validate parameters from JSON text
    ///
    /// Fields missing from the document keep their default values.
    pub fn from_json_str(text: &str) -> Result<Self, ConfigError> {
        let parameters: Self = serde_json::from_str(text)?;
        parameters.validate()?;
        debug!("Loaded profiling parameters: {:?}", parameters);
        Ok(parameters)
    }

    /// Read, parse and validate parameters from a JSON file
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path.as_ref())?;
        Self::from_json_str(&text)
    }
}

/// One profiling run: parameters plus the two collaborators
#[derive(Debug, Clone)]
pub struct ProfilingConfig<A, G> {
    pub analyzed: A,
    pub generator: G,
    pub parameters: ProfilingParameters,
}

impl<A, G> ProfilingConfig<A, G> {
    pub fn new(analyzed: A, generator: G, parameters: ProfilingParameters) -> Self {
        Self {
            analyzed,
            generator,
            parameters,
        }
    }
}

/// Errors raised while loading parameters from an external source
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read configuration: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse configuration: {0}")]
    Parse(#[from] serde_json::Error),

    #[error(transparent)]
    Invalid(#[from] ProfilingError),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_parameters_are_valid() {
        let parameters = ProfilingParameters::default();
        assert!(parameters.validate().is_ok());
        assert_eq!(parameters.initial_order, 3);
        assert_eq!(parameters.order_count, 4);
        assert_eq!(parameters.magnitude_base, 10);
        assert_eq!(parameters.execution_quantity, 10_000);
        assert_eq!(parameters.repeat_count, 10);
    }

    #[test]
    fn test_rejects_out_of_range_parameters() {
        let cases = [
            ProfilingParameters { order_count: 0, ..Default::default() },
            ProfilingParameters { magnitude_base: 1, ..Default::default() },
            ProfilingParameters { execution_quantity: 0, ..Default::default() },
            ProfilingParameters { repeat_count: 0, ..Default::default() },
        ];

        for parameters in cases {
            let error = parameters.validate().unwrap_err();
            assert!(error.is_configuration(), "{:?} should be rejected", parameters);
        }
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let parameters =
            ProfilingParameters::from_json_str(r#"{ "magnitude_base": 2, "repeat_count": 3 }"#)
                .unwrap();

        assert_eq!(parameters.magnitude_base, 2);
        assert_eq!(parameters.repeat_count, 3);
        assert_eq!(parameters.order_count, 4);
        assert_eq!(parameters.execution_quantity, 10_000);
    }

    #[test]
    fn test_invalid_json_values_are_rejected() {
        let error = ProfilingParameters::from_json_str(r#"{ "order_count": 0 }"#).unwrap_err();
        assert!(matches!(error, ConfigError::Invalid(_)));

        let error = ProfilingParameters::from_json_str("{ not json").unwrap_err();
        assert!(matches!(error, ConfigError::Parse(_)));
    }

    #[test]
    fn test_loads_parameters_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{ "initial_order": 0, "order_count": 5 }}"#).unwrap();

        let parameters = ProfilingParameters::from_json_file(file.path()).unwrap();
        assert_eq!(parameters.initial_order, 0);
        assert_eq!(parameters.order_count, 5);

        let missing = ProfilingParameters::from_json_file("/nonexistent/asymptote.json");
        assert!(matches!(missing, Err(ConfigError::Io(_))));
    }
}
