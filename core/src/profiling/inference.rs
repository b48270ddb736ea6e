//! Complexity inference engine
//!
//! Fits the observed (size, time) pairs against every canonical growth shape
//! by ordinary least squares and keeps the shape with the smallest residual
//! sum of squares. Additive shapes are fitted as `time = offset + scale * f(n)`.
//! Multiplicative shapes are linearized first: the polynomial model fits
//! `ln time = ln scale + x * ln n`, the exponential model fits
//! `ln time = ln scale + n * ln b`. Residuals are always measured in the
//! original time space so candidates stay comparable.
//!
//! Copyright (c) 2025 Mohammad Atashi <mohammadaliatashi@icloud.com>

use std::collections::BTreeSet;
use std::fmt;

use log::{debug, info};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use super::error::ProfilingError;

/// Minimum number of distinct sizes a fit needs
pub const MIN_DISTINCT_SIZES: usize = 2;

/// Residuals within this fraction of the centred spread of the times count as tied
pub const DEFAULT_TIE_TOLERANCE: f64 = 1e-9;

/// Canonical asymptotic growth classes, ordered from slowest to fastest growth
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ComplexityClass {
    /// Constant time: O(1)
    Constant,

    /// Logarithmic: O(log n)
    Logarithmic,

    /// Linear: O(n)
    Linear,

    /// Linearithmic: O(n log n)
    Linearithmic,

    /// Quadratic: O(n²)
    Quadratic,

    /// Cubic: O(n³)
    Cubic,

    /// Polynomial with a fitted exponent: O(n^x)
    Polynomial,

    /// Exponential: O(2^n)
    Exponential,
}

impl ComplexityClass {
    /// Every class, in tie-break order
    pub const ALL: [ComplexityClass; 8] = [
        ComplexityClass::Constant,
        ComplexityClass::Logarithmic,
        ComplexityClass::Linear,
        ComplexityClass::Linearithmic,
        ComplexityClass::Quadratic,
        ComplexityClass::Cubic,
        ComplexityClass::Polynomial,
        ComplexityClass::Exponential,
    ];

    /// Big-O notation label
    pub fn notation(&self) -> &'static str {
        match self {
            ComplexityClass::Constant => "O(1)",
            ComplexityClass::Logarithmic => "O(log n)",
            ComplexityClass::Linear => "O(n)",
            ComplexityClass::Linearithmic => "O(n log n)",
            ComplexityClass::Quadratic => "O(n^2)",
            ComplexityClass::Cubic => "O(n^3)",
            ComplexityClass::Polynomial => "O(n^x)",
            ComplexityClass::Exponential => "O(2^n)",
        }
    }

    /// Evaluate the shape function of an additive class at size `n`
    ///
    /// Multiplicative classes have no fixed shape; they report `None`.
    pub fn evaluate(&self, n: f64) -> Option<f64> {
        match self {
            ComplexityClass::Constant => Some(1.0),
            ComplexityClass::Logarithmic => Some(n.log2()),
            ComplexityClass::Linear => Some(n),
            ComplexityClass::Linearithmic => Some(n * n.log2()),
            ComplexityClass::Quadratic => Some(n * n),
            ComplexityClass::Cubic => Some(n * n * n),
            ComplexityClass::Polynomial | ComplexityClass::Exponential => None,
        }
    }

    fn is_multiplicative(&self) -> bool {
        matches!(self, ComplexityClass::Polynomial | ComplexityClass::Exponential)
    }
}

impl fmt::Display for ComplexityClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ComplexityClass::Constant => "Constant",
            ComplexityClass::Logarithmic => "Logarithmic",
            ComplexityClass::Linear => "Linear",
            ComplexityClass::Linearithmic => "Linearithmic",
            ComplexityClass::Quadratic => "Quadratic",
            ComplexityClass::Cubic => "Cubic",
            ComplexityClass::Polynomial => "Polynomial",
            ComplexityClass::Exponential => "Exponential",
        };
        f.write_str(name)
    }
}

/// A complexity class with fitted coefficients and its goodness of fit
///
/// For additive classes `time = offset + scale * f(n)`. For the polynomial
/// class `time = scale * n^parameter`; for the exponential class
/// `time = scale * parameter^n`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ComplexityModel {
    pub class: ComplexityClass,
    pub offset: f64,
    pub scale: f64,

    /// Fitted exponent (polynomial) or growth base (exponential)
    pub parameter: Option<f64>,

    /// Residual sum of squares against the observed times
    pub residual: f64,
}

impl ComplexityModel {
    /// Predicted time at size `n`
    pub fn predict(&self, n: f64) -> f64 {
        match self.class {
            ComplexityClass::Polynomial => self.scale * n.powf(self.parameter.unwrap_or(f64::NAN)),
            ComplexityClass::Exponential => self.scale * self.parameter.unwrap_or(f64::NAN).powf(n),
            additive => match additive.evaluate(n) {
                Some(shape) => self.offset + self.scale * shape,
                None => f64::NAN,
            },
        }
    }

    pub fn notation(&self) -> &'static str {
        self.class.notation()
    }

    pub fn is_finite(&self) -> bool {
        self.residual.is_finite()
    }
}

impl fmt::Display for ComplexityModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let formula = match self.class {
            ComplexityClass::Constant => format!("{:.2E}", self.offset),
            ComplexityClass::Logarithmic => format!("{:.2E} + {:.2E}*log(n)", self.offset, self.scale),
            ComplexityClass::Linear => format!("{:.2E} + {:.2E}*n", self.offset, self.scale),
            ComplexityClass::Linearithmic => {
                format!("{:.2E} + {:.2E}*n*log(n)", self.offset, self.scale)
            }
            ComplexityClass::Quadratic => format!("{:.2E} + {:.2E}*n^2", self.offset, self.scale),
            ComplexityClass::Cubic => format!("{:.2E} + {:.2E}*n^3", self.offset, self.scale),
            ComplexityClass::Polynomial => {
                format!("{:.2E} * n^{:.2}", self.scale, self.parameter.unwrap_or(f64::NAN))
            }
            ComplexityClass::Exponential => {
                format!("{:.2E} * {:.2}^n", self.scale, self.parameter.unwrap_or(f64::NAN))
            }
        };
        write!(f, "{}: time = {}", self.class, formula)
    }
}

/// Selected model plus every candidate fit, in canonical order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InferenceOutcome {
    pub model: ComplexityModel,
    pub candidates: Vec<ComplexityModel>,
}

impl InferenceOutcome {
    pub fn class(&self) -> ComplexityClass {
        self.model.class
    }

    pub fn notation(&self) -> &'static str {
        self.model.notation()
    }
}

/// Least-squares classifier over the canonical complexity classes
#[derive(Debug, Clone)]
pub struct ComplexityInferenceEngine {
    candidates: Vec<ComplexityClass>,
    tie_tolerance: f64,
}

impl Default for ComplexityInferenceEngine {
    fn default() -> Self {
        Self {
            candidates: ComplexityClass::ALL.to_vec(),
            tie_tolerance: DEFAULT_TIE_TOLERANCE,
        }
    }
}

impl ComplexityInferenceEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Restrict the candidate set; candidates are always tried slowest-growth first
    pub fn with_candidates(mut self, candidates: impl IntoIterator<Item = ComplexityClass>) -> Self {
        let unique: BTreeSet<ComplexityClass> = candidates.into_iter().collect();
        self.candidates = unique.into_iter().collect();
        self
    }

    /// Relative tolerance under which two residuals are considered equal
    pub fn with_tie_tolerance(mut self, tie_tolerance: f64) -> Self {
        self.tie_tolerance = tie_tolerance.max(0.0);
        self
    }

    /// Infer the complexity class best explaining `times` over `sizes`
    ///
    /// `sizes` and `times` are index-aligned. The model with the smallest
    /// residual wins. Residuals within `tie_tolerance` times the centred sum
    /// of squares of `times` count as tied and resolve to the slower-growing
    /// class.
    pub fn infer(&self, sizes: &[usize], times: &[f64]) -> Result<InferenceOutcome, ProfilingError> {
        if sizes.len() != times.len() {
            return Err(ProfilingError::MisalignedMeasurements {
                sizes: sizes.len(),
                times: times.len(),
            });
        }

        let distinct = sizes.iter().collect::<BTreeSet<_>>().len();
        if distinct < MIN_DISTINCT_SIZES {
            return Err(ProfilingError::InsufficientSizes {
                found: distinct,
                required: MIN_DISTINCT_SIZES,
            });
        }

        if times.iter().all(|t| *t == 0.0) {
            return Err(ProfilingError::InferenceFailure {
                reason: "every observed time is zero".to_string(),
            });
        }

        let points: Vec<(f64, f64)> = sizes.iter().map(|&n| n as f64).zip(times.iter().copied()).collect();

        let candidates: Vec<ComplexityModel> = self
            .candidates
            .par_iter()
            .map(|class| fit_model(*class, &points))
            .collect();

        for candidate in &candidates {
            debug!("candidate {} residual={:.3e}", candidate, candidate.residual);
        }

        let best = candidates
            .iter()
            .filter(|c| c.is_finite())
            .map(|c| c.residual)
            .min_by(f64::total_cmp)
            .ok_or_else(|| ProfilingError::InferenceFailure {
                reason: "no candidate model produced a finite residual".to_string(),
            })?;

        // Centred spread, so a constant offset in every time leaves the
        // tolerance unchanged. The energy floor absorbs rounding on flat data.
        let mean = times.iter().sum::<f64>() / times.len() as f64;
        let spread: f64 = times.iter().map(|t| (t - mean).powi(2)).sum();
        let energy: f64 = times.iter().map(|t| t * t).sum();
        let threshold = best + self.tie_tolerance * spread.max(f64::EPSILON * energy);

        let model = candidates
            .iter()
            .find(|c| c.is_finite() && c.residual <= threshold)
            .copied()
            .ok_or_else(|| ProfilingError::InferenceFailure {
                reason: "tie-break found no candidate within tolerance".to_string(),
            })?;

        info!("Inferred complexity {} ({})", model.notation(), model);

        Ok(InferenceOutcome { model, candidates })
    }
}

/// Fit one class to the data points
fn fit_model(class: ComplexityClass, points: &[(f64, f64)]) -> ComplexityModel {
    let (offset, scale, parameter) = if class.is_multiplicative() {
        let transformed: Vec<(f64, f64)> = points
            .iter()
            .map(|&(n, t)| {
                let x = match class {
                    ComplexityClass::Polynomial => n.ln(),
                    _ => n,
                };
                (x, t.ln())
            })
            .collect();
        let (intercept, slope) = least_squares(&transformed);
        let parameter = match class {
            ComplexityClass::Polynomial => slope,
            _ => slope.exp(),
        };
        (0.0, intercept.exp(), Some(parameter))
    } else {
        let transformed: Vec<(f64, f64)> = points
            .iter()
            .map(|&(n, t)| (class.evaluate(n).unwrap_or(f64::NAN), t))
            .collect();
        let (intercept, slope) = least_squares(&transformed);
        (intercept, slope, None)
    };

    let mut model = ComplexityModel {
        class,
        offset,
        scale,
        parameter,
        residual: f64::NAN,
    };
    model.residual = residual_sum_of_squares(&model, points);
    model
}

/// Ordinary least squares `y = intercept + slope * x`
///
/// Returns a flat line through the mean when `x` has no spread.
fn least_squares(points: &[(f64, f64)]) -> (f64, f64) {
    let count = points.len() as f64;
    let x_mean = points.iter().map(|(x, _)| x).sum::<f64>() / count;
    let y_mean = points.iter().map(|(_, y)| y).sum::<f64>() / count;

    let mut sxx = 0.0;
    let mut sxy = 0.0;
    for &(x, y) in points {
        sxx += (x - x_mean) * (x - x_mean);
        sxy += (x - x_mean) * (y - y_mean);
    }

    if sxx == 0.0 {
        return (y_mean, 0.0);
    }

    let slope = sxy / sxx;
    (y_mean - slope * x_mean, slope)
}

fn residual_sum_of_squares(model: &ComplexityModel, points: &[(f64, f64)]) -> f64 {
    points
        .iter()
        .map(|&(n, t)| (model.predict(n) - t).powi(2))
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn infer(sizes: &[usize], f: impl Fn(f64) -> f64) -> InferenceOutcome {
        let times: Vec<f64> = sizes.iter().map(|&n| f(n as f64)).collect();
        ComplexityInferenceEngine::new().infer(sizes, &times).unwrap()
    }

    fn decades() -> Vec<usize> {
        (1..=5).map(|k| 10usize.pow(k)).collect()
    }

    fn powers_of_two(range: std::ops::RangeInclusive<u32>) -> Vec<usize> {
        range.map(|k| 1usize << k).collect()
    }

    #[test]
    fn test_complexity_class_evaluation() {
        assert_eq!(ComplexityClass::Constant.evaluate(100.0), Some(1.0));
        assert_eq!(ComplexityClass::Linear.evaluate(10.0), Some(10.0));
        assert_relative_eq!(ComplexityClass::Logarithmic.evaluate(8.0).unwrap(), 3.0);
        assert_relative_eq!(ComplexityClass::Linearithmic.evaluate(8.0).unwrap(), 24.0);
        assert_eq!(ComplexityClass::Polynomial.evaluate(8.0), None);
    }

    #[test]
    fn test_notations() {
        let notations: Vec<&str> = ComplexityClass::ALL.iter().map(|c| c.notation()).collect();
        assert_eq!(
            notations,
            ["O(1)", "O(log n)", "O(n)", "O(n log n)", "O(n^2)", "O(n^3)", "O(n^x)", "O(2^n)"]
        );
    }

    #[test]
    fn test_linear_scenario() {
        let outcome = ComplexityInferenceEngine::new()
            .infer(&[1, 2, 4, 8], &[1.0, 2.0, 4.0, 8.0])
            .unwrap();

        assert_eq!(outcome.class(), ComplexityClass::Linear);
        assert_eq!(outcome.notation(), "O(n)");
        assert_relative_eq!(outcome.model.scale, 1.0, epsilon = 1e-9);
        assert_relative_eq!(outcome.model.offset, 0.0, epsilon = 1e-9);
    }

    #[test]
    fn test_constant_offset_keeps_linear() {
        let engine = ComplexityInferenceEngine::new();
        let sizes = [1, 2, 4, 8];

        let shifted = engine
            .infer(&sizes, &[100_001.0, 100_002.0, 100_004.0, 100_008.0])
            .unwrap();
        assert_eq!(shifted.class(), ComplexityClass::Linear);
        assert_relative_eq!(shifted.model.offset, 100_000.0, max_relative = 1e-9);

        let unshifted = engine.infer(&sizes, &[1.0, 2.0, 4.0, 8.0]).unwrap();
        assert_eq!(shifted.class(), unshifted.class());
    }

    #[test]
    fn test_constant_scenario() {
        let outcome = ComplexityInferenceEngine::new()
            .infer(&[1, 2, 4, 8], &[5.0, 5.0, 5.0, 5.0])
            .unwrap();

        assert_eq!(outcome.class(), ComplexityClass::Constant);
        assert_relative_eq!(outcome.model.offset, 5.0);
    }

    #[test]
    fn test_exact_quadratic_prefers_quadratic() {
        assert_eq!(infer(&[1, 2, 4, 8], |n| n * n).class(), ComplexityClass::Quadratic);
        assert_eq!(infer(&decades(), |n| n * n * 1e-9).class(), ComplexityClass::Quadratic);
        assert_eq!(
            infer(&powers_of_two(0..=7), |n| 0.5 + 0.01 * n * n).class(),
            ComplexityClass::Quadratic
        );
    }

    #[test]
    fn test_logarithmic() {
        let outcome = infer(&powers_of_two(1..=10), |n| 3.0 + 2.0 * n.log2());
        assert_eq!(outcome.class(), ComplexityClass::Logarithmic);
        assert_relative_eq!(outcome.model.scale, 2.0, epsilon = 1e-9);
    }

    #[test]
    fn test_linearithmic() {
        let outcome = infer(&powers_of_two(1..=10), |n| n * n.log2() * 1e-6);
        assert_eq!(outcome.class(), ComplexityClass::Linearithmic);
    }

    #[test]
    fn test_linear_with_overhead() {
        let sizes: Vec<usize> = (3..=6).map(|k| 10usize.pow(k)).collect();
        assert_eq!(infer(&sizes, |n| 1e-3 + n * 1e-7).class(), ComplexityClass::Linear);
    }

    #[test]
    fn test_cubic() {
        assert_eq!(infer(&decades(), |n| n.powi(3) * 1e-12).class(), ComplexityClass::Cubic);
    }

    #[test]
    fn test_polynomial_exponent_is_fitted() {
        let outcome = infer(&decades(), |n| n.powf(2.5) * 1e-9);

        assert_eq!(outcome.class(), ComplexityClass::Polynomial);
        assert_relative_eq!(outcome.model.parameter.unwrap(), 2.5, epsilon = 1e-9);
        assert_relative_eq!(outcome.model.scale, 1e-9, max_relative = 1e-6);
    }

    #[test]
    fn test_exponential() {
        let outcome = infer(&[1, 2, 4, 8, 16], |n| 2f64.powf(n));

        assert_eq!(outcome.class(), ComplexityClass::Exponential);
        assert_relative_eq!(outcome.model.parameter.unwrap(), 2.0, epsilon = 1e-9);
    }

    #[test]
    fn test_two_sizes_still_complete() {
        let outcome = ComplexityInferenceEngine::new().infer(&[10, 100], &[1.0, 3.0]).unwrap();
        assert!(outcome.model.is_finite());
        assert_eq!(outcome.candidates.len(), ComplexityClass::ALL.len());
    }

    #[test]
    fn test_rejects_single_distinct_size() {
        let engine = ComplexityInferenceEngine::new();

        let error = engine.infer(&[10], &[1.0]).unwrap_err();
        assert!(matches!(error, ProfilingError::InsufficientSizes { found: 1, required: 2 }));

        let error = engine.infer(&[10, 10, 10], &[1.0, 1.1, 0.9]).unwrap_err();
        assert!(error.is_configuration());
    }

    #[test]
    fn test_rejects_misaligned_input() {
        let error = ComplexityInferenceEngine::new().infer(&[1, 2, 4], &[1.0, 2.0]).unwrap_err();
        assert!(matches!(error, ProfilingError::MisalignedMeasurements { sizes: 3, times: 2 }));
    }

    #[test]
    fn test_all_zero_timings_fail() {
        let error = ComplexityInferenceEngine::new()
            .infer(&[1, 2, 4, 8], &[0.0; 4])
            .unwrap_err();
        assert!(matches!(error, ProfilingError::InferenceFailure { .. }));
    }

    #[test]
    fn test_non_finite_timings_fail() {
        let error = ComplexityInferenceEngine::new()
            .infer(&[1, 2, 4, 8], &[f64::NAN, 1.0, 2.0, 3.0])
            .unwrap_err();
        assert!(matches!(error, ProfilingError::InferenceFailure { .. }));
    }

    #[test]
    fn test_non_positive_times_skip_log_models() {
        let outcome = ComplexityInferenceEngine::new()
            .infer(&[1, 2, 4, 8], &[0.0, 1.0, 3.0, 7.0])
            .unwrap();

        let polynomial = outcome
            .candidates
            .iter()
            .find(|c| c.class == ComplexityClass::Polynomial)
            .unwrap();
        assert!(!polynomial.is_finite());
        assert_eq!(outcome.class(), ComplexityClass::Linear);
    }

    #[test]
    fn test_inference_is_repeatable() {
        let sizes = [1, 10, 100, 1000];
        let times = [0.9e-6, 1.3e-5, 0.95e-4, 1.1e-3];
        let engine = ComplexityInferenceEngine::new();

        let first = engine.infer(&sizes, &times).unwrap();
        for _ in 0..10 {
            assert_eq!(engine.infer(&sizes, &times).unwrap(), first);
        }
    }

    #[test]
    fn test_restricted_candidates() {
        let engine = ComplexityInferenceEngine::new()
            .with_candidates([ComplexityClass::Cubic, ComplexityClass::Constant, ComplexityClass::Cubic]);
        let outcome = engine.infer(&[1, 2, 4, 8], &[1.0, 2.0, 4.0, 8.0]).unwrap();

        assert_eq!(outcome.candidates.len(), 2);
        assert_eq!(outcome.candidates[0].class, ComplexityClass::Constant);
        assert_eq!(outcome.class(), ComplexityClass::Cubic);
    }

    #[test]
    fn test_model_display() {
        let outcome = infer(&decades(), |n| n.powf(2.5) * 1e-9);
        assert!(outcome.model.to_string().starts_with("Polynomial: time = "));
    }
}
