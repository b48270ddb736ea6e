//! Geometric progression of tested input sizes
//!
//! Sizes are `base^initial_order, base^(initial_order + 1), ...`, one per
//! order. Exponentiation is checked, so a progression that would exceed the
//! platform integer is reported as a configuration error instead of
//! wrapping around.
//!
//! Copyright (c) 2025 Mohammad Atashi <mohammadaliatashi@icloud.com>

use super::config::ProfilingParameters;
use super::error::ProfilingError;

/// Sizes `base^(initial_order + k)` for `k in 0..order_count`
///
/// The result is strictly increasing because `base >= 2`. A progression whose
/// largest power does not fit in `usize` is a configuration error.
pub fn size_progression(
    initial_order: u32,
    order_count: u32,
    magnitude_base: usize,
) -> Result<Vec<usize>, ProfilingError> {
    if order_count < 1 {
        return Err(ProfilingError::invalid("order_count", "must be at least 1"));
    }
    if magnitude_base < 2 {
        return Err(ProfilingError::invalid(
            "magnitude_base",
            format!("must be at least 2, got {}", magnitude_base),
        ));
    }

    (0..order_count)
        .map(|k| {
            let exponent = initial_order.checked_add(k).ok_or_else(|| {
                ProfilingError::invalid("initial_order", "exponent overflows u32")
            })?;
            magnitude_base.checked_pow(exponent).ok_or_else(|| {
                ProfilingError::invalid(
                    "order_count",
                    format!("{}^{} overflows the platform integer", magnitude_base, exponent),
                )
            })
        })
        .collect()
}

impl ProfilingParameters {
    /// Tested sizes for these parameters
    pub fn sizes(&self) -> Result<Vec<usize>, ProfilingError> {
        size_progression(self.initial_order, self.order_count, self.magnitude_base)
    }
}
