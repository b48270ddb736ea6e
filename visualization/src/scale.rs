//! Data-to-pixel mapping
//!
//! A linear map from a data interval onto a pixel interval. Scales are fitted
//! to the finite values of a series only, and a flat domain maps every value
//! to the centre of the range.
//!
//! Copyright (c) 2025 Mohammad Atashi <mohammadaliatashi@icloud.com>

/// Maps a closed data interval linearly onto a pixel interval
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearScale {
    domain: (f64, f64),
    range: (f64, f64),
}

impl LinearScale {
    pub fn new(domain: (f64, f64), range: (f64, f64)) -> Self {
        Self { domain, range }
    }

    /// Scale covering every finite value; `None` when there is none
    pub fn fit(values: impl IntoIterator<Item = f64>, range: (f64, f64)) -> Option<Self> {
        let (low, high) = values
            .into_iter()
            .filter(|v| v.is_finite())
            .fold(None, |bounds: Option<(f64, f64)>, v| match bounds {
                Some((low, high)) => Some((low.min(v), high.max(v))),
                None => Some((v, v)),
            })?;
        Some(Self::new((low, high), range))
    }

    pub fn domain(&self) -> (f64, f64) {
        self.domain
    }

    /// Pixel position of `value`; a degenerate domain maps to the middle of the range
    pub fn map(&self, value: f64) -> f64 {
        let (d0, d1) = self.domain;
        let (r0, r1) = self.range;
        let span = d1 - d0;
        if span == 0.0 {
            return (r0 + r1) / 2.0;
        }
        r0 + (value - d0) / span * (r1 - r0)
    }
}
