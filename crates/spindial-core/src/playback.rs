//! Zoom level to background-music playback rate.

use crate::constants::{RATE_AT_ZERO, RATE_LINEAR, RATE_QUADRATIC};

/// Declared bounds of the renderer's zoom exponent.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ZoomRange {
    pub min: f64,
    pub max: f64,
}

impl ZoomRange {
    pub fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Position of `exponent` within the range, clamped to \[0, 1\]. A
    /// degenerate range maps everything to the midpoint.
    pub fn normalize(&self, exponent: f64) -> f64 {
        let span = self.max - self.min;
        if span == 0.0 || !span.is_finite() {
            return 0.5;
        }
        ((exponent - self.min) / span).clamp(0.0, 1.0)
    }
}

/// `A·x² + B·x + C`: 0 → 0.5×, 0.5 → 1×, 1 → 2×.
#[inline]
pub fn rate_for_normalized(x: f64) -> f64 {
    RATE_QUADRATIC * x * x + RATE_LINEAR * x + RATE_AT_ZERO
}

#[inline]
pub fn playback_rate(exponent: f64, range: ZoomRange) -> f64 {
    rate_for_normalized(range.normalize(exponent))
}
