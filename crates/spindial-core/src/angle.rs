//! Angle helpers shared by the ring, gesture and tick logic.
//!
//! All angles are `f64` radians. Ring rotation is unbounded; these helpers are
//! the only place wrap-around is handled.

use crate::constants::TIE_BREAK_EPSILON;
use std::f64::consts::{PI, TAU};

/// Wrap into `[0, 2π)`.
#[inline]
pub fn normalize(angle: f64) -> f64 {
    let a = angle.rem_euclid(TAU);
    // rem_euclid can round up to exactly TAU for tiny negative inputs
    if a >= TAU {
        0.0
    } else {
        a
    }
}

/// Wrap into `[-π, π)`.
#[inline]
pub fn wrap_pi(angle: f64) -> f64 {
    normalize(angle + PI) - PI
}

#[inline]
pub fn nearest_multiple(angle: f64, step: f64) -> f64 {
    if step <= 0.0 {
        return angle;
    }
    (angle / step).round() * step
}

/// Signed shortest rotation from `from` to `to`.
///
/// An exactly opposite target (within [`TIE_BREAK_EPSILON`]) always resolves to
/// the positive direction so repeated clicks never alternate.
#[inline]
pub fn shortest_delta(from: f64, to: f64) -> f64 {
    let d = wrap_pi(to - from);
    if (d.abs() - PI).abs() < TIE_BREAK_EPSILON {
        PI
    } else {
        d
    }
}

#[inline]
pub fn angle_per_item(count: usize) -> Option<f64> {
    (count > 0).then(|| TAU / count as f64)
}
