//! Device tilt smoothing and the motion-permission lifecycle.

use crate::angle::wrap_pi;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum MotionPermission {
    /// Platform grants motion events without asking.
    NotRequired,
    /// Must be requested from within a user gesture.
    #[default]
    Prompt,
    Requested,
    Granted,
    /// Terminal for the session.
    Denied,
}

impl MotionPermission {
    pub fn allows_input(&self) -> bool {
        matches!(self, MotionPermission::NotRequired | MotionPermission::Granted)
    }
}

/// The two orientation channels forwarded to the renderer.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Orientation {
    /// Smoothed tilt in degrees, clamped to the wide limit.
    pub tilt: f64,
    /// Smoothed tilt clamped to the display limit and rounded to whole degrees.
    pub display: f64,
}

#[derive(Clone, Debug)]
pub struct MotionFilter {
    smoothing: f64,
    tilt_limit: f64,
    display_limit: f64,
    smoothed: f64,
}

impl MotionFilter {
    pub fn new(smoothing: f64, tilt_limit: f64, display_limit: f64) -> Self {
        Self {
            smoothing,
            tilt_limit,
            display_limit,
            smoothed: 0.0,
        }
    }

    /// Feed one acceleration-including-gravity sample.
    pub fn sample(&mut self, x: f64, y: f64) -> Orientation {
        if x.is_finite() && y.is_finite() {
            let raw = x.atan2(-y).to_degrees();
            // wrapped so the filter takes the short way past ±180°
            let delta = wrap_pi((raw - self.smoothed).to_radians()).to_degrees();
            self.smoothed = wrap_pi((self.smoothed + delta * self.smoothing).to_radians()).to_degrees();
        }
        self.orientation()
    }

    pub fn orientation(&self) -> Orientation {
        Orientation {
            tilt: self.smoothed.clamp(-self.tilt_limit, self.tilt_limit),
            display: self
                .smoothed
                .clamp(-self.display_limit, self.display_limit)
                .round(),
        }
    }
}
