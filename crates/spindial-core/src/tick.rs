//! Mechanical-dial click detection on the settling rotation.

use std::f64::consts::{FRAC_PI_2, TAU};

#[derive(Clone, Debug)]
pub struct TickSynchronizer {
    angle_per_click: f64,
    last_index: Option<i64>,
}

impl TickSynchronizer {
    pub fn new(clicks_per_full_circle: u32) -> Self {
        Self {
            angle_per_click: TAU / clicks_per_full_circle.max(1) as f64,
            last_index: None,
        }
    }

    pub fn angle_per_click(&self) -> f64 {
        self.angle_per_click
    }

    /// Boundary index of `rotation`, with index 0 starting at the selection
    /// marker. Computed on the unbounded angle so a wrap past 2π is just
    /// another crossing; reduced mod the click count it equals the normalized
    /// index.
    pub fn click_index(&self, rotation: f64) -> i64 {
        ((rotation - FRAC_PI_2) / self.angle_per_click).floor() as i64
    }

    /// Seed the last index so the next observation only reports real crossings.
    pub fn reset(&mut self, rotation: f64) {
        self.last_index = Some(self.click_index(rotation));
    }

    /// Number of boundaries crossed since the previous observation, in either
    /// direction. The first observation only initializes state.
    pub fn observe(&mut self, rotation: f64) -> u32 {
        let index = self.click_index(rotation);
        let crossed = match self.last_index {
            Some(last) => (index - last).unsigned_abs() as u32,
            None => 0,
        };
        self.last_index = Some(index);
        crossed
    }
}
