//! Eased ring rotation with snap-to-item.

use crate::angle::{angle_per_item, nearest_multiple, shortest_delta};

#[derive(Clone, Debug)]
pub struct RotationController {
    current: f64,
    target: f64,
    angle_per_item: Option<f64>,
    easing: f64,
    epsilon: f64,
    snap_threshold: f64,
}

impl RotationController {
    pub fn new(item_count: usize, easing: f64, epsilon: f64, snap_threshold: f64) -> Self {
        Self {
            current: 0.0,
            target: 0.0,
            angle_per_item: angle_per_item(item_count),
            easing,
            epsilon,
            snap_threshold,
        }
    }

    pub fn current(&self) -> f64 {
        self.current
    }

    pub fn target(&self) -> f64 {
        self.target
    }

    pub fn angle_per_item(&self) -> Option<f64> {
        self.angle_per_item
    }

    /// Place the ring at `angle` with no easing.
    pub fn jump_to(&mut self, angle: f64) {
        self.current = angle;
        self.target = angle;
    }

    pub fn set_target(&mut self, target: f64) {
        self.target = target;
    }

    /// Move the target by `delta` (positive turns the ring clockwise).
    pub fn rotate_target(&mut self, delta: f64) {
        self.target += delta;
    }

    /// One easing step. Returns the remaining distance to the target.
    pub fn step(&mut self) -> f64 {
        let diff = self.target - self.current;
        if diff.abs() < self.epsilon {
            self.current = self.target;
            return 0.0;
        }
        self.current += diff * self.easing;
        (self.target - self.current).abs()
    }

    pub fn nearest_item_angle(&self) -> Option<f64> {
        self.angle_per_item
            .map(|step| nearest_multiple(self.target, step))
    }

    pub fn snap_to_nearest(&mut self) {
        if let Some(angle) = self.nearest_item_angle() {
            self.target = angle;
        }
    }

    /// Idle snap rule: retarget only when farther than the tolerated fraction of
    /// an item from the nearest item angle.
    pub fn enforce_snap(&mut self) -> bool {
        let (Some(step), Some(nearest)) = (self.angle_per_item, self.nearest_item_angle()) else {
            return false;
        };
        if (self.target - nearest).abs() > self.snap_threshold * step {
            self.target = nearest;
            return true;
        }
        false
    }

    /// Retarget along the shortest arc to `index`'s angle.
    pub fn rotate_to_index(&mut self, index: usize) {
        if let Some(step) = self.angle_per_item {
            let diff = shortest_delta(self.target, index as f64 * step);
            self.target += diff;
        }
    }

    pub fn is_settled(&self, threshold: f64) -> bool {
        (self.target - self.current).abs() < threshold
    }
}
