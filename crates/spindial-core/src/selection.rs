//! Maps ring rotation to the selected item.

use crate::angle::{angle_per_item, normalize};

/// `round(normalize(rotation) / anglePerItem) mod N`; `None` for an empty ring.
pub fn selected_index(rotation: f64, count: usize) -> Option<usize> {
    let step = angle_per_item(count)?;
    let slot = (normalize(rotation) / step).round() as usize;
    Some(slot % count)
}

/// Two projections of the same ring: what is under the marker right now
/// (`current`) and what the ring is settling toward (`target`).
#[derive(Clone, Copy, Debug)]
pub struct SelectionResolver {
    count: usize,
    settle_threshold: f64,
}

impl SelectionResolver {
    pub fn new(count: usize, settle_threshold: f64) -> Self {
        Self {
            count,
            settle_threshold,
        }
    }

    pub fn count(&self) -> usize {
        self.count
    }

    pub fn current_index(&self, rotation_current: f64) -> Option<usize> {
        selected_index(rotation_current, self.count)
    }

    pub fn settling_index(&self, rotation_target: f64) -> Option<usize> {
        selected_index(rotation_target, self.count)
    }

    /// The settled index once both projections agree within the settle threshold.
    pub fn settled_index(&self, rotation_current: f64, rotation_target: f64) -> Option<usize> {
        if (rotation_target - rotation_current).abs() >= self.settle_threshold {
            return None;
        }
        self.settling_index(rotation_target)
    }
}
