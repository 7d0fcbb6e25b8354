use glam::DVec2;
use std::f64::consts::FRAC_PI_2;

/// Ring placement in page coordinates (CSS px).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RingGeometry {
    pub center: DVec2,
    pub radius: f64,
}

impl RingGeometry {
    /// Geometry for a ring drawn inside a bounding box.
    pub fn from_rect(left: f64, top: f64, width: f64, height: f64, radius_fraction: f64) -> Self {
        let half = DVec2::new(width, height) * 0.5;
        Self {
            center: DVec2::new(left, top) + half,
            radius: half.x.min(half.y).max(0.0) * radius_fraction,
        }
    }

    /// Same geometry with the center moved to the box's own origin, for
    /// positioning children inside the ring element.
    pub fn local(&self, width: f64, height: f64) -> Self {
        Self {
            center: DVec2::new(width, height) * 0.5,
            radius: self.radius,
        }
    }
}

/// Screen angle of item `index`; the selected item sits at the bottom (y down).
#[inline]
pub fn item_screen_angle(index: usize, angle_per_item: f64, rotation: f64) -> f64 {
    FRAC_PI_2 + index as f64 * angle_per_item - rotation
}

#[inline]
pub fn item_position(geom: &RingGeometry, index: usize, angle_per_item: f64, rotation: f64) -> DVec2 {
    let a = item_screen_angle(index, angle_per_item, rotation);
    geom.center + geom.radius * DVec2::new(a.cos(), a.sin())
}

/// Nearest item within `hit_radius` of the pointer.
pub fn item_under_pointer(
    geom: &RingGeometry,
    pointer: DVec2,
    count: usize,
    rotation: f64,
    hit_radius: f64,
) -> Option<usize> {
    let api = spindial_core::angle::angle_per_item(count)?;
    (0..count)
        .map(|i| (i, item_position(geom, i, api, rotation).distance(pointer)))
        .filter(|&(_, d)| d <= hit_radius)
        .min_by(|a, b| a.1.total_cmp(&b.1))
        .map(|(i, _)| i)
}

/// Pointer is on the ring band (not the empty middle or far outside).
#[inline]
pub fn within_ring(geom: &RingGeometry, pointer: DVec2, band: f64) -> bool {
    (pointer.distance(geom.center) - geom.radius).abs() <= band
}

/// Wheel delta in CSS px for any `WheelEvent.deltaMode` (0 px, 1 lines, 2 pages).
#[inline]
pub fn wheel_delta_px(delta: f64, delta_mode: u32, line_px: f64, page_px: f64) -> f64 {
    match delta_mode {
        1 => delta * line_px,
        2 => delta * page_px,
        _ => delta,
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeyAction {
    Nudge(i32),
    ToggleMute,
}

#[inline]
pub fn key_action(key: &str) -> Option<KeyAction> {
    match key {
        "ArrowLeft" | "ArrowUp" => Some(KeyAction::Nudge(-1)),
        "ArrowRight" | "ArrowDown" => Some(KeyAction::Nudge(1)),
        "m" | "M" => Some(KeyAction::ToggleMute),
        _ => None,
    }
}
