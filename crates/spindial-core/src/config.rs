//! Runtime tuning for the engine.
//!
//! Every field defaults to the matching value in [`crate::constants`]. The
//! manifest may carry a partial `config` object; missing fields keep their
//! defaults.

use crate::constants::*;
use crate::error::ConfigError;
use serde::Deserialize;
use std::time::Duration;

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub easing: f64,
    pub easing_epsilon: f64,
    pub snap_threshold: f64,
    pub step_hz: u32,
    pub max_steps_per_frame: u32,

    pub click_drag_threshold_px: f64,
    pub wheel_radians_per_pixel: f64,
    pub wheel_settle_ms: u64,
    pub settle_threshold: f64,
    pub settle_threshold_touch: f64,
    pub ring_hide_delay_ms: u64,

    pub clicks_per_full_circle: u32,
    pub tick_volume: f32,
    pub music_volume: f32,
    pub music_volume_touch: f32,

    pub fade_to_black_ms: u64,
    pub hold_ms: u64,
    pub fade_out_ms: u64,
    pub preload_timeout_ms: u64,

    pub min_loading_ms: u64,
    pub stage_action_delay_ms: u64,
    pub stage_fade_ms: u64,
    pub working_frame_ms: u64,

    pub motion_smoothing: f64,
    pub motion_tilt_limit_deg: f64,
    pub motion_display_limit_deg: f64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            easing: EASING,
            easing_epsilon: EASING_EPSILON,
            snap_threshold: SNAP_THRESHOLD,
            step_hz: STEP_HZ,
            max_steps_per_frame: MAX_STEPS_PER_FRAME,
            click_drag_threshold_px: CLICK_DRAG_THRESHOLD_PX,
            wheel_radians_per_pixel: WHEEL_RADIANS_PER_PIXEL,
            wheel_settle_ms: WHEEL_SETTLE_MS,
            settle_threshold: SETTLE_THRESHOLD,
            settle_threshold_touch: SETTLE_THRESHOLD_TOUCH,
            ring_hide_delay_ms: RING_HIDE_DELAY_MS,
            clicks_per_full_circle: CLICKS_PER_FULL_CIRCLE,
            tick_volume: TICK_VOLUME,
            music_volume: MUSIC_VOLUME,
            music_volume_touch: MUSIC_VOLUME_TOUCH,
            fade_to_black_ms: FADE_TO_BLACK_MS,
            hold_ms: HOLD_MS,
            fade_out_ms: FADE_OUT_MS,
            preload_timeout_ms: PRELOAD_TIMEOUT_MS,
            min_loading_ms: MIN_LOADING_MS,
            stage_action_delay_ms: STAGE_ACTION_DELAY_MS,
            stage_fade_ms: STAGE_FADE_MS,
            working_frame_ms: WORKING_FRAME_MS,
            motion_smoothing: MOTION_SMOOTHING,
            motion_tilt_limit_deg: MOTION_TILT_LIMIT_DEG,
            motion_display_limit_deg: MOTION_DISPLAY_LIMIT_DEG,
        }
    }
}

impl EngineConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.easing > 0.0 && self.easing <= 1.0) {
            return Err(ConfigError::Easing(self.easing));
        }
        if !(0.0..0.5).contains(&self.snap_threshold) {
            return Err(ConfigError::SnapThreshold(self.snap_threshold));
        }
        if self.clicks_per_full_circle == 0 {
            return Err(ConfigError::ClicksPerRevolution);
        }
        if !(self.motion_smoothing > 0.0 && self.motion_smoothing <= 1.0) {
            return Err(ConfigError::MotionSmoothing(self.motion_smoothing));
        }
        let positive = [
            ("easing_epsilon", self.easing_epsilon),
            ("step_hz", self.step_hz as f64),
            ("max_steps_per_frame", self.max_steps_per_frame as f64),
            ("click_drag_threshold_px", self.click_drag_threshold_px),
            ("settle_threshold", self.settle_threshold),
            ("settle_threshold_touch", self.settle_threshold_touch),
            ("working_frame_ms", self.working_frame_ms as f64),
        ];
        for (name, value) in positive {
            if value <= 0.0 {
                return Err(ConfigError::NotPositive { name, value });
            }
        }
        Ok(())
    }

    pub fn step_duration(&self) -> Duration {
        Duration::from_secs_f64(1.0 / self.step_hz.max(1) as f64)
    }

    pub fn settle_threshold_for(&self, touch_class: bool) -> f64 {
        if touch_class {
            self.settle_threshold_touch
        } else {
            self.settle_threshold
        }
    }

    pub fn music_volume_for(&self, touch_class: bool) -> f32 {
        if touch_class {
            self.music_volume_touch
        } else {
            self.music_volume
        }
    }

    /// Sum of the three timed crossfade phases.
    pub fn crossfade_duration(&self) -> Duration {
        Duration::from_millis(self.fade_to_black_ms + self.hold_ms + self.fade_out_ms)
    }
}
