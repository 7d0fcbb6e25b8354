// Shared interaction/audio tuning constants. `EngineConfig::default()` is built
// from these; a manifest may override any of them at runtime.

// Rotation
pub const EASING: f64 = 0.12; // fraction of the remaining distance covered per step
pub const EASING_EPSILON: f64 = 1e-4; // radians; below this current snaps onto target
pub const SNAP_THRESHOLD: f64 = 0.1; // fraction of an item's angle tolerated while idle

// Fixed-rate stepping
pub const STEP_HZ: u32 = 60;
pub const MAX_STEPS_PER_FRAME: u32 = 8; // catch-up bound after a stalled frame

// Gestures
pub const CLICK_DRAG_THRESHOLD_PX: f64 = 5.0;
pub const TIE_BREAK_EPSILON: f64 = 0.001; // radians around an exact half turn
pub const WHEEL_RADIANS_PER_PIXEL: f64 = 0.0025;
pub const WHEEL_SETTLE_MS: u64 = 180;
pub const WHEEL_MAX_DELTA_PX: f64 = 400.0; // per event

// Selection settle thresholds (radians)
pub const SETTLE_THRESHOLD: f64 = 0.01;
pub const SETTLE_THRESHOLD_TOUCH: f64 = 0.02; // absorbs touch event-timing jitter

// Ring visibility
pub const RING_HIDE_DELAY_MS: u64 = 1200;

// Tick audio
pub const CLICKS_PER_FULL_CIRCLE: u32 = 24;
pub const TICK_VOLUME: f32 = 1.0;
pub const MAX_AUDIBLE_TICKS_PER_STEP: u32 = 4; // crossings beyond this are counted but silent

// Background music
pub const MUSIC_VOLUME: f32 = 0.5;
pub const MUSIC_VOLUME_TOUCH: f32 = 0.3; // phone speakers clip early

// Zoom -> playback rate quadratic, calibrated 0 -> 0.5x, 0.5 -> 1x, 1 -> 2x
pub const RATE_QUADRATIC: f64 = 1.0;
pub const RATE_LINEAR: f64 = 0.5;
pub const RATE_AT_ZERO: f64 = 0.5;

// Transition phases
pub const FADE_TO_BLACK_MS: u64 = 400;
pub const HOLD_MS: u64 = 200;
pub const FADE_OUT_MS: u64 = 800;
pub const PRELOAD_TIMEOUT_MS: u64 = 6000;

// Onboarding
pub const MIN_LOADING_MS: u64 = 1000;
pub const STAGE_ACTION_DELAY_MS: u64 = 1200;
pub const STAGE_FADE_MS: u64 = 400;
pub const WORKING_FRAME_MS: u64 = 350;
pub const WORKING_FRAMES: [&str; 4] = ["", ".", "..", "..."];

// Device motion
pub const MOTION_SMOOTHING: f64 = 0.05;
pub const MOTION_TILT_LIMIT_DEG: f64 = 90.0;
pub const MOTION_DISPLAY_LIMIT_DEG: f64 = 60.0;
