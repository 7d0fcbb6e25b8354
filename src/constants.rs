// Page wiring and ring geometry for the web front-end.
//
// Engine tuning lives in `spindial_core::constants`; these values only
// describe how the page is laid out and where assets are served from.

// Element ids expected in index.html
pub const RING_ID: &str = "ring";
pub const CROSSFADE_ID: &str = "crossfade";
pub const ACTIVE_LABEL_ID: &str = "active-set";
pub const MUTE_BUTTON_ID: &str = "mute-button";
pub const ONBOARDING_ID: &str = "onboarding";
pub const STAGE_TILT_ID: &str = "stage-tilt";
pub const STAGE_ROTATE_ID: &str = "stage-rotate";
pub const CONTINUE_BUTTON_ID: &str = "onboarding-continue";
pub const ENTER_BUTTON_ID: &str = "onboarding-enter";
pub const LOADING_INDICATOR_ID: &str = "loading-indicator";

// Audio assets, relative to the page
pub const TICK_URL: &str = "assets/tick.mp3";
pub const MUSIC_URL: &str = "assets/music.mp3";

// Ring radius as a fraction of the ring element's shorter side (half-extent)
pub const RING_RADIUS_FRACTION: f64 = 0.82;

// Pointer hit radius around each item center (CSS px)
pub const ITEM_HIT_RADIUS_PX: f64 = 36.0;

// Band around the ring circle that counts as hovering the ring (CSS px)
pub const RING_HOVER_BAND_PX: f64 = 56.0;
pub const WHEEL_LINE_HEIGHT_PX: f64 = 16.0; // DOM_DELTA_LINE scale
