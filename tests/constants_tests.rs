// Host-side tests for constants and their mathematical relationships.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}

use constants::*;
use spindial_core::constants::*;
use std::collections::HashSet;

#[test]
#[allow(clippy::assertions_on_constants)]
fn tuning_constants_are_within_reasonable_bounds() {
    assert!(EASING > 0.0 && EASING <= 1.0);
    assert!(SNAP_THRESHOLD >= 0.0 && SNAP_THRESHOLD < 0.5);
    assert!(MOTION_SMOOTHING > 0.0 && MOTION_SMOOTHING <= 1.0);
    assert!(TICK_VOLUME > 0.0 && TICK_VOLUME <= 1.0);
    assert!(MUSIC_VOLUME > 0.0 && MUSIC_VOLUME <= 1.0);
    assert!(CLICKS_PER_FULL_CIRCLE > 0);
    assert!(STEP_HZ > 0 && MAX_STEPS_PER_FRAME > 0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn constants_have_logical_relationships() {
    // current snaps onto target before a settle is detected
    assert!(EASING_EPSILON < SETTLE_THRESHOLD);
    assert!(SETTLE_THRESHOLD < SETTLE_THRESHOLD_TOUCH);

    // phones get quieter music
    assert!(MUSIC_VOLUME_TOUCH < MUSIC_VOLUME);

    // display channel is the narrower clamp
    assert!(MOTION_DISPLAY_LIMIT_DEG < MOTION_TILT_LIMIT_DEG);

    // timeout outlasts a whole crossfade
    assert!(PRELOAD_TIMEOUT_MS > FADE_TO_BLACK_MS + HOLD_MS + FADE_OUT_MS);

    // the wheel settles faster than the ring hides
    assert!(WHEEL_SETTLE_MS < RING_HIDE_DELAY_MS);
}

#[test]
fn playback_curve_constants_hit_reference_rates() {
    let rate = |x: f64| RATE_QUADRATIC * x * x + RATE_LINEAR * x + RATE_AT_ZERO;
    assert!((rate(0.0) - 0.5).abs() < 1e-12);
    assert!((rate(0.5) - 1.0).abs() < 1e-12);
    assert!((rate(1.0) - 2.0).abs() < 1e-12);
}

#[test]
fn working_indicator_starts_blank() {
    assert_eq!(WORKING_FRAMES[0], "");
    assert!(WORKING_FRAMES.windows(2).all(|w| w[0].len() < w[1].len()));
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn page_constants_are_sane() {
    assert!(RING_RADIUS_FRACTION > 0.0 && RING_RADIUS_FRACTION <= 1.0);
    assert!(ITEM_HIT_RADIUS_PX > CLICK_DRAG_THRESHOLD_PX);
    assert!(RING_HOVER_BAND_PX > 0.0);
    assert!(WHEEL_LINE_HEIGHT_PX > 0.0);

    let ids = [
        RING_ID,
        CROSSFADE_ID,
        ACTIVE_LABEL_ID,
        MUTE_BUTTON_ID,
        ONBOARDING_ID,
        STAGE_TILT_ID,
        STAGE_ROTATE_ID,
        CONTINUE_BUTTON_ID,
        ENTER_BUTTON_ID,
        LOADING_INDICATOR_ID,
    ];
    let unique: HashSet<_> = ids.iter().collect();
    assert_eq!(unique.len(), ids.len());
    assert_ne!(TICK_URL, MUSIC_URL);
}
