// Host-side tests for pure input functions.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod common;
mod input {
    include!("../src/input.rs");
}

use common::{advance_ms, started};
use glam::DVec2;
use input::*;
use spindial_core::selection::selected_index;
use spindial_core::Effect;
use std::f64::consts::{FRAC_PI_2, FRAC_PI_3, PI};

fn geom() -> RingGeometry {
    RingGeometry::from_rect(0.0, 0.0, 400.0, 300.0, 1.0)
}

#[test]
fn geometry_centers_in_box_and_uses_shorter_side() {
    let g = RingGeometry::from_rect(10.0, 20.0, 400.0, 300.0, 0.5);
    assert_eq!(g.center, DVec2::new(210.0, 170.0));
    assert_eq!(g.radius, 75.0);
    let local = g.local(400.0, 300.0);
    assert_eq!(local.center, DVec2::new(200.0, 150.0));
    assert_eq!(local.radius, 75.0);
}

#[test]
fn selected_item_sits_at_the_bottom() {
    let g = geom();
    let api = FRAC_PI_3;
    for i in 0..6 {
        let rotation = i as f64 * api;
        let p = item_position(&g, i, api, rotation);
        assert!((p - (g.center + DVec2::new(0.0, g.radius))).length() < 1e-9);
        assert_eq!(selected_index(rotation, 6), Some(i));
    }
}

#[test]
fn screen_angle_moves_against_rotation() {
    assert!((item_screen_angle(0, FRAC_PI_3, 0.0) - FRAC_PI_2).abs() < 1e-12);
    assert!((item_screen_angle(3, FRAC_PI_3, 0.0) - (FRAC_PI_2 + PI)).abs() < 1e-12);
    assert!((item_screen_angle(1, FRAC_PI_3, 0.5) - (FRAC_PI_2 + FRAC_PI_3 - 0.5)).abs() < 1e-12);
}

#[test]
fn hit_test_finds_nearest_item_within_radius() {
    let g = geom();
    let api = FRAC_PI_3;
    let p3 = item_position(&g, 3, api, 0.0);
    assert_eq!(item_under_pointer(&g, p3 + DVec2::new(4.0, 2.0), 6, 0.0, 36.0), Some(3));
    assert_eq!(item_under_pointer(&g, g.center, 6, 0.0, 36.0), None);
    assert_eq!(item_under_pointer(&g, p3, 0, 0.0, 36.0), None);
}

#[test]
fn ring_band_excludes_center_and_far_outside() {
    let g = geom();
    assert!(within_ring(&g, g.center + DVec2::new(g.radius, 0.0), 20.0));
    assert!(within_ring(&g, g.center + DVec2::new(0.0, g.radius - 15.0), 20.0));
    assert!(!within_ring(&g, g.center, 20.0));
    assert!(!within_ring(&g, g.center + DVec2::new(g.radius + 50.0, 0.0), 20.0));
}

#[test]
fn key_bindings() {
    assert_eq!(key_action("ArrowLeft"), Some(KeyAction::Nudge(-1)));
    assert_eq!(key_action("ArrowRight"), Some(KeyAction::Nudge(1)));
    assert_eq!(key_action("m"), Some(KeyAction::ToggleMute));
    assert_eq!(key_action("M"), Some(KeyAction::ToggleMute));
    assert_eq!(key_action("x"), None);
}

#[test]
fn wheel_delta_scales_by_mode() {
    assert_eq!(wheel_delta_px(-42.0, 0, 16.0, 600.0), -42.0);
    assert_eq!(wheel_delta_px(3.0, 1, 16.0, 600.0), 48.0);
    assert_eq!(wheel_delta_px(-1.0, 2, 16.0, 600.0), -600.0);
    assert_eq!(wheel_delta_px(5.0, 7, 16.0, 600.0), 5.0);
}

#[test]
fn line_mode_wheel_notches_reach_the_next_item() {
    let mut s = started(6);
    for _ in 0..5 {
        assert!(s.wheel(wheel_delta_px(3.0, 1, 16.0, 600.0)));
        advance_ms(&mut s, 50);
    }
    advance_ms(&mut s, 2000);
    assert!((s.view().target_rotation - FRAC_PI_3).abs() < 1e-9);
    let preloaded: Vec<usize> = s
        .drain_effects()
        .iter()
        .filter_map(|e| match e {
            Effect::Preload { index, .. } => Some(*index),
            _ => None,
        })
        .collect();
    assert_eq!(preloaded, vec![1]);
}
