//! Bridge to the external deep-zoom renderer.
//!
//! The renderer registers a plain JS object; every method on it is optional.
//! The last state pushed is remembered so a late registration catches up.

use js_sys::{Array, Function, Reflect};
use spindial_core::Orientation;
use std::cell::RefCell;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

#[derive(Default)]
struct Bridge {
    target: Option<JsValue>,
    enabled: Option<bool>,
    set_name: Option<String>,
    orientation: Option<Orientation>,
}

thread_local! {
    static BRIDGE: RefCell<Bridge> = RefCell::new(Bridge::default());
}

fn call(method: &str, args: &[JsValue]) {
    // cloned out so the renderer may call back into us synchronously
    let Some(target) = BRIDGE.with(|b| b.borrow().target.clone()) else {
        return;
    };
    let Some(f) = Reflect::get(&target, &JsValue::from_str(method))
        .ok()
        .and_then(|f| f.dyn_into::<Function>().ok())
    else {
        return;
    };
    let args: Array = args.iter().collect();
    if let Err(e) = f.apply(&target, &args) {
        log::warn!("[renderer] {} failed: {:?}", method, e);
    }
}

pub fn set_enabled(enabled: bool) {
    BRIDGE.with(|b| b.borrow_mut().enabled = Some(enabled));
    call("setEnabled", &[JsValue::from_bool(enabled)]);
}

pub fn set_orientation(o: Orientation) {
    BRIDGE.with(|b| b.borrow_mut().orientation = Some(o));
    call("setOrientation", &[JsValue::from_f64(o.tilt), JsValue::from_f64(o.display)]);
}

pub fn show_set(name: &str) {
    BRIDGE.with(|b| b.borrow_mut().set_name = Some(name.to_string()));
    call("showSet", &[JsValue::from_str(name)]);
}

#[wasm_bindgen]
pub fn register_renderer(target: JsValue) {
    let (enabled, set_name, orientation) = BRIDGE.with(|b| {
        let mut b = b.borrow_mut();
        b.target = Some(target);
        (b.enabled, b.set_name.clone(), b.orientation)
    });
    log::info!("[renderer] registered");
    if let Some(name) = set_name {
        show_set(&name);
    }
    if let Some(enabled) = enabled {
        set_enabled(enabled);
    }
    if let Some(o) = orientation {
        set_orientation(o);
    }
}

/// The renderer has produced its first frame.
#[wasm_bindgen]
pub fn notify_renderer_ready() {
    crate::with_session(|s| s.renderer_ready());
}

/// Current zoom exponent and the bounds it moves between.
#[wasm_bindgen]
pub fn notify_zoom(exponent: f64, min: f64, max: f64) {
    crate::with_session(|s| s.zoom_changed(exponent, min, max));
}
