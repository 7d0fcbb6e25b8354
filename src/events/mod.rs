mod keyboard;
mod motion;
mod pointer;

pub use keyboard::wire_global_keydown;
pub use motion::wire_device_motion;
pub use pointer::wire_ring_pointer;

use crate::constants::{CONTINUE_BUTTON_ID, ENTER_BUTTON_ID, MUTE_BUTTON_ID};
use crate::dom;
use crate::App;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Onboarding buttons and the mute toggle.
pub fn wire_buttons(app: &Rc<App>) {
    let a = app.clone();
    dom::add_click_listener(&app.document, CONTINUE_BUTTON_ID, move || {
        a.with_session(|s| s.onboarding_continue());
    });
    // permission prompt and audio resume must happen inside this click
    let a = app.clone();
    dom::add_click_listener(&app.document, ENTER_BUTTON_ID, move || {
        a.with_session(|s| s.enter());
    });
    let a = app.clone();
    dom::add_click_listener(&app.document, MUTE_BUTTON_ID, move || {
        a.with_session(|s| s.toggle_mute());
    });
}

/// Tear the session down when the page goes away.
pub fn wire_pagehide(app: &Rc<App>) {
    let a = app.clone();
    let closure = Closure::wrap(Box::new(move |_ev: web::Event| {
        a.with_session(|s| s.teardown());
    }) as Box<dyn FnMut(_)>);
    if let Some(window) = web::window() {
        _ = window.add_event_listener_with_callback("pagehide", closure.as_ref().unchecked_ref());
    }
    closure.forget();
}
