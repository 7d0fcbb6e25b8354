use crate::input::{key_action, KeyAction};
use crate::App;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub fn handle_global_keydown(ev: &web::KeyboardEvent, app: &App) {
    if ev.repeat() && ev.key().eq_ignore_ascii_case("m") {
        return;
    }
    let Some(action) = key_action(&ev.key()) else {
        return;
    };
    let handled = app
        .with_session(|s| match action {
            KeyAction::Nudge(steps) => s.nudge(steps),
            KeyAction::ToggleMute => {
                s.toggle_mute();
                true
            }
        })
        .unwrap_or(false);
    if handled {
        ev.prevent_default();
    }
}

pub fn wire_global_keydown(app: &Rc<App>) {
    let a = app.clone();
    let closure = Closure::wrap(Box::new(move |ev: web::KeyboardEvent| {
        handle_global_keydown(&ev, &a);
    }) as Box<dyn FnMut(_)>);
    if let Some(window) = web::window() {
        _ = window.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
    }
    closure.forget();
}
