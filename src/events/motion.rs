use crate::App;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Feed gravity samples to the tilt filter. Samples arriving before the
/// permission is granted still warm up the filter but are not forwarded.
pub fn wire_device_motion(app: &Rc<App>) {
    let a = app.clone();
    let closure = Closure::wrap(Box::new(move |ev: web::DeviceMotionEvent| {
        let Some(g) = ev.acceleration_including_gravity() else {
            return;
        };
        if let (Some(x), Some(y)) = (g.x(), g.y()) {
            a.with_session(|s| s.motion_sample(x, y));
        }
    }) as Box<dyn FnMut(_)>);
    if let Some(window) = web::window() {
        _ = window.add_event_listener_with_callback("devicemotion", closure.as_ref().unchecked_ref());
    }
    closure.forget();
}
