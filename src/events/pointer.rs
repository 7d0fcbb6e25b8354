use crate::constants::{ITEM_HIT_RADIUS_PX, RING_HOVER_BAND_PX, WHEEL_LINE_HEIGHT_PX};
use crate::dom;
use crate::input;
use crate::App;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

fn listen<E: wasm_bindgen::convert::FromWasmAbi + 'static>(
    target: &web::HtmlElement,
    event: &str,
    handler: impl FnMut(E) + 'static,
) {
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(E)>);
    _ = target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref());
    closure.forget();
}

fn on_pointer_down(ev: &web::PointerEvent, app: &App) {
    let geom = app.ring.geometry();
    let pos = dom::pointer_position(ev);
    let accepted = app
        .with_session(|s| {
            let view = s.view();
            let candidate = input::item_under_pointer(
                &geom,
                pos,
                view.item_count,
                view.rotation,
                ITEM_HIT_RADIUS_PX,
            );
            s.pointer_down(ev.pointer_id(), pos, geom.center, candidate)
        })
        .unwrap_or(false);
    if accepted {
        _ = app.ring.root().set_pointer_capture(ev.pointer_id());
        ev.prevent_default();
    }
}

fn on_pointer_move(ev: &web::PointerEvent, app: &App) {
    let geom = app.ring.geometry();
    let pos = dom::pointer_position(ev);
    app.with_session(|s| {
        s.pointer_move(ev.pointer_id(), pos, geom.center);
        if ev.pointer_type() == "mouse" {
            s.hover(input::within_ring(&geom, pos, RING_HOVER_BAND_PX));
        }
    });
}

fn on_pointer_end(ev: &web::PointerEvent, app: &App, cancelled: bool) {
    let outcome = app.with_session(|s| {
        if cancelled {
            s.pointer_cancel(ev.pointer_id())
        } else {
            s.pointer_up(ev.pointer_id())
        }
    });
    if outcome.flatten().is_some() {
        let root = app.ring.root();
        if root.has_pointer_capture(ev.pointer_id()) {
            _ = root.release_pointer_capture(ev.pointer_id());
        }
    }
}

/// Pointer, hover and wheel input on the ring element.
pub fn wire_ring_pointer(app: &Rc<App>) {
    let root = app.ring.root().clone();

    let a = app.clone();
    listen(&root, "pointerdown", move |ev: web::PointerEvent| on_pointer_down(&ev, &a));
    let a = app.clone();
    listen(&root, "pointermove", move |ev: web::PointerEvent| on_pointer_move(&ev, &a));
    let a = app.clone();
    listen(&root, "pointerup", move |ev: web::PointerEvent| on_pointer_end(&ev, &a, false));
    let a = app.clone();
    listen(&root, "pointercancel", move |ev: web::PointerEvent| on_pointer_end(&ev, &a, true));
    let a = app.clone();
    listen(&root, "pointerleave", move |ev: web::PointerEvent| {
        if ev.pointer_type() == "mouse" {
            a.with_session(|s| s.hover(false));
        }
    });
    let a = app.clone();
    listen(&root, "wheel", move |ev: web::WheelEvent| {
        let page_px = f64::from(a.ring.root().client_height());
        let delta = input::wheel_delta_px(ev.delta_y(), ev.delta_mode(), WHEEL_LINE_HEIGHT_PX, page_px);
        if a.with_session(|s| s.wheel(delta)).unwrap_or(false) {
            ev.prevent_default();
        }
    });
}
