#![cfg(target_arch = "wasm32")]
use spindial_core::{Catalog, Session};
use std::cell::RefCell;
use std::rc::Rc;
use std::sync::atomic::{AtomicBool, Ordering};
use wasm_bindgen::prelude::*;
use web_sys as web;

mod audio;
mod constants;
mod dom;
mod events;
mod frame;
mod input;
mod overlay;
mod platform;
mod preload;
mod renderer;
mod ring;

pub use renderer::{notify_renderer_ready, notify_zoom, register_renderer};

use audio::WebAudioBackend;
use platform::WebPlatform;

const MANIFEST: &str = include_str!("../assets/manifest.json");

pub(crate) type WebSession = Session<WebAudioBackend, WebPlatform>;

pub(crate) struct App {
    pub session: RefCell<WebSession>,
    pub document: web::Document,
    pub ring: ring::RingView,
}

impl App {
    /// Run `f` against the session, then carry out whatever it queued.
    pub fn with_session<R>(&self, f: impl FnOnce(&mut WebSession) -> R) -> Option<R> {
        let result = match self.session.try_borrow_mut() {
            Ok(mut s) => f(&mut s),
            Err(_) => {
                log::warn!("[session] busy, event dropped");
                return None;
            }
        };
        frame::flush_effects(self);
        Some(result)
    }
}

thread_local! {
    static APP: RefCell<Option<Rc<App>>> = const { RefCell::new(None) };
}

/// Session access for async completions and JS-facing exports.
pub(crate) fn with_session<R>(f: impl FnOnce(&mut WebSession) -> R) -> Option<R> {
    let app = APP.with(|slot| slot.borrow().clone())?;
    app.with_session(f)
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("spindial-web starting");

    static STARTED: AtomicBool = AtomicBool::new(false);
    if STARTED.swap(true, Ordering::SeqCst) {
        return Ok(());
    }
    if let Err(e) = init() {
        log::error!("init error: {:?}", e);
    }
    Ok(())
}

fn init() -> anyhow::Result<()> {
    let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;
    let (catalog, config) = Catalog::from_json(MANIFEST)?;
    let ring_root = dom::html_element(&document, constants::RING_ID)
        .ok_or_else(|| anyhow::anyhow!("missing #{}", constants::RING_ID))?;
    let ring = ring::RingView::build(&document, ring_root, &catalog);

    let session = Session::new(catalog, config, WebAudioBackend::default(), WebPlatform::detect());
    let app = Rc::new(App {
        session: RefCell::new(session),
        document,
        ring,
    });
    APP.with(|slot| *slot.borrow_mut() = Some(app.clone()));

    events::wire_buttons(&app);
    events::wire_ring_pointer(&app);
    events::wire_global_keydown(&app);
    events::wire_device_motion(&app);
    events::wire_pagehide(&app);

    // initial set and audio asset fetch
    frame::flush_effects(&app);
    frame::start_loop(Rc::new(RefCell::new(frame::FrameLoop::new(app))));
    Ok(())
}
