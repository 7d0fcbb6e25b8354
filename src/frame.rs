use crate::audio;
use crate::overlay;
use crate::preload;
use crate::renderer;
use crate::App;
use instant::Instant;
use spindial_core::{AudioAsset, Effect, ViewState};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

/// Carry out everything the session queued since the last drain.
pub fn flush_effects(app: &App) {
    let effects = match app.session.try_borrow_mut() {
        Ok(mut s) => s.drain_effects(),
        Err(_) => return,
    };
    for effect in effects {
        apply_effect(app, effect);
    }
}

fn apply_effect(app: &App, effect: Effect) {
    match effect {
        Effect::FetchAudioAssets => {
            let Some(ctx) = app.session.borrow().audio().backend().context() else {
                return;
            };
            for asset in [AudioAsset::Tick, AudioAsset::Music] {
                let ctx = ctx.clone();
                spawn_local(async move {
                    let result = audio::fetch_and_decode(ctx, asset).await;
                    crate::with_session(|s| s.audio_asset_loaded(asset, result));
                });
            }
        }
        Effect::Preload { token, index, images } => {
            spawn_local(async move {
                let failed = preload::preload_images(&images).await;
                if failed > 0 {
                    log::warn!("[preload] set {}: {} of {} images failed", index, failed, images.len());
                }
                crate::with_session(|s| s.preload_complete(token));
            });
        }
        Effect::ActivateSet { index, name } => {
            log::info!("[transition] showing set {} ({})", index, name);
            renderer::show_set(&name);
            overlay::set_active_label(&app.document, &name);
        }
        Effect::RendererEnabled(enabled) => renderer::set_enabled(enabled),
        Effect::Orientation(o) => renderer::set_orientation(o),
    }
}

pub struct FrameLoop {
    app: Rc<App>,
    last_instant: Instant,
    last_view: Option<ViewState>,
}

impl FrameLoop {
    pub fn new(app: Rc<App>) -> Self {
        Self {
            app,
            last_instant: Instant::now(),
            last_view: None,
        }
    }

    /// Advance the session by the real frame time and present the result.
    /// Returns false once the session is over.
    pub fn frame(&mut self) -> bool {
        let now = Instant::now();
        let dt = now - self.last_instant;
        self.last_instant = now;

        let Some((view, alive)) = self.app.with_session(|s| {
            s.advance(dt);
            (s.view(), !s.is_torn_down())
        }) else {
            return true;
        };
        if self.last_view.as_ref() != Some(&view) {
            self.present(&view);
            self.last_view = Some(view);
        }
        alive
    }

    fn present(&self, view: &ViewState) {
        let prev = self.last_view.as_ref();
        let doc = &self.app.document;
        self.app.ring.apply(view);
        if prev.map(|p| p.overlay_opacity) != Some(view.overlay_opacity) {
            overlay::set_crossfade_opacity(doc, view.overlay_opacity);
        }
        if prev.map(|p| p.muted) != Some(view.muted) {
            overlay::set_muted(doc, view.muted);
        }
        if prev.map(|p| p.onboarding) != Some(view.onboarding) {
            overlay::apply_onboarding(doc, &view.onboarding);
        }
    }
}

pub fn start_loop(frame_loop: Rc<RefCell<FrameLoop>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        if !frame_loop.borrow_mut().frame() {
            log::info!("[frame] loop stopped");
            return;
        }
        request_frame(&tick_clone);
    }) as Box<dyn FnMut()>));
    request_frame(&tick);
}

fn request_frame(tick: &Rc<RefCell<Option<Closure<dyn FnMut()>>>>) {
    if let (Some(w), Some(cb)) = (web::window(), tick.borrow().as_ref()) {
        _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
    }
}
