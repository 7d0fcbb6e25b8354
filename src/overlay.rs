use crate::constants::*;
use crate::dom;
use spindial_core::{OnboardingStage, OnboardingView, StageFade};
use web_sys as web;

#[inline]
fn with_el(document: &web::Document, id: &str, f: impl FnOnce(&web::Element)) {
    if let Some(el) = document.get_element_by_id(id) {
        f(&el);
    }
}

/// Intro stages, action readiness and the working indicator.
pub fn apply_onboarding(document: &web::Document, view: &OnboardingView) {
    if view.stage == OnboardingStage::Entered {
        with_el(document, ONBOARDING_ID, dom::hide);
        return;
    }
    with_el(document, ONBOARDING_ID, |el| {
        dom::show(el);
        dom::set_class(el, "fading-out", view.fade == StageFade::Out);
        dom::set_class(el, "fading-in", view.fade == StageFade::In);
    });
    let tilt = view.stage == OnboardingStage::Tilt;
    with_el(document, STAGE_TILT_ID, |el| if tilt { dom::show(el) } else { dom::hide(el) });
    with_el(document, STAGE_ROTATE_ID, |el| if tilt { dom::hide(el) } else { dom::show(el) });
    with_el(document, CONTINUE_BUTTON_ID, |el| {
        dom::set_class(el, "ready", tilt && view.action_ready);
    });
    with_el(document, ENTER_BUTTON_ID, |el| {
        dom::set_class(el, "ready", !tilt && view.action_ready && !view.loading);
    });
    with_el(document, LOADING_INDICATOR_ID, |el| {
        el.set_text_content(Some(view.indicator));
        dom::set_class(el, "loading", view.loading);
    });
}

/// Blackout layer over the whole page during a set change.
pub fn set_crossfade_opacity(document: &web::Document, opacity: f32) {
    with_el(document, CROSSFADE_ID, |el| {
        let events = if opacity > 0.0 { "auto" } else { "none" };
        _ = el.set_attribute("style", &format!("opacity:{:.3};pointer-events:{}", opacity, events));
    });
}

pub fn set_muted(document: &web::Document, muted: bool) {
    with_el(document, MUTE_BUTTON_ID, |el| {
        dom::set_class(el, "muted", muted);
        _ = el.set_attribute("aria-pressed", if muted { "true" } else { "false" });
    });
}

pub fn set_active_label(document: &web::Document, name: &str) {
    with_el(document, ACTIVE_LABEL_ID, |el| el.set_text_content(Some(name)));
}
