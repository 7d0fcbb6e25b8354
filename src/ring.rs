use crate::constants::RING_RADIUS_FRACTION;
use crate::dom;
use crate::input::{self, RingGeometry};
use spindial_core::{Catalog, RingVisibility, ViewState};
use wasm_bindgen::JsCast;
use web_sys as web;

/// DOM nodes for the ring and its items.
pub struct RingView {
    root: web::HtmlElement,
    items: Vec<web::HtmlElement>,
}

impl RingView {
    /// Create one child per item set inside the ring element.
    pub fn build(document: &web::Document, root: web::HtmlElement, catalog: &Catalog) -> Self {
        let mut items = Vec::with_capacity(catalog.len());
        for (i, set) in catalog.iter().enumerate() {
            let Some(el) = document
                .create_element("div")
                .ok()
                .and_then(|e| e.dyn_into::<web::HtmlElement>().ok())
            else {
                log::warn!("[ring] could not create item {}", i);
                continue;
            };
            el.set_class_name("ring-item");
            _ = el.set_attribute("data-index", &i.to_string());
            el.set_text_content(Some(&set.name));
            _ = root.append_child(&el);
            items.push(el);
        }
        Self { root, items }
    }

    pub fn root(&self) -> &web::HtmlElement {
        &self.root
    }

    /// Ring geometry in page coordinates, from the element's current box.
    pub fn geometry(&self) -> RingGeometry {
        let r = self.root.get_bounding_client_rect();
        RingGeometry::from_rect(r.left(), r.top(), r.width(), r.height(), RING_RADIUS_FRACTION)
    }

    pub fn apply(&self, view: &ViewState) {
        let visible = view.ring != RingVisibility::Hidden;
        dom::set_class(&self.root, "visible", visible);
        dom::set_class(&self.root, "dragging", view.dragging);

        let Some(api) = view.angle_per_item else {
            return;
        };
        let r = self.root.get_bounding_client_rect();
        let local = self.geometry().local(r.width(), r.height());
        for (i, el) in self.items.iter().enumerate() {
            let p = input::item_position(&local, i, api, view.rotation);
            _ = el
                .style()
                .set_property("transform", &format!("translate(-50%, -50%) translate({:.1}px, {:.1}px)", p.x, p.y));
            dom::set_class(el, "selected", view.settling_index == Some(i));
            dom::set_class(el, "highlighted", view.highlighted_set == Some(i));
        }
    }
}
