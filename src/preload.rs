use js_sys::{Array, Function, Promise};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys as web;

// Resolves with true on load, false on error; never rejects.
fn load_image(url: &str) -> Promise {
    Promise::new(&mut |resolve: Function, _reject: Function| {
        let img = match web::HtmlImageElement::new() {
            Ok(img) => img,
            Err(_) => {
                _ = resolve.call1(&JsValue::NULL, &JsValue::FALSE);
                return;
            }
        };
        let on_ok = resolve.clone();
        let onload = Closure::once_into_js(move || {
            _ = on_ok.call1(&JsValue::NULL, &JsValue::TRUE);
        });
        let onerror = Closure::once_into_js(move || {
            _ = resolve.call1(&JsValue::NULL, &JsValue::FALSE);
        });
        img.set_onload(Some(onload.unchecked_ref()));
        img.set_onerror(Some(onerror.unchecked_ref()));
        img.set_src(url);
    })
}

/// Load every image; failures count as loaded. Returns the failure count.
pub async fn preload_images(urls: &[String]) -> usize {
    let pending: Array = urls.iter().map(|u| JsValue::from(load_image(u))).collect();
    match JsFuture::from(Promise::all(&pending)).await {
        Ok(results) => Array::from(&results)
            .iter()
            .filter(|r| !r.is_truthy())
            .count(),
        Err(e) => {
            log::warn!("[preload] {:?}", e);
            urls.len()
        }
    }
}
