use js_sys::{Function, Promise, Reflect};
use spindial_core::Platform;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys as web;

const TOUCH_UA_MARKERS: [&str; 4] = ["iPhone", "iPad", "Android", "Mobile"];

pub struct WebPlatform {
    explicit_permission: bool,
    touch_class: bool,
}

fn device_motion_class() -> Option<JsValue> {
    let window = web::window()?;
    Reflect::get(&window, &JsValue::from_str("DeviceMotionEvent"))
        .ok()
        .filter(|v| !v.is_undefined())
}

fn permission_fn(class: &JsValue) -> Option<Function> {
    Reflect::get(class, &JsValue::from_str("requestPermission"))
        .ok()
        .and_then(|f| f.dyn_into::<Function>().ok())
}

impl WebPlatform {
    pub fn detect() -> Self {
        let explicit_permission = device_motion_class()
            .as_ref()
            .and_then(permission_fn)
            .is_some();
        let touch_class = web::window()
            .map(|w| {
                let nav = w.navigator();
                let ua = nav.user_agent().unwrap_or_default();
                let touch_points = Reflect::get(&nav, &JsValue::from_str("maxTouchPoints"))
                    .ok()
                    .and_then(|v| v.as_f64())
                    .unwrap_or(0.0);
                TOUCH_UA_MARKERS.iter().any(|m| ua.contains(m)) || touch_points > 0.0
            })
            .unwrap_or(false);
        Self {
            explicit_permission,
            touch_class,
        }
    }
}

impl Platform for WebPlatform {
    fn needs_explicit_permission(&self) -> bool {
        self.explicit_permission
    }

    fn request_motion_permission(&mut self) {
        // The prompt must be opened synchronously inside the gesture; only the
        // answer is awaited.
        let promise = device_motion_class().and_then(|class| {
            let f = permission_fn(&class)?;
            f.call0(&class).ok()?.dyn_into::<Promise>().ok()
        });
        spawn_local(async move {
            let granted = match promise {
                Some(p) => match JsFuture::from(p).await {
                    Ok(v) => v.as_string().as_deref() == Some("granted"),
                    Err(e) => {
                        log::warn!("[motion] permission request failed: {:?}", e);
                        false
                    }
                },
                None => false,
            };
            crate::with_session(|s| s.motion_permission_resolved(granted));
        });
    }

    fn is_touch_class(&self) -> bool {
        self.touch_class
    }
}
