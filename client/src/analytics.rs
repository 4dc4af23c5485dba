use js_sys::{Function, Reflect};
use wasm_bindgen::{JsCast, JsValue};

/// Report a page view to the page's `ga` command queue, if one is loaded.
pub fn page_view(path: &str) {
    let Some(window) = web_sys::window() else {
        return;
    };
    if let Ok(ga) = Reflect::get(window.as_ref(), &JsValue::from_str("ga"))
        && let Ok(ga) = ga.dyn_into::<Function>()
    {
        let sent = ga.call3(
            &JsValue::NULL,
            &JsValue::from_str("send"),
            &JsValue::from_str("pageview"),
            &JsValue::from_str(path),
        );
        if sent.is_ok() {
            return;
        }
    }
    web_sys::console::info_1(&format!("pageview {path} (analytics not loaded)").into());
}
