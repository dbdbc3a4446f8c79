//! WASM module entry point and console reporting.

use wasm_bindgen::prelude::*;

/// Initialize panic hook for better error messages.
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
}

/// Report an error to the browser console.
pub fn report(err: &JsValue) {
    tracing::error!(error = ?err, "selectkit");
    web_sys::console::error_1(err);
}

/// Convert any displayable error into a `JsValue`.
pub fn to_js(err: impl std::fmt::Display) -> JsValue {
    JsValue::from_str(&err.to_string())
}
