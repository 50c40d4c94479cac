//! Notification collaborator.

use wasm_bindgen::JsValue;

/// Fire-and-forget success notification.
///
/// The host shell decides how these surface; the client only emits them
/// through the console.
pub fn success(message: &str) {
    web_sys::console::info_1(&JsValue::from_str(message));
}
