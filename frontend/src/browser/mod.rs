//! Seams to the browser: key/value storage and the location's query string.
//! Each has a wasm32 implementation backed by `web-sys` and an in-memory one.

pub mod navigation;
pub mod storage;

#[cfg(target_arch = "wasm32")]
pub(crate) fn js_error(value: wasm_bindgen::JsValue) -> anyhow::Error {
    anyhow::anyhow!("{:?}", value)
}
