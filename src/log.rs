//! Browser console logging.
//!
//! On `wasm32` the macros forward to `console.log` / `console.warn`. On the host
//! they format and drop the message, so router code can log freely and still be
//! unit-tested without a JS runtime.

#[cfg(target_arch = "wasm32")]
pub(crate) fn clog(msg: &str) {
    web_sys::console::log_1(&wasm_bindgen::JsValue::from_str(msg));
}

#[cfg(target_arch = "wasm32")]
pub(crate) fn cwarn(msg: &str) {
    web_sys::console::warn_1(&wasm_bindgen::JsValue::from_str(msg));
}

#[cfg(not(target_arch = "wasm32"))]
pub(crate) fn clog(_msg: &str) {}

#[cfg(not(target_arch = "wasm32"))]
pub(crate) fn cwarn(_msg: &str) {}

macro_rules! console_log {
    ($($arg:tt)*) => {
        $crate::log::clog(&format!($($arg)*))
    };
}

macro_rules! console_warn {
    ($($arg:tt)*) => {
        $crate::log::cwarn(&format!($($arg)*))
    };
}

pub(crate) use console_log;
pub(crate) use console_warn;
