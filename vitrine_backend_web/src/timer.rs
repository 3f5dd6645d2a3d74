// Copyright 2026 the Vitrine Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Fire-and-forget timers.
//!
//! Every continuation on the page is one-shot and cannot be cancelled, so the
//! callbacks are handed to the browser with [`Closure::once_into_js`], which
//! frees the closure after it runs.

use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;

use vitrine_core::time::Millis;

// Direct global bindings instead of `web_sys::Window` methods; avoids
// fetching (and unwrapping) the Window object for every timer.
#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_name = "setTimeout")]
    fn set_timeout(handler: &JsValue, timeout: i32) -> i32;

    #[wasm_bindgen(js_name = "requestAnimationFrame")]
    fn request_animation_frame(callback: &JsValue) -> i32;
}

/// Runs `f` once after `delay`.
pub(crate) fn after(delay: Millis, f: impl FnOnce() + 'static) {
    let callback = Closure::once_into_js(f);
    set_timeout(&callback, delay.as_timeout());
}

/// Runs `f` once on the next animation frame.
pub(crate) fn next_frame(f: impl FnOnce() + 'static) {
    let callback = Closure::once_into_js(f);
    request_animation_frame(&callback);
}
