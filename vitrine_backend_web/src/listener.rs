// Copyright 2026 the Vitrine Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Event listeners and intersection observers that live as long as the page.

use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use web_sys::{
    Event, EventTarget, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit,
};

use vitrine_core::reveal::IntersectionSample;

/// Adds a listener for `event` on `target`.
///
/// There is no removal: the closure is leaked to the page.
pub(crate) fn listen(
    target: &EventTarget,
    event: &str,
    handler: impl FnMut(Event) + 'static,
) -> Result<(), JsValue> {
    let closure = Closure::<dyn FnMut(Event)>::new(handler);
    target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}

/// Creates an `IntersectionObserver` that calls `on_entry` for every entry
/// it reports.
///
/// `root_margin` of `None` keeps the browser default.
pub(crate) fn observe(
    threshold: f64,
    root_margin: Option<&str>,
    mut on_entry: impl FnMut(&IntersectionObserver, &IntersectionObserverEntry) + 'static,
) -> Result<IntersectionObserver, JsValue> {
    let callback = Closure::<dyn FnMut(js_sys::Array, IntersectionObserver)>::new(
        move |entries: js_sys::Array, observer: IntersectionObserver| {
            for entry in entries.iter() {
                let entry: IntersectionObserverEntry = entry.unchecked_into();
                on_entry(&observer, &entry);
            }
        },
    );

    let init = IntersectionObserverInit::new();
    init.set_threshold(&JsValue::from_f64(threshold));
    if let Some(margin) = root_margin {
        init.set_root_margin(margin);
    }
    let observer =
        IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)?;
    callback.forget();
    Ok(observer)
}

/// Converts an observer entry to the core sample type.
///
/// `rootBounds` is null for cross-origin roots; the element is then treated
/// as fitting.
pub(crate) fn sample(entry: &IntersectionObserverEntry) -> IntersectionSample {
    IntersectionSample::new(entry.is_intersecting(), entry.intersection_ratio()).within(
        entry.bounding_client_rect().height(),
        entry.root_bounds().map(|root| root.height()),
    )
}
