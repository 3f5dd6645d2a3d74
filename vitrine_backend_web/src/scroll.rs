// Copyright 2026 the Vitrine Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Anchor scrolling and deep-link correction.

use alloc::rc::Rc;

use vitrine_core::scroll::{ScrollMotion, ScrollPlanner, ScrollRequest};
use vitrine_core::trace::ScrollToEvent;
use wasm_bindgen::JsValue;
use web_sys::{Document, HtmlElement, ScrollBehavior, ScrollToOptions, Window};

use crate::dom;
use crate::listener::listen;
use crate::page::{PageContext, SharedTracer};
use crate::timer;

fn offset_top(document: &Document, selector: &str) -> Option<f64> {
    dom::query(document, selector).map(|el| f64::from(el.offset_top()))
}

fn scroll_to(window: &Window, tracer: &SharedTracer, request: ScrollRequest) {
    let options = ScrollToOptions::new();
    options.set_top(request.top);
    options.set_behavior(match request.motion {
        ScrollMotion::Smooth => ScrollBehavior::Smooth,
        ScrollMotion::Auto => ScrollBehavior::Auto,
    });
    window.scroll_to_with_scroll_to_options(&options);
    tracer.borrow_mut().scroll_to(&ScrollToEvent { request });
}

/// Intercepts clicks on in-page anchors and scrolls their target below the
/// header.
///
/// Clicks on anchors whose target does not resolve are left to the browser.
pub(crate) fn install(ctx: &PageContext) -> Result<(), JsValue> {
    let planner = ScrollPlanner::new(&ctx.config.scroll);
    let header: Option<HtmlElement> = dom::query_first(&ctx.document, &ctx.config.landmarks.header);

    for anchor in dom::query_all(&ctx.document, ctx.config.scroll.anchors) {
        let link = anchor.clone();
        let header = header.clone();
        let window = ctx.window.clone();
        let document = ctx.document.clone();
        let tracer = Rc::clone(&ctx.tracer);
        listen(&anchor, "click", move |event| {
            let href = link.get_attribute("href").unwrap_or_default();
            // Header height is read per click; it changes across breakpoints.
            let header_height = dom::height_of(header.as_ref());
            let Some(request) =
                planner.plan_click(&href, header_height, |sel| offset_top(&document, sel))
            else {
                return;
            };
            event.prevent_default();
            scroll_to(&window, &tracer, request);
        })?;
    }
    Ok(())
}

/// Shortly after load, re-scrolls a page opened at `#fragment` so the
/// target sits below the header.
pub(crate) fn correct_deep_link(ctx: &PageContext) {
    let planner = ScrollPlanner::new(&ctx.config.scroll);
    let header = dom::query_first(&ctx.document, &ctx.config.landmarks.header);
    let window = ctx.window.clone();
    let document = ctx.document.clone();
    let tracer = Rc::clone(&ctx.tracer);
    timer::after(ctx.config.scroll.deep_link_delay, move || {
        let hash = window.location().hash().unwrap_or_default();
        let header_height = dom::height_of(header.as_ref());
        if let Some(request) =
            planner.plan_deep_link(&hash, header_height, |sel| offset_top(&document, sel))
        {
            scroll_to(&window, &tracer, request);
        }
    });
}
