// Copyright 2026 the Vitrine Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Hero parallax and header-overlap wiring.
//!
//! One [`HeroCoordinator`] serves both behaviors. Resize and orientation
//! changes recompute both from a single measurement; scroll events re-read
//! the viewport width before writing a transform.

use alloc::rc::Rc;
use core::cell::RefCell;

use vitrine_core::hero::{HeroCoordinator, HeroMetrics};
use vitrine_core::style::{StyleTarget as _, parse_css_px};
use vitrine_core::trace::{ParallaxEvent, ViewportEvent};
use wasm_bindgen::JsValue;
use web_sys::{HtmlElement, Window};

use crate::dom::{self, DomElement};
use crate::listener::listen;
use crate::page::PageContext;

/// Applies the initial hero layout and keeps it current.
pub(crate) fn install(ctx: &PageContext) -> Result<(), JsValue> {
    let config = &ctx.config;
    let Some(hero) = dom::query(&ctx.document, config.landmarks.hero) else {
        return Ok(());
    };
    let hero = DomElement::new(hero);
    let header = dom::query_first(&ctx.document, &config.landmarks.header);
    let coordinator = Rc::new(RefCell::new(HeroCoordinator::new(
        config.breakpoint,
        &config.parallax,
        &config.hero_offset,
    )));

    let recompute: Rc<dyn Fn()> = {
        let window = ctx.window.clone();
        let hero = hero.clone();
        let coordinator = Rc::clone(&coordinator);
        let tracer = Rc::clone(&ctx.tracer);
        Rc::new(move || {
            let metrics = measure(&window, header.as_ref(), &hero);
            let update = coordinator.borrow_mut().recompute(metrics);
            update.apply(&hero);
            tracer.borrow_mut().viewport(&ViewportEvent {
                width: metrics.viewport_width,
                class: update.class,
                padding: update.padding,
            });
        })
    };
    recompute();
    for event in ["resize", "orientationchange"] {
        let recompute = Rc::clone(&recompute);
        listen(&ctx.window, event, move |_| recompute())?;
    }

    let window = ctx.window.clone();
    let tracer = Rc::clone(&ctx.tracer);
    listen(&ctx.window, "scroll", move |_| {
        let scroll_y = window.scroll_y().unwrap_or(0.0);
        let width = viewport_width(&window);
        if let Some(transform) = coordinator.borrow_mut().on_scroll(width, scroll_y) {
            transform.apply(&hero);
            tracer
                .borrow_mut()
                .parallax(&ParallaxEvent { scroll_y, transform });
        }
    })
}

fn measure(window: &Window, header: Option<&HtmlElement>, hero: &DomElement) -> HeroMetrics {
    let computed_padding = window
        .get_computed_style(hero.element())
        .ok()
        .flatten()
        .and_then(|style| style.get_property_value("padding-top").ok())
        .map_or(0.0, |value| parse_css_px(&value));
    HeroMetrics {
        viewport_width: viewport_width(window),
        header_height: dom::height_of(header),
        computed_padding,
        has_inline_padding: hero.inline_style("padding-top").is_some(),
    }
}

fn viewport_width(window: &Window) -> f64 {
    window
        .inner_width()
        .ok()
        .and_then(|width| width.as_f64())
        .unwrap_or(0.0)
}
