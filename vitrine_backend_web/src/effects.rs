// Copyright 2026 the Vitrine Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Header shade, hover lift and section fade-in.

use alloc::rc::Rc;

use vitrine_core::effects::{HeaderShade, HoverLift};
use vitrine_core::style::Revealable as _;
use vitrine_core::trace::{RevealEvent, RevealGroup};
use wasm_bindgen::JsValue;

use crate::dom::{self, DomElement};
use crate::listener::listen;
use crate::page::PageContext;
use crate::timer;

/// Darkens the header once the page is scrolled past the threshold.
pub(crate) fn install_header_shade(ctx: &PageContext) -> Result<(), JsValue> {
    let Some(header) = dom::query_first(&ctx.document, &ctx.config.landmarks.header) else {
        return Ok(());
    };
    let header = DomElement::new(header);
    let threshold = ctx.config.effects.shade_threshold;
    let window = ctx.window.clone();
    listen(&ctx.window, "scroll", move |_| {
        HeaderShade::for_scroll(window.scroll_y().unwrap_or(0.0), threshold).apply(&header);
    })
}

/// Lifts cards while the pointer is over them.
pub(crate) fn install_hover(ctx: &PageContext) -> Result<(), JsValue> {
    for card in dom::query_all(&ctx.document, ctx.config.effects.hover_targets) {
        for (event, lift) in [
            ("mouseenter", HoverLift::Raised),
            ("mouseleave", HoverLift::Settled),
        ] {
            let target = DomElement::new(card.clone());
            listen(&card, event, move |_| lift.apply(&target))?;
        }
    }
    Ok(())
}

/// Hides every section and fades them in one after another.
pub(crate) fn fade_in_sections(ctx: &PageContext) {
    let config = ctx.config.effects;
    let sections = dom::query_all(&ctx.document, config.sections);
    let schedule = config.section_schedule(sections.len());
    for ((index, delay), section) in schedule.zip(sections) {
        let section = DomElement::new(section);
        section.conceal(&config.section_style);
        let tracer = Rc::clone(&ctx.tracer);
        timer::after(delay, move || {
            section.reveal(&config.section_style);
            tracer.borrow_mut().reveal(&RevealEvent {
                group: RevealGroup::Sections,
                index,
                delay,
            });
        });
    }
}
