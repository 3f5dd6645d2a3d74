// Copyright 2026 the Vitrine Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Scroll reveal wiring.

use alloc::rc::Rc;
use core::cell::RefCell;

use vitrine_core::reveal::RevealSet;
use vitrine_core::time::Millis;
use vitrine_core::trace::{RevealEvent, RevealGroup};
use wasm_bindgen::JsValue;

use crate::dom::{self, DomElement};
use crate::listener;
use crate::page::PageContext;

/// Hides every reveal target and observes it until it scrolls into view.
///
/// Targets inside a stagger container are skipped; [`skills`](crate::skills)
/// reveals them.
pub(crate) fn install(ctx: &PageContext) -> Result<(), JsValue> {
    let config = ctx.config.reveal;
    let targets = dom::query_all(&ctx.document, config.targets);
    if targets.is_empty() {
        return Ok(());
    }

    let set = Rc::new(RefCell::new(RevealSet::<DomElement>::new(&config)));
    let observer = {
        let set = Rc::clone(&set);
        let tracer = Rc::clone(&ctx.tracer);
        listener::observe(
            config.threshold,
            Some(config.root_margin),
            move |observer, entry| {
                let target = entry.target();
                let mut set = set.borrow_mut();
                let Some(id) = set.find(|el| el.is(&target)) else {
                    return;
                };
                if set.on_intersection(id, listener::sample(entry)).is_some() {
                    observer.unobserve(&target);
                    tracer.borrow_mut().reveal(&RevealEvent {
                        group: RevealGroup::Scroll,
                        index: id.index(),
                        delay: Millis::ZERO,
                    });
                }
            },
        )?
    };

    let container = ctx.config.stagger.container;
    for target in targets {
        let staggered = target.closest(container).ok().flatten().is_some();
        if set
            .borrow_mut()
            .admit(DomElement::new(target.clone()), staggered)
            .is_some()
        {
            observer.observe(&target);
        }
    }
    Ok(())
}
