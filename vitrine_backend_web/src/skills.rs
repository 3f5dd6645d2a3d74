// Copyright 2026 the Vitrine Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Skills stagger wiring.

use alloc::rc::Rc;

use vitrine_core::stagger::StaggerGroup;
use vitrine_core::style::Revealable as _;
use vitrine_core::trace::{RevealEvent, RevealGroup, StaggerEvent};
use wasm_bindgen::JsValue;

use crate::dom::{self, DomElement};
use crate::page::PageContext;
use crate::{listener, timer};

/// Hides the skill items and reveals them one after another the first time
/// their container becomes visible enough.
pub(crate) fn install(ctx: &PageContext) -> Result<(), JsValue> {
    let config = ctx.config.stagger;
    let Some(container) = dom::query(&ctx.document, config.container) else {
        return Ok(());
    };
    for item in dom::query_all_within(&container, config.items) {
        DomElement::new(item).conceal(&config.style);
    }

    let mut group = StaggerGroup::new(&config);
    let tracer = Rc::clone(&ctx.tracer);
    let observer = listener::observe(config.threshold, None, move |observer, entry| {
        let target = entry.target();
        let items = dom::query_all_within(&target, config.items);
        let Some(schedule) = group.trigger(listener::sample(entry), items.len()) else {
            return;
        };
        observer.unobserve(&target);
        tracer.borrow_mut().stagger(&StaggerEvent {
            members: items.len(),
        });

        for ((index, delay), item) in schedule.zip(items) {
            let item = DomElement::new(item);
            let tracer = Rc::clone(&tracer);
            timer::after(delay, move || {
                item.reveal(&config.style);
                tracer.borrow_mut().reveal(&RevealEvent {
                    group: RevealGroup::Skills,
                    index,
                    delay,
                });
            });
        }
    })?;
    observer.observe(&container);
    Ok(())
}
