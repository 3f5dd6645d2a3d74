// Copyright 2026 the Vitrine Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Contact form wiring.

use alloc::rc::Rc;

use vitrine_core::contact::{ContactSubmission, ContactValidator};
use vitrine_core::trace::ContactEvent;
use wasm_bindgen::{JsCast as _, JsValue};
use web_sys::{FormData, HtmlFormElement};

use crate::console;
use crate::dom;
use crate::listener::listen;
use crate::notify::DomNotifier;
use crate::page::PageContext;

/// Validates the contact form on submit instead of sending it.
///
/// The form is reset only after an accepted submission.
pub(crate) fn install(ctx: &PageContext) -> Result<(), JsValue> {
    let Some(form) = ctx
        .config
        .contact
        .forms
        .iter()
        .find_map(|selector| dom::query(&ctx.document, selector))
        .and_then(|el| el.dyn_into::<HtmlFormElement>().ok())
    else {
        return Ok(());
    };

    let validator = ContactValidator::new();
    let notifier = DomNotifier::new(ctx);
    let messages = ctx.config.messages;
    let tracer = Rc::clone(&ctx.tracer);
    let target = form.clone();
    listen(&target, "submit", move |event| {
        event.prevent_default();
        let data = match FormData::new_with_form(&form) {
            Ok(data) => data,
            Err(err) => {
                console::warn("failed to read contact form", &err);
                return;
            }
        };
        let submission = ContactSubmission::read(|name| data.get(name).as_string());
        let result = validator.submit(&submission, &notifier, &messages);
        tracer.borrow_mut().contact(&ContactEvent {
            rejected: result.err(),
        });
        if result.is_ok() {
            form.reset();
        }
    })
}
