// Copyright 2026 the Vitrine Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Toast elements.

use alloc::format;
use alloc::rc::Rc;

use vitrine_core::notify::{
    NotificationConfig, Notifier, Severity, TOAST_CONTENT_CSS, ToastPhase, toast_css,
};
use vitrine_core::style::Revealable as _;
use vitrine_core::trace::NotificationEvent;
use wasm_bindgen::{JsCast as _, JsValue};
use web_sys::{Document, HtmlElement};

use crate::console;
use crate::dom::DomElement;
use crate::page::{PageContext, SharedTracer};
use crate::timer;

/// Adds the stylesheet for toast content to the document head.
pub(crate) fn inject_styles(document: &Document) -> Result<(), JsValue> {
    let Some(head) = document.head() else {
        return Ok(());
    };
    let style = document.create_element("style")?;
    style.set_text_content(Some(TOAST_CONTENT_CSS));
    head.append_child(&style)?;
    Ok(())
}

/// Shows toasts as fixed-position elements in the document body.
#[derive(Clone, Debug)]
pub struct DomNotifier {
    document: Document,
    config: NotificationConfig,
    tracer: SharedTracer,
}

impl DomNotifier {
    /// Creates a notifier for the page in `ctx`.
    #[must_use]
    pub fn new(ctx: &PageContext) -> Self {
        Self {
            document: ctx.document.clone(),
            config: ctx.config.notification,
            tracer: Rc::clone(&ctx.tracer),
        }
    }

    fn show(&self, message: &str, severity: Severity) -> Result<(), JsValue> {
        let document = &self.document;
        let body = document
            .body()
            .ok_or_else(|| JsValue::from_str("document has no body"))?;

        let toast: HtmlElement = document.create_element("div")?.unchecked_into();
        toast.set_class_name(&severity.class_name());
        let content = document.create_element("div")?;
        content.set_class_name("notification-content");
        let icon = document.create_element("i")?;
        icon.set_class_name(&format!("fas {}", severity.icon_class()));
        // Text, not markup: messages are never parsed as HTML.
        let text = document.create_element("span")?;
        text.set_text_content(Some(message));
        content.append_child(&icon)?;
        content.append_child(&text)?;
        toast.append_child(&content)?;
        toast.style().set_css_text(&toast_css(severity, &self.config));
        body.append_child(&toast)?;

        let toast = Toast {
            element: DomElement::new(toast),
            severity,
            config: self.config,
            tracer: Rc::clone(&self.tracer),
        };
        toast.trace(ToastPhase::Entering);
        toast.advance(ToastPhase::Entering);
        Ok(())
    }
}

impl Notifier for DomNotifier {
    fn notify(&self, message: &str, severity: Severity) {
        if let Err(err) = self.show(message, severity) {
            console::warn("failed to show notification", &err);
        }
    }
}

/// One attached toast, driven through its lifecycle by timers.
struct Toast {
    element: DomElement,
    severity: Severity,
    config: NotificationConfig,
    tracer: SharedTracer,
}

impl Toast {
    fn trace(&self, phase: ToastPhase) {
        self.tracer.borrow_mut().notification(&NotificationEvent {
            severity: self.severity,
            phase,
        });
    }

    fn advance(self, phase: ToastPhase) {
        let Some((next, delay)) = phase.next(&self.config) else {
            return;
        };
        let step = move || {
            match next {
                ToastPhase::Entering => {}
                ToastPhase::Visible => self.element.reveal(&self.config.style),
                ToastPhase::Leaving => self.element.conceal(&self.config.style),
                ToastPhase::Detached => self.element.element().remove(),
            }
            self.trace(next);
            self.advance(next);
        };
        if next == ToastPhase::Visible {
            timer::next_frame(step);
        } else {
            timer::after(delay, step);
        }
    }
}
