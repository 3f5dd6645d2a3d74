// Copyright 2026 the Vitrine Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Navigation toggle wiring.

use alloc::rc::Rc;

use vitrine_core::nav::{NavAction, NavController};
use vitrine_core::trace::NavEvent;
use wasm_bindgen::{JsCast as _, JsValue};
use web_sys::KeyboardEvent;

use crate::dom::{self, DomElement};
use crate::listener::listen;
use crate::page::{PageContext, SharedTracer};

type DomNav = NavController<DomElement, DomElement>;

fn controller(ctx: &PageContext) -> DomNav {
    let config = ctx.config.nav;
    NavController::new(
        dom::query(&ctx.document, config.menu).map(DomElement::new),
        dom::query(&ctx.document, config.toggle).map(DomElement::new),
    )
}

fn trace(tracer: &SharedTracer, nav: &DomNav, action: NavAction) {
    tracer.borrow_mut().nav(&NavEvent {
        action,
        open: nav.is_open(),
    });
}

/// Toggles the menu from its button and closes it from any link inside.
///
/// Needs both the menu and the toggle.
pub(crate) fn install(ctx: &PageContext) -> Result<(), JsValue> {
    let config = ctx.config.nav;
    let (Some(menu), Some(toggle)) = (
        dom::query(&ctx.document, config.menu),
        dom::query(&ctx.document, config.toggle),
    ) else {
        return Ok(());
    };
    let nav = Rc::new(NavController::new(
        Some(DomElement::new(menu.clone())),
        Some(DomElement::new(toggle.clone())),
    ));

    {
        let nav = Rc::clone(&nav);
        let tracer = Rc::clone(&ctx.tracer);
        listen(&toggle, "click", move |_| {
            nav.toggle();
            trace(&tracer, &nav, NavAction::Toggle);
        })?;
    }

    for link in dom::query_all_within(&menu, config.links) {
        let nav = Rc::clone(&nav);
        let tracer = Rc::clone(&ctx.tracer);
        listen(&link, "click", move |_| {
            nav.close();
            trace(&tracer, &nav, NavAction::Close);
        })?;
    }
    Ok(())
}

/// Closes the menu on the close key, whether or not a toggle exists.
pub(crate) fn install_close_key(ctx: &PageContext) -> Result<(), JsValue> {
    let nav = controller(ctx);
    let close_key = ctx.config.nav.close_key;
    let tracer = Rc::clone(&ctx.tracer);
    listen(&ctx.document, "keydown", move |event| {
        let Some(event) = event.dyn_ref::<KeyboardEvent>() else {
            return;
        };
        if event.key() == close_key {
            nav.close();
            trace(&tracer, &nav, NavAction::Close);
        }
    })
}
