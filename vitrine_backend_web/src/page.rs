// Copyright 2026 the Vitrine Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Page bootstrap.

use alloc::rc::Rc;
use core::cell::RefCell;

use vitrine_core::config::PageConfig;
use vitrine_core::ready::{BootStep, ReadyState};
use vitrine_core::trace::Tracer;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Window};

use crate::listener::listen;
use crate::{console, contact, effects, hero, nav, notify, reveal, scroll, skills, typewriter};

/// Tracer shared by every installed behavior.
pub type SharedTracer = Rc<RefCell<Tracer>>;

/// Everything a behavior needs to install itself.
#[derive(Clone, Debug)]
pub struct PageContext {
    /// The global window.
    pub window: Window,
    /// The page document.
    pub document: Document,
    /// Selectors, thresholds, timings and texts.
    pub config: PageConfig,
    /// Trace output.
    pub tracer: SharedTracer,
}

impl PageContext {
    /// Binds `config` and `tracer` to the global window and document.
    pub fn new(config: PageConfig, tracer: Tracer) -> Result<Self, JsValue> {
        let window = web_sys::window().ok_or_else(|| JsValue::from_str("no global window"))?;
        let document = window
            .document()
            .ok_or_else(|| JsValue::from_str("window has no document"))?;
        Ok(Self {
            window,
            document,
            config,
            tracer: Rc::new(RefCell::new(tracer)),
        })
    }
}

/// Installs every behavior, in boot order.
///
/// Each installer is independent; one whose elements are missing does
/// nothing. An error stops the remaining installers but leaves the ones
/// already installed active.
pub fn start(ctx: &PageContext) -> Result<(), JsValue> {
    notify::inject_styles(&ctx.document)?;
    nav::install(ctx)?;
    effects::install_header_shade(ctx)?;
    scroll::install(ctx)?;
    contact::install(ctx)?;
    typewriter::install(ctx);
    reveal::install(ctx)?;
    effects::install_hover(ctx)?;
    skills::install(ctx)?;
    effects::fade_in_sections(ctx);
    hero::install(ctx)?;
    nav::install_close_key(ctx)
}

/// Load-time work: corrects the scroll position of a deep-linked page.
pub fn on_load(ctx: &PageContext) {
    scroll::correct_deep_link(ctx);
}

/// Runs [`start`] once the document is parsed and [`on_load`] once it has
/// fully loaded, whichever of those have not happened yet.
///
/// A failing [`start`] is logged and does not keep [`on_load`] from running.
pub fn boot(ctx: PageContext) -> Result<(), JsValue> {
    let ready_state = js_sys::Reflect::get(&ctx.document, &JsValue::from_str("readyState"))?
        .as_string()
        .unwrap_or_default();
    let ctx = Rc::new(ctx);

    for step in ReadyState::parse(&ready_state).boot_steps() {
        match step {
            BootStep::AwaitLoad => {
                let pending = Rc::clone(&ctx);
                listen(&ctx.window, "load", move |_| on_load(&pending))?;
            }
            BootStep::AwaitParsed => {
                let pending = Rc::clone(&ctx);
                listen(&ctx.document, "DOMContentLoaded", move |_| {
                    start_or_warn(&pending);
                })?;
            }
            BootStep::Start => start_or_warn(&ctx),
            BootStep::Load => on_load(&ctx),
        }
    }
    Ok(())
}

fn start_or_warn(ctx: &PageContext) {
    if let Err(err) = start(ctx) {
        console::warn("page start-up failed", &err);
    }
}
