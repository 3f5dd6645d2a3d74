// Copyright 2026 the Vitrine Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Browser console output.

use alloc::format;

use vitrine_core::trace::{
    ContactEvent, NavEvent, NotificationEvent, ParallaxEvent, RevealEvent, ScrollToEvent,
    StaggerEvent, TraceSink, ViewportEvent,
};
use wasm_bindgen::JsValue;

/// A [`TraceSink`] that writes one `console.debug` line per event.
#[derive(Clone, Copy, Debug, Default)]
pub struct ConsoleSink;

fn debug(line: &str) {
    web_sys::console::debug_1(&JsValue::from_str(line));
}

/// Reports a failed DOM call that has no caller to propagate to.
pub(crate) fn warn(context: &str, err: &JsValue) {
    web_sys::console::warn_2(&JsValue::from_str(context), err);
}

impl TraceSink for ConsoleSink {
    fn on_reveal(&mut self, e: &RevealEvent) {
        debug(&format!(
            "[vitrine] reveal {:?} #{} after {}",
            e.group, e.index, e.delay
        ));
    }

    fn on_stagger(&mut self, e: &StaggerEvent) {
        debug(&format!("[vitrine] stagger fired: {} members", e.members));
    }

    fn on_viewport(&mut self, e: &ViewportEvent) {
        debug(&format!(
            "[vitrine] viewport {}px {:?} padding={:?}",
            e.width, e.class, e.padding
        ));
    }

    fn on_parallax(&mut self, e: &ParallaxEvent) {
        debug(&format!(
            "[vitrine] parallax y={} {:?}",
            e.scroll_y, e.transform
        ));
    }

    fn on_nav(&mut self, e: &NavEvent) {
        debug(&format!("[vitrine] nav {:?} open={}", e.action, e.open));
    }

    fn on_scroll_to(&mut self, e: &ScrollToEvent) {
        debug(&format!(
            "[vitrine] scroll to {} ({:?})",
            e.request.top, e.request.motion
        ));
    }

    fn on_contact(&mut self, e: &ContactEvent) {
        match e.rejected {
            Some(err) => debug(&format!("[vitrine] contact rejected: {err}")),
            None => debug("[vitrine] contact accepted"),
        }
    }

    fn on_notification(&mut self, e: &NotificationEvent) {
        debug(&format!(
            "[vitrine] toast {} {:?}",
            e.severity.as_str(),
            e.phase
        ));
    }
}
