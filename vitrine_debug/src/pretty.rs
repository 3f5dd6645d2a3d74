// Copyright 2026 the Vitrine Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Human-readable trace output.
//!
//! [`PrettyPrintSink`] implements [`TraceSink`] and writes one line per event
//! to a [`Write`](std::io::Write) destination (default: stderr).

use std::io::Write;

use vitrine_core::hero::{HeroTransform, PaddingAction, ViewportClass};
use vitrine_core::nav::NavAction;
use vitrine_core::notify::ToastPhase;
use vitrine_core::style::px;
use vitrine_core::trace::{
    ContactEvent, NavEvent, NotificationEvent, ParallaxEvent, RevealEvent, RevealGroup,
    ScrollToEvent, StaggerEvent, TraceSink, ViewportEvent,
};

/// Writes human-readable trace lines to a [`Write`](std::io::Write) destination.
pub struct PrettyPrintSink<W: Write = Box<dyn Write>> {
    writer: W,
}

impl<W: Write> std::fmt::Debug for PrettyPrintSink<W> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PrettyPrintSink").finish_non_exhaustive()
    }
}

impl PrettyPrintSink {
    /// Creates a sink that writes to stderr.
    #[must_use]
    pub fn stderr() -> Self {
        Self {
            writer: Box::new(std::io::stderr()),
        }
    }

    /// Creates a sink that writes to a boxed writer.
    #[must_use]
    pub fn new(writer: Box<dyn Write>) -> Self {
        Self { writer }
    }
}

impl<W: Write> PrettyPrintSink<W> {
    /// Creates a sink that writes to the given destination.
    #[must_use]
    pub fn with_writer(writer: W) -> Self {
        Self { writer }
    }

    /// Consumes the sink and returns its destination.
    #[must_use]
    pub fn into_inner(self) -> W {
        self.writer
    }
}

pub(crate) fn group_name(group: RevealGroup) -> &'static str {
    match group {
        RevealGroup::Scroll => "scroll",
        RevealGroup::Skills => "skills",
        RevealGroup::Sections => "sections",
    }
}

pub(crate) fn class_name(class: ViewportClass) -> &'static str {
    match class {
        ViewportClass::Narrow => "narrow",
        ViewportClass::Wide => "wide",
    }
}

pub(crate) fn padding_text(padding: PaddingAction) -> String {
    match padding {
        PaddingAction::Force(v) => format!("force {}", px(v)),
        PaddingAction::Clear => "clear".to_owned(),
        PaddingAction::Keep => "keep".to_owned(),
    }
}

pub(crate) fn transform_text(transform: HeroTransform) -> String {
    match transform {
        HeroTransform::None => "none".to_owned(),
        HeroTransform::Drift(y) => format!("translateY({})", px(y)),
    }
}

pub(crate) fn action_name(action: NavAction) -> &'static str {
    match action {
        NavAction::Toggle => "toggle",
        NavAction::Close => "close",
    }
}

pub(crate) fn phase_name(phase: ToastPhase) -> &'static str {
    match phase {
        ToastPhase::Entering => "entering",
        ToastPhase::Visible => "visible",
        ToastPhase::Leaving => "leaving",
        ToastPhase::Detached => "detached",
    }
}

impl<W: Write> TraceSink for PrettyPrintSink<W> {
    fn on_reveal(&mut self, e: &RevealEvent) {
        let _ = writeln!(
            self.writer,
            "[reveal] {} #{} after {}",
            group_name(e.group),
            e.index,
            e.delay,
        );
    }

    fn on_stagger(&mut self, e: &StaggerEvent) {
        let _ = writeln!(self.writer, "[stagger] members={}", e.members);
    }

    fn on_viewport(&mut self, e: &ViewportEvent) {
        let _ = writeln!(
            self.writer,
            "[viewport] width={} class={} padding={}",
            px(e.width),
            class_name(e.class),
            padding_text(e.padding),
        );
    }

    fn on_parallax(&mut self, e: &ParallaxEvent) {
        let _ = writeln!(
            self.writer,
            "[parallax] y={} transform={}",
            px(e.scroll_y),
            transform_text(e.transform),
        );
    }

    fn on_nav(&mut self, e: &NavEvent) {
        let state = if e.open { "open" } else { "closed" };
        let _ = writeln!(
            self.writer,
            "[nav] {} -> {state}",
            action_name(e.action)
        );
    }

    fn on_scroll_to(&mut self, e: &ScrollToEvent) {
        let _ = writeln!(
            self.writer,
            "[scroll] top={} {}",
            px(e.request.top),
            e.request.motion.as_str(),
        );
    }

    fn on_contact(&mut self, e: &ContactEvent) {
        let _ = match e.rejected {
            Some(err) => writeln!(self.writer, "[contact] rejected: {err}"),
            None => writeln!(self.writer, "[contact] accepted"),
        };
    }

    fn on_notification(&mut self, e: &NotificationEvent) {
        let _ = writeln!(
            self.writer,
            "[toast] {} {}",
            e.severity.as_str(),
            phase_name(e.phase),
        );
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use vitrine_core::contact::ContactError;
    use vitrine_core::notify::Severity;
    use vitrine_core::scroll::{ScrollMotion, ScrollRequest};
    use vitrine_core::time::Millis;

    use super::*;

    fn printed(f: impl FnOnce(&mut PrettyPrintSink<Vec<u8>>)) -> String {
        let mut sink = PrettyPrintSink::with_writer(Vec::new());
        f(&mut sink);
        String::from_utf8(sink.into_inner()).unwrap()
    }

    #[test]
    fn reveal_and_stagger_lines() {
        let out = printed(|sink| {
            sink.on_stagger(&StaggerEvent { members: 3 });
            sink.on_reveal(&RevealEvent {
                group: RevealGroup::Skills,
                index: 2,
                delay: Millis(240),
            });
        });
        assert_eq!(out, "[stagger] members=3\n[reveal] skills #2 after 240ms\n");
    }

    #[test]
    fn hero_lines() {
        let out = printed(|sink| {
            sink.on_viewport(&ViewportEvent {
                width: 375.0,
                class: ViewportClass::Narrow,
                padding: PaddingAction::Force(84.0),
            });
            sink.on_parallax(&ParallaxEvent {
                scroll_y: 200.0,
                transform: HeroTransform::Drift(-30.0),
            });
        });
        assert_eq!(
            out,
            "[viewport] width=375px class=narrow padding=force 84px\n\
             [parallax] y=200px transform=translateY(-30px)\n"
        );
    }

    #[test]
    fn interaction_lines() {
        let out = printed(|sink| {
            sink.on_nav(&NavEvent {
                action: NavAction::Toggle,
                open: true,
            });
            sink.on_scroll_to(&ScrollToEvent {
                request: ScrollRequest {
                    top: 430.0,
                    motion: ScrollMotion::Smooth,
                },
            });
            sink.on_contact(&ContactEvent {
                rejected: Some(ContactError::InvalidEmail),
            });
            sink.on_notification(&NotificationEvent {
                severity: Severity::Error,
                phase: ToastPhase::Entering,
            });
        });
        assert_eq!(
            out,
            "[nav] toggle -> open\n\
             [scroll] top=430px smooth\n\
             [contact] rejected: email address is malformed\n\
             [toast] error entering\n"
        );
    }
}
