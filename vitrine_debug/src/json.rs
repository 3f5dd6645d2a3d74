// Copyright 2026 the Vitrine Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! JSON export of captured events.
//!
//! [`export`] writes the events of a [`CaptureSink`](crate::capture::CaptureSink)
//! as a JSON array, one object per event. Every object carries a `"kind"`
//! naming the hook that produced it.

use std::io::{self, Write};

use serde_json::{Value, json};

use crate::capture::CapturedEvent;
use crate::pretty::{action_name, class_name, group_name, padding_text, phase_name, transform_text};

/// Converts one event to a JSON object.
#[must_use]
pub fn to_value(event: &CapturedEvent) -> Value {
    match event {
        CapturedEvent::Reveal(e) => json!({
            "kind": "reveal",
            "group": group_name(e.group),
            "index": e.index,
            "delay_ms": e.delay.get(),
        }),
        CapturedEvent::Stagger(e) => json!({
            "kind": "stagger",
            "members": e.members,
        }),
        CapturedEvent::Viewport(e) => json!({
            "kind": "viewport",
            "width": e.width,
            "class": class_name(e.class),
            "padding": padding_text(e.padding),
        }),
        CapturedEvent::Parallax(e) => json!({
            "kind": "parallax",
            "scroll_y": e.scroll_y,
            "transform": transform_text(e.transform),
        }),
        CapturedEvent::Nav(e) => json!({
            "kind": "nav",
            "action": action_name(e.action),
            "open": e.open,
        }),
        CapturedEvent::ScrollTo(e) => json!({
            "kind": "scroll_to",
            "top": e.request.top,
            "motion": e.request.motion.as_str(),
        }),
        CapturedEvent::Contact(e) => json!({
            "kind": "contact",
            "accepted": e.rejected.is_none(),
            "reason": e.rejected.map(|err| err.to_string()),
        }),
        CapturedEvent::Notification(e) => json!({
            "kind": "notification",
            "severity": e.severity.as_str(),
            "phase": phase_name(e.phase),
        }),
    }
}

/// Writes `events` as a pretty-printed JSON array.
pub fn export(events: &[CapturedEvent], writer: &mut dyn Write) -> io::Result<()> {
    let values: Vec<Value> = events.iter().map(to_value).collect();
    serde_json::to_writer_pretty(&mut *writer, &values)?;
    writeln!(writer)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use vitrine_core::contact::ContactError;
    use vitrine_core::notify::{Severity, ToastPhase};
    use vitrine_core::time::Millis;
    use vitrine_core::trace::{
        ContactEvent, NotificationEvent, RevealEvent, RevealGroup, StaggerEvent, TraceSink,
    };

    use super::*;
    use crate::capture::CaptureSink;

    #[test]
    fn export_produces_valid_json() {
        let mut capture = CaptureSink::new();
        capture.on_stagger(&StaggerEvent { members: 2 });
        capture.on_reveal(&RevealEvent {
            group: RevealGroup::Skills,
            index: 1,
            delay: Millis(120),
        });
        capture.on_contact(&ContactEvent {
            rejected: Some(ContactError::MissingFields),
        });
        capture.on_notification(&NotificationEvent {
            severity: Severity::Error,
            phase: ToastPhase::Detached,
        });

        let mut out = Vec::new();
        export(&capture.events(), &mut out).unwrap();
        let parsed: Vec<Value> = serde_json::from_slice(&out).unwrap();
        assert_eq!(parsed.len(), 4);

        assert_eq!(parsed[0], json!({ "kind": "stagger", "members": 2 }));
        assert_eq!(
            parsed[1],
            json!({ "kind": "reveal", "group": "skills", "index": 1, "delay_ms": 120 })
        );
        assert_eq!(parsed[2]["accepted"], false);
        assert_eq!(parsed[2]["reason"], "one or more required fields are blank");
        assert_eq!(parsed[3]["phase"], "detached");
    }

    #[test]
    fn accepted_contact_has_null_reason() {
        let value = to_value(&CapturedEvent::Contact(ContactEvent { rejected: None }));
        assert_eq!(value["accepted"], true);
        assert!(value["reason"].is_null(), "accepted submissions carry no reason");
    }

    #[test]
    fn export_empty_capture() {
        let mut out = Vec::new();
        export(&[], &mut out).unwrap();
        let parsed: Vec<Value> = serde_json::from_slice(&out).unwrap();
        assert!(parsed.is_empty(), "empty capture exports an empty array");
    }
}
