// Copyright 2026 the Vitrine Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! In-memory event capture.
//!
//! A [`Tracer`](vitrine_core::trace::Tracer) owns its sink, so
//! [`CaptureSink`] shares its buffer: keep one clone, box the other into the
//! tracer, and read [`events`](CaptureSink::events) from the kept clone.

use std::cell::RefCell;
use std::rc::Rc;

use vitrine_core::trace::{
    ContactEvent, NavEvent, NotificationEvent, ParallaxEvent, RevealEvent, ScrollToEvent,
    StaggerEvent, TraceSink, ViewportEvent,
};

/// One captured trace event.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum CapturedEvent {
    /// See [`TraceSink::on_reveal`].
    Reveal(RevealEvent),
    /// See [`TraceSink::on_stagger`].
    Stagger(StaggerEvent),
    /// See [`TraceSink::on_viewport`].
    Viewport(ViewportEvent),
    /// See [`TraceSink::on_parallax`].
    Parallax(ParallaxEvent),
    /// See [`TraceSink::on_nav`].
    Nav(NavEvent),
    /// See [`TraceSink::on_scroll_to`].
    ScrollTo(ScrollToEvent),
    /// See [`TraceSink::on_contact`].
    Contact(ContactEvent),
    /// See [`TraceSink::on_notification`].
    Notification(NotificationEvent),
}

/// A [`TraceSink`] that appends every event to a shared buffer.
#[derive(Clone, Debug, Default)]
pub struct CaptureSink {
    events: Rc<RefCell<Vec<CapturedEvent>>>,
}

impl CaptureSink {
    /// Creates an empty capture.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a copy of the events captured so far, oldest first.
    #[must_use]
    pub fn events(&self) -> Vec<CapturedEvent> {
        self.events.borrow().clone()
    }

    /// Number of events captured so far.
    #[must_use]
    pub fn len(&self) -> usize {
        self.events.borrow().len()
    }

    /// Returns `true` if nothing has been captured.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.events.borrow().is_empty()
    }

    /// Drops every captured event.
    pub fn clear(&self) {
        self.events.borrow_mut().clear();
    }

    fn push(&self, event: CapturedEvent) {
        self.events.borrow_mut().push(event);
    }
}

impl TraceSink for CaptureSink {
    fn on_reveal(&mut self, e: &RevealEvent) {
        self.push(CapturedEvent::Reveal(*e));
    }

    fn on_stagger(&mut self, e: &StaggerEvent) {
        self.push(CapturedEvent::Stagger(*e));
    }

    fn on_viewport(&mut self, e: &ViewportEvent) {
        self.push(CapturedEvent::Viewport(*e));
    }

    fn on_parallax(&mut self, e: &ParallaxEvent) {
        self.push(CapturedEvent::Parallax(*e));
    }

    fn on_nav(&mut self, e: &NavEvent) {
        self.push(CapturedEvent::Nav(*e));
    }

    fn on_scroll_to(&mut self, e: &ScrollToEvent) {
        self.push(CapturedEvent::ScrollTo(*e));
    }

    fn on_contact(&mut self, e: &ContactEvent) {
        self.push(CapturedEvent::Contact(*e));
    }

    fn on_notification(&mut self, e: &NotificationEvent) {
        self.push(CapturedEvent::Notification(*e));
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use pretty_assertions::assert_eq;
    use vitrine_core::config::PageConfig;
    use vitrine_core::contact::{ContactError, ContactSubmission, ContactValidator};
    use vitrine_core::hero::{HeroCoordinator, HeroMetrics, PaddingAction, ViewportClass};
    use vitrine_core::nav::{NavAction, NavController};
    use vitrine_core::notify::{Notifier, Severity};
    use vitrine_core::style::{ClassTarget, StyleTarget};
    use vitrine_core::trace::Tracer;

    use super::*;

    #[derive(Debug, Default)]
    struct Element {
        styles: RefCell<BTreeMap<String, String>>,
        classes: RefCell<Vec<String>>,
    }

    impl StyleTarget for Element {
        fn set_style(&self, property: &str, value: &str) {
            self.styles
                .borrow_mut()
                .insert(property.to_owned(), value.to_owned());
        }

        fn remove_style(&self, property: &str) {
            self.styles.borrow_mut().remove(property);
        }

        fn inline_style(&self, property: &str) -> Option<String> {
            self.styles.borrow().get(property).cloned()
        }
    }

    impl ClassTarget for Element {
        fn add_class(&self, class: &str) {
            if !self.has_class(class) {
                self.classes.borrow_mut().push(class.to_owned());
            }
        }

        fn remove_class(&self, class: &str) {
            self.classes.borrow_mut().retain(|c| c != class);
        }

        fn has_class(&self, class: &str) -> bool {
            self.classes.borrow().iter().any(|c| c == class)
        }
    }

    struct SilentNotifier;

    impl Notifier for SilentNotifier {
        fn notify(&self, _message: &str, _severity: Severity) {}
    }

    fn capturing_tracer() -> (Tracer, CaptureSink) {
        let capture = CaptureSink::new();
        (Tracer::new(Box::new(capture.clone())), capture)
    }

    #[test]
    fn capture_is_readable_while_tracer_owns_sink() {
        let (mut tracer, capture) = capturing_tracer();
        assert!(capture.is_empty(), "fresh capture must be empty");
        tracer.stagger(&StaggerEvent { members: 5 });
        assert_eq!(
            capture.events(),
            [CapturedEvent::Stagger(StaggerEvent { members: 5 })]
        );
        capture.clear();
        assert_eq!(capture.len(), 0);
    }

    #[test]
    fn hero_resize_then_scroll() {
        let config = PageConfig::standard();
        let (mut tracer, capture) = capturing_tracer();
        let hero = Element::default();
        let mut coordinator =
            HeroCoordinator::new(config.breakpoint, &config.parallax, &config.hero_offset);

        for width in [1280.0, 600.0] {
            let metrics = HeroMetrics {
                viewport_width: width,
                header_height: 64.0,
                computed_padding: 40.0,
                has_inline_padding: false,
            };
            let update = coordinator.recompute(metrics);
            update.apply(&hero);
            tracer.viewport(&ViewportEvent {
                width,
                class: update.class,
                padding: update.padding,
            });
        }
        // Narrow: scrolling writes nothing.
        if let Some(transform) = coordinator.on_scroll(600.0, 300.0) {
            tracer.parallax(&ParallaxEvent {
                scroll_y: 300.0,
                transform,
            });
        }

        assert_eq!(
            capture.events(),
            [
                CapturedEvent::Viewport(ViewportEvent {
                    width: 1280.0,
                    class: ViewportClass::Wide,
                    padding: PaddingAction::Keep,
                }),
                CapturedEvent::Viewport(ViewportEvent {
                    width: 600.0,
                    class: ViewportClass::Narrow,
                    padding: PaddingAction::Force(84.0),
                }),
            ]
        );
        assert_eq!(hero.inline_style("padding-top").as_deref(), Some("84px"));
        assert_eq!(hero.inline_style("transform").as_deref(), Some("none"));
        assert!(
            !coordinator.parallax_enabled(),
            "parallax must stay off on a narrow viewport"
        );
    }

    #[test]
    fn nav_and_contact_session() {
        let config = PageConfig::standard();
        let (mut tracer, capture) = capturing_tracer();
        let nav = NavController::new(Some(Element::default()), Some(Element::default()));
        let validator = ContactValidator::new();

        nav.toggle();
        tracer.nav(&NavEvent {
            action: NavAction::Toggle,
            open: nav.is_open(),
        });
        nav.close();
        tracer.nav(&NavEvent {
            action: NavAction::Close,
            open: nav.is_open(),
        });

        let submission = ContactSubmission {
            name: "Ana".to_owned(),
            email: "ana@example".to_owned(),
            subject: "Hi".to_owned(),
            message: "Hello".to_owned(),
        };
        let result = validator.submit(&submission, &SilentNotifier, &config.messages);
        tracer.contact(&ContactEvent {
            rejected: result.err(),
        });

        assert_eq!(
            capture.events(),
            [
                CapturedEvent::Nav(NavEvent {
                    action: NavAction::Toggle,
                    open: true,
                }),
                CapturedEvent::Nav(NavEvent {
                    action: NavAction::Close,
                    open: false,
                }),
                CapturedEvent::Contact(ContactEvent {
                    rejected: Some(ContactError::InvalidEmail),
                }),
            ]
        );
    }
}
