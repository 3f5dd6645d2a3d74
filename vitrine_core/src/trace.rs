// Copyright 2026 the Vitrine Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Diagnostics for page behaviors.
//!
//! This module provides a [`TraceSink`] trait with one method per event that
//! the behaviors emit as they mutate the page. All method bodies default to
//! no-ops, so implementing only the events you care about is fine.
//!
//! [`Tracer`] owns an optional boxed sink. When the `trace` feature is
//! **off**, every `Tracer` method compiles to nothing. When **on**, each
//! method performs a single `Option` branch before dispatching.
//!
//! # Crate features
//!
//! - `trace`: enables the `Tracer` method bodies (one branch per call).

use alloc::boxed::Box;

use crate::contact::ContactError;
use crate::hero::{HeroTransform, PaddingAction, ViewportClass};
use crate::nav::NavAction;
use crate::notify::{Severity, ToastPhase};
use crate::scroll::ScrollRequest;
use crate::time::Millis;

// ---------------------------------------------------------------------------
// Enums
// ---------------------------------------------------------------------------

/// Which reveal mechanism revealed an element.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RevealGroup {
    /// Scroll-triggered one-shot reveal.
    Scroll,
    /// Skills stagger member.
    Skills,
    /// Section fade-in on load.
    Sections,
}

// ---------------------------------------------------------------------------
// Event structs
// ---------------------------------------------------------------------------

/// Emitted when an element is revealed.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RevealEvent {
    /// Mechanism that revealed it.
    pub group: RevealGroup,
    /// Index of the element within its group.
    pub index: usize,
    /// Delay after the group trigger (zero for scroll reveals).
    pub delay: Millis,
}

/// Emitted when a staggered group fires.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StaggerEvent {
    /// Number of members scheduled.
    pub members: usize,
}

/// Emitted for each hero recompute (start-up, resize, orientation change).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewportEvent {
    /// `window.innerWidth` at the time of the recompute.
    pub width: f64,
    /// Resulting classification.
    pub class: ViewportClass,
    /// Padding decision.
    pub padding: PaddingAction,
}

/// Emitted when a scroll event writes the hero transform.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ParallaxEvent {
    /// Scroll offset read by the handler.
    pub scroll_y: f64,
    /// Transform written.
    pub transform: HeroTransform,
}

/// Emitted when the nav menu toggles or closes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavEvent {
    /// What happened.
    pub action: NavAction,
    /// Whether the menu is open afterwards.
    pub open: bool,
}

/// Emitted when an anchor click or deep link scrolls the page.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScrollToEvent {
    /// Destination.
    pub request: ScrollRequest,
}

/// Emitted for each contact form submission.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ContactEvent {
    /// Rejection reason, or `None` if accepted.
    pub rejected: Option<ContactError>,
}

/// Emitted at each toast lifecycle step.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NotificationEvent {
    /// Toast severity.
    pub severity: Severity,
    /// Phase entered.
    pub phase: ToastPhase,
}

// ---------------------------------------------------------------------------
// TraceSink trait
// ---------------------------------------------------------------------------

/// Receives trace events from page behaviors.
///
/// All methods have default no-op implementations, so you only need to
/// override the events you care about.
pub trait TraceSink {
    /// Called when an element is revealed.
    fn on_reveal(&mut self, e: &RevealEvent) {
        _ = e;
    }

    /// Called when a staggered group fires.
    fn on_stagger(&mut self, e: &StaggerEvent) {
        _ = e;
    }

    /// Called after each hero recompute.
    fn on_viewport(&mut self, e: &ViewportEvent) {
        _ = e;
    }

    /// Called when a scroll writes the hero transform.
    fn on_parallax(&mut self, e: &ParallaxEvent) {
        _ = e;
    }

    /// Called when the nav menu changes.
    fn on_nav(&mut self, e: &NavEvent) {
        _ = e;
    }

    /// Called when the page is scrolled to an anchor target.
    fn on_scroll_to(&mut self, e: &ScrollToEvent) {
        _ = e;
    }

    /// Called for each contact submission.
    fn on_contact(&mut self, e: &ContactEvent) {
        _ = e;
    }

    /// Called at each toast lifecycle step.
    fn on_notification(&mut self, e: &NotificationEvent) {
        _ = e;
    }
}

// ---------------------------------------------------------------------------
// NoopSink
// ---------------------------------------------------------------------------

/// A [`TraceSink`] that discards all events.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoopSink;

impl TraceSink for NoopSink {}

// ---------------------------------------------------------------------------
// Tracer wrapper
// ---------------------------------------------------------------------------

/// Owner of an optional [`TraceSink`].
///
/// Behaviors keep the tracer alive for the page lifetime, so it owns its
/// sink rather than borrowing it. When the `trace` feature is **off**, every
/// method compiles to nothing.
pub struct Tracer {
    #[cfg(feature = "trace")]
    sink: Option<Box<dyn TraceSink>>,
    #[cfg(not(feature = "trace"))]
    _marker: core::marker::PhantomData<Box<dyn TraceSink>>,
}

impl core::fmt::Debug for Tracer {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Tracer").finish_non_exhaustive()
    }
}

impl Default for Tracer {
    fn default() -> Self {
        Self::none()
    }
}

macro_rules! dispatch {
    ($(#[$doc:meta] $name:ident => $hook:ident($event:ty);)*) => {
        $(
            #[$doc]
            #[inline]
            pub fn $name(&mut self, e: &$event) {
                #[cfg(feature = "trace")]
                if let Some(s) = &mut self.sink {
                    s.$hook(e);
                }
                #[cfg(not(feature = "trace"))]
                {
                    _ = e;
                }
            }
        )*
    };
}

impl Tracer {
    /// Creates a tracer that dispatches to `sink`.
    #[inline]
    #[must_use]
    pub fn new(sink: Box<dyn TraceSink>) -> Self {
        #[cfg(feature = "trace")]
        {
            Self { sink: Some(sink) }
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = sink;
            Self {
                _marker: core::marker::PhantomData,
            }
        }
    }

    /// Creates a tracer that discards all events.
    #[inline]
    #[must_use]
    pub fn none() -> Self {
        #[cfg(feature = "trace")]
        {
            Self { sink: None }
        }
        #[cfg(not(feature = "trace"))]
        {
            Self {
                _marker: core::marker::PhantomData,
            }
        }
    }

    dispatch! {
        /// Emits a [`RevealEvent`].
        reveal => on_reveal(RevealEvent);
        /// Emits a [`StaggerEvent`].
        stagger => on_stagger(StaggerEvent);
        /// Emits a [`ViewportEvent`].
        viewport => on_viewport(ViewportEvent);
        /// Emits a [`ParallaxEvent`].
        parallax => on_parallax(ParallaxEvent);
        /// Emits a [`NavEvent`].
        nav => on_nav(NavEvent);
        /// Emits a [`ScrollToEvent`].
        scroll_to => on_scroll_to(ScrollToEvent);
        /// Emits a [`ContactEvent`].
        contact => on_contact(ContactEvent);
        /// Emits a [`NotificationEvent`].
        notification => on_notification(NotificationEvent);
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
