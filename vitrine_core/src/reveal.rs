// Copyright 2026 the Vitrine Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! One-shot scroll reveals.
//!
//! Every revealable element starts [`Hidden`](RevealState::Hidden) and moves
//! to [`Revealed`](RevealState::Revealed) the first time an intersection
//! sample for it is intersecting at or above the configured threshold. The
//! transition is irreversible: later samples for the same element are
//! ignored, and the caller is told to stop observing it.
//!
//! An element taller than the observer root can never reach the threshold;
//! it reveals on the first sample that intersects at all.
//!
//! Members of a stagger group are revealed by [`stagger`](crate::stagger)
//! and never enter a [`RevealSet`].
//!
//! [`RevealTracker`] holds only the state machine; [`RevealSet`] pairs it
//! with the elements themselves and applies the [`RevealStyle`].

use alloc::vec::Vec;

use crate::style::{RevealStyle, Revealable, VisualState};

/// Configuration for the scroll reveal observer.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RevealConfig {
    /// Selector list for elements that fade in when scrolled into view.
    pub targets: &'static str,
    /// Visible fraction at which an element is revealed.
    pub threshold: f64,
    /// Root margin of the observer; the negative bottom inset delays reveals
    /// until elements are slightly above the bottom edge.
    pub root_margin: &'static str,
    /// Hidden and shown visual states.
    pub style: RevealStyle,
}

impl RevealConfig {
    /// Default reveal settings: threshold 0.12, a 60px bottom inset, and a
    /// 30px rise over 0.6s.
    #[must_use]
    pub const fn standard() -> Self {
        Self {
            targets: ".service-card, .portfolio-item, \
                      .projects-grid > .project-card, section .section-title, \
                      .contact-form, .contact-info",
            threshold: 0.12,
            root_margin: "0px 0px -60px 0px",
            style: RevealStyle {
                hidden: VisualState {
                    opacity: "0",
                    transform: "translateY(30px)",
                },
                shown: VisualState {
                    opacity: "1",
                    transform: "translateY(0)",
                },
                transition: "opacity 0.6s ease, transform 0.6s ease",
            },
        }
    }
}

/// Reveal progress of a single element.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum RevealState {
    /// Not yet revealed; still observed.
    #[default]
    Hidden,
    /// Revealed; no longer observed.
    Revealed,
}

/// One intersection observation for an element.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct IntersectionSample {
    /// Whether the element intersects the (margin-adjusted) viewport.
    pub is_intersecting: bool,
    /// Visible fraction of the element, `0.0..=1.0`.
    pub ratio: f64,
    /// Largest fraction the element can show inside the root, `0.0..=1.0`.
    ///
    /// Below `1.0` only for elements taller than the root.
    pub reachable: f64,
}

impl IntersectionSample {
    /// A sample for an element that fits inside the root.
    #[must_use]
    pub const fn new(is_intersecting: bool, ratio: f64) -> Self {
        Self {
            is_intersecting,
            ratio,
            reachable: 1.0,
        }
    }

    /// Sets [`reachable`](Self::reachable) from the element and root heights.
    ///
    /// Unknown or empty extents leave the element treated as fitting.
    #[must_use]
    pub fn within(mut self, target_height: f64, root_height: Option<f64>) -> Self {
        self.reachable = match root_height {
            Some(root) if root > 0.0 && target_height > root => root / target_height,
            _ => 1.0,
        };
        self
    }

    /// Returns `true` if this sample meets `threshold`.
    ///
    /// When `threshold` is out of reach, intersecting is enough.
    #[inline]
    #[must_use]
    pub fn meets(&self, threshold: f64) -> bool {
        self.is_intersecting && (self.ratio >= threshold || self.reachable < threshold)
    }
}

/// Handle to an element registered with a [`RevealTracker`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RevealId(pub u32);

impl RevealId {
    /// Returns the registration index.
    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

/// Tracks hidden/revealed state for a set of elements.
#[derive(Clone, Debug)]
pub struct RevealTracker {
    threshold: f64,
    states: Vec<RevealState>,
}

impl RevealTracker {
    /// Creates an empty tracker that reveals at `threshold`.
    #[must_use]
    pub fn new(threshold: f64) -> Self {
        Self {
            threshold,
            states: Vec::new(),
        }
    }

    /// Registers a new hidden element.
    pub fn register(&mut self) -> RevealId {
        let id = u32::try_from(self.states.len()).unwrap_or(u32::MAX);
        self.states.push(RevealState::Hidden);
        RevealId(id)
    }

    /// Returns the state of `id`, or `None` for an unknown handle.
    #[must_use]
    pub fn state(&self, id: RevealId) -> Option<RevealState> {
        self.states.get(id.index()).copied()
    }

    /// Feeds a sample for `id`.
    ///
    /// Returns `true` exactly once per element: on the first sample that
    /// meets the threshold. The caller reveals the element and stops
    /// observing it.
    pub fn observe(&mut self, id: RevealId, sample: IntersectionSample) -> bool {
        let Some(state) = self.states.get_mut(id.index()) else {
            return false;
        };
        if *state == RevealState::Revealed || !sample.meets(self.threshold) {
            return false;
        }
        *state = RevealState::Revealed;
        true
    }

    /// Number of registered elements.
    #[must_use]
    pub fn len(&self) -> usize {
        self.states.len()
    }

    /// Returns `true` if nothing is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    /// Number of elements still hidden.
    #[must_use]
    pub fn pending(&self) -> usize {
        self.states
            .iter()
            .filter(|s| **s == RevealState::Hidden)
            .count()
    }
}

/// Elements paired with a [`RevealTracker`] and the style that reveals them.
#[derive(Debug)]
pub struct RevealSet<T> {
    style: RevealStyle,
    tracker: RevealTracker,
    elements: Vec<T>,
}

impl<T: Revealable> RevealSet<T> {
    /// Creates an empty set.
    #[must_use]
    pub fn new(config: &RevealConfig) -> Self {
        Self {
            style: config.style,
            tracker: RevealTracker::new(config.threshold),
            elements: Vec::new(),
        }
    }

    /// Conceals `element` and starts tracking it.
    pub fn insert(&mut self, element: T) -> RevealId {
        element.conceal(&self.style);
        self.elements.push(element);
        self.tracker.register()
    }

    /// Like [`insert`](Self::insert), but leaves stagger members untouched.
    ///
    /// `staggered` elements are revealed by their group; they are neither
    /// concealed nor tracked here, and the caller must not observe them.
    pub fn admit(&mut self, element: T, staggered: bool) -> Option<RevealId> {
        (!staggered).then(|| self.insert(element))
    }

    /// Returns the element for `id`.
    #[must_use]
    pub fn get(&self, id: RevealId) -> Option<&T> {
        self.elements.get(id.index())
    }

    /// Finds the handle of the first element matching `pred`.
    pub fn find(&self, mut pred: impl FnMut(&T) -> bool) -> Option<RevealId> {
        self.elements
            .iter()
            .position(|el| pred(el))
            .and_then(|i| u32::try_from(i).ok())
            .map(RevealId)
    }

    /// Feeds a sample for `id`, revealing the element on its first
    /// qualifying sample.
    ///
    /// Returns the revealed element so the caller can stop observing it, or
    /// `None` if nothing changed.
    pub fn on_intersection(&mut self, id: RevealId, sample: IntersectionSample) -> Option<&T> {
        if !self.tracker.observe(id, sample) {
            return None;
        }
        let el = self.elements.get(id.index())?;
        el.reveal(&self.style);
        Some(el)
    }

    /// The underlying state machine.
    #[must_use]
    pub fn tracker(&self) -> &RevealTracker {
        &self.tracker
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::FakeElement;

    fn sample(is_intersecting: bool, ratio: f64) -> IntersectionSample {
        IntersectionSample::new(is_intersecting, ratio)
    }

    #[test]
    fn reveals_once_at_threshold() {
        let mut tracker = RevealTracker::new(0.12);
        let id = tracker.register();

        assert!(!tracker.observe(id, sample(true, 0.05)));
        assert_eq!(tracker.state(id), Some(RevealState::Hidden));
        assert!(tracker.observe(id, sample(true, 0.12)));
        assert_eq!(tracker.state(id), Some(RevealState::Revealed));
        assert!(!tracker.observe(id, sample(true, 0.9)));
        assert!(!tracker.observe(id, sample(false, 0.0)));
        assert_eq!(tracker.state(id), Some(RevealState::Revealed));
    }

    #[test]
    fn non_intersecting_sample_never_reveals() {
        let mut tracker = RevealTracker::new(0.12);
        let id = tracker.register();
        assert!(!tracker.observe(id, sample(false, 0.5)));
        assert_eq!(tracker.pending(), 1);
    }

    #[test]
    fn unknown_handle_is_ignored() {
        let mut tracker = RevealTracker::new(0.12);
        assert!(!tracker.observe(RevealId(7), sample(true, 1.0)));
        assert!(tracker.is_empty());
    }

    #[test]
    fn set_mutates_style_exactly_once() {
        let config = RevealConfig::standard();
        let mut set = RevealSet::new(&config);
        let id = set.insert(FakeElement::default());

        let el = set.get(id).expect("element was inserted");
        assert_eq!(el.style("opacity").as_deref(), Some("0"));
        let writes_after_conceal = el.writes();

        assert!(set.on_intersection(id, sample(true, 0.3)).is_some());
        let el = set.get(id).expect("element was inserted");
        assert_eq!(el.style("opacity").as_deref(), Some("1"));
        assert_eq!(el.style("transform").as_deref(), Some("translateY(0)"));
        let writes_after_reveal = el.writes();
        assert!(writes_after_reveal > writes_after_conceal, "reveal must write");

        assert!(set.on_intersection(id, sample(true, 1.0)).is_none());
        assert!(set.on_intersection(id, sample(false, 0.0)).is_none());
        let el = set.get(id).expect("element was inserted");
        assert_eq!(el.writes(), writes_after_reveal, "no writes after reveal");
    }

    #[test]
    fn elements_reveal_independently() {
        let config = RevealConfig::standard();
        let mut set = RevealSet::new(&config);
        let a = set.insert(FakeElement::default());
        let b = set.insert(FakeElement::default());

        assert!(set.on_intersection(b, sample(true, 0.5)).is_some());
        assert_eq!(set.tracker().state(a), Some(RevealState::Hidden));
        assert_eq!(set.tracker().pending(), 1);
        assert_eq!(set.find(|el| el.style("opacity").as_deref() == Some("1")), Some(b));
    }

    #[test]
    fn tall_element_reveals_on_entry() {
        let mut tracker = RevealTracker::new(0.12);
        let id = tracker.register();
        // Ten viewports tall: the ratio tops out at 0.1.
        let tall = |is_intersecting, ratio| {
            sample(is_intersecting, ratio).within(8000.0, Some(800.0))
        };

        assert!(!tracker.observe(id, tall(false, 0.0)));
        assert!(tracker.observe(id, tall(true, 0.004)));
        assert_eq!(tracker.state(id), Some(RevealState::Revealed));
    }

    #[test]
    fn fitting_element_still_needs_threshold() {
        let s = sample(true, 0.05).within(300.0, Some(800.0));
        assert_eq!(s.reachable, 1.0);
        assert!(!s.meets(0.12));
        assert_eq!(sample(true, 0.05).within(300.0, None).reachable, 1.0);
    }

    #[test]
    fn stagger_members_are_not_tracked() {
        let mut set = RevealSet::new(&RevealConfig::standard());
        assert_eq!(set.admit(FakeElement::default(), true), None);
        assert!(set.tracker().is_empty(), "stagger member must not register");
        assert!(set.find(|_| true).is_none());

        let id = set.admit(FakeElement::default(), false).expect("plain target");
        assert_eq!(set.tracker().len(), 1);
        let el = set.get(id).expect("element was admitted");
        assert_eq!(el.style("opacity").as_deref(), Some("0"));
    }

    #[test]
    fn standard_targets_exclude_stagger_items() {
        let targets = RevealConfig::standard().targets;
        let items = crate::stagger::StaggerConfig::standard().items;
        assert!(
            targets.split(',').all(|t| t.trim() != items),
            "{items} is revealed by its stagger group"
        );
    }
}
