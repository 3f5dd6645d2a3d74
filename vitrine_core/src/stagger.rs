// Copyright 2026 the Vitrine Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Staggered reveals.
//!
//! A [`StaggerGroup`] is a container observed as one unit. The first
//! qualifying intersection fires the group once and yields a
//! [`StaggerSchedule`]: member `i` (document order) is revealed
//! `i × item_delay` after the trigger. The same schedule drives the section
//! fade-in on load.

use crate::reveal::IntersectionSample;
use crate::style::{RevealStyle, VisualState};
use crate::time::Millis;

/// Configuration for the skills stagger.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StaggerConfig {
    /// Selector of the observed container.
    pub container: &'static str,
    /// Selector of the members, resolved inside the container.
    pub items: &'static str,
    /// Visible fraction of the container that fires the group.
    pub threshold: f64,
    /// Delay between consecutive members.
    pub item_delay: Millis,
    /// Hidden and shown visual states of each member.
    pub style: RevealStyle,
}

impl StaggerConfig {
    /// Default skills stagger: threshold 0.25, 120ms per item.
    #[must_use]
    pub const fn standard() -> Self {
        Self {
            container: ".skills-grid",
            items: ".skill-item",
            threshold: 0.25,
            item_delay: Millis(120),
            style: RevealStyle {
                hidden: VisualState {
                    opacity: "0",
                    transform: "translateY(20px) scale(0.95)",
                },
                shown: VisualState {
                    opacity: "1",
                    transform: "translateY(0) scale(1)",
                },
                transition: "all 0.45s cubic-bezier(.2,.8,.2,1)",
            },
        }
    }
}

/// Per-member delays of a fired group, in member order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StaggerSchedule {
    next: usize,
    count: usize,
    item_delay: Millis,
}

impl StaggerSchedule {
    /// Creates a schedule for `count` members spaced `item_delay` apart.
    #[must_use]
    pub fn new(count: usize, item_delay: Millis) -> Self {
        Self {
            next: 0,
            count,
            item_delay,
        }
    }

    /// Delay of member `index` relative to the trigger.
    #[must_use]
    pub fn delay_of(&self, index: usize) -> Millis {
        self.item_delay
            .saturating_mul(u32::try_from(index).unwrap_or(u32::MAX))
    }
}

impl Iterator for StaggerSchedule {
    type Item = (usize, Millis);

    fn next(&mut self) -> Option<Self::Item> {
        if self.next >= self.count {
            return None;
        }
        let index = self.next;
        self.next += 1;
        Some((index, self.delay_of(index)))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let left = self.count - self.next;
        (left, Some(left))
    }
}

impl ExactSizeIterator for StaggerSchedule {}

/// A container whose members reveal in sequence, once.
#[derive(Clone, Debug)]
pub struct StaggerGroup {
    threshold: f64,
    item_delay: Millis,
    fired: bool,
}

impl StaggerGroup {
    /// Creates an unfired group.
    #[must_use]
    pub fn new(config: &StaggerConfig) -> Self {
        Self {
            threshold: config.threshold,
            item_delay: config.item_delay,
            fired: false,
        }
    }

    /// Feeds a container sample.
    ///
    /// On the first qualifying sample, returns the schedule for `members`
    /// items and marks the group fired; the caller stops observing the
    /// container. Every later call returns `None`.
    pub fn trigger(&mut self, sample: IntersectionSample, members: usize) -> Option<StaggerSchedule> {
        if self.fired || !sample.meets(self.threshold) {
            return None;
        }
        self.fired = true;
        Some(StaggerSchedule::new(members, self.item_delay))
    }

    /// Returns `true` once the group has fired.
    #[must_use]
    pub fn is_fired(&self) -> bool {
        self.fired
    }
}

#[cfg(test)]
mod tests {
    use alloc::vec;
    use alloc::vec::Vec;

    use super::*;

    const HIT: IntersectionSample = IntersectionSample::new(true, 0.4);

    #[test]
    fn members_reveal_in_document_order() {
        let schedule: Vec<_> = StaggerSchedule::new(4, Millis(120)).collect();
        assert_eq!(
            schedule,
            vec![
                (0, Millis(0)),
                (1, Millis(120)),
                (2, Millis(240)),
                (3, Millis(360)),
            ]
        );
    }

    #[test]
    fn group_fires_once() {
        let mut group = StaggerGroup::new(&StaggerConfig::standard());
        assert!(group.trigger(HIT, 3).is_some());
        assert!(group.is_fired());
        assert!(group.trigger(HIT, 3).is_none());
    }

    #[test]
    fn group_waits_for_threshold() {
        let mut group = StaggerGroup::new(&StaggerConfig::standard());
        let shallow = IntersectionSample::new(true, 0.1);
        assert!(group.trigger(shallow, 3).is_none());
        assert!(!group.is_fired());
        let schedule = group.trigger(HIT, 3).expect("threshold met");
        assert_eq!(schedule.len(), 3);
    }

    #[test]
    fn empty_group_still_fires() {
        let mut group = StaggerGroup::new(&StaggerConfig::standard());
        let schedule = group.trigger(HIT, 0).expect("threshold met");
        assert_eq!(schedule.count(), 0);
        assert!(group.is_fired());
    }
}
