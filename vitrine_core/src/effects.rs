// Copyright 2026 the Vitrine Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Small cosmetic effects: header shade, hover lift, section fade-in.

use crate::stagger::StaggerSchedule;
use crate::style::{RevealStyle, StyleTarget, VisualState};
use crate::time::Millis;

/// Configuration for the cosmetic effects.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EffectsConfig {
    /// Scroll offset past which the header switches to its scrolled look.
    pub shade_threshold: f64,
    /// Selector list of elements that lift on hover.
    pub hover_targets: &'static str,
    /// Selector of the sections faded in on load.
    pub sections: &'static str,
    /// Delay between consecutive sections.
    pub section_delay: Millis,
    /// Section fade-in states.
    pub section_style: RevealStyle,
}

impl EffectsConfig {
    /// Shade past 100px, lift portfolio items, fade sections 120ms apart.
    #[must_use]
    pub const fn standard() -> Self {
        Self {
            shade_threshold: 100.0,
            hover_targets: ".portfolio-item, .project-card",
            sections: "section",
            section_delay: Millis(120),
            section_style: RevealStyle {
                hidden: VisualState {
                    opacity: "0",
                    transform: "translateY(30px)",
                },
                shown: VisualState {
                    opacity: "1",
                    transform: "translateY(0)",
                },
                transition: "all 0.8s ease",
            },
        }
    }

    /// Fade-in schedule for `count` sections.
    #[must_use]
    pub fn section_schedule(&self, count: usize) -> StaggerSchedule {
        StaggerSchedule::new(count, self.section_delay)
    }
}

/// Header background and shadow for a scroll position.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum HeaderShade {
    /// Near the top of the page.
    Resting,
    /// Scrolled past the threshold.
    Scrolled,
}

impl HeaderShade {
    /// Picks the shade for `scroll_y`.
    #[must_use]
    pub fn for_scroll(scroll_y: f64, threshold: f64) -> Self {
        if scroll_y > threshold {
            Self::Scrolled
        } else {
            Self::Resting
        }
    }

    /// Writes the shade to the header.
    pub fn apply<T: StyleTarget + ?Sized>(self, header: &T) {
        let (background, shadow) = match self {
            Self::Resting => ("rgba(15, 15, 35, 0.95)", "none"),
            Self::Scrolled => ("rgba(15, 15, 35, 0.98)", "0 2px 20px rgba(0, 0, 0, 0.3)"),
        };
        header.set_style("background", background);
        header.set_style("box-shadow", shadow);
    }
}

/// Pointer state of a hover-lift card.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum HoverLift {
    /// Pointer entered: lift and grow slightly.
    Raised,
    /// Pointer left: settle back.
    Settled,
}

impl HoverLift {
    /// Writes the hover state to `card`.
    pub fn apply<T: StyleTarget + ?Sized>(self, card: &T) {
        match self {
            Self::Raised => {
                card.set_style("transform", "translateY(-10px) scale(1.02)");
                card.set_style("transition", "transform 0.25s ease");
            }
            Self::Settled => card.set_style("transform", "translateY(0) scale(1)"),
        }
    }
}
