// Copyright 2026 the Vitrine Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Hero element coordination.
//!
//! Two behaviors write to the hero element:
//!
//! - **Parallax** ([`ParallaxState`]) drives `transform` from the scroll
//!   offset on wide viewports.
//! - **Header-overlap compensation** ([`HeroOffset`]) forces `padding-top` on
//!   narrow viewports so the fixed header never covers the hero title.
//!
//! Both switch on the same breakpoint and must never be active together.
//! [`HeroCoordinator`] owns both and classifies the viewport once per
//! resize/orientation event, feeding the same [`ViewportClass`] to each. The
//! scroll path re-classifies before every write, so a resize that has not
//! been delivered yet can never leave a parallax transform on a narrow
//! layout.
//!
//! Resize and scroll storms are not debounced; every event recomputes.

mod offset;
mod parallax;

pub use offset::{HeroOffset, HeroOffsetConfig, PaddingAction};
pub use parallax::{HeroTransform, ParallaxConfig, ParallaxState};

use crate::style::{StyleTarget, px};

/// Layout class of the viewport relative to the hero breakpoint.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ViewportClass {
    /// Width at or below the breakpoint: parallax off, padding forced.
    Narrow,
    /// Width above the breakpoint: parallax on, stylesheet padding.
    Wide,
}

impl ViewportClass {
    /// Classifies `width` (CSS pixels) against `breakpoint`.
    #[must_use]
    pub fn classify(width: f64, breakpoint: f64) -> Self {
        if width <= breakpoint {
            Self::Narrow
        } else {
            Self::Wide
        }
    }
}

/// Measurements taken once per resize/orientation event.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HeroMetrics {
    /// `window.innerWidth`.
    pub viewport_width: f64,
    /// Header `offsetHeight`, or `0.0` without a header.
    pub header_height: f64,
    /// Computed `padding-top` of the hero in pixels.
    pub computed_padding: f64,
    /// Whether the hero currently carries an inline `padding-top`.
    pub has_inline_padding: bool,
}

/// Style writes produced by one recompute.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HeroUpdate {
    /// Classification both decisions were made from.
    pub class: ViewportClass,
    /// Transform to write, if any.
    pub transform: Option<HeroTransform>,
    /// Padding change.
    pub padding: PaddingAction,
}

impl HeroUpdate {
    /// Applies the update to the hero element.
    pub fn apply<T: StyleTarget + ?Sized>(&self, hero: &T) {
        match self.padding {
            PaddingAction::Force(value) => hero.set_style("padding-top", &px(value)),
            PaddingAction::Clear => hero.remove_style("padding-top"),
            PaddingAction::Keep => {}
        }
        if let Some(transform) = self.transform {
            transform.apply(hero);
        }
    }
}

/// Shared breakpoint configuration plus both hero behaviors.
#[derive(Clone, Debug)]
pub struct HeroCoordinator {
    breakpoint: f64,
    parallax: ParallaxState,
    offset: HeroOffset,
}

impl HeroCoordinator {
    /// Creates a coordinator. Parallax starts enabled until the first
    /// recompute says otherwise.
    #[must_use]
    pub fn new(breakpoint: f64, parallax: &ParallaxConfig, offset: &HeroOffsetConfig) -> Self {
        Self {
            breakpoint,
            parallax: ParallaxState::new(parallax),
            offset: HeroOffset::new(offset),
        }
    }

    /// Classifies `width` against the shared breakpoint.
    #[must_use]
    pub fn classify(&self, width: f64) -> ViewportClass {
        ViewportClass::classify(width, self.breakpoint)
    }

    /// Recomputes both behaviors from one set of measurements.
    ///
    /// Called at start-up and on every resize and orientation change.
    pub fn recompute(&mut self, metrics: HeroMetrics) -> HeroUpdate {
        let class = self.classify(metrics.viewport_width);
        self.parallax.set_class(class);
        let padding = self.offset.plan(
            class,
            metrics.header_height,
            metrics.computed_padding,
            metrics.has_inline_padding,
        );
        let transform = match class {
            ViewportClass::Narrow => Some(HeroTransform::None),
            ViewportClass::Wide => None,
        };
        HeroUpdate {
            class,
            transform,
            padding,
        }
    }

    /// Handles a scroll event.
    ///
    /// `viewport_width` is read in the same handler, so the parallax flag is
    /// brought up to date before any transform is produced.
    pub fn on_scroll(&mut self, viewport_width: f64, scroll_y: f64) -> Option<HeroTransform> {
        let class = self.classify(viewport_width);
        self.parallax.on_scroll(class, scroll_y)
    }

    /// Returns `true` while parallax is active.
    #[must_use]
    pub fn parallax_enabled(&self) -> bool {
        self.parallax.is_enabled()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::PageConfig;
    use crate::testing::FakeElement;

    fn coordinator() -> HeroCoordinator {
        let config = PageConfig::standard();
        HeroCoordinator::new(config.breakpoint, &config.parallax, &config.hero_offset)
    }

    fn metrics(width: f64) -> HeroMetrics {
        HeroMetrics {
            viewport_width: width,
            header_height: 64.0,
            computed_padding: 40.0,
            has_inline_padding: false,
        }
    }

    #[test]
    fn breakpoint_is_inclusive_for_narrow() {
        assert_eq!(ViewportClass::classify(768.0, 768.0), ViewportClass::Narrow);
        assert_eq!(ViewportClass::classify(769.0, 768.0), ViewportClass::Wide);
    }

    #[test]
    fn wide_viewport_scrolls_with_parallax() {
        let mut hero = coordinator();
        let el = FakeElement::default();
        hero.recompute(metrics(769.0)).apply(&el);

        let t = hero.on_scroll(769.0, 200.0).expect("parallax active");
        t.apply(&el);
        assert_eq!(el.style("transform").as_deref(), Some("translateY(-30px)"));
        assert_eq!(el.style("padding-top"), None);
    }

    #[test]
    fn narrow_viewport_forces_none_and_ignores_scroll() {
        let mut hero = coordinator();
        let el = FakeElement::default();
        hero.recompute(metrics(768.0)).apply(&el);
        assert_eq!(el.style("transform").as_deref(), Some("none"));
        assert_eq!(el.style("padding-top").as_deref(), Some("84px"));

        let writes = el.writes();
        for y in [0.0, 150.0, 900.0] {
            if let Some(t) = hero.on_scroll(768.0, y) {
                t.apply(&el);
            }
        }
        assert_eq!(el.writes(), writes, "scroll must not write while narrow");
        assert_eq!(el.style("transform").as_deref(), Some("none"));
    }

    #[test]
    fn scroll_guard_catches_undelivered_resize() {
        let mut hero = coordinator();
        let el = FakeElement::default();
        hero.recompute(metrics(1200.0)).apply(&el);
        hero.on_scroll(1200.0, 100.0).expect("parallax active").apply(&el);

        // Width shrank but no resize event was delivered yet.
        let t = hero.on_scroll(700.0, 300.0);
        assert_eq!(t, Some(HeroTransform::None));
        assert!(!hero.parallax_enabled());
        assert_eq!(hero.on_scroll(700.0, 400.0), None);
    }

    #[test]
    fn growing_past_breakpoint_clears_forced_padding() {
        let mut hero = coordinator();
        let el = FakeElement::default();
        hero.recompute(metrics(600.0)).apply(&el);
        assert!(el.style("padding-top").is_some());

        let update = hero.recompute(HeroMetrics {
            has_inline_padding: true,
            computed_padding: 84.0,
            ..metrics(1024.0)
        });
        assert_eq!(update.class, ViewportClass::Wide);
        assert_eq!(update.padding, PaddingAction::Clear);
        assert_eq!(update.transform, None);
        update.apply(&el);
        assert_eq!(el.style("padding-top"), None);
        assert!(hero.parallax_enabled());
    }

    #[test]
    fn both_behaviors_never_apply_together() {
        let mut hero = coordinator();
        for width in [320.0, 767.0, 768.0, 769.0, 1440.0] {
            let update = hero.recompute(metrics(width));
            match update.class {
                ViewportClass::Narrow => {
                    assert_eq!(update.transform, Some(HeroTransform::None));
                    assert!(!hero.parallax_enabled());
                }
                ViewportClass::Wide => {
                    assert!(
                        !matches!(update.padding, PaddingAction::Force(_)),
                        "wide layouts never force padding"
                    );
                    assert!(hero.parallax_enabled());
                }
            }
        }
    }
}
