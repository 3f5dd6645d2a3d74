// Copyright 2026 the Vitrine Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Scroll-proportional hero drift.

use crate::hero::ViewportClass;
use crate::style::{StyleTarget, px};

/// Configuration for the hero parallax.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ParallaxConfig {
    /// Transform offset per scrolled pixel. Negative values drift upward,
    /// slower than the page scrolls.
    pub rate: f64,
}

impl ParallaxConfig {
    /// Gentle upward drift at 15% of the scroll offset.
    #[must_use]
    pub const fn standard() -> Self {
        Self { rate: -0.15 }
    }
}

/// A transform written to the hero element.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum HeroTransform {
    /// `transform: none`.
    None,
    /// `transform: translateY({0}px)`.
    Drift(f64),
}

impl HeroTransform {
    /// Writes the transform to `target`.
    pub fn apply<T: StyleTarget + ?Sized>(self, target: &T) {
        match self {
            Self::None => target.set_style("transform", "none"),
            Self::Drift(y) => {
                let value = alloc::format!("translateY({})", px(y));
                target.set_style("transform", &value);
            }
        }
    }
}

/// Whether parallax is active, plus the drift rate.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ParallaxState {
    rate: f64,
    enabled: bool,
}

impl ParallaxState {
    /// Creates an enabled parallax state.
    #[must_use]
    pub fn new(config: &ParallaxConfig) -> Self {
        Self {
            rate: config.rate,
            enabled: true,
        }
    }

    /// Updates the enabled flag from a viewport classification.
    ///
    /// Returns the transform that must be forced when this call disables
    /// parallax; `None` when nothing changes on the element.
    pub fn set_class(&mut self, class: ViewportClass) -> Option<HeroTransform> {
        match class {
            ViewportClass::Narrow if self.enabled => {
                self.enabled = false;
                Some(HeroTransform::None)
            }
            ViewportClass::Narrow => None,
            ViewportClass::Wide => {
                self.enabled = true;
                None
            }
        }
    }

    /// Handles a scroll event, classifying first.
    pub fn on_scroll(&mut self, class: ViewportClass, scroll_y: f64) -> Option<HeroTransform> {
        if let Some(forced) = self.set_class(class) {
            return Some(forced);
        }
        self.enabled.then(|| HeroTransform::Drift(scroll_y * self.rate))
    }

    /// Returns `true` while parallax is active.
    #[must_use]
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::FakeElement;

    #[test]
    fn drift_is_proportional_to_scroll() {
        let mut p = ParallaxState::new(&ParallaxConfig::standard());
        assert_eq!(
            p.on_scroll(ViewportClass::Wide, 400.0),
            Some(HeroTransform::Drift(-60.0))
        );
    }

    #[test]
    fn top_of_page_renders_zero() {
        let el = FakeElement::default();
        HeroTransform::Drift(0.0 * -0.15).apply(&el);
        assert_eq!(el.style("transform").as_deref(), Some("translateY(0px)"));
    }

    #[test]
    fn disabling_forces_none_once() {
        let mut p = ParallaxState::new(&ParallaxConfig::standard());
        assert_eq!(p.set_class(ViewportClass::Narrow), Some(HeroTransform::None));
        assert_eq!(p.set_class(ViewportClass::Narrow), None);
        assert_eq!(p.on_scroll(ViewportClass::Narrow, 50.0), None);
        assert!(!p.is_enabled());
    }

    #[test]
    fn re_enables_when_wide_again() {
        let mut p = ParallaxState::new(&ParallaxConfig::standard());
        p.set_class(ViewportClass::Narrow);
        assert_eq!(
            p.on_scroll(ViewportClass::Wide, 100.0),
            Some(HeroTransform::Drift(100.0 * -0.15))
        );
        assert!(p.is_enabled());
    }
}
